mod commands;
mod config;
mod datetime;
mod record;
mod render;
mod store;
mod weather;

use anyhow::Result;
use clap::{Parser, Subcommand};
use config::Config;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tripdir")]
#[command(about = "Plan trips in a local itinerary directory, with weather forecasts and a calendar view")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new itinerary
    New {
        /// Trip name (prompted if omitted)
        trip_name: Option<String>,

        /// Destination; also used for the weather lookup
        #[arg(short, long)]
        destination: Option<String>,

        /// Scheduled date/time (e.g. "2026-03-20T15:00" or "sat 9am")
        #[arg(short, long)]
        when: Option<String>,

        /// Planned activities
        #[arg(short, long)]
        activities: Option<String>,
    },
    /// List all itineraries, grouped by day
    List {
        /// Also show activities, timestamps and forecast details
        #[arg(short, long)]
        verbose: bool,
    },
    /// Edit an existing itinerary
    Edit {
        /// Record id (shown by `list`)
        id: String,

        #[arg(long)]
        trip_name: Option<String>,

        #[arg(short, long)]
        destination: Option<String>,

        #[arg(short, long)]
        when: Option<String>,

        #[arg(short, long)]
        activities: Option<String>,
    },
    /// Delete an itinerary (asks for confirmation)
    Delete {
        /// Record id (shown by `list`)
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
    /// Show a month calendar of scheduled trips
    Calendar {
        /// Month to show (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,

        /// Show the detail panel for a single day (YYYY-MM-DD)
        #[arg(short, long)]
        day: Option<String>,
    },
    /// Look up current weather and forecast for a location
    Weather { location: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;
    let dir = config.data_path();

    match cli.command {
        Commands::New {
            trip_name,
            destination,
            when,
            activities,
        } => {
            commands::new::run(
                &dir,
                config.weather_client(),
                trip_name,
                destination,
                when,
                activities,
            )
            .await
        }
        Commands::List { verbose } => commands::list::run(&dir, verbose),
        Commands::Edit {
            id,
            trip_name,
            destination,
            when,
            activities,
        } => {
            commands::edit::run(
                &dir,
                config.weather_client(),
                id,
                trip_name,
                destination,
                when,
                activities,
            )
            .await
        }
        Commands::Delete { id, force } => commands::delete::run(&dir, id, force),
        Commands::Calendar { month, day } => commands::calendar::run(&dir, month, day),
        Commands::Weather { location } => {
            commands::weather::run(config.weather_client(), location).await
        }
    }
}
