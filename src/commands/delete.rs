use anyhow::Result;
use dialoguer::Confirm;
use owo_colors::OwoColorize;
use std::path::Path;

use crate::store;

pub fn run(dir: &Path, id: String, force: bool) -> Result<()> {
    // Read first so an unknown id fails before anyone gets prompted.
    let record = store::get(dir, &id)?;

    // Confirm unless --force; cancelling performs no storage operation.
    if !force {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Delete \"{}\"? This cannot be undone",
                record.trip_name
            ))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "  Cancelled".dimmed());
            return Ok(());
        }
    }

    store::delete(dir, &id)?;
    println!("{}", format!("  Deleted: {}", record.trip_name).green());

    Ok(())
}
