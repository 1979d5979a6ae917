//! Config command implementation.

use super::CliError;
use ricochet::Settings;
use std::path::PathBuf;

/// Execute the config command.
///
/// # Errors
///
/// Returns an error if the settings cannot be written.
pub(crate) fn execute(out: Option<PathBuf>) -> Result<(), CliError> {
    let settings = Settings::default();
    match out {
        Some(path) => {
            settings.save(&path)?;
            println!("Settings written to: {}", path.display());
        }
        None => println!("{}", settings.to_json()?),
    }
    Ok(())
}
