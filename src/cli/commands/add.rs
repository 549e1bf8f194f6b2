use crate::cli::commands::fields::merge;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::Record;
use crate::store::RecordStore;
use crate::ui::messages::{success, warning};

/// Append a new record to the table.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { fields } = cmd {
        // validate input before touching the file
        let record = merge(Record::default(), fields)?;

        if record.name.trim().is_empty() {
            warning("Adding a record without a name.");
        }

        let mut store = RecordStore::open(cfg.data_path())?;
        let id = store.append(record)?;

        success(format!(
            "Record #{} added to {}",
            id,
            store.path().display()
        ));
    }

    Ok(())
}
