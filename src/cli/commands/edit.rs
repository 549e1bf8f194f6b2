use crate::cli::commands::fields::{check_tax_id, merge};
use crate::cli::commands::render::record_details;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::RecordId;
use crate::store::RecordStore;
use crate::ui::messages::{info, success};

/// Overwrite the fields given on the command line, keeping the rest.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        fields,
        expect_tax_id,
    } = cmd
    {
        let mut store = RecordStore::open(cfg.data_path())?;
        let id = RecordId(*id);

        let current = store
            .get(id)
            .cloned()
            .ok_or(AppError::RecordNotFound(id.0))?;
        check_tax_id(id, &current, expect_tax_id.as_deref())?;
        let edited = merge(current.clone(), fields)?;

        if edited == current {
            info(format!("Record #{} unchanged.", id));
            return Ok(());
        }

        store.update(id, edited.clone())?;

        success(format!("Record #{} updated.", id));
        print!("{}", record_details(id, &edited));
    }

    Ok(())
}
