use crate::cli::commands::fields::check_tax_id;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::RecordId;
use crate::store::RecordStore;
use crate::ui::messages::{confirm, info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del {
        id,
        force,
        expect_tax_id,
    } = cmd
    {
        let mut store = RecordStore::open(cfg.data_path())?;
        let id = RecordId(*id);

        let record = store.get(id).ok_or(AppError::RecordNotFound(id.0))?;
        check_tax_id(id, record, expect_tax_id.as_deref())?;

        //
        // Confirmation prompt
        //
        if cfg.confirm_delete && !*force {
            let prompt = format!(
                "Delete record #{} ({}, {})? This action is irreversible.",
                id, record.name, record.tax_id
            );
            if !confirm(&prompt)? {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        let removed = store.delete(id)?;
        success(format!(
            "Record #{} ({}, {}) has been deleted. Rows below it moved up by one.",
            id, removed.name, removed.tax_id
        ));
    }

    Ok(())
}
