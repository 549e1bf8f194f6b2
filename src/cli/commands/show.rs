use crate::cli::commands::render::record_details;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::RecordId;
use crate::store::RecordStore;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { id } = cmd {
        let store = RecordStore::open(cfg.data_path())?;
        let id = RecordId(*id);
        let record = store.get(id).ok_or(AppError::RecordNotFound(id.0))?;
        print!("{}", record_details(id, record));
    }
    Ok(())
}
