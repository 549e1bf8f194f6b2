use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::RecordStore;
use crate::ui::messages::success;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the CSV data file, header only, when it does not exist yet
pub fn handle(cli: &Cli) -> AppResult<()> {
    let data_path = Config::init_all(cli.file.clone(), cli.test)?;

    if !cli.test {
        success(format!("Config file: {}", Config::config_file().display()));
    }

    let store = RecordStore::open(&data_path)?;

    success(format!(
        "Data file:   {} ({} record(s))",
        store.path().display(),
        store.len()
    ));

    Ok(())
}
