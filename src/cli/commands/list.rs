use crate::cli::commands::render::records_table;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::RecordStore;
use crate::ui::messages::{header, info};

pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = RecordStore::open(cfg.data_path())?;

    if store.is_empty() {
        info(format!(
            "No records yet in {}. Use `gerenciador add` to create one.",
            store.path().display()
        ));
        return Ok(());
    }

    header("Tabela de clientes");
    let table = records_table(store.records(), Some(cfg.truncate_width));
    print!("{}", table.render());
    println!("{} record(s)", store.len());

    Ok(())
}
