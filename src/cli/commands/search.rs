use crate::cli::commands::render::records_table;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::RecordStore;
use crate::ui::messages::{header, info};

/// Look up records by CPF/CNPJ and print them untruncated.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Search { tax_id } = cmd {
        let store = RecordStore::open(cfg.data_path())?;
        let hits = store.find_by_tax_id(tax_id);

        if hits.is_empty() {
            info(format!("No records found for CPF/CNPJ {}", tax_id.trim()));
            return Ok(());
        }

        header(format!("Resultados para {}", tax_id.trim()));
        let table = records_table(hits.iter().map(|m| (m.id, m.record)), None);
        print!("{}", table.render());
        println!("{} match(es)", hits.len());
    }

    Ok(())
}
