use crate::cli::parser::RecordFields;
use crate::errors::{AppError, AppResult};
use crate::models::record::normalize_tax_id;
use crate::models::{ProcessType, Record, RecordId};

/// Overlay the given options on `base`. Fields left unset keep the base value.
pub(crate) fn merge(base: Record, fields: &RecordFields) -> AppResult<Record> {
    let process_type = match &fields.process_type {
        Some(code) => ProcessType::from_code(code)
            .map(|t| t.label().to_string())
            .ok_or_else(|| {
                AppError::InvalidProcessType(format!(
                    "'{}'. Use one of: {}",
                    code,
                    ProcessType::ALL.map(|t| t.label()).join(", ")
                ))
            })?,
        None => base.process_type,
    };

    Ok(Record {
        name: pick(&fields.name, base.name),
        tax_id: pick(&fields.tax_id, base.tax_id),
        birthdate: pick(&fields.birthdate, base.birthdate),
        phone: pick(&fields.phone, base.phone),
        process_number: pick(&fields.process_number, base.process_number),
        process_type,
        description: pick(&fields.description, base.description),
    })
}

/// Guard against acting on a row that moved since the user last listed it.
pub(crate) fn check_tax_id(
    id: RecordId,
    record: &Record,
    expected: Option<&str>,
) -> AppResult<()> {
    match expected {
        Some(want) if normalize_tax_id(want.trim()) != record.normalized_tax_id() => {
            Err(AppError::TaxIdMismatch {
                id: id.0,
                expected: want.trim().to_string(),
                found: record.tax_id.clone(),
            })
        }
        _ => Ok(()),
    }
}

fn pick(given: &Option<String>, current: String) -> String {
    given.clone().unwrap_or(current)
}
