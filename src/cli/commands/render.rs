use crate::models::{HEADERS, Record, RecordId};
use crate::utils::formatting::bold;
use crate::utils::table::Table;
use crate::utils::{flatten, truncate};

/// Build the `ID + seven columns` table. Cells are always kept on one line;
/// `width` also truncates them when set.
pub(crate) fn records_table<'a, I>(rows: I, width: Option<usize>) -> Table
where
    I: IntoIterator<Item = (RecordId, &'a Record)>,
{
    let mut headers = vec!["ID"];
    headers.extend(HEADERS);
    let mut table = Table::new(&headers);

    for (id, record) in rows {
        let mut row = vec![id.to_string()];
        row.extend(record.fields().iter().map(|v| match width {
            Some(w) => truncate(v, w),
            None => flatten(v),
        }));
        table.add_row(row);
    }

    table
}

/// One `Header: value` line per field.
pub(crate) fn record_details(id: RecordId, record: &Record) -> String {
    let label_width = HEADERS.iter().map(|h| h.chars().count()).max().unwrap_or(0);
    let mut out = format!("{} {}\n", bold("ID"), id);
    for (header, value) in HEADERS.iter().zip(record.fields()) {
        let pad = label_width - header.chars().count();
        out.push_str(&format!("{}{} : {}\n", bold(header), " ".repeat(pad), value));
    }
    out
}
