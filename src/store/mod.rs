//! CSV-backed record store.
//!
//! The whole table lives in memory and is rewritten to disk after every
//! mutation. Rows can be addressed by position (their current offset in the
//! table) or by the [`RecordId`] the store assigned when the row was loaded or
//! appended.

use crate::errors::{AppError, AppResult};
use crate::models::record::normalize_tax_id;
use crate::models::{HEADERS, Record, RecordId};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Clone)]
struct Row {
    id: RecordId,
    record: Record,
}

/// A search hit: where the row currently sits and what it holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match<'a> {
    pub position: usize,
    pub id: RecordId,
    pub record: &'a Record,
}

pub struct RecordStore {
    path: PathBuf,
    rows: Vec<Row>,
    next_id: u64,
}

impl RecordStore {
    /// Open the data file, creating it (header only) when missing.
    pub fn open<P: AsRef<Path>>(path: P) -> AppResult<Self> {
        let mut store = Self {
            path: path.as_ref().to_path_buf(),
            rows: Vec::new(),
            next_id: 1,
        };
        store.load()?;
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows in table order.
    pub fn records(&self) -> impl Iterator<Item = (RecordId, &Record)> {
        self.rows.iter().map(|r| (r.id, &r.record))
    }

    /// Replace the in-memory table with the file contents.
    pub fn load(&mut self) -> AppResult<()> {
        let mut rdr = match csv::Reader::from_path(&self.path) {
            Ok(rdr) => rdr,
            Err(e) if is_not_found(&e) => {
                self.rows.clear();
                if let Some(parent) = self.path.parent()
                    && !parent.as_os_str().is_empty()
                {
                    fs::create_dir_all(parent)?;
                }
                self.save()?;
                info!(path = %self.path.display(), "new CSV created");
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        let mut rows = Vec::new();
        for result in rdr.deserialize::<Record>() {
            let record = result?;
            rows.push(Row {
                id: self.issue_id(),
                record,
            });
        }
        self.rows = rows;

        info!(path = %self.path.display(), rows = self.rows.len(), "CSV loaded");
        Ok(())
    }

    /// Overwrite the data file with the header and every row.
    pub fn save(&self) -> AppResult<()> {
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.path)?;

        wtr.write_record(HEADERS)?;
        for row in &self.rows {
            wtr.serialize(&row.record)?;
        }
        wtr.flush()?;

        debug!(path = %self.path.display(), rows = self.rows.len(), "CSV saved");
        Ok(())
    }

    /// Add a row at the end of the table.
    pub fn append(&mut self, record: Record) -> AppResult<RecordId> {
        let id = self.issue_id();
        self.rows.push(Row { id, record });
        self.save()?;
        info!(%id, "record appended");
        Ok(id)
    }

    /// Overwrite every field of the row at `position`; the row keeps its id.
    pub fn update_at(&mut self, position: usize, record: Record) -> AppResult<()> {
        let len = self.rows.len();
        let row = self
            .rows
            .get_mut(position)
            .ok_or(AppError::PositionOutOfRange { position, len })?;
        row.record = record;
        let id = row.id;
        self.save()?;
        info!(%id, position, "record updated");
        Ok(())
    }

    /// Remove the row at `position`. Later rows move up by one.
    pub fn delete_at(&mut self, position: usize) -> AppResult<Record> {
        let len = self.rows.len();
        if position >= len {
            return Err(AppError::PositionOutOfRange { position, len });
        }
        let row = self.rows.remove(position);
        self.save()?;
        info!(id = %row.id, position, "record deleted");
        Ok(row.record)
    }

    /// Every row whose tax ID equals `query` once `.` and `-` are removed
    /// from both sides.
    pub fn find_by_tax_id(&self, query: &str) -> Vec<Match<'_>> {
        let wanted = normalize_tax_id(query.trim());
        let hits: Vec<Match<'_>> = self
            .rows
            .iter()
            .enumerate()
            .filter(|(_, row)| row.record.normalized_tax_id() == wanted)
            .map(|(position, row)| Match {
                position,
                id: row.id,
                record: &row.record,
            })
            .collect();

        debug!(query = %wanted, hits = hits.len(), "tax id search");
        hits
    }

    pub fn position_of(&self, id: RecordId) -> Option<usize> {
        self.rows.iter().position(|r| r.id == id)
    }

    pub fn get(&self, id: RecordId) -> Option<&Record> {
        self.rows.iter().find(|r| r.id == id).map(|r| &r.record)
    }

    pub fn update(&mut self, id: RecordId, record: Record) -> AppResult<()> {
        let position = self.require(id)?;
        self.update_at(position, record)
    }

    pub fn delete(&mut self, id: RecordId) -> AppResult<Record> {
        let position = self.require(id)?;
        self.delete_at(position)
    }

    fn require(&self, id: RecordId) -> AppResult<usize> {
        self.position_of(id).ok_or(AppError::RecordNotFound(id.0))
    }

    fn issue_id(&mut self) -> RecordId {
        let id = RecordId(self.next_id);
        self.next_id += 1;
        id
    }
}

fn is_not_found(err: &csv::Error) -> bool {
    matches!(err.kind(), csv::ErrorKind::Io(e) if e.kind() == io::ErrorKind::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const HEADER_LINE: &str =
        "Nome,CPF/CNPJ,Data de nascimento,Telefone,Número do processo,Tipo do processo,Descrição";

    fn record(name: &str, tax_id: &str) -> Record {
        Record {
            name: name.into(),
            tax_id: tax_id.into(),
            birthdate: "01/02/1990".into(),
            phone: "(11) 99999-0000".into(),
            process_number: "0001234-56.2024.8.26.0100".into(),
            process_type: "Civil".into(),
            description: "Ação de cobrança".into(),
        }
    }

    fn raw_lines(store: &RecordStore) -> Vec<String> {
        fs::read_to_string(store.path())
            .unwrap()
            .lines()
            .map(String::from)
            .collect()
    }

    #[test]
    fn missing_file_is_created_with_header() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("tabela_clientes.csv");

        let store = RecordStore::open(&path).unwrap();

        assert!(store.is_empty());
        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap().trim_end(), HEADER_LINE);
    }

    #[test]
    fn append_then_reload_round_trips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("t.csv");

        let mut store = RecordStore::open(&path).unwrap();
        store.append(record("Ana", "123.456.789-00")).unwrap();

        let reloaded = RecordStore::open(&path).unwrap();
        let rows: Vec<&Record> = reloaded.records().map(|(_, r)| r).collect();
        assert_eq!(rows, vec![&record("Ana", "123.456.789-00")]);
    }

    #[test]
    fn awkward_values_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("t.csv");

        let mut r = record("Silva, João \"Jota\"", "");
        r.description = "linha 1\nlinha 2".into();

        let mut store = RecordStore::open(&path).unwrap();
        store.append(r.clone()).unwrap();

        let reloaded = RecordStore::open(&path).unwrap();
        assert_eq!(reloaded.records().next().map(|(_, r)| r), Some(&r));
    }

    #[test]
    fn delete_at_shifts_later_rows() {
        let dir = tempdir().unwrap();
        let mut store = RecordStore::open(dir.path().join("t.csv")).unwrap();
        for name in ["A", "B", "C"] {
            store.append(record(name, "1")).unwrap();
        }

        let removed = store.delete_at(1).unwrap();

        assert_eq!(removed.name, "B");
        let names: Vec<&str> = store.records().map(|(_, r)| r.name.as_str()).collect();
        assert_eq!(names, ["A", "C"]);

        let reloaded = RecordStore::open(store.path()).unwrap();
        assert_eq!(reloaded.len(), 2);
    }

    #[test]
    fn update_at_touches_only_that_row() {
        let dir = tempdir().unwrap();
        let mut store = RecordStore::open(dir.path().join("t.csv")).unwrap();
        for name in ["A", "B", "C"] {
            store.append(record(name, "1")).unwrap();
        }
        let before = raw_lines(&store);
        let id_before = store.records().nth(1).map(|(id, _)| id);

        store.update_at(1, record("Bia", "2")).unwrap();

        let after = raw_lines(&store);
        assert_eq!(before.len(), after.len());
        assert_eq!(before[0], after[0]);
        assert_eq!(before[1], after[1]);
        assert_ne!(before[2], after[2]);
        assert_eq!(before[3], after[3]);
        assert_eq!(store.records().nth(1).map(|(id, _)| id), id_before);
    }

    #[test]
    fn out_of_range_position_is_an_error() {
        let dir = tempdir().unwrap();
        let mut store = RecordStore::open(dir.path().join("t.csv")).unwrap();
        store.append(record("A", "1")).unwrap();
        let before = raw_lines(&store);

        assert!(matches!(
            store.delete_at(5),
            Err(AppError::PositionOutOfRange { position: 5, len: 1 })
        ));
        assert!(matches!(
            store.update_at(1, record("X", "2")),
            Err(AppError::PositionOutOfRange { position: 1, len: 1 })
        ));
        assert_eq!(raw_lines(&store), before);
    }

    #[test]
    fn search_normalizes_both_sides() {
        let dir = tempdir().unwrap();
        let mut store = RecordStore::open(dir.path().join("t.csv")).unwrap();
        store.append(record("A", "99999999999")).unwrap();
        store.append(record("B", "12345678900")).unwrap();
        store.append(record("C", "123.456.789-00")).unwrap();

        let hits = store.find_by_tax_id("123.456.789-00");
        let positions: Vec<usize> = hits.iter().map(|m| m.position).collect();
        assert_eq!(positions, [1, 2]);

        let hits = store.find_by_tax_id("  12345678900 ");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].record.name, "B");

        assert!(store.find_by_tax_id("000").is_empty());
    }

    #[test]
    fn ids_survive_deletes_and_are_not_reused() {
        let dir = tempdir().unwrap();
        let mut store = RecordStore::open(dir.path().join("t.csv")).unwrap();
        let a = store.append(record("A", "1")).unwrap();
        let b = store.append(record("B", "2")).unwrap();
        let c = store.append(record("C", "3")).unwrap();

        store.delete(a).unwrap();

        assert_eq!(store.position_of(b), Some(0));
        assert_eq!(store.position_of(c), Some(1));
        assert_eq!(store.get(c).map(|r| r.name.as_str()), Some("C"));

        let d = store.append(record("D", "4")).unwrap();
        assert!(d > c);
        assert!(matches!(store.delete(a), Err(AppError::RecordNotFound(_))));
    }

    #[test]
    fn update_by_id_follows_the_row() {
        let dir = tempdir().unwrap();
        let mut store = RecordStore::open(dir.path().join("t.csv")).unwrap();
        let a = store.append(record("A", "1")).unwrap();
        let b = store.append(record("B", "2")).unwrap();
        store.delete(a).unwrap();

        store.update(b, record("Bruna", "2")).unwrap();

        let reloaded = RecordStore::open(store.path()).unwrap();
        let names: Vec<&str> = reloaded.records().map(|(_, r)| r.name.as_str()).collect();
        assert_eq!(names, ["Bruna"]);
    }

    #[test]
    fn loaded_rows_get_ids_in_file_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("t.csv");
        fs::write(
            &path,
            format!("{HEADER_LINE}\nAna,1,,,,Civil,\nBeto,2,,,,Penal,\n"),
        )
        .unwrap();

        let store = RecordStore::open(&path).unwrap();
        let ids: Vec<u64> = store.records().map(|(id, _)| id.0).collect();
        assert_eq!(ids, [1, 2]);
        assert_eq!(store.get(RecordId(2)).map(|r| r.name.as_str()), Some("Beto"));
    }

    #[test]
    fn malformed_file_propagates() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("t.csv");
        fs::write(&path, format!("{HEADER_LINE}\nonly,two\n")).unwrap();

        assert!(matches!(RecordStore::open(&path), Err(AppError::Csv(_))));
    }
}
