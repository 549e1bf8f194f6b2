use serde::{Deserialize, Serialize};
use std::fmt;

/// Column headers of the data file, in on-disk order.
pub const HEADERS: [&str; 7] = [
    "Nome",
    "CPF/CNPJ",
    "Data de nascimento",
    "Telefone",
    "Número do processo",
    "Tipo do processo",
    "Descrição",
];

/// One row of the client/case table. Every field is kept as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "Nome")]
    pub name: String,
    #[serde(rename = "CPF/CNPJ")]
    pub tax_id: String,
    #[serde(rename = "Data de nascimento")]
    pub birthdate: String,
    #[serde(rename = "Telefone")]
    pub phone: String,
    #[serde(rename = "Número do processo")]
    pub process_number: String,
    #[serde(rename = "Tipo do processo")]
    pub process_type: String,
    #[serde(rename = "Descrição")]
    pub description: String,
}

impl Record {
    /// Field values in the same order as [`HEADERS`].
    pub fn fields(&self) -> [&str; 7] {
        [
            &self.name,
            &self.tax_id,
            &self.birthdate,
            &self.phone,
            &self.process_number,
            &self.process_type,
            &self.description,
        ]
    }

    /// Tax ID with `.` and `-` removed.
    pub fn normalized_tax_id(&self) -> String {
        normalize_tax_id(&self.tax_id)
    }
}

/// Strip the punctuation allowed in CPF/CNPJ formatting.
pub fn normalize_tax_id(raw: &str) -> String {
    raw.chars().filter(|c| *c != '.' && *c != '-').collect()
}

/// Identifier handed out by the store when a row enters memory.
/// Unlike a position it does not move when other rows are deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordId(pub u64);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_dots_and_hyphens() {
        assert_eq!(normalize_tax_id("123.456.789-00"), "12345678900");
        assert_eq!(normalize_tax_id("12.345.678/0001-90"), "12345678/000190");
        assert_eq!(normalize_tax_id("12345678900"), "12345678900");
    }

    #[test]
    fn fields_follow_header_order() {
        let r = Record {
            name: "Ana".into(),
            tax_id: "1".into(),
            birthdate: "2".into(),
            phone: "3".into(),
            process_number: "4".into(),
            process_type: "Civil".into(),
            description: "6".into(),
        };
        assert_eq!(r.fields(), ["Ana", "1", "2", "3", "4", "Civil", "6"]);
    }
}
