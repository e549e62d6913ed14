//! Regrouping multi-column walk results into per-row records.
//!
//! Walking N columns of an SNMP table yields N flat lists of varbinds, each
//! keyed by the same row index (the OID suffix). [`walk_table`] reassembles
//! them into one [`Record`] per index, with typed field accessors on top of
//! the raw value strings.

use std::collections::{BTreeMap, HashMap, btree_map};

use crate::error::{Error, Result};
use crate::snmp::Session;

/// One column of an SNMP table: the field name used to address it in a
/// [`Record`], and the column's base OID.
#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub name: &'static str,
    pub oid: &'static str,
}

/// The fields of one table row, keyed by column name.
#[derive(Debug, Default)]
pub struct Record {
    fields: HashMap<&'static str, String>,
}

impl Record {
    /// Raw value of a column, if the walk returned one for this row.
    pub fn text(&self, column: &'static str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    /// Raw value of a column that must be present.
    pub fn require(&self, column: &'static str) -> Result<&str> {
        self.text(column).ok_or(Error::MissingColumn(column))
    }

    /// Integer value of a column that must be present and numeric.
    pub fn int(&self, column: &'static str) -> Result<i64> {
        let raw = self.require(column)?;
        raw.trim()
            .parse::<i64>()
            .map_err(|_| Error::malformed(column, raw))
    }

    fn insert(&mut self, column: &'static str, value: String) {
        self.fields.insert(column, value);
    }
}

/// A reassembled table: row index → record. Iteration is in index order.
#[derive(Debug, Default)]
pub struct Table {
    records: BTreeMap<String, Record>,
}

impl Table {
    /// Number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record for a given row index.
    pub fn get(&self, index: &str) -> Option<&Record> {
        self.records.get(index)
    }

    /// Iterate over `(index, record)` pairs in index order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, Record> {
        self.records.iter()
    }

    /// Insert one cell, creating the row if needed.
    pub fn insert(&mut self, index: impl Into<String>, column: &'static str, value: String) {
        self.records
            .entry(index.into())
            .or_default()
            .insert(column, value);
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = (&'a String, &'a Record);
    type IntoIter = btree_map::Iter<'a, String, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Walk every column and regroup the results by row index.
pub async fn walk_table<S: Session>(session: &S, columns: &[Column]) -> Result<Table> {
    let mut table = Table::default();
    for column in columns {
        for row in session.walk(column.oid).await? {
            table.insert(row.suffix, column.name, row.value);
        }
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> Record {
        let mut record = Record::default();
        record.insert("state", "6".to_string());
        record.insert("name", "10.0.0.1".to_string());
        record.insert("junk", "established".to_string());
        record
    }

    #[test]
    fn text_and_require() {
        let record = sample_record();
        assert_eq!(record.text("name"), Some("10.0.0.1"));
        assert_eq!(record.require("name").unwrap(), "10.0.0.1");
        assert!(matches!(
            record.require("missing"),
            Err(Error::MissingColumn("missing"))
        ));
    }

    #[test]
    fn int_parses_and_trims() {
        let mut record = sample_record();
        record.insert("padded", "  4 ".to_string());
        assert_eq!(record.int("state").unwrap(), 6);
        assert_eq!(record.int("padded").unwrap(), 4);
    }

    #[test]
    fn int_rejects_non_numeric() {
        let record = sample_record();
        assert!(matches!(
            record.int("junk"),
            Err(Error::Malformed { column: "junk", .. })
        ));
    }

    #[test]
    fn table_groups_by_index() {
        let mut table = Table::default();
        table.insert("1.4.10.0.0.1", "state", "6".to_string());
        table.insert("1.4.10.0.0.2", "state", "1".to_string());
        table.insert("1.4.10.0.0.1", "as", "64512".to_string());

        assert_eq!(table.len(), 2);
        let peer = table.get("1.4.10.0.0.1").unwrap();
        assert_eq!(peer.int("state").unwrap(), 6);
        assert_eq!(peer.int("as").unwrap(), 64512);

        // BTreeMap keeps index order stable
        let indexes: Vec<&str> = table.iter().map(|(i, _)| i.as_str()).collect();
        assert_eq!(indexes, vec!["1.4.10.0.0.1", "1.4.10.0.0.2"]);
    }
}
