use crate::catalog::CSV_COLUMN_PREFIX;
use crate::chain::FixChain;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// One configured column fix within a campaign's CSV configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnFix {
    pub column_name: String,
    pub chain: FixChain,
}

impl ColumnFix {
    pub fn new(column_name: impl Into<String>, chain: FixChain) -> Self {
        Self {
            column_name: column_name.into(),
            chain,
        }
    }
}

/// A campaign's CSV configuration: the ordered collection of column fixes
/// plus the columns detected in the uploaded lead list.
///
/// Column names are unique after alias normalization — `title` and
/// `csv_title` are the same logical column. Insertion order is preserved on
/// update; every mutation stamps `last_updated`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsvConfig {
    pub column_fixes: Vec<ColumnFix>,
    pub detected_columns: Vec<String>,
    pub last_updated: Option<u64>,
}

impl CsvConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the fix for the same logical column in place, or appends.
    pub fn add_or_update(&mut self, fix: ColumnFix) {
        match self
            .column_fixes
            .iter()
            .find_position(|existing| same_column(&existing.column_name, &fix.column_name))
        {
            Some((idx, _)) => self.column_fixes[idx] = fix,
            None => self.column_fixes.push(fix),
        }
        self.touch();
    }

    /// Applies `add_or_update` for each fix, in input order.
    pub fn add_or_update_many(&mut self, fixes: impl IntoIterator<Item = ColumnFix>) {
        for fix in fixes {
            self.add_or_update(fix);
        }
        self.touch();
    }

    /// Drops the fix for the given column. No-op when nothing matches.
    pub fn remove(&mut self, column_name: &str) {
        self.column_fixes
            .retain(|fix| !same_column(&fix.column_name, column_name));
        self.touch();
    }

    /// Empties the collection. Detected columns are kept: they describe the
    /// uploaded lead list, not its configuration.
    pub fn clear(&mut self) {
        self.column_fixes.clear();
        self.touch();
    }

    /// Replaces the detected-column list after a new lead-list upload.
    pub fn set_detected_columns(&mut self, columns: Vec<String>) {
        self.detected_columns = columns;
        self.touch();
    }

    /// Looks a fix up by column name, resolving the `csv_` alias so both
    /// spellings of a column reach the same entry.
    pub fn get(&self, column_name: &str) -> Option<&ColumnFix> {
        self.column_fixes
            .iter()
            .find(|fix| same_column(&fix.column_name, column_name))
    }

    pub fn len(&self) -> usize {
        self.column_fixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.column_fixes.is_empty()
    }

    fn touch(&mut self) {
        self.last_updated = Some(epoch_millis());
    }
}

/// Strips the catalog's `csv_` naming prefix so both spellings of a column
/// resolve to the same fix.
fn canonical_name(name: &str) -> &str {
    name.strip_prefix(CSV_COLUMN_PREFIX).unwrap_or(name)
}

fn same_column(a: &str, b: &str) -> bool {
    canonical_name(a) == canonical_name(b)
}

fn epoch_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
