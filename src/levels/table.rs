//! Ordered level collection and its JSON form.

use super::types::LevelRecord;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};

/// Levels in campaign order, serialized as a bare JSON array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LevelTable {
    records: Vec<LevelRecord>,
}

impl LevelTable {
    pub fn new(records: Vec<LevelRecord>) -> Self {
        Self { records }
    }

    /// Look up a level by id, as the runtime does when starting an encounter.
    pub fn get(&self, level_id: u32) -> Option<&LevelRecord> {
        self.records.iter().find(|l| l.level_id == level_id)
    }

    pub(crate) fn get_mut(&mut self, level_id: u32) -> Option<&mut LevelRecord> {
        self.records.iter_mut().find(|l| l.level_id == level_id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LevelRecord> {
        self.records.iter()
    }

    /// Ids of every level that carries boss phases.
    pub fn boss_levels(&self) -> Vec<u32> {
        self.records
            .iter()
            .filter(|l| l.is_boss())
            .map(|l| l.level_id)
            .collect()
    }

    /// Pretty-printed JSON array with 2-space indentation.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Write the table as pretty JSON followed by a newline.
    pub fn write_to<W: Write>(&self, mut out: W) -> io::Result<()> {
        let json = self
            .to_json_pretty()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        writeln!(out, "{}", json)?;
        out.flush()
    }
}

impl<'a> IntoIterator for &'a LevelTable {
    type Item = &'a LevelRecord;
    type IntoIter = std::slice::Iter<'a, LevelRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
