// Division standings scraped from the public standings page

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// Standings division
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Division {
    West,
    East,
}

impl Division {
    /// Division for a table position on the standings page
    ///
    /// The page is read positionally: the first table is WEST, the second
    /// EAST. A reordered page would be mislabelled.
    pub fn from_table_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::West),
            1 => Some(Self::East),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::West => "WEST",
            Self::East => "EAST",
        }
    }
}

impl std::fmt::Display for Division {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One team's line in a division table, keyed by column header
///
/// Column order follows the table header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandingsRow {
    pub division: Division,
    columns: Vec<(String, String)>,
}

impl StandingsRow {
    pub fn new(division: Division) -> Self {
        Self {
            division,
            columns: Vec::new(),
        }
    }

    /// Set a column value; a repeated header overwrites the earlier value in place
    pub fn insert(&mut self, header: impl Into<String>, value: impl Into<String>) {
        let header = header.into();
        let value = value.into();
        match self.columns.iter_mut().find(|(h, _)| *h == header) {
            Some((_, existing)) => *existing = value,
            None => self.columns.push((header, value)),
        }
    }

    pub fn get(&self, header: &str) -> Option<&str> {
        self.columns
            .iter()
            .find(|(h, _)| h == header)
            .map(|(_, v)| v.as_str())
    }

    /// Column headers in table order
    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(h, _)| h.as_str())
    }

    pub fn columns(&self) -> &[(String, String)] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl Serialize for StandingsRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len() + 1))?;
        for (header, value) in &self.columns {
            map.serialize_entry(header, value)?;
        }
        map.serialize_entry("division", self.division.as_str())?;
        map.end()
    }
}

/// Both division tables
///
/// Always well-formed: a page that could not be fetched or parsed yields
/// two empty divisions, never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Standings {
    #[serde(rename = "WEST")]
    pub west: Vec<StandingsRow>,
    #[serde(rename = "EAST")]
    pub east: Vec<StandingsRow>,
}

impl Standings {
    pub fn division(&self, division: Division) -> &[StandingsRow] {
        match division {
            Division::West => &self.west,
            Division::East => &self.east,
        }
    }

    pub fn push(&mut self, row: StandingsRow) {
        match row.division {
            Division::West => self.west.push(row),
            Division::East => self.east.push(row),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.west.is_empty() && self.east.is_empty()
    }
}
