//! Division standings extraction
//!
//! The standings page carries one `<table>` per division. Tables are read
//! positionally (first = WEST, second = EAST); any further tables are
//! ignored. Extraction never fails: missing structure just means fewer rows.

use scraper::{ElementRef, Html};

use crate::models::{Division, Standings, StandingsRow};
use crate::scrape::selectors::StandingsSelectors;

/// Column holding the team name; its link text is preferred over the cell text
const TEAM_COLUMN: usize = 1;

/// Extract both division tables from a standings page
pub fn extract_standings(html: &str) -> Standings {
    StandingsParser::new().parse(html)
}

/// Parser for the standings page
pub struct StandingsParser {
    selectors: StandingsSelectors,
}

impl StandingsParser {
    #[must_use]
    pub fn new() -> Self {
        Self {
            selectors: StandingsSelectors::new(),
        }
    }

    pub fn parse(&self, html: &str) -> Standings {
        let document = Html::parse_document(html);
        let mut standings = Standings::default();

        let tables: Vec<ElementRef> = document.select(self.selectors.table).collect();
        if tables.is_empty() {
            tracing::debug!("No tables found on standings page");
            return standings;
        }

        for (index, table) in tables.into_iter().take(2).enumerate() {
            let Some(division) = Division::from_table_index(index) else {
                break;
            };

            for row in self.parse_table(table, division) {
                standings.push(row);
            }
        }

        standings
    }

    /// Rows of one division table; empty when the header or body group is missing
    ///
    /// The HTML parser inserts a `tbody` around bare rows, so only a table
    /// with no body rows at all lacks one.
    fn parse_table(&self, table: ElementRef, division: Division) -> Vec<StandingsRow> {
        let (Some(head), Some(body)) = (
            table.select(self.selectors.head).next(),
            table.select(self.selectors.body).next(),
        ) else {
            tracing::debug!(%division, "Standings table missing thead or tbody, skipping");
            return Vec::new();
        };

        let headers: Vec<String> = head
            .select(self.selectors.header_cell)
            .map(|th| element_text(&th))
            .collect();

        let mut rows = Vec::new();
        let mut dropped = 0usize;

        for tr in body.select(self.selectors.row) {
            let cells: Vec<ElementRef> = tr.select(self.selectors.cell).collect();
            if cells.len() != headers.len() {
                dropped += 1;
                continue;
            }

            let mut row = StandingsRow::new(division);
            for (index, (header, cell)) in headers.iter().zip(&cells).enumerate() {
                row.insert(header.as_str(), self.cell_text(cell, index));
            }
            rows.push(row);
        }

        tracing::debug!(%division, rows = rows.len(), dropped, "Parsed standings table");
        rows
    }

    fn cell_text(&self, cell: &ElementRef, index: usize) -> String {
        if index == TEAM_COLUMN {
            if let Some(anchor) = cell.select(self.selectors.anchor).next() {
                return element_text(&anchor);
            }
        }
        element_text(cell)
    }
}

impl Default for StandingsParser {
    fn default() -> Self {
        Self::new()
    }
}

fn element_text(element: &ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}
