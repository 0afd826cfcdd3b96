//! Neighbourhood score table
//!
//! The flat file that connects the offline scorer and the online ranker: one
//! `neighbourhood` column followed by the eight dimension columns in
//! [`Dimension::ALL`] order, each holding a score in [0, 100].

use crate::dimension::{Dimension, DIMENSION_COUNT};
use crate::error::{Error, Result};
use crate::vector::Vector;
use atomicwrites::{AllowOverwrite, AtomicFile};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Name of the key column
pub const NEIGHBOURHOOD_COLUMN: &str = "neighbourhood";

/// Lowest and highest valid dimension score
pub const SCORE_RANGE: (f64, f64) = (0.0, 100.0);

/// One neighbourhood with a score per dimension
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeighbourhoodScores {
    pub name: String,
    pub scores: Vector,
}

impl NeighbourhoodScores {
    pub fn new(name: impl Into<String>, scores: [f64; DIMENSION_COUNT]) -> Self {
        Self {
            name: name.into(),
            scores: Vector::new(scores),
        }
    }

    #[inline]
    pub fn score(&self, dim: Dimension) -> f64 {
        self.scores[dim]
    }
}

/// Read-only table of neighbourhood scores in file order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreTable {
    rows: Vec<NeighbourhoodScores>,
}

impl ScoreTable {
    /// Build a table, rejecting duplicate names and out-of-range scores
    pub fn new(rows: Vec<NeighbourhoodScores>) -> Result<Self> {
        let mut seen = HashSet::new();
        for row in &rows {
            if !seen.insert(row.name.as_str()) {
                return Err(Error::Csv(format!("duplicate neighbourhood: {}", row.name)));
            }
            for dim in Dimension::ALL {
                validate_score(&row.name, dim.name(), row.score(dim))?;
            }
        }
        Ok(Self { rows })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[NeighbourhoodScores] {
        &self.rows
    }

    pub fn iter(&self) -> impl Iterator<Item = &NeighbourhoodScores> {
        self.rows.iter()
    }

    pub fn get(&self, name: &str) -> Option<&NeighbourhoodScores> {
        self.rows.iter().find(|r| r.name == name)
    }

    /// Load a table from a CSV file
    pub fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path.as_ref())?;
        Self::read_from(file)
    }

    /// Parse a table from any CSV source.
    ///
    /// Every dimension column must be present; extra columns are ignored.
    pub fn read_from<R: Read>(source: R) -> Result<Self> {
        let mut reader = csv::Reader::from_reader(source);
        let headers = reader.headers()?.clone();

        let column_index = |name: &str| -> Result<usize> {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| Error::MissingColumn(name.to_string()))
        };

        let name_idx = column_index(NEIGHBOURHOOD_COLUMN)?;
        let mut dim_idx = [0usize; DIMENSION_COUNT];
        for dim in Dimension::ALL {
            dim_idx[dim.index()] = column_index(dim.name())?;
        }

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            let name = record.get(name_idx).unwrap_or_default().to_string();
            let mut scores = [0.0; DIMENSION_COUNT];
            for dim in Dimension::ALL {
                let raw = record.get(dim_idx[dim.index()]).unwrap_or_default().trim();
                scores[dim.index()] = raw.parse::<f64>().map_err(|_| Error::InvalidScore {
                    neighbourhood: name.clone(),
                    column: dim.name().to_string(),
                    value: raw.to_string(),
                })?;
            }
            rows.push(NeighbourhoodScores::new(name, scores));
        }

        debug!("Parsed score table with {} rows", rows.len());
        Self::new(rows)
    }

    /// Write the table atomically; readers never observe a partial file
    pub fn write_to_path<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = AtomicFile::new(path.as_ref(), AllowOverwrite);
        file.write(|f| self.write_to(f)).map_err(|e| match e {
            atomicwrites::Error::Internal(io) => Error::Io(io),
            atomicwrites::Error::User(e) => e,
        })
    }

    /// Write CSV with a fixed column order
    pub fn write_to<W: std::io::Write>(&self, sink: W) -> Result<()> {
        let mut writer = csv::Writer::from_writer(sink);

        let mut header = vec![NEIGHBOURHOOD_COLUMN];
        header.extend(Dimension::column_names());
        writer.write_record(&header)?;

        for row in &self.rows {
            let mut record = Vec::with_capacity(DIMENSION_COUNT + 1);
            record.push(row.name.clone());
            record.extend(row.scores.as_slice().iter().map(|v| v.to_string()));
            writer.write_record(&record)?;
        }

        writer.flush()?;
        Ok(())
    }
}

fn validate_score(neighbourhood: &str, column: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < SCORE_RANGE.0 || value > SCORE_RANGE.1 {
        return Err(Error::InvalidScore {
            neighbourhood: neighbourhood.to_string(),
            column: column.to_string(),
            value: value.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> ScoreTable {
        ScoreTable::new(vec![
            NeighbourhoodScores::new("el Raval", [90.0, 20.0, 85.0, 25.0, 88.0, 60.0, 70.0, 15.0]),
            NeighbourhoodScores::new("Sarrià", [30.0, 85.5, 60.0, 80.0, 65.0, 90.0, 55.0, 88.0]),
        ])
        .unwrap()
    }

    #[test]
    fn test_write_then_read_preserves_values() {
        let table = sample_table();
        let mut buf = Vec::new();
        table.write_to(&mut buf).unwrap();

        let text = String::from_utf8(buf.clone()).unwrap();
        assert!(text.starts_with("neighbourhood,Nightlife & Bars,Peaceful & Quiet"));

        let back = ScoreTable::read_from(buf.as_slice()).unwrap();
        assert_eq!(back, table);
    }

    #[test]
    fn test_missing_dimension_column_is_named() {
        let csv = "neighbourhood,Nightlife & Bars,Peaceful & Quiet,Walkability,Nature & Parks,Food & Restaurants,Safety,Public Transport\nA,1,2,3,4,5,6,7\n";
        let err = ScoreTable::read_from(csv.as_bytes()).unwrap_err();
        match err {
            Error::MissingColumn(col) => assert_eq!(col, "Family-Friendly"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_column_order_in_file_is_irrelevant() {
        let csv = "Family-Friendly,Public Transport,Safety,Food & Restaurants,Nature & Parks,Walkability,Peaceful & Quiet,Nightlife & Bars,neighbourhood,extra\n8,7,6,5,4,3,2,1,Gràcia,x\n";
        let table = ScoreTable::read_from(csv.as_bytes()).unwrap();
        let row = table.get("Gràcia").unwrap();
        assert_eq!(row.score(Dimension::Nightlife), 1.0);
        assert_eq!(row.score(Dimension::Family), 8.0);
    }

    #[test]
    fn test_out_of_range_score_rejected() {
        let err = ScoreTable::new(vec![NeighbourhoodScores::new(
            "A",
            [101.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        )])
        .unwrap_err();
        assert!(matches!(err, Error::InvalidScore { .. }));
    }

    #[test]
    fn test_non_numeric_score_rejected() {
        let mut header = vec![NEIGHBOURHOOD_COLUMN];
        header.extend(Dimension::column_names());
        let csv = format!("{}\nA,1,2,abc,4,5,6,7,8\n", header.join(","));
        let err = ScoreTable::read_from(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::InvalidScore { ref column, .. } if column == "Walkability"));
    }

    #[test]
    fn test_duplicate_neighbourhood_rejected() {
        let row = NeighbourhoodScores::new("A", [50.0; DIMENSION_COUNT]);
        assert!(ScoreTable::new(vec![row.clone(), row]).is_err());
    }

    #[test]
    fn test_atomic_write_to_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.csv");
        let table = sample_table();
        table.write_to_path(&path).unwrap();
        let back = ScoreTable::read_from_path(&path).unwrap();
        assert_eq!(back.len(), 2);
        assert_eq!(back.rows()[1].name, "Sarrià");
    }
}
