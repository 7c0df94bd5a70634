use serde::Serialize;

use crate::error::{OxCalcError, Result};

/// A single spreadsheet cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Number(f64),
    Text(String),
    Empty,
}

impl Cell {
    /// Numeric value used in arithmetic. Text and empty cells count as zero.
    pub fn value(&self) -> f64 {
        match self {
            Cell::Number(v) => *v,
            Cell::Text(_) | Cell::Empty => 0.0,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Cell::Text(_))
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.trim().is_empty(),
            Cell::Number(_) => false,
        }
    }

    /// Header text of a cell, if it has any.
    pub fn label(&self) -> Option<String> {
        match self {
            Cell::Text(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
            Cell::Number(v) => Some(v.to_string()),
            _ => None,
        }
    }
}

impl From<f64> for Cell {
    fn from(v: f64) -> Self {
        Cell::Number(v)
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

/// A row is informative when its numbers do not sum to zero or when it
/// carries a text marker. Zero rows come from canceled acquisitions.
pub fn is_informative_row(row: &[Cell]) -> bool {
    row.iter().any(Cell::is_text) || row.iter().map(Cell::value).sum::<f64>() != 0.0
}

/// Weight percent measurements, one row per analysed point.
///
/// Each row keeps the index it had in the source sheet so messages can
/// point back at it after filtering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleTable {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
    row_ids: Vec<usize>,
}

impl SampleTable {
    /// Build a table; every row must have one cell per column.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Cell>>) -> Result<Self> {
        let row_ids = (0..rows.len()).collect();
        Self::with_row_ids(columns, rows, row_ids)
    }

    pub fn with_row_ids(
        columns: Vec<String>,
        rows: Vec<Vec<Cell>>,
        row_ids: Vec<usize>,
    ) -> Result<Self> {
        if row_ids.len() != rows.len() {
            return Err(OxCalcError::MalformedInput(format!(
                "{} row ids for {} rows",
                row_ids.len(),
                rows.len()
            )));
        }
        if let Some((i, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != columns.len())
        {
            return Err(OxCalcError::MalformedInput(format!(
                "row {} has {} cells, expected {}",
                row_ids[i],
                row.len(),
                columns.len()
            )));
        }
        Ok(SampleTable {
            columns,
            rows,
            row_ids,
        })
    }

    /// Convenience constructor for purely numeric data.
    pub fn from_values(columns: &[&str], rows: &[Vec<f64>]) -> Result<Self> {
        Self::new(
            columns.iter().map(|c| c.to_string()).collect(),
            rows.iter()
                .map(|r| r.iter().copied().map(Cell::Number).collect())
                .collect(),
        )
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn row_ids(&self) -> &[usize] {
        &self.row_ids
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Copy of the table without non-informative rows.
    pub fn drop_empty_rows(&self) -> SampleTable {
        let (rows, row_ids) = self
            .rows
            .iter()
            .zip(&self.row_ids)
            .filter(|(row, _)| is_informative_row(row))
            .map(|(row, &id)| (row.clone(), id))
            .unzip();
        SampleTable {
            columns: self.columns.clone(),
            rows,
            row_ids,
        }
    }
}

/// Numeric output table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<f64>>,
    pub row_ids: Vec<usize>,
}

impl ResultTable {
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn get(&self, row: usize, column: &str) -> Option<f64> {
        let idx = self.column_index(column)?;
        self.rows.get(row).map(|r| r[idx])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> SampleTable {
        SampleTable::new(
            vec!["SiO2".to_string(), "MgO".to_string(), "Total".to_string()],
            vec![
                vec![Cell::Number(40.0), Cell::Number(50.0), Cell::Number(90.0)],
                vec![Cell::Number(0.0), Cell::Number(0.0), Cell::Number(0.0)],
                vec![Cell::from("bad spot"), Cell::Number(0.0), Cell::Number(0.0)],
                vec![Cell::Empty, Cell::Empty, Cell::Empty],
                vec![Cell::Number(41.0), Cell::Number(49.0), Cell::Number(90.0)],
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_drop_empty_rows() {
        let filtered = table().drop_empty_rows();
        assert_eq!(filtered.len(), 3);
        assert_eq!(filtered.row_ids(), &[0, 2, 4]);
        assert!(filtered.rows()[1][0].is_text());
    }

    #[test]
    fn test_drop_empty_rows_idempotent() {
        let once = table().drop_empty_rows();
        let twice = once.drop_empty_rows();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let err = SampleTable::new(
            vec!["SiO2".to_string()],
            vec![vec![Cell::Number(1.0), Cell::Number(2.0)]],
        )
        .unwrap_err();
        assert!(matches!(err, OxCalcError::MalformedInput(_)));
    }

    #[test]
    fn test_cell_value() {
        assert_eq!(Cell::Number(2.5).value(), 2.5);
        assert_eq!(Cell::from("n.d.").value(), 0.0);
        assert_eq!(Cell::Empty.value(), 0.0);
        assert!(Cell::Text("  ".into()).is_empty());
    }
}
