//! Normalization of the "El-Ox" sheet layout.
//!
//! The nominal header row carries two block markers, `Weight%` and `Oxide`.
//! Columns from `Weight%` up to `Oxide` hold elemental weight percent, and
//! columns from `Oxide` to the end hold oxide weight percent. The real oxide
//! names sit in the row right below the nominal header; data starts after it.

use log::debug;
use serde::Serialize;

use crate::error::{OxCalcError, Result};
use crate::table::{Cell, SampleTable};

pub const WEIGHT_MARKER: &str = "Weight%";
pub const OXIDE_MARKER: &str = "Oxide";

/// The two measurement blocks of an El-Ox sheet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OxideSheet {
    pub weights: SampleTable,
    pub oxides: SampleTable,
}

fn find_marker(header: &[Cell], marker: &str) -> Result<usize> {
    header
        .iter()
        .position(|c| c.label().as_deref() == Some(marker))
        .ok_or_else(|| {
            OxCalcError::MalformedInput(format!("required column '{marker}' not found"))
        })
}

fn used_width(grid: &[Vec<Cell>]) -> usize {
    grid.iter()
        .filter_map(|row| row.iter().rposition(|c| !c.is_empty()))
        .map(|last| last + 1)
        .max()
        .unwrap_or(0)
}

fn normalize_cell(cell: Option<&Cell>) -> Cell {
    match cell {
        Some(c) if c.is_empty() => Cell::Empty,
        Some(c) => c.clone(),
        None => Cell::Empty,
    }
}

fn block(
    grid: &[Vec<Cell>],
    columns: Vec<String>,
    range: std::ops::Range<usize>,
) -> Result<SampleTable> {
    let body = &grid[2..];
    let rows = body
        .iter()
        .map(|row| range.clone().map(|i| normalize_cell(row.get(i))).collect())
        .collect();
    let row_ids = (2..grid.len()).collect();
    SampleTable::with_row_ids(columns, rows, row_ids)
}

impl OxideSheet {
    /// Split a raw sheet grid into its weight and oxide blocks.
    ///
    /// Row ids in the resulting tables are 0-based indices into `grid`.
    pub fn from_grid(grid: &[Vec<Cell>]) -> Result<Self> {
        let header = grid
            .first()
            .ok_or_else(|| OxCalcError::MalformedInput("sheet is empty".to_string()))?;
        let weight_idx = find_marker(header, WEIGHT_MARKER)?;
        let oxide_idx = find_marker(header, OXIDE_MARKER)?;
        if oxide_idx <= weight_idx {
            return Err(OxCalcError::MalformedInput(format!(
                "'{OXIDE_MARKER}' column must come after '{WEIGHT_MARKER}'"
            )));
        }

        let names = grid.get(1).ok_or_else(|| {
            OxCalcError::MalformedInput("missing oxide name row below the header".to_string())
        })?;
        let width = used_width(grid).max(oxide_idx + 1);

        let mut oxide_columns = Vec::with_capacity(width - oxide_idx);
        for i in oxide_idx..width {
            let name = names.get(i).and_then(Cell::label).ok_or_else(|| {
                OxCalcError::MalformedInput(format!("column {} has no oxide name", i + 1))
            })?;
            oxide_columns.push(name);
        }

        let weight_columns = (weight_idx..oxide_idx)
            .map(|i| {
                names
                    .get(i)
                    .and_then(Cell::label)
                    .or_else(|| header.get(i).and_then(Cell::label))
                    .unwrap_or_else(|| format!("column {}", i + 1))
            })
            .collect();

        debug!(
            "El-Ox layout: weight block {weight_idx}..{oxide_idx}, oxide block {oxide_idx}..{width}, {} data rows",
            grid.len().saturating_sub(2)
        );

        Ok(OxideSheet {
            weights: block(grid, weight_columns, weight_idx..oxide_idx)?,
            oxides: block(grid, oxide_columns, oxide_idx..width)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Cell {
        Cell::from(s)
    }

    fn num(v: f64) -> Cell {
        Cell::Number(v)
    }

    #[test]
    fn test_split_blocks() {
        let grid = vec![
            vec![
                text("Point"),
                text("Weight%"),
                Cell::Empty,
                text("Oxide"),
                Cell::Empty,
                Cell::Empty,
            ],
            vec![
                Cell::Empty,
                text("Si"),
                text("Mg"),
                text("SiO2"),
                text("MgO"),
                text("Total"),
            ],
            vec![num(1.0), num(19.0), num(30.0), num(40.0), num(50.0), num(90.0)],
            vec![num(2.0), num(0.0), num(0.0), num(0.0), num(0.0), num(0.0)],
        ];
        let sheet = OxideSheet::from_grid(&grid).unwrap();
        assert_eq!(sheet.weights.columns(), &["Si", "Mg"]);
        assert_eq!(sheet.oxides.columns(), &["SiO2", "MgO", "Total"]);
        assert_eq!(sheet.oxides.len(), 2);
        assert_eq!(sheet.oxides.row_ids(), &[2, 3]);
        assert_eq!(sheet.oxides.rows()[0][2], num(90.0));
    }

    #[test]
    fn test_short_rows_are_padded() {
        let grid = vec![
            vec![text("Weight%"), text("Oxide"), Cell::Empty],
            vec![text("Si"), text("SiO2"), text("Total")],
            vec![num(1.0), num(2.0)],
        ];
        let sheet = OxideSheet::from_grid(&grid).unwrap();
        assert_eq!(sheet.oxides.rows()[0], vec![num(2.0), Cell::Empty]);
    }

    #[test]
    fn test_missing_markers() {
        let grid = vec![vec![text("Weight%")], vec![text("Si")]];
        let err = OxideSheet::from_grid(&grid).unwrap_err();
        assert!(err.to_string().contains("Oxide"), "{err}");

        let grid = vec![vec![text("Oxide")], vec![text("SiO2")]];
        let err = OxideSheet::from_grid(&grid).unwrap_err();
        assert!(err.to_string().contains("Weight%"), "{err}");

        assert!(OxideSheet::from_grid(&[]).is_err());
    }

    #[test]
    fn test_marker_order() {
        let grid = vec![
            vec![text("Oxide"), text("Weight%")],
            vec![text("SiO2"), text("Si")],
        ];
        assert!(matches!(
            OxideSheet::from_grid(&grid),
            Err(OxCalcError::MalformedInput(_))
        ));
    }

    #[test]
    fn test_missing_oxide_name() {
        let grid = vec![
            vec![text("Weight%"), text("Oxide"), Cell::Empty],
            vec![text("Si"), text("SiO2"), Cell::Empty],
            vec![num(1.0), num(2.0), num(2.0)],
        ];
        let err = OxideSheet::from_grid(&grid).unwrap_err();
        assert!(err.to_string().contains("column 3"), "{err}");
    }
}
