use std::path::Path;

use anyhow::{Context, Result, anyhow};
use calamine::{Data, Range, Reader, open_workbook_auto};
use log::{debug, info};
use oxcalc::Cell;

/// Name of the elemental-oxide sheet written by the microprobe software.
pub const ELOX_SHEET: &str = "El-Ox";

fn to_cell(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::Int(v) => Cell::Number(*v as f64),
        Data::Float(v) => Cell::Number(*v),
        Data::String(s) if s.trim().is_empty() => Cell::Empty,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Bool(v) => Cell::Text(v.to_string()),
        Data::DateTime(v) => Cell::Number(v.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
        Data::Error(e) => Cell::Text(e.to_string()),
    }
}

/// Cells of a sheet's used range.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetGrid {
    pub cells: Vec<Vec<Cell>>,
    /// 0-based sheet row of `cells[0]`. Blank leading rows are not part of
    /// the used range, so this is often nonzero.
    pub first_row: usize,
}

fn grid_of(range: &Range<Data>) -> SheetGrid {
    let first_row = range.start().map_or(0, |(row, _)| row as usize);
    let cells = range
        .rows()
        .map(|row| row.iter().map(to_cell).collect())
        .collect();
    SheetGrid { cells, first_row }
}

/// Read one sheet of an xlsx/xls/xlsb/ods workbook into a grid of cells.
pub fn read_sheet(path: &Path, sheet: &str) -> Result<SheetGrid> {
    let mut workbook = open_workbook_auto(path)
        .with_context(|| format!("failed to open workbook {}", path.display()))?;

    let names = workbook.sheet_names();
    if !names.iter().any(|n| n == sheet) {
        return Err(anyhow!(
            "sheet '{sheet}' not found in {} (available: {})",
            path.display(),
            names.join(", ")
        ));
    }

    let range = workbook
        .worksheet_range(sheet)
        .with_context(|| format!("failed to read sheet '{sheet}'"))?;
    debug!("sheet '{sheet}' starts at {:?}", range.start());

    let grid = grid_of(&range);
    info!(
        "read {} rows x {} columns from '{sheet}'",
        grid.cells.len(),
        range.width()
    );
    Ok(grid)
}
