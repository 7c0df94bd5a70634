use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;
use oxcalc::{Cell, Recalculation, ResultTable, SampleTable};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned plain-text tables
    Table,
    /// Cation fractions as CSV
    Csv,
    /// Every intermediate table as JSON
    Json,
}

/// Everything printed for one El-Ox sheet.
#[derive(Serialize)]
pub struct Report<'a> {
    /// 0-based sheet row of grid row 0. Row ids are relative to it.
    pub first_row: usize,
    pub weights: &'a SampleTable,
    #[serde(flatten)]
    pub result: &'a Recalculation,
}

/// Spreadsheet row number (1-based) of a grid row id.
fn sheet_row(first_row: usize, id: usize) -> String {
    (first_row + id + 1).to_string()
}

fn format_cell(cell: &Cell, precision: usize) -> String {
    match cell {
        Cell::Number(v) => format!("{v:.precision$}"),
        Cell::Text(s) => s.clone(),
        Cell::Empty => String::new(),
    }
}

fn write_aligned(out: &mut dyn Write, header: &[String], rows: &[Vec<String>]) -> Result<()> {
    let mut widths: Vec<usize> = header.iter().map(|h| h.len()).collect();
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.len());
        }
    }
    let line = |cells: &[String]| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(c, &w)| format!("{c:>w$}"))
            .collect::<Vec<_>>()
            .join("  ")
    };
    writeln!(out, "{}", line(header))?;
    for row in rows {
        writeln!(out, "{}", line(row))?;
    }
    Ok(())
}

/// Rows of `table` whose ids survived the recalculation.
fn sample_rows(
    table: &SampleTable,
    kept: &[usize],
    first_row: usize,
    precision: usize,
) -> Vec<Vec<String>> {
    table
        .rows()
        .iter()
        .zip(table.row_ids())
        .filter(|(_, id)| kept.contains(*id))
        .map(|(row, &id)| {
            std::iter::once(sheet_row(first_row, id))
                .chain(row.iter().map(|c| format_cell(c, precision)))
                .collect()
        })
        .collect()
}

fn result_rows(table: &ResultTable, first_row: usize, precision: usize) -> Vec<Vec<String>> {
    table
        .rows
        .iter()
        .zip(&table.row_ids)
        .map(|(row, &id)| {
            std::iter::once(sheet_row(first_row, id))
                .chain(row.iter().map(|v| format!("{v:.precision$}")))
                .collect()
        })
        .collect()
}

fn with_row_header(columns: &[String]) -> Vec<String> {
    std::iter::once("Row".to_string())
        .chain(columns.iter().cloned())
        .collect()
}

pub fn write_table(out: &mut dyn Write, report: &Report, precision: usize) -> Result<()> {
    let result = report.result;
    let kept = result.original.row_ids();
    if !report.weights.columns().is_empty() {
        writeln!(out, "Element weight percent")?;
        write_aligned(
            out,
            &with_row_header(report.weights.columns()),
            &sample_rows(report.weights, kept, report.first_row, precision),
        )?;
        writeln!(out)?;
    }
    writeln!(out, "Oxide weight percent")?;
    write_aligned(
        out,
        &with_row_header(result.original.columns()),
        &sample_rows(&result.original, kept, report.first_row, precision),
    )?;
    writeln!(out)?;
    writeln!(out, "Cations per {} oxygens", result.target)?;
    write_aligned(
        out,
        &with_row_header(&result.cation_fractions.columns),
        &result_rows(&result.cation_fractions, report.first_row, precision),
    )?;
    Ok(())
}

pub fn write_csv(out: &mut dyn Write, report: &Report, precision: usize) -> Result<()> {
    let cations = &report.result.cation_fractions;
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(with_row_header(&cations.columns))?;
    for row in result_rows(cations, report.first_row, precision) {
        writer.write_record(&row)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_json(out: &mut dyn Write, report: &Report) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}

pub fn write(
    out: &mut dyn Write,
    report: &Report,
    format: OutputFormat,
    precision: usize,
) -> Result<()> {
    match format {
        OutputFormat::Table => write_table(out, report, precision),
        OutputFormat::Csv => write_csv(out, report, precision),
        OutputFormat::Json => write_json(out, report),
    }
}

/// Element table with the citation of its atomic weights.
pub fn write_elements(out: &mut dyn Write) -> Result<()> {
    let source = oxcalc::oxcalc_data::SOURCE;
    writeln!(out, "# {}: {}", source.tag, source.reference)?;
    for e in oxcalc::elements::elements() {
        writeln!(
            out,
            "{:>3}  {:<2}  {:<14} {:>9.4}",
            e.atomic_number, e.symbol, e.name, e.atomic_weight
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxcalc::{OxideSheet, TargetOxygen, recalculate};

    // Weight%/Oxide header, oxide names, one analysis and one canceled spot
    fn grid() -> Vec<Vec<Cell>> {
        vec![
            vec![
                Cell::from("Weight%"),
                Cell::Empty,
                Cell::from("Oxide"),
                Cell::Empty,
                Cell::Empty,
            ],
            vec![
                Cell::from("Si"),
                Cell::from("Mg"),
                Cell::from("SiO2"),
                Cell::from("MgO"),
                Cell::from("Total"),
            ],
            vec![
                Cell::Number(20.0),
                Cell::Number(34.6),
                Cell::Number(42.7),
                Cell::Number(57.3),
                Cell::Number(100.0),
            ],
            vec![Cell::Number(0.0); 5],
        ]
    }

    fn render(first_row: usize, format: OutputFormat, precision: usize) -> String {
        let sheet = OxideSheet::from_grid(&grid()).unwrap();
        let result = recalculate(&sheet.oxides, TargetOxygen::new(4).unwrap()).unwrap();
        let report = Report {
            first_row,
            weights: &sheet.weights,
            result: &result,
        };
        let mut buf = Vec::new();
        write(&mut buf, &report, format, precision).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_sheet_row() {
        assert_eq!(sheet_row(0, 2), "3");
        assert_eq!(sheet_row(2, 2), "5");
    }

    #[test]
    fn test_csv_output() {
        let text = render(0, OutputFormat::Csv, 3);
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("Row,Si,Mg,Total"));
        assert_eq!(lines.next(), Some("3,1.000,2.000,3.000"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_csv_rows_follow_range_start() {
        // the used range starts on sheet row 3, so the first analysis is row 5
        let text = render(2, OutputFormat::Csv, 3);
        assert_eq!(text.lines().nth(1), Some("5,1.000,2.000,3.000"));
    }

    #[test]
    fn test_table_output() {
        let text = render(0, OutputFormat::Table, 2);
        assert!(text.contains("Element weight percent"));
        assert!(text.contains("34.60"));
        assert!(text.contains("Cations per 4 oxygens"));
        assert!(text.contains("SiO2"));
        assert!(text.contains("100.00"));
        // the canceled spot on sheet row 4 is dropped from every block
        assert_eq!(text.lines().count(), 11, "{text}");
        assert!(!text.lines().any(|l| l.trim_start().starts_with("4 ")), "{text}");
    }

    #[test]
    fn test_json_output() {
        let text = render(2, OutputFormat::Json, 4);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["first_row"], 2);
        assert_eq!(value["target"], 4);
        assert_eq!(value["weights"]["columns"][0], "Si");
        assert_eq!(value["cation_fractions"]["columns"][0], "Si");
        assert_eq!(value["cation_fractions"]["row_ids"][0], 2);
    }

    #[test]
    fn test_elements_listing_cites_source() {
        let mut buf = Vec::new();
        write_elements(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("# IUPAC 2021: Prohaska et al. 2022"), "{text}");
        assert_eq!(text.lines().count(), 119);
        assert!(text.lines().any(|l| l.starts_with(" 14  Si")));
    }
}
