use log::{debug, info};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::Serialize;

use crate::chemparser::cation_prefix;
use crate::error::{OxCalcError, Result};
use crate::minerals::TargetOxygen;
use crate::sheet::OxideSheet;
use crate::stoich::OxideColumn;
use crate::table::{Cell, ResultTable, SampleTable};

/// Header of the aggregate column, both in the input and the output.
pub const TOTAL_COLUMN: &str = "Total";

/// Every stage of a structural formula recalculation.
///
/// All tables are row-aligned with `original`, which is the input after
/// canceled (all-zero) acquisitions were removed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recalculation {
    pub target: TargetOxygen,
    pub original: SampleTable,
    pub columns: Vec<OxideColumn>,
    pub molecular_proportions: ResultTable,
    pub atomic_proportions: ResultTable,
    pub normalization_factors: Vec<f64>,
    pub anions: ResultTable,
    /// Cations per formula unit, one column per cation plus `Total`.
    pub cation_fractions: ResultTable,
}

impl Recalculation {
    /// Labels of the cation fraction columns.
    pub fn output_columns(&self) -> &[String] {
        &self.cation_fractions.columns
    }
}

struct RowResult {
    molecular: Vec<f64>,
    atomic: Vec<f64>,
    factor: f64,
    anions: Vec<f64>,
    cations: Vec<f64>,
}

fn is_total_column(header: &str) -> bool {
    header.trim().eq_ignore_ascii_case(TOTAL_COLUMN)
}

fn recalculate_row(
    row: &[Cell],
    row_id: usize,
    columns: &[OxideColumn],
    target: TargetOxygen,
) -> Result<RowResult> {
    let molecular: Vec<f64> = columns
        .iter()
        .zip(row)
        .map(|(col, cell)| cell.value() / col.formula_mass)
        .collect();
    let atomic: Vec<f64> = columns
        .iter()
        .zip(&molecular)
        .map(|(col, &m)| m * col.oxygen_count as f64)
        .collect();

    let oxygen_sum: f64 = atomic.iter().sum();
    if !(oxygen_sum > 0.0 && oxygen_sum.is_finite()) {
        return Err(OxCalcError::DegenerateRow { row: row_id });
    }
    let factor = target.get() as f64 / oxygen_sum;

    let anions: Vec<f64> = atomic.iter().map(|&a| a * factor).collect();
    let mut cations: Vec<f64> = columns
        .iter()
        .zip(&anions)
        .map(|(col, &n)| n * col.cation_oxygen_ratio)
        .collect();
    cations.push(cations.iter().sum());

    Ok(RowResult {
        molecular,
        atomic,
        factor,
        anions,
        cations,
    })
}

#[cfg(not(feature = "parallel"))]
fn recalculate_rows(
    table: &SampleTable,
    columns: &[OxideColumn],
    target: TargetOxygen,
) -> Result<Vec<RowResult>> {
    table
        .rows()
        .iter()
        .zip(table.row_ids())
        .map(|(row, &id)| recalculate_row(row, id, columns, target))
        .collect()
}

#[cfg(feature = "parallel")]
fn recalculate_rows(
    table: &SampleTable,
    columns: &[OxideColumn],
    target: TargetOxygen,
) -> Result<Vec<RowResult>> {
    table
        .rows()
        .par_iter()
        .zip(table.row_ids().par_iter())
        .map(|(row, &id)| recalculate_row(row, id, columns, target))
        .collect()
}

/// Recalculate oxide weight percentages into cations per formula unit
/// normalized to `target` oxygens.
///
/// Rows that are entirely zero (and carry no text marker) are dropped first.
/// A trailing `Total` column is excluded from the chemistry. Any column
/// that is not a known oxide formula aborts the whole calculation.
///
/// # Examples
/// ```
/// use oxcalc::{SampleTable, TargetOxygen, recalculate};
///
/// let table =
///     SampleTable::from_values(&["SiO2", "MgO", "Total"], &[vec![42.7, 57.3, 100.0]]).unwrap();
/// let result = recalculate(&table, TargetOxygen::new(4).unwrap()).unwrap();
/// assert_eq!(result.output_columns(), &["Si", "Mg", "Total"]);
/// ```
pub fn recalculate(table: &SampleTable, target: TargetOxygen) -> Result<Recalculation> {
    if table.columns().is_empty() || table.is_empty() {
        return Err(OxCalcError::MalformedInput(
            "table needs at least one row and one oxide column".to_string(),
        ));
    }

    let original = table.drop_empty_rows();
    if original.len() < table.len() {
        for id in table.row_ids() {
            if !original.row_ids().contains(id) {
                debug!("dropped all-zero row {id}");
            }
        }
        info!(
            "dropped {} all-zero row(s) out of {}",
            table.len() - original.len(),
            table.len()
        );
    }
    if original.is_empty() {
        return Err(OxCalcError::MalformedInput(
            "every row is zero; nothing to recalculate".to_string(),
        ));
    }

    let headers = original.columns();
    let oxide_headers = match headers.split_last() {
        Some((last, rest)) if is_total_column(last) => rest,
        _ => headers,
    };
    if oxide_headers.is_empty() {
        return Err(OxCalcError::MalformedInput(
            "no oxide columns before the Total column".to_string(),
        ));
    }

    let columns = oxide_headers
        .iter()
        .map(|h| OxideColumn::resolve(h))
        .collect::<Result<Vec<_>>>()?;
    for col in &columns {
        debug!(
            "{}: mass {:.4} g/mol, {} O, cation/O {:.4}",
            col.formula, col.formula_mass, col.oxygen_count, col.cation_oxygen_ratio
        );
    }

    let results = recalculate_rows(&original, &columns, target)?;

    let row_ids = original.row_ids().to_vec();
    let oxide_labels: Vec<String> = columns.iter().map(|c| c.formula.clone()).collect();
    let mut cation_labels: Vec<String> = columns
        .iter()
        .map(|c| cation_prefix(&c.formula).to_string())
        .collect();
    cation_labels.push(TOTAL_COLUMN.to_string());

    let mut molecular = Vec::with_capacity(results.len());
    let mut atomic = Vec::with_capacity(results.len());
    let mut factors = Vec::with_capacity(results.len());
    let mut anions = Vec::with_capacity(results.len());
    let mut cations = Vec::with_capacity(results.len());
    for r in results {
        molecular.push(r.molecular);
        atomic.push(r.atomic);
        factors.push(r.factor);
        anions.push(r.anions);
        cations.push(r.cations);
    }
    let table_of = |columns: &[String], rows: Vec<Vec<f64>>| ResultTable {
        columns: columns.to_vec(),
        rows,
        row_ids: row_ids.clone(),
    };

    Ok(Recalculation {
        target,
        molecular_proportions: table_of(&oxide_labels, molecular),
        atomic_proportions: table_of(&oxide_labels, atomic),
        normalization_factors: factors,
        anions: table_of(&oxide_labels, anions),
        cation_fractions: table_of(&cation_labels, cations),
        columns,
        original,
    })
}

/// Run [`recalculate`] on the oxide block of a raw El-Ox sheet grid.
pub fn recalculate_grid(grid: &[Vec<Cell>], target: TargetOxygen) -> Result<Recalculation> {
    let sheet = OxideSheet::from_grid(grid)?;
    recalculate(&sheet.oxides, target)
}
