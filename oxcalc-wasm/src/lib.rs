//! WASM bindings for oxcalc.
//!
//! Build with:
//! ```sh
//! wasm-pack build -p oxcalc-wasm
//! ```

use js_sys::Array;
use wasm_bindgen::prelude::*;

use oxcalc::{Cell, OxCalcError, SampleTable, TargetOxygen};

fn to_js(e: OxCalcError) -> JsError {
    JsError::new(&e.to_string())
}

fn strings(array: &Array) -> Vec<String> {
    array
        .iter()
        .map(|v| v.as_string().unwrap_or_default())
        .collect()
}

fn to_array(items: &[String]) -> Array {
    items.iter().map(|s| JsValue::from_str(s)).collect()
}

/// Build a table from row-major values. `NaN` marks an empty cell.
fn build_table(columns: Vec<String>, values: &[f64]) -> Result<SampleTable, OxCalcError> {
    if columns.is_empty() || values.len() % columns.len() != 0 {
        return Err(OxCalcError::MalformedInput(format!(
            "{} values do not fill rows of {} columns",
            values.len(),
            columns.len()
        )));
    }
    let rows = values
        .chunks(columns.len())
        .map(|row| {
            row.iter()
                .map(|&v| if v.is_nan() { Cell::Empty } else { Cell::Number(v) })
                .collect()
        })
        .collect();
    SampleTable::new(columns, rows)
}

// ── Formula helpers ──

#[wasm_bindgen]
pub fn formula_mass(formula: &str) -> Result<f64, JsError> {
    oxcalc::formula_mass(formula).map_err(to_js)
}

#[wasm_bindgen]
pub fn oxygen_count(formula: &str) -> Result<u32, JsError> {
    oxcalc::oxygen_count(formula).map_err(to_js)
}

#[wasm_bindgen]
pub fn cation_oxygen_ratio(formula: &str) -> Result<f64, JsError> {
    oxcalc::cation_oxygen_ratio(formula).map_err(to_js)
}

/// Returns the cation symbol of an oxide header, or the header unchanged.
#[wasm_bindgen]
pub fn cation_prefix(column: &str) -> String {
    oxcalc::cation_prefix(column).to_string()
}

/// Resolves "4" or "olivine" to a number of oxygens.
#[wasm_bindgen]
pub fn target_oxygens(value: &str) -> Result<u32, JsError> {
    value
        .parse::<TargetOxygen>()
        .map(TargetOxygen::get)
        .map_err(to_js)
}

// ── Recalculation ──

/// Cation fractions, row-major, with a trailing `Total` column.
#[wasm_bindgen]
pub struct CationTable {
    columns: Vec<String>,
    values: Vec<f64>,
    row_ids: Vec<u32>,
}

#[wasm_bindgen]
impl CationTable {
    #[wasm_bindgen(getter)]
    pub fn columns(&self) -> Array {
        to_array(&self.columns)
    }

    #[wasm_bindgen(getter)]
    pub fn values(&self) -> Vec<f64> {
        self.values.clone()
    }

    /// Index of each row in the submitted table (zero rows are dropped).
    #[wasm_bindgen(getter, js_name = rowIds)]
    pub fn row_ids(&self) -> Vec<u32> {
        self.row_ids.clone()
    }
}

/// Recalculates oxide weight percent into cations per `oxygens` oxygens.
///
/// `columns` are oxide headers (a trailing "Total" is ignored) and `values`
/// is the row-major table of weight percentages.
#[wasm_bindgen]
pub fn recalculate(columns: &Array, values: &[f64], oxygens: i32) -> Result<CationTable, JsError> {
    let target = TargetOxygen::new(oxygens as i64).map_err(to_js)?;
    let table = build_table(strings(columns), values).map_err(to_js)?;
    let result = oxcalc::recalculate(&table, target).map_err(to_js)?;

    let cations = result.cation_fractions;
    Ok(CationTable {
        values: cations.rows.into_iter().flatten().collect(),
        row_ids: cations.row_ids.into_iter().map(|id| id as u32).collect(),
        columns: cations.columns,
    })
}
