use serde::Serialize;

use crate::chemparser::{FormulaToken, cation_prefix, parse_formula};
use crate::elements::atomic_weight;
use crate::error::{OxCalcError, Result};

fn mass_of(formula: &str, tokens: &[FormulaToken]) -> Result<f64> {
    let mut total_weight = 0.0_f64;
    for token in tokens {
        total_weight += token.count_or_one() as f64 * atomic_weight(&token.symbol)?;
    }

    if total_weight <= 0.0 {
        return Err(OxCalcError::InvalidFormula(format!(
            "zero weight formula: {formula}"
        )));
    }
    Ok(total_weight)
}

fn sum_counts<'a>(
    formula: &str,
    tokens: impl Iterator<Item = &'a FormulaToken>,
) -> Result<u32> {
    tokens.map(FormulaToken::count_or_one).try_fold(0u32, |acc, n| {
        acc.checked_add(n).ok_or_else(|| {
            OxCalcError::InvalidFormula(format!("{formula}: atom count overflows"))
        })
    })
}

fn oxygens_of(formula: &str, tokens: &[FormulaToken]) -> Result<u32> {
    let oxygen = sum_counts(formula, tokens.iter().filter(|t| t.is_oxygen()))?;

    if oxygen == 0 {
        return Err(OxCalcError::InvalidFormula(format!(
            "{formula} contains no oxygen"
        )));
    }
    Ok(oxygen)
}

fn cations_of(formula: &str, tokens: &[FormulaToken]) -> Result<u32> {
    sum_counts(formula, tokens.iter().filter(|t| !t.is_oxygen()))
}

/// Returns the formula (molar) mass in g/mol.
///
/// Every symbol must be a known element.
pub fn formula_mass(formula: &str) -> Result<f64> {
    let tokens = parse_formula(formula)?;
    mass_of(formula, &tokens)
}

/// Returns the number of oxygen atoms per formula unit.
///
/// Every `O` occurrence contributes its count. A formula without oxygen is
/// not an oxide and is rejected.
pub fn oxygen_count(formula: &str) -> Result<u32> {
    let tokens = parse_formula(formula)?;
    oxygens_of(formula, &tokens)
}

/// Returns cations per oxygen, e.g. 2/3 for Al2O3.
pub fn cation_oxygen_ratio(formula: &str) -> Result<f64> {
    let tokens = parse_formula(formula)?;
    let oxygen = oxygens_of(formula, &tokens)?;
    Ok(cations_of(formula, &tokens)? as f64 / oxygen as f64)
}

/// Per-column constants of an oxide.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OxideColumn {
    pub formula: String,
    pub cation: String,
    pub formula_mass: f64,
    pub oxygen_count: u32,
    pub cation_oxygen_ratio: f64,
}

impl OxideColumn {
    /// Resolve all constants for an oxide header. Errors name the header.
    pub fn resolve(header: &str) -> Result<Self> {
        let build = || -> Result<Self> {
            let tokens = parse_formula(header)?;
            let formula_mass = mass_of(header, &tokens)?;
            let oxygen_count = oxygens_of(header, &tokens)?;
            let cation_oxygen_ratio = cations_of(header, &tokens)? as f64 / oxygen_count as f64;
            Ok(OxideColumn {
                formula: header.trim().to_string(),
                cation: cation_prefix(header).to_string(),
                formula_mass,
                oxygen_count,
                cation_oxygen_ratio,
            })
        };
        build().map_err(|e| e.in_column(header))
    }
}
