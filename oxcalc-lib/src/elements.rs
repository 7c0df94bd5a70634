use std::collections::HashMap;
use std::sync::OnceLock;

use oxcalc_data::{ELEMENTS, ElementRecord};

use crate::error::{OxCalcError, Result};

static SYMBOL_INDEX: OnceLock<HashMap<&'static str, &'static ElementRecord>> = OnceLock::new();

fn index() -> &'static HashMap<&'static str, &'static ElementRecord> {
    SYMBOL_INDEX.get_or_init(|| ELEMENTS.iter().map(|e| (e.symbol, e)).collect())
}

/// Look up an element record by its (case-sensitive) symbol.
pub fn element(symbol: &str) -> Result<&'static ElementRecord> {
    index()
        .get(symbol)
        .copied()
        .ok_or_else(|| OxCalcError::UnknownElement(symbol.to_string()))
}

/// Standard atomic weight in g/mol.
pub fn atomic_weight(symbol: &str) -> Result<f64> {
    Ok(element(symbol)?.atomic_weight)
}

pub fn is_element(symbol: &str) -> bool {
    index().contains_key(symbol)
}

/// The full table, ordered by atomic number.
pub fn elements() -> &'static [ElementRecord] {
    ELEMENTS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_weights() {
        assert_eq!(atomic_weight("O").unwrap(), 15.999);
        assert_eq!(atomic_weight("Si").unwrap(), 28.085);
        assert_eq!(atomic_weight("Al").unwrap(), 26.982);
        assert_eq!(element("Fe").unwrap().atomic_number, 26);
    }

    #[test]
    fn test_unknown_element() {
        assert_eq!(
            atomic_weight("Xx"),
            Err(OxCalcError::UnknownElement("Xx".to_string()))
        );
        // symbols are case-sensitive
        assert!(!is_element("si"));
        assert!(is_element("Si"));
    }
}
