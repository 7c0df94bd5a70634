use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{OxCalcError, Result};
use crate::minerals_db::{MINERALS, find_mineral as lookup};

/// Conventional oxygen basis of a mineral group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MineralBasis {
    pub name: &'static str,
    pub oxygens: u32,
    pub formula: &'static str,
}

/// Find the oxygen basis for a mineral name (case-insensitive).
pub fn find_mineral(name: &str) -> Option<MineralBasis> {
    lookup(name).map(|(name, oxygens, formula)| MineralBasis {
        name,
        oxygens,
        formula,
    })
}

/// All catalogued minerals in catalog order.
pub fn minerals() -> impl Iterator<Item = MineralBasis> {
    MINERALS
        .iter()
        .map(|&(name, oxygens, formula)| MineralBasis {
            name,
            oxygens,
            formula,
        })
}

/// Number of oxygens each formula is normalized to. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct TargetOxygen(u32);

impl TargetOxygen {
    pub fn new(oxygens: i64) -> Result<Self> {
        match u32::try_from(oxygens) {
            Ok(n) if n > 0 => Ok(TargetOxygen(n)),
            _ => Err(OxCalcError::InvalidTargetOxygen(oxygens.to_string())),
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl FromStr for TargetOxygen {
    type Err = OxCalcError;

    /// Accepts an integer ("4") or a catalogued mineral name ("olivine").
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if let Ok(n) = trimmed.parse::<i64>() {
            return TargetOxygen::new(n);
        }
        find_mineral(trimmed)
            .map(|m| TargetOxygen(m.oxygens))
            .ok_or_else(|| OxCalcError::InvalidTargetOxygen(trimmed.to_string()))
    }
}

impl fmt::Display for TargetOxygen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_must_be_positive() {
        assert!(TargetOxygen::new(0).is_err());
        assert!(TargetOxygen::new(-4).is_err());
        assert!(TargetOxygen::new(i64::MAX).is_err());
        assert_eq!(TargetOxygen::new(4).unwrap().get(), 4);
    }

    #[test]
    fn test_target_from_str() {
        assert_eq!("6".parse::<TargetOxygen>().unwrap().get(), 6);
        assert_eq!(" Olivine ".parse::<TargetOxygen>().unwrap().get(), 4);
        assert_eq!("amphibole".parse::<TargetOxygen>().unwrap().get(), 23);
        assert!("0".parse::<TargetOxygen>().is_err());
        assert!("4.5".parse::<TargetOxygen>().is_err());
        assert!("unobtainium".parse::<TargetOxygen>().is_err());
    }

    #[test]
    fn test_catalog_names_unique_and_lowercase() {
        let names: Vec<_> = minerals().map(|m| m.name).collect();
        for (i, name) in names.iter().enumerate() {
            assert_eq!(*name, name.to_lowercase());
            assert!(!names[i + 1..].contains(name), "duplicate {name}");
        }
        assert!(minerals().all(|m| m.oxygens > 0));
    }

    #[test]
    fn test_find_mineral() {
        let feldspar = find_mineral("FELDSPAR").unwrap();
        assert_eq!(feldspar.oxygens, 8);
        assert!(find_mineral("kryptonite").is_none());
    }
}
