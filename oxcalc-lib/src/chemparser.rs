use crate::error::{OxCalcError, Result};

/// One `(element, count)` pair of a parsed formula.
///
/// `count` is `None` when no digits follow the symbol, which means an
/// implicit count of one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormulaToken {
    pub symbol: String,
    pub count: Option<u32>,
}

impl FormulaToken {
    pub fn count_or_one(&self) -> u32 {
        self.count.unwrap_or(1)
    }

    pub fn is_oxygen(&self) -> bool {
        self.symbol == "O"
    }
}

struct Scanner<'a> {
    input: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Scanner {
            input,
            bytes: input.as_bytes(),
            pos: 0,
        }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    /// Element symbol: one uppercase letter and an optional lowercase letter.
    fn read_symbol(&mut self) -> std::result::Result<&'a str, String> {
        let start = self.pos;
        match self.peek() {
            Some(ch) if ch.is_ascii_uppercase() => self.pos += 1,
            Some(_) => {
                return Err(format!(
                    "unrecognized character '{}' at position {}",
                    self.input[start..].chars().next().unwrap_or('?'),
                    start
                ));
            }
            None => return Err("unexpected end of formula".to_string()),
        }
        if self.peek().is_some_and(|ch| ch.is_ascii_lowercase()) {
            self.pos += 1;
        }
        Ok(&self.input[start..self.pos])
    }

    fn read_count(&mut self) -> std::result::Result<Option<u32>, String> {
        let start = self.pos;
        while self.peek().is_some_and(|ch| ch.is_ascii_digit()) {
            self.pos += 1;
        }
        if start == self.pos {
            return Ok(None);
        }
        let digits = &self.input[start..self.pos];
        match digits.parse::<u32>() {
            Ok(0) => Err(format!("zero count at position {start}")),
            Ok(n) => Ok(Some(n)),
            Err(_) => Err(format!("count '{digits}' is too large")),
        }
    }
}

fn scan(formula: &str) -> std::result::Result<Vec<FormulaToken>, String> {
    if formula.is_empty() {
        return Err("empty formula".to_string());
    }

    let mut scanner = Scanner::new(formula);
    let mut tokens = Vec::new();
    while !scanner.at_end() {
        let symbol = scanner.read_symbol()?;
        let count = scanner.read_count()?;
        tokens.push(FormulaToken {
            symbol: symbol.to_string(),
            count,
        });
    }
    Ok(tokens)
}

/// Parse an oxide formula into its ordered `(element, count)` pairs.
///
/// Only the flat `Symbol[count]` grammar is accepted: no parentheses,
/// fractional subscripts or charges. Anything else is an error rather than
/// being skipped. Symbols are not checked against the element table here.
///
/// # Examples
/// ```
/// let tokens = oxcalc::chemparser::parse_formula("Al2O3").unwrap();
/// assert_eq!(tokens[0].symbol, "Al");
/// assert_eq!(tokens[0].count, Some(2));
/// assert_eq!(tokens[1].symbol, "O");
/// assert_eq!(tokens[1].count, Some(3));
/// ```
pub fn parse_formula(formula: &str) -> Result<Vec<FormulaToken>> {
    let trimmed = formula.trim();
    scan(trimmed).map_err(|msg| OxCalcError::InvalidFormula(format!("{trimmed}: {msg}")))
}

/// Returns true if the formula is syntactically well formed.
pub fn validate_formula(formula: &str) -> bool {
    parse_formula(formula).is_ok()
}

/// Map an oxide column header to its cation symbol ("SiO2" -> "Si").
///
/// Headers that are not well formed formulas (such as "Total") are returned
/// unchanged.
pub fn cation_prefix(column: &str) -> &str {
    let trimmed = column.trim();
    match scan(trimmed) {
        Ok(tokens) => {
            let len = tokens[0].symbol.len();
            &trimmed[..len]
        }
        Err(_) => column,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(formula: &str) -> Vec<(String, Option<u32>)> {
        parse_formula(formula)
            .unwrap()
            .into_iter()
            .map(|t| (t.symbol, t.count))
            .collect()
    }

    #[test]
    fn test_simple_oxides() {
        assert_eq!(
            pairs("SiO2"),
            vec![("Si".to_string(), None), ("O".to_string(), Some(2))]
        );
        assert_eq!(
            pairs("FeO"),
            vec![("Fe".to_string(), None), ("O".to_string(), None)]
        );
        assert_eq!(
            pairs("Na2O"),
            vec![("Na".to_string(), Some(2)), ("O".to_string(), None)]
        );
    }

    #[test]
    fn test_multi_digit_count() {
        let tokens = parse_formula("Y3Al5O12").unwrap();
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[2].count, Some(12));
    }

    #[test]
    fn test_co_vs_co() {
        // CO = carbon monoxide
        assert_eq!(
            pairs("CO"),
            vec![("C".to_string(), None), ("O".to_string(), None)]
        );
        // Co = cobalt
        assert_eq!(pairs("CoO")[0].0, "Co");
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        assert_eq!(pairs("  MgO "), pairs("MgO"));
    }

    #[test]
    fn test_invalid_formula() {
        assert!(parse_formula("").is_err());
        assert!(parse_formula("sio2").is_err()); // lowercase
        assert!(parse_formula("2SiO2").is_err()); // leading count
        assert!(parse_formula("Fe(OH)2").is_err()); // parentheses
        assert!(parse_formula("Fe0.7O").is_err()); // fractional
        assert!(parse_formula("Fe2+").is_err()); // charge
        assert!(parse_formula("Si O2").is_err()); // inner space
        assert!(parse_formula("Fe0O").is_err()); // zero count
        assert!(parse_formula("Fe99999999999O").is_err());
    }

    #[test]
    fn test_unknown_symbol_is_syntactically_valid() {
        // element lookup happens later
        assert!(validate_formula("Xx2O5"));
    }

    #[test]
    fn test_error_names_formula() {
        let err = parse_formula("Si#O2").unwrap_err();
        match err {
            OxCalcError::InvalidFormula(msg) => {
                assert!(msg.contains("Si#O2"), "{msg}");
                assert!(msg.contains("position 2"), "{msg}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_cation_prefix() {
        assert_eq!(cation_prefix("SiO2"), "Si");
        assert_eq!(cation_prefix("Al2O3"), "Al");
        assert_eq!(cation_prefix("K2O"), "K");
        assert_eq!(cation_prefix(" FeO"), "Fe");
    }

    #[test]
    fn test_cation_prefix_passthrough() {
        assert_eq!(cation_prefix("MalformedXYZ!"), "MalformedXYZ!");
        assert_eq!(cation_prefix("Total"), "Total");
        assert_eq!(cation_prefix(""), "");
        assert_eq!(cation_prefix("wt%"), "wt%");
    }
}
