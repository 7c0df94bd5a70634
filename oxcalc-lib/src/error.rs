use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum OxCalcError {
    UnknownElement(String),
    InvalidFormula(String),
    MalformedInput(String),
    UnrecognizedFormula { column: String, reason: String },
    InvalidTargetOxygen(String),
    DegenerateRow { row: usize },
}

pub type Result<T> = std::result::Result<T, OxCalcError>;

impl OxCalcError {
    /// Attach the offending column header to a formula level error.
    pub(crate) fn in_column(self, column: &str) -> Self {
        match self {
            Self::UnrecognizedFormula { .. } => self,
            other => Self::UnrecognizedFormula {
                column: column.to_string(),
                reason: other.to_string(),
            },
        }
    }
}

impl fmt::Display for OxCalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownElement(e) => write!(f, "unknown element: {e}"),
            Self::InvalidFormula(formula) => write!(f, "invalid chemical formula: {formula}"),
            Self::MalformedInput(msg) => write!(f, "malformed input: {msg}"),
            Self::UnrecognizedFormula { column, reason } => {
                write!(f, "unrecognized oxide formula: {column} ({reason})")
            }
            Self::InvalidTargetOxygen(value) => write!(
                f,
                "invalid target oxygen count '{value}': expected a positive integer or a mineral name"
            ),
            Self::DegenerateRow { row } => write!(
                f,
                "row {row} has a zero oxygen proportion sum and cannot be normalized"
            ),
        }
    }
}

impl std::error::Error for OxCalcError {}
