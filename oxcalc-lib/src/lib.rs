pub mod chemparser;
pub mod elements;
pub mod error;
pub mod minerals;
pub(crate) mod minerals_db;
pub mod recalc;
pub mod sheet;
pub mod stoich;
pub mod table;

pub use chemparser::{FormulaToken, cation_prefix, parse_formula};
pub use elements::atomic_weight;
pub use error::{OxCalcError, Result};
pub use minerals::{MineralBasis, TargetOxygen};
pub use recalc::{Recalculation, TOTAL_COLUMN, recalculate, recalculate_grid};
pub use sheet::OxideSheet;
pub use stoich::{OxideColumn, cation_oxygen_ratio, formula_mass, oxygen_count};
pub use table::{Cell, ResultTable, SampleTable};
pub use oxcalc_data;
