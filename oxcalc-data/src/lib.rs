#![no_std]

use serde::Serialize;

/// Citation for the atomic weight table.
pub const SOURCE: SourceRecord = SourceRecord {
    tag: "IUPAC 2021",
    reference: "Prohaska et al. 2022, Standard atomic weights of the elements 2021 \
                (IUPAC Technical Report), Table 1 (abridged)",
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SourceRecord {
    pub tag: &'static str,
    pub reference: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ElementRecord {
    pub atomic_number: u16,
    pub symbol: &'static str,
    pub name: &'static str,
    /// Abridged standard atomic weight (g/mol). Elements without a standard
    /// weight carry the mass number of their longest-lived isotope.
    pub atomic_weight: f64,
}

const fn el(
    atomic_number: u16,
    symbol: &'static str,
    name: &'static str,
    atomic_weight: f64,
) -> ElementRecord {
    ElementRecord {
        atomic_number,
        symbol,
        name,
        atomic_weight,
    }
}

/// All 118 elements, ordered by atomic number.
pub const ELEMENTS: &[ElementRecord] = &[
    el(1, "H", "hydrogen", 1.0080),
    el(2, "He", "helium", 4.0026),
    el(3, "Li", "lithium", 6.94),
    el(4, "Be", "beryllium", 9.0122),
    el(5, "B", "boron", 10.81),
    el(6, "C", "carbon", 12.011),
    el(7, "N", "nitrogen", 14.007),
    el(8, "O", "oxygen", 15.999),
    el(9, "F", "fluorine", 18.998),
    el(10, "Ne", "neon", 20.180),
    el(11, "Na", "sodium", 22.990),
    el(12, "Mg", "magnesium", 24.305),
    el(13, "Al", "aluminium", 26.982),
    el(14, "Si", "silicon", 28.085),
    el(15, "P", "phosphorus", 30.974),
    el(16, "S", "sulfur", 32.06),
    el(17, "Cl", "chlorine", 35.45),
    el(18, "Ar", "argon", 39.95),
    el(19, "K", "potassium", 39.098),
    el(20, "Ca", "calcium", 40.078),
    el(21, "Sc", "scandium", 44.956),
    el(22, "Ti", "titanium", 47.867),
    el(23, "V", "vanadium", 50.942),
    el(24, "Cr", "chromium", 51.996),
    el(25, "Mn", "manganese", 54.938),
    el(26, "Fe", "iron", 55.845),
    el(27, "Co", "cobalt", 58.933),
    el(28, "Ni", "nickel", 58.693),
    el(29, "Cu", "copper", 63.546),
    el(30, "Zn", "zinc", 65.38),
    el(31, "Ga", "gallium", 69.723),
    el(32, "Ge", "germanium", 72.630),
    el(33, "As", "arsenic", 74.922),
    el(34, "Se", "selenium", 78.971),
    el(35, "Br", "bromine", 79.904),
    el(36, "Kr", "krypton", 83.798),
    el(37, "Rb", "rubidium", 85.468),
    el(38, "Sr", "strontium", 87.62),
    el(39, "Y", "yttrium", 88.906),
    el(40, "Zr", "zirconium", 91.224),
    el(41, "Nb", "niobium", 92.906),
    el(42, "Mo", "molybdenum", 95.95),
    el(43, "Tc", "technetium", 98.0),
    el(44, "Ru", "ruthenium", 101.07),
    el(45, "Rh", "rhodium", 102.91),
    el(46, "Pd", "palladium", 106.42),
    el(47, "Ag", "silver", 107.87),
    el(48, "Cd", "cadmium", 112.41),
    el(49, "In", "indium", 114.82),
    el(50, "Sn", "tin", 118.71),
    el(51, "Sb", "antimony", 121.76),
    el(52, "Te", "tellurium", 127.60),
    el(53, "I", "iodine", 126.90),
    el(54, "Xe", "xenon", 131.29),
    el(55, "Cs", "caesium", 132.91),
    el(56, "Ba", "barium", 137.33),
    el(57, "La", "lanthanum", 138.91),
    el(58, "Ce", "cerium", 140.12),
    el(59, "Pr", "praseodymium", 140.91),
    el(60, "Nd", "neodymium", 144.24),
    el(61, "Pm", "promethium", 145.0),
    el(62, "Sm", "samarium", 150.36),
    el(63, "Eu", "europium", 151.96),
    el(64, "Gd", "gadolinium", 157.25),
    el(65, "Tb", "terbium", 158.93),
    el(66, "Dy", "dysprosium", 162.50),
    el(67, "Ho", "holmium", 164.93),
    el(68, "Er", "erbium", 167.26),
    el(69, "Tm", "thulium", 168.93),
    el(70, "Yb", "ytterbium", 173.05),
    el(71, "Lu", "lutetium", 174.97),
    el(72, "Hf", "hafnium", 178.49),
    el(73, "Ta", "tantalum", 180.95),
    el(74, "W", "tungsten", 183.84),
    el(75, "Re", "rhenium", 186.21),
    el(76, "Os", "osmium", 190.23),
    el(77, "Ir", "iridium", 192.22),
    el(78, "Pt", "platinum", 195.08),
    el(79, "Au", "gold", 196.97),
    el(80, "Hg", "mercury", 200.59),
    el(81, "Tl", "thallium", 204.38),
    el(82, "Pb", "lead", 207.2),
    el(83, "Bi", "bismuth", 208.98),
    el(84, "Po", "polonium", 209.0),
    el(85, "At", "astatine", 210.0),
    el(86, "Rn", "radon", 222.0),
    el(87, "Fr", "francium", 223.0),
    el(88, "Ra", "radium", 226.0),
    el(89, "Ac", "actinium", 227.0),
    el(90, "Th", "thorium", 232.04),
    el(91, "Pa", "protactinium", 231.04),
    el(92, "U", "uranium", 238.03),
    el(93, "Np", "neptunium", 237.0),
    el(94, "Pu", "plutonium", 244.0),
    el(95, "Am", "americium", 243.0),
    el(96, "Cm", "curium", 247.0),
    el(97, "Bk", "berkelium", 247.0),
    el(98, "Cf", "californium", 251.0),
    el(99, "Es", "einsteinium", 252.0),
    el(100, "Fm", "fermium", 257.0),
    el(101, "Md", "mendelevium", 258.0),
    el(102, "No", "nobelium", 259.0),
    el(103, "Lr", "lawrencium", 262.0),
    el(104, "Rf", "rutherfordium", 267.0),
    el(105, "Db", "dubnium", 270.0),
    el(106, "Sg", "seaborgium", 271.0),
    el(107, "Bh", "bohrium", 270.0),
    el(108, "Hs", "hassium", 277.0),
    el(109, "Mt", "meitnerium", 276.0),
    el(110, "Ds", "darmstadtium", 281.0),
    el(111, "Rg", "roentgenium", 280.0),
    el(112, "Cn", "copernicium", 285.0),
    el(113, "Nh", "nihonium", 284.0),
    el(114, "Fl", "flerovium", 289.0),
    el(115, "Mc", "moscovium", 288.0),
    el(116, "Lv", "livermorium", 293.0),
    el(117, "Ts", "tennessine", 294.0),
    el(118, "Og", "oganesson", 294.0),
];
