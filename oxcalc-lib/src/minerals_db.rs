/// Embedded oxygen basis catalog.
///
/// Each entry: (name, oxygens per formula unit, ideal formula)
pub(crate) const MINERALS: &[(&str, u32, &str)] = &[
    // Nesosilicates
    ("olivine", 4, "(Mg,Fe)2SiO4"),
    ("forsterite", 4, "Mg2SiO4"),
    ("fayalite", 4, "Fe2SiO4"),
    ("garnet", 12, "X3Y2Si3O12"),
    ("zircon", 4, "ZrSiO4"),
    ("titanite", 5, "CaTiSiO5"),
    ("kyanite", 5, "Al2SiO5"),
    // Chain silicates
    ("pyroxene", 6, "XYSi2O6"),
    ("clinopyroxene", 6, "CaMgSi2O6"),
    ("orthopyroxene", 6, "(Mg,Fe)2Si2O6"),
    ("amphibole", 23, "A0-1B2C5T8O22(OH)2"),
    // Sheet silicates (anhydrous basis)
    ("mica", 22, "XY2-3Z4O10(OH)2"),
    ("biotite", 22, "K(Mg,Fe)3AlSi3O10(OH)2"),
    ("muscovite", 22, "KAl2AlSi3O10(OH)2"),
    ("chlorite", 28, "(Mg,Fe)5Al2Si3O10(OH)8"),
    ("serpentine", 7, "Mg3Si2O5(OH)4"),
    ("talc", 11, "Mg3Si4O10(OH)2"),
    // Framework silicates
    ("feldspar", 8, "(K,Na,Ca)(Al,Si)4O8"),
    ("plagioclase", 8, "(Na,Ca)(Al,Si)4O8"),
    ("alkali feldspar", 8, "(K,Na)AlSi3O8"),
    ("nepheline", 4, "NaAlSiO4"),
    ("quartz", 2, "SiO2"),
    // Oxides
    ("spinel", 4, "MgAl2O4"),
    ("magnetite", 4, "Fe3O4"),
    ("chromite", 4, "FeCr2O4"),
    ("ilmenite", 3, "FeTiO3"),
    ("hematite", 3, "Fe2O3"),
    ("rutile", 2, "TiO2"),
    ("corundum", 3, "Al2O3"),
    ("periclase", 1, "MgO"),
    // Phosphates
    ("monazite", 4, "(Ce,La,Nd,Th)PO4"),
];

/// Find a mineral by name (case-insensitive).
/// Returns (name, oxygens, formula).
pub(crate) fn find_mineral(name: &str) -> Option<(&'static str, u32, &'static str)> {
    let lower = name.trim().to_lowercase();
    MINERALS
        .iter()
        .copied()
        .find(|&(mineral, _, _)| mineral == lower)
}
