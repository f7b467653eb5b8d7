//! Practical list of CoolProp pure and pseudo-pure fluid names.
//!
//! Informational only: queries forward whatever fluid name the user typed,
//! and the engine is the sole judge of whether it exists.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FluidCatalogEntry {
    /// Name to pass to the engine.
    pub coolprop_name: &'static str,
    pub display_name: &'static str,
    pub aliases: &'static [&'static str],
}

impl FluidCatalogEntry {
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_ascii_lowercase();
        if query.is_empty() {
            return true;
        }

        self.coolprop_name.to_ascii_lowercase().contains(&query)
            || self.display_name.to_ascii_lowercase().contains(&query)
            || self
                .aliases
                .iter()
                .any(|alias| alias.to_ascii_lowercase().contains(&query))
    }
}

const fn entry(
    coolprop_name: &'static str,
    display_name: &'static str,
    aliases: &'static [&'static str],
) -> FluidCatalogEntry {
    FluidCatalogEntry {
        coolprop_name,
        display_name,
        aliases,
    }
}

const COOLPROP_CATALOG: [FluidCatalogEntry; 36] = [
    entry("Water", "Water", &["h2o", "steam"]),
    entry("Air", "Air", &["atmosphere"]),
    entry("Nitrogen", "Nitrogen", &["n2"]),
    entry("Oxygen", "Oxygen", &["o2"]),
    entry("Hydrogen", "Hydrogen", &["h2"]),
    entry("Helium", "Helium", &["he"]),
    entry("Argon", "Argon", &["ar"]),
    entry("Neon", "Neon", &["ne"]),
    entry("Krypton", "Krypton", &["kr"]),
    entry("Xenon", "Xenon", &["xe"]),
    entry("CarbonDioxide", "Carbon Dioxide", &["co2", "r744"]),
    entry("CarbonMonoxide", "Carbon Monoxide", &["co"]),
    entry("NitrousOxide", "Nitrous Oxide", &["n2o"]),
    entry("Ammonia", "Ammonia", &["nh3", "r717"]),
    entry("SulfurDioxide", "Sulfur Dioxide", &["so2"]),
    entry("Methane", "Methane", &["ch4", "natural gas"]),
    entry("Ethane", "Ethane", &["c2h6", "r170"]),
    entry("Ethylene", "Ethylene", &["c2h4", "r1150"]),
    entry("n-Propane", "Propane", &["c3h8", "r290"]),
    entry("Propylene", "Propylene", &["c3h6", "r1270"]),
    entry("n-Butane", "n-Butane", &["r600"]),
    entry("IsoButane", "Isobutane", &["r600a"]),
    entry("n-Pentane", "n-Pentane", &["r601"]),
    entry("Isopentane", "Isopentane", &["r601a"]),
    entry("n-Hexane", "n-Hexane", &[]),
    entry("Methanol", "Methanol", &["ch3oh"]),
    entry("Ethanol", "Ethanol", &["c2h5oh"]),
    entry("Toluene", "Toluene", &[]),
    entry("R32", "R32", &["difluoromethane"]),
    entry("R125", "R125", &["pentafluoroethane"]),
    entry("R134a", "R134a", &["tetrafluoroethane"]),
    entry("R152A", "R152a", &["difluoroethane"]),
    entry("R245fa", "R245fa", &[]),
    entry("R1234yf", "R1234yf", &[]),
    entry("R1234ze(E)", "R1234ze(E)", &["r1234ze"]),
    entry("R410A", "R410A (pseudo-pure)", &[]),
];

pub fn coolprop_catalog() -> &'static [FluidCatalogEntry] {
    &COOLPROP_CATALOG
}

pub fn filter_coolprop_catalog(query: &str) -> Vec<FluidCatalogEntry> {
    coolprop_catalog()
        .iter()
        .copied()
        .filter(|entry| entry.matches_query(query))
        .collect()
}
