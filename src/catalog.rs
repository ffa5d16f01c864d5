use crate::record::RefuelRecord;
use indexmap::IndexSet;
use std::convert::Infallible;
use std::fmt;
use std::fmt::Formatter;
use std::str::FromStr;

/// The label of the synthetic selection combining every fuel type.
pub const ALL_FUEL_TYPES: &str = "all";

/// Selects which records take part in a report.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FuelFilter {
    /// Every record, regardless of its fuel type.
    All,

    /// Only records whose fuel type equals the given name exactly.
    Type(String),
}

impl FuelFilter {
    pub fn matches(&self, record: &RefuelRecord) -> bool {
        match self {
            FuelFilter::All => true,
            FuelFilter::Type(name) => record.fuel_type() == name,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            FuelFilter::All => ALL_FUEL_TYPES,
            FuelFilter::Type(name) => name,
        }
    }
}

impl fmt::Display for FuelFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for FuelFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            ALL_FUEL_TYPES => FuelFilter::All,
            name => FuelFilter::Type(name.to_string()),
        })
    }
}

/// Lists the fuel types present in `records` in order of first appearance,
/// followed by [`FuelFilter::All`].
pub fn list_fuel_types(records: &[RefuelRecord]) -> Vec<FuelFilter> {
    let names: IndexSet<&str> = records.iter().map(RefuelRecord::fuel_type).collect();

    names
        .into_iter()
        .map(|name| FuelFilter::Type(name.to_string()))
        .chain(std::iter::once(FuelFilter::All))
        .collect()
}
