// File: crates/sales-core/src/filter.rs
// Summary: Region selector and the pure filter that derives a chart subset from the store.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::SelectorError;
use crate::record::{Region, SalesRecord};
use crate::store::DataStore;

/// Current value of the region control: everything, or one region.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RegionSelector {
    #[default]
    All,
    Region(Region),
}

impl RegionSelector {
    /// Every selector the dashboard offers, in display order.
    pub const OPTIONS: [RegionSelector; 5] = [
        RegionSelector::All,
        RegionSelector::Region(Region::North),
        RegionSelector::Region(Region::East),
        RegionSelector::Region(Region::South),
        RegionSelector::Region(Region::West),
    ];

    /// Lowercase wire value ("all", "north", ...).
    pub const fn as_str(&self) -> &'static str {
        match self {
            RegionSelector::All => "all",
            RegionSelector::Region(r) => r.as_str(),
        }
    }

    /// Display form used in titles and control labels ("All", "North", ...).
    pub const fn label(&self) -> &'static str {
        match self {
            RegionSelector::All => "All",
            RegionSelector::Region(r) => r.label(),
        }
    }

    #[inline]
    pub fn matches(&self, record: &SalesRecord) -> bool {
        match self {
            RegionSelector::All => true,
            RegionSelector::Region(r) => record.region == *r,
        }
    }
}

impl fmt::Display for RegionSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<Region> for RegionSelector {
    fn from(r: Region) -> Self { RegionSelector::Region(r) }
}

impl FromStr for RegionSelector {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(RegionSelector::All);
        }
        s.parse::<Region>().map(RegionSelector::Region)
    }
}

impl Serialize for RegionSelector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RegionSelector {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Records matching `selector`, in store order.
pub fn filter(store: &DataStore, selector: RegionSelector) -> Vec<&SalesRecord> {
    store.iter().filter(|r| selector.matches(r)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_parses_all_and_regions() {
        assert_eq!("All".parse::<RegionSelector>().unwrap(), RegionSelector::All);
        assert_eq!("south".parse::<RegionSelector>().unwrap(), RegionSelector::Region(Region::South));
        let err = "Midwest".parse::<RegionSelector>().unwrap_err();
        assert_eq!(err.value, "Midwest");
    }

    #[test]
    fn selector_serializes_as_wire_value() {
        let json = serde_json::to_string(&RegionSelector::Region(Region::East)).unwrap();
        assert_eq!(json, "\"east\"");
        let back: RegionSelector = serde_json::from_str("\"ALL\"").unwrap();
        assert_eq!(back, RegionSelector::All);
        assert!(serde_json::from_str::<RegionSelector>("\"nowhere\"").is_err());
    }
}
