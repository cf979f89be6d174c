//! Hierarchy type definitions for the State → LGA → Ward model.
//!
//! This module defines the data model produced by the extractor. The types
//! serialize with [`serde`] to the plain nested-object layout consumed by
//! front-ends: `{"STATE": {"LGA": ["Ward", ...]}}`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::normalize::{normalize_key, normalize_name};

/// Mapping from a normalized LGA key to its ordered ward names.
pub type LgaMap = BTreeMap<String, Vec<String>>;

/// Table layout active while scanning a section of the source document.
///
/// # Examples
///
/// ```
/// use ward_hierarchy_core::TableMode;
///
/// assert_eq!(TableMode::default(), TableMode::Basic);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TableMode {
    /// `LGA NAME | CODE | WARD NAME | CODE` (the default layout).
    #[default]
    Basic,
    /// Same as [`Basic`](TableMode::Basic) with a `NO OF PU` column before
    /// the ward code.
    WithPuCount,
}

impl std::fmt::Display for TableMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Basic => write!(f, "basic"),
            Self::WithPuCount => write!(f, "with_pu_count"),
        }
    }
}

/// Three-level administrative hierarchy: State → LGA → Wards.
///
/// State and LGA keys are normalized with [`normalize_key`] on insertion so
/// `"Cross River"` and `"CROSS  RIVER"` land on the same entry. Ward names
/// keep their display casing and are normalized with [`normalize_name`].
///
/// Keys iterate in sorted order, which keeps serialization deterministic.
///
/// # Examples
///
/// ```
/// use ward_hierarchy_core::WardHierarchy;
///
/// let mut hierarchy = WardHierarchy::new();
/// hierarchy.ensure_lga("Lagos", "Ikeja");
/// assert!(hierarchy.push_ward("LAGOS", "IKEJA", "Ojodu  Ward I"));
///
/// assert_eq!(hierarchy.wards("lagos", "ikeja"), Some(&["Ojodu Ward I".to_string()][..]));
/// assert_eq!(
///     serde_json::to_string(&hierarchy).unwrap(),
///     r#"{"LAGOS":{"IKEJA":["Ojodu Ward I"]}}"#
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WardHierarchy {
    states: BTreeMap<String, LgaMap>,
}

impl WardHierarchy {
    /// Creates an empty hierarchy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensures a state entry exists and returns its normalized key.
    ///
    /// Returns `None` when the name normalizes to an empty string.
    pub fn ensure_state(&mut self, state: &str) -> Option<String> {
        let key = normalize_key(state);
        if key.is_empty() {
            return None;
        }
        self.states.entry(key.clone()).or_default();
        Some(key)
    }

    /// Ensures both the state and the LGA entries exist.
    ///
    /// An existing LGA keeps its wards. Returns the normalized LGA key, or
    /// `None` when either name normalizes to an empty string.
    pub fn ensure_lga(&mut self, state: &str, lga: &str) -> Option<String> {
        let lga_key = normalize_key(lga);
        if lga_key.is_empty() {
            return None;
        }
        let state_key = self.ensure_state(state)?;
        self.states
            .entry(state_key)
            .or_default()
            .entry(lga_key.clone())
            .or_default();
        Some(lga_key)
    }

    /// Appends a ward to an existing LGA.
    ///
    /// Returns `false` without modifying anything when the ward name is empty
    /// or the state/LGA pair has not been created.
    pub fn push_ward(&mut self, state: &str, lga: &str, ward: &str) -> bool {
        let ward = normalize_name(ward);
        if ward.is_empty() {
            return false;
        }
        let Some(wards) = self
            .states
            .get_mut(&normalize_key(state))
            .and_then(|lgas| lgas.get_mut(&normalize_key(lga)))
        else {
            return false;
        };
        wards.push(ward);
        true
    }

    /// Returns the LGA map for a state.
    pub fn lgas(&self, state: &str) -> Option<&LgaMap> {
        self.states.get(&normalize_key(state))
    }

    /// Returns the ward list of one LGA.
    pub fn wards(&self, state: &str, lga: &str) -> Option<&[String]> {
        self.lgas(state)
            .and_then(|lgas| lgas.get(&normalize_key(lga)))
            .map(Vec::as_slice)
    }

    /// Returns `true` when the state key is present.
    pub fn contains_state(&self, state: &str) -> bool {
        self.states.contains_key(&normalize_key(state))
    }

    /// Iterates states in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &LgaMap)> {
        self.states.iter()
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    pub fn lga_count(&self) -> usize {
        self.states.values().map(BTreeMap::len).sum()
    }

    pub fn ward_count(&self) -> usize {
        self.states
            .values()
            .flat_map(BTreeMap::values)
            .map(Vec::len)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Summary counts for diagnostics output.
    pub fn stats(&self) -> HierarchyStats {
        HierarchyStats {
            states: self.state_count(),
            lgas: self.lga_count(),
            wards: self.ward_count(),
        }
    }

    /// Consumes the hierarchy, returning the underlying map.
    pub fn into_map(self) -> BTreeMap<String, LgaMap> {
        self.states
    }
}

impl From<BTreeMap<String, LgaMap>> for WardHierarchy {
    /// Builds a hierarchy from a raw map, normalizing every key and ward name.
    ///
    /// Entries whose keys collide after normalization are merged in map
    /// order. Blank ward names are dropped; empty LGAs are kept.
    fn from(map: BTreeMap<String, LgaMap>) -> Self {
        let mut hierarchy = Self::new();
        for (state, lgas) in map {
            let Some(state_key) = hierarchy.ensure_state(&state) else {
                continue;
            };
            for (lga, wards) in lgas {
                let Some(lga_key) = hierarchy.ensure_lga(&state_key, &lga) else {
                    continue;
                };
                for ward in wards {
                    hierarchy.push_ward(&state_key, &lga_key, &ward);
                }
            }
        }
        hierarchy
    }
}

/// Read-only summary counts of a [`WardHierarchy`].
///
/// Never embedded in the persisted hierarchy; reported alongside it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HierarchyStats {
    pub states: usize,
    pub lgas: usize,
    pub wards: usize,
}

impl std::fmt::Display for HierarchyStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} states, {} LGAs, {} wards",
            self.states, self.lgas, self.wards
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_collide_case_insensitively() {
        let mut hierarchy = WardHierarchy::new();
        hierarchy.ensure_lga("Cross River", "Abi");
        hierarchy.ensure_lga("CROSS  RIVER", "ABI");
        hierarchy.push_ward("cross river", "abi", "Adadama");

        assert_eq!(hierarchy.state_count(), 1);
        assert_eq!(hierarchy.lga_count(), 1);
        assert_eq!(hierarchy.wards("CROSS RIVER", "ABI").unwrap(), ["Adadama"]);
    }

    #[test]
    fn test_push_ward_requires_existing_lga() {
        let mut hierarchy = WardHierarchy::new();
        hierarchy.ensure_state("KANO");
        assert!(!hierarchy.push_ward("KANO", "DALA", "Gwammaja"));
        assert!(!hierarchy.push_ward("KANO", "", "Gwammaja"));
        assert_eq!(hierarchy.ward_count(), 0);
    }

    #[test]
    fn test_push_ward_rejects_blank_names() {
        let mut hierarchy = WardHierarchy::new();
        hierarchy.ensure_lga("KANO", "DALA");
        assert!(!hierarchy.push_ward("KANO", "DALA", "   "));
        assert_eq!(hierarchy.wards("KANO", "DALA").unwrap().len(), 0);
    }

    #[test]
    fn test_ensure_lga_keeps_existing_wards() {
        let mut hierarchy = WardHierarchy::new();
        hierarchy.ensure_lga("OYO", "IBADAN NORTH");
        hierarchy.push_ward("OYO", "IBADAN NORTH", "Ward 1");
        hierarchy.ensure_lga("OYO", "Ibadan North");
        assert_eq!(hierarchy.wards("OYO", "IBADAN NORTH").unwrap(), ["Ward 1"]);
    }

    #[test]
    fn test_stats_and_display() {
        let mut hierarchy = WardHierarchy::new();
        hierarchy.ensure_lga("OYO", "AKINYELE");
        hierarchy.ensure_lga("OYO", "EGBEDA");
        hierarchy.push_ward("OYO", "AKINYELE", "Ikereku");
        hierarchy.push_ward("OYO", "EGBEDA", "Erunmu");
        hierarchy.push_ward("OYO", "EGBEDA", "Ayede");

        let stats = hierarchy.stats();
        assert_eq!(
            stats,
            HierarchyStats {
                states: 1,
                lgas: 2,
                wards: 3
            }
        );
        assert_eq!(stats.to_string(), "1 states, 2 LGAs, 3 wards");
    }

    #[test]
    fn test_deserialize_plain_nested_object() {
        let json = r#"{"FCT": {"ABAJI": ["Agyana", "Abaji Central"]}}"#;
        let hierarchy: WardHierarchy = serde_json::from_str(json).unwrap();
        assert_eq!(hierarchy.wards("FCT", "ABAJI").unwrap().len(), 2);
    }

    #[test]
    fn test_from_map_normalizes_and_merges_keys() {
        let mut raw = BTreeMap::new();
        raw.insert(
            "Akwa Ibom".to_string(),
            LgaMap::from([("Uyo".to_string(), vec!["Uyo  Urban I".to_string()])]),
        );
        raw.insert(
            "AKWA IBOM".to_string(),
            LgaMap::from([("UYO".to_string(), vec![" ".to_string(), "Etoi".to_string()])]),
        );

        let hierarchy = WardHierarchy::from(raw);
        assert_eq!(
            hierarchy.wards("AKWA IBOM", "UYO").unwrap(),
            ["Etoi", "Uyo Urban I"]
        );
    }

    #[test]
    fn test_table_mode_serde_matches_display() {
        for mode in [TableMode::Basic, TableMode::WithPuCount] {
            let json = serde_json::to_string(&mode).unwrap();
            assert_eq!(json, format!("\"{mode}\""));
        }
    }
}
