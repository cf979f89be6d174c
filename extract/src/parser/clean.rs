//! Post-scan cleanup.

use std::collections::HashSet;

use ward_hierarchy_core::WardHierarchy;

/// What [`clean_hierarchy`] removed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleanSummary {
    pub removed_duplicate_wards: usize,
    pub removed_empty_lgas: usize,
    pub removed_empty_states: usize,
}

/// Deduplicates each LGA's wards keeping first occurrences, then removes
/// LGAs without wards and states without LGAs.
pub fn clean_hierarchy(hierarchy: WardHierarchy) -> (WardHierarchy, CleanSummary) {
    let mut summary = CleanSummary::default();
    let mut states = hierarchy.into_map();

    for lgas in states.values_mut() {
        for wards in lgas.values_mut() {
            let before = wards.len();
            let mut seen = HashSet::new();
            wards.retain(|ward| seen.insert(ward.clone()));
            summary.removed_duplicate_wards += before - wards.len();
        }

        let before = lgas.len();
        lgas.retain(|_, wards| !wards.is_empty());
        summary.removed_empty_lgas += before - lgas.len();
    }

    let before = states.len();
    states.retain(|_, lgas| !lgas.is_empty());
    summary.removed_empty_states = before - states.len();

    (WardHierarchy::from(states), summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicates_removed_in_order() {
        let mut hierarchy = WardHierarchy::new();
        hierarchy.ensure_lga("OYO", "EGBEDA");
        for ward in ["Erunmu", "Ayede", "Erunmu", "Olodan", "Ayede"] {
            hierarchy.push_ward("OYO", "EGBEDA", ward);
        }

        let (cleaned, summary) = clean_hierarchy(hierarchy);
        assert_eq!(
            cleaned.wards("OYO", "EGBEDA").unwrap(),
            ["Erunmu", "Ayede", "Olodan"]
        );
        assert_eq!(summary.removed_duplicate_wards, 2);
    }

    #[test]
    fn test_empty_lgas_and_states_removed() {
        let mut hierarchy = WardHierarchy::new();
        hierarchy.ensure_state("ABIA");
        hierarchy.ensure_lga("KANO", "DALA");
        hierarchy.ensure_lga("KANO", "GWALE");
        hierarchy.push_ward("KANO", "GWALE", "Dorayi");

        let (cleaned, summary) = clean_hierarchy(hierarchy);
        assert!(!cleaned.contains_state("ABIA"));
        assert!(cleaned.lgas("KANO").unwrap().get("DALA").is_none());
        assert_eq!(
            summary,
            CleanSummary {
                removed_duplicate_wards: 0,
                removed_empty_lgas: 1,
                removed_empty_states: 1,
            }
        );
    }
}
