//! Hierarchy validation.
//!
//! Checks the structural invariants a finished [`WardHierarchy`] must hold:
//! normalized keys, no empty states or LGAs, and unique non-blank ward names
//! within each LGA.
//!
//! # Examples
//!
//! ```
//! use ward_hierarchy_core::*;
//!
//! let mut hierarchy = WardHierarchy::new();
//! hierarchy.ensure_lga("LAGOS", "IKEJA");
//! hierarchy.push_ward("LAGOS", "IKEJA", "Ojodu");
//! assert!(validate_hierarchy(&hierarchy).is_empty());
//!
//! // An LGA without wards violates the post-pass invariant.
//! hierarchy.ensure_lga("LAGOS", "EPE");
//! assert_eq!(
//!     validate_hierarchy(&hierarchy),
//!     vec![ValidationError::EmptyLga("LAGOS/EPE".to_string())]
//! );
//! ```

use std::collections::HashSet;

use thiserror::Error;

use crate::WardHierarchy;
use crate::normalize::{is_normalized_key, normalize_name};

/// Hierarchy validation errors.
///
/// Paths are rendered as `STATE/LGA` or `STATE/LGA/Ward`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A state or LGA key is empty or whitespace-only.
    #[error("empty key at: {0}")]
    EmptyKey(String),
    /// A state or LGA key is not uppercase with collapsed whitespace.
    #[error("key is not normalized: {0}")]
    UnnormalizedKey(String),
    /// A state has no LGAs.
    #[error("state has no LGAs: {0}")]
    EmptyState(String),
    /// An LGA has no wards.
    #[error("LGA has no wards: {0}")]
    EmptyLga(String),
    /// A ward name is blank or has untrimmed/repeated whitespace.
    #[error("ward name is not normalized: {0}")]
    UnnormalizedWard(String),
    /// The same ward name appears twice within one LGA.
    #[error("duplicate ward in LGA: {0}")]
    DuplicateWard(String),
}

/// Validates a full hierarchy, returning every violation found.
pub fn validate_hierarchy(hierarchy: &WardHierarchy) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (state, lgas) in hierarchy.iter() {
        errors.extend(validate_key(state, state));
        if lgas.is_empty() {
            errors.push(ValidationError::EmptyState(state.clone()));
            continue;
        }

        for (lga, wards) in lgas {
            let lga_path = format!("{state}/{lga}");
            errors.extend(validate_key(lga, &lga_path));
            errors.extend(validate_wards(wards, &lga_path));
        }
    }

    errors
}

fn validate_key(key: &str, path: &str) -> Option<ValidationError> {
    if key.trim().is_empty() {
        return Some(ValidationError::EmptyKey(path.to_string()));
    }
    if !is_normalized_key(key) {
        return Some(ValidationError::UnnormalizedKey(path.to_string()));
    }
    None
}

fn validate_wards(wards: &[String], lga_path: &str) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    if wards.is_empty() {
        errors.push(ValidationError::EmptyLga(lga_path.to_string()));
        return errors;
    }

    let mut seen: HashSet<&str> = HashSet::new();
    for ward in wards {
        let path = format!("{lga_path}/{ward}");
        if ward.is_empty() || normalize_name(ward) != *ward {
            errors.push(ValidationError::UnnormalizedWard(path));
            continue;
        }
        if !seen.insert(ward.as_str()) {
            errors.push(ValidationError::DuplicateWard(path));
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn raw(json: &str) -> WardHierarchy {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_validate_accepts_clean_hierarchy() {
        let hierarchy = raw(r#"{"FCT": {"ABAJI": ["Agyana", "Alu"]}, "KANO": {"DALA": ["Adakawa"]}}"#);
        assert!(validate_hierarchy(&hierarchy).is_empty());
    }

    #[test]
    fn test_validate_rejects_duplicate_wards() {
        let hierarchy = raw(r#"{"FCT": {"ABAJI": ["Agyana", "Agyana"]}}"#);
        assert_eq!(
            validate_hierarchy(&hierarchy),
            vec![ValidationError::DuplicateWard("FCT/ABAJI/Agyana".to_string())]
        );
    }

    #[test]
    fn test_validate_rejects_unnormalized_keys_and_wards() {
        let hierarchy = raw(r#"{"Kano": {"DALA": [" Adakawa"]}}"#);
        assert_eq!(
            validate_hierarchy(&hierarchy),
            vec![
                ValidationError::UnnormalizedKey("Kano".to_string()),
                ValidationError::UnnormalizedWard("Kano/DALA/ Adakawa".to_string()),
            ]
        );
    }

    #[test]
    fn test_validate_rejects_empty_state() {
        let hierarchy = WardHierarchy::from(BTreeMap::from([(
            "YOBE".to_string(),
            BTreeMap::new(),
        )]));
        assert_eq!(
            validate_hierarchy(&hierarchy),
            vec![ValidationError::EmptyState("YOBE".to_string())]
        );
    }

    #[test]
    fn test_validation_error_messages() {
        assert_eq!(
            ValidationError::EmptyLga("LAGOS/EPE".to_string()).to_string(),
            "LGA has no wards: LAGOS/EPE"
        );
    }
}
