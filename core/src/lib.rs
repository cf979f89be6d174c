//! Core hierarchy types and shared normalization primitives.
//!
//! This crate defines the data model for Nigeria's administrative
//! hierarchy as recovered from electoral ward listings:
//!
//! - [`WardHierarchy`]: State → LGA → ordered ward names, serialized as a
//!   plain nested JSON object.
//! - [`TableMode`]: the table layout active in a section of the source
//!   document.
//! - [`HierarchyStats`]: derived state/LGA/ward counts.
//!
//! Normalization ([`normalize_name`], [`normalize_key`]) is shared by the
//! extractor and by validation ([`validate_hierarchy`]), which checks the
//! invariants every finished hierarchy must hold.
//!
//! # Example
//!
//! ```
//! use ward_hierarchy_core::*;
//!
//! let mut hierarchy = WardHierarchy::new();
//! hierarchy.ensure_lga("Plateau", "Barkin Ladi");
//! hierarchy.push_ward("PLATEAU", "BARKIN LADI", "Barkin Ladi");
//! hierarchy.push_ward("PLATEAU", "BARKIN LADI", "Gassa / Sho");
//!
//! assert_eq!(hierarchy.stats().wards, 2);
//! assert!(validate_hierarchy(&hierarchy).is_empty());
//! ```

mod normalize;
mod types;
mod validate;

pub use normalize::{is_normalized_key, normalize_key, normalize_name};
pub use types::*;
pub use validate::{ValidationError, validate_hierarchy};
