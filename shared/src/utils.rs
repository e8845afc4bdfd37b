//! # Shared Utility Functions
//!
//! ## Hero Ids
//!
//! The API keys transformation lookups by the hero id rendered as an uppercase,
//! hyphenated UUID (the form it hands out in hero records):
//!
//! ```rust
//! use shared::utils::hero_id_param;
//! use uuid::Uuid;
//!
//! let id = Uuid::parse_str("d13a40e5-4418-4223-9ce6-d2f9a28ebe94").unwrap();
//! assert_eq!(hero_id_param(&id), "D13A40E5-4418-4223-9CE6-D2F9A28EBE94");
//! ```

use uuid::Uuid;

/// Render a hero id as the uppercase hyphenated string the API expects.
pub fn hero_id_param(id: &Uuid) -> String {
    let mut buf = Uuid::encode_buffer();
    id.as_hyphenated().encode_upper(&mut buf).to_string()
}
