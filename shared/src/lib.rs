//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the heroes client and the
//! Dragon Ball API. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::heroes`]**: Heroes, transformations and their query filters
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::hero_id_param`]**: Render a hero id the way the API expects it
//!
//! ## Wire Format
//!
//! The API uses bare lowercase field names (`id`, `name`, `description`,
//! `photo`, `favorite`), which is the default `serde` mapping for these structs.
//! Unknown fields sent by the server (for example the `hero` back-reference on
//! transformations) are ignored on decode.
//!
//! ## Usage
//!
//! ```rust
//! use shared::{Hero, HeroFilter};
//!
//! let filter = HeroFilter::new("Goku");
//! assert_eq!(serde_json::to_string(&filter).unwrap(), r#"{"name":"Goku"}"#);
//!
//! let json = r#"[{"id":"D13A40E5-4418-4223-9CE6-D2F9A28EBE94","name":"Goku",
//!     "description":"Saiyan","photo":"https://example.com/goku.jpg","favorite":true}]"#;
//! let heroes: Vec<Hero> = serde_json::from_str(json).unwrap();
//! assert_eq!(heroes[0].name, "Goku");
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use utils::*;
