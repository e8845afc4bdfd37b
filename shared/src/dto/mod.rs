//! # Data Transfer Objects (DTOs)
//!
//! Data structures exchanged with the heroes API.
//!
//! ## Module Organization
//!
//! - [`heroes`] - Hero and transformation records plus the request filters
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /api/heros/all
//! Authorization: Bearer eyJraWQiOi...
//! Content-Type: application/json
//!
//! { "name": "" }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! [
//!   {
//!     "id": "D13A40E5-4418-4223-9CE6-D2F9A28EBE94",
//!     "name": "Goku",
//!     "description": "Sobrevivir a la muerte es ...",
//!     "photo": "https://cdn.alfabetajuega.com/alfabetajuega/2020/12/goku1.jpg",
//!     "favorite": false
//!   }
//! ]
//! ```

pub mod heroes;

pub use heroes::*;
