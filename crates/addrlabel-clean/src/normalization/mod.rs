//! Field normalization for contact records.
//!
//! - **postal**: postal code canonicalization to `DDD-DDDD`
//! - **address**: prefecture de-duplication and full-width space folding
//! - **name**: display name formatting with honorific

pub mod address;
pub mod name;
pub mod postal;

pub use address::{IDEOGRAPHIC_SPACE, normalize_address};
pub use name::format_name;
pub use postal::normalize_postal_code;
