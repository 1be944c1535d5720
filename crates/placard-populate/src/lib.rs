/* crates/placard-populate/src/lib.rs */

//! The population passes that turn authored placeholder pages into
//! data-backed ones: bracketed-token substitution over the text corpus,
//! the ordinal ward phone-number pass, and `data-site-value` binding.

pub mod bind;
pub mod resolver;
pub mod vocabulary;
pub mod wards;

pub use bind::{BINDING_ATTR, MISSING_DATA_FALLBACK, bind_attributes, create_bound_element};
pub use resolver::{PopulateReport, populate};
pub use vocabulary::PlaceholderMap;
pub use wards::populate_ward_phones;
