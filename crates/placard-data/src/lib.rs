/* crates/placard-data/src/lib.rs */

//! Named JSON data documents and the dotted-path lookup used to populate
//! page placeholders. Documents are fetched once per store lifetime and
//! cached; every failure mode degrades to "nothing to substitute".

pub mod fetch;
pub mod path;
pub mod store;

pub use fetch::{DocumentFetcher, FetchError, FsFetcher, HttpFetcher};
pub use path::{QualifiedPath, lookup, resolve_path};
pub use store::DataStore;
