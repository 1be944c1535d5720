/* crates/placard-dom/src/lib.rs */

//! A deliberately small HTML tree for populating static informational pages.
//!
//! Pages are parsed into an arena of nodes, queried and mutated in place,
//! and serialized back out. Raw attribute text is preserved so that
//! `Document::parse(html).to_html() == html` for the markup the site ships.

pub mod document;
pub mod node;

mod parse;

pub use document::Document;
pub use node::{Node, NodeId, NodeKind};
