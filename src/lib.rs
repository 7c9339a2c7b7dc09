//! Compile a linear narrative script into a cross-linked gamebook document.
//!
//! A script is a flat sequence of paragraphs exported from a structured
//! story document. `gamebook` segments those paragraphs into addressable
//! nodes (scenes, choices and choice continuations), resolves an anchor
//! for every node and a target address for every option, and renders the
//! whole graph as a single HTML page where each choice links onwards.
//!
//! # Example
//!
//! ```
//! use gamebook::{read_nodes_from_string, render_document};
//!
//! let content = "
//! Scene 1: Morning
//!
//! Some text.
//!
//! What will you do?
//!
//! Stand up (decisively)
//!
//! Stay (lazily)
//! ";
//!
//! let nodes = read_nodes_from_string(content);
//! assert_eq!(&nodes[0].id, "scene-1");
//! assert_eq!(nodes[0].options.len(), 2);
//!
//! let document = render_document(&nodes, "Story scheme");
//! assert!(document.contains(r##"href="#scene-1-1""##));
//! ```
//!
//! Options never name their targets. The *i*-th option of a node links to
//! child *i* of the node's own address, written in dotted form (`1.2` has
//! children `1.2.1`, `1.2.2`, ...) and slugified with dashes for anchors.
//! Targets are not checked for existence: unwritten branches simply yield
//! dangling links.

mod address;
mod consts;
mod document;
mod error;
mod node;
mod parse;
mod read;

pub use address::{option_targets, slug, SlugTable};
pub use document::render_document;
pub use error::ReadError;
pub use node::Node;
pub use parse::{determine_line_kind, line_has_option_shape, segment_lines, LineKind};
pub use read::{paragraphs_from_string, read_nodes_from_file, read_nodes_from_string};
