//! The node data model that segmented scripts are made of.
//!
//! A script is a flat list of paragraphs. Segmenting it produces `Node`s:
//! one per scene, choice point or choice continuation, in the order their
//! headers appeared. Nodes are addressed by their raw `id`, which comes in
//! three shapes:
//!
//! *   `scene-N` for a top level scene (`Scene 3: The lecture hall`),
//! *   bare digits `N` for a top level choice (`Choice 2: ...`),
//! *   a dash-joined path `a-b-...-k` for a continuation of a nested
//!     choice (`Continuation of Choice 1.2.2.1: ...`).
//!
//! An option never names its target: the *i*-th option of a node always
//! points at child *i* of that node's address. Target computation lives
//! in [`crate::address`].

#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

/// A single narrative unit: a scene, a choice point or a continuation.
///
/// Once the segmenter has flushed a node it is never mutated again.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde_support", derive(Deserialize, Serialize))]
pub struct Node {
    /// Raw identifier: `scene-N`, bare digits, or a dash-joined path.
    pub id: String,
    /// The header line that introduced this node, verbatim.
    pub title: String,
    /// Lines of text belonging to this node, in script order.
    pub body: Vec<String>,
    /// Raw option lines, in script order. The *i*-th option (1-based)
    /// links to child *i* of this node's address.
    pub options: Vec<String>,
}

impl Node {
    /// Create an empty node from its header line and assigned id.
    pub(crate) fn from_header(id: String, title: &str) -> Self {
        Node {
            id,
            title: title.to_string(),
            body: Vec::new(),
            options: Vec::new(),
        }
    }
}
