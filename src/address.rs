//! Addresses and rendering anchors for nodes.
//!
//! Node ids and link targets use two interchangeable encodings of the same
//! hierarchical address: a dotted form (`1.2.2.1`) in headers and computed
//! targets, and a dashed form (`1-2-2-1`) in rendering anchors. This module
//! converts between them, computes the target address of every option, and
//! builds the lookup table that resolves either encoding to one anchor.
//!
//! Targets are computed from position alone: the *i*-th option of a node
//! always points at child *i* of the node's own address. Whether a node
//! with that address exists is deliberately never checked; a script may
//! leave branches unwritten and the document links to them anyway.

use crate::{
    consts::{ADDRESS_SEPARATOR, SLUG_SEPARATOR},
    node::Node,
};

use std::collections::HashMap;

/// Derive the rendering anchor for a raw id or target address.
///
/// Replaces every dot with a dash. Ids produced by segmentation already
/// use dashes, so for them this is the identity.
pub fn slug(id: &str) -> String {
    id.replace(ADDRESS_SEPARATOR, &SLUG_SEPARATOR.to_string())
}

/// Compute the target addresses for a node's options.
///
/// The node's id is normalized to its dotted form and child addresses
/// are `base.1` up to `base.num_options`. The same rule applies to every
/// id shape: a scene id `scene-1` yields targets `scene.1.1`, `scene.1.2`
/// and so on, embedding the scene keyword in an otherwise numeric address.
/// That asymmetry is part of the established addressing convention and is
/// kept as is.
pub fn option_targets(id: &str, num_options: usize) -> Vec<String> {
    let base = id.replace(SLUG_SEPARATOR, &ADDRESS_SEPARATOR.to_string());

    (1..=num_options)
        .map(|i| format!("{}{}{}", base, ADDRESS_SEPARATOR, i))
        .collect()
}

/// Immutable lookup table from node addresses to rendering anchors.
///
/// Every node is registered under both encodings of its id, so link
/// resolution may use either separator convention. Built once, after
/// segmentation completes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SlugTable {
    slugs: HashMap<String, String>,
}

impl SlugTable {
    /// Register all nodes under their raw and dotted ids.
    pub fn from_nodes(nodes: &[Node]) -> Self {
        let mut slugs = HashMap::new();

        for node in nodes {
            let anchor = slug(&node.id);

            slugs.insert(node.id.clone(), anchor.clone());
            slugs.insert(
                node.id
                    .replace(SLUG_SEPARATOR, &ADDRESS_SEPARATOR.to_string()),
                anchor,
            );
        }

        SlugTable { slugs }
    }

    /// Look up the anchor registered for an id, in either encoding.
    pub fn get(&self, id: &str) -> Option<&str> {
        self.slugs.get(id).map(|anchor| anchor.as_str())
    }

    /// Resolve an id to an anchor, deriving one if it is not registered.
    ///
    /// Unregistered ids happen whenever an option points at an unwritten
    /// branch; the derived anchor then simply dangles.
    pub fn resolve(&self, id: &str) -> String {
        self.get(id).map(str::to_string).unwrap_or_else(|| slug(id))
    }
}
