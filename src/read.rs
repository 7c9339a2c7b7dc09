//! Reading scripts into node sequences.
//!
//! The segmenter works on an ordered sequence of trimmed, non-empty
//! lines. This module produces that sequence from plain text and wires
//! it into [`segment_lines`][crate::parse::segment_lines]. Extracting
//! paragraphs from richer containers is the concern of whatever tool
//! exported the script to text.

use crate::{error::ReadError, node::Node, parse::segment_lines};

use std::{fs, path::Path};

/// Split script text into the trimmed, non-empty lines the segmenter
/// consumes. Every paragraph of the source document is one line.
pub fn paragraphs_from_string(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Read a script from a string and segment it into nodes.
pub fn read_nodes_from_string(content: &str) -> Vec<Node> {
    segment_lines(&paragraphs_from_string(content))
}

/// Read a script from a file and segment it into nodes.
pub fn read_nodes_from_file(path: &Path) -> Result<Vec<Node>, ReadError> {
    let content = fs::read_to_string(path).map_err(|source| ReadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(read_nodes_from_string(&content))
}
