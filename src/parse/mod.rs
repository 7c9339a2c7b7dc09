//! Classification of script lines and their segmentation into nodes.

mod kind;
mod segment;

pub use kind::{determine_line_kind, line_has_option_shape, LineKind};
pub use segment::segment_lines;
