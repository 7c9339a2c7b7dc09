//! Errors from reading narrative scripts.
//!
//! Segmentation and address resolution never fail: every line is
//! classifiable and every id resolves to an anchor. The only thing that
//! can go wrong is getting the script into memory in the first place.

use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
/// Error from reading a script before segmentation.
pub enum ReadError {
    /// The script file could not be read.
    #[error("could not read script file '{}': {source}", path.display())]
    Io {
        /// Path of the file that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}
