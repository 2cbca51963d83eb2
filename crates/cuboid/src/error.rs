//! Error types for fallible volume construction.

use std::collections::TryReserveError;
use std::fmt;

/// Errors arising from the fallible (`try_*`) volume constructors.
///
/// Contract violations (out-of-range indices, inverted slice bounds, zero
/// construction dimensions, dimension-mismatched comparisons) are caller
/// bugs and panic instead; only resource exhaustion is reported through
/// this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VolumeError {
    /// The backing store for the requested cell count could not be allocated.
    ///
    /// The volume under construction never existed in a partial state: the
    /// constructor returns this error and nothing else.
    Alloc {
        /// Number of cells the constructor tried to reserve.
        cells: usize,
        /// The underlying reservation failure.
        source: TryReserveError,
    },
}

impl fmt::Display for VolumeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Alloc { cells, .. } => {
                write!(f, "failed to allocate backing store for {cells} cells")
            }
        }
    }
}

impl std::error::Error for VolumeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Alloc { source, .. } => Some(source),
        }
    }
}
