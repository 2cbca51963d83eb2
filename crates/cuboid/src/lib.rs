//! A generic three-dimensional dense array container.
//!
//! The core type is [`Volume<T, E>`]: a contiguous, single-owner,
//! value-semantic 3D array over an arbitrary element type `T`, with a
//! pluggable equality strategy `E` bound into the container's type
//! identity. On top of indexed access it offers rectangular sub-region
//! extraction ([`Volume::slice`]), bulk population from external sequences
//! ([`Volume::fill_from`]), lossy cross-type conversion ([`Volume::cast`]),
//! and pure pointwise mapping ([`transform`]).
//!
//! # Layout and iteration order
//!
//! Cells live in row-major order with the plane axis slowest-varying:
//! `linear = plane * height * width + row * width + col`. Every traversal —
//! iterators, equality, fill, transform, rendering — follows exactly this
//! order.
//!
//! # Fault model
//!
//! Out-of-range indices, inverted slice bounds, zero construction
//! dimensions, and dimension-mismatched comparisons are caller bugs and
//! panic; they are never clamped, wrapped, or turned into `Result`s. The
//! only recoverable failure is backing-store allocation, surfaced by the
//! `try_*` constructors as [`VolumeError`].
//!
//! # Concurrency
//!
//! Fully synchronous and single-threaded by design. The container performs
//! no internal locking; callers needing shared access synchronize
//! externally.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod convert;
pub mod eq;
pub mod error;
pub mod iter;
pub mod volume;

mod display;

pub use convert::transform;
pub use eq::{CellEq, EpsilonEq, NativeEq};
pub use error::VolumeError;
pub use iter::Coords;
pub use volume::Volume;
