//! Trellis Tree Engine
//!
//! This crate provides the indexed tree model with tri-state selection:
//! - Content and relation indices, kept mutually consistent at all times
//! - Index builder: normalizes flat or nested raw records into one
//!   canonical index pair
//! - State propagator: selection changes cascade to descendants and are
//!   re-derived across ancestors
//! - Structural mutator: append, remove and move with cycle safety

mod builder;
mod index;
mod mutate;
mod selection;
mod tree;

pub use builder::*;
pub use index::*;
pub use selection::*;
pub use tree::*;
