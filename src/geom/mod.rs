//! 2D geometry utilities for UV space.
//!
//! This module provides the small vocabulary the layout operations are built
//! from: axis-aligned bounding boxes ([`Aabb`]), UDIM tile classification
//! ([`UdimTile`]), and alignment-point computation ([`AlignDirection`]).

mod aabb;
mod udim;

pub use aabb::{Aabb, Axis};
pub use udim::{AlignDirection, UdimTile};
