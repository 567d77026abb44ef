//! UV island layout operations.
//!
//! This module contains the island segmentation machinery and the three
//! layout operations built on top of it:
//!
//! - **Islands**: connected-component segmentation with selectable grouping
//! - **Transform**: scale, rotate, and translate islands about a pivot
//! - **Align**: snap islands to a shared edge, center line, or UDIM tile
//! - **Distribute**: even spacing along an axis, or overlap removal
//!
//! Operations take a mutable [`UvMesh`](crate::mesh::UvMesh), a UV channel
//! index, an optional [`Selection`](crate::mesh::Selection), their options
//! struct, and a [`Cancel`] token, and return an [`OpReport`].

pub mod align;
pub mod cancel;
pub mod distribute;
pub mod islands;
pub mod op;
pub mod transform;

pub use align::{align_uvs, AlignOptions, AnchorMode};
pub use cancel::Cancel;
pub use distribute::{distribute_uvs, DistributeMode, DistributeOptions};
pub use islands::{GroupingMode, Island, IslandSet};
pub use op::{Diagnostic, LayoutOp, OpReport};
pub use transform::{transform_uvs, PivotMode, TransformOptions, TranslationMode};
