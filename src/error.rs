//! Error types for islet.
//!
//! This module defines all error types used throughout the library.
//!
//! Errors are reserved for programming mistakes surfaced at the API edge:
//! malformed mesh input, inconsistent selections, and non-finite operation
//! parameters. Degenerate geometry (empty selections, single-island
//! distributions) and cooperative cancellation are normal outcomes and never
//! produce an error.

use thiserror::Error;

/// Result type alias using [`LayoutError`].
pub type Result<T> = std::result::Result<T, LayoutError>;

/// Errors that can occur during UV layout operations.
#[derive(Error, Debug)]
pub enum LayoutError {
    /// A triangle references an invalid vertex index.
    #[error("triangle {triangle} references invalid vertex index {vertex}")]
    InvalidVertexIndex {
        /// The triangle index.
        triangle: usize,
        /// The invalid vertex index.
        vertex: usize,
    },

    /// A triangle has duplicate vertex indices.
    #[error("triangle {triangle} is degenerate (has duplicate vertices)")]
    DegenerateTriangle {
        /// The triangle index.
        triangle: usize,
    },

    /// A UV channel does not match the mesh vertex count.
    #[error("UV channel has {actual} coordinates, mesh has {expected} vertices")]
    ChannelSizeMismatch {
        /// The mesh vertex count.
        expected: usize,
        /// The channel coordinate count.
        actual: usize,
    },

    /// An operation targeted a UV channel that does not exist.
    #[error("UV channel {channel} does not exist ({available} channels available)")]
    InvalidChannel {
        /// The requested channel index.
        channel: usize,
        /// The number of channels on the mesh.
        available: usize,
    },

    /// A selection references a vertex outside the mesh.
    #[error("selection references vertex {vertex} outside mesh of {num_vertices} vertices")]
    OutOfRangeVertex {
        /// The out-of-range vertex index.
        vertex: usize,
        /// The mesh vertex count.
        num_vertices: usize,
    },

    /// A selection references an edge outside the mesh.
    #[error("selection references edge {edge} outside mesh of {num_edges} edges")]
    OutOfRangeEdge {
        /// The out-of-range edge index.
        edge: usize,
        /// The mesh edge count.
        num_edges: usize,
    },

    /// An edge selection and vertex selection disagree.
    ///
    /// A selected edge implies both of its endpoint vertices; a vertex
    /// selection that omits an endpoint of a selected edge is inconsistent.
    #[error("selected edge {edge} has an endpoint missing from the vertex selection")]
    InconsistentSelection {
        /// The offending edge index.
        edge: usize,
    },

    /// Invalid parameter value.
    #[error("invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// The invalid value (as string).
        value: String,
        /// Reason the value is invalid.
        reason: &'static str,
    },
}

impl LayoutError {
    /// Create an invalid parameter error.
    pub fn invalid_param<T: std::fmt::Display>(
        name: &'static str,
        value: T,
        reason: &'static str,
    ) -> Self {
        LayoutError::InvalidParameter {
            name,
            value: value.to_string(),
            reason,
        }
    }
}
