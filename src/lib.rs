//! A half edge mesh built from triangle soups.
//!
//! The input is what a model loader produces: a flat coordinate array with
//! `x y z w` per vertex and a flat index array with three vertex ids per
//! counter clockwise triangle. [`HalfEdgeMesh::build`] turns this into a half
//! edge structure, resolving which half edges are opposite to each other,
//! choosing an incident half edge for every vertex and accumulating vertex
//! normals. The mesh can then be queried for adjacency and exported into
//! parallel buffers ([`RenderBuffers`]) for an indexed renderer.
//!
//! ```
//! use heds::{shape, VertexHandle};
//!
//! let mesh = shape::disk(6).build()?;
//! let ring = mesh.one_ring(VertexHandle::from_signed(0).unwrap())?;
//! assert_eq!(ring.neighbors.len(), 6);
//!
//! let buffers = mesh.export_all_buffers(None)?;
//! assert_eq!(buffers.indices.len(), 3 * 6);
//! # Ok::<(), failure::Error>(())
//! ```
//!
//! Building logs a short summary of every stage via `tracing` (`debug`
//! level) and warns about non-manifold edges. No subscriber is installed by
//! this library.

#![deny(missing_debug_implementations)]

pub mod config;
pub mod ds;
pub mod error;
pub mod handle;
pub mod map;
pub mod math;
pub mod shape;

pub use self::{
    config::{BuildConfig, ManifoldPolicy},
    ds::{
        HalfEdgeMesh,
        half_edge::{Face, HalfEdge, OneRing, RenderBuffers, Vertex},
    },
    error::{BuildError, QueryError},
    handle::{hsize, FaceHandle, HalfEdgeHandle, Handle, VertexHandle},
    math::Color,
};
