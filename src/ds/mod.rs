//! Polygon mesh **d**ata **s**tructures.
//!
//! Currently, this only contains the [`HalfEdgeMesh`], which is built once
//! from a triangle soup and then queried.

pub mod half_edge;

pub use self::half_edge::HalfEdgeMesh;
