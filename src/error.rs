//! Errors returned by building and querying a mesh.

use failure::Fail;

use crate::handle::{hsize, VertexHandle};


/// Errors that can happen while building a [`HalfEdgeMesh`][crate::HalfEdgeMesh]
/// from a coordinate array and a triangle index array.
#[derive(Debug, Clone, PartialEq, Eq, Fail)]
pub enum BuildError {
    #[fail(display = "coordinate array has length {}, which is not a multiple of 4", len)]
    CoordinateStride { len: usize },

    #[fail(display = "triangle index array has length {}, which is not a multiple of 3", len)]
    IndexStride { len: usize },

    #[fail(
        display = "triangle {} references vertex {}, but there are only {} vertices",
        triangle, index, num_vertices
    )]
    IndexOutOfRange {
        triangle: usize,
        index: u32,
        num_vertices: hsize,
    },

    #[fail(display = "more than two half edges share the edge {:?} -- {:?}", a, b)]
    NonManifoldEdge { a: VertexHandle, b: VertexHandle },

    #[fail(
        display = "two faces traverse the edge {:?} -> {:?} in the same direction",
        a, b
    )]
    InconsistentOrientation { a: VertexHandle, b: VertexHandle },

    #[fail(display = "triangle {} references the same vertex more than once", triangle)]
    DegenerateFace { triangle: usize },

    #[fail(display = "input has more vertices or half edges than a mesh can address")]
    TooManyElements,
}

/// Errors returned by queries on a built mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Fail)]
pub enum QueryError {
    #[fail(
        display = "{:?} was passed to a half edge mesh with only {} vertices",
        vertex, num_vertices
    )]
    VertexOutOfRange {
        vertex: VertexHandle,
        num_vertices: hsize,
    },
}
