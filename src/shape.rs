//! Generators for simple triangle soups.
//!
//! These produce the same kind of input a model loader hands to
//! [`HalfEdgeMesh::build`]: a flat coordinate array with stride 4 and a flat
//! index array with three vertex ids per counter clockwise triangle.

use std::f32::consts::PI;

use crate::{
    config::BuildConfig,
    error::BuildError,
    HalfEdgeMesh,
};


/// A decoded mesh as handed over by a model loader.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriangleSoup {
    /// `x y z w` per vertex.
    pub coords: Vec<f32>,

    /// Three vertex ids per triangle.
    pub indices: Vec<u32>,
}

impl TriangleSoup {
    pub fn num_vertices(&self) -> usize {
        self.coords.len() / 4
    }

    pub fn num_faces(&self) -> usize {
        self.indices.len() / 3
    }

    /// Appends a vertex `(x, y, z, 1)` and returns its id.
    pub fn add_vertex(&mut self, [x, y, z]: [f32; 3]) -> u32 {
        let id = self.num_vertices() as u32;
        self.coords.extend_from_slice(&[x, y, z, 1.0]);
        id
    }

    pub fn add_triangle(&mut self, triangle: [u32; 3]) {
        self.indices.extend_from_slice(&triangle);
    }

    /// Builds a [`HalfEdgeMesh`] with the default configuration.
    pub fn build(&self) -> Result<HalfEdgeMesh, BuildError> {
        HalfEdgeMesh::build(&self.coords, &self.indices)
    }

    pub fn build_with(&self, config: &BuildConfig) -> Result<HalfEdgeMesh, BuildError> {
        HalfEdgeMesh::build_with(&self.coords, &self.indices, config)
    }
}

/// A flat disk in the `xy` plane made of `steps` triangles around a center
/// vertex.
///
/// Vertex 0 is the center (an interior vertex), vertices `1..=steps` form the
/// rim (boundary vertices) in counter clockwise order. All face normals point
/// towards `+z`.
///
/// # Panics
///
/// Panics if `steps < 3`.
pub fn disk(steps: u32) -> TriangleSoup {
    assert!(steps >= 3, "a disk needs at least 3 steps, {} given", steps);

    let ring_pos = |step: u32| {
        let around_circle = (2 * step) as f32 * (PI / steps as f32);
        [around_circle.cos(), around_circle.sin(), 0.0]
    };

    let mut out = TriangleSoup::default();
    let center = out.add_vertex([0.0; 3]);
    let first = out.add_vertex(ring_pos(0));
    let mut last = first;

    for step in 1..=steps {
        let curr = if step == steps {
            first
        } else {
            out.add_vertex(ring_pos(step))
        };

        out.add_triangle([center, last, curr]);
        last = curr;
    }

    out
}

/// A regular grid of `cols × rows` quads in the `xy` plane, each split into
/// two triangles. Vertex `(i, j)` has the id `j * (cols + 1) + i` and the
/// position `(i, j, 0)`.
pub fn grid(cols: u32, rows: u32) -> TriangleSoup {
    let mut out = TriangleSoup::default();
    for j in 0..=rows {
        for i in 0..=cols {
            out.add_vertex([i as f32, j as f32, 0.0]);
        }
    }

    let id = |i: u32, j: u32| j * (cols + 1) + i;
    for j in 0..rows {
        for i in 0..cols {
            let (a, b, c, d) = (id(i, j), id(i + 1, j), id(i + 1, j + 1), id(i, j + 1));
            out.add_triangle([a, b, c]);
            out.add_triangle([a, c, d]);
        }
    }

    out
}

/// A closed tetrahedron with the corners `0`, `x`, `y` and `z`, faces
/// oriented outwards. Every edge is shared by two faces.
pub fn tetrahedron() -> TriangleSoup {
    let mut out = TriangleSoup::default();
    out.add_vertex([0.0, 0.0, 0.0]);
    out.add_vertex([1.0, 0.0, 0.0]);
    out.add_vertex([0.0, 1.0, 0.0]);
    out.add_vertex([0.0, 0.0, 1.0]);

    out.add_triangle([0, 2, 1]);
    out.add_triangle([0, 1, 3]);
    out.add_triangle([0, 3, 2]);
    out.add_triangle([1, 2, 3]);

    out
}
