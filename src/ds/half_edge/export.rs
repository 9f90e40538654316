//! Linearization of the mesh into render buffers.

use crate::{
    error::QueryError,
    handle::{Handle, VertexHandle},
    math::{push_vec4, Color},
};
use super::{build::MAX_VERTICES, HalfEdgeMesh, Vertex};


/// Four parallel buffers as consumed by an indexed renderer.
///
/// `positions`, `colors` and `normals` hold 4 floats per vertex. What
/// `indices` contains depends on the export operation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderBuffers {
    pub positions: Vec<f32>,
    pub colors: Vec<f32>,
    pub normals: Vec<f32>,
    pub indices: Vec<u32>,
}

impl RenderBuffers {
    /// Four empty buffers.
    pub fn empty() -> Self {
        Self::default()
    }

    fn with_vertex_capacity(num_vertices: usize, num_indices: usize) -> Self {
        Self {
            positions: Vec::with_capacity(4 * num_vertices),
            colors: Vec::with_capacity(4 * num_vertices),
            normals: Vec::with_capacity(4 * num_vertices),
            indices: Vec::with_capacity(num_indices),
        }
    }

    /// Returns `true` if all four buffers are empty.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
            && self.colors.is_empty()
            && self.normals.is_empty()
            && self.indices.is_empty()
    }

    /// Number of vertices stored in the attribute buffers.
    pub fn num_vertices(&self) -> usize {
        self.positions.len() / 4
    }

    fn push_vertex(&mut self, v: &Vertex, color: Color) {
        push_vec4(&mut self.positions, v.position);
        self.colors.extend_from_slice(&color.0);
        push_vec4(&mut self.normals, v.normal);
    }
}

/// Converts a vertex handle into an entry of the `u32` index buffer. `build`
/// rejects meshes with more than `u32::MAX` vertices, so this never
/// truncates.
#[inline(always)]
fn export_index(vh: VertexHandle) -> u32 {
    debug_assert!(vh.idx() as u64 <= MAX_VERTICES);
    vh.idx() as u32
}

impl HalfEdgeMesh {
    /// Exports the whole mesh for indexed rendering.
    ///
    /// The attribute buffers contain one entry per vertex in id order.
    /// `indices` contains the origin of every half edge in table order, i.e.
    /// three entries per face. If `highlight` is a vertex, the vertices
    /// returned by [`indices_around_vertex`][HalfEdgeMesh::indices_around_vertex]
    /// for it are colored with the configured highlight color. The stored
    /// vertex colors are never changed.
    ///
    /// Returns empty buffers if the mesh has no vertices. A mesh with
    /// vertices but no faces exports all vertices, no indices and no
    /// highlight.
    pub fn export_all_buffers(
        &self,
        highlight: Option<VertexHandle>,
    ) -> Result<RenderBuffers, QueryError> {
        if self.is_empty() {
            return Ok(RenderBuffers::empty());
        }

        let highlighted = self.indices_around_vertex(highlight)?;
        let mut out = RenderBuffers::with_vertex_capacity(
            self.vertices.num_elements() as usize,
            self.half_edges.num_elements() as usize,
        );

        for (vh, v) in self.vertices() {
            let color = if highlighted.contains(&vh) {
                self.config.highlight_color
            } else {
                v.color
            };
            out.push_vertex(v, color);
        }

        out.indices.extend(self.half_edges().map(|(_, he)| export_index(he.origin)));

        Ok(out)
    }

    /// Exports only the vertices visited by
    /// [`indices_around_vertex`][HalfEdgeMesh::indices_around_vertex], in
    /// visiting order and with their own colors. `indices` contains the ids
    /// of those vertices.
    ///
    /// Returns empty buffers for `None` and for a mesh without faces.
    pub fn export_ring(&self, vertex: Option<VertexHandle>) -> Result<RenderBuffers, QueryError> {
        let visited = self.indices_around_vertex(vertex)?;
        Ok(self.export_vertices(&visited))
    }

    /// Exports `vertex` and its [one-ring][HalfEdgeMesh::one_ring] neighbors,
    /// center first. Like [`export_ring`][HalfEdgeMesh::export_ring], but
    /// covering all faces around the vertex instead of only one.
    ///
    /// Returns empty buffers for `None` and for a mesh without faces.
    pub fn export_star(&self, vertex: Option<VertexHandle>) -> Result<RenderBuffers, QueryError> {
        let vh = match vertex {
            Some(vh) if self.has_faces() => vh,
            _ => return Ok(RenderBuffers::empty()),
        };

        let ring = self.one_ring(vh)?;
        let mut vertices = Vec::with_capacity(ring.neighbors.len() + 1);
        vertices.push(ring.center);
        vertices.extend_from_slice(&ring.neighbors);

        Ok(self.export_vertices(&vertices))
    }

    fn export_vertices(&self, vertices: &[VertexHandle]) -> RenderBuffers {
        let mut out = RenderBuffers::with_vertex_capacity(vertices.len(), vertices.len());
        for &vh in vertices {
            let v = &self[vh];
            out.push_vertex(v, v.color);
            out.indices.push(export_index(vh));
        }
        out
    }
}
