//! Neighborhood queries: the face loop walk and the one-ring around a vertex.

use smallvec::SmallVec;

use crate::{
    error::QueryError,
    handle::{FaceHandle, HalfEdgeHandle, VertexHandle},
};
use super::HalfEdgeMesh;


// ===============================================================================================
// ===== Internal circulators
// ===============================================================================================

/// An iterator that circulates around a face in counter-clockwise order,
/// yielding the inner half edges.
#[derive(Debug)]
pub(super) enum FaceCirculator<'a> {
    Empty,
    NonEmpty {
        mesh: &'a HalfEdgeMesh,
        current_he: HalfEdgeHandle,
        start_he: HalfEdgeHandle,
    },
}

impl Iterator for FaceCirculator<'_> {
    type Item = HalfEdgeHandle;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        match *self {
            FaceCirculator::Empty => None,
            FaceCirculator::NonEmpty { mesh, ref mut current_he, start_he } => {
                let out = *current_he;

                let next = mesh[out].next;
                if next == start_he {
                    *self = FaceCirculator::Empty;
                } else {
                    *current_he = next;
                }

                Some(out)
            }
        }
    }
}

/// An iterator that circulates around a vertex in counter-clockwise order,
/// yielding outgoing half edges.
///
/// It advances from an outgoing half edge `he` to `opposite(prev(he))`. If
/// that opposite does not exist (the fan is open there), the circulator stops
/// after yielding `he`. Since the vertex' incident half edge is a boundary
/// one whenever the vertex has one, starting there covers the whole fan.
#[derive(Debug)]
pub(super) enum CcwVertexCirculator<'a> {
    Empty,
    NonEmpty {
        mesh: &'a HalfEdgeMesh,
        current_he: HalfEdgeHandle,
        start_he: HalfEdgeHandle,

        /// Upper bound on the number of steps, to terminate on inconsistent
        /// input where the rotation never comes back to `start_he`.
        remaining: u64,
    },
}

impl<'a> CcwVertexCirculator<'a> {
    pub(super) fn new(mesh: &'a HalfEdgeMesh, start_he: HalfEdgeHandle) -> Self {
        CcwVertexCirculator::NonEmpty {
            mesh,
            current_he: start_he,
            start_he,
            remaining: mesh.num_half_edges() as u64,
        }
    }
}

impl Iterator for CcwVertexCirculator<'_> {
    type Item = HalfEdgeHandle;

    fn next(&mut self) -> Option<Self::Item> {
        match *self {
            CcwVertexCirculator::Empty => None,
            CcwVertexCirculator::NonEmpty {
                mesh,
                ref mut current_he,
                start_he,
                ref mut remaining,
            } => {
                let out = *current_he;

                let prev = mesh.prev(out);
                match mesh[prev].opposite.into_option() {
                    Some(next) if next != start_he && *remaining > 1 => {
                        *current_he = next;
                        *remaining -= 1;
                    }
                    _ => *self = CcwVertexCirculator::Empty,
                }

                Some(out)
            }
        }
    }
}


// ===============================================================================================
// ===== One-ring
// ===============================================================================================

/// The neighborhood of a vertex as returned by [`HalfEdgeMesh::one_ring`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OneRing {
    /// The vertex in the center.
    pub center: VertexHandle,

    /// The neighbors in counter-clockwise order. For boundary vertices, the
    /// first and last neighbor are connected to the center via boundary
    /// edges.
    pub neighbors: SmallVec<[VertexHandle; 8]>,

    /// The faces around the center in counter-clockwise order.
    pub faces: SmallVec<[FaceHandle; 8]>,

    /// Whether the fan around the center is open.
    pub is_boundary: bool,
}

impl OneRing {
    fn isolated(center: VertexHandle) -> Self {
        Self {
            center,
            neighbors: SmallVec::new(),
            faces: SmallVec::new(),
            is_boundary: false,
        }
    }
}



// ===============================================================================================
// ===== Queries
// ===============================================================================================

impl HalfEdgeMesh {
    /// Returns the half edge whose `next` points to `he`. All faces are
    /// triangles, so this is `next(next(he))`.
    #[inline(always)]
    pub(super) fn prev(&self, he: HalfEdgeHandle) -> HalfEdgeHandle {
        self[self[he].next].next
    }

    /// Returns an iterator the circulates around the face. The iterator
    /// yields inner half edges, starting at the base half edge.
    pub(super) fn circulate_around_face(&self, fh: FaceHandle) -> FaceCirculator<'_> {
        let start_he = self.face(fh).base;
        FaceCirculator::NonEmpty {
            mesh: self,
            current_he: start_he,
            start_he,
        }
    }

    /// Returns an iterator that circulates around the vertex, starting at
    /// its incident half edge. The iterator yields outgoing half edges.
    pub(super) fn circulate_around_vertex(&self, vh: VertexHandle) -> CcwVertexCirculator<'_> {
        match self[vh].incident.into_option() {
            None => CcwVertexCirculator::Empty,
            Some(start_he) => CcwVertexCirculator::new(self, start_he),
        }
    }

    /// Walks the face loop of the vertex' incident half edge and returns the
    /// visited vertex ids, starting with `vertex` itself.
    ///
    /// Beginning at the vertex, the walk moves to the origin of the next half
    /// edge until a vertex repeats. For a triangle mesh this yields the three
    /// vertices of the face the incident half edge borders. It does *not*
    /// rotate around the vertex; use [`one_ring`][HalfEdgeMesh::one_ring] for
    /// that. An isolated vertex yields only itself.
    ///
    /// `None` (no selection) and a mesh without faces yield an empty list.
    /// Otherwise, an id beyond the vertex table is an error.
    pub fn indices_around_vertex(
        &self,
        vertex: Option<VertexHandle>,
    ) -> Result<SmallVec<[VertexHandle; 3]>, QueryError> {
        let mut out = SmallVec::new();
        let vh = match vertex {
            Some(vh) if self.has_faces() => self.try_check_vertex(vh)?,
            _ => return Ok(out),
        };

        let mut current = vh;
        let mut he = self[vh].incident.into_option();
        while !out.contains(&current) {
            out.push(current);

            match he {
                Some(h) => {
                    let next = self[h].next;
                    current = self[next].origin;
                    he = Some(next);
                }
                None => break,
            }
        }

        Ok(out)
    }

    /// Returns the vertices and faces around `vertex` in counter-clockwise
    /// order.
    ///
    /// Starting at the incident half edge, the walk rotates around the vertex
    /// by stepping to `opposite(prev(he))`. For interior vertices it stops
    /// once it is back at the start, for boundary vertices once it reaches
    /// the other boundary edge. Vertices with several separate fans only
    /// report the fan containing their incident half edge.
    pub fn one_ring(&self, vertex: VertexHandle) -> Result<OneRing, QueryError> {
        let vh = self.try_check_vertex(vertex)?;
        let start = match self[vh].incident.into_option() {
            Some(he) => he,
            None => return Ok(OneRing::isolated(vh)),
        };

        let mut ring = OneRing::isolated(vh);
        let mut last = start;
        for he in self.circulate_around_vertex(vh) {
            ring.neighbors.push(self.target(he));
            ring.faces.push(self[he].face);
            last = he;
        }

        // The walk stopped either because it came back to `start` or because
        // the fan is open. In the latter case, the origin of the incoming
        // boundary half edge is the last neighbor.
        let prev = self.prev(last);
        if self[prev].opposite.into_option() != Some(start) {
            ring.is_boundary = true;
            let closing = self[prev].origin;
            if !ring.neighbors.contains(&closing) {
                ring.neighbors.push(closing);
            }
        }

        Ok(ring)
    }

    /// Returns the faces around `vertex` in counter-clockwise order. See
    /// [`one_ring`][HalfEdgeMesh::one_ring].
    pub fn faces_around_vertex(
        &self,
        vertex: VertexHandle,
    ) -> Result<SmallVec<[FaceHandle; 8]>, QueryError> {
        self.one_ring(vertex).map(|ring| ring.faces)
    }

    /// Returns the three inner half edges of the face, starting at its base
    /// half edge.
    pub fn half_edges_of_face(&self, fh: FaceHandle) -> [HalfEdgeHandle; 3] {
        let mut out = [self.face(fh).base; 3];
        for (slot, he) in out.iter_mut().zip(self.circulate_around_face(fh)) {
            *slot = he;
        }
        out
    }
}
