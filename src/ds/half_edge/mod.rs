//! Everything related to the [`HalfEdgeMesh`].

// # Some notes for developers about this implementation
//
// - All records live in three `DenseMap` arenas. Every cross reference is a
//   handle into one of those arenas, so there are no reference cycles and
//   dropping the mesh drops everything.
// - Half edges are stored in input order: the half edges of face `f` have
//   the indices `3f`, `3f + 1` and `3f + 2`. The `next` and `face` fields are
//   still stored explicitly.
// - Each half edge stores its *origin* vertex (not its target).
// - After `build` returns, the topology never changes. There is no `&mut`
//   API on `HalfEdgeMesh` apart from `build` creating a new one.

use std::{fmt, ops};

use optional::Optioned as Opt;

use crate::{
    config::BuildConfig,
    error::QueryError,
    handle::{hsize, FaceHandle, HalfEdgeHandle, VertexHandle},
    map::DenseMap,
    math::{Color, Vec4},
};

mod adj;
mod build;
mod export;

pub use self::{
    adj::OneRing,
    export::RenderBuffers,
};



// ===============================================================================================
// ===== Definition of types stored inside the data structure
// ===============================================================================================

/// Data stored per vertex.
#[derive(Clone, Copy, PartialEq)]
pub struct Vertex {
    pub(crate) id: VertexHandle,
    pub(crate) position: Vec4,
    pub(crate) normal: Vec4,
    pub(crate) color: Color,

    /// Handle of one outgoing half edge.
    ///
    /// - If the vertex is isolated, this is `None`.
    /// - If the vertex is a boundary vertex, this is a boundary half edge.
    /// - Otherwise, it is an arbitrary outgoing half edge.
    pub(crate) incident: Opt<HalfEdgeHandle>,
}

impl Vertex {
    /// The vertex id, i.e. the index of its coordinate group in the input.
    pub fn id(&self) -> VertexHandle {
        self.id
    }

    /// The position `(x, y, z, 1)`. The fourth input coordinate is not
    /// used, `w` is always 1.
    pub fn position(&self) -> Vec4 {
        self.position
    }

    /// The sum of the unnormalized normals of all adjacent faces. `w` is 0.
    pub fn normal(&self) -> Vec4 {
        self.normal
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// One outgoing half edge, preferably a boundary one. `None` for
    /// isolated vertices.
    pub fn incident_half_edge(&self) -> Option<HalfEdgeHandle> {
        self.incident.into_option()
    }
}

/// Data stored per half edge.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct HalfEdge {
    /// The vertex this half edge starts at.
    pub(crate) origin: VertexHandle,

    /// The next half edge around the face (counter clockwise).
    pub(crate) next: HalfEdgeHandle,

    /// The face this half edge borders.
    pub(crate) face: FaceHandle,

    /// The half edge running along the same edge in the other direction.
    /// `None` for boundary half edges.
    pub(crate) opposite: Opt<HalfEdgeHandle>,
}

impl HalfEdge {
    pub fn origin(&self) -> VertexHandle {
        self.origin
    }

    pub fn next(&self) -> HalfEdgeHandle {
        self.next
    }

    pub fn face(&self) -> FaceHandle {
        self.face
    }

    pub fn opposite(&self) -> Option<HalfEdgeHandle> {
        self.opposite.into_option()
    }

    pub fn is_boundary(&self) -> bool {
        self.opposite.is_none()
    }
}

/// Data stored per face.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Face {
    /// The half edge created for the first vertex of the input triangle.
    pub(crate) base: HalfEdgeHandle,
}

impl Face {
    pub fn base_half_edge(&self) -> HalfEdgeHandle {
        self.base
    }
}

impl fmt::Debug for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Vertex {{ id: {:?}, incident: {:?} }}",
            self.id,
            self.incident.into_option(),
        )
    }
}

impl fmt::Debug for HalfEdge {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "HalfEdge {{ origin: {:5} next: {:6} face: {:5} opposite: {:?} }}",
            format!("{:?},", self.origin),
            format!("{:?},", self.next),
            format!("{:?},", self.face),
            self.opposite.into_option(),
        )
    }
}

impl fmt::Debug for Face {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Face {{ base: {:?} }}", self.base)
    }
}



// ===============================================================================================
// ===== The mesh
// ===============================================================================================

/// Half edge representation of a triangle mesh, built once from a triangle
/// soup.
///
/// The mesh is created by [`build`][HalfEdgeMesh::build] from a flat
/// coordinate array (stride 4, `x y z w`) and a flat triangle index array
/// (stride 3, counter clockwise). Building resolves opposite half edges,
/// assigns an incident half edge to every vertex and accumulates vertex
/// normals. Afterwards the topology is immutable; the mesh can only be
/// queried and exported into render buffers.
///
/// An empty mesh (see [`empty`][HalfEdgeMesh::empty]) stands for "nothing
/// built yet": all queries on it return empty results. The same holds for
/// selection queries on a mesh with vertices but no faces.
///
/// ```
/// use heds::HalfEdgeMesh;
///
/// let coords = [
///     0.0, 0.0, 0.0, 1.0,
///     1.0, 0.0, 0.0, 1.0,
///     0.0, 1.0, 0.0, 1.0,
///     1.0, 1.0, 0.0, 1.0,
/// ];
/// let mesh = HalfEdgeMesh::build(&coords, &[0, 1, 2, 1, 3, 2])?;
///
/// assert_eq!(mesh.num_faces(), 2);
/// assert_eq!(mesh.half_edges().filter(|(_, he)| !he.is_boundary()).count(), 2);
/// # Ok::<(), heds::BuildError>(())
/// ```
#[derive(Clone)]
pub struct HalfEdgeMesh {
    pub(crate) vertices: DenseMap<VertexHandle, Vertex>,
    pub(crate) half_edges: DenseMap<HalfEdgeHandle, HalfEdge>,
    pub(crate) faces: DenseMap<FaceHandle, Face>,
    pub(crate) config: BuildConfig,
}

impl fmt::Debug for HalfEdgeMesh {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("HalfEdgeMesh")
            .field("vertices", &self.vertices)
            .field("faces", &self.faces)
            .field("half_edges", &self.half_edges)
            .finish()
    }
}

impl Default for HalfEdgeMesh {
    fn default() -> Self {
        Self::empty()
    }
}

impl HalfEdgeMesh {
    /// Returns a mesh without any elements.
    pub fn empty() -> Self {
        Self {
            vertices: DenseMap::new(),
            half_edges: DenseMap::new(),
            faces: DenseMap::new(),
            config: BuildConfig::default(),
        }
    }

    /// The configuration this mesh was built with.
    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    pub fn num_vertices(&self) -> hsize {
        self.vertices.num_elements()
    }

    pub fn num_half_edges(&self) -> hsize {
        self.half_edges.num_elements()
    }

    pub fn num_faces(&self) -> hsize {
        self.faces.num_elements()
    }

    /// Returns `true` if this mesh has no vertices (and thus no faces).
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns `true` if this mesh has at least one face. Selection queries
    /// on a mesh without faces return empty results.
    pub fn has_faces(&self) -> bool {
        !self.faces.is_empty()
    }

    /// Returns the vertex record.
    ///
    /// # Panics
    ///
    /// Panics if the vertex does not exist in this mesh.
    pub fn vertex(&self, vh: VertexHandle) -> &Vertex {
        &self[self.check_vertex(vh)]
    }

    /// Returns the half edge record.
    ///
    /// # Panics
    ///
    /// Panics if the half edge does not exist in this mesh.
    pub fn half_edge(&self, heh: HalfEdgeHandle) -> &HalfEdge {
        if !self.half_edges.contains_handle(heh) {
            panic!(
                "{:?} was passed to a half edge mesh, but this half edge does not exist",
                heh,
            );
        }
        &self[heh]
    }

    /// Returns the face record.
    ///
    /// # Panics
    ///
    /// Panics if the face does not exist in this mesh.
    pub fn face(&self, fh: FaceHandle) -> &Face {
        if !self.faces.contains_handle(fh) {
            panic!(
                "{:?} was passed to a half edge mesh, but this face does not exist",
                fh,
            );
        }
        &self[fh]
    }

    /// Iterates over all vertices in id order.
    pub fn vertices(&self) -> impl Iterator<Item = (VertexHandle, &Vertex)> + '_ {
        self.vertices.iter()
    }

    /// Iterates over all half edges in table order (three per face, in the
    /// order of the input triangles).
    pub fn half_edges(&self) -> impl Iterator<Item = (HalfEdgeHandle, &HalfEdge)> + '_ {
        self.half_edges.iter()
    }

    /// Iterates over all faces in input order.
    pub fn faces(&self) -> impl Iterator<Item = (FaceHandle, &Face)> + '_ {
        self.faces.iter()
    }

    /// Returns the vertex the given half edge points to, i.e. the origin of
    /// its `next` half edge.
    pub fn target(&self, heh: HalfEdgeHandle) -> VertexHandle {
        let next = self.half_edge(heh).next;
        self[next].origin
    }

    /// Returns the three vertices of the face in `next` order, starting with
    /// the origin of the base half edge.
    pub fn vertices_of_face(&self, fh: FaceHandle) -> [VertexHandle; 3] {
        let he0 = self.face(fh).base;
        let he1 = self[he0].next;
        let he2 = self[he1].next;

        [self[he0].origin, self[he1].origin, self[he2].origin]
    }

    /// Returns `true` if the half edge has no opposite.
    pub fn is_boundary_half_edge(&self, heh: HalfEdgeHandle) -> bool {
        self.half_edge(heh).is_boundary()
    }

    /// Returns `true` if the vertex' incident half edge is a boundary half
    /// edge. Isolated vertices are not boundary vertices.
    pub fn is_boundary_vertex(&self, vh: VertexHandle) -> bool {
        self.vertex(vh).incident.into_option()
            .map(|he| self[he].is_boundary())
            .unwrap_or(false)
    }

    /// Returns `true` if no face references the vertex.
    pub fn is_isolated(&self, vh: VertexHandle) -> bool {
        self.vertex(vh).incident.is_none()
    }

    /// Returns the first half edge in table order that starts at `vh`, or
    /// `None` if the vertex is isolated.
    ///
    /// In contrast to [`Vertex::incident_half_edge`], this does not prefer
    /// boundary half edges. It runs in linear time.
    pub fn find_outgoing_half_edge(&self, vh: VertexHandle) -> Option<HalfEdgeHandle> {
        let vh = self.check_vertex(vh);
        self.half_edges()
            .find(|(_, he)| he.origin == vh)
            .map(|(heh, _)| heh)
    }
}



// ===============================================================================================
// ===== Internal helper methods
// ===============================================================================================

impl HalfEdgeMesh {
    /// Makes sure the given handle points to an existing vertex. If that's
    /// not the case, this method panics.
    fn check_vertex(&self, vh: VertexHandle) -> VertexHandle {
        if !self.vertices.contains_handle(vh) {
            panic!(
                "{:?} was passed to a half edge mesh, but this vertex does not exist in this mesh",
                vh,
            );
        }
        vh
    }

    /// Like `check_vertex`, but returns an error instead of panicking.
    fn try_check_vertex(&self, vh: VertexHandle) -> Result<VertexHandle, QueryError> {
        if self.vertices.contains_handle(vh) {
            Ok(vh)
        } else {
            Err(QueryError::VertexOutOfRange {
                vertex: vh,
                num_vertices: self.num_vertices(),
            })
        }
    }
}

macro_rules! impl_index {
    ($handle:ident, $field:ident, $out:ident) => {
        impl ops::Index<$handle> for HalfEdgeMesh {
            type Output = $out;
            #[inline(always)]
            fn index(&self, idx: $handle) -> &Self::Output {
                &self.$field[idx]
            }
        }

        impl ops::IndexMut<$handle> for HalfEdgeMesh {
            #[inline(always)]
            fn index_mut(&mut self, idx: $handle) -> &mut Self::Output {
                &mut self.$field[idx]
            }
        }
    };
}

impl_index!(VertexHandle, vertices, Vertex);
impl_index!(HalfEdgeHandle, half_edges, HalfEdge);
impl_index!(FaceHandle, faces, Face);
