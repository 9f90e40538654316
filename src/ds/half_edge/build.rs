//! Construction of a `HalfEdgeMesh` from a triangle soup.
//!
//! Building runs in five stages, each depending on the previous one:
//!
//! 1. create the vertex table from the coordinate array,
//! 2. create three half edges and one face per input triangle,
//! 3. resolve opposite half edges,
//! 4. assign an incident half edge to every vertex,
//! 5. accumulate vertex normals.

use fxhash::{FxHashMap, FxHashSet};
use optional::Optioned as Opt;
use tracing::{debug, warn};

use crate::{
    config::BuildConfig,
    error::BuildError,
    handle::{hsize, FaceHandle, HalfEdgeHandle, Handle, VertexHandle, MAX_INDEX},
    map::DenseMap,
    math::{self, face_normal},
};
use super::{Face, HalfEdge, HalfEdgeMesh, Vertex};


/// Largest number of vertices a mesh can hold. Vertex handles reserve their
/// all-ones index and exported index buffers are `u32`.
pub(super) const MAX_VERTICES: u64 = if (MAX_INDEX as u64) < (u32::MAX as u64) {
    MAX_INDEX as u64
} else {
    u32::MAX as u64
};

/// Checks the strides of both input arrays and that all elements are
/// addressable.
pub(super) fn check_lengths(num_coords: usize, num_indices: usize) -> Result<(), BuildError> {
    if num_coords % 4 != 0 {
        return Err(BuildError::CoordinateStride { len: num_coords });
    }
    if num_indices % 3 != 0 {
        return Err(BuildError::IndexStride { len: num_indices });
    }
    if (num_coords / 4) as u64 > MAX_VERTICES || num_indices as u64 > MAX_INDEX as u64 {
        return Err(BuildError::TooManyElements);
    }

    Ok(())
}

/// Undirected edge key: the two endpoints, smaller index first.
type EdgeKey = (VertexHandle, VertexHandle);

#[inline(always)]
fn edge_key(a: VertexHandle, b: VertexHandle) -> EdgeKey {
    if a <= b { (a, b) } else { (b, a) }
}

impl HalfEdgeMesh {
    /// Builds the mesh with the default [`BuildConfig`].
    ///
    /// `coords` holds one `x y z w` group per vertex, `indices` one group of
    /// three vertex ids per counter clockwise triangle. See
    /// [`build_with`][HalfEdgeMesh::build_with] for details.
    pub fn build(coords: &[f32], indices: &[u32]) -> Result<Self, BuildError> {
        Self::build_with(coords, indices, &BuildConfig::default())
    }

    /// Builds the mesh from a coordinate array and a triangle index array.
    ///
    /// Vertex `i` gets the position `(x, y, z, 1)` from `coords[4i..4i + 3]`
    /// and the color `config.vertex_color`. The fourth value of each group
    /// is ignored.
    ///
    /// Errors if the array lengths are not multiples of 4 and 3, if there
    /// are more vertices than fit into `u32` indices, if a
    /// triangle references a vertex that does not exist, or, with
    /// [`ManifoldPolicy::Strict`][crate::ManifoldPolicy::Strict], if the
    /// input is not a consistently oriented manifold. Empty input is fine and
    /// results in an empty mesh.
    ///
    /// With the default lenient policy, triangles referencing one vertex
    /// twice are not detected. They result in nonsensical adjacency and
    /// normals; it's up to the caller to not pass such input.
    pub fn build_with(
        coords: &[f32],
        indices: &[u32],
        config: &BuildConfig,
    ) -> Result<Self, BuildError> {
        check_lengths(coords.len(), indices.len())?;

        let mut mesh = Self {
            vertices: DenseMap::with_capacity(coords.len() / 4),
            half_edges: DenseMap::with_capacity(indices.len()),
            faces: DenseMap::with_capacity(indices.len() / 3),
            config: *config,
        };

        mesh.add_vertices(coords);
        mesh.add_faces(indices)?;

        mesh.resolve_opposites()?;
        mesh.assign_incident_half_edges();
        mesh.accumulate_normals();

        Ok(mesh)
    }

    fn add_vertices(&mut self, coords: &[f32]) {
        let color = self.config.vertex_color;
        for group in coords.chunks_exact(4) {
            let id = self.vertices.next_push_handle();
            self.vertices.push(Vertex {
                id,
                position: math::point(group[0], group[1], group[2]),
                normal: math::zero(),
                color,
                incident: Opt::none(),
            });
        }

        debug!("created {} vertices", self.num_vertices());
    }

    fn add_faces(&mut self, indices: &[u32]) -> Result<(), BuildError> {
        let num_vertices = self.num_vertices();

        for (triangle, group) in indices.chunks_exact(3).enumerate() {
            let mut vertices = [VertexHandle::new(0); 3];
            for (slot, &index) in vertices.iter_mut().zip(group) {
                if index as u64 >= num_vertices as u64 {
                    return Err(BuildError::IndexOutOfRange { triangle, index, num_vertices });
                }
                *slot = VertexHandle::new(index as hsize);
            }

            let [a, b, c] = vertices;
            if self.config.is_strict() && (a == b || b == c || c == a) {
                return Err(BuildError::DegenerateFace { triangle });
            }

            self.add_triangle(vertices);
        }

        debug!("created {} faces and {} half edges", self.num_faces(), self.num_half_edges());
        Ok(())
    }

    /// Adds one face and its three half edges, linked into a `next` cycle.
    fn add_triangle(&mut self, vertices: [VertexHandle; 3]) -> FaceHandle {
        let face = self.faces.next_push_handle();
        let he0 = self.half_edges.next_push_handle();
        let he1 = HalfEdgeHandle::new(he0.idx() + 1);
        let he2 = HalfEdgeHandle::new(he0.idx() + 2);

        for &(origin, next) in &[(vertices[0], he1), (vertices[1], he2), (vertices[2], he0)] {
            self.half_edges.push(HalfEdge {
                origin,
                next,
                face,
                opposite: Opt::none(),
            });
        }

        self.faces.push(Face { base: he0 })
    }

    /// Pairs up half edges that share an undirected edge.
    ///
    /// Half edges are visited in table order. The first half edge of an edge
    /// is remembered as pending, the second one becomes its opposite and the
    /// edge is no longer pending. Everything still pending at the end is a
    /// boundary half edge.
    fn resolve_opposites(&mut self) -> Result<(), BuildError> {
        let strict = self.config.is_strict();
        let mut pending: FxHashMap<EdgeKey, HalfEdgeHandle> = FxHashMap::default();
        let mut paired: FxHashSet<EdgeKey> = FxHashSet::default();
        let mut num_pairs: hsize = 0;

        let handles: Vec<_> = self.half_edges.handles().collect();
        for he in handles {
            let from = self[he].origin;
            let to = self[self[he].next].origin;
            let key = edge_key(from, to);

            if paired.contains(&key) && !pending.contains_key(&key) {
                if strict {
                    return Err(BuildError::NonManifoldEdge { a: key.0, b: key.1 });
                }
                warn!(
                    "{:?} is the third half edge on edge {:?} -- {:?} (non-manifold edge)",
                    he, key.0, key.1
                );
            }

            match pending.remove(&key) {
                Some(other) => {
                    if strict && self[other].origin == from {
                        return Err(BuildError::InconsistentOrientation { a: from, b: to });
                    }

                    self[other].opposite = Opt::some(he);
                    self[he].opposite = Opt::some(other);
                    paired.insert(key);
                    num_pairs += 1;
                }
                None => {
                    pending.insert(key, he);
                }
            }
        }

        debug!(
            "resolved {} opposite pairs, {} boundary half edges",
            num_pairs,
            pending.len()
        );
        Ok(())
    }

    /// Stores one outgoing half edge per vertex. Boundary half edges always
    /// replace a previously assigned one.
    fn assign_incident_half_edges(&mut self) {
        let handles: Vec<_> = self.half_edges.handles().collect();
        for he in handles {
            let HalfEdge { origin, opposite, .. } = self[he];
            let vertex = &mut self[origin];

            if vertex.incident.is_none() || opposite.is_none() {
                vertex.incident = Opt::some(he);
            }
        }

        let isolated = self.vertices.values().filter(|v| v.incident.is_none()).count();
        if isolated > 0 {
            debug!("{} vertices are not referenced by any face", isolated);
        }
    }

    /// Adds the unnormalized normal of each face to all three of its
    /// vertices. The sums are not divided by the number of faces.
    fn accumulate_normals(&mut self) {
        let faces: Vec<_> = self.faces.handles().collect();
        for fh in faces {
            let [v0, v1, v2] = self.vertices_of_face(fh);
            let n = face_normal(self[v0].position, self[v1].position, self[v2].position);

            self[v0].normal += n;
            self[v1].normal += n;
            self[v2].normal += n;
        }
    }
}
