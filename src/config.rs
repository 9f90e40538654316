//! Runtime configuration for building a [`HalfEdgeMesh`][crate::HalfEdgeMesh].

use crate::math::Color;


/// What to do when more than two half edges share one undirected edge, or
/// when the input is otherwise not a consistently oriented manifold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifoldPolicy {
    /// Pair half edges in input order: the first two half edges of an edge
    /// become twins, a third one starts a new pending entry which a fourth
    /// one would pair with. A warning is logged for each such edge. Nothing
    /// else is checked.
    Lenient,

    /// Reject the input with an error on non-manifold edges, on twins with
    /// the same direction and on triangles that reference a vertex twice.
    Strict,
}

impl Default for ManifoldPolicy {
    fn default() -> Self {
        ManifoldPolicy::Lenient
    }
}

/// Parameters for building a mesh and exporting its render buffers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuildConfig {
    /// How non-manifold input is treated. Default: `Lenient`
    pub manifold: ManifoldPolicy,

    /// Color every vertex gets at construction. Default: opaque white
    pub vertex_color: Color,

    /// Color of highlighted vertices in
    /// [`export_all_buffers`][crate::HalfEdgeMesh::export_all_buffers].
    /// Default: opaque red
    pub highlight_color: Color,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            manifold: ManifoldPolicy::Lenient,
            vertex_color: Color::WHITE,
            highlight_color: Color::RED,
        }
    }
}

impl BuildConfig {
    /// Default configuration, but with [`ManifoldPolicy::Strict`].
    #[must_use]
    pub fn strict() -> Self {
        Self {
            manifold: ManifoldPolicy::Strict,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_vertex_color(self, color: impl Into<Color>) -> Self {
        Self {
            vertex_color: color.into(),
            ..self
        }
    }

    #[must_use]
    pub fn with_highlight_color(self, color: impl Into<Color>) -> Self {
        Self {
            highlight_color: color.into(),
            ..self
        }
    }

    pub fn is_strict(&self) -> bool {
        self.manifold == ManifoldPolicy::Strict
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = BuildConfig::default();
        assert_eq!(config.manifold, ManifoldPolicy::Lenient);
        assert_eq!(config.vertex_color, Color([1.0; 4]));
        assert_eq!(config.highlight_color, Color([1.0, 0.0, 0.0, 1.0]));
        assert!(!config.is_strict());
    }

    #[test]
    fn builder_methods() {
        let config = BuildConfig::strict()
            .with_vertex_color([0.5, 0.5, 0.5, 1.0])
            .with_highlight_color(Color([0.0, 1.0, 0.0, 1.0]));

        assert!(config.is_strict());
        assert_eq!(config.vertex_color, Color([0.5, 0.5, 0.5, 1.0]));
        assert_eq!(config.highlight_color, Color([0.0, 1.0, 0.0, 1.0]));
    }
}
