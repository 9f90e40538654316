use heds::{
    shape, BuildConfig, Color, HalfEdgeMesh, Handle, QueryError, RenderBuffers, VertexHandle,
};


fn v(idx: u32) -> VertexHandle {
    VertexHandle::new(idx)
}

fn colors_of(buffers: &RenderBuffers) -> Vec<Color> {
    buffers.colors.chunks(4).map(|c| Color([c[0], c[1], c[2], c[3]])).collect()
}

#[test]
fn all_buffers_without_highlight() {
    let soup = shape::grid(3, 2);
    let mesh = soup.build().unwrap();
    let buffers = mesh.export_all_buffers(None).unwrap();

    assert_eq!(buffers.num_vertices(), 12);
    assert_eq!(buffers.positions, soup.coords);
    assert_eq!(buffers.normals.len(), 4 * 12);
    assert!(colors_of(&buffers).iter().all(|&c| c == Color::WHITE));

    // Origins in table order are exactly the input triangles.
    assert_eq!(buffers.indices, soup.indices);
}

#[test]
fn normals_match_vertex_records() {
    let mesh = shape::tetrahedron().build().unwrap();
    let buffers = mesh.export_all_buffers(None).unwrap();

    for (vh, vertex) in mesh.vertices() {
        let n = vertex.normal();
        let i = 4 * vh.to_usize();
        assert_eq!(&buffers.normals[i..i + 4], &[n.x, n.y, n.z, n.w]);
        assert_eq!(n.w, 0.0);
    }
}

#[test]
fn highlight_colors_face_loop() {
    let mesh = shape::disk(6).build().unwrap();

    // The incident half edge of rim vertex 1 is the boundary edge 1 -> 2.
    let buffers = mesh.export_all_buffers(Some(v(1))).unwrap();
    let colors = colors_of(&buffers);
    for (i, color) in colors.iter().enumerate() {
        let expected = if i <= 2 { Color::RED } else { Color::WHITE };
        assert_eq!(*color, expected, "color of vertex {}", i);
    }

    // Highlighting does not change the stored colors.
    assert!(mesh.vertices().all(|(_, vertex)| vertex.color() == Color::WHITE));
    let plain = mesh.export_all_buffers(None).unwrap();
    assert!(colors_of(&plain).iter().all(|&c| c == Color::WHITE));
}

#[test]
fn configured_colors() {
    let config = BuildConfig::default()
        .with_vertex_color([0.0, 0.0, 1.0, 1.0])
        .with_highlight_color([0.0, 1.0, 0.0, 1.0]);
    let mesh = shape::disk(4).build_with(&config).unwrap();

    let buffers = mesh.export_all_buffers(Some(v(0))).unwrap();
    let colors = colors_of(&buffers);
    assert_eq!(colors[0], Color([0.0, 1.0, 0.0, 1.0]));
    assert_eq!(colors[4], Color([0.0, 0.0, 1.0, 1.0]));
}

#[test]
fn export_is_repeatable() {
    let mesh = shape::grid(2, 2).build().unwrap();
    let highlight = Some(v(4));

    assert_eq!(
        mesh.export_all_buffers(highlight).unwrap(),
        mesh.export_all_buffers(highlight).unwrap(),
    );
    assert_eq!(mesh.export_ring(highlight).unwrap(), mesh.export_ring(highlight).unwrap());
}

#[test]
fn ring_export() {
    let mesh = shape::disk(6).build().unwrap();
    let buffers = mesh.export_ring(Some(v(1))).unwrap();

    assert_eq!(buffers.indices, vec![1, 2, 0]);
    assert_eq!(buffers.num_vertices(), 3);
    assert_eq!(&buffers.positions[8..12], &[0.0, 0.0, 0.0, 1.0]);
    assert!(colors_of(&buffers).iter().all(|&c| c == Color::WHITE));
}

#[test]
fn ring_export_of_isolated_vertex() {
    let coords = [
        0.0, 0.0, 0.0, 1.0,
        1.0, 0.0, 0.0, 1.0,
        0.0, 1.0, 0.0, 1.0,
        5.0, 5.0, 5.0, 1.0,
    ];
    let mesh = HalfEdgeMesh::build(&coords, &[0, 1, 2]).unwrap();
    let buffers = mesh.export_ring(Some(v(3))).unwrap();

    assert_eq!(buffers.indices, vec![3]);
    assert_eq!(buffers.positions, vec![5.0, 5.0, 5.0, 1.0]);
    assert_eq!(buffers.normals, vec![0.0; 4]);
}

#[test]
fn star_export() {
    let mesh = shape::disk(6).build().unwrap();

    let buffers = mesh.export_star(Some(v(0))).unwrap();
    assert_eq!(buffers.indices, vec![0, 1, 2, 3, 4, 5, 6]);

    let buffers = mesh.export_star(Some(v(3))).unwrap();
    assert_eq!(buffers.indices, vec![3, 4, 0, 2]);

    assert!(mesh.export_star(None).unwrap().is_empty());
}

#[test]
fn nothing_selected() {
    let mesh = shape::disk(5).build().unwrap();
    assert_eq!(mesh.export_ring(None).unwrap(), RenderBuffers::empty());
    assert!(mesh.indices_around_vertex(None).unwrap().is_empty());
}

#[test]
fn empty_mesh() {
    for mesh in &[HalfEdgeMesh::empty(), HalfEdgeMesh::build(&[], &[]).unwrap()] {
        assert!(mesh.export_all_buffers(None).unwrap().is_empty());
        assert!(mesh.export_all_buffers(Some(v(0))).unwrap().is_empty());
        assert!(mesh.export_ring(Some(v(0))).unwrap().is_empty());
        assert!(mesh.export_star(Some(v(7))).unwrap().is_empty());
        assert!(mesh.indices_around_vertex(Some(v(3))).unwrap().is_empty());
    }
}

#[test]
fn mesh_without_faces() {
    let soup = shape::disk(4);
    let mesh = HalfEdgeMesh::build(&soup.coords, &[]).unwrap();

    assert!(mesh.export_ring(Some(v(0))).unwrap().is_empty());
    assert!(mesh.export_star(Some(v(2))).unwrap().is_empty());
    assert!(mesh.indices_around_vertex(Some(v(1))).unwrap().is_empty());

    let buffers = mesh.export_all_buffers(Some(v(0))).unwrap();
    assert_eq!(buffers.num_vertices(), 5);
    assert!(buffers.indices.is_empty());
    assert!(colors_of(&buffers).iter().all(|&c| c == Color::WHITE));
}

#[test]
fn invalid_selection() {
    let mesh = shape::disk(3).build().unwrap();
    assert_eq!(
        mesh.export_ring(Some(v(4))).unwrap_err(),
        QueryError::VertexOutOfRange { vertex: v(4), num_vertices: 4 },
    );
    assert!(mesh.export_all_buffers(Some(v(100))).is_err());
    assert!(mesh.export_star(Some(v(4))).is_err());
}

#[test]
fn signed_selection() {
    let mesh = shape::disk(3).build().unwrap();
    assert!(mesh.export_ring(VertexHandle::from_signed(-1)).unwrap().is_empty());
    assert_eq!(mesh.export_ring(VertexHandle::from_signed(2)).unwrap().indices, vec![2, 3, 0]);
}
