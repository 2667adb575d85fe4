//! Geometric and topological properties of generated spheres
//!
//! Exercises the public API only: descriptor → build → buffer checks.

use orb_mesh::{MeshBuffer, MeshDescriptor, MeshError, Sphere, TextureMode, VertexAttribute, build};

const TOLERANCE: f32 = 1e-5;

/// A spread of valid descriptors covering every mode and both orientations
fn descriptors() -> Vec<MeshDescriptor> {
    let mut out = Vec::new();
    for (z, r) in [(3, 3), (3, 6), (4, 4), (5, 7), (8, 8), (17, 31), (64, 3)] {
        for mode in TextureMode::ALL {
            for inside in [false, true] {
                for radius in [0.25, 1.0, 40.0] {
                    let desc = MeshDescriptor::new(z, r, radius, mode);
                    out.push(desc.with_view_inside(inside));
                }
            }
        }
    }
    out
}

fn length(v: [f32; 3]) -> f32 {
    (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
}

#[test]
fn test_vertex_count_law() {
    for desc in descriptors() {
        let mesh = build(&desc).unwrap();
        let expected = (desc.z_samples as usize - 2) * (desc.radial_samples as usize + 1) + 2;
        assert_eq!(mesh.positions.len(), expected, "{desc:?}");
        assert_eq!(mesh.normals.len(), expected);
        assert_eq!(mesh.uvs.len(), expected);
    }
}

#[test]
fn test_index_buffer_law() {
    for desc in descriptors() {
        let mesh = build(&desc).unwrap();
        assert_eq!(mesh.indices.len() % 3, 0);
        assert_eq!(mesh.indices.len(), desc.index_count());
        assert!(mesh.indices.len() <= desc.index_capacity());

        let vertex_count = mesh.vertex_count() as u32;
        for &i in &mesh.indices {
            assert!(i < vertex_count, "index {i} out of range for {desc:?}");
        }
    }
}

#[test]
fn test_normal_unit_length_law() {
    for desc in descriptors() {
        let mesh = build(&desc).unwrap();
        for (i, n) in mesh.normals.iter().enumerate() {
            let len = length(*n);
            assert!((len - 1.0).abs() < TOLERANCE, "normal {i} has length {len}");
        }
    }
}

#[test]
fn test_seam_closure_law() {
    for desc in descriptors() {
        let mesh = build(&desc).unwrap();
        for iz in 1..desc.z_samples - 1 {
            let range = desc.ring_range(iz).unwrap();
            let first = range.start;
            let seam = range.end - 1;
            assert_eq!(mesh.positions[first], mesh.positions[seam], "ring {iz} of {desc:?}");
            assert_eq!(mesh.normals[first], mesh.normals[seam]);
        }
    }
}

#[test]
fn test_seam_uv_wraps_for_equirectangular() {
    for mode in [TextureMode::Linear, TextureMode::Projected] {
        let desc = MeshDescriptor::new(9, 12, 1.0, mode);
        let mesh = build(&desc).unwrap();
        for iz in 1..desc.z_samples - 1 {
            let range = desc.ring_range(iz).unwrap();
            assert_eq!(mesh.uvs[range.start][0], 0.0);
            assert_eq!(mesh.uvs[range.end - 1][0], 1.0);
        }
    }
}

#[test]
fn test_pole_law() {
    for desc in descriptors() {
        let mesh = build(&desc).unwrap();
        let south = desc.south_pole_index() as usize;
        let north = desc.north_pole_index() as usize;

        assert_eq!(south, mesh.vertex_count() - 2);
        assert_eq!(north, mesh.vertex_count() - 1);
        assert_eq!(mesh.positions[south], [0.0, 0.0, -desc.radius]);
        assert_eq!(mesh.positions[north], [0.0, 0.0, desc.radius]);

        let sign = if desc.view_inside { -1.0 } else { 1.0 };
        assert_eq!(mesh.normals[south], [0.0, 0.0, -sign]);
        assert_eq!(mesh.normals[north], [0.0, 0.0, sign]);
    }
}

#[test]
fn test_pole_uvs() {
    let desc = MeshDescriptor::new(6, 6, 1.0, TextureMode::Polar);
    let polar = build(&desc).unwrap();
    assert_eq!(polar.uvs[polar.vertex_count() - 2], [0.5, 0.5]);
    assert_eq!(polar.uvs[polar.vertex_count() - 1], [0.5, 0.5]);

    for mode in [TextureMode::Linear, TextureMode::Projected] {
        let mesh = build(&MeshDescriptor::new(6, 6, 1.0, mode)).unwrap();
        assert_eq!(mesh.uvs[mesh.vertex_count() - 2], [0.5, 0.0]);
        assert_eq!(mesh.uvs[mesh.vertex_count() - 1], [0.5, 1.0]);
    }
}

#[test]
fn test_positions_on_sphere() {
    for desc in descriptors() {
        let mesh = build(&desc).unwrap();
        for p in &mesh.positions {
            let rel = (length(*p) - desc.radius).abs() / desc.radius;
            assert!(rel < 1e-4, "{p:?} is off the sphere of {desc:?}");
        }
    }
}

#[test]
fn test_extreme_radii_stay_finite() {
    for radius in [1e-25_f32, 1e-10, 1e20, 1e30] {
        for mode in TextureMode::ALL {
            for inside in [false, true] {
                let desc = MeshDescriptor::new(3, 4, radius, mode);
                let desc = desc.with_view_inside(inside);
                let mesh = build(&desc).unwrap();

                for (i, n) in mesh.normals.iter().enumerate() {
                    let len = length(*n);
                    assert!(
                        (len - 1.0).abs() < TOLERANCE,
                        "radius {radius}: normal {i} has length {len}"
                    );
                }
                for p in &mesh.positions {
                    // f64 so squaring 1e30 does not overflow
                    let len = p.iter().map(|&c| f64::from(c).powi(2)).sum::<f64>().sqrt();
                    let rel = (len - f64::from(radius)).abs() / f64::from(radius);
                    assert!(rel < 1e-4, "{p:?} is off the sphere of radius {radius}");
                }
            }
        }
    }
}

#[test]
fn test_uv_range_law() {
    for desc in descriptors() {
        let mesh = build(&desc).unwrap();
        for uv in &mesh.uvs {
            for c in uv {
                assert!((0.0..=1.0).contains(c), "uv {uv:?} for {desc:?}");
            }
        }
    }
}

#[test]
fn test_winding_toggle_law() {
    for desc in descriptors().into_iter().filter(|d| !d.view_inside) {
        let outside = build(&desc).unwrap();
        let inside = build(&desc.with_view_inside(true)).unwrap();

        assert_eq!(outside.positions, inside.positions);
        assert_eq!(outside.uvs, inside.uvs);
        assert_eq!(outside.index_count(), inside.index_count());
        for (a, b) in outside.triangles().zip(inside.triangles()) {
            assert_eq!([a[2], a[1], a[0]], b);
        }
    }
}

#[test]
fn test_rebuild_idempotence() {
    for desc in descriptors() {
        let mut sphere = Sphere::new(desc).unwrap();
        let before = snapshot(sphere.mesh());

        sphere.rebuild().unwrap();
        let once = snapshot(sphere.mesh());
        sphere.rebuild().unwrap();
        assert_eq!(before, once, "{desc:?}");
        assert_eq!(once, snapshot(sphere.mesh()), "{desc:?}");
    }
}

fn snapshot(mesh: &MeshBuffer) -> Vec<Vec<u8>> {
    let mut out: Vec<Vec<u8>> = VertexAttribute::ALL
        .iter()
        .map(|&attr| mesh.attribute_bytes(attr).to_vec())
        .collect();
    out.push(mesh.index_bytes().to_vec());
    out
}

#[test]
fn test_scenario_four_by_four() {
    let desc = MeshDescriptor::new(4, 4, 1.0, TextureMode::Polar);
    let mesh = build(&desc).unwrap();

    assert_eq!(mesh.vertex_count(), 12);
    assert_eq!(desc.index_capacity(), 48);
    assert_eq!(mesh.index_count(), 48);
    assert_eq!(mesh.triangle_count(), 16);

    assert_eq!(desc.south_pole_index(), 10);
    assert_eq!(desc.north_pole_index(), 11);
    assert_eq!(mesh.positions[10], [0.0, 0.0, -1.0]);
    assert_eq!(mesh.positions[11], [0.0, 0.0, 1.0]);

    // One strip of 4 quads, then two 4-triangle fans
    let fans = mesh
        .triangles()
        .filter(|t| t.contains(&10) || t.contains(&11))
        .count();
    assert_eq!(fans, 8);
}

#[test]
fn test_scenario_bipyramid() {
    let desc = MeshDescriptor::new(3, 6, 1.0, TextureMode::Linear);
    let mesh = build(&desc).unwrap();

    assert_eq!(mesh.vertex_count(), 9);
    assert_eq!(mesh.triangle_count(), 12);

    let south = mesh.triangles().filter(|t| t.contains(&7)).count();
    let north = mesh.triangles().filter(|t| t.contains(&8)).count();
    assert_eq!((south, north), (6, 6));
}

#[test]
fn test_degenerate_rejection() {
    for desc in [
        MeshDescriptor::new(2, 8, 1.0, TextureMode::Polar),
        MeshDescriptor::new(8, 2, 1.0, TextureMode::Polar),
        MeshDescriptor::new(8, 8, 0.0, TextureMode::Polar),
        MeshDescriptor::new(8, 8, -0.5, TextureMode::Linear),
    ] {
        assert!(matches!(build(&desc), Err(MeshError::InvalidParameter { .. })));
        assert!(matches!(Sphere::new(desc), Err(MeshError::InvalidParameter { .. })));
    }
}

#[test]
fn test_unsupported_texture_mode() {
    assert!(matches!(
        "spherical".parse::<TextureMode>(),
        Err(MeshError::UnsupportedTextureMode(name)) if name == "spherical"
    ));
    assert!(TextureMode::try_from(7u8).is_err());
}

#[test]
fn test_independent_spheres_across_threads() {
    let descs = [
        MeshDescriptor::new(12, 24, 1.0, TextureMode::Linear),
        MeshDescriptor::new(6, 9, 3.0, TextureMode::Polar)
            .with_view_inside(true),
        MeshDescriptor::new(20, 5, 0.5, TextureMode::Projected),
    ];

    let threaded: Vec<MeshBuffer> = std::thread::scope(|scope| {
        let handles: Vec<_> = descs
            .iter()
            .map(|desc| scope.spawn(move || build(desc).unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for (desc, mesh) in descs.iter().zip(&threaded) {
        assert_eq!(&build(desc).unwrap(), mesh);
    }
}

#[test]
fn test_u16_indices_for_small_spheres() {
    let desc = MeshDescriptor::new(32, 64, 1.0, TextureMode::Polar);
    let mesh = build(&desc).unwrap();
    let narrow = mesh.indices_u16().unwrap();
    assert_eq!(narrow.len(), mesh.index_count());
    let widened: Vec<u32> = narrow.iter().map(|&i| u32::from(i)).collect();
    assert_eq!(widened, mesh.indices);

    let desc = MeshDescriptor::new(300, 300, 1.0, TextureMode::Polar);
    let large = build(&desc).unwrap();
    assert!(matches!(large.indices_u16(), Err(MeshError::IndexOverflow { .. })));
}
