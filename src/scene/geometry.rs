//! Wireframe sphere geometry
//!
//! Builds the unit-radius line-segment sets the scene draws: a subdivided
//! icosahedron for the globe and a triangulated UV sphere for the grid.
//! Segments are deduplicated so shared edges are emitted once.

use glam::Vec3;
use std::collections::{HashMap, HashSet};

/// Wireframe of an icosahedron subdivided `subdivisions` times, every vertex
/// normalized onto the unit sphere. Edge count is 30·4ⁿ.
pub fn icosphere_wireframe(subdivisions: u32) -> Vec<[Vec3; 2]> {
    // Canonical icosahedron vertices (golden ratio φ)
    let phi = (1.0 + 5.0_f32.sqrt()) * 0.5;
    let mut verts: Vec<Vec3> = vec![
        Vec3::new(-1.0, phi, 0.0),
        Vec3::new(1.0, phi, 0.0),
        Vec3::new(-1.0, -phi, 0.0),
        Vec3::new(1.0, -phi, 0.0),
        Vec3::new(0.0, -1.0, phi),
        Vec3::new(0.0, 1.0, phi),
        Vec3::new(0.0, -1.0, -phi),
        Vec3::new(0.0, 1.0, -phi),
        Vec3::new(phi, 0.0, -1.0),
        Vec3::new(phi, 0.0, 1.0),
        Vec3::new(-phi, 0.0, -1.0),
        Vec3::new(-phi, 0.0, 1.0),
    ];
    for v in &mut verts {
        *v = v.normalize();
    }

    // 20 faces, canonical layout
    let mut faces: Vec<[u32; 3]> = vec![
        [0, 11, 5],
        [0, 5, 1],
        [0, 1, 7],
        [0, 7, 10],
        [0, 10, 11],
        [1, 5, 9],
        [5, 11, 4],
        [11, 10, 2],
        [10, 7, 6],
        [7, 1, 8],
        [3, 9, 4],
        [3, 4, 2],
        [3, 2, 6],
        [3, 6, 8],
        [3, 8, 9],
        [4, 9, 5],
        [2, 4, 11],
        [6, 2, 10],
        [8, 6, 7],
        [9, 8, 1],
    ];

    for _ in 0..subdivisions {
        // Midpoints are shared between the two faces of an edge.
        let mut midpoints: HashMap<(u32, u32), u32> = HashMap::new();
        let mut next = Vec::with_capacity(faces.len() * 4);

        for [a, b, c] in faces {
            let ab = midpoint(&mut verts, &mut midpoints, a, b);
            let bc = midpoint(&mut verts, &mut midpoints, b, c);
            let ca = midpoint(&mut verts, &mut midpoints, c, a);
            next.push([a, ab, ca]);
            next.push([b, bc, ab]);
            next.push([c, ca, bc]);
            next.push([ab, bc, ca]);
        }
        faces = next;
    }

    edges_of(&faces)
        .into_iter()
        .map(|(a, b)| [verts[a as usize], verts[b as usize]])
        .collect()
}

fn midpoint(verts: &mut Vec<Vec3>, cache: &mut HashMap<(u32, u32), u32>, a: u32, b: u32) -> u32 {
    let key = (a.min(b), a.max(b));
    if let Some(&idx) = cache.get(&key) {
        return idx;
    }
    let m = ((verts[a as usize] + verts[b as usize]) * 0.5).normalize();
    let idx = verts.len() as u32;
    verts.push(m);
    cache.insert(key, idx);
    idx
}

/// Unique undirected edges of a triangle list, keyed by sorted index pair.
fn edges_of(faces: &[[u32; 3]]) -> Vec<(u32, u32)> {
    let mut seen: HashSet<(u32, u32)> = HashSet::new();
    let mut edges = Vec::new();
    for &[a, b, c] in faces {
        for (p, q) in [(a, b), (b, c), (c, a)] {
            let key = (p.min(q), p.max(q));
            if seen.insert(key) {
                edges.push(key);
            }
        }
    }
    edges
}

/// Wireframe of a triangulated UV sphere with the given segment counts,
/// vertices on the unit sphere. Matches the look of a sphere mesh turned
/// into line segments: ring and meridian edges plus one quad diagonal.
/// Seam and pole duplicates are collapsed by position.
pub fn uv_sphere_wireframe(width_segments: u32, height_segments: u32) -> Vec<[Vec3; 2]> {
    use std::f32::consts::PI;

    let vertex = |ix: u32, iy: u32| -> Vec3 {
        let theta = iy as f32 / height_segments as f32 * PI;
        let phi = ix as f32 / width_segments as f32 * 2.0 * PI;
        Vec3::new(
            theta.sin() * phi.cos(),
            theta.cos(),
            theta.sin() * phi.sin(),
        )
    };

    let mut seen: HashSet<([i32; 3], [i32; 3])> = HashSet::new();
    let mut segments = Vec::new();
    let mut push = |a: Vec3, b: Vec3| {
        let (ka, kb) = (quantize(a), quantize(b));
        if ka == kb {
            return; // degenerate pole edge
        }
        let key = if ka <= kb { (ka, kb) } else { (kb, ka) };
        if seen.insert(key) {
            segments.push([a, b]);
        }
    };

    for iy in 0..height_segments {
        for ix in 0..width_segments {
            let a = vertex(ix, iy);
            let b = vertex(ix + 1, iy);
            let c = vertex(ix + 1, iy + 1);
            let d = vertex(ix, iy + 1);
            // Two triangles per quad: a-b-d and b-c-d
            push(a, b);
            push(b, d);
            push(d, a);
            push(b, c);
            push(c, d);
        }
    }
    segments
}

fn quantize(v: Vec3) -> [i32; 3] {
    let q = |x: f32| (x * 100_000.0).round() as i32;
    [q(v.x), q(v.y), q(v.z)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icosahedron_edge_count() {
        assert_eq!(icosphere_wireframe(0).len(), 30);
    }

    #[test]
    fn icosphere_level3_edge_count() {
        // 30 · 4³
        assert_eq!(icosphere_wireframe(3).len(), 1920);
    }

    #[test]
    fn icosphere_vertices_on_unit_sphere() {
        for seg in icosphere_wireframe(2) {
            for v in seg {
                assert!((v.length() - 1.0).abs() < 1e-5, "vertex off sphere: {v:?}");
            }
        }
    }

    #[test]
    fn icosphere_no_degenerate_segments() {
        for seg in icosphere_wireframe(3) {
            assert!((seg[0] - seg[1]).length() > 1e-4);
        }
    }

    #[test]
    fn uv_sphere_vertices_on_unit_sphere() {
        for seg in uv_sphere_wireframe(16, 16) {
            for v in seg {
                assert!((v.length() - 1.0).abs() < 1e-5);
            }
        }
    }

    #[test]
    fn uv_sphere_no_duplicate_segments() {
        let segments = uv_sphere_wireframe(16, 16);
        let mut keys: Vec<_> = segments
            .iter()
            .map(|seg| {
                let (a, b) = (quantize(seg[0]), quantize(seg[1]));
                if a <= b {
                    (a, b)
                } else {
                    (b, a)
                }
            })
            .collect();
        let before = keys.len();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), before);
        assert!(!segments.is_empty());
    }
}
