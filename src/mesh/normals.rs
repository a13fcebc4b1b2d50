//! Vertex-normal synthesis for smooth (Gouraud-style) shading.
//!
//! The pipeline runs in three steps, rebuilt from scratch on every mesh
//! load: per-face normals and areas, a vertex-to-incident-face adjacency
//! table, and finally per-vertex normals as the area-weighted average of
//! incident face normals. The weighted sum is order-independent, so the
//! result does not depend on face scan order.

use glam::Vec3;

use super::topology::MeshTopology;

/// Cross products shorter than this are treated as degenerate
/// (zero-area) faces.
const DEGENERATE_EPS: f32 = 1e-10;

/// Vertex-to-incident-face adjacency in CSR form: `incident` holds face
/// indices grouped by vertex, `offsets` marks each vertex's slice.
///
/// Non-destructive by construction — lookups borrow, nothing is drained —
/// so the table stays valid for the lifetime of the mesh it was built
/// from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexFaceAdjacency {
    offsets: Vec<u32>,
    incident: Vec<u32>,
}

impl VertexFaceAdjacency {
    /// Build the adjacency table with a two-pass counting scheme: first
    /// count incident faces per vertex, then scatter face indices into
    /// each vertex's slice in face-scan order.
    #[must_use]
    pub fn build(faces: &[[u32; 3]], vertex_count: usize) -> Self {
        let mut counts = vec![0u32; vertex_count];
        for face in faces {
            for &v in face {
                counts[v as usize] += 1;
            }
        }

        let mut offsets = vec![0u32; vertex_count + 1];
        for (i, &c) in counts.iter().enumerate() {
            offsets[i + 1] = offsets[i] + c;
        }

        let mut cursor = offsets[..vertex_count].to_vec();
        let mut incident = vec![0u32; offsets[vertex_count] as usize];
        for (f, face) in faces.iter().enumerate() {
            for &v in face {
                let slot = cursor[v as usize];
                incident[slot as usize] = f as u32;
                cursor[v as usize] += 1;
            }
        }

        Self { offsets, incident }
    }

    /// Indices of the faces incident to `vertex`, in face-scan order.
    #[must_use]
    pub fn faces_of(&self, vertex: usize) -> &[u32] {
        let start = self.offsets[vertex] as usize;
        let end = self.offsets[vertex + 1] as usize;
        &self.incident[start..end]
    }

    /// Number of vertices the table covers.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.offsets.len() - 1
    }
}

/// Shading data derived from a mesh's topology.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshNormals {
    /// Unit normal per face. Degenerate (zero-area) faces get
    /// `Vec3::ZERO` so they drop out of the weighted average instead of
    /// propagating NaN.
    pub face_normals: Vec<Vec3>,
    /// Area per face (half the edge cross-product magnitude).
    pub face_areas: Vec<f32>,
    /// Vertex-to-incident-face table.
    pub adjacency: VertexFaceAdjacency,
    /// Unit normal per vertex: the normalized area-weighted sum of
    /// incident face normals. Isolated vertices get `Vec3::ZERO`.
    pub vertex_normals: Vec<Vec3>,
}

impl MeshNormals {
    /// Run the full synthesis pipeline over `mesh`.
    ///
    /// Counter-clockwise index order produces the outward normal: the
    /// triangle `(0,0,0), (1,0,0), (0,1,0)` yields `(0,0,1)`.
    #[must_use]
    pub fn synthesize(mesh: &MeshTopology) -> Self {
        let (face_normals, face_areas) = compute_face_data(mesh);
        let adjacency =
            VertexFaceAdjacency::build(&mesh.faces, mesh.vertex_count());
        let vertex_normals = synthesize_vertex_normals(
            mesh.vertex_count(),
            &face_normals,
            &face_areas,
            &adjacency,
        );
        Self {
            face_normals,
            face_areas,
            adjacency,
            vertex_normals,
        }
    }
}

/// Per-face normal and area from the edge cross product.
fn compute_face_data(mesh: &MeshTopology) -> (Vec<Vec3>, Vec<f32>) {
    let mut normals = Vec::with_capacity(mesh.face_count());
    let mut areas = Vec::with_capacity(mesh.face_count());

    for &[i0, i1, i2] in &mesh.faces {
        let v0 = mesh.positions[i0 as usize];
        let e1 = mesh.positions[i1 as usize] - v0;
        let e2 = mesh.positions[i2 as usize] - v0;

        let cross = e1.cross(e2);
        let len = cross.length();
        if len > DEGENERATE_EPS {
            normals.push(cross / len);
        } else {
            normals.push(Vec3::ZERO);
        }
        areas.push(0.5 * len);
    }

    (normals, areas)
}

/// Area-weighted average of incident face normals, renormalized.
fn synthesize_vertex_normals(
    vertex_count: usize,
    face_normals: &[Vec3],
    face_areas: &[f32],
    adjacency: &VertexFaceAdjacency,
) -> Vec<Vec3> {
    let mut vertex_normals = Vec::with_capacity(vertex_count);

    for v in 0..vertex_count {
        let mut accum = Vec3::ZERO;
        for &f in adjacency.faces_of(v) {
            accum += face_areas[f as usize] * face_normals[f as usize];
        }

        let len = accum.length();
        if len > DEGENERATE_EPS {
            vertex_normals.push(accum / len);
        } else {
            // Isolated vertex, or only degenerate faces touch it.
            vertex_normals.push(Vec3::ZERO);
        }
    }

    vertex_normals
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn single_triangle() -> MeshTopology {
        MeshTopology::new(
            vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
            ],
            vec![[0, 1, 2]],
        )
    }

    /// Closed solid: every vertex has three non-degenerate incident
    /// faces.
    fn tetrahedron() -> MeshTopology {
        MeshTopology::new(
            vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
                Vec3::new(0.0, 0.0, 1.0),
            ],
            // Outward counter-clockwise winding for every face.
            vec![[0, 2, 1], [0, 1, 3], [0, 3, 2], [1, 2, 3]],
        )
    }

    #[test]
    fn canonical_triangle_face_data() {
        let normals = MeshNormals::synthesize(&single_triangle());
        assert_eq!(normals.face_areas, vec![0.5]);
        assert_eq!(normals.face_normals, vec![Vec3::new(0.0, 0.0, 1.0)]);
    }

    #[test]
    fn single_face_vertex_normals_equal_face_normal() {
        let normals = MeshNormals::synthesize(&single_triangle());
        // One incident face: the weighted average degenerates to that
        // face's normal exactly.
        for n in &normals.vertex_normals {
            assert_eq!(*n, Vec3::new(0.0, 0.0, 1.0));
        }
    }

    #[test]
    fn degenerate_face_yields_zero_normal() {
        let mesh = MeshTopology::new(
            vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 1.0, 1.0),
                Vec3::new(2.0, 2.0, 2.0),
            ],
            vec![[0, 1, 2]],
        );
        let normals = MeshNormals::synthesize(&mesh);
        assert_eq!(normals.face_normals[0], Vec3::ZERO);
        assert_eq!(normals.face_areas[0], 0.0);
        // The degenerate face contributes nothing, so its vertices end
        // up with the zero fallback, not NaN.
        for n in &normals.vertex_normals {
            assert_eq!(*n, Vec3::ZERO);
        }
    }

    #[test]
    fn isolated_vertex_gets_zero_normal() {
        let mesh = MeshTopology::new(
            vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
                Vec3::new(5.0, 5.0, 5.0), // referenced by no face
            ],
            vec![[0, 1, 2]],
        );
        let normals = MeshNormals::synthesize(&mesh);
        assert_eq!(normals.vertex_normals[3], Vec3::ZERO);
    }

    #[test]
    fn closed_mesh_normals_are_unit_length() {
        let normals = MeshNormals::synthesize(&tetrahedron());
        for n in &normals.vertex_normals {
            assert_relative_eq!(n.length(), 1.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn adjacency_lists_incident_faces_in_scan_order() {
        let mesh = tetrahedron();
        let adjacency = VertexFaceAdjacency::build(&mesh.faces, 4);
        assert_eq!(adjacency.vertex_count(), 4);
        // Vertex 0 appears in faces 0, 1, 2; vertex 3 in faces 1, 2, 3.
        assert_eq!(adjacency.faces_of(0), &[0, 1, 2]);
        assert_eq!(adjacency.faces_of(3), &[1, 2, 3]);
    }

    #[test]
    fn result_is_independent_of_face_order() {
        let mesh = tetrahedron();
        let mut reordered = mesh.clone();
        reordered.faces.reverse();

        let a = MeshNormals::synthesize(&mesh);
        let b = MeshNormals::synthesize(&reordered);
        for (na, nb) in a.vertex_normals.iter().zip(&b.vertex_normals) {
            assert_relative_eq!(na.x, nb.x, epsilon = 1e-6);
            assert_relative_eq!(na.y, nb.y, epsilon = 1e-6);
            assert_relative_eq!(na.z, nb.z, epsilon = 1e-6);
        }
    }

    #[test]
    fn area_weighting_biases_toward_larger_face() {
        // Vertex 0 is shared by a large +z face and a tiny +x face; the
        // averaged normal should lean heavily toward +z.
        let mesh = MeshTopology::new(
            vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(10.0, 0.0, 0.0),
                Vec3::new(0.0, 10.0, 0.0),
                Vec3::new(0.0, 0.1, 0.0),
                Vec3::new(0.0, 0.0, 0.1),
            ],
            vec![[0, 1, 2], [0, 3, 4]],
        );
        let normals = MeshNormals::synthesize(&mesh);
        let n = normals.vertex_normals[0];
        assert!(n.z > 0.99, "expected z-dominant normal, got {n}");
        assert!(n.x > 0.0);
    }
}
