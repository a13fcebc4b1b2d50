use glam::Vec3;

/// Axis-aligned bounding box, grown point by point during mesh loading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Smallest coordinate per axis.
    pub min: Vec3,
    /// Largest coordinate per axis.
    pub max: Vec3,
}

impl Aabb {
    /// Empty box: grows to fit the first point it encloses.
    pub const EMPTY: Self = Self {
        min: Vec3::splat(f32::INFINITY),
        max: Vec3::splat(f32::NEG_INFINITY),
    };

    /// Grow the box to enclose `point`.
    pub fn enclose(&mut self, point: Vec3) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    /// Per-axis extent (`max - min`).
    #[must_use]
    pub fn extent(&self) -> Vec3 {
        self.max - self.min
    }

    /// Center point of the box.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// The larger of the x and y extents. Drives the symmetric frustum
    /// size so the model fills the square viewport.
    #[must_use]
    pub fn max_xy_extent(&self) -> f32 {
        let e = self.extent();
        e.x.abs().max(e.y.abs())
    }
}

/// Raw triangle-mesh topology: positions plus index triples.
///
/// Owned by the loader; the normal synthesizer and renderer read it but
/// never mutate it. All derived data (normals, adjacency) is recomputed
/// wholesale when a new `MeshTopology` replaces this one.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshTopology {
    /// Vertex positions in model space.
    pub positions: Vec<Vec3>,
    /// Triangle faces as zero-based index triples into `positions`.
    pub faces: Vec<[u32; 3]>,
    /// Bounding box of all positions.
    pub bounds: Aabb,
}

impl MeshTopology {
    /// Build a topology from positions and faces, computing the bounds.
    #[must_use]
    pub fn new(positions: Vec<Vec3>, faces: Vec<[u32; 3]>) -> Self {
        let mut bounds = Aabb::EMPTY;
        for &p in &positions {
            bounds.enclose(p);
        }
        Self {
            positions,
            faces,
            bounds,
        }
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangle faces.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_enclose_all_positions() {
        let mesh = MeshTopology::new(
            vec![
                Vec3::new(-1.0, 2.0, 0.5),
                Vec3::new(3.0, -4.0, 0.0),
                Vec3::new(0.0, 0.0, -2.5),
            ],
            vec![[0, 1, 2]],
        );
        assert_eq!(mesh.bounds.min, Vec3::new(-1.0, -4.0, -2.5));
        assert_eq!(mesh.bounds.max, Vec3::new(3.0, 2.0, 0.5));
    }

    #[test]
    fn max_xy_extent_picks_larger_axis() {
        let mut bounds = Aabb::EMPTY;
        bounds.enclose(Vec3::new(0.0, 0.0, 0.0));
        bounds.enclose(Vec3::new(2.0, 5.0, 100.0));
        // z extent is ignored; y wins over x
        assert_eq!(bounds.max_xy_extent(), 5.0);
    }

    #[test]
    fn center_is_midpoint() {
        let mut bounds = Aabb::EMPTY;
        bounds.enclose(Vec3::new(-2.0, 0.0, 4.0));
        bounds.enclose(Vec3::new(2.0, 2.0, 8.0));
        assert_eq!(bounds.center(), Vec3::new(0.0, 1.0, 6.0));
    }
}
