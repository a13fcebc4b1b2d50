//! Text-format mesh loading.
//!
//! The format is line-oriented: `v x y z` lines declare vertex
//! positions, `f i j k` lines declare triangles by **1-based** vertex
//! index. Any other line is skipped. This matches the classic
//! teaching-mesh dialect of OBJ (no normals, no texture coordinates,
//! triangles only).

use std::fmt;
use std::path::Path;

use glam::Vec3;

use super::topology::MeshTopology;

/// Errors produced while reading a mesh file.
#[derive(Debug)]
pub enum MeshLoadError {
    /// Underlying file I/O failure.
    Io(std::io::Error),
    /// A `v` or `f` line did not contain three parseable values.
    MalformedLine {
        /// 1-based line number in the source file.
        line: usize,
        /// The offending line content.
        content: String,
    },
    /// A face referenced a vertex index outside the declared range.
    IndexOutOfRange {
        /// 1-based line number in the source file.
        line: usize,
        /// The 1-based index as written in the file.
        index: u32,
        /// Number of vertices declared by the file.
        vertex_count: usize,
    },
    /// The file declared no vertices.
    EmptyMesh,
}

impl fmt::Display for MeshLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::MalformedLine { line, content } => {
                write!(f, "malformed line {line}: {content:?}")
            }
            Self::IndexOutOfRange {
                line,
                index,
                vertex_count,
            } => write!(
                f,
                "face index {index} on line {line} out of range \
                 (mesh has {vertex_count} vertices)"
            ),
            Self::EmptyMesh => write!(f, "mesh file declares no vertices"),
        }
    }
}

impl std::error::Error for MeshLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for MeshLoadError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

/// Read and parse a mesh file from disk.
///
/// # Errors
///
/// Returns [`MeshLoadError`] on I/O failure, malformed `v`/`f` lines,
/// out-of-range face indices, or an empty mesh.
pub fn load_mesh(path: &Path) -> Result<MeshTopology, MeshLoadError> {
    let content = std::fs::read_to_string(path)?;
    let mesh = parse_mesh(&content)?;
    log::info!(
        "loaded {} ({} vertices, {} faces)",
        path.display(),
        mesh.vertex_count(),
        mesh.face_count()
    );
    Ok(mesh)
}

/// Parse mesh text into a [`MeshTopology`].
///
/// Face indices are converted from the file's 1-based convention to the
/// zero-based indices used everywhere else in the crate.
///
/// # Errors
///
/// Returns [`MeshLoadError`] on malformed `v`/`f` lines, out-of-range
/// face indices, or an empty mesh.
pub fn parse_mesh(text: &str) -> Result<MeshTopology, MeshLoadError> {
    let mut positions: Vec<Vec3> = Vec::new();
    let mut faces: Vec<[u32; 3]> = Vec::new();

    for (i, raw) in text.lines().enumerate() {
        let line = i + 1;
        let mut tokens = raw.split_whitespace();

        match tokens.next() {
            Some("v") => {
                let coords = parse_three::<f32, _>(tokens).ok_or_else(|| {
                    MeshLoadError::MalformedLine {
                        line,
                        content: raw.to_owned(),
                    }
                })?;
                positions.push(Vec3::from_array(coords));
            }
            Some("f") => {
                let indices = parse_three::<u32, _>(tokens).ok_or_else(|| {
                    MeshLoadError::MalformedLine {
                        line,
                        content: raw.to_owned(),
                    }
                })?;
                faces.push([
                    to_zero_based(indices[0], line, &positions)?,
                    to_zero_based(indices[1], line, &positions)?,
                    to_zero_based(indices[2], line, &positions)?,
                ]);
            }
            // Comments, blank lines, and unknown records are skipped.
            _ => {}
        }
    }

    if positions.is_empty() {
        return Err(MeshLoadError::EmptyMesh);
    }

    Ok(MeshTopology::new(positions, faces))
}

/// Parse exactly three whitespace-separated values of type `T`.
fn parse_three<'a, T, I>(mut tokens: I) -> Option<[T; 3]>
where
    T: std::str::FromStr,
    I: Iterator<Item = &'a str>,
{
    let a = tokens.next()?.parse().ok()?;
    let b = tokens.next()?.parse().ok()?;
    let c = tokens.next()?.parse().ok()?;
    Some([a, b, c])
}

/// Convert a 1-based file index to a zero-based vertex index, checking
/// range against the vertices declared so far.
fn to_zero_based(
    index: u32,
    line: usize,
    positions: &[Vec3],
) -> Result<u32, MeshLoadError> {
    if index == 0 || index as usize > positions.len() {
        return Err(MeshLoadError::IndexOutOfRange {
            line,
            index,
            vertex_count: positions.len(),
        });
    }
    Ok(index - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRIANGLE: &str = "\
v 0.0 0.0 0.0
v 1.0 0.0 0.0
v 0.0 1.0 0.0
f 1 2 3
";

    #[test]
    fn parses_vertices_and_faces() {
        let mesh = match parse_mesh(TRIANGLE) {
            Ok(m) => m,
            Err(e) => panic!("parse failed: {e}"),
        };
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.faces, vec![[0, 1, 2]]);
        assert_eq!(mesh.positions[1], Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn skips_unknown_records_and_blank_lines() {
        let text = "# a comment\n\nv 0 0 0\nv 1 0 0\nv 0 1 0\nvn 0 0 1\nf 1 2 3\n";
        let mesh = match parse_mesh(text) {
            Ok(m) => m,
            Err(e) => panic!("parse failed: {e}"),
        };
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.face_count(), 1);
    }

    #[test]
    fn reports_malformed_vertex_line() {
        let err = parse_mesh("v 1.0 2.0\n").err();
        match err {
            Some(MeshLoadError::MalformedLine { line: 1, .. }) => {}
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn reports_out_of_range_face_index() {
        let text = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 9\n";
        match parse_mesh(text).err() {
            Some(MeshLoadError::IndexOutOfRange {
                line: 4, index: 9, ..
            }) => {}
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn zero_index_is_rejected() {
        let text = "v 0 0 0\nf 0 1 1\n";
        assert!(matches!(
            parse_mesh(text),
            Err(MeshLoadError::IndexOutOfRange { index: 0, .. })
        ));
    }

    #[test]
    fn empty_input_is_an_error() {
        assert!(matches!(parse_mesh(""), Err(MeshLoadError::EmptyMesh)));
    }

    #[test]
    fn bounds_track_min_max() {
        let text = "v -1 5 2\nv 3 -2 0\nv 0 0 7\nf 1 2 3\n";
        let mesh = match parse_mesh(text) {
            Ok(m) => m,
            Err(e) => panic!("parse failed: {e}"),
        };
        assert_eq!(mesh.bounds.min, Vec3::new(-1.0, -2.0, 0.0));
        assert_eq!(mesh.bounds.max, Vec3::new(3.0, 5.0, 7.0));
    }
}
