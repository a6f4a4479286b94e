use anyhow::{Context, Result};
use glam::DVec3;
use std::path::Path;

use crate::scene::error::SceneError;
use crate::scene::face::Face;

pub const VERTICES_MARKER: &str = "Vertices";
pub const FACES_MARKER: &str = "Faces";

/// Vertex and face data read from one scene input file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fragment {
    pub vertices: Vec<DVec3>,
    pub faces: Vec<Face>,
}

impl Fragment {
    /// Loads a fragment from a scene file on disk
    pub fn from_file(path: impl AsRef<Path>) -> Result<Fragment> {
        let path = path.as_ref();
        println!("Reading scene fragment: {:?}", path);

        let text = std::fs::read_to_string(path)
            .context(format!("Failed to read scene file: {:?}", path))?;
        let fragment = Self::parse_str(&text)
            .context(format!("Failed to parse scene file: {:?}", path))?;

        log::debug!(
            "{:?}: {} vertices, {} faces",
            path,
            fragment.vertices.len(),
            fragment.faces.len()
        );

        Ok(fragment)
    }

    /// Parses fragment data out of in-memory scene text.
    ///
    /// Only the two section markers and the lines they declare are
    /// significant; anything else in the file is ignored. A missing
    /// marker or a section shorter than its declared count is an error.
    pub fn parse_str(text: &str) -> Result<Fragment, SceneError> {
        let lines: Vec<&str> = text.lines().collect();

        let vertex_section = find_section(&lines, VERTICES_MARKER)?;
        let face_section = find_section(&lines, FACES_MARKER)?;

        let vertices = collect_records(&lines, &vertex_section, parse_vertex)?;
        let faces = collect_records(&lines, &face_section, Face::parse)?;

        // A face may only reference vertices declared in the same file
        for (i, face) in faces.iter().enumerate() {
            if let Some(&id) = face.indices.iter().find(|&&id| id as usize >= vertices.len()) {
                return Err(SceneError::Malformed {
                    line: face_section.header + 2 + i,
                    reason: format!(
                        "face references vertex {} but the file declares {} vertices",
                        id,
                        vertices.len()
                    ),
                });
            }
        }

        Ok(Fragment { vertices, faces })
    }
}

/// Location of a "<Marker> <count>" header within the file's lines
struct Section {
    marker: &'static str,
    header: usize,
    declared: usize,
}

fn find_section(lines: &[&str], marker: &'static str) -> Result<Section, SceneError> {
    for (i, line) in lines.iter().enumerate() {
        let mut tokens = line.split_whitespace();
        if tokens.next() != Some(marker) {
            continue;
        }
        let declared = tokens
            .next()
            .ok_or_else(|| SceneError::Malformed {
                line: i + 1,
                reason: format!("'{}' header is missing its count", marker),
            })?
            .parse::<usize>()
            .map_err(|_| SceneError::Malformed {
                line: i + 1,
                reason: format!("'{}' header count is not an integer", marker),
            })?;
        return Ok(Section {
            marker,
            header: i,
            declared,
        });
    }
    Err(SceneError::MissingSection(marker))
}

fn collect_records<T>(
    lines: &[&str],
    section: &Section,
    parse: impl Fn(&str, usize) -> Result<T, SceneError>,
) -> Result<Vec<T>, SceneError> {
    let start = section.header + 1;
    let end = start + section.declared;
    if end > lines.len() {
        return Err(SceneError::ShortSection {
            marker: section.marker,
            declared: section.declared,
            found: lines.len().saturating_sub(start),
        });
    }

    lines[start..end]
        .iter()
        .enumerate()
        .map(|(i, text)| parse(text, start + i + 1))
        .collect()
}

fn parse_vertex(text: &str, line: usize) -> Result<DVec3, SceneError> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.len() != 3 {
        return Err(SceneError::Malformed {
            line,
            reason: format!("expected 'x y z', got '{}'", text.trim()),
        });
    }

    let coord = |token: &str| {
        token.parse::<f64>().map_err(|_| SceneError::Malformed {
            line,
            reason: format!("'{}' is not a number", token),
        })
    };

    Ok(DVec3::new(
        coord(tokens[0])?,
        coord(tokens[1])?,
        coord(tokens[2])?,
    ))
}
