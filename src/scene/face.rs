use std::fmt;

use crate::scene::error::SceneError;

/// A polygonal face referencing mesh vertices by index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Face {
    pub material: u32,
    pub indices: Vec<u32>,
}

impl Face {
    pub fn new(material: u32, indices: Vec<u32>) -> Self {
        Self { material, indices }
    }

    /// Parses a "matID count idx0 .. idx(count-1)" record.
    /// `line` is the 1-based line number used in error reports.
    pub fn parse(text: &str, line: usize) -> Result<Self, SceneError> {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        if tokens.len() < 2 {
            return Err(SceneError::Malformed {
                line,
                reason: format!(
                    "face record '{}' needs a material id and a vertex count",
                    text.trim()
                ),
            });
        }

        let number = |token: &str| {
            token.parse::<u32>().map_err(|_| SceneError::Malformed {
                line,
                reason: format!("'{}' is not a non-negative integer", token),
            })
        };

        let material = number(tokens[0])?;
        let count = number(tokens[1])? as usize;
        if tokens.len() != 2 + count {
            return Err(SceneError::Malformed {
                line,
                reason: format!(
                    "face declares {} vertices but lists {}",
                    count,
                    tokens.len() - 2
                ),
            });
        }

        let indices = tokens[2..]
            .iter()
            .map(|token| number(token))
            .collect::<Result<Vec<u32>, SceneError>>()?;

        Ok(Self { material, indices })
    }

    /// Copy of this face with every vertex index shifted by `offset`.
    /// Material id and index order are untouched.
    pub fn renumbered(&self, offset: u32) -> Face {
        Face {
            material: self.material,
            indices: self.indices.iter().map(|id| id + offset).collect(),
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.material, self.indices.len())?;
        for id in &self.indices {
            write!(f, " {}", id)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quad() {
        let face = Face::parse("3 4 10 11 12 13", 1).unwrap();
        assert_eq!(face.material, 3);
        assert_eq!(face.indices, vec![10, 11, 12, 13]);
    }

    #[test]
    fn test_parse_count_mismatch() {
        let err = Face::parse("0 3 1 2", 7).unwrap_err();
        assert!(matches!(err, SceneError::Malformed { line: 7, .. }));
    }

    #[test]
    fn test_parse_rejects_negative_index() {
        assert!(Face::parse("0 3 1 -2 3", 1).is_err());
    }

    #[test]
    fn test_renumbered_keeps_material_and_order() {
        let face = Face::new(5, vec![2, 0, 1]);
        let shifted = face.renumbered(10);
        assert_eq!(shifted.material, 5);
        assert_eq!(shifted.indices, vec![12, 10, 11]);
    }

    #[test]
    fn test_display_round_trip() {
        let face = Face::new(2, vec![0, 1, 2]);
        let text = face.to_string();
        assert_eq!(text, "2 3 0 1 2");
        assert_eq!(Face::parse(&text, 1).unwrap(), face);
    }
}
