use glam::DVec3;

use crate::math::RigidTransform;
use crate::scene::face::Face;
use crate::scene::fragment::Fragment;

/// Concatenated result of merging fragments in order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MergedScene {
    pub vertices: Vec<DVec3>,
    pub faces: Vec<Face>,
}

impl MergedScene {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// A merged scene is a valid fragment in its own right, so a result
    /// can be fed back into a later merge.
    pub fn into_fragment(self) -> Fragment {
        Fragment {
            vertices: self.vertices,
            faces: self.faces,
        }
    }
}

/// Merges fragments in input order. Each fragment's vertices are run
/// through its transform (when present) and its face indices are shifted
/// by the vertex count of all fragments before it.
///
/// The offset is threaded through a fold, so the result is fully
/// determined by the order of `entries`.
pub fn merge<I>(entries: I) -> MergedScene
where
    I: IntoIterator<Item = (Fragment, Option<RigidTransform>)>,
{
    let (scene, _) = entries.into_iter().fold(
        (MergedScene::default(), 0u32),
        |(mut scene, offset), (fragment, transform)| {
            let added = fragment.vertices.len() as u32;

            match transform {
                Some(transform) => scene
                    .vertices
                    .extend(fragment.vertices.iter().map(|&v| transform.apply(v))),
                None => scene.vertices.extend_from_slice(&fragment.vertices),
            }
            scene
                .faces
                .extend(fragment.faces.iter().map(|face| face.renumbered(offset)));

            (scene, offset + added)
        },
    );

    debug_assert!(
        scene
            .faces
            .iter()
            .flat_map(|face| face.indices.iter())
            .all(|&id| (id as usize) < scene.vertices.len()),
        "merged face index escaped the merged vertex list"
    );

    scene
}
