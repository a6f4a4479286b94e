use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::scene::error::SceneError;
use crate::scene::merge::MergedScene;

/// Writes a merged scene to `path`: the template (when given) verbatim,
/// then the vertex and face sections, then the closing terminator.
///
/// The scene is written to a sibling temporary file that is renamed onto
/// `path` once complete, so a failed run leaves no partial output.
pub fn write_scene(
    path: impl AsRef<Path>,
    scene: &MergedScene,
    template: Option<&str>,
) -> Result<(), SceneError> {
    let path = path.as_ref();
    let tmp = temp_path(path);

    if let Err(err) = write_to(&tmp, scene, template) {
        let _ = fs::remove_file(&tmp);
        return Err(err);
    }

    fs::rename(&tmp, path)?;
    log::debug!(
        "{:?}: wrote {} vertices, {} faces",
        path,
        scene.vertex_count(),
        scene.face_count()
    );
    Ok(())
}

fn write_to(path: &Path, scene: &MergedScene, template: Option<&str>) -> Result<(), SceneError> {
    let mut out = BufWriter::new(File::create(path)?);

    if let Some(template) = template {
        out.write_all(template.as_bytes())?;
        if !template.ends_with('\n') {
            writeln!(out)?;
        }
    }

    writeln!(out, "Vertices {}", scene.vertices.len())?;
    for v in &scene.vertices {
        writeln!(out, "{} {} {}", v.x, v.y, v.z)?;
    }
    writeln!(out)?;

    writeln!(out, "Faces {}", scene.faces.len())?;
    for face in &scene.faces {
        writeln!(out, "{}", face)?;
    }
    writeln!(out)?;

    writeln!(out, "EndInput")?;
    out.flush()?;
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "scene".into());
    name.push(".tmp");
    path.with_file_name(name)
}
