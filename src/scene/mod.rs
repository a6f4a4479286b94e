mod error;
mod face;
mod fragment;
mod merge;
mod template;
mod writer;

pub use error::SceneError;
pub use face::Face;
pub use fragment::{Fragment, FACES_MARKER, VERTICES_MARKER};
pub use merge::{merge, MergedScene};
pub use template::DEFAULT_TEMPLATE;
pub use writer::write_scene;
