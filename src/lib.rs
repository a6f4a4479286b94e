pub mod cli;
pub mod config;
pub mod math;
pub mod report;
pub mod scene;

// Re-export the merge pipeline at the crate root
pub use config::{InputEntry, MergeConfig};
pub use math::RigidTransform;
pub use scene::{merge, write_scene, Face, Fragment, MergedScene, SceneError, DEFAULT_TEMPLATE};
