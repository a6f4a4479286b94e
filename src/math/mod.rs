mod transform;

pub use transform::{rotate_x, rotate_y, rotate_z, RigidTransform};
