pub mod shape_sphere;
pub mod trail;
