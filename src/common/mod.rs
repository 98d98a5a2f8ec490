pub mod math;
pub mod vec2d;
