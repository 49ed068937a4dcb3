pub mod constants;
pub mod interpreter;
pub mod matrix;
pub mod picture;
pub mod render;
pub mod vector;
