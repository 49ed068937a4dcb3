pub mod edge_list;
pub mod lighting;
pub mod polygon_list;
pub mod scan_line;

pub use lighting::{LightingConfig, PointLight, ReflectionConstants, calc_light, restrict};
