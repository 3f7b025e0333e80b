pub mod javascript_modules;
pub mod templated_path;
