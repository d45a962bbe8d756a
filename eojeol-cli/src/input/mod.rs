//! Input handling module

pub mod dict_loader;
pub mod file_reader;
pub mod glob_resolver;

pub use dict_loader::load_scores;
pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;
