//! Configuration: structures, loading and persistence.
//!
//! The configuration is loaded once in `main` and passed down by reference.

mod loader;
mod structs;
mod writer;


pub use loader::{PROJECT_CONFIG_FILE, get_config_dir, get_config_path, load_config, load_config_from};
pub use structs::*;
pub use writer::save_config;
