// Tagwalk Library - the panel viewport and navigation core
// Modular design makes it easy to swap out components

pub mod audio;   // reads tags out of audio containers
pub mod config;  // settings and preferences
pub mod engine;  // panel focus, key dispatch, the browse loop
pub mod fs;      // directory listing capability
pub mod panel;   // panel chrome, list viewport, three-way layout
pub mod ui;      // terminal interface

// Export the stuff other modules actually use
pub use audio::{TagError, TagField, TagReader, TagSource};
pub use config::Config;
pub use engine::NavigationEngine;
pub use fs::{Filesystem, OsFilesystem};
pub use ui::TerminalManager;
