//! Backstart library - cross-platform backend service launcher

pub mod config;
pub mod error;
pub mod platform;
pub mod supervisor;

// Re-export commonly used types
pub use config::LaunchConfig;
pub use error::LaunchError;
pub use platform::Platform;
pub use supervisor::Supervised;
