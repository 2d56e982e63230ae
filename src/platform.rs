//! Host platform detection

use std::fmt;

/// The two launch styles the backend ships start scripts for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Posix,
}

impl Platform {
    /// Detect the platform the launcher is running on
    pub fn detect() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Posix
        }
    }

    /// File name of the backend start script for this platform
    pub fn script_name(self) -> &'static str {
        match self {
            Platform::Windows => "start_backend.bat",
            Platform::Posix => "start_backend.sh",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Windows => write!(f, "Windows"),
            Platform::Posix => write!(f, "Unix/Linux/macOS"),
        }
    }
}
