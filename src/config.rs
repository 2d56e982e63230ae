//! Launch command resolution

use crate::error::LaunchError;
use crate::platform::Platform;
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Resolved invocation for the backend start script
///
/// The script is always run through the host shell rather than exec'd
/// directly: the POSIX entry is a relative `./start_backend.sh` reference
/// handed to `sh` as an operand, so it resolves against the backend
/// directory and runs even when the script is not marked executable.
#[derive(Debug, Clone)]
pub struct LaunchConfig {
    pub platform: Platform,
    pub backend_dir: PathBuf,
    pub program: String,
    pub args: Vec<String>,
}

impl LaunchConfig {
    /// Resolve the start command for `backend_dir` on `platform`.
    ///
    /// Verifies the script exists before any spawn attempt; the error names
    /// the full path that was expected.
    pub fn resolve(platform: Platform, backend_dir: PathBuf) -> Result<Self, LaunchError> {
        let script_path = backend_dir.join(platform.script_name());

        if !script_path.exists() {
            return Err(LaunchError::CommandNotFound { path: script_path });
        }

        let (program, args) = shell_invocation(platform);
        debug!("resolved launch command: {} {:?}", program, args);

        Ok(Self {
            platform,
            backend_dir,
            program,
            args,
        })
    }

    /// Default backend directory: `backend/` sibling of the launcher's own directory
    pub fn default_backend_dir() -> Result<PathBuf, LaunchError> {
        let exe = env::current_exe().map_err(|source| LaunchError::ExePath { source })?;
        let launcher_dir = exe.parent().unwrap_or_else(|| Path::new("."));

        Ok(launcher_dir
            .parent()
            .unwrap_or(launcher_dir)
            .join("backend"))
    }
}

/// Shell invocation for the platform's start script
fn shell_invocation(platform: Platform) -> (String, Vec<String>) {
    match platform {
        Platform::Windows => (
            "cmd".to_string(),
            vec!["/C".to_string(), platform.script_name().to_string()],
        ),
        Platform::Posix => (
            "sh".to_string(),
            vec![format!("./{}", platform.script_name())],
        ),
    }
}
