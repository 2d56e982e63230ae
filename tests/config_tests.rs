//! Tests for platform detection and launch command resolution

use anyhow::Result;
use backstart::{LaunchConfig, LaunchError, Platform};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_detect_returns_exactly_one_variant() {
    let platform = Platform::detect();

    assert!(
        matches!(platform, Platform::Windows | Platform::Posix),
        "Detection must return one of the two supported variants"
    );

    #[cfg(unix)]
    assert_eq!(platform, Platform::Posix);

    #[cfg(windows)]
    assert_eq!(platform, Platform::Windows);
}

#[test]
fn test_script_names_are_platform_conventional() {
    assert_eq!(Platform::Windows.script_name(), "start_backend.bat");
    assert_eq!(Platform::Posix.script_name(), "start_backend.sh");
}

#[test]
fn test_platform_display_names() {
    assert_eq!(Platform::Windows.to_string(), "Windows");
    assert_eq!(Platform::Posix.to_string(), "Unix/Linux/macOS");
}

#[test]
fn test_resolve_posix_invocation() -> Result<()> {
    let temp_dir = TempDir::new()?;
    fs::write(temp_dir.path().join("start_backend.sh"), "echo ok\n")?;

    let config = LaunchConfig::resolve(Platform::Posix, temp_dir.path().to_path_buf())?;

    assert_eq!(config.program, "sh");
    assert_eq!(config.args, vec!["./start_backend.sh".to_string()]);
    assert_eq!(config.backend_dir, temp_dir.path());

    Ok(())
}

#[test]
fn test_resolve_windows_invocation() -> Result<()> {
    let temp_dir = TempDir::new()?;
    fs::write(temp_dir.path().join("start_backend.bat"), "@echo ok\r\n")?;

    let config = LaunchConfig::resolve(Platform::Windows, temp_dir.path().to_path_buf())?;

    assert_eq!(config.program, "cmd");
    assert_eq!(
        config.args,
        vec!["/C".to_string(), "start_backend.bat".to_string()]
    );

    Ok(())
}

#[test]
fn test_resolve_missing_script_names_expected_path() {
    let temp_dir = TempDir::new().unwrap();

    let result = LaunchConfig::resolve(Platform::Posix, temp_dir.path().to_path_buf());

    let err = result.unwrap_err();
    assert!(
        matches!(err, LaunchError::CommandNotFound { .. }),
        "Empty backend directory should resolve to CommandNotFound"
    );

    let msg = err.to_string();
    assert!(
        msg.contains("start_backend.sh"),
        "Error should name the expected script: {msg}"
    );
    assert!(
        msg.contains(temp_dir.path().to_str().unwrap()),
        "Error should contain the resolved path: {msg}"
    );
}

#[test]
fn test_resolve_does_not_accept_other_platform_script() {
    // A directory holding only the Windows entry must not satisfy POSIX
    // resolution, and vice versa.
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("start_backend.bat"), "@echo ok\r\n").unwrap();

    let result = LaunchConfig::resolve(Platform::Posix, temp_dir.path().to_path_buf());
    assert!(result.is_err());

    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("start_backend.sh"), "echo ok\n").unwrap();

    let result = LaunchConfig::resolve(Platform::Windows, temp_dir.path().to_path_buf());
    assert!(result.is_err());
}
