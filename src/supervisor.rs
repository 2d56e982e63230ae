//! Process supervision - spawn, signal forwarding, exit propagation

use crate::config::LaunchConfig;
use crate::error::LaunchError;
use std::io;
use std::process::{ExitStatus, Stdio};
use tokio::process::{Child, Command};
use tracing::debug;

/// A supervised backend child process
///
/// The child inherits the launcher's standard streams, so all backend output
/// reaches the user unmodified and in real time.
#[derive(Debug)]
pub struct Supervised {
    child: Child,
}

/// Spawn the backend start script as a supervised child process
///
/// Runs with the backend directory as working directory. Spawn failure is
/// fatal; the caller reports it and exits non-zero without ever entering the
/// supervision loop.
pub fn spawn(config: &LaunchConfig) -> Result<Supervised, LaunchError> {
    let mut cmd = Command::new(&config.program);
    cmd.args(&config.args)
        .current_dir(&config.backend_dir)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    let child = cmd.spawn().map_err(|source| LaunchError::Spawn { source })?;
    debug!("spawned backend child (pid {:?})", child.id());

    Ok(Supervised { child })
}

impl Supervised {
    /// Wait for the child to exit, forwarding interrupt and termination
    /// requests to it while it runs.
    ///
    /// A forwarded signal never terminates the launcher by itself; the
    /// child's own exit drives termination, so the backend gets to shut down
    /// gracefully and its exit code is still captured.
    #[cfg(unix)]
    pub async fn supervise(&mut self) -> io::Result<ExitStatus> {
        use nix::sys::signal::Signal;
        use tokio::signal::unix::{signal, SignalKind};

        let mut sigint = signal(SignalKind::interrupt())?;
        let mut sigterm = signal(SignalKind::terminate())?;

        loop {
            tokio::select! {
                status = self.child.wait() => return status,
                _ = sigint.recv() => {
                    println!("Stopping backend service...");
                    self.forward(Signal::SIGINT);
                }
                _ = sigterm.recv() => {
                    println!("Stopping backend service...");
                    self.forward(Signal::SIGTERM);
                }
            }
        }
    }

    /// Wait for the child to exit, stopping it on Ctrl-C.
    ///
    /// The console delivers Ctrl-C to every process attached to it, so the
    /// child already sees the event; the explicit kill is a best-effort
    /// backstop for children that ignore it.
    #[cfg(windows)]
    pub async fn supervise(&mut self) -> io::Result<ExitStatus> {
        let mut ctrl_c = tokio::signal::windows::ctrl_c()?;

        loop {
            tokio::select! {
                status = self.child.wait() => return status,
                _ = ctrl_c.recv() => {
                    println!("Stopping backend service...");
                    let _ = self.child.start_kill();
                }
            }
        }
    }

    /// Deliver `sig` to the child, tolerating races with child exit
    #[cfg(unix)]
    fn forward(&self, sig: nix::sys::signal::Signal) {
        use nix::sys::signal::kill;
        use nix::unistd::Pid;

        if let Some(pid) = self.child.id() {
            if let Err(err) = kill(Pid::from_raw(pid as i32), sig) {
                debug!("could not forward {:?} to pid {}: {}", sig, pid, err);
            }
        }
    }
}

/// Map the child's exit status to the launcher's own exit code
///
/// A child killed by a signal has no exit code; the conventional
/// `128 + signal` is reported instead.
pub fn exit_code(status: ExitStatus) -> i32 {
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(sig) = status.signal() {
            return 128 + sig;
        }
    }

    status.code().unwrap_or(1)
}
