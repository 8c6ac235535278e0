//! Child process execution with streamed output.

use crate::bundler::error::{Error, Result};
use std::process::{ExitStatus, Stdio};
use tokio::{
    io::{AsyncBufReadExt, BufReader},
    process::Command,
};

/// Renders `command` as a single line for logs and error messages.
pub fn describe(command: &Command) -> String {
    let inner = command.as_std();
    std::iter::once(inner.get_program())
        .chain(inner.get_args())
        .map(|s| s.to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Runs `command` to completion, forwarding its stdout and stderr line by line.
///
/// Both pipes are drained before waiting on the exit status. The child is
/// killed if this future is dropped before it exits. There is no timeout.
pub async fn run_streaming(mut command: Command) -> Result<ExitStatus> {
    let description = describe(&command);
    log::debug!("Executing: {}", description);

    let mut child = command
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|e| Error::GenericError(format!("Failed to execute {}: {}", description, e)))?;

    tokio::join!(
        async {
            if let Some(stdout) = child.stdout.take() {
                let mut lines = BufReader::new(stdout).lines();
                while let Ok(Some(line)) = lines.next_line().await {
                    println!("{}", line);
                }
            }
        },
        async {
            if let Some(stderr) = child.stderr.take() {
                let mut lines = BufReader::new(stderr).lines();
                while let Ok(Some(line)) = lines.next_line().await {
                    eprintln!("{}", line);
                }
            }
        }
    );

    child
        .wait()
        .await
        .map_err(|e| Error::GenericError(format!("Failed to wait for {}: {}", description, e)))
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn describes_program_and_args() {
        let mut cmd = Command::new("mvn");
        cmd.args(["-f", "pom.xml", "package"]);
        assert_eq!(describe(&cmd), "mvn -f pom.xml package");
    }

    #[tokio::test]
    async fn reports_exit_status() {
        let mut ok = Command::new("sh");
        ok.args(["-c", "echo out; echo err >&2"]);
        assert!(run_streaming(ok).await.unwrap().success());

        let mut failing = Command::new("sh");
        failing.args(["-c", "exit 3"]);
        assert_eq!(run_streaming(failing).await.unwrap().code(), Some(3));
    }

    #[tokio::test]
    async fn missing_program_is_an_error() {
        let cmd = Command::new("/nonexistent/bootstrapp-test-binary");
        assert!(run_streaming(cmd).await.is_err());
    }
}
