//! Subprocess lifecycle for one dialog invocation.

use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use confer_protocol::DialogRequest;
use log::{debug, warn};
use tokio::io::AsyncReadExt;
use tokio::process::Command;

use crate::DialogError;
use crate::parse::parse_dialog_output;

/// Reply text when the user did not answer within the timeout.
pub const TIMEOUT_REPLY: &str = "Error: User feedback timed out.";

/// Final caller-visible reply for one dialog invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogReply {
    /// Answer text or failure description.
    pub text: String,
    /// True when `text` describes a failure instead of an answer.
    pub is_error: bool,
}

impl DialogReply {
    fn answer(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    fn failure(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

/// Launches one dialog process per call and reports the user's answer.
///
/// Each invocation owns its own child process, output buffer, and timer;
/// launchers are cheap to clone and safe to share.
#[derive(Debug, Clone)]
pub struct DialogLauncher {
    /// Path to the dialog front-end binary.
    binary: PathBuf,
}

impl DialogLauncher {
    /// Create a launcher for the given dialog binary.
    pub fn new(binary: PathBuf) -> Self {
        Self { binary }
    }

    /// Path of the dialog binary this launcher spawns.
    pub fn binary(&self) -> &Path {
        &self.binary
    }

    /// Run one dialog and wait for the user's answer or the timeout.
    ///
    /// The serialized input document is passed as the value of a single
    /// `--input` argument; stdout is accumulated as it arrives and parsed
    /// only after the process exits, stderr passes through to the host.
    /// Every outcome that still yields caller-visible text resolves into a
    /// [`DialogReply`]; only a failure to start the process is an `Err`.
    /// The timeout and the exit path race, and exactly one of them decides
    /// the reply.
    pub async fn run(
        &self,
        request: &DialogRequest,
        timeout: Duration,
    ) -> Result<DialogReply, DialogError> {
        let input = serde_json::to_string(request)?;
        debug!(
            "launching dialog (binary={}, choices={}, timeout_ms={})",
            self.binary.display(),
            request.choices.len(),
            timeout.as_millis()
        );

        let mut child = Command::new(&self.binary)
            .arg("--input")
            .arg(&input)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(DialogError::Launch)?;

        let waited = tokio::time::timeout(timeout, async {
            let mut raw = String::new();
            if let Some(stdout) = child.stdout.as_mut() {
                stdout
                    .read_to_string(&mut raw)
                    .await
                    .map_err(DialogError::Io)?;
            }
            let status = child.wait().await.map_err(DialogError::Io)?;
            Ok::<_, DialogError>((status, raw))
        })
        .await;

        let (status, raw) = match waited {
            Ok(completed) => completed?,
            Err(_elapsed) => {
                warn!(
                    "dialog timed out (timeout_ms={}), killing process",
                    timeout.as_millis()
                );
                if let Err(err) = child.kill().await {
                    warn!("failed to kill timed-out dialog: {err}");
                }
                return Ok(DialogReply::failure(TIMEOUT_REPLY));
            }
        };

        match status.code() {
            Some(0) => match parse_dialog_output(&raw) {
                Ok(answer) => {
                    debug!("dialog answered (len={})", answer.len());
                    Ok(DialogReply::answer(answer))
                }
                Err(err) => Ok(DialogReply::failure(err.to_string())),
            },
            code => {
                // A signal death reports no code; surface it as -1.
                let code = code.unwrap_or(-1);
                warn!("dialog exited abnormally (code={code})");
                Ok(DialogReply::failure(format!(
                    "Tool window closed unexpectedly (code {code})"
                )))
            }
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::{DialogLauncher, DialogReply, TIMEOUT_REPLY};
    use crate::{CANCELLED_ANSWER, DialogError};
    use confer_protocol::DialogRequest;
    use pretty_assertions::assert_eq;
    use std::os::unix::fs::PermissionsExt;
    use std::path::{Path, PathBuf};
    use std::time::{Duration, Instant};
    use tempfile::tempdir;

    fn request() -> DialogRequest {
        DialogRequest {
            title: "Action Required".to_string(),
            body: String::new(),
            choices: vec!["Apple".to_string(), "Banana".to_string()],
            recommended_index: 1,
            allow_custom: false,
        }
    }

    fn stub_dialog(dir: &Path, body: &str) -> PathBuf {
        let path = dir.join("dialog.sh");
        std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("write script");
        let mut perms = std::fs::metadata(&path).expect("metadata").permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&path, perms).expect("chmod");
        path
    }

    #[tokio::test]
    async fn clean_result_yields_answer() {
        let temp = tempdir().expect("tempdir");
        let script = stub_dialog(
            temp.path(),
            r#"printf '{"choice":"Apple","index":0,"custom_input":null}'"#,
        );

        let reply = DialogLauncher::new(script)
            .run(&request(), Duration::from_secs(5))
            .await
            .expect("reply");
        assert_eq!(
            reply,
            DialogReply {
                text: "Apple".to_string(),
                is_error: false
            }
        );
    }

    #[tokio::test]
    async fn debug_noise_around_result_is_tolerated() {
        let temp = tempdir().expect("tempdir");
        let script = stub_dialog(
            temp.path(),
            concat!(
                "echo 'DEBUG: window ready'\n",
                r#"echo '{"choice":"Banana","index":1,"custom_input":null}'"#,
                "\necho 'DEBUG: shutting down'",
            ),
        );

        let reply = DialogLauncher::new(script)
            .run(&request(), Duration::from_secs(5))
            .await
            .expect("reply");
        assert_eq!(reply.text, "Banana");
        assert_eq!(reply.is_error, false);
    }

    #[tokio::test]
    async fn input_document_arrives_as_single_argument() {
        let temp = tempdir().expect("tempdir");
        let capture = temp.path().join("input.json");
        let script = stub_dialog(
            temp.path(),
            &format!(
                "printf '%s' \"$2\" > {}\nprintf '{{\"choice\":\"Apple\",\"index\":0}}'",
                capture.display()
            ),
        );

        DialogLauncher::new(script)
            .run(&request(), Duration::from_secs(5))
            .await
            .expect("reply");

        let captured = std::fs::read_to_string(&capture).expect("captured input");
        let value: serde_json::Value = serde_json::from_str(&captured).expect("input json");
        assert_eq!(value["recommendedIndex"], 1);
        assert_eq!(value["allowCustom"], false);
        assert_eq!(value["choices"], serde_json::json!(["Apple", "Banana"]));
    }

    #[tokio::test]
    async fn empty_output_is_cancellation() {
        let temp = tempdir().expect("tempdir");
        let script = stub_dialog(temp.path(), "exit 0");

        let reply = DialogLauncher::new(script)
            .run(&request(), Duration::from_secs(5))
            .await
            .expect("reply");
        assert_eq!(reply.text, CANCELLED_ANSWER);
        assert_eq!(reply.is_error, false);
    }

    #[tokio::test]
    async fn malformed_output_is_error_flagged_not_fatal() {
        let temp = tempdir().expect("tempdir");
        let script = stub_dialog(temp.path(), "printf 'not json'");

        let reply = DialogLauncher::new(script)
            .run(&request(), Duration::from_secs(5))
            .await
            .expect("reply");
        assert_eq!(reply.text, "Error parsing result: not json");
        assert_eq!(reply.is_error, true);
    }

    #[tokio::test]
    async fn nonzero_exit_reports_the_code() {
        let temp = tempdir().expect("tempdir");
        let script = stub_dialog(temp.path(), "exit 2");

        let reply = DialogLauncher::new(script)
            .run(&request(), Duration::from_secs(5))
            .await
            .expect("reply");
        assert_eq!(reply.text, "Tool window closed unexpectedly (code 2)");
        assert_eq!(reply.is_error, true);
    }

    #[tokio::test]
    async fn timeout_kills_the_dialog_and_flags_the_reply() {
        let temp = tempdir().expect("tempdir");
        let script = stub_dialog(temp.path(), "sleep 10");

        let started = Instant::now();
        let reply = DialogLauncher::new(script)
            .run(&request(), Duration::from_millis(250))
            .await
            .expect("reply");

        assert_eq!(reply.text, TIMEOUT_REPLY);
        assert_eq!(reply.is_error, true);
        // run() only returns after the child is killed and reaped; if the
        // kill were broken this would take the full sleep.
        assert_eq!(started.elapsed() < Duration::from_secs(5), true);
    }

    #[tokio::test]
    async fn missing_binary_is_a_launch_error() {
        let temp = tempdir().expect("tempdir");
        let missing = temp.path().join("no-such-dialog");

        let err = DialogLauncher::new(missing)
            .run(&request(), Duration::from_secs(1))
            .await
            .expect_err("launch failure");
        assert_eq!(matches!(err, DialogError::Launch(_)), true);
    }
}
