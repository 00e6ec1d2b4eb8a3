//! OS-specific clipboard sink. Failure here is recoverable: the CLI
//! falls back to printing the generated content so the user can copy it
//! by hand.

use crate::error::{DeckError, Result};
use std::io::Write;
use std::process::{Command, Stdio};

/// Copies text to the system clipboard.
/// - macOS: pbcopy
/// - Linux: xclip, falling back to xsel
/// - Windows: clip.exe
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        pipe_to("pbcopy", &[], text)
    }

    #[cfg(target_os = "linux")]
    {
        pipe_to("xclip", &["-selection", "clipboard"], text)
            .or_else(|_| pipe_to("xsel", &["--clipboard", "--input"], text))
    }

    #[cfg(target_os = "windows")]
    {
        pipe_to("clip", &[], text)
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        Err(sink_err("no clipboard command for this platform".to_string()))
    }
}

#[allow(dead_code)] // unused on exotic platforms
fn pipe_to(program: &str, args: &[&str], text: &str) -> Result<()> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|e| sink_err(format!("failed to spawn {}: {}", program, e)))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| sink_err(format!("failed to write to {}: {}", program, e)))?;
    }

    let status = child
        .wait()
        .map_err(|e| sink_err(format!("failed to wait for {}: {}", program, e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(sink_err(format!("{} exited with {}", program, status)))
    }
}

fn sink_err(reason: String) -> DeckError {
    DeckError::SinkWrite {
        sink: "clipboard".to_string(),
        reason,
    }
}
