use crate::error::{PasteurError, Result};
use std::process::Command;

/// Copies text to the system clipboard in an OS-specific way.
/// - macOS: uses pbcopy
/// - Linux: uses xclip or xsel
/// - Windows: uses clip.exe
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        copy_via(Command::new("pbcopy"), text)
    }

    #[cfg(target_os = "linux")]
    {
        let mut xclip = Command::new("xclip");
        xclip.args(["-selection", "clipboard"]);
        match copy_via(xclip, text) {
            Ok(()) => Ok(()),
            Err(_) => {
                let mut xsel = Command::new("xsel");
                xsel.args(["--clipboard", "--input"]);
                copy_via(xsel, text).map_err(|_| {
                    PasteurError::Api(
                        "Failed to run xclip or xsel. Install xclip or xsel.".to_string(),
                    )
                })
            }
        }
    }

    #[cfg(target_os = "windows")]
    {
        copy_via(Command::new("clip"), text)
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        let _ = text;
        Err(PasteurError::Api(
            "Clipboard not supported on this platform".to_string(),
        ))
    }
}

/// Reads the current clipboard text in an OS-specific way.
/// - macOS: uses pbpaste
/// - Linux: uses xclip or xsel
/// - Windows: uses powershell Get-Clipboard
pub fn read_from_clipboard() -> Result<String> {
    #[cfg(target_os = "macos")]
    {
        read_via(Command::new("pbpaste"))
    }

    #[cfg(target_os = "linux")]
    {
        let mut xclip = Command::new("xclip");
        xclip.args(["-selection", "clipboard", "-o"]);
        match read_via(xclip) {
            Ok(text) => Ok(text),
            Err(_) => {
                let mut xsel = Command::new("xsel");
                xsel.args(["--clipboard", "--output"]);
                read_via(xsel).map_err(|_| {
                    PasteurError::Api(
                        "Failed to run xclip or xsel. Install xclip or xsel.".to_string(),
                    )
                })
            }
        }
    }

    #[cfg(target_os = "windows")]
    {
        let mut powershell = Command::new("powershell");
        powershell.args(["-NoProfile", "-Command", "Get-Clipboard"]);
        read_via(powershell)
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        Err(PasteurError::Api(
            "Clipboard not supported on this platform".to_string(),
        ))
    }
}

#[allow(dead_code)]
fn copy_via(mut command: Command, text: &str) -> Result<()> {
    use std::io::Write;
    use std::process::Stdio;

    let mut child = command
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|e| PasteurError::Api(format!("Failed to spawn clipboard command: {}", e)))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| PasteurError::Api(format!("Failed to write to clipboard: {}", e)))?;
    }

    let status = child
        .wait()
        .map_err(|e| PasteurError::Api(format!("Failed to wait for clipboard command: {}", e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(PasteurError::Api(
            "Clipboard command exited with error".to_string(),
        ))
    }
}

#[allow(dead_code)]
fn read_via(mut command: Command) -> Result<String> {
    let output = command
        .output()
        .map_err(|e| PasteurError::Api(format!("Failed to spawn clipboard command: {}", e)))?;

    if !output.status.success() {
        return Err(PasteurError::Api(
            "Clipboard command exited with error".to_string(),
        ));
    }

    String::from_utf8(output.stdout)
        .map_err(|_| PasteurError::Api("Clipboard content is not valid UTF-8".to_string()))
}
