use crate::commands::CmdResult;
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonMode {
    Pretty,
    Minify,
}

/// Re-emit JSON either pretty-printed (two-space indent) or minified.
pub fn run(input: &str, mode: JsonMode) -> Result<CmdResult> {
    let value: serde_json::Value = serde_json::from_str(input.trim())?;
    let output = match mode {
        JsonMode::Pretty => serde_json::to_string_pretty(&value)?,
        JsonMode::Minify => serde_json::to_string(&value)?,
    };
    Ok(CmdResult::default().with_output(output))
}
