use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use regex::{Regex, RegexBuilder};
use std::fmt::Write;

/// Split a `/pattern/flags` literal into its pattern and flags, or `None`
/// if the text is not literal-shaped. Flags must be a subset of the
/// source-style set `gimsuy`.
pub(crate) fn split_literal(text: &str) -> Option<(&str, &str)> {
    let rest = text.strip_prefix('/')?;
    let end = rest.rfind('/')?;
    let (pattern, flags) = (&rest[..end], &rest[end + 1..]);
    if pattern.is_empty() {
        return None;
    }
    if !flags
        .bytes()
        .all(|b| matches!(b, b'g' | b'i' | b'm' | b's' | b'u' | b'y'))
    {
        return None;
    }
    Some((pattern, flags))
}

/// Compile a pattern with source-style flags mapped onto the host engine.
/// `i`, `m` and `s` translate directly; `g` changes iteration rather than
/// syntax and `u`/`y` have no equivalent here, so all three are accepted
/// and ignored at compile time.
pub(crate) fn compile_with_flags(
    pattern: &str,
    flags: &str,
) -> std::result::Result<Regex, regex::Error> {
    let mut builder = RegexBuilder::new(pattern);
    builder.case_insensitive(flags.contains('i'));
    builder.multi_line(flags.contains('m'));
    builder.dot_matches_new_line(flags.contains('s'));
    builder.build()
}

/// Run a regex (literal-shaped or bare) against sample text and report the
/// matches. Without the `g` flag only the first match is reported,
/// mirroring the literal's source semantics.
pub fn run(pattern: &str, text: &str) -> Result<CmdResult> {
    let trimmed = pattern.trim();
    let (pattern, flags) = split_literal(trimmed).unwrap_or((trimmed, ""));
    let re = compile_with_flags(pattern, flags)?;

    let mut result = CmdResult::default();
    if text.is_empty() {
        result.add_message(CmdMessage::info("Pattern compiles; no sample text given"));
        return Ok(result);
    }

    let matches: Vec<regex::Match> = if flags.contains('g') {
        re.find_iter(text).collect()
    } else {
        re.find(text).into_iter().collect()
    };

    if matches.is_empty() {
        result.add_message(CmdMessage::info("No matches"));
        return Ok(result);
    }

    let mut output = String::new();
    for (i, m) in matches.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        let _ = write!(output, "{}: {:?} at {}..{}", i + 1, m.as_str(), m.start(), m.end());
        if let Some(captures) = re.captures(&text[m.start()..]) {
            for (group_index, group) in captures.iter().enumerate().skip(1) {
                if let Some(group) = group {
                    let _ = write!(output, "\n  group {}: {:?}", group_index, group.as_str());
                }
            }
        }
    }
    result.add_message(CmdMessage::success(format!(
        "{} match{}",
        matches.len(),
        if matches.len() == 1 { "" } else { "es" }
    )));
    Ok(result.with_output(output))
}
