use colored::*;
use directories::ProjectDirs;
use pasteur::api::{CmdMessage, CmdResult, ConfigAction, MessageLevel, PasteurApi};
use pasteur::clipboard::{copy_to_clipboard, read_from_clipboard};
use pasteur::commands::base64::Direction;
use pasteur::commands::json::JsonMode;
use pasteur::config::PasteurConfig;
use pasteur::error::{PasteurError, Result};
use pasteur::model::HistoryEntry;
use pasteur::router::PasteEvent;
use pasteur::store::fs::FileStore;
use std::io::{IsTerminal, Read};
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

use clap::Parser;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: PasteurApi<FileStore>,
    copy: bool,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Paste { text, dry_run }) => handle_paste(&mut ctx, text, dry_run),
        Some(Commands::Analyze { text }) => handle_analyze(&ctx, text),
        Some(Commands::Json { text, minify }) => handle_json(&ctx, text, minify),
        Some(Commands::Jwt { token, secret }) => handle_jwt(&ctx, token, secret),
        Some(Commands::Base64 {
            text,
            decode,
            url_safe,
        }) => handle_base64(&ctx, text, decode, url_safe),
        Some(Commands::Time { value }) => handle_time(&ctx, value),
        Some(Commands::Regex { pattern, text }) => handle_regex(&ctx, pattern, text),
        Some(Commands::History { clear }) => handle_history(&mut ctx, clear),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        None => handle_paste(&mut ctx, None, false),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = resolve_data_dir()?;
    let config = PasteurConfig::load(&data_dir)?;
    let store = FileStore::new(data_dir.clone());
    let api = PasteurApi::new(store, config, data_dir);

    Ok(AppContext {
        api,
        copy: cli.copy,
    })
}

fn resolve_data_dir() -> Result<PathBuf> {
    if let Ok(home) = std::env::var("PASTEUR_HOME") {
        return Ok(PathBuf::from(home));
    }
    let proj_dirs = ProjectDirs::from("com", "pasteur", "pasteur")
        .ok_or_else(|| PasteurError::Api("Could not determine data dir".to_string()))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

/// An explicit argument wins; otherwise piped stdin; otherwise the
/// clipboard. This is the CLI's paste-event filter: only these inputs ever
/// reach detection.
fn resolve_input(arg: Option<String>) -> Result<String> {
    if let Some(text) = arg {
        return Ok(text);
    }
    let mut stdin = std::io::stdin();
    if !stdin.is_terminal() {
        let mut buffer = String::new();
        stdin.read_to_string(&mut buffer).map_err(PasteurError::Io)?;
        return Ok(buffer);
    }
    read_from_clipboard()
}

fn handle_paste(ctx: &mut AppContext, text: Option<String>, dry_run: bool) -> Result<()> {
    let text = resolve_input(text)?;
    let result = ctx.api.paste(&text)?;
    print_messages(&result.messages);

    let event = match result.detection {
        Some(event) => event,
        None => return Ok(()),
    };

    if dry_run {
        return Ok(());
    }

    if event.is_fallback() {
        // Nothing to convert; show what we got so nothing is dropped.
        println!("{}", event.content);
        return Ok(());
    }

    let routed = run_routed_tool(ctx, &event)?;
    finish(ctx, &routed)
}

fn run_routed_tool(ctx: &AppContext, event: &PasteEvent) -> Result<CmdResult> {
    match event.tool.as_str() {
        "json" => ctx.api.format_json(&event.content, JsonMode::Pretty),
        "jwt" => ctx.api.decode_jwt(&event.content, None),
        "base64" => ctx.api.decode_detected_base64(&event.content),
        "timestamp" => ctx.api.convert_timestamp(&event.content),
        "regex" => ctx.api.test_regex(&event.content, ""),
        other => Err(PasteurError::Api(format!("No such tool: {other}"))),
    }
}

fn handle_analyze(ctx: &AppContext, text: Option<String>) -> Result<()> {
    let text = resolve_input(text)?;
    match ctx.api.analyze(&text) {
        Some(detection) => {
            println!(
                "{} ({}) \u{2192} {}, confidence {:.2}",
                detection.format.display_name().bold(),
                detection.format.key(),
                detection.tool.display_name(),
                detection.confidence
            );
        }
        None => println!("{}", "No recognized format".dimmed()),
    }
    Ok(())
}

fn handle_json(ctx: &AppContext, text: Option<String>, minify: bool) -> Result<()> {
    let text = resolve_input(text)?;
    let mode = if minify {
        JsonMode::Minify
    } else {
        JsonMode::Pretty
    };
    let result = ctx.api.format_json(&text, mode)?;
    finish(ctx, &result)
}

fn handle_jwt(ctx: &AppContext, token: Option<String>, secret: Option<String>) -> Result<()> {
    let token = resolve_input(token)?;
    let result = ctx.api.decode_jwt(&token, secret.as_deref())?;
    finish(ctx, &result)
}

fn handle_base64(
    ctx: &AppContext,
    text: Option<String>,
    decode: bool,
    url_safe: bool,
) -> Result<()> {
    let text = resolve_input(text)?;
    let direction = if decode {
        Direction::Decode
    } else {
        Direction::Encode
    };
    let result = ctx.api.convert_base64(&text, direction, url_safe)?;
    finish(ctx, &result)
}

fn handle_time(ctx: &AppContext, value: Option<String>) -> Result<()> {
    let value = resolve_input(value)?;
    let result = ctx.api.convert_timestamp(&value)?;
    finish(ctx, &result)
}

fn handle_regex(ctx: &AppContext, pattern: String, text: Option<String>) -> Result<()> {
    let text = text.unwrap_or_default();
    let result = ctx.api.test_regex(&pattern, &text)?;
    finish(ctx, &result)
}

fn handle_history(ctx: &mut AppContext, clear: bool) -> Result<()> {
    let result = if clear {
        ctx.api.clear_history()?
    } else {
        ctx.api.history()?
    };
    print_history(&result.history);
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let result = ctx.api.config(action)?;
    if let Some(output) = &result.output {
        println!("{}", output);
    }
    print_messages(&result.messages);
    Ok(())
}

/// Print a command's output and messages, copying the output back to the
/// clipboard when --copy was given.
fn finish(ctx: &AppContext, result: &CmdResult) -> Result<()> {
    if let Some(output) = &result.output {
        println!("{}", output);
        if ctx.copy {
            if let Err(e) = copy_to_clipboard(output) {
                eprintln!("Warning: Failed to copy to clipboard: {}", e);
            }
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;

fn print_history(entries: &[HistoryEntry]) {
    let formatter = timeago::Formatter::new();
    let now = chrono::Utc::now();

    for (i, entry) in entries.iter().enumerate() {
        let idx_str = format!("{}. ", i + 1);
        let route = format!("[{} \u{2192} {}]", entry.format, entry.tool);

        let duration = now.signed_duration_since(entry.detected_at);
        let time_ago = format!(
            "{:>width$}",
            formatter.convert(duration.to_std().unwrap_or_default()),
            width = TIME_WIDTH
        );

        let fixed = idx_str.width() + route.width() + TIME_WIDTH + 2;
        let available = LINE_WIDTH.saturating_sub(fixed);
        let preview = truncate_to_width(&entry.preview, available);
        let padding = available.saturating_sub(preview.width());

        println!(
            "{}{}{} {} {}",
            idx_str,
            preview,
            " ".repeat(padding),
            route.yellow(),
            time_ago.dimmed()
        );
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
