use clap::{Parser, Subcommand};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_HASH"),
    " ",
    env!("GIT_COMMIT_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "pasteur")]
#[command(version, long_version = LONG_VERSION)]
#[command(about = "Smart-paste toolbox: detects what you copied and runs the right converter", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Copy the converted output back to the clipboard
    #[arg(short, long, global = true)]
    pub copy: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Detect the format of pasted text and run the matching tool
    #[command(alias = "p")]
    Paste {
        /// Text to inspect (reads the clipboard when omitted)
        text: Option<String>,

        /// Report the routing decision without running the routed tool
        #[arg(long)]
        dry_run: bool,
    },

    /// Report which tool some text would route to, without side effects
    #[command(alias = "a")]
    Analyze {
        /// Text to inspect (reads stdin or the clipboard when omitted)
        text: Option<String>,
    },

    /// Pretty-print or minify JSON
    Json {
        text: Option<String>,

        /// Emit compact JSON instead of pretty-printing
        #[arg(short, long)]
        minify: bool,
    },

    /// Decode a JWT, optionally verifying its HMAC signature
    Jwt {
        token: Option<String>,

        /// Shared secret for HS256/HS384/HS512 verification
        #[arg(short, long)]
        secret: Option<String>,
    },

    /// Encode or decode Base64
    #[command(alias = "b64")]
    Base64 {
        text: Option<String>,

        /// Decode instead of encode
        #[arg(short, long)]
        decode: bool,

        /// Use the URL-safe alphabet
        #[arg(short, long)]
        url_safe: bool,
    },

    /// Convert between epoch timestamps and RFC 3339 dates
    #[command(alias = "ts")]
    Time {
        /// Epoch digits, a date string, or "now"
        value: Option<String>,
    },

    /// Test a /pattern/flags literal (or bare pattern) against sample text
    #[command(alias = "re")]
    Regex {
        pattern: String,

        /// Sample text to match against
        text: Option<String>,
    },

    /// Show recent smart-paste detections
    #[command(alias = "hist")]
    History {
        /// Forget all recorded detections
        #[arg(long)]
        clear: bool,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., history-limit)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
