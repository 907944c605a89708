use std::ffi::OsString;

use clap::Parser;

use qrgen::{DEFAULT_QUALITY, DEFAULT_SIZE};

/// Long flags that may also be spelled with a single dash (`-content=...`).
const LONG_FLAGS: &[&str] = &["quality", "content", "output", "size", "help", "version"];

/// Flags that consume the following argument when given without `=`.
const VALUE_FLAGS: &[&str] = &["quality", "content", "output", "size"];

#[derive(Parser, Debug)]
#[command(name = "qrgen", version, about = "Render text into a QR code PNG")]
pub struct CliArgs {
    /// QR code recovery level: low, medium, high, highest
    #[arg(long, default_value = DEFAULT_QUALITY, allow_hyphen_values = true)]
    pub quality: String,

    /// Content to encode in the QR code (required)
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub content: String,

    /// Output filename (default: timestamped .png)
    #[arg(long, allow_hyphen_values = true)]
    pub output: Option<String>,

    /// Image size in pixels
    #[arg(long, default_value_t = DEFAULT_SIZE, allow_negative_numbers = true)]
    pub size: i32,

    /// Arguments after the first non-flag are accepted and ignored
    #[arg(hide = true, num_args = 1.., trailing_var_arg = true)]
    pub rest: Vec<String>,
}

impl CliArgs {
    /// Parse process arguments, accepting single-dash long flags.
    pub fn parse_normalized() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }
}

/// Rewrite single-dash long flags (`-size`, `-output=x`) into their
/// double-dash form. Values following a value-taking flag, everything from
/// the first non-flag argument or `--` on, and unknown single-dash arguments
/// are passed through untouched.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut out = Vec::new();
    let mut iter = args.into_iter();
    if let Some(bin) = iter.next() {
        out.push(bin);
    }

    let mut expect_value = false;
    let mut passthrough = false;
    for arg in iter {
        if passthrough || expect_value {
            expect_value = false;
            out.push(arg);
            continue;
        }

        let Some(text) = arg.to_str() else {
            out.push(arg);
            continue;
        };

        if text == "--" {
            passthrough = true;
            out.push(arg);
            continue;
        }

        let (dashes, rest) = if let Some(rest) = text.strip_prefix("--") {
            ("--", rest)
        } else if let Some(rest) = text.strip_prefix('-') {
            ("-", rest)
        } else {
            passthrough = true;
            out.push(arg);
            continue;
        };

        let (name, has_value) = match rest.split_once('=') {
            Some((name, _)) => (name, true),
            None => (rest, false),
        };

        if !LONG_FLAGS.contains(&name) {
            out.push(arg);
            continue;
        }

        expect_value = !has_value && VALUE_FLAGS.contains(&name);
        if dashes == "-" {
            out.push(OsString::from(format!("-{}", text)));
        } else {
            out.push(arg);
        }
    }
    out
}
