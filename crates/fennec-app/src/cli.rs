use std::path::{Path, PathBuf};

use clap::Parser;

/// Fennec: a single-surface embedded browser shell.
#[derive(Parser, Debug)]
#[command(name = "fennec", version, about)]
pub struct Args {
    /// Open this URI in the running surface instead of the last visited page.
    #[arg(long, value_name = "URI")]
    pub remote: Option<String>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Preference file path override (holds the last visited URI).
    #[arg(long)]
    pub prefs: Option<PathBuf>,

    /// Log filter override (e.g. `fennec=debug`).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}

/// Turn a loosely typed command-line location into a loadable URI.
///
/// Returns `None` for blank input.
pub fn fixup_uri(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if has_scheme(trimmed) {
        return Some(trimmed.to_string());
    }

    if Path::new(trimmed).is_absolute() {
        return Some(format!("file://{trimmed}"));
    }

    Some(format!("http://{trimmed}"))
}

/// `scheme:` per RFC 3986: a letter, then letters, digits, `+`, `-` or `.`.
/// A `host:port` pair is not a scheme, so a digit right after the colon
/// rules it out.
fn has_scheme(s: &str) -> bool {
    let Some((scheme, rest)) = s.split_once(':') else {
        return false;
    };
    let mut chars = scheme.chars();
    let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    valid && !rest.starts_with(|c: char| c.is_ascii_digit())
}
