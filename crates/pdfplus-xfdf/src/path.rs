//! Path forms accepted in descriptors, and their normalization.
//!
//! Backslash and forward slash are interchangeable everywhere. Drive letters
//! keep their case.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Result, XfdfError};

/// `/G/rest` or `\G\rest`.
static ROOTED_DRIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[/\\]([A-Za-z])[/\\]").expect("Invalid rooted drive regex"));

/// `G:` at the start of a path.
static BARE_DRIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]:").expect("Invalid bare drive regex"));

/// Scheme prefix of resolved external paths.
pub const FILE_URL_PREFIX: &str = "file://";

/// Syntactic form of a descriptor `href`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathForm<'a> {
    /// `/G/docs/file.pdf`: drive letter as the first segment.
    RootedDrive {
        /// Drive letter as written.
        drive: char,
        /// Everything after `/<letter>/`.
        rest: &'a str,
    },
    /// `G:/docs/file.pdf`.
    BareDrive,
    /// `./a.pdf`, `../a.pdf`, or any path without a colon.
    Relative,
}

/// Classify `raw`, testing rooted drive, bare drive and relative in that order.
///
/// A path that starts with a separator but is not `/<letter>/` is rejected
/// instead of being treated as relative.
pub fn classify(raw: &str) -> Result<PathForm<'_>> {
    if raw.starts_with(['/', '\\']) {
        let captures = ROOTED_DRIVE
            .captures(raw)
            .ok_or_else(|| unsupported(raw))?;
        let whole = captures.get(0).ok_or_else(|| unsupported(raw))?;
        let drive = captures[1].chars().next().ok_or_else(|| unsupported(raw))?;
        return Ok(PathForm::RootedDrive {
            drive,
            rest: &raw[whole.end()..],
        });
    }

    if BARE_DRIVE.is_match(raw) {
        return Ok(PathForm::BareDrive);
    }

    let explicit_relative = ["./", "../", ".\\", "..\\"]
        .iter()
        .any(|prefix| raw.starts_with(prefix));
    if explicit_relative || !raw.contains(':') {
        return Ok(PathForm::Relative);
    }

    Err(unsupported(raw))
}

fn unsupported(raw: &str) -> XfdfError {
    XfdfError::UnsupportedPathFormat {
        raw: raw.to_string(),
    }
}

/// Normalize a path: unify separators, drop empty and `.` segments, and fold
/// `..` into its parent.
///
/// A root (`/`, `X:/` or a UNC `//server/`) is kept, and `..` never climbs
/// above it. Leading `..` segments of a rootless path are kept.
pub fn normalize(path: &str) -> String {
    let (root, body) = split_root(path);
    let mut segments: Vec<&str> = Vec::new();

    for segment in body.split(['/', '\\']) {
        match segment {
            "" | "." => {}
            ".." => match segments.last() {
                Some(&last) if last != ".." => {
                    segments.pop();
                }
                _ if root.is_some() => {}
                _ => segments.push(".."),
            },
            other => segments.push(other),
        }
    }

    let mut normalized = root.unwrap_or_default();
    normalized.push_str(&segments.join("/"));
    normalized
}

fn split_root(path: &str) -> (Option<String>, &str) {
    if BARE_DRIVE.is_match(path) {
        // BARE_DRIVE guarantees two ASCII bytes
        (Some(format!("{}/", &path[..2])), &path[2..])
    } else if let Some(server) = unc_server(path) {
        (Some(format!("//{server}/")), &path[2 + server.len()..])
    } else if path.starts_with(['/', '\\']) {
        (Some("/".to_string()), path)
    } else {
        (None, path)
    }
}

/// Server name of a `\\server\share` or `//server/share` path.
fn unc_server(path: &str) -> Option<&str> {
    let rest = path
        .strip_prefix(['/', '\\'])?
        .strip_prefix(['/', '\\'])?;
    let server = rest.split(['/', '\\']).next()?;
    (!matches!(server, "" | "." | "..")).then_some(server)
}

/// Join segments with `/` and normalize the result.
pub fn join(parts: &[&str]) -> String {
    normalize(&parts.join("/"))
}

/// `file://` URL for a normalized absolute path.
///
/// `G:/a.pdf` becomes `file:///G:/a.pdf`, `/vault/a.pdf` becomes
/// `file:///vault/a.pdf`.
pub fn to_file_url(path: &str) -> String {
    if path.starts_with('/') {
        format!("{FILE_URL_PREFIX}{path}")
    } else {
        format!("{FILE_URL_PREFIX}/{path}")
    }
}

/// Filesystem path of a `file://` URL produced by [`to_file_url`].
pub fn file_url_to_path(url: &str) -> Option<&str> {
    let rest = url.strip_prefix(FILE_URL_PREFIX)?;
    let without_slash = rest.strip_prefix('/').unwrap_or(rest);
    if BARE_DRIVE.is_match(without_slash) {
        Some(without_slash)
    } else {
        Some(rest)
    }
}

/// Host resource locator for a `file://` URL: `prefix` followed by the URL
/// content after `file:///`, joined by exactly one slash.
pub fn to_resource_locator(prefix: &str, url: &str) -> Option<String> {
    let rest = url.strip_prefix(FILE_URL_PREFIX)?;
    Some(format!(
        "{}/{}",
        prefix.trim_end_matches('/'),
        rest.trim_start_matches('/')
    ))
}
