//! Path normalization and quoting helpers shared by every command.
//!
//! Radiance accepts forward slashes on every platform, so all paths are
//! normalized to the forward-slash form in rendered command lines regardless
//! of how the host OS spells them.

use crate::error::{RadianceError, RadianceResult};

/// Normalize a path for use inside a rendered command line.
pub fn normpath(path: impl AsRef<str>) -> String {
    path.as_ref().trim().replace('\\', "/")
}

/// Quote a path when it contains whitespace: single quotes on POSIX, double
/// quotes elsewhere. Paths without whitespace are returned untouched.
///
/// Caller-side helper: command setters normalize but never quote, so a path
/// that may carry whitespace should go through here first.
pub fn quoted_path(path: &str) -> String {
    if path.chars().any(char::is_whitespace) {
        if cfg!(windows) {
            format!("\"{path}\"")
        } else {
            format!("'{path}'")
        }
    } else {
        path.to_string()
    }
}

/// Normalize and quote a path, optionally restricting its extension.
///
/// Caller-side preflight for file arguments. The command setters accept any
/// path and only normalize it; run scene, octree, or matrix paths through
/// here beforehand when an extension whitelist applies.
pub fn path_checker(path: &str, extensions: Option<&[&str]>) -> RadianceResult<String> {
    let normalized = normpath(path);
    if let Some(allowed) = extensions {
        let lowered = normalized.to_lowercase();
        if !allowed
            .iter()
            .any(|ext| lowered.ends_with(&ext.to_lowercase()))
        {
            return Err(RadianceError::invalid_value(
                format!("extension of '{normalized}'"),
                normalized.rsplit('.').next().unwrap_or(""),
                allowed,
            ));
        }
    }
    Ok(quoted_path(&normalized))
}

/// [`path_checker`] over a list of paths.
pub fn path_checker_multiple(
    paths: &[&str],
    extensions: Option<&[&str]>,
) -> RadianceResult<Vec<String>> {
    paths
        .iter()
        .map(|p| path_checker(p, extensions))
        .collect()
}

/// Render a float with at least one decimal place, the way Radiance tools
/// print their defaults: `0` becomes `0.0` while `0.25` stays `0.25`.
pub fn fmt_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

/// Collapse every whitespace run to a single space and trim the ends.
pub(crate) fn squash(line: &str) -> String {
    line.split_whitespace().collect::<Vec<_>>().join(" ")
}
