//! Path handling for the Zellij plugin sandbox.
//!
//! Inside the sandbox the host filesystem is mounted under `/host`, which is
//! usually the user's home directory. User-facing paths (`~/...`) are mapped
//! onto it before any file is opened, and mapped back for display.

use std::path::PathBuf;

/// Returns the plugin's data directory, where the log file lives.
///
/// # Examples
///
/// ```
/// use lorekeeper::infrastructure::get_data_dir;
///
/// assert_eq!(get_data_dir().to_str(), Some("/host/.local/share/zellij/lorekeeper"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("lorekeeper")
}

/// Maps `~` onto the sandbox `/host` mount.
///
/// # Examples
///
/// ```
/// use lorekeeper::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/srd/catalog.json"), "/host/srd/catalog.json");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/data/catalog.json"), "/data/catalog.json");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}

/// Rewrites sandbox paths embedded in `text` back into the `~` form the user
/// configured, for messages shown in the UI.
///
/// Only `/host/` at the start of a path is rewritten; `/srv/host/x` is left
/// alone.
///
/// # Examples
///
/// ```
/// use lorekeeper::infrastructure::strip_host_prefix;
///
/// assert_eq!(strip_host_prefix("/host/srd/catalog.json"), "~/srd/catalog.json");
/// assert_eq!(
///     strip_host_prefix("IO error reading /host/a.json"),
///     "IO error reading ~/a.json"
/// );
/// assert_eq!(strip_host_prefix("/data/catalog.json"), "/data/catalog.json");
/// ```
#[must_use]
pub fn strip_host_prefix(text: &str) -> String {
    const PREFIX: &str = "/host/";

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find(PREFIX) {
        let starts_path = rest[..pos]
            .chars()
            .next_back()
            .map_or(out.is_empty() || !out.ends_with(is_path_char), |c| !is_path_char(c));
        out.push_str(&rest[..pos]);
        out.push_str(if starts_path { "~/" } else { PREFIX });
        rest = &rest[pos + PREFIX.len()..];
    }
    out.push_str(rest);
    out
}

fn is_path_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '/' | '.' | '_' | '-' | '~')
}

/// Resolves configured catalog paths to sandbox paths.
#[must_use]
pub fn resolve_catalog_paths(paths: &[String]) -> Vec<PathBuf> {
    paths.iter().map(|p| PathBuf::from(expand_tilde(p))).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_prefix_needs_a_path_boundary() {
        assert_eq!(strip_host_prefix("/hostile/file"), "/hostile/file");
        assert_eq!(strip_host_prefix("/srv/host/file"), "/srv/host/file");
        assert_eq!(strip_host_prefix("a: /host/x, /host/y"), "a: ~/x, ~/y");
    }

    #[test]
    fn resolves_every_configured_path() {
        let resolved = resolve_catalog_paths(&["~/a.json".to_string(), "/b.json".to_string()]);
        assert_eq!(resolved, vec![PathBuf::from("/host/a.json"), PathBuf::from("/b.json")]);
    }
}
