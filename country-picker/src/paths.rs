//! Where the binary keeps its logs.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

const LATEST_LOG: &str = "latest.log";

/// Archived logs kept besides the current one.
const KEEP_ARCHIVED: usize = 10;

fn cache_dir() -> Option<PathBuf> {
    ProjectDirs::from("dev", "country-picker", "country-picker")
        .map(|dirs| dirs.cache_dir().to_path_buf())
}

/// The log file for this run, in the user cache directory when one can be
/// created (`~/.cache/country-picker` on Linux), else the working directory.
pub fn log_file() -> PathBuf {
    cache_dir()
        .filter(|dir| fs::create_dir_all(dir).is_ok())
        .map(|dir| dir.join(LATEST_LOG))
        .unwrap_or_else(|| PathBuf::from("country-picker.log"))
}

/// Archive the previous run's log under a timestamp and prune old archives.
pub fn rotate_logs() {
    let Some(dir) = cache_dir() else { return };

    let latest = dir.join(LATEST_LOG);
    if latest.exists() {
        let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let _ = fs::rename(&latest, dir.join(format!("{stamp}.log")));
    }

    prune_archives(&dir);
}

fn prune_archives(dir: &Path) {
    let Ok(entries) = fs::read_dir(dir) else { return };

    let mut archived: Vec<_> = entries
        .filter_map(Result::ok)
        .filter(|entry| {
            let name = entry.file_name();
            let name = name.to_string_lossy();
            name.ends_with(".log") && name != LATEST_LOG
        })
        .collect();

    if archived.len() <= KEEP_ARCHIVED {
        return;
    }

    archived.sort_by_key(|entry| entry.metadata().and_then(|meta| meta.modified()).ok());
    let excess = archived.len() - KEEP_ARCHIVED;
    for entry in &archived[..excess] {
        let _ = fs::remove_file(entry.path());
    }
}
