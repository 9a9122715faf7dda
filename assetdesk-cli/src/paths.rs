//! Platform-specific directory paths.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "assetdesk";
const APPLICATION: &str = "assetdesk";

/// Maximum number of old log files to keep.
const MAX_OLD_LOGS: usize = 10;

const LATEST_LOG: &str = "latest.log";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Cache directory, home of the log files.
///
/// - Linux: `$XDG_CACHE_HOME/assetdesk` or `~/.cache/assetdesk`
/// - macOS: `~/Library/Caches/dev.assetdesk.assetdesk`
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Config directory.
///
/// - Linux: `$XDG_CONFIG_HOME/assetdesk` or `~/.config/assetdesk`
/// - macOS: `~/Library/Application Support/dev.assetdesk.assetdesk`
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Default view config file.
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.json"))
}

pub fn log_file() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join(LATEST_LOG))
}

/// Archive `latest.log` under a timestamped name and prune old logs.
///
/// Call at startup, before the new log file is created.
pub fn rotate_logs() {
    let Some(cache) = cache_dir() else { return };
    rotate_logs_in(&cache);
}

fn rotate_logs_in(cache: &Path) {
    let latest = cache.join(LATEST_LOG);

    if latest.exists() {
        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let archived = cache.join(format!("{timestamp}.log"));
        let _ = fs::rename(&latest, &archived);
    }

    cleanup_old_logs(cache);
}

/// Remove archived logs beyond the newest `MAX_OLD_LOGS`.
fn cleanup_old_logs(cache: &Path) {
    let Ok(entries) = fs::read_dir(cache) else { return };

    let mut logs: Vec<_> = entries
        .filter_map(|e| e.ok())
        .filter(|e| {
            let name = e.file_name();
            let name = name.to_string_lossy();
            name.ends_with(".log") && name != LATEST_LOG
        })
        .collect();

    // Oldest first
    logs.sort_by_key(|e| e.metadata().and_then(|m| m.modified()).ok());

    if logs.len() > MAX_OLD_LOGS {
        for entry in logs.iter().take(logs.len() - MAX_OLD_LOGS) {
            let _ = fs::remove_file(entry.path());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("assetdesk-{name}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_rotate_archives_latest() {
        let dir = scratch_dir("rotate");
        fs::write(dir.join(LATEST_LOG), "previous run").unwrap();

        rotate_logs_in(&dir);

        assert!(!dir.join(LATEST_LOG).exists());
        let archived = fs::read_dir(&dir).unwrap().count();
        assert_eq!(archived, 1);
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_cleanup_keeps_newest() {
        let dir = scratch_dir("cleanup");
        for i in 0..(MAX_OLD_LOGS + 3) {
            fs::write(dir.join(format!("2026010{i:02}.log")), "").unwrap();
        }
        fs::write(dir.join("notes.txt"), "").unwrap();

        cleanup_old_logs(&dir);

        let logs = fs::read_dir(&dir)
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().ends_with(".log"))
            .count();
        assert_eq!(logs, MAX_OLD_LOGS);
        assert!(dir.join("notes.txt").exists());
        fs::remove_dir_all(&dir).unwrap();
    }
}
