use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LOG_NAME: &str = "pd.log";

/// Initialize the logging system
///
/// Report lines are written by the reporter, not through tracing, so the
/// default level stays at `warn` to keep stderr readable.
///
/// # Arguments
/// * `verbose` - Enable verbose (DEBUG) logging
/// * `log_file` - Optional path to log file. If None, logs only to stderr
pub fn init(verbose: bool, log_file: Option<PathBuf>) {
    // RUST_LOG wins over --verbose when it parses.
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer);

    if let Some(log_path) = log_file {
        let (dir, name) = split_log_path(&log_path);
        // A missing directory only costs the file layer, never the run.
        let _ = std::fs::create_dir_all(&dir);

        // Daily rotation appends a date suffix to `name`.
        let file_appender = tracing_appender::rolling::daily(dir, name);
        let file_layer = fmt::layer()
            .with_writer(file_appender)
            .with_ansi(false)
            .json();

        subscriber.with(file_layer).init();
    } else {
        subscriber.init();
    }
}

fn default_directive(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "warn" };
    format!("pd_cli={level}")
}

/// Splits a `--log-file` path into the appender's directory and file prefix.
fn split_log_path(path: &Path) -> (PathBuf, OsString) {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| OsString::from(DEFAULT_LOG_NAME));
    (dir, name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(true), "pd_cli=debug");
        assert_eq!(default_directive(false), "pd_cli=warn");
    }

    #[test]
    fn test_split_log_path_with_directory() {
        let (dir, name) = split_log_path(Path::new("/var/log/pd/run.log"));
        assert_eq!(dir, PathBuf::from("/var/log/pd"));
        assert_eq!(name, OsString::from("run.log"));
    }

    #[test]
    fn test_split_bare_file_name_uses_current_dir() {
        let (dir, name) = split_log_path(Path::new("run.log"));
        assert_eq!(dir, PathBuf::from("."));
        assert_eq!(name, OsString::from("run.log"));
    }

    #[test]
    fn test_split_without_file_name_falls_back() {
        let (_, name) = split_log_path(Path::new("/"));
        assert_eq!(name, OsString::from(DEFAULT_LOG_NAME));
    }
}
