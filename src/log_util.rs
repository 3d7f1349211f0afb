use chrono::Utc;
use std::{
    env,
    fs::OpenOptions,
    io::{self, Write},
    path::PathBuf,
};

const LOG_FILENAME: &str = "termquiz-debug.log";

/// Append a timestamped line to the shared debug log. Errors are reported to stderr only.
pub fn log_debug(message: &str) {
    if let Err(err) = append_line(message) {
        eprintln!("[termquiz::log_util] failed to write debug log: {}", err);
    }
}

fn append_line(message: &str) -> io::Result<()> {
    let path = resolve_log_path();
    let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
    writeln!(file, "[{}] {}", Utc::now().to_rfc3339(), message)?;
    Ok(())
}

fn resolve_log_path() -> PathBuf {
    let dir = env::var_os("TERMQUIZ_LOG_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(env::temp_dir);
    dir.join(LOG_FILENAME)
}
