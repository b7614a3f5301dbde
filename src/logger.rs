// Debug log for mps-check runs, kept in a file so stdout holds only the tensors
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use once_cell::sync::Lazy;

use crate::config::logging;

static LOG_FILE: Lazy<Mutex<Option<File>>> = Lazy::new(|| {
    if std::env::var(logging::ENABLE_VAR).is_ok() {
        let path = std::env::var(logging::FILE_VAR)
            .unwrap_or_else(|_| logging::DEFAULT_FILE.to_string());

        Mutex::new(open_log(path).ok())
    } else {
        Mutex::new(None)
    }
});

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        $crate::logger::write_log(&format!($($arg)*))
    };
}

pub fn open_log(path: impl AsRef<Path>) -> std::io::Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
}

pub fn format_line(msg: &str) -> String {
    let timestamp = chrono::Local::now().format("%H:%M:%S%.3f");
    format!("[{}] {}", timestamp, msg)
}

pub fn write_line(file: &mut File, msg: &str) {
    writeln!(file, "{}", format_line(msg)).ok();
    file.flush().ok();
}

pub fn write_log(msg: &str) {
    if let Ok(mut guard) = LOG_FILE.lock() {
        if let Some(ref mut file) = *guard {
            write_line(file, msg);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_carry_a_millisecond_timestamp() {
        let line = format_line("probe started");
        assert!(line.starts_with('['));
        assert!(line.ends_with("] probe started"));
        // [HH:MM:SS.mmm]
        assert_eq!(line.find(']'), Some(13));
    }

    #[test]
    fn appends_to_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mps-check.log");

        let mut file = open_log(&path).unwrap();
        write_line(&mut file, "first");
        drop(file);

        let mut file = open_log(&path).unwrap();
        write_line(&mut file, "second");

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("first"));
        assert!(lines[1].ends_with("second"));
    }
}
