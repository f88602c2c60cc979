//! Output and logging setup for the command line tool
//!
//! Diagnostics go through the `log` crate (backed by `env_logger`), while
//! command results go through [`Logger`], which prints them and can keep a
//! transcript file.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

use log::LevelFilter;

/// Sink for command results
pub struct Logger {
    /// Optional transcript file
    file: Mutex<Option<File>>,
}

impl Logger {
    /// Creates a logger that only prints to stdout
    pub fn stdout() -> Self {
        Logger {
            file: Mutex::new(None),
        }
    }

    /// Creates a logger that prints to stdout and writes a transcript to `log_file`
    ///
    /// # Returns
    ///
    /// A new Logger instance or an error if the file cannot be created
    pub fn new(log_file: &str) -> io::Result<Self> {
        let file = File::create(Path::new(log_file))?;
        Ok(Logger {
            file: Mutex::new(Some(file)),
        })
    }

    /// Emits one line of command output
    pub fn log(&self, message: &str) -> io::Result<()> {
        println!("{}", message);

        let mut guard = self
            .file
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "transcript lock poisoned"))?;
        if let Some(file) = guard.as_mut() {
            writeln!(file, "{}", message)?;
            file.flush()?;
        }
        Ok(())
    }

    /// Initializes `env_logger` for diagnostics
    ///
    /// `RUST_LOG` takes precedence over the level picked from `verbose`.
    pub fn init_global_logger(verbose: bool) {
        let level = if verbose { LevelFilter::Debug } else { LevelFilter::Warn };

        let result = env_logger::Builder::new()
            .filter_level(level)
            .parse_default_env()
            .format_timestamp(None)
            .try_init();

        if result.is_err() {
            eprintln!("Warning: Global logger was already initialized");
        }
    }
}
