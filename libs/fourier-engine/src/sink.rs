use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::EngineError;

/// Line-oriented output destination: console echo always, plus an
/// optional file. The file is created at construction, flushed after
/// every line, and closed on every exit path (ownership). Lines already
/// flushed survive a failed run — nothing is rolled back.
#[derive(Debug)]
pub struct Sink {
    file: Option<File>,
}

impl Sink {
    /// Console-only sink.
    pub fn console() -> Self {
        Self { file: None }
    }

    /// Console plus a file created at `path`. An existing file is
    /// truncated.
    pub fn with_file(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let path = path.as_ref();
        let file = File::create(path)
            .map_err(|e| EngineError::Sink(format!("create {}: {e}", path.display())))?;
        Ok(Self { file: Some(file) })
    }

    pub fn write_line(&mut self, line: &str) -> Result<(), EngineError> {
        println!("{line}");
        if let Some(f) = &mut self.file {
            writeln!(f, "{line}").map_err(|e| EngineError::Sink(format!("write: {e}")))?;
            f.flush().map_err(|e| EngineError::Sink(format!("flush: {e}")))?;
        }
        Ok(())
    }
}
