use std::ffi::OsStr;
use std::io;
use std::sync::{Arc, Mutex};

use sequence::sink::LineSink;

/// One relayed line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedLine {
    pub label: String,
    pub line: String,
}

/// Line sink that keeps every line in memory. Clones share storage, so a
/// clone can be boxed into a runner while the test keeps the other.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    lines: Arc<Mutex<Vec<RecordedLine>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<RecordedLine> {
        self.lines.lock().unwrap().clone()
    }
}

impl LineSink for RecordingSink {
    fn write_line(&mut self, label: &OsStr, line: &[u8]) -> io::Result<()> {
        self.lines.lock().unwrap().push(RecordedLine {
            label: label.to_string_lossy().into_owned(),
            line: String::from_utf8_lossy(line).into_owned(),
        });
        Ok(())
    }
}
