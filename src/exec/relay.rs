// src/exec/relay.rs

//! Draining a child's stderr pipe into a [`LineSink`].

use std::ffi::OsStr;
use std::io;

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tracing::warn;

use crate::sink::LineSink;

/// Read `reader` to end-of-stream and forward every line to `sink`.
///
/// Lines are split on `\n`, which is not forwarded. A trailing segment with
/// no `\n` is still forwarded once the stream ends. A failing sink does not
/// stop the drain; the child must never block on a full pipe.
///
/// Returns the number of lines forwarded. `reader` is consumed so the read
/// end is closed when this returns, even on error.
pub async fn drain_lines<R>(reader: R, label: &OsStr, sink: &mut dyn LineSink) -> io::Result<usize>
where
    R: AsyncRead + Unpin,
{
    let mut reader = BufReader::new(reader);
    let mut buf = Vec::with_capacity(256);
    let mut forwarded = 0;

    loop {
        buf.clear();
        let read = reader.read_until(b'\n', &mut buf).await?;
        if read == 0 {
            break;
        }

        let line = buf.strip_suffix(b"\n").unwrap_or(&buf[..]);
        if let Err(err) = sink.write_line(label, line) {
            warn!(label = ?label, error = %err, "failed to relay stderr line");
        }
        forwarded += 1;
    }

    Ok(forwarded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct VecSink {
        lines: Vec<(String, String)>,
    }

    impl LineSink for VecSink {
        fn write_line(&mut self, label: &OsStr, line: &[u8]) -> io::Result<()> {
            self.lines.push((
                label.to_string_lossy().into_owned(),
                String::from_utf8_lossy(line).into_owned(),
            ));
            Ok(())
        }
    }

    struct FailingSink;

    impl LineSink for FailingSink {
        fn write_line(&mut self, _label: &OsStr, _line: &[u8]) -> io::Result<()> {
            Err(io::Error::other("sink down"))
        }
    }

    #[tokio::test]
    async fn partial_last_line_is_flushed() {
        let mut sink = VecSink::default();
        let count = drain_lines(&b"line1\nline2\npartial"[..], OsStr::new("/d/10-a"), &mut sink)
            .await
            .unwrap();

        assert_eq!(count, 3);
        let lines: Vec<&str> = sink.lines.iter().map(|(_, l)| l.as_str()).collect();
        assert_eq!(lines, vec!["line1", "line2", "partial"]);
        assert!(sink.lines.iter().all(|(label, _)| label == "/d/10-a"));
    }

    #[tokio::test]
    async fn empty_lines_are_kept_and_no_phantom_line_at_eof() {
        let mut sink = VecSink::default();
        let count = drain_lines(&b"a\n\nb\n"[..], OsStr::new("x"), &mut sink)
            .await
            .unwrap();

        assert_eq!(count, 3);
        let lines: Vec<&str> = sink.lines.iter().map(|(_, l)| l.as_str()).collect();
        assert_eq!(lines, vec!["a", "", "b"]);
    }

    #[tokio::test]
    async fn empty_stream_forwards_nothing() {
        let mut sink = VecSink::default();
        let count = drain_lines(&b""[..], OsStr::new("x"), &mut sink).await.unwrap();
        assert_eq!(count, 0);
        assert!(sink.lines.is_empty());
    }

    #[tokio::test]
    async fn sink_failures_do_not_stop_the_drain() {
        let count = drain_lines(&b"one\ntwo\n"[..], OsStr::new("x"), &mut FailingSink)
            .await
            .unwrap();
        assert_eq!(count, 2);
    }
}
