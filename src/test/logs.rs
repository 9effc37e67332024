use std::io;
use std::sync::{Arc, Mutex};

/// Everything a `fmt` subscriber wrote, shared with the writer it hands out.
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runs `f` with a trace level subscriber installed on this thread and returns the formatted
/// log lines it produced.
pub(crate) fn capture_trace(f: impl FnOnce()) -> String {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, f);

    let bytes = captured.0.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap()
}
