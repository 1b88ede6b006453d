/// The scheduler's sole output: show or clear the on-screen title.
///
/// Implementations must not block: the real `dispatcher` crate's implementation enqueues the
/// write and returns immediately, dropping it silently if the downstream socket isn't writable
/// (the next state change retries).
pub trait TitleSink: Send + Sync {
    fn send_title(&self, lines: &[String]);
    fn clear_title(&self);
}

/// A `TitleSink` that records every call, for scheduler tests.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub calls: std::sync::Mutex<Vec<SinkCall>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SinkCall {
    SendTitle(Vec<String>),
    ClearTitle,
}

impl TitleSink for RecordingSink {
    fn send_title(&self, lines: &[String]) {
        self.calls.lock().unwrap().push(SinkCall::SendTitle(lines.to_vec()));
    }

    fn clear_title(&self) {
        self.calls.lock().unwrap().push(SinkCall::ClearTitle);
    }
}
