use std::sync::{Arc, Mutex};

use crate::port::{ProgressEvent, ProgressSink};

/// Thread-safe event collector for progress assertions in tests.
#[derive(Clone, Default)]
pub struct RecordingProgress {
    events: Arc<Mutex<Vec<ProgressEvent>>>,
}

impl RecordingProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ProgressEvent> {
        self.events.lock().expect("lock progress events").clone()
    }

    pub fn len(&self) -> usize {
        self.events.lock().expect("lock progress events").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ProgressSink for RecordingProgress {
    fn emit(&self, event: ProgressEvent) {
        self.events
            .lock()
            .expect("lock progress events")
            .push(event);
    }
}
