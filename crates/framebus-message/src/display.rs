use std::sync::{Arc, Mutex};

/// Injected UI notifier, called synchronously on reported failure paths.
///
/// The helper never inspects the display's behavior; it is an opaque
/// collaborator owned by the embedding application.
pub trait ErrorDisplay {
    fn show_error(&self, message: &str);
}

/// Shared handle to an error display.
pub type ErrorDisplayHandle = Arc<dyn ErrorDisplay + Send + Sync>;

/// Display that swallows notifications, for embedders without a UI surface.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopDisplay;

impl ErrorDisplay for NoopDisplay {
    fn show_error(&self, _message: &str) {}
}

/// Display that records every notification, for tests and demos.
#[derive(Debug, Default)]
pub struct RecordingDisplay {
    messages: Mutex<Vec<String>>,
}

impl RecordingDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// All notifications shown so far.
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().expect("display lock poisoned").clone()
    }

    /// Number of notifications shown so far.
    pub fn count(&self) -> usize {
        self.messages.lock().expect("display lock poisoned").len()
    }
}

impl ErrorDisplay for RecordingDisplay {
    fn show_error(&self, message: &str) {
        self.messages
            .lock()
            .expect("display lock poisoned")
            .push(message.to_string());
    }
}
