//! Shared handler state.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::lint::Linter;

/// State shared by all handlers. Cheap to clone.
#[derive(Debug, Clone)]
pub struct AppState {
    pub started_at: Instant,
    pub linter: Arc<Linter>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            started_at: Instant::now(),
            linter: Arc::new(Linter::new()),
        }
    }

    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
