//! Request lifecycle tracking.

use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Mark recorded once the shell has been flushed.
pub const MARK_SHELL_SENT: &str = "shell_sent";
/// Mark recorded just before the upstream fetch is sent.
pub const MARK_FETCH_START: &str = "fetch_start";
/// Mark recorded when the upstream fetch resolves.
pub const MARK_FETCH_DONE: &str = "fetch_done";

/// Lifecycle phases for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecyclePhase {
    /// Request received, processing started.
    Start,
    /// Shell HTML has been flushed to client.
    ShellSent,
    /// A named section has been sent.
    SectionSent(String),
    /// Request completed successfully.
    Completion,
}

impl LifecyclePhase {
    pub fn as_str(&self) -> &str {
        match self {
            LifecyclePhase::Start => "start",
            LifecyclePhase::ShellSent => "shell_sent",
            LifecyclePhase::SectionSent(name) => name,
            LifecyclePhase::Completion => "completion",
        }
    }
}

/// Timing context for observability.
#[derive(Debug, Clone)]
pub struct TimingContext {
    start: Instant,
    marks: HashMap<String, Instant>,
}

impl TimingContext {
    /// Create a new timing context.
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            marks: HashMap::new(),
        }
    }

    /// Record a timing mark.
    pub fn mark(&mut self, name: &str) {
        self.marks.insert(name.to_string(), Instant::now());
    }

    pub fn mark_section_start(&mut self, section: &str) {
        self.mark(&format!("section_{}_start", section));
    }

    pub fn mark_section_sent(&mut self, section: &str) {
        self.mark(&format!("section_{}_sent", section));
    }

    /// Time from request start to a named mark.
    pub fn since_start(&self, name: &str) -> Option<Duration> {
        self.marks.get(name).map(|t| t.duration_since(self.start))
    }

    /// Time between two marks. `None` if either is missing or they are out of order.
    pub fn between(&self, from: &str, to: &str) -> Option<Duration> {
        let from = self.marks.get(from)?;
        let to = self.marks.get(to)?;
        to.checked_duration_since(*from)
    }

    /// Get elapsed time since start.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Elapsed milliseconds, for log fields.
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed().as_millis() as u64
    }

    /// Get time to shell flush.
    pub fn time_to_shell(&self) -> Option<Duration> {
        self.since_start(MARK_SHELL_SENT)
    }

    /// Get time to first section.
    pub fn time_to_first_section(&self) -> Option<Duration> {
        self.marks
            .iter()
            .filter(|(k, _)| k.starts_with("section_") && k.ends_with("_sent"))
            .map(|(_, t)| t.duration_since(self.start))
            .min()
    }

    /// Get timing for a specific section.
    pub fn section_timing(&self, section: &str) -> Option<SectionTiming> {
        let start = self.marks.get(&format!("section_{}_start", section))?;
        let sent = self.marks.get(&format!("section_{}_sent", section))?;

        Some(SectionTiming {
            name: section.to_string(),
            start: start.duration_since(self.start),
            sent: sent.duration_since(self.start),
            duration: sent.duration_since(*start),
        })
    }
}

impl Default for TimingContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Timing information for a section.
#[derive(Debug, Clone)]
pub struct SectionTiming {
    pub name: String,
    /// Time from request start to section start.
    pub start: Duration,
    /// Time from request start to section sent.
    pub sent: Duration,
    /// Time spent writing the section.
    pub duration: Duration,
}
