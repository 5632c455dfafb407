//! Platform-controlled streaming sink.

use std::fmt::Display;

use edge_core::{LifecyclePhase, TimingContext, WorkloadError, MARK_SHELL_SENT};
use futures::{Sink, SinkExt};

/// State of the streaming sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SinkState {
    /// Initial state, shell not yet sent.
    Initial,
    /// Shell has been sent, sections can be streamed.
    ShellSent,
    /// Closing HTML has been sent.
    Completed,
}

/// Streaming sink that enforces the shell-first pattern.
///
/// Generic over any `Sink<Vec<u8>>`, including Spin's `OutgoingBody`.
pub struct StreamingSink<S, E>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    inner: S,
    state: SinkState,
    timing: TimingContext,
    sections_sent: Vec<String>,
}

impl<S, E> StreamingSink<S, E>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    /// Create a new streaming sink.
    pub fn new(sink: S, timing: TimingContext) -> Self {
        Self {
            inner: sink,
            state: SinkState::Initial,
            timing,
            sections_sent: Vec::new(),
        }
    }

    /// Send the shell HTML. Must be called before any sections.
    pub async fn send_shell(&mut self, html: &str) -> Result<(), WorkloadError> {
        if self.state != SinkState::Initial {
            return Err(WorkloadError::StreamError(
                "Shell already sent or sink completed".to_string(),
            ));
        }

        self.write(html).await?;
        self.timing.mark(MARK_SHELL_SENT);
        self.state = SinkState::ShellSent;

        Ok(())
    }

    /// Send a named section. Shell must be sent first.
    pub async fn send_section(&mut self, name: &str, html: &str) -> Result<(), WorkloadError> {
        self.ensure_open()?;

        self.timing.mark_section_start(name);
        self.write(html).await?;
        self.timing.mark_section_sent(name);
        self.sections_sent.push(name.to_string());

        Ok(())
    }

    /// Send the closing shell HTML and complete the response.
    pub async fn send_closing(&mut self, html: &str) -> Result<(), WorkloadError> {
        self.ensure_open()?;

        self.write(html).await?;
        self.complete();

        Ok(())
    }

    /// Mark the response as complete. Later sends fail.
    pub fn complete(&mut self) {
        self.state = SinkState::Completed;
        self.timing.mark("complete");
    }

    /// Get the list of sections sent.
    pub fn sections_sent(&self) -> &[String] {
        &self.sections_sent
    }

    /// Get the current lifecycle phase.
    pub fn phase(&self) -> LifecyclePhase {
        match (self.state, self.sections_sent.last()) {
            (SinkState::Initial, _) => LifecyclePhase::Start,
            (SinkState::ShellSent, None) => LifecyclePhase::ShellSent,
            (SinkState::ShellSent, Some(last)) => LifecyclePhase::SectionSent(last.clone()),
            (SinkState::Completed, _) => LifecyclePhase::Completion,
        }
    }

    /// Get timing context reference.
    pub fn timing(&self) -> &TimingContext {
        &self.timing
    }

    /// Consume the sink and return the inner value.
    pub fn into_inner(self) -> S {
        self.inner
    }

    fn ensure_open(&self) -> Result<(), WorkloadError> {
        match self.state {
            SinkState::Initial => Err(WorkloadError::ShellNotSent),
            SinkState::Completed => Err(WorkloadError::StreamError(
                "Sink already completed".to_string(),
            )),
            SinkState::ShellSent => Ok(()),
        }
    }

    async fn write(&mut self, html: &str) -> Result<(), WorkloadError> {
        self.inner
            .send(html.as_bytes().to_vec())
            .await
            .map_err(|e| WorkloadError::StreamError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::convert::Infallible;

    fn sink() -> StreamingSink<Vec<Vec<u8>>, Infallible> {
        StreamingSink::new(Vec::new(), TimingContext::new())
    }

    fn text(chunks: &[Vec<u8>]) -> Vec<String> {
        chunks
            .iter()
            .map(|c| String::from_utf8_lossy(c).into_owned())
            .collect()
    }

    #[test]
    fn test_shell_first_ordering() {
        block_on(async {
            let mut sink = sink();
            assert_eq!(sink.phase(), LifecyclePhase::Start);

            sink.send_shell("<html>").await.unwrap();
            assert_eq!(sink.phase(), LifecyclePhase::ShellSent);

            sink.send_section("grid", "<div>grid</div>").await.unwrap();
            assert_eq!(sink.phase(), LifecyclePhase::SectionSent("grid".to_string()));

            sink.send_closing("</html>").await.unwrap();
            assert_eq!(sink.phase(), LifecyclePhase::Completion);
            assert_eq!(sink.sections_sent(), ["grid".to_string()]);
            assert!(sink.timing().time_to_shell().is_some());

            let chunks = sink.into_inner();
            assert_eq!(text(&chunks), vec!["<html>", "<div>grid</div>", "</html>"]);
        });
    }

    #[test]
    fn test_section_before_shell_fails() {
        block_on(async {
            let mut sink = sink();
            let err = sink.send_section("grid", "x").await.unwrap_err();
            assert!(matches!(err, WorkloadError::ShellNotSent));
            assert!(sink.into_inner().is_empty());
        });
    }

    #[test]
    fn test_shell_twice_fails() {
        block_on(async {
            let mut sink = sink();
            sink.send_shell("a").await.unwrap();
            assert!(sink.send_shell("b").await.is_err());
        });
    }

    #[test]
    fn test_send_after_complete_fails() {
        block_on(async {
            let mut sink = sink();
            sink.send_shell("a").await.unwrap();
            sink.complete();
            let err = sink.send_section("late", "x").await.unwrap_err();
            assert!(matches!(err, WorkloadError::StreamError(_)));
        });
    }

    #[test]
    fn test_sections_are_timed() {
        block_on(async {
            let mut sink = sink();
            sink.send_shell("<html>").await.unwrap();
            sink.send_section("filters", "<aside></aside>").await.unwrap();
            sink.send_section("grid", "<div></div>").await.unwrap();

            let timing = sink.timing();
            let first = timing.time_to_first_section().unwrap();
            let grid = timing.section_timing("grid").unwrap();
            assert_eq!(grid.name, "grid");
            assert!(first <= grid.sent);
            assert!(timing.section_timing("reviews").is_none());
        });
    }
}
