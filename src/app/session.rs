use crate::core::controller::{SearchController, SearchState};
use crate::domain::ports::AvailabilityChecker;
use crate::presentation::render;
use crate::utils::error::Result;
use chrono::Utc;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Cards,
    Json,
}

const QUIT_COMMANDS: [&str; 2] = [":quit", ":q"];
const CLEAR_COMMAND: &str = ":clear";

/// One user's searches against one checker.
pub struct SearchSession<C: AvailabilityChecker> {
    checker: C,
    controller: SearchController,
    output: OutputMode,
    spinner: bool,
}

impl<C: AvailabilityChecker> SearchSession<C> {
    pub fn new(checker: C, output: OutputMode) -> Self {
        Self {
            checker,
            controller: SearchController::new(),
            output,
            spinner: false,
        }
    }

    /// Show a spinner on stderr while loading. Only honoured with the `cli` feature.
    pub fn with_spinner(mut self, spinner: bool) -> Self {
        self.spinner = spinner;
        self
    }

    pub fn controller(&self) -> &SearchController {
        &self.controller
    }

    pub fn state(&self) -> &SearchState {
        self.controller.state()
    }

    /// Run one search. Returns `false` when the input was ignored.
    pub async fn submit(&mut self, input: &str) -> bool {
        let Some(ticket) = self.controller.submit(input) else {
            return false;
        };
        tracing::info!("Checking '{}' (#{})", ticket.domain, ticket.sequence);

        #[cfg(feature = "cli")]
        let indicator = if self.spinner {
            crate::presentation::progress::LoadingIndicator::start(&ticket.domain)
        } else {
            crate::presentation::progress::LoadingIndicator::hidden()
        };

        let outcome = self.checker.check_availability(&ticket.domain).await;

        #[cfg(feature = "cli")]
        indicator.finish();

        self.controller.resolve(ticket, outcome)
    }

    pub fn reset(&mut self) {
        self.controller.reset();
    }

    /// Current state in the session's output mode. JSON mode prints nothing
    /// while idle or loading.
    pub fn render(&self) -> Result<Option<String>> {
        match self.output {
            OutputMode::Cards => Ok(Some(render::render_state(self.state()))),
            OutputMode::Json => match render::render_json(self.state(), Utc::now()) {
                Some(json) => Ok(Some(json?)),
                None => Ok(None),
            },
        }
    }

    fn write_state<W: Write>(&self, writer: &mut W) -> Result<()> {
        if let Some(text) = self.render()? {
            writeln!(writer, "{}", text)?;
        }
        Ok(())
    }

    /// Read one domain per line until EOF or `:quit`. `:clear` goes back to
    /// the welcome screen. Lines that are not valid UTF-8 are skipped.
    pub async fn run_interactive<R, W>(&mut self, mut reader: R, writer: &mut W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        self.write_state(writer)?;
        let mut buf = Vec::new();

        loop {
            if self.output == OutputMode::Cards {
                write!(writer, "> ")?;
                writer.flush()?;
            }

            buf.clear();
            if reader.read_until(b'\n', &mut buf).await? == 0 {
                break;
            }
            let line = match std::str::from_utf8(&buf) {
                Ok(line) => line,
                Err(e) => {
                    tracing::warn!("Skipping input line that is not valid UTF-8: {}", e);
                    continue;
                }
            };
            let command = line.trim();

            if QUIT_COMMANDS.contains(&command) {
                break;
            }
            if command == CLEAR_COMMAND {
                self.reset();
                self.write_state(writer)?;
                continue;
            }

            if self.submit(command).await {
                self.write_state(writer)?;
            }
        }

        Ok(())
    }
}
