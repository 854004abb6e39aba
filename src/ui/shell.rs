//! Line-based interactive shell driving one session.

use super::command::{Command, parse_command};
use super::screen::{
    describe_outcome, render_help, render_notice, render_screen, render_trade_blocks,
};
use crate::data_fetcher::LeagueDataProvider;
use crate::error::AppError;
use crate::session::{ControlId, EventReport, InputPanel, InvalidChoice, SessionController};
use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info};

/// What the shell did with one command.
#[derive(Debug, PartialEq, Eq)]
pub enum Step {
    /// The session handled an event.
    Handled(EventReport),
    /// A control value changed without raising an event.
    Updated,
    Rejected(InvalidChoice),
    /// The control is not on the current screen.
    Hidden(ControlId),
    ShowBlocks,
    Show,
    Help,
    Quit,
}

pub struct Shell<P: LeagueDataProvider> {
    controller: SessionController<P>,
    panel: InputPanel,
}

impl<P: LeagueDataProvider> Shell<P> {
    /// Creates the shell and lays out the login screen.
    pub fn new(provider: Arc<P>) -> Self {
        let mut controller = SessionController::new(provider);
        let mut panel = InputPanel::new();
        controller.start(&mut panel);
        Self { controller, panel }
    }

    pub fn controller(&self) -> &SessionController<P> {
        &self.controller
    }

    pub fn panel(&self) -> &InputPanel {
        &self.panel
    }

    /// Applies one command. Control values are checked against the
    /// control's options first; a rejected value leaves everything as is.
    pub fn execute(&mut self, command: Command) -> Step {
        match command {
            Command::Select {
                control,
                values,
                then,
            } => {
                if control.is_login() && self.controller.session().has_entered() {
                    debug!("Ignoring {} after login", control.id());
                    return Step::Hidden(control);
                }
                if let Err(invalid) = self.panel.select(control, values) {
                    debug!("Rejected selection: {invalid}");
                    return Step::Rejected(invalid);
                }
                match then {
                    Some(event) => Step::Handled(self.controller.handle(event, &mut self.panel)),
                    None => Step::Updated,
                }
            }
            Command::Dispatch(event) => {
                Step::Handled(self.controller.handle(event, &mut self.panel))
            }
            Command::ShowBlocks => Step::ShowBlocks,
            Command::Show => Step::Show,
            Command::Help => Step::Help,
            Command::Quit => Step::Quit,
        }
    }

    /// Reads commands line by line until `quit` or end of input, redrawing
    /// the screen after every command that changed something.
    pub async fn run<R, W>(&mut self, input: R, out: &mut W) -> Result<(), AppError>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        render_screen(out, &self.controller, &self.panel)?;
        let mut lines = input.lines();

        while let Some(line) = lines.next_line().await? {
            let command = match parse_command(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(e) => {
                    render_notice(out, &e.to_string())?;
                    continue;
                }
            };

            match self.execute(command) {
                Step::Quit => break,
                Step::Help => render_help(out)?,
                Step::ShowBlocks => render_trade_blocks(out, self.controller.trade_blocks())?,
                Step::Show | Step::Updated => {
                    render_screen(out, &self.controller, &self.panel)?;
                }
                Step::Rejected(invalid) => render_notice(out, &invalid.to_string())?,
                Step::Hidden(control) => {
                    render_notice(out, &format!("'{}' is not on this screen", control.label()))?;
                }
                Step::Handled(report) => {
                    if let Some(message) = describe_outcome(&report.outcome) {
                        render_notice(out, &message)?;
                    }
                    render_screen(out, &self.controller, &self.panel)?;
                }
            }
        }

        info!(
            "Shell closed with {} trade block entries",
            self.controller.trade_blocks().len()
        );
        Ok(())
    }
}
