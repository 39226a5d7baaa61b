use crate::error::{AppError, AppResult};
use crate::events::terminal::{EventSource, Handler as TerminalEventHandler};
use crate::logger::Logger;
use crate::state::{FieldKind, Form, Lifecycle};
use crate::store::{Record, UserStore};
use crate::submission::submit;
use crate::validation::{Hasher, Validator};
use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::*;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io::{self, stdout};

/// How a run of the form ended, when it did not fail.
///
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Cancelled,
    Created(Record),
}

/// Oversees the terminal session, the form and its submission.
///
pub struct App<'a> {
    store: &'a dyn UserStore,
    hasher: &'a Hasher,
    logger: Option<&'a Logger>,
}

impl<'a> App<'a> {
    pub fn new(store: &'a dyn UserStore, hasher: &'a Hasher) -> Self {
        App {
            store,
            hasher,
            logger: None,
        }
    }

    /// Hold this logger's output while the form is on screen.
    ///
    pub fn with_logger(mut self, logger: &'a Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Run the form on the terminal and submit it. Returns the outcome or the
    /// error that should end the process.
    ///
    pub fn start(&self) -> AppResult<Outcome> {
        info!("Starting new user form...");
        let form = self.start_ui()?;
        self.finish(&form)
    }

    /// Take over the terminal, collect input until the form ends, and give
    /// the terminal back even if input failed.
    ///
    fn start_ui(&self) -> AppResult<Form> {
        debug!("Starting user interface on main thread...");
        self.holding_logs(|| {
            enable_raw_mode()?;
            let result = execute!(stdout(), EnterAlternateScreen)
                .map_err(AppError::from)
                .and_then(|_| {
                    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
                    terminal.hide_cursor()?;
                    self.run_form(&mut terminal, &mut TerminalEventHandler::new())
                });
            let restored = restore_terminal();
            let form = result?;
            restored?;
            Ok(form)
        })
    }

    /// Run `session` with the logger held, releasing it whatever the
    /// session returns.
    ///
    fn holding_logs<T>(&self, session: impl FnOnce() -> AppResult<T>) -> AppResult<T> {
        if let Some(logger) = self.logger {
            logger.hold();
        }
        let result = session();
        if let Some(logger) = self.logger {
            logger.release();
        }
        result
    }

    /// Draw the form and feed it events until its lifecycle is terminal.
    ///
    pub fn run_form<B: Backend>(
        &self,
        terminal: &mut Terminal<B>,
        events: &mut impl EventSource,
    ) -> AppResult<Form> {
        let validator = Validator::new(self.store, self.hasher);
        let mut form = Form::new();
        loop {
            terminal.draw(|frame| crate::ui::render(frame, &form))?;
            if !events.handle_next(&mut form, &validator)? {
                debug!("Received form exit request.");
                break;
            }
        }
        terminal.draw(|frame| crate::ui::render(frame, &form))?;
        Ok(form)
    }

    /// Act on the ended form: report a cancellation or submit the values.
    ///
    pub fn finish(&self, form: &Form) -> AppResult<Outcome> {
        match form.lifecycle() {
            Lifecycle::Cancelling => {
                info!("You cancelled form submission of new user");
                Ok(Outcome::Cancelled)
            }
            Lifecycle::Saving => {
                let record = submit(
                    self.store,
                    self.hasher,
                    &form.value(FieldKind::Email),
                    &form.value(FieldKind::Password),
                )?;
                info!("Created user #{} <{}>", record.id, record.email);
                Ok(Outcome::Created(record))
            }
            Lifecycle::Filling => Err(AppError::Terminal(
                "input ended before the form was submitted or cancelled".to_string(),
            )),
        }
    }
}

fn restore_terminal() -> AppResult<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, Show)?;
    Ok(())
}
