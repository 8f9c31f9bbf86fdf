//! Top-level application state: the database handle, the current screen,
//! and the single active test run (at most one administration at a time).

use std::sync::Arc;

use psychosuite_instruments::session::Session;
use psychosuite_store::db::Database;

use crate::error::AppError;
use crate::nav::Screen;
use crate::view::{self, ScreenView};

/// The active administration: which client is being tested and the
/// session state machine for it. Transient; never persisted.
#[derive(Debug, Clone)]
pub struct ActiveRun {
    pub client_id: String,
    pub session: Session,
}

pub struct App {
    pub db: Arc<Database>,
    screen: Screen,
    run: Option<ActiveRun>,
}

impl App {
    pub fn new(db: Database) -> Self {
        App {
            db: Arc::new(db),
            screen: Screen::default(),
            run: None,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn run(&self) -> Option<&ActiveRun> {
        self.run.as_ref()
    }

    pub(crate) fn run_mut(&mut self) -> Option<&mut ActiveRun> {
        self.run.as_mut()
    }

    pub(crate) fn set_run(&mut self, run: Option<ActiveRun>) {
        self.run = run;
    }

    pub(crate) fn take_run(&mut self) -> Option<ActiveRun> {
        self.run.take()
    }

    /// Replace the current screen and render it synchronously.
    pub fn navigate(&mut self, screen: Screen) -> Result<ScreenView, AppError> {
        self.screen = screen;
        self.render()
    }

    /// Render the current screen from current data.
    pub fn render(&self) -> Result<ScreenView, AppError> {
        view::render(&self.db, &self.screen, self.run.as_ref())
    }
}
