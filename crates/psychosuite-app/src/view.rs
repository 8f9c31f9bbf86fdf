//! Screen view models.
//!
//! `render` is a pure function from current data plus screen parameters to
//! a renderable description. It owns no rendering technology; the terminal
//! shell (or any other front end) decides how a `ScreenView` is drawn.

use jiff::Timestamp;

use psychosuite_core::models::Client;
use psychosuite_instruments::session::SessionState;
use psychosuite_instruments::{all_instruments, get_instrument};
use psychosuite_store::db::Database;

use crate::error::AppError;
use crate::nav::Screen;
use crate::state::ActiveRun;

/// A result row in a list (client detail, report builder).
#[derive(Debug, Clone)]
pub struct ResultCard {
    pub result_id: String,
    pub test_name: String,
    pub administered_at: Timestamp,
    pub total: u32,
}

/// An instrument row on the test selection screen.
#[derive(Debug, Clone)]
pub struct TestCard {
    pub test_id: String,
    pub name: String,
    pub description: String,
}

/// An answer option on the test runner screen.
#[derive(Debug, Clone)]
pub struct OptionCard {
    pub text: String,
    pub score: u32,
}

/// Interpretation as shown on the result screen: attached narrative, or
/// still pending.
#[derive(Debug, Clone)]
pub enum InterpretationView {
    Ready(String),
    Pending,
}

#[derive(Debug, Clone)]
pub enum ScreenView {
    ClientList {
        clients: Vec<Client>,
    },
    ClientForm {
        editing: Option<Client>,
    },
    ClientDetail {
        client: Client,
        results: Vec<ResultCard>,
    },
    TestSelection {
        client: Client,
        tests: Vec<TestCard>,
    },
    TestRunner {
        client: Client,
        test_name: String,
        /// 1-based for display.
        question_number: usize,
        question_count: usize,
        prompt: String,
        options: Vec<OptionCard>,
        /// False on the first question, where back cancels the run.
        can_undo: bool,
    },
    ResultView {
        client: Client,
        test_name: String,
        administered_at: Timestamp,
        total: u32,
        scale_summary: String,
        interpretation: InterpretationView,
    },
    ReportBuilder {
        client: Client,
        candidates: Vec<ResultCard>,
    },
}

fn result_cards(db: &Database, client_id: &str) -> Result<Vec<ResultCard>, AppError> {
    db.client_results(client_id)
        .into_iter()
        .map(|r| {
            let instrument = get_instrument(&r.test_id)?;
            Ok(ResultCard {
                result_id: r.id,
                test_name: instrument.name().to_string(),
                administered_at: r.administered_at,
                total: r.total,
            })
        })
        .collect()
}

/// Render one screen. Fails only on dangling ids (unknown client, result,
/// or instrument) or a runner screen without a matching active run.
pub fn render(
    db: &Database,
    screen: &Screen,
    run: Option<&ActiveRun>,
) -> Result<ScreenView, AppError> {
    match screen {
        Screen::ClientList => Ok(ScreenView::ClientList {
            clients: db.clients(),
        }),

        Screen::ClientForm { client_id } => {
            let editing = match client_id {
                Some(id) => Some(db.client(id)?),
                None => None,
            };
            Ok(ScreenView::ClientForm { editing })
        }

        Screen::ClientDetail { client_id } => Ok(ScreenView::ClientDetail {
            client: db.client(client_id)?,
            results: result_cards(db, client_id)?,
        }),

        Screen::TestSelection { client_id } => {
            let tests = all_instruments()
                .iter()
                .map(|i| TestCard {
                    test_id: i.id().to_string(),
                    name: i.name().to_string(),
                    description: i.description().to_string(),
                })
                .collect();
            Ok(ScreenView::TestSelection {
                client: db.client(client_id)?,
                tests,
            })
        }

        Screen::TestRunner { client_id, test_id } => {
            let run = run
                .filter(|r| {
                    r.client_id == *client_id
                        && r.session.test_id() == test_id.as_str()
                        && r.session.state() == SessionState::InProgress
                })
                .ok_or(AppError::NoActiveRun)?;
            let instrument = get_instrument(test_id)?;
            let index = run.session.current_question();
            let question = instrument
                .questions()
                .get(index)
                .ok_or(AppError::NoActiveRun)?;
            Ok(ScreenView::TestRunner {
                client: db.client(client_id)?,
                test_name: instrument.name().to_string(),
                question_number: index + 1,
                question_count: instrument.questions().len(),
                prompt: question.prompt.clone(),
                options: question
                    .options
                    .iter()
                    .map(|o| OptionCard {
                        text: o.text.clone(),
                        score: o.score,
                    })
                    .collect(),
                can_undo: index > 0,
            })
        }

        Screen::ResultView { result_id } => {
            let result = db.result(result_id)?;
            let client = db.client(&result.client_id)?;
            let instrument = get_instrument(&result.test_id)?;
            let interpretation = match &result.interpretation {
                Some(text) => InterpretationView::Ready(text.clone()),
                None => InterpretationView::Pending,
            };
            Ok(ScreenView::ResultView {
                client,
                test_name: instrument.name().to_string(),
                administered_at: result.administered_at,
                total: result.total,
                scale_summary: instrument.ladder().interpret(result.total),
                interpretation,
            })
        }

        Screen::ReportBuilder { client_id } => Ok(ScreenView::ReportBuilder {
            client: db.client(client_id)?,
            candidates: result_cards(db, client_id)?,
        }),
    }
}
