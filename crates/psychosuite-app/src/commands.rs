//! The command layer: every user operation, expressed over `App`.
//!
//! Commands mutate the store and/or the active run, then navigate; each
//! returns the freshly rendered view of the destination screen. The one
//! asynchronous operation is the interpretation request, which runs as a
//! detached task so navigation never blocks on the network; its response
//! updates the stored record even if the user has moved on.

use std::sync::Arc;

use jiff::Timestamp;
use jiff::civil::Date;
use tracing::{info, warn};

use psychosuite_core::id::fresh_id;
use psychosuite_core::models::Client;
use psychosuite_instruments::get_instrument;
use psychosuite_instruments::session::{Session, SessionState};
use psychosuite_interpret::prompt::ResultSummary;
use psychosuite_report::protocol::{format_protocol, protocol_filename};
use psychosuite_store::backup;
use psychosuite_store::db::Database;
use psychosuite_store::error::StoreError;

use crate::error::AppError;
use crate::nav::Screen;
use crate::state::{ActiveRun, App};
use crate::view::ScreenView;

/// Client fields as entered on the form. `id: None` creates a new client.
#[derive(Debug, Clone)]
pub struct ClientDraft {
    pub id: Option<String>,
    pub full_name: String,
    pub birth_date: Date,
    pub notes: String,
}

/// Save the client form and return to the client list.
pub fn save_client(app: &mut App, draft: ClientDraft, now: Timestamp) -> Result<ScreenView, AppError> {
    match draft.id {
        Some(id) => {
            app.db.update_client(Client {
                id,
                full_name: draft.full_name,
                birth_date: draft.birth_date,
                notes: draft.notes,
            })?;
        }
        None => {
            app.db.add_client(Client {
                id: fresh_id(now),
                full_name: draft.full_name,
                birth_date: draft.birth_date,
                notes: draft.notes,
            })?;
        }
    }
    app.navigate(Screen::ClientList)
}

/// Begin administering a test: create the session and open the runner.
pub fn start_test(app: &mut App, client_id: &str, test_id: &str) -> Result<ScreenView, AppError> {
    // Fail early on dangling ids before creating any session state.
    app.db.client(client_id)?;
    let instrument = get_instrument(test_id)?;
    app.set_run(Some(ActiveRun {
        client_id: client_id.to_string(),
        session: Session::start(instrument.as_ref()),
    }));
    app.navigate(Screen::TestRunner {
        client_id: client_id.to_string(),
        test_id: test_id.to_string(),
    })
}

/// Answer the current question. Answering the last question completes the
/// run: the result is scored, persisted, and its screen opened.
pub fn answer_current(app: &mut App, value: u32, now: Timestamp) -> Result<ScreenView, AppError> {
    let run = app.run_mut().ok_or(AppError::NoActiveRun)?;
    let instrument = get_instrument(run.session.test_id())?;
    run.session.answer(instrument.as_ref(), value)?;
    let state = run.session.state();

    match state {
        SessionState::Completed => {
            let run = app.take_run().ok_or(AppError::NoActiveRun)?;
            let answers = run.session.into_answers()?;
            let result = instrument.build_result(&run.client_id, answers, now)?;
            let result_id = result.id.clone();
            app.db.add_result(result)?;
            info!(result_id = %result_id, "test run completed");
            app.navigate(Screen::ResultView { result_id })
        }
        _ => app.render(),
    }
}

/// Step back in the runner: undo the last answer, or cancel the run from
/// the first question and return to test selection.
pub fn runner_back(app: &mut App) -> Result<ScreenView, AppError> {
    let run = app.run_mut().ok_or(AppError::NoActiveRun)?;
    run.session.back()?;
    let state = run.session.state();
    let client_id = run.client_id.clone();
    match state {
        SessionState::Cancelled => {
            app.set_run(None);
            app.navigate(Screen::TestSelection { client_id })
        }
        _ => app.render(),
    }
}

/// Request an AI interpretation for a stored result.
///
/// Gathers everything it needs synchronously, then detaches. The spawned
/// task writes the generated (or fallback) text back to the store when the
/// call finishes, whether or not the result screen is still open; there is
/// no cancellation path. Re-invocation overwrites the previous text.
pub fn request_interpretation(
    db: Arc<Database>,
    sdk_config: aws_config::SdkConfig,
    model_id: String,
    result_id: &str,
) -> Result<tokio::task::JoinHandle<()>, AppError> {
    let result = db.result(result_id)?;
    let client = db.client(&result.client_id)?;
    let instrument = get_instrument(&result.test_id)?;

    let test_name = instrument.name().to_string();
    let scale_summary = instrument.ladder().interpret(result.total);
    let total = result.total;
    let result_id = result.id;
    let client_name = client.full_name;

    Ok(tokio::spawn(async move {
        let summary = ResultSummary {
            test_name: &test_name,
            client_name: &client_name,
            total,
            scale_summary: &scale_summary,
        };
        let text = psychosuite_interpret::augment(&sdk_config, &model_id, &summary).await;
        if let Err(e) = db.set_interpretation(&result_id, &text) {
            warn!(result_id = %result_id, error = %e, "failed to store interpretation");
        }
    }))
}

/// Format the protocol document for the selected results, in selection
/// order. Returns the suggested file name and the document text.
pub fn export_protocol(
    app: &App,
    client_id: &str,
    result_ids: &[String],
    generated_on: Date,
) -> Result<(String, String), AppError> {
    let client = app.db.client(client_id)?;
    let results = result_ids
        .iter()
        .map(|id| app.db.result(id))
        .collect::<Result<Vec<_>, StoreError>>()?;
    let text = format_protocol(&client, &results, generated_on)?;
    Ok((protocol_filename(&client, generated_on), text))
}

/// Serialize the full database for download.
pub fn export_backup(app: &App, today: Date) -> Result<(String, String), AppError> {
    let text = backup::export_backup(&app.db)?;
    Ok((backup::backup_filename(today), text))
}

/// Replace the entire store from a backup document and show the client
/// list. The caller must have obtained user confirmation first; a rejected
/// document leaves the store untouched.
pub fn import_backup(app: &mut App, json: &str) -> Result<ScreenView, AppError> {
    backup::import_backup(&app.db, json)?;
    app.set_run(None);
    app.navigate(Screen::ClientList)
}
