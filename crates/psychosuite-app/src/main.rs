//! Terminal front end for PsychoSuite.
//!
//! A thin line-oriented shell over the command layer: prints the current
//! screen's view model, reads one command per line, dispatches. All
//! business logic lives in the library crates; this binary only draws
//! `ScreenView`s and parses input.

use std::io::Write as _;
use std::sync::Arc;

use eyre::Result;
use jiff::Timestamp;
use jiff::civil::Date;

use psychosuite_app::commands::{self, ClientDraft};
use psychosuite_app::config::{self, AppConfig};
use psychosuite_app::nav::Screen;
use psychosuite_app::state::App;
use psychosuite_app::view::{InterpretationView, ScreenView};
use psychosuite_report::detail::format_detail;
use psychosuite_store::db::Database;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cfg = if config::has_config() {
        config::load_config()?
    } else {
        let cfg = AppConfig::default();
        config::save_config(&cfg)?;
        cfg
    };

    let sdk_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(cfg.region.clone()))
        .load()
        .await;

    let db = Database::open(config::data_dir()?)?;
    let mut app = App::new(db);

    println!("PsychoSuite — clinical assessment suite");
    println!("All data is stored locally. Back up regularly.\n");

    let mut view = app.navigate(Screen::ClientList)?;
    loop {
        print_view(&view);
        let line = read_line("> ")?;
        match dispatch(&mut app, &cfg, &sdk_config, &view, line.trim()) {
            Ok(Outcome::Continue(next)) => view = next,
            Ok(Outcome::Quit) => break,
            Err(e) => {
                println!("error: {e}\n");
                view = app.render()?;
            }
        }
    }

    Ok(())
}

enum Outcome {
    Continue(ScreenView),
    Quit,
}

fn dispatch(
    app: &mut App,
    cfg: &AppConfig,
    sdk_config: &aws_config::SdkConfig,
    view: &ScreenView,
    input: &str,
) -> Result<Outcome, eyre::Report> {
    let now = Timestamp::now();
    let today = now.to_zoned(jiff::tz::TimeZone::UTC).date();

    // Empty input refreshes the current screen (e.g. to pick up an
    // interpretation that finished in the background). The client form is
    // the exception: enter starts the field prompts.
    if input.is_empty() && !matches!(view, ScreenView::ClientForm { .. }) {
        return Ok(Outcome::Continue(app.render()?));
    }

    let next = match view {
        ScreenView::ClientList { clients } => match input {
            "q" => return Ok(Outcome::Quit),
            "a" => app.navigate(Screen::ClientForm { client_id: None })?,
            "e" => {
                let (name, text) = commands::export_backup(app, today)?;
                std::fs::write(&name, text)?;
                println!("backup written to {name}\n");
                app.render()?
            }
            _ if input.starts_with("i ") => {
                let path = input[2..].trim();
                let json = std::fs::read_to_string(path)?;
                let confirm = read_line("import replaces ALL current data; type 'yes' to continue: ")?;
                if confirm.trim() == "yes" {
                    commands::import_backup(app, &json)?
                } else {
                    println!("import cancelled\n");
                    app.render()?
                }
            }
            _ => {
                let client = pick(clients, input)?;
                app.navigate(Screen::ClientDetail {
                    client_id: client.id.clone(),
                })?
            }
        },

        ScreenView::ClientForm { editing } => {
            // The form ignores the command line and prompts field by field.
            let _ = input;
            let full_name = read_line("full name: ")?;
            if full_name.trim().is_empty() {
                println!("cancelled\n");
                app.navigate(Screen::ClientList)?
            } else {
                let birth_date: Date = read_line("birth date (YYYY-MM-DD): ")?.trim().parse()?;
                let notes = read_line("notes: ")?;
                commands::save_client(
                    app,
                    ClientDraft {
                        id: editing.as_ref().map(|c| c.id.clone()),
                        full_name: full_name.trim().to_string(),
                        birth_date,
                        notes: notes.trim().to_string(),
                    },
                    now,
                )?
            }
        }

        ScreenView::ClientDetail { client, results } => match input {
            "b" => app.navigate(Screen::ClientList)?,
            "t" => app.navigate(Screen::TestSelection {
                client_id: client.id.clone(),
            })?,
            "r" => app.navigate(Screen::ReportBuilder {
                client_id: client.id.clone(),
            })?,
            "e" => app.navigate(Screen::ClientForm {
                client_id: Some(client.id.clone()),
            })?,
            _ => {
                let card = pick(results, input)?;
                app.navigate(Screen::ResultView {
                    result_id: card.result_id.clone(),
                })?
            }
        },

        ScreenView::TestSelection { client, tests } => match input {
            "b" => app.navigate(Screen::ClientDetail {
                client_id: client.id.clone(),
            })?,
            _ => {
                let card = pick(tests, input)?;
                let test_id = card.test_id.clone();
                let client_id = client.id.clone();
                commands::start_test(app, &client_id, &test_id)?
            }
        },

        ScreenView::TestRunner { options, .. } => match input {
            "b" => commands::runner_back(app)?,
            _ => {
                let option = pick(options, input)?;
                commands::answer_current(app, option.score, now)?
            }
        },

        ScreenView::ResultView { client, .. } => match input {
            "b" => app.navigate(Screen::ClientDetail {
                client_id: client.id.clone(),
            })?,
            "g" => {
                let Screen::ResultView { result_id } = app.screen().clone() else {
                    return Ok(Outcome::Continue(app.render()?));
                };
                commands::request_interpretation(
                    Arc::clone(&app.db),
                    sdk_config.clone(),
                    cfg.model_id.clone(),
                    &result_id,
                )?;
                println!("interpretation requested; press enter to refresh\n");
                app.render()?
            }
            "x" => {
                let Screen::ResultView { result_id } = app.screen().clone() else {
                    return Ok(Outcome::Continue(app.render()?));
                };
                let result = app.db.result(&result_id)?;
                let client = app.db.client(&result.client_id)?;
                let text = format_detail(&client, &result)?;
                let name = format!("report_{}_{today}.txt", client.full_name.replace(' ', "_"));
                std::fs::write(&name, text)?;
                println!("report written to {name}\n");
                app.render()?
            }
            _ => app.render()?,
        },

        ScreenView::ReportBuilder { client, candidates } => match input {
            "b" => app.navigate(Screen::ClientDetail {
                client_id: client.id.clone(),
            })?,
            _ => {
                let mut selected = Vec::new();
                for token in input.split_whitespace() {
                    selected.push(pick(candidates, token)?.result_id.clone());
                }
                let client_id = client.id.clone();
                let (name, text) = commands::export_protocol(app, &client_id, &selected, today)?;
                std::fs::write(&name, text)?;
                println!("protocol written to {name}\n");
                app.navigate(Screen::ClientDetail { client_id })?
            }
        },
    };

    Ok(Outcome::Continue(next))
}

/// Resolve a 1-based list selection.
fn pick<'a, T>(items: &'a [T], input: &str) -> Result<&'a T, eyre::Report> {
    let n: usize = input
        .parse()
        .map_err(|_| eyre::eyre!("unrecognized command: {input}"))?;
    items
        .get(n.checked_sub(1).ok_or_else(|| eyre::eyre!("selection starts at 1"))?)
        .ok_or_else(|| eyre::eyre!("no item {n}"))
}

fn read_line(prompt: &str) -> Result<String> {
    print!("{prompt}");
    std::io::stdout().flush()?;
    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(line)
}

fn print_view(view: &ScreenView) {
    match view {
        ScreenView::ClientList { clients } => {
            println!("== Clients ==");
            if clients.is_empty() {
                println!("(no clients yet)");
            }
            for (i, c) in clients.iter().enumerate() {
                println!("{}. {} (born {})", i + 1, c.full_name, c.birth_date);
            }
            println!("[number] open  [a]dd  [e]xport backup  [i <path>] import  [q]uit");
        }
        ScreenView::ClientForm { editing } => {
            match editing {
                Some(c) => println!("== Edit client: {} ==", c.full_name),
                None => println!("== New client =="),
            }
            println!("(press enter to fill in the form)");
        }
        ScreenView::ClientDetail { client, results } => {
            println!("== {} ==", client.full_name);
            println!("Born: {}", client.birth_date);
            if !client.notes.is_empty() {
                println!("Notes: {}", client.notes);
            }
            println!("Assessment history:");
            if results.is_empty() {
                println!("(no assessments yet)");
            }
            for (i, r) in results.iter().enumerate() {
                println!(
                    "{}. {} — score {} ({})",
                    i + 1,
                    r.test_name,
                    r.total,
                    r.administered_at,
                );
            }
            println!("[number] view  [t]est  [r]eport  [e]dit  [b]ack");
        }
        ScreenView::TestSelection { client, tests } => {
            println!("== Select instrument for {} ==", client.full_name);
            for (i, t) in tests.iter().enumerate() {
                println!("{}. {} — {}", i + 1, t.name, t.description);
            }
            println!("[number] start  [b]ack");
        }
        ScreenView::TestRunner {
            test_name,
            question_number,
            question_count,
            prompt,
            options,
            can_undo,
            ..
        } => {
            println!("== {test_name}: question {question_number} of {question_count} ==");
            println!("{prompt}");
            for (i, o) in options.iter().enumerate() {
                println!("{}. {}", i + 1, o.text);
            }
            if *can_undo {
                println!("[number] answer  [b] previous question");
            } else {
                println!("[number] answer  [b] cancel test");
            }
        }
        ScreenView::ResultView {
            client,
            test_name,
            administered_at,
            total,
            scale_summary,
            interpretation,
        } => {
            println!("== Result: {test_name} ==");
            println!("Client: {}", client.full_name);
            println!("Date: {administered_at}");
            println!("Total score: {total}");
            println!("Scale summary: {scale_summary}");
            match interpretation {
                InterpretationView::Ready(text) => println!("Interpretation:\n{text}"),
                InterpretationView::Pending => println!("Interpretation: (not generated yet)"),
            }
            println!("[g]enerate interpretation  e[x]port report  [b]ack");
        }
        ScreenView::ReportBuilder { client, candidates } => {
            println!("== Protocol for {} ==", client.full_name);
            println!("Select results to include (e.g. \"1 3\"):");
            for (i, r) in candidates.iter().enumerate() {
                println!(
                    "{}. {} — score {} ({})",
                    i + 1,
                    r.test_name,
                    r.total,
                    r.administered_at,
                );
            }
            println!("[numbers] export  [b]ack");
        }
    }
    println!();
}
