//! Terminal front-end and entry point.
//!
//! This module is the thin integration layer between the pixquest library and
//! the terminal. It owns the tokio event loop, translates stdin lines into
//! library events, and executes the actions the session core emits.
//!
//! # Architecture
//!
//! The front-end bridges two event sources into one session:
//!
//! ```text
//! ┌──────────────────────────────┐
//! │       Event Loop (select!)   │
//! │                              │
//! │  stdin lines ──┐             │
//! │                ├─→ Event ──→ handle_event ──→ Actions
//! │  completions ──┘             │        │
//! │       ▲                      │        ▼
//! │       │        spawned fetch tasks ←─ Action::Fetch
//! │       └────────────(channel)─┘
//! └──────────────────────────────┘
//! ```
//!
//! Fetch actions spawn background tasks; each task reports back through an
//! unbounded channel as a `FetchCompleted` event carrying its request token.
//! The session core decides whether that response is still current, so the
//! loop never has to reason about ordering itself.
//!
//! # Startup
//!
//! 1. Load configuration (TOML file plus `PIXQUEST_API_KEY` override)
//! 2. Initialize tracing (OTLP trace file, stderr logs)
//! 3. Fail fast when no API key is configured
//! 4. Build the Pixabay client and console notifier, enter the loop
//!
//! # Commands
//!
//! Input is line-oriented:
//!
//! - any other line: submit it as a search query
//! - `:more` / `:m`: load the next page of the active search
//! - `:quit` / `:q`: exit (closing stdin also exits)

use std::sync::Arc;

use anyhow::Context as _;
use tokio::io::AsyncBufReadExt;
use tokio::sync::mpsc;
use tracing::Instrument as _;
use tracing_opentelemetry::OpenTelemetrySpanExt as _;

use pixquest::app::{handle_event, Action, Event, SearchSession};
use pixquest::fetch::{FetchClient, FetchRequest, PixabayClient};
use pixquest::notify::{ConsoleNotifier, Notifier};
use pixquest::{ui, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;
    pixquest::observability::init_tracing(&config);

    config.require_api_key()?;

    tracing::info!(api_base = %config.api_base, "pixquest starting");

    let client: Arc<dyn FetchClient> = Arc::new(PixabayClient::new(&config)?);
    let notifier = ConsoleNotifier;

    run(client, &notifier).await
}

/// Runs the interactive loop until the user quits or stdin closes.
async fn run(client: Arc<dyn FetchClient>, notifier: &dyn Notifier) -> anyhow::Result<()> {
    let mut session = SearchSession::new();
    let (completions_tx, mut completions_rx) = mpsc::unbounded_channel();
    let mut input_lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();

    ui::render(&session);

    loop {
        let event = tokio::select! {
            line = input_lines.next_line() => {
                let Some(line) = line.context("failed to read from stdin")? else {
                    tracing::debug!("stdin closed, exiting");
                    break;
                };
                match parse_input(&line) {
                    Input::Quit => break,
                    Input::More => Event::LoadMore,
                    Input::Submit(raw) => Event::SubmitQuery(raw),
                    Input::Unknown(command) => {
                        notifier.warn(&format!(
                            "Unknown command \"{command}\". Try :more or :quit"
                        ));
                        continue;
                    }
                }
            }
            completed = completions_rx.recv() => {
                // The loop owns a sender, so the channel cannot close here.
                let Some(event) = completed else { break };
                event
            }
        };

        dispatch(&mut session, &event, &client, &completions_tx, notifier);
    }

    tracing::info!("pixquest exiting");
    Ok(())
}

/// Feeds one event through the session core and executes the emitted actions.
///
/// Re-renders the gallery whenever the session changed, except when a scroll
/// effect already positioned the viewport at the freshly appended rows.
fn dispatch(
    session: &mut SearchSession,
    event: &Event,
    client: &Arc<dyn FetchClient>,
    completions: &mpsc::UnboundedSender<Event>,
    notifier: &dyn Notifier,
) {
    let images_before = session.images.len();

    let (changed, actions) = match handle_event(session, event) {
        Ok(result) => result,
        Err(e) => {
            tracing::error!(error = %e, "event handling failed");
            return;
        }
    };

    let mut scrolled = false;
    for action in actions {
        match action {
            Action::Fetch(request) => spawn_fetch(client, completions, request),
            Action::Notify(notice) => notifier.notify(&notice),
            Action::ScrollToNewResults => {
                ui::render_new_results(session, images_before + 1);
                scrolled = true;
            }
        }
    }

    if changed && !scrolled {
        ui::render(session);
    }
}

/// Runs a fetch on a background task and reports the outcome as an event.
///
/// The task never touches the session. It sends a `FetchCompleted` event
/// carrying the original request token back through the completion channel,
/// and the event handler decides whether the response is still current.
fn spawn_fetch(
    client: &Arc<dyn FetchClient>,
    completions: &mpsc::UnboundedSender<Event>,
    request: FetchRequest,
) {
    let client = Arc::clone(client);
    let completions = completions.clone();

    tokio::spawn(async move {
        let span = tracing::debug_span!(
            "fetch_page",
            query = %request.query,
            page = request.page
        );
        if let Some(parent) = request.parent_trace_context() {
            span.set_parent(parent);
        }

        let outcome = client
            .search(&request.query, request.page)
            .instrument(span)
            .await
            .map_err(|e| e.to_string());

        if completions
            .send(Event::FetchCompleted { request, outcome })
            .is_err()
        {
            tracing::debug!("event loop closed before the fetch completed");
        }
    });
}

/// Parsed form of one line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Input {
    /// Submit the line as a search query.
    Submit(String),
    /// Request the next page of the active search.
    More,
    /// Exit the program.
    Quit,
    /// A `:`-prefixed line that is not a known command.
    Unknown(String),
}

/// Maps one input line to a command.
///
/// Lines starting with `:` are commands; everything else, including blank
/// lines, is submitted as a query so the session core applies its own
/// validation and warns about empty input.
fn parse_input(line: &str) -> Input {
    match line.trim() {
        ":more" | ":m" => Input::More,
        ":quit" | ":q" => Input::Quit,
        command if command.starts_with(':') => Input::Unknown(command.to_string()),
        _ => Input::Submit(line.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_lines_are_query_submissions() {
        assert_eq!(parse_input("cats"), Input::Submit("cats".to_string()));
        assert_eq!(
            parse_input("  yellow flowers "),
            Input::Submit("  yellow flowers ".to_string())
        );
    }

    #[test]
    fn blank_lines_submit_so_the_core_can_warn() {
        assert_eq!(parse_input(""), Input::Submit(String::new()));
        assert_eq!(parse_input("   "), Input::Submit("   ".to_string()));
    }

    #[test]
    fn commands_parse_with_their_aliases() {
        assert_eq!(parse_input(":more"), Input::More);
        assert_eq!(parse_input(" :m "), Input::More);
        assert_eq!(parse_input(":quit"), Input::Quit);
        assert_eq!(parse_input(":q"), Input::Quit);
    }

    #[test]
    fn unknown_commands_are_not_treated_as_queries() {
        assert_eq!(
            parse_input(":refresh"),
            Input::Unknown(":refresh".to_string())
        );
    }
}
