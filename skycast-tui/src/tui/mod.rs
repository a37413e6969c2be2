//! Full-screen terminal interface: raw-mode lifecycle, event loop, and the
//! bridge between reducer effects and spawned fetch tasks.

mod components;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use skycast_core::{Action, AppState, Effect, WeatherProvider, fetch_weather, reduce};
use std::{io, sync::Arc, time::Duration};
use tokio::sync::mpsc::{self, UnboundedSender};

const TICK_RATE: Duration = Duration::from_millis(100);

pub async fn run(provider: Arc<dyn WeatherProvider>, initial_city: String) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, provider, initial_city).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    provider: Arc<dyn WeatherProvider>,
    initial_city: String,
) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut state = AppState::new(initial_city);

    // Fetch the startup city right away, like the page-load fetch this
    // replaces.
    dispatch(&mut state, Action::SubmitSearch, &provider, &tx);

    loop {
        terminal.draw(|f| ui::draw(f, &state))?;

        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match map_key(key.code, &state) {
                        KeyOutcome::Action(action) => {
                            dispatch(&mut state, action, &provider, &tx);
                        }
                        KeyOutcome::Quit => break,
                        KeyOutcome::Ignored => {}
                    }
                }
            }
        }

        // Completed fetches land here; stale ones are dropped by the reducer.
        while let Ok(action) = rx.try_recv() {
            dispatch(&mut state, action, &provider, &tx);
        }
    }

    Ok(())
}

enum KeyOutcome {
    Action(Action),
    Quit,
    Ignored,
}

fn map_key(code: KeyCode, state: &AppState) -> KeyOutcome {
    if state.search_open {
        return match code {
            KeyCode::Esc => KeyOutcome::Action(Action::CloseSearch),
            KeyCode::Enter => KeyOutcome::Action(Action::SubmitSearch),
            KeyCode::Backspace => {
                let mut query = state.query.clone();
                query.pop();
                KeyOutcome::Action(Action::QueryChanged(query))
            }
            KeyCode::Char(c) => {
                let mut query = state.query.clone();
                query.push(c);
                KeyOutcome::Action(Action::QueryChanged(query))
            }
            _ => KeyOutcome::Ignored,
        };
    }

    match code {
        KeyCode::Char('/') | KeyCode::Char('s') => KeyOutcome::Action(Action::OpenSearch),
        KeyCode::Char('d') => KeyOutcome::Action(Action::ToggleDarkMode),
        KeyCode::Char('u') => KeyOutcome::Action(Action::ToggleUnits),
        KeyCode::Char('r') => KeyOutcome::Action(Action::SubmitSearch),
        KeyCode::Char('q') | KeyCode::Esc => KeyOutcome::Quit,
        _ => KeyOutcome::Ignored,
    }
}

/// Run the reducer and execute whatever effects it returns.
fn dispatch(
    state: &mut AppState,
    action: Action,
    provider: &Arc<dyn WeatherProvider>,
    tx: &UnboundedSender<Action>,
) {
    for effect in reduce(state, action) {
        match effect {
            Effect::Fetch { request, city } => {
                let provider = Arc::clone(provider);
                let tx = tx.clone();
                tokio::spawn(async move {
                    let action = match fetch_weather(provider.as_ref(), &city).await {
                        Ok(bundle) => Action::FetchSucceeded(request, bundle),
                        Err(err) => Action::FetchFailed(request, err.to_string()),
                    };
                    let _ = tx.send(action);
                });
            }
        }
    }
}
