//! UI state container and its pure reducer.
//!
//! All transitions go through [`reduce`]; the shell's only job is to feed it
//! actions and execute the effects it returns. Fetch completions carry the
//! [`RequestId`] they were issued with, and completions that are not the
//! latest issued request are discarded, so the last *triggered* search wins
//! regardless of arrival order.

use crate::{
    display::{self, Background},
    error::FetchError,
    model::WeatherBundle,
};

/// Identifies one triggered fetch sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

/// Everything the UI needs to render.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Search input text.
    pub query: String,
    /// Whether the search panel is visible.
    pub search_open: bool,
    pub dark_mode: bool,
    pub use_fahrenheit: bool,
    /// A fetch sequence is in flight.
    pub searching: bool,
    /// Last successful fetch; absent after any failure.
    pub weather: Option<WeatherBundle>,
    /// User-facing failure message; never set while `weather` is.
    pub error: Option<String>,

    last_issued: Option<RequestId>,
    next_request: u64,
}

impl AppState {
    /// Startup defaults: dark mode on, search panel open, Celsius.
    pub fn new(initial_city: impl Into<String>) -> Self {
        Self {
            query: initial_city.into(),
            search_open: true,
            dark_mode: true,
            use_fahrenheit: false,
            searching: false,
            weather: None,
            error: None,
            last_issued: None,
            next_request: 0,
        }
    }

    /// Page background derived from the snapshot condition and mode.
    pub fn background(&self) -> Background {
        match &self.weather {
            Some(bundle) => display::background(bundle.snapshot.condition, self.dark_mode),
            None => display::default_background(self.dark_mode),
        }
    }

    pub fn latest_request(&self) -> Option<RequestId> {
        self.last_issued
    }

    fn issue_request(&mut self) -> RequestId {
        self.next_request += 1;
        let request = RequestId(self.next_request);
        self.last_issued = Some(request);
        request
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Search input text changed.
    QueryChanged(String),
    /// Submit the current query (Enter or the search control).
    SubmitSearch,
    /// Result: a fetch sequence completed.
    FetchSucceeded(RequestId, WeatherBundle),
    /// Result: a fetch sequence failed; the string is the user message.
    FetchFailed(RequestId, String),
    /// Show the search panel.
    OpenSearch,
    /// Hide the search panel.
    CloseSearch,
    ToggleDarkMode,
    ToggleUnits,
}

/// Work the shell must perform on behalf of a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Fetch { request: RequestId, city: String },
}

/// Apply one action to the state, returning the effects it demands.
pub fn reduce(state: &mut AppState, action: Action) -> Vec<Effect> {
    match action {
        Action::QueryChanged(query) => {
            state.query = query;
            Vec::new()
        }

        Action::SubmitSearch => {
            let city = state.query.trim().to_string();
            if city.is_empty() {
                // Fails like any other fetch, without issuing one.
                state.weather = None;
                state.error = Some(FetchError::EmptyQuery.to_string());
                return Vec::new();
            }

            state.searching = true;
            state.error = None;
            let request = state.issue_request();
            vec![Effect::Fetch { request, city }]
        }

        Action::FetchSucceeded(request, bundle) => {
            if state.last_issued != Some(request) {
                // Superseded by a newer search.
                return Vec::new();
            }

            state.weather = Some(bundle);
            state.error = None;
            state.searching = false;
            state.search_open = false;
            Vec::new()
        }

        Action::FetchFailed(request, message) => {
            if state.last_issued != Some(request) {
                return Vec::new();
            }

            state.weather = None;
            state.error = Some(message);
            state.searching = false;
            Vec::new()
        }

        Action::OpenSearch => {
            state.search_open = true;
            Vec::new()
        }

        Action::CloseSearch => {
            state.search_open = false;
            Vec::new()
        }

        Action::ToggleDarkMode => {
            state.dark_mode = !state.dark_mode;
            Vec::new()
        }

        Action::ToggleUnits => {
            state.use_fahrenheit = !state.use_fahrenheit;
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Condition, ForecastEntry, WeatherSnapshot};

    fn bundle() -> WeatherBundle {
        WeatherBundle {
            snapshot: WeatherSnapshot {
                location_name: "Thimphu".into(),
                condition: Condition::Rain,
                description: "light rain".into(),
                temperature_c: 18.4,
                feels_like_c: 18.1,
                humidity_pct: 78,
                wind_speed_mps: 2.1,
                pressure_hpa: 1013,
                observed_at: 1_717_243_200,
                sunrise: 1_717_197_300,
                sunset: 1_717_246_800,
                timezone_offset_secs: 21_600,
            },
            forecast: vec![ForecastEntry {
                forecast_at: 1_717_297_200,
                condition: Condition::Clear,
                description: "clear sky".into(),
                temperature_c: 21.0,
                feels_like_c: 20.6,
                humidity_pct: 60,
                wind_speed_mps: 1.4,
                pressure_hpa: 1011,
            }],
        }
    }

    fn submit(state: &mut AppState) -> RequestId {
        let effects = reduce(state, Action::SubmitSearch);
        assert_eq!(effects.len(), 1);
        let Effect::Fetch { request, .. } = &effects[0];
        *request
    }

    #[test]
    fn submit_starts_a_fetch_with_the_trimmed_query() {
        let mut state = AppState::new("  Thimphu  ");
        state.error = Some("stale".into());

        let effects = reduce(&mut state, Action::SubmitSearch);

        assert!(state.searching);
        assert!(state.error.is_none());
        assert_eq!(
            effects,
            vec![Effect::Fetch {
                request: state.latest_request().unwrap(),
                city: "Thimphu".into(),
            }]
        );
    }

    #[test]
    fn empty_submit_errors_without_an_effect() {
        let mut state = AppState::new("   ");
        state.weather = Some(bundle());

        let effects = reduce(&mut state, Action::SubmitSearch);

        assert!(effects.is_empty());
        assert!(!state.searching);
        assert!(state.weather.is_none());
        assert_eq!(state.error.as_deref(), Some("Please enter a city name"));
    }

    #[test]
    fn success_stores_the_bundle_and_closes_the_panel() {
        let mut state = AppState::new("Thimphu");
        let request = submit(&mut state);

        reduce(&mut state, Action::FetchSucceeded(request, bundle()));

        assert!(!state.searching);
        assert!(!state.search_open);
        assert!(state.error.is_none());
        assert_eq!(
            state.weather.as_ref().map(|b| b.snapshot.condition),
            Some(Condition::Rain)
        );
    }

    #[test]
    fn failure_clears_the_bundle_and_sets_the_message() {
        let mut state = AppState::new("Thimphu");
        let request = submit(&mut state);
        reduce(&mut state, Action::FetchSucceeded(request, bundle()));

        let request = submit(&mut state);
        reduce(
            &mut state,
            Action::FetchFailed(request, "Weather service unavailable.".into()),
        );

        assert!(!state.searching);
        assert!(state.weather.is_none());
        assert_eq!(state.error.as_deref(), Some("Weather service unavailable."));
    }

    #[test]
    fn stale_completion_is_discarded() {
        let mut state = AppState::new("Thimphu");
        let first = submit(&mut state);
        let second = submit(&mut state);
        assert_ne!(first, second);

        // The older sequence finishing late must not overwrite anything.
        reduce(&mut state, Action::FetchSucceeded(first, bundle()));
        assert!(state.weather.is_none());
        assert!(state.searching);

        reduce(&mut state, Action::FetchFailed(first, "late failure".into()));
        assert!(state.error.is_none());
        assert!(state.searching);

        reduce(&mut state, Action::FetchSucceeded(second, bundle()));
        assert!(state.weather.is_some());
        assert!(!state.searching);
    }

    #[test]
    fn toggles_flip_their_flags() {
        let mut state = AppState::new("Thimphu");
        assert!(state.dark_mode);
        assert!(state.search_open);
        assert!(!state.use_fahrenheit);

        reduce(&mut state, Action::ToggleDarkMode);
        assert!(!state.dark_mode);

        reduce(&mut state, Action::ToggleUnits);
        assert!(state.use_fahrenheit);

        reduce(&mut state, Action::CloseSearch);
        assert!(!state.search_open);
        reduce(&mut state, Action::OpenSearch);
        assert!(state.search_open);
    }

    #[test]
    fn query_edits_replace_the_text() {
        let mut state = AppState::new("Thimphu");

        reduce(&mut state, Action::QueryChanged("Par".into()));
        reduce(&mut state, Action::QueryChanged("Paris".into()));

        assert_eq!(state.query, "Paris");
    }

    #[test]
    fn background_tracks_condition_and_mode() {
        let mut state = AppState::new("Thimphu");
        let empty_dark = state.background();

        reduce(&mut state, Action::ToggleDarkMode);
        assert_ne!(state.background(), empty_dark);
        reduce(&mut state, Action::ToggleDarkMode);

        let request = submit(&mut state);
        reduce(&mut state, Action::FetchSucceeded(request, bundle()));

        assert_eq!(
            state.background(),
            crate::display::background(Condition::Rain, true)
        );
    }
}
