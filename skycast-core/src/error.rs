use thiserror::Error;

/// Failure taxonomy for a fetch sequence.
///
/// The `Display` string of each variant is the exact message shown to the
/// user; the UI layer never rewrites these.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The query was empty or whitespace-only. No request is made.
    #[error("Please enter a city name")]
    EmptyQuery,

    /// The current-conditions endpoint answered 404 for this city.
    #[error("City not found. Please check spelling.")]
    CityNotFound,

    /// Network failure, bad payload, or a non-404 error status on the
    /// current-conditions call.
    #[error("Weather service unavailable.")]
    ServiceUnavailable(#[source] anyhow::Error),

    /// The forecast call failed after current conditions succeeded.
    #[error("Unable to fetch forecast data.")]
    ForecastUnavailable(#[source] anyhow::Error),
}
