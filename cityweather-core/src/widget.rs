//! The lookup widget: one query field, one result slot, one request at a time.
//!
//! [`WidgetState`] is the reducer. It only changes through [`WidgetState::set_query`],
//! [`WidgetState::begin_submit`] and [`WidgetState::resolve`], and exposes read-only
//! accessors for rendering. [`Widget`] drives it against a [`WeatherProvider`].
//!
//! A submit that arrives while a request is outstanding is ignored rather than
//! racing the first one.

use tracing::debug;

use crate::{
    config::ApiKey,
    error::LookupError,
    model::{CurrentResult, Failure, WeatherReport},
    provider::WeatherProvider,
    validate::{ValidatedQuery, validate},
};

/// What the caller must do after [`WidgetState::begin_submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submit {
    /// A request is already in flight; nothing changed.
    Ignored,
    /// Validation failed and the failure is now the current result.
    Rejected,
    /// Issue this request, then call [`WidgetState::resolve`].
    Fetch(ValidatedQuery),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WidgetState {
    query: String,
    result: CurrentResult,
    pending: bool,
}

impl WidgetState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn result(&self) -> &CurrentResult {
        &self.result
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    pub fn begin_submit(&mut self, credential: Option<&ApiKey>) -> Submit {
        if self.pending {
            debug!("submit ignored: request already in flight");
            return Submit::Ignored;
        }

        match validate(&self.query, credential) {
            Ok(query) => {
                self.pending = true;
                Submit::Fetch(query)
            }
            Err(err) => {
                self.fail(&err);
                Submit::Rejected
            }
        }
    }

    /// Replace the result wholesale with the outcome of a fetch.
    pub fn resolve(&mut self, outcome: Result<WeatherReport, LookupError>) {
        match outcome {
            Ok(report) => {
                self.result = CurrentResult::Report(report);
                self.query.clear();
            }
            Err(err) => self.fail(&err),
        }
        self.pending = false;
    }

    fn fail(&mut self, err: &LookupError) {
        debug!(kind = ?err.kind(), error = %err, "weather lookup failed");
        self.result = CurrentResult::Failure(Failure::from(err));
        self.query.clear();
    }
}

/// [`WidgetState`] wired to a provider and the startup credential.
#[derive(Debug)]
pub struct Widget<P> {
    state: WidgetState,
    provider: P,
    credential: Option<ApiKey>,
}

impl<P: WeatherProvider> Widget<P> {
    pub fn new(provider: P, credential: Option<ApiKey>) -> Self {
        Self { state: WidgetState::new(), provider, credential }
    }

    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    pub fn set_query(&mut self, text: impl Into<String>) {
        self.state.set_query(text);
    }

    /// Validate, fetch at most once, and reduce the outcome into the state.
    pub async fn submit(&mut self) -> &CurrentResult {
        if let Submit::Fetch(query) = self.state.begin_submit(self.credential.as_ref()) {
            let outcome = self.provider.current_weather(&query.city, &query.api_key).await;
            self.state.resolve(outcome);
        }

        self.state.result()
    }

    /// Convenience for one-shot lookups: set the query and submit.
    pub async fn lookup(&mut self, city: impl Into<String>) -> &CurrentResult {
        self.set_query(city);
        self.submit().await
    }
}
