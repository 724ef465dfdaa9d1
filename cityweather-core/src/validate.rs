use crate::{config::ApiKey, error::LookupError};

/// A lookup that passed validation and may go to the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedQuery {
    pub city: String,
    pub api_key: ApiKey,
}

/// Empty query is checked before the credential; at most one error is reported.
pub fn validate(raw_query: &str, credential: Option<&ApiKey>) -> Result<ValidatedQuery, LookupError> {
    let city = raw_query.trim();
    if city.is_empty() {
        return Err(LookupError::EmptyQuery);
    }

    let api_key = credential.cloned().ok_or(LookupError::MissingCredential)?;

    Ok(ValidatedQuery { city: city.to_string(), api_key })
}
