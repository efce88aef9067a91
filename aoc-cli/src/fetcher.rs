//! Puzzle input fetching backed by the local cache

use crate::cache::InputCache;
use crate::error::CliError;
use aoc_http_client::AocClient;
use aoc_solver::{DataFetcher, FetchError, PuzzleContext, SolutionContext};
use std::sync::{Arc, Mutex};
use zeroize::Zeroizing;

/// Asks the user for a session token; receives the reason it is needed
pub type SessionPrompt = fn(&str) -> Result<Zeroizing<String>, CliError>;

/// Fetches the input of the puzzle recorded in a [`SolutionContext`]
///
/// Cached inputs are returned without touching the network. Otherwise the
/// input is downloaded with the session token, which is only prompted for at
/// that point, and written back to the cache.
pub struct CachingFetcher {
    context: Arc<SolutionContext>,
    cache: InputCache,
    client: AocClient,
    session: Mutex<Option<Zeroizing<String>>>,
    prompt: SessionPrompt,
}

impl CachingFetcher {
    pub fn new(
        context: Arc<SolutionContext>,
        cache: InputCache,
        client: AocClient,
        session: Option<Zeroizing<String>>,
        prompt: SessionPrompt,
    ) -> Self {
        Self {
            context,
            cache,
            client,
            session: Mutex::new(session),
            prompt,
        }
    }

    fn session(&self) -> Result<Zeroizing<String>, FetchError> {
        let mut session = self
            .session
            .lock()
            .map_err(|_| FetchError::new("session lock poisoned"))?;
        if let Some(token) = session.as_ref() {
            return Ok(token.clone());
        }

        let token = (self.prompt)(
            "Session token required to fetch missing input from adventofcode.com",
        )
        .map_err(FetchError::new)?;
        *session = Some(token.clone());
        Ok(token)
    }
}

impl DataFetcher for CachingFetcher {
    fn get_data(&self) -> Result<String, FetchError> {
        let (year, day) = (self.context.year(), self.context.day());

        if let Some(input) = self.cache.get(year, day).map_err(FetchError::new)? {
            tracing::debug!(year, day, "using cached input");
            return Ok(input);
        }

        let url = self.client.input_url(year, day).map_err(FetchError::new)?;
        let session = self.session()?;
        tracing::info!(%url, "fetching input");
        let input = self
            .client
            .get_input(year, day, &session)
            .map_err(FetchError::new)?;

        if let Err(e) = self.cache.put(year, day, &input) {
            tracing::warn!(year, day, error = %e, "failed to cache input");
        }
        Ok(input)
    }
}
