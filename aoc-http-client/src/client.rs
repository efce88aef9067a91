//! Blocking client for the puzzle input endpoint

use crate::error::AocError;
use reqwest::blocking::{Client, ClientBuilder};
use reqwest::header::{COOKIE, HeaderValue};
use reqwest::{IntoUrl, Url, redirect};
use zeroize::Zeroize;

/// Base URL of the Advent of Code website
pub const DEFAULT_BASE_URL: &str = "https://adventofcode.com";

/// User agent sent with every request unless overridden
pub const DEFAULT_USER_AGENT: &str =
    concat!("aoc-http-client/", env!("CARGO_PKG_VERSION"), " (advent of code solution runner)");

/// Days with a puzzle in any event
const PUZZLE_DAYS: std::ops::RangeInclusive<i32> = 1..=25;

/// Fetches personalized puzzle input
///
/// Redirects are never followed: an expired session makes the site redirect
/// to its landing page, which surfaces as [`AocError::InvalidStatus`] instead of
/// being returned as input.
///
/// # Example
///
/// ```no_run
/// use aoc_http_client::AocClient;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = AocClient::new()?;
/// let input = client.get_input(2024, 1, "your_session_cookie")?;
/// println!("{} bytes", input.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct AocClient {
    client: Client,
    base_url: Url,
}

impl AocClient {
    /// Client for adventofcode.com over rustls
    pub fn new() -> Result<Self, AocError> {
        Self::builder().build()
    }

    pub fn builder() -> AocClientBuilder {
        AocClientBuilder::new()
    }

    /// The site every request goes to
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// URL of the input for `year`/`day`, `{base}/{year}/day/{day}/input`
    ///
    /// # Errors
    /// * `AocError::InvalidPuzzle` - `year` is negative or `day` is outside 1..=25
    pub fn input_url(&self, year: i32, day: i32) -> Result<Url, AocError> {
        if year < 0 || !PUZZLE_DAYS.contains(&day) {
            return Err(AocError::InvalidPuzzle { year, day });
        }

        let (year, day) = (year.to_string(), day.to_string());
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AocError::ClientInit(format!("{} cannot be a base URL", self.base_url)))?
            .pop_if_empty()
            .extend([year.as_str(), "day", day.as_str(), "input"]);
        Ok(url)
    }

    /// Download the input for `year`/`day` with the given session cookie
    ///
    /// # Errors
    /// * `AocError::InvalidPuzzle` - No such puzzle can exist
    /// * `AocError::Request` - Network error
    /// * `AocError::InvalidStatus` - Non-2xx response, including redirects
    /// * `AocError::Encoding` - Body is not UTF-8
    pub fn get_input(&self, year: i32, day: i32, session: &str) -> Result<String, AocError> {
        let url = self.input_url(year, day)?;

        let response = self
            .client
            .get(url)
            .header(COOKIE, session_cookie(session)?)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(AocError::InvalidStatus { status });
        }
        response.text().map_err(|_| AocError::Encoding)
    }
}

/// `session=<token>` marked sensitive; the intermediate string is zeroized
fn session_cookie(session: &str) -> Result<HeaderValue, AocError> {
    let mut cookie = format!("session={}", session);
    let header = HeaderValue::from_str(&cookie);
    cookie.zeroize();

    let mut header = header.map_err(|_| AocError::InvalidSession)?;
    header.set_sensitive(true);
    Ok(header)
}

/// Configures an [`AocClient`]
///
/// Any `ClientBuilder` may be supplied for timeouts or proxies; its redirect
/// policy is always replaced with `Policy::none()`.
///
/// ```no_run
/// use aoc_http_client::AocClient;
/// use std::time::Duration;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = AocClient::builder()
///     .base_url("http://localhost:1234")?
///     .client_builder(reqwest::blocking::Client::builder().timeout(Duration::from_secs(30)))
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct AocClientBuilder {
    base_url: Option<Url>,
    user_agent: Option<String>,
    client_builder: Option<ClientBuilder>,
}

impl AocClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Send requests to `url` instead of adventofcode.com
    ///
    /// # Errors
    /// Returns `AocError::Request` if `url` does not parse.
    pub fn base_url(mut self, url: impl IntoUrl) -> Result<Self, AocError> {
        self.base_url = Some(url.into_url()?);
        Ok(self)
    }

    /// Identify requests with `agent` instead of [`DEFAULT_USER_AGENT`]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    pub fn client_builder(mut self, builder: ClientBuilder) -> Self {
        self.client_builder = Some(builder);
        self
    }

    /// # Errors
    /// Returns `AocError::ClientInit` if the HTTP client cannot be initialized.
    pub fn build(self) -> Result<AocClient, AocError> {
        let base_url = match self.base_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_URL).map_err(|e| AocError::ClientInit(e.to_string()))?,
        };

        let client = self
            .client_builder
            .unwrap_or_else(|| Client::builder().use_rustls_tls())
            .user_agent(self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT))
            .redirect(redirect::Policy::none())
            .build()
            .map_err(|e| AocError::ClientInit(e.to_string()))?;

        Ok(AocClient { client, base_url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use proptest::prelude::*;
    use std::time::Duration;

    fn client_for(server: &mockito::Server) -> AocClient {
        AocClient::builder()
            .base_url(server.url())
            .unwrap()
            .build()
            .unwrap()
    }

    #[test]
    fn test_default_base_url() {
        let client = AocClient::new().unwrap();
        assert_eq!(client.base_url().as_str(), "https://adventofcode.com/");
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(AocClient::builder().base_url("not a valid url").is_err());
    }

    #[test]
    fn test_input_url_keeps_base_path() {
        let client = AocClient::builder()
            .base_url("http://localhost:8080/mirror/")
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(
            client.input_url(2025, 4).unwrap().as_str(),
            "http://localhost:8080/mirror/2025/day/4/input"
        );
    }

    #[test]
    fn test_input_url_rejects_impossible_puzzles() {
        let client = AocClient::new().unwrap();

        for (year, day) in [(2025, 0), (2025, 26), (-1, 1), (2025, -3)] {
            match client.input_url(year, day) {
                Err(AocError::InvalidPuzzle { year: y, day: d }) => assert_eq!((y, d), (year, day)),
                other => panic!("expected InvalidPuzzle for {year}/{day}, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_session_cookie_is_sensitive() {
        let header = session_cookie("abc123").unwrap();
        assert!(header.is_sensitive());
        assert_eq!(header.to_str().unwrap(), "session=abc123");
    }

    #[test]
    fn test_session_cookie_rejects_control_characters() {
        assert!(matches!(session_cookie("abc\n123"), Err(AocError::InvalidSession)));
    }

    #[test]
    fn test_sends_cookie_and_user_agent() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/2025/day/1/input")
            .match_header("cookie", "session=cafe")
            .match_header("user-agent", DEFAULT_USER_AGENT)
            .with_body("L68\nL30\n")
            .expect(1)
            .create();

        let input = client_for(&server).get_input(2025, 1, "cafe").unwrap();

        assert_eq!(input, "L68\nL30\n");
        mock.assert();
    }

    #[test]
    fn test_custom_user_agent() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/2025/day/2/input")
            .match_header("user-agent", "someone@example.com")
            .with_body("11-22")
            .expect(1)
            .create();

        let client = AocClient::builder()
            .base_url(server.url())
            .unwrap()
            .user_agent("someone@example.com")
            .build()
            .unwrap();

        assert_eq!(client.get_input(2025, 2, "s").unwrap(), "11-22");
        mock.assert();
    }

    #[test]
    fn test_redirect_is_not_followed() {
        let mut server = mockito::Server::new();
        let landing = server
            .mock("GET", "/")
            .with_body("<html>landing page</html>")
            .expect(0)
            .create();
        let input = server
            .mock("GET", "/2025/day/1/input")
            .with_status(302)
            .with_header("location", "/")
            .expect(1)
            .create();

        match client_for(&server).get_input(2025, 1, "expired") {
            Err(AocError::InvalidStatus { status }) => assert_eq!(status.as_u16(), 302),
            other => panic!("expected InvalidStatus, got {:?}", other),
        }

        landing.assert();
        input.assert();
    }

    #[test]
    fn test_impossible_puzzle_sends_nothing() {
        let mut server = mockito::Server::new();
        let mock = server.mock("GET", Matcher::Any).expect(0).create();

        let result = client_for(&server).get_input(2025, 26, "s");

        assert!(matches!(result, Err(AocError::InvalidPuzzle { .. })));
        mock.assert();
    }

    // **Feature: aoc-http-client, Property 1: Custom client builders keep working**
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(10))]

        #[test]
        fn prop_custom_client_builder(timeout_secs in 1u64..120u64) {
            let builder = Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .use_rustls_tls();

            prop_assert!(AocClient::builder().client_builder(builder).build().is_ok());
        }
    }

    // **Feature: aoc-http-client, Property 2: Input path is /{year}/day/{day}/input**
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(10))]

        #[test]
        fn prop_input_path(
            year in 2015i32..2030,
            day in 1i32..=25,
            session in "[a-f0-9]{32,128}",
        ) {
            let mut server = mockito::Server::new();
            let mock = server
                .mock("GET", format!("/{}/day/{}/input", year, day).as_str())
                .match_header("cookie", format!("session={}", session).as_str())
                .with_body("puzzle input")
                .expect(1)
                .create();

            let input = client_for(&server).get_input(year, day, &session).ok();

            prop_assert_eq!(input.as_deref(), Some("puzzle input"));
            mock.assert();
        }
    }

    // **Feature: aoc-http-client, Property 3: Non-success statuses are errors**
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(10))]

        #[test]
        fn prop_non_success_status(
            day in 1i32..=25,
            status_code in prop::sample::select(vec![400usize, 401, 403, 404, 429, 500, 502, 503]),
        ) {
            let mut server = mockito::Server::new();
            let mock = server
                .mock("GET", format!("/2025/day/{}/input", day).as_str())
                .with_status(status_code)
                .with_body("Please don't repeatedly request this endpoint")
                .expect(1)
                .create();

            match client_for(&server).get_input(2025, day, "s") {
                Err(AocError::InvalidStatus { status }) => {
                    prop_assert_eq!(usize::from(status.as_u16()), status_code);
                }
                other => prop_assert!(false, "expected InvalidStatus, got {:?}", other),
            }
            mock.assert();
        }
    }
}
