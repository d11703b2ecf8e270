//! Shared HTTP client construction

use std::time::Duration;

use ankillm_core::prelude::*;
use reqwest::Client;

/// Give up on unreachable services quickly; AnkiConnect is local
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

const USER_AGENT: &str = concat!("anki-llm/", env!("CARGO_PKG_VERSION"));

/// One client shared by the Anki and Gemini clients.
///
/// There is no overall request timeout: generation is bounded by the caller,
/// and a large upload must not be cut off mid-stream.
pub fn http_client() -> Result<Client> {
    Client::builder()
        .connect_timeout(CONNECT_TIMEOUT)
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| Error::http_client(format!("HTTP client build failed: {e}")))
}
