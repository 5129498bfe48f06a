use std::time::Duration;

use reqwest::Client;
use tracing::debug;

pub const DEFAULT_URL: &str = "https://csie.ncut.edu.tw/content.php?key=86OP82WJQO";

/// The directory only serves the full page to browser user-agents.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Classified result of one page fetch. Transport failures and bad statuses
/// are data, not errors: the orchestrator matches on the variant instead of
/// catching exceptions from the HTTP layer.
#[derive(Debug)]
pub enum FetchOutcome {
    Success { body: String },
    ConnectionFailed { detail: String },
    HttpError { status: u16 },
}

pub fn client() -> reqwest::Result<Client> {
    Client::builder().timeout(FETCH_TIMEOUT).build()
}

/// POST the directory page (the upstream endpoint expects POST) and classify
/// the result. A timeout counts as `ConnectionFailed` like any other
/// transport-layer failure.
pub async fn fetch_page(client: &Client, url: &str, user_agent: &str) -> FetchOutcome {
    debug!("Fetching {}", url);

    let response = match client.post(url).header("user-agent", user_agent).send().await {
        Ok(r) => r,
        Err(e) => return FetchOutcome::ConnectionFailed { detail: e.to_string() },
    };

    let status = response.status();
    if !status.is_success() {
        return FetchOutcome::HttpError { status: status.as_u16() };
    }

    match response.text().await {
        Ok(body) => FetchOutcome::Success { body },
        Err(e) => FetchOutcome::ConnectionFailed { detail: e.to_string() },
    }
}
