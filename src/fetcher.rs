use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::config::Config;
use crate::memo::Memo;

// A misconfigured service that keeps returning continuation tokens would
// otherwise loop forever. No real export comes close to this many pages.
const PAGE_LIMIT: usize = 10_000;

#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("gave up after {0} pages, service keeps returning continuation tokens")]
    PageLimit(usize),
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct MemoPage {
    #[serde(default)]
    memos: Vec<Memo>,
    #[serde(default)]
    next_page_token: String,
}

/// Retrieves every memo visible to the configured user, following
/// pagination until the service stops returning a continuation token.
/// Any transport or decode failure aborts the whole fetch; pages
/// accumulated so far are discarded.
pub async fn fetch_all_memos(client: &Client, config: &Config) -> Result<Vec<Memo>, Error> {
    let endpoint = format!("{}/api/v1/memos", config.base_url);
    let page_size = config.page_size.to_string();

    let mut memos = Vec::new();
    let mut page_token = String::new();

    for page in 1.. {
        if page > PAGE_LIMIT {
            return Err(Error::PageLimit(PAGE_LIMIT));
        }

        let mut request = client
            .get(&endpoint)
            .header("Authorization", format!("Bearer {}", config.token))
            .query(&[
                ("user", config.user.as_str()),
                ("pageSize", page_size.as_str()),
                ("sort", "createTime"),
            ]);
        if !page_token.is_empty() {
            request = request.query(&[("pageToken", page_token.as_str())]);
        }

        let response = request.send().await?.error_for_status()?;
        let body: MemoPage = response.json().await?;

        debug!(page = page, count = body.memos.len(), "page fetched");

        memos.extend(body.memos);

        if body.next_page_token.is_empty() {
            break;
        }
        page_token = body.next_page_token;
    }

    info!(total = memos.len(), "fetch complete");

    Ok(memos)
}
