// src/core/net.rs
//
// Blocking HTTPS GET against the stats provider. One client per run; the
// provider rejects requests that don't look like they come from its website.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, REFERER, USER_AGENT};

use crate::config::consts::{HOST, HTTP_TIMEOUT_SECS, PREFIX};
use crate::error::{Error, Result};

pub struct StatsClient {
    http: Client,
    base: String,
}

impl StatsClient {
    pub fn new() -> Result<Self> {
        Self::with_base(format!("https://{}{}", HOST, PREFIX))
    }

    /// Point the client somewhere else (local mirror, test server).
    pub fn with_base(base: impl Into<String>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json, text/plain, */*"));
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
        headers.insert(USER_AGENT, HeaderValue::from_static(
            "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7)"));
        headers.insert(REFERER, HeaderValue::from_static("https://www.nba.com/"));
        headers.insert("x-nba-stats-origin", HeaderValue::from_static("stats"));
        headers.insert("x-nba-stats-token", HeaderValue::from_static("true"));

        let http = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()?;

        Ok(Self { http, base: base.into() })
    }

    /// GET `<base><endpoint>?<query>` and return the body as JSON.
    /// Anything but a 2xx is an error.
    pub fn get_json(&self, endpoint: &str, query: &[(&str, &str)]) -> Result<serde_json::Value> {
        let url = join!(&self.base, endpoint);
        logd!("HTTP: GET {} {:?}", url, query);

        let resp = self.http.get(&url).query(query).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Status { status: status.as_u16(), url });
        }
        let text = resp.text()?;
        Ok(serde_json::from_str(&text)?)
    }
}
