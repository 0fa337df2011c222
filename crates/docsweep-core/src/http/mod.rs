//! Blocking HTTP GET.
//!
//! Uses the curl crate (libcurl). Requests are issued one at a time on the
//! calling thread. The auditor talks to [`HttpClient`] so tests can swap in
//! canned responses.

use crate::config::HttpConfig;
use crate::error::{Error, Result};
use std::time::Duration;

/// Status and body of a completed GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u32,
    pub body: String,
}

impl Response {
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

pub trait HttpClient {
    /// GET `url`, following redirects. Err only when no response was received.
    fn get(&self, url: &str) -> Result<Response>;
}

/// libcurl-backed client; a fresh `Easy` handle per request.
#[derive(Debug, Clone)]
pub struct CurlClient {
    connect_timeout: Duration,
    timeout: Duration,
    user_agent: String,
}

impl CurlClient {
    pub fn new(cfg: &HttpConfig) -> Self {
        Self {
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            timeout: Duration::from_secs(cfg.timeout_secs),
            user_agent: cfg.user_agent.clone(),
        }
    }
}

impl Default for CurlClient {
    fn default() -> Self {
        Self::new(&HttpConfig::default())
    }
}

impl HttpClient for CurlClient {
    fn get(&self, url: &str) -> Result<Response> {
        let mut body: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url).map_err(|e| Error::http(url, e))?;
        easy.follow_location(true).map_err(|e| Error::http(url, e))?;
        easy.max_redirections(10).map_err(|e| Error::http(url, e))?;
        easy.useragent(&self.user_agent)
            .map_err(|e| Error::http(url, e))?;
        easy.connect_timeout(self.connect_timeout)
            .map_err(|e| Error::http(url, e))?;
        easy.timeout(self.timeout).map_err(|e| Error::http(url, e))?;

        {
            let mut transfer = easy.transfer();
            transfer
                .write_function(|data| {
                    body.extend_from_slice(data);
                    Ok(data.len())
                })
                .map_err(|e| Error::http(url, e))?;
            transfer.perform().map_err(|e| Error::http(url, e))?;
        }

        let status = easy.response_code().map_err(|e| Error::http(url, e))?;
        tracing::debug!(url, status, bytes = body.len(), "GET");
        Ok(Response {
            status,
            body: String::from_utf8_lossy(&body).into_owned(),
        })
    }
}
