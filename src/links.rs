//! Wiki link validation via HEAD requests

use anyhow::Result;

use crate::config::Settings;

/// Outcome of checking a single URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkStatus {
    /// Responded with a status below 400
    Reachable,
    /// Responded with a 4xx/5xx status
    Unreachable(u16),
    /// Request never produced a response
    Failed(String),
}

impl LinkStatus {
    pub fn from_status(code: u16) -> Self {
        if code < 400 {
            LinkStatus::Reachable
        } else {
            LinkStatus::Unreachable(code)
        }
    }

    /// Collapse to a publishable URL; anything but Reachable becomes None
    pub fn into_url(self, url: String) -> Option<String> {
        match self {
            LinkStatus::Reachable => Some(url),
            LinkStatus::Unreachable(_) | LinkStatus::Failed(_) => None,
        }
    }
}

pub trait LinkChecker {
    fn check(&self, url: &str) -> LinkStatus;
}

/// Blocking HEAD-request checker against the live wiki
pub struct HttpLinkChecker {
    client: reqwest::blocking::Client,
}

impl HttpLinkChecker {
    pub fn new(settings: &Settings) -> Result<Self> {
        Ok(Self {
            client: client_builder(settings).build()?,
        })
    }
}

fn client_builder(settings: &Settings) -> reqwest::blocking::ClientBuilder {
    // The first response decides; a redirect counts as reachable
    let mut builder = reqwest::blocking::Client::builder()
        .user_agent(settings.user_agent.as_str())
        .redirect(reqwest::redirect::Policy::none());
    if let Some(timeout) = settings.timeout {
        builder = builder.timeout(timeout);
    }
    builder
}

impl LinkChecker for HttpLinkChecker {
    fn check(&self, url: &str) -> LinkStatus {
        log::debug!("HEAD {}", url);
        match self.client.head(url).send() {
            Ok(response) => LinkStatus::from_status(response.status().as_u16()),
            Err(e) => LinkStatus::Failed(e.to_string()),
        }
    }
}

/// Checker used with --offline: nothing is verified, so nothing is published
pub struct OfflineChecker;

impl LinkChecker for OfflineChecker {
    fn check(&self, _url: &str) -> LinkStatus {
        LinkStatus::Failed("offline".to_string())
    }
}
