// src/core/net.rs
//
// Blocking JSON GETs against an XNAT server.

use std::time::Duration;

use reqwest::blocking::Client;
use serde_json::Value;

use crate::config::consts::{REQUEST_TIMEOUT_SECS, USER_AGENT};
use crate::config::options::ServerOptions;
use crate::error::{Error, Result};

/// Anything that can answer a server path with parsed JSON.
/// `path` starts with `/` and carries no query; `format=json` is implied.
pub trait JsonSource {
    fn get_json(&self, path: &str) -> Result<Value>;
}

impl<T: JsonSource + ?Sized> JsonSource for &T {
    fn get_json(&self, path: &str) -> Result<Value> {
        (**self).get_json(path)
    }
}

pub struct XnatClient {
    http: Client,
    base: String,
    user: String,
    password: String,
}

impl XnatClient {
    pub fn new(base_url: &str, user: &str, password: &str) -> Result<Self> {
        let base = base_url.trim().trim_end_matches('/');
        if base.is_empty() {
            return Err(Error::Config(s!("XNAT server URL is empty")));
        }
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            http,
            base: s!(base),
            user: s!(user),
            password: s!(password),
        })
    }

    pub fn from_options(opts: &ServerOptions) -> Result<Self> {
        Self::new(&opts.url, &opts.user, &opts.password)
    }

    pub fn base_url(&self) -> &str {
        &self.base
    }
}

impl JsonSource for XnatClient {
    fn get_json(&self, path: &str) -> Result<Value> {
        let url = join!(&self.base, path);
        logd!("GET {url}?format=json");

        let resp = self
            .http
            .get(&url)
            .query(&[("format", "json")])
            .basic_auth(&self.user, Some(&self.password))
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Status { status: status.as_u16(), url });
        }

        let body = resp.text()?;
        Ok(serde_json::from_str(&body)?)
    }
}
