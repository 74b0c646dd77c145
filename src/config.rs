use std::env;

use thiserror::Error;

const DEFAULT_PAGE_SIZE: u32 = 100;
const DEFAULT_OUTPUT: &str = "memos.md";

#[derive(Error, Debug)]
pub enum Error {
    #[error("environment variable {0} is not set")]
    MissingVar(&'static str),
    #[error("MEMOS_PAGE_SIZE must be a positive integer, got '{0}'")]
    InvalidPageSize(String),
}

/// Resolved settings for a single run. Built once in `main` and passed
/// down by reference, never stored globally.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub token: String,
    pub user: String,
    pub page_size: u32,
    pub default_output: String,
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        let base_url = require("MEMOS_URL")?;
        let token = require("MEMOS_TOKEN")?;
        let user = require("MEMOS_USER")?;
        let page_size = match env::var("MEMOS_PAGE_SIZE") {
            Ok(raw) => raw
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or(Error::InvalidPageSize(raw))?,
            Err(_) => DEFAULT_PAGE_SIZE,
        };
        let default_output =
            env::var("MEMOS_OUTPUT").unwrap_or_else(|_| DEFAULT_OUTPUT.to_string());

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
            user,
            page_size,
            default_output,
        })
    }
}

fn require(name: &'static str) -> Result<String, Error> {
    env::var(name).map_err(|_| Error::MissingVar(name))
}
