// Runtime configuration read from the environment.
//
// `main` loads a `.env` file first when one exists, so local overrides live
// there. Every variable has a default; a present but unparsable value fails
// startup.

use crate::modules::activities::core::filter::DEFAULT_PAGE_SIZE;
use std::net::SocketAddr;
use thiserror::Error;

pub const BIND_ADDR_VAR: &str = "ACTIVITIES_BIND_ADDR";
pub const PAGE_SIZE_VAR: &str = "ACTIVITIES_PAGE_SIZE";
pub const BLOB_BASE_URL_VAR: &str = "ACTIVITIES_BLOB_BASE_URL";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_BLOB_BASE_URL: &str = "https://activities.s3.amazonaws.com";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} is not valid: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub page_size: u64,
    pub blob_base_url: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_addr = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = bind_addr.parse().map_err(|_| ConfigError::Invalid {
            name: BIND_ADDR_VAR,
            value: bind_addr.clone(),
        })?;

        let page_size = match lookup(PAGE_SIZE_VAR) {
            None => DEFAULT_PAGE_SIZE,
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|size| *size > 0)
                .ok_or(ConfigError::Invalid {
                    name: PAGE_SIZE_VAR,
                    value: raw,
                })?,
        };

        let blob_base_url = lookup(BLOB_BASE_URL_VAR)
            .map(|url| url.trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_BLOB_BASE_URL.to_string());

        Ok(Self {
            bind_addr,
            page_size,
            blob_base_url,
        })
    }
}
