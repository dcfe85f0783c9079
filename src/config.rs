//! Job configuration
//!
//! The job is configured through environment variables, optionally seeded
//! from a `.env` file. Configuration is resolved once at start-up into a
//! [`JobConfig`] value and passed down explicitly; nothing below this module
//! reads the process environment.
//!
//! | Variable            | Meaning                                            |
//! |---------------------|----------------------------------------------------|
//! | `HTTP_URL`          | Base URL of the listing API (required)             |
//! | `HTTP_METHOD`       | Request method, default `GET`                      |
//! | `SUBSCRIPTION_KEY`  | Sent as `Ocp-Apim-Subscription-Key`                |
//! | `HTTP_TIMEOUT_SECS` | Per-request timeout, default none                  |
//! | `HTTP_HEADER_*`     | `Header-Name: value`, attached to every request    |
//! | `ACCO_TYPE_MAP_*`   | `Label: CatalogId`, extra category table entries   |

use crate::error::{Error, Result};
use crate::mapping::CategoryTable;
use crate::types::Method;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Base URL variable
pub const ENV_URL: &str = "HTTP_URL";
/// HTTP method variable
pub const ENV_METHOD: &str = "HTTP_METHOD";
/// Subscription key variable
pub const ENV_SUBSCRIPTION_KEY: &str = "SUBSCRIPTION_KEY";
/// Request timeout variable (seconds)
pub const ENV_TIMEOUT: &str = "HTTP_TIMEOUT_SECS";
/// Prefix of custom header declarations
pub const ENV_HEADER_PREFIX: &str = "HTTP_HEADER_";
/// Prefix of extra category mappings
pub const ENV_CATEGORY_PREFIX: &str = "ACCO_TYPE_MAP_";

/// Header the subscription key is sent in
pub const SUBSCRIPTION_KEY_HEADER: &str = "ocp-apim-subscription-key";

/// Default `.env` file name
const DEFAULT_ENV_FILE: &str = ".env";

/// Fully resolved job configuration
#[derive(Debug, Clone)]
pub struct JobConfig {
    /// Base URL of the listing API
    pub base_url: Url,
    /// Declared request method (logged only, pages are always fetched with GET)
    pub method: Method,
    /// Subscription key, if configured
    pub subscription_key: Option<String>,
    /// Per-request timeout (`None` = client default, no timeout)
    pub timeout: Option<Duration>,
    /// Headers attached to every request
    pub headers: HeaderMap,
    /// Category label lookup
    pub categories: CategoryTable,
}

impl JobConfig {
    /// Load configuration from the process environment
    ///
    /// `env_file` names a `.env` file that must exist; without it, `.env` is
    /// picked up if present. Process variables take precedence over file
    /// entries.
    pub fn from_env(env_file: Option<&Path>) -> Result<Self> {
        Self::from_vars(collect_vars(env_file)?)
    }

    /// Build configuration from key/value pairs
    pub fn from_vars<I, K, V>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars: BTreeMap<String, String> = vars
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();

        let raw_url = non_empty(&vars, ENV_URL).ok_or_else(|| Error::missing_field(ENV_URL))?;
        let base_url = parse_base_url(raw_url)?;

        let method = match non_empty(&vars, ENV_METHOD) {
            Some(raw) => raw.parse()?,
            None => Method::default(),
        };

        let timeout = non_empty(&vars, ENV_TIMEOUT)
            .map(|raw| {
                raw.parse::<u64>()
                    .map(Duration::from_secs)
                    .map_err(|e| Error::invalid_value(ENV_TIMEOUT, e.to_string()))
            })
            .transpose()?;

        let mut headers = HeaderMap::new();
        for (variable, declaration) in vars.range(ENV_HEADER_PREFIX.to_string()..) {
            if !variable.starts_with(ENV_HEADER_PREFIX) {
                break;
            }
            let (name, value) = parse_header_declaration(variable, declaration)?;
            headers.insert(name, value);
        }

        let subscription_key = non_empty(&vars, ENV_SUBSCRIPTION_KEY).map(str::to_string);
        if let Some(key) = &subscription_key {
            let name = HeaderName::from_static(SUBSCRIPTION_KEY_HEADER);
            if !headers.contains_key(&name) {
                let mut value = HeaderValue::from_str(key)
                    .map_err(|e| Error::invalid_value(ENV_SUBSCRIPTION_KEY, e.to_string()))?;
                value.set_sensitive(true);
                headers.insert(name, value);
            }
        }

        let mut categories = CategoryTable::standard();
        for (variable, declaration) in vars.range(ENV_CATEGORY_PREFIX.to_string()..) {
            if !variable.starts_with(ENV_CATEGORY_PREFIX) {
                break;
            }
            let (label, id) = split_declaration(variable, declaration)
                .map_err(|_| Error::invalid_value(variable.as_str(), "expected 'Label: CatalogId'"))?;
            categories.insert(label, id);
        }

        Ok(Self {
            base_url,
            method,
            subscription_key,
            timeout,
            headers,
            categories,
        })
    }
}

/// Trimmed value of `key`, if set and not blank
fn non_empty<'a>(vars: &'a BTreeMap<String, String>, key: &str) -> Option<&'a str> {
    vars.get(key).map(|v| v.trim()).filter(|v| !v.is_empty())
}

/// Parse and check the base URL
fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw)?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(Error::invalid_value(
            ENV_URL,
            format!("unsupported scheme '{other}'"),
        )),
    }
}

/// Split a `Key: value` declaration on its first colon, trimming both sides
fn split_declaration<'a>(variable: &str, declaration: &'a str) -> Result<(&'a str, &'a str)> {
    let (key, value) = declaration
        .split_once(':')
        .ok_or_else(|| Error::invalid_header(variable, "expected 'Name: value'"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(Error::invalid_header(variable, "empty name"));
    }
    Ok((key, value.trim()))
}

/// Parse one `HTTP_HEADER_*` declaration
///
/// The header name is the text before the first colon; the variable-name
/// suffix is only a label. Values are marked sensitive so they stay out of
/// debug output.
pub fn parse_header_declaration(
    variable: &str,
    declaration: &str,
) -> Result<(HeaderName, HeaderValue)> {
    let (name, value) = split_declaration(variable, declaration)?;
    let name = HeaderName::from_bytes(name.as_bytes())
        .map_err(|e| Error::invalid_header(variable, format!("invalid name '{name}': {e}")))?;
    let mut value = HeaderValue::from_str(value)
        .map_err(|e| Error::invalid_header(variable, format!("invalid value: {e}")))?;
    value.set_sensitive(true);
    Ok((name, value))
}

/// Gather variables from the `.env` file and the process environment
///
/// Process variables override file entries with the same key. Variables
/// whose name or value is not valid UTF-8 are skipped.
pub fn collect_vars(env_file: Option<&Path>) -> Result<BTreeMap<String, String>> {
    let mut vars: BTreeMap<String, String> = match env_file {
        Some(path) => read_env_file(path)?.into_iter().collect(),
        None => read_default_env_file().into_iter().collect(),
    };

    vars.extend(
        std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?))),
    );
    Ok(vars)
}

/// Read entries from an explicit `.env` file without touching the process
/// environment
pub fn read_env_file(path: &Path) -> Result<Vec<(String, String)>> {
    let iter = dotenvy::from_path_iter(path).map_err(|e| {
        if e.not_found() {
            Error::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            Error::config(format!("Failed to read {}: {e}", path.display()))
        }
    })?;

    iter.map(|entry| {
        entry.map_err(|e| Error::config(format!("Invalid entry in {}: {e}", path.display())))
    })
    .collect()
}

/// Read `.env` if present; problems are logged, never fatal
fn read_default_env_file() -> Vec<(String, String)> {
    let iter = match dotenvy::from_filename_iter(DEFAULT_ENV_FILE) {
        Ok(iter) => iter,
        Err(e) if e.not_found() => {
            debug!("No {} file found, using process environment", DEFAULT_ENV_FILE);
            return Vec::new();
        }
        Err(e) => {
            warn!("Error loading {} file: {}", DEFAULT_ENV_FILE, e);
            return Vec::new();
        }
    };

    match iter.collect::<std::result::Result<Vec<_>, _>>() {
        Ok(entries) => entries,
        Err(e) => {
            warn!("Error loading {} file: {}", DEFAULT_ENV_FILE, e);
            Vec::new()
        }
    }
}
