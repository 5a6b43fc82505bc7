//! Credential file resolution and parsing

use log::debug;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{api, credentials};
use crate::error::{GwError, Result};

/// Resolved API credentials (immutable after startup)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub token: String,
    pub org_id: Option<String>,
    /// Always normalized, see [`normalize_base_url`]
    pub base_url: String,
}

/// Un-normalized fields picked out of the file by one parser
#[derive(Debug, Default)]
struct RawFields {
    token: Option<String>,
    org_id: Option<String>,
    base_url: Option<String>,
}

type FormatParser = fn(&str) -> Option<RawFields>;

/// Supported formats, tried in order; the first accepted result wins
const FORMAT_PARSERS: &[(&str, FormatParser)] = &[
    ("json", parse_json_object),
    ("key=value", parse_key_value_lines),
    ("positional", parse_positional_lines),
];

/// Normalize a base URL so it always ends with the API version suffix
///
/// `api.mist.com`, `https://api.mist.com/` and `https://api.mist.com/api/v1`
/// all become `https://api.mist.com/api/v1`. Blank input stays blank.
pub fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let with_scheme = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("{}{}", api::DEFAULT_SCHEME, trimmed)
    };

    let base = with_scheme.trim_end_matches('/');
    if base.ends_with(api::VERSION_SUFFIX) {
        base.to_string()
    } else {
        format!("{}{}", base, api::VERSION_SUFFIX)
    }
}

/// Parse credential file contents, trying every supported format
pub fn parse_credentials(raw: &str) -> Option<Credentials> {
    let raw = raw.trim();
    FORMAT_PARSERS.iter().find_map(|(format, parser)| {
        let creds = parser(raw).and_then(accept)?;
        debug!("Credential file parsed as {} format", format);
        Some(creds)
    })
}

/// Accept a parse attempt only when both token and base URL are present
fn accept(fields: RawFields) -> Option<Credentials> {
    let token = non_empty(fields.token)?;
    let base_url = non_empty(fields.base_url)?;
    Some(Credentials {
        token,
        org_id: non_empty(fields.org_id),
        base_url: normalize_base_url(&base_url),
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_json_object(raw: &str) -> Option<RawFields> {
    let value: serde_json::Value = serde_json::from_str(raw).ok()?;
    let object = value.as_object()?;

    let pick = |keys: &[&str]| {
        keys.iter()
            .filter_map(|k| object.get(*k).and_then(|v| v.as_str()))
            .find(|v| !v.is_empty())
            .map(str::to_string)
    };

    Some(RawFields {
        token: pick(credentials::JSON_TOKEN_KEYS),
        org_id: pick(credentials::JSON_ORG_KEYS),
        base_url: pick(credentials::JSON_BASE_URL_KEYS),
    })
}

/// Meaningful lines: trimmed, without blanks and `#` comments
fn content_lines(raw: &str) -> Vec<&str> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect()
}

fn parse_key_value_lines(raw: &str) -> Option<RawFields> {
    let pairs: HashMap<String, String> = content_lines(raw)
        .into_iter()
        .filter_map(|line| line.split_once('='))
        .map(|(k, v)| (k.trim().to_lowercase(), v.trim().to_string()))
        .collect();

    if pairs.is_empty() {
        return None;
    }

    let pick = |keys: &[&str]| {
        keys.iter()
            .filter_map(|k| pairs.get(*k))
            .find(|v| !v.is_empty())
            .cloned()
    };

    Some(RawFields {
        token: pick(credentials::KV_TOKEN_KEYS),
        org_id: pick(credentials::KV_ORG_KEYS),
        base_url: pick(credentials::KV_BASE_URL_KEYS),
    })
}

fn parse_positional_lines(raw: &str) -> Option<RawFields> {
    match content_lines(raw).as_slice() {
        [token, org_id, base_url, ..] => Some(RawFields {
            token: Some(token.to_string()),
            org_id: Some(org_id.to_string()),
            base_url: Some(base_url.to_string()),
        }),
        _ => None,
    }
}

/// Credential file resolution with fallback logic
pub struct CredentialResolver {
    path: PathBuf,
}

impl CredentialResolver {
    /// Create a resolver for an explicit file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Locate the credential file from multiple sources:
    /// 1. CLI argument / environment variable (if provided)
    /// 2. Working directory
    /// 3. User config directory
    ///
    /// Falls back to the working-directory path so the error names it.
    pub fn locate(cli_path: Option<&Path>) -> Self {
        if let Some(path) = cli_path {
            debug!("Using credential file from CLI argument: {}", path.display());
            return Self::new(path);
        }

        let local = PathBuf::from(credentials::FILE_NAME);
        if local.exists() {
            debug!("Using credential file from working directory");
            return Self::new(local);
        }

        if let Some(user) = Self::user_config_path().filter(|p| p.exists()) {
            debug!("Using credential file from config dir: {}", user.display());
            return Self::new(user);
        }

        debug!("No credential file found, defaulting to {}", local.display());
        Self::new(local)
    }

    /// Path this resolver reads from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the credential file
    pub fn resolve(&self) -> Result<Credentials> {
        if !self.path.exists() {
            return Err(GwError::Credentials(format!(
                "{} not found.\nExpected at: {}",
                credentials::FILE_NAME,
                self.path.display()
            )));
        }

        let raw = fs::read_to_string(&self.path).map_err(|e| {
            GwError::Credentials(format!(
                "Could not read credential file {}: {}",
                self.path.display(),
                e
            ))
        })?;

        if raw.trim().is_empty() {
            return Err(GwError::Credentials(format!(
                "{} is empty.",
                self.path.display()
            )));
        }

        parse_credentials(&raw).ok_or_else(|| GwError::Credentials(self.unparseable_message()))
    }

    fn unparseable_message(&self) -> String {
        format!(
            "Could not parse token/org/base_url from {}.\n\
             Supported formats:\n\
             \x20 1) key=value lines: token=..., org_id=..., base_url=...\n\
             \x20 2) three lines: <token>, <org_id>, <base_url>\n\
             \x20 3) JSON dict with token/org_id/base_url",
            self.path.display()
        )
    }

    fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| {
            p.join(credentials::CONFIG_DIR_NAME)
                .join(credentials::FILE_NAME)
        })
    }
}
