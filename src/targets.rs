use std::path::Path;

use serde::Serialize;

use crate::error::ConfigurationError;

/// Fixed address template: `{prefix}{suffix}:{port}`
#[derive(Debug, Clone)]
pub struct AddressTemplate {
    pub prefix: String,
    pub port: u16,
}

impl AddressTemplate {
    pub fn url_for(&self, suffix: u32) -> String {
        format!("{}{}:{}", self.prefix, suffix, self.port)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub user: String,
    pub password: String,
}

/// One backend server this run provisions against
#[derive(Debug, Clone, Serialize)]
pub struct Target {
    pub suffix: u32,
    pub url: String,
    #[serde(skip)]
    pub credentials: Credentials,
}

/// Split on commas, trim, and keep only tokens made entirely of ASCII digits.
/// Empty and non-numeric tokens are dropped without a warning.
pub fn parse_suffixes(raw: &str) -> Vec<u32> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty() && t.chars().all(|c| c.is_ascii_digit()))
        .filter_map(|t| match t.parse::<u32>() {
            Ok(n) => Some(n),
            Err(_) => {
                tracing::debug!("Ignoring out-of-range target token {}", t);
                None
            }
        })
        .collect()
}

/// Resolve the ordered target list from a comma-separated source.
/// Fails before any backend I/O if nothing valid remains.
pub fn resolve_targets(
    raw: &str,
    template: &AddressTemplate,
    credentials: &Credentials,
) -> Result<Vec<Target>, ConfigurationError> {
    let suffixes = parse_suffixes(raw);
    if suffixes.is_empty() {
        return Err(ConfigurationError::new(
            "no valid target suffixes found in target source",
        ));
    }

    Ok(suffixes
        .into_iter()
        .map(|suffix| Target {
            suffix,
            url: template.url_for(suffix),
            credentials: credentials.clone(),
        })
        .collect())
}

/// Read the raw target source; resolution happens at run start
pub fn read_target_source(path: &Path) -> Result<String, ConfigurationError> {
    std::fs::read_to_string(path).map_err(|e| {
        ConfigurationError::new(format!("failed to read targets file {}: {}", path.display(), e))
    })
}
