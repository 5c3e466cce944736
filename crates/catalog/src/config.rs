//! Catalog behavior selection.
//!
//! The two behaviors cover the same feature, so exactly one runs per page.
//! Selection is configuration, not code: deployments flip the mode without
//! touching the widget.

use serde::{Deserialize, Serialize};

pub const MODE_ENV_VAR: &str = "VITRINE_CATALOG_MODE";

/// Which catalog behavior a page runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogMode {
    /// Filter and sort in place; no navigation.
    #[default]
    Local,
    /// Rewrite the query string and reload.
    Redirect,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub mode: CatalogMode,
}

impl CatalogConfig {
    /// Reads `VITRINE_CATALOG_MODE`. Unset means the default mode.
    pub fn from_env() -> Self {
        let raw = std::env::var(MODE_ENV_VAR).unwrap_or_default();
        if raw.is_empty() {
            return Self::default();
        }

        Self::from_mode_token(&raw)
    }

    /// `local` or `redirect`, case-insensitive. Anything else warns and
    /// falls back to the default mode.
    pub fn from_mode_token(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "local" => Self {
                mode: CatalogMode::Local,
            },
            "redirect" => Self {
                mode: CatalogMode::Redirect,
            },
            other => {
                tracing::warn!(mode = other, "unrecognized catalog mode, using local");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mode_is_local() {
        assert_eq!(CatalogConfig::default().mode, CatalogMode::Local);
    }

    #[test]
    fn mode_token_is_case_insensitive() {
        assert_eq!(
            CatalogConfig::from_mode_token("REDIRECT").mode,
            CatalogMode::Redirect
        );
        assert_eq!(
            CatalogConfig::from_mode_token("  local ").mode,
            CatalogMode::Local
        );
    }

    #[test]
    fn unrecognized_token_falls_back_to_local() {
        assert_eq!(
            CatalogConfig::from_mode_token("server").mode,
            CatalogMode::Local
        );
    }

    #[test]
    fn mode_serializes_to_lowercase_tokens() {
        assert_eq!(
            serde_json::to_string(&CatalogMode::Redirect).unwrap(),
            "\"redirect\""
        );
    }
}
