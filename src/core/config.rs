// ---------------------------------------------------------------------------
// ScoutConfig: file-based config loader (rival-scout.json) with env-var fallback
// ---------------------------------------------------------------------------

/// Credential value that keeps the service in demo mode. Matches the
/// placeholder shipped in example env files, so an unedited checkout
/// serves canned data instead of calling the completion API.
pub const DEMO_KEY_SENTINEL: &str = "your_api_key_here";

/// Top-level config loaded from `rival-scout.json`. Every field is
/// optional in the file; `resolve_*` methods apply env-var fallbacks and
/// defaults. Resolution happens once at startup, when the collaborators
/// are constructed, never at call time.
#[derive(serde::Deserialize, Default, Clone, Debug)]
pub struct ScoutConfig {
    /// Completion API key. Absent or equal to the placeholder sentinel
    /// means demo mode.
    pub llm_api_key: Option<String>,
    /// Completion endpoint, e.g. `https://api.openai.com/v1`.
    pub llm_base_url: Option<String>,
    /// Model name, e.g. `gpt-4-turbo`.
    pub llm_model: Option<String>,
    /// Page-performance scoring API key. Absent disables probes.
    pub pagespeed_api_key: Option<String>,
    /// Maximum competitor analyses in flight at once. Default: 3.
    pub max_concurrent_analyses: Option<usize>,
    /// Cap on concurrent outbound HTTP calls across the process. Default: 32.
    pub outbound_limit: Option<usize>,
    /// Per-request timeout in seconds for the shared HTTP client. Default: 30.
    pub http_timeout_secs: Option<u64>,
    /// Connect timeout in seconds for the shared HTTP client. Default: 10.
    pub http_connect_timeout_secs: Option<u64>,
}

impl ScoutConfig {
    /// Completion API key: JSON field -> `OPENAI_API_KEY` env var -> `None`.
    pub fn resolve_llm_api_key(&self) -> Option<String> {
        if let Some(k) = &self.llm_api_key {
            return Some(k.trim().to_string());
        }
        std::env::var("OPENAI_API_KEY")
            .ok()
            .filter(|v| !v.trim().is_empty())
    }

    /// Completion base URL: JSON field -> `OPENAI_BASE_URL` env var ->
    /// `https://api.openai.com/v1`.
    pub fn resolve_llm_base_url(&self) -> String {
        if let Some(u) = &self.llm_base_url {
            if !u.trim().is_empty() {
                return u.clone();
            }
        }
        std::env::var("OPENAI_BASE_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| "https://api.openai.com/v1".to_string())
    }

    /// Model name: JSON field -> `RIVAL_SCOUT_MODEL` env var -> `gpt-4-turbo`.
    pub fn resolve_llm_model(&self) -> String {
        if let Some(m) = &self.llm_model {
            if !m.trim().is_empty() {
                return m.clone();
            }
        }
        std::env::var("RIVAL_SCOUT_MODEL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| "gpt-4-turbo".to_string())
    }

    /// PageSpeed key: JSON field -> `GOOGLE_PAGESPEED_INSIGHTS_API_KEY` ->
    /// `GOOGLE_API_KEY` -> `PAGESPEED_API_KEY` -> `None`.
    pub fn resolve_pagespeed_api_key(&self) -> Option<String> {
        if let Some(k) = &self.pagespeed_api_key {
            let k = k.trim();
            return if k.is_empty() {
                None
            } else {
                Some(k.to_string())
            };
        }
        for var in [
            "GOOGLE_PAGESPEED_INSIGHTS_API_KEY",
            "GOOGLE_API_KEY",
            "PAGESPEED_API_KEY",
        ] {
            if let Ok(v) = std::env::var(var) {
                if !v.trim().is_empty() {
                    return Some(v.trim().to_string());
                }
            }
        }
        None
    }

    /// Analyzer fan-out width: JSON field -> `RIVAL_SCOUT_MAX_CONCURRENT` -> 3.
    pub fn resolve_max_concurrent_analyses(&self) -> usize {
        if let Some(n) = self.max_concurrent_analyses {
            return n.max(1);
        }
        std::env::var("RIVAL_SCOUT_MAX_CONCURRENT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3)
    }

    /// Outbound HTTP cap: JSON field -> `OUTBOUND_LIMIT` -> 32.
    pub fn resolve_outbound_limit(&self) -> usize {
        if let Some(n) = self.outbound_limit {
            return n.max(1);
        }
        std::env::var("OUTBOUND_LIMIT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(32)
    }

    /// Request timeout: JSON field -> `HTTP_TIMEOUT_SECS` -> 30.
    pub fn resolve_http_timeout_secs(&self) -> u64 {
        if let Some(n) = self.http_timeout_secs {
            return n;
        }
        std::env::var("HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30)
    }

    /// Connect timeout: JSON field -> `HTTP_CONNECT_TIMEOUT_SECS` -> 10.
    pub fn resolve_http_connect_timeout_secs(&self) -> u64 {
        if let Some(n) = self.http_connect_timeout_secs {
            return n;
        }
        std::env::var("HTTP_CONNECT_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10)
    }
}

/// Load `rival-scout.json` from standard locations.
///
/// Search order (first found wins):
/// 1. `RIVAL_SCOUT_CONFIG` env var path
/// 2. `./rival-scout.json` (process cwd)
/// 3. `../rival-scout.json` (repo root when running from a subdir)
///
/// Missing file -> `ScoutConfig::default()` (silent, env fallbacks apply).
/// Parse error -> log a warning, return `ScoutConfig::default()`.
pub fn load_scout_config() -> ScoutConfig {
    let candidates: Vec<std::path::PathBuf> = {
        let mut v = vec![
            std::path::PathBuf::from("rival-scout.json"),
            std::path::PathBuf::from("../rival-scout.json"),
        ];
        if let Ok(env_path) = std::env::var("RIVAL_SCOUT_CONFIG") {
            v.insert(0, std::path::PathBuf::from(env_path));
        }
        v
    };

    for path in &candidates {
        match std::fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str::<ScoutConfig>(&contents) {
                Ok(cfg) => {
                    tracing::info!("rival-scout.json loaded from {}", path.display());
                    return cfg;
                }
                Err(e) => {
                    tracing::warn!(
                        "rival-scout.json parse error at {}: {} - using defaults",
                        path.display(),
                        e
                    );
                    return ScoutConfig::default();
                }
            },
            Err(_) => continue, // file not found at this path, try next
        }
    }

    ScoutConfig::default()
}
