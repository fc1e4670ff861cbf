use serde::{Deserialize, Serialize};
use std::future::Future;
use tokio::sync::OnceCell;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api";
pub const DEFAULT_POST_LOGIN_URL: &str = "/dashboard";

/// Runtime settings supplied by the hosting page or `config.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default, alias = "API_BASE_URL")]
    pub api_base_url: Option<String>,
    #[serde(default, alias = "POST_LOGIN_URL")]
    pub post_login_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub api_base_url: String,
    pub post_login_url: String,
}

impl RuntimeConfig {
    /// Fields set on `self` win; unset ones are taken from `fallback`.
    pub fn or(self, fallback: RuntimeConfig) -> RuntimeConfig {
        RuntimeConfig {
            api_base_url: non_blank(self.api_base_url).or(non_blank(fallback.api_base_url)),
            post_login_url: non_blank(self.post_login_url).or(non_blank(fallback.post_login_url)),
        }
    }

    pub fn resolve(self) -> ResolvedConfig {
        let api_base_url = non_blank(self.api_base_url)
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let post_login_url =
            non_blank(self.post_login_url).unwrap_or_else(|| DEFAULT_POST_LOGIN_URL.to_string());
        ResolvedConfig {
            api_base_url,
            post_login_url,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

static RESOLVED: OnceCell<ResolvedConfig> = OnceCell::const_new();

/// Resolves the config once per page. Concurrent first callers share one load.
pub async fn resolved() -> ResolvedConfig {
    resolve_once(&RESOLVED, load).await
}

async fn resolve_once<F, Fut>(cell: &OnceCell<ResolvedConfig>, load: F) -> ResolvedConfig
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = RuntimeConfig>,
{
    cell.get_or_init(|| async move { load().await.resolve() })
        .await
        .clone()
}

pub async fn await_api_base_url() -> String {
    resolved().await.api_base_url
}

pub async fn await_post_login_url() -> String {
    resolved().await.post_login_url
}

pub async fn init() {
    let cfg = resolved().await;
    log::info!(
        "runtime config: api_base_url={} post_login_url={}",
        cfg.api_base_url,
        cfg.post_login_url
    );
}

#[cfg(target_arch = "wasm32")]
async fn load() -> RuntimeConfig {
    // window.__CMS_ENV (env.js) takes precedence over window.__CMS_CONFIG.
    let globals = browser::read_global("__CMS_ENV")
        .unwrap_or_default()
        .or(browser::read_global("__CMS_CONFIG").unwrap_or_default());
    if globals.api_base_url.is_some() {
        return globals;
    }
    match browser::fetch_config_json().await {
        Some(file) => {
            browser::write_window_config(&file);
            globals.or(file)
        }
        None => {
            log::debug!("no config.json found; using defaults");
            globals
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
async fn load() -> RuntimeConfig {
    RuntimeConfig::default()
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::RuntimeConfig;

    pub fn read_global(name: &str) -> Option<RuntimeConfig> {
        let window = web_sys::window()?;
        let value = js_sys::Reflect::get(&window, &name.into()).ok()?;
        if value.is_undefined() || value.is_null() {
            return None;
        }
        let raw = String::from(js_sys::JSON::stringify(&value).ok()?);
        match serde_json::from_str(&raw) {
            Ok(cfg) => Some(cfg),
            Err(err) => {
                log::warn!("ignoring malformed window.{}: {}", name, err);
                None
            }
        }
    }

    pub fn write_window_config(cfg: &RuntimeConfig) {
        let (Some(window), Ok(raw)) = (web_sys::window(), serde_json::to_string(cfg)) else {
            return;
        };
        if let Ok(value) = js_sys::JSON::parse(&raw) {
            let _ = js_sys::Reflect::set(&window, &"__CMS_CONFIG".into(), &value);
        }
    }

    pub async fn fetch_config_json() -> Option<RuntimeConfig> {
        let href = web_sys::window()?.location().href().ok()?;
        let url = reqwest::Url::parse(&href).ok()?.join("config.json").ok()?;
        let resp = reqwest::get(url).await.ok()?;
        if !resp.status().is_success() {
            return None;
        }
        resp.json::<RuntimeConfig>().await.ok()
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn empty_config_resolves_to_defaults() {
        let cfg = RuntimeConfig::default().resolve();
        assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(cfg.post_login_url, DEFAULT_POST_LOGIN_URL);
    }

    #[test]
    fn resolve_trims_trailing_slash_and_blank_values() {
        let cfg = RuntimeConfig {
            api_base_url: Some("https://cms.example.com/api/".into()),
            post_login_url: Some("   ".into()),
        }
        .resolve();
        assert_eq!(cfg.api_base_url, "https://cms.example.com/api");
        assert_eq!(cfg.post_login_url, DEFAULT_POST_LOGIN_URL);
    }

    #[test]
    fn or_prefers_own_fields() {
        let env = RuntimeConfig {
            api_base_url: Some("https://env/api".into()),
            post_login_url: None,
        };
        let file = RuntimeConfig {
            api_base_url: Some("https://file/api".into()),
            post_login_url: Some("/pages".into()),
        };
        let merged = env.or(file);
        assert_eq!(merged.api_base_url.as_deref(), Some("https://env/api"));
        assert_eq!(merged.post_login_url.as_deref(), Some("/pages"));
    }

    #[test]
    fn deserializes_upper_and_lower_case_keys() {
        let upper: RuntimeConfig =
            serde_json::from_str(r#"{"API_BASE_URL":"https://a/api","POST_LOGIN_URL":"/home"}"#)
                .unwrap();
        assert_eq!(upper.api_base_url.as_deref(), Some("https://a/api"));
        assert_eq!(upper.post_login_url.as_deref(), Some("/home"));

        let lower: RuntimeConfig = serde_json::from_str(r#"{"api_base_url":"https://b/api"}"#).unwrap();
        assert_eq!(lower.api_base_url.as_deref(), Some("https://b/api"));
        assert!(lower.post_login_url.is_none());
    }

    #[tokio::test]
    async fn concurrent_first_callers_share_one_load() {
        let cell = OnceCell::new();
        let loads = AtomicUsize::new(0);
        let loads = &loads;
        let load = move || async move {
            loads.fetch_add(1, Ordering::SeqCst);
            tokio::task::yield_now().await;
            RuntimeConfig {
                api_base_url: Some("https://cms.example.com/api".into()),
                post_login_url: None,
            }
        };

        let (first, second) = tokio::join!(resolve_once(&cell, load), resolve_once(&cell, load));

        assert_eq!(loads.load(Ordering::SeqCst), 1);
        assert_eq!(first, second);
        assert_eq!(first.api_base_url, "https://cms.example.com/api");
        assert_eq!(resolve_once(&cell, load).await, first);
        assert_eq!(loads.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn host_resolution_uses_defaults() {
        assert_eq!(await_api_base_url().await, DEFAULT_API_BASE_URL);
        assert_eq!(await_post_login_url().await, DEFAULT_POST_LOGIN_URL);
    }
}
