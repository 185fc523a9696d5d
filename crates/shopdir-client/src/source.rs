//! Transport sources for the shop list, in the order they are tried.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::Url;
use shopdir_core::app_config::PROXY_URL_PLACEHOLDER;
use shopdir_core::AppConfig;

use crate::error::LoadError;

/// Characters left unescaped by `encodeURIComponent`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub const PRIMARY_SOURCE_NAME: &str = "primary";
pub const PROXY_SOURCE_NAME: &str = "proxy";

/// One place the shop list can be fetched from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopSource {
    pub name: String,
    pub url: Url,
}

impl ShopSource {
    /// The API endpoint itself.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::InvalidSourceUrl`] if `api_url` does not parse.
    pub fn primary(api_url: &str) -> Result<Self, LoadError> {
        Ok(Self {
            name: PRIMARY_SOURCE_NAME.to_owned(),
            url: parse_url(api_url)?,
        })
    }

    /// The same request routed through a proxy: `template` with its `{url}`
    /// placeholder replaced by the percent-encoded `target`.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::InvalidSourceUrl`] if the template has no
    /// placeholder or the resulting URL does not parse.
    pub fn proxied(template: &str, target: &Url) -> Result<Self, LoadError> {
        if !template.contains(PROXY_URL_PLACEHOLDER) {
            return Err(LoadError::InvalidSourceUrl {
                url: template.to_owned(),
                reason: format!("proxy template has no {PROXY_URL_PLACEHOLDER} placeholder"),
            });
        }
        let encoded = utf8_percent_encode(target.as_str(), COMPONENT).to_string();
        let url = template.replace(PROXY_URL_PLACEHOLDER, &encoded);
        Ok(Self {
            name: PROXY_SOURCE_NAME.to_owned(),
            url: parse_url(&url)?,
        })
    }
}

/// Primary endpoint first, then the proxy fallback when configured.
///
/// # Errors
///
/// Returns [`LoadError::InvalidSourceUrl`] if either URL is malformed.
pub fn sources_from_config(config: &AppConfig) -> Result<Vec<ShopSource>, LoadError> {
    let primary = ShopSource::primary(&config.api_url)?;
    let mut sources = Vec::with_capacity(2);
    if let Some(template) = config.proxy_template.as_deref() {
        let proxy = ShopSource::proxied(template, &primary.url)?;
        sources.push(primary);
        sources.push(proxy);
    } else {
        sources.push(primary);
    }
    Ok(sources)
}

fn parse_url(raw: &str) -> Result<Url, LoadError> {
    Url::parse(raw.trim()).map_err(|e| LoadError::InvalidSourceUrl {
        url: raw.to_owned(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use shopdir_core::Environment;

    use super::*;

    fn config(proxy_template: Option<&str>) -> AppConfig {
        AppConfig {
            env: Environment::Test,
            log_level: "info".to_owned(),
            api_url: "https://api.ultraman-cardgame.com/api/v1/us/shops".to_owned(),
            proxy_template: proxy_template.map(str::to_owned),
            request_timeout_secs: 5,
            user_agent: "shopdir-test/0.1".to_owned(),
        }
    }

    #[test]
    fn proxied_url_encodes_target() {
        let target = Url::parse("https://api.example.com/v1/shops?lang=en").unwrap();
        let source = ShopSource::proxied("https://proxy.example.com/raw?url={url}", &target)
            .expect("valid proxy");
        assert_eq!(source.name, "proxy");
        assert_eq!(
            source.url.as_str(),
            "https://proxy.example.com/raw?url=https%3A%2F%2Fapi.example.com%2Fv1%2Fshops%3Flang%3Den"
        );
    }

    #[test]
    fn proxied_rejects_template_without_placeholder() {
        let target = Url::parse("https://api.example.com/").unwrap();
        let err = ShopSource::proxied("https://proxy.example.com/", &target).unwrap_err();
        assert!(matches!(err, LoadError::InvalidSourceUrl { .. }));
    }

    #[test]
    fn primary_rejects_invalid_url() {
        let err = ShopSource::primary("not a url").unwrap_err();
        assert!(
            matches!(err, LoadError::InvalidSourceUrl { ref url, .. } if url == "not a url"),
            "expected InvalidSourceUrl, got: {err:?}"
        );
    }

    #[test]
    fn sources_are_primary_then_proxy() {
        let sources =
            sources_from_config(&config(Some("https://api.allorigins.win/raw?url={url}"))).unwrap();
        let names: Vec<&str> = sources.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["primary", "proxy"]);
        assert!(sources[1]
            .url
            .as_str()
            .starts_with("https://api.allorigins.win/raw?url=https%3A%2F%2Fapi.ultraman-cardgame.com"));
    }

    #[test]
    fn no_proxy_template_means_single_source() {
        let sources = sources_from_config(&config(None)).unwrap();
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].name, "primary");
    }
}
