use std::{env, fmt::Display, path::Path, str::FromStr, time::Duration};

use serde::Deserialize;
use url::Url;

use crate::error::Error;

pub const DEFAULT_BASE_URL: &str = "https://www.studierendenwerk-goettingen.de/fileadmin/templates/php/mensaspeiseplan/cached/";

pub const CONFIG_PATH_VAR: &str = "GOE_LUNCH_CONFIG";

/// Language of the cached page, also its first path segment.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Lang {
    #[default]
    En,
    De,
}

impl Lang {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::De => "de",
        }
    }
}

impl Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Lang {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Self::En),
            "de" => Ok(Self::De),
            other => Err(Error::Config(format!(
                "unsupported lang `{other}`, expected `en` or `de`"
            ))),
        }
    }
}

impl<'de> Deserialize<'de> for Lang {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Per-instance settings. Handed to every command invocation, never read
/// from global state.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub lang: Lang,
    /// canteen query used when the command names none
    pub default_canteen: String,
    pub max_items: usize,
    /// seconds
    pub request_timeout: u64,
    pub base_url: Url,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lang: Lang::En,
            default_canteen: String::new(),
            max_items: 30,
            request_timeout: 30,
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base url should be valid"),
        }
    }
}

impl Config {
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }

    pub fn from_toml(s: &str) -> crate::Result<Self> {
        let config: Self = toml::from_str(s).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> crate::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("reading {}: {e}", path.display())))?;
        Self::from_toml(&text)
    }

    /// File named by `GOE_LUNCH_CONFIG` (or defaults), then `GOE_LUNCH_*`
    /// variable overrides.
    pub fn load() -> crate::Result<Self> {
        let mut config = match env::var(CONFIG_PATH_VAR) {
            Ok(path) => Self::from_file(path)?,
            Err(_) => {
                log::warn!("env var {CONFIG_PATH_VAR} not set, using default config.");
                Self::default()
            }
        };
        config.apply_overrides(|key| env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    pub fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) -> crate::Result<()> {
        if let Some(lang) = var("GOE_LUNCH_LANG") {
            self.lang = lang.parse()?;
        }
        if let Some(canteen) = var("GOE_LUNCH_DEFAULT_CANTEEN") {
            self.default_canteen = canteen;
        }
        if let Some(max_items) = var("GOE_LUNCH_MAX_ITEMS") {
            self.max_items = parse_number("GOE_LUNCH_MAX_ITEMS", &max_items)?;
        }
        if let Some(timeout) = var("GOE_LUNCH_REQUEST_TIMEOUT") {
            self.request_timeout = parse_number("GOE_LUNCH_REQUEST_TIMEOUT", &timeout)?;
        }
        Ok(())
    }

    pub fn validate(&self) -> crate::Result<()> {
        if self.max_items == 0 {
            return Err(Error::Config("max_items must be at least 1".to_string()));
        }
        if self.request_timeout == 0 {
            return Err(Error::Config(
                "request_timeout must be at least 1 second".to_string(),
            ));
        }
        if !self.base_url.path().ends_with('/') {
            return Err(Error::Config(format!(
                "base_url `{}` must end with `/`",
                self.base_url
            )));
        }
        Ok(())
    }
}

fn parse_number<T: FromStr>(key: &str, value: &str) -> crate::Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| Error::Config(format!("{key} should be a positive integer, got `{value}`")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.lang, Lang::En);
        assert_eq!(config.max_items, 30);
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(config.default_canteen.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_toml_partial() {
        let config = Config::from_toml(
            r#"
            lang = "de"
            default_canteen = "Zentralmensa"
            max_items = 12
            "#,
        )
        .unwrap();
        assert_eq!(config.lang, Lang::De);
        assert_eq!(config.default_canteen, "Zentralmensa");
        assert_eq!(config.max_items, 12);
        assert_eq!(config.request_timeout, 30);
        assert_eq!(config.base_url.as_str(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_lang_spelling_matches_env_override() {
        let config = Config::from_toml(r#"lang = "DE""#).unwrap();
        assert_eq!(config.lang, Lang::De);
        let mut overridden = Config::default();
        overridden
            .apply_overrides(|key| (key == "GOE_LUNCH_LANG").then(|| "DE".to_string()))
            .unwrap();
        assert_eq!(overridden.lang, config.lang);
    }

    #[test]
    fn test_from_toml_rejects_bad_values() {
        assert!(matches!(Config::from_toml(r#"lang = "fr""#), Err(Error::Config(_))));
        assert!(matches!(Config::from_toml("max_items = 0"), Err(Error::Config(_))));
        assert!(matches!(
            Config::from_toml(r#"base_url = "http://localhost:8080/cached""#),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("GOE_LUNCH_LANG", "DE"),
            ("GOE_LUNCH_DEFAULT_CANTEEN", "CGiN"),
            ("GOE_LUNCH_MAX_ITEMS", " 5 "),
        ]
        .into_iter()
        .collect();
        let mut config = Config::default();
        config
            .apply_overrides(|key| vars.get(key).map(ToString::to_string))
            .unwrap();
        assert_eq!(config.lang, Lang::De);
        assert_eq!(config.default_canteen, "CGiN");
        assert_eq!(config.max_items, 5);
        assert_eq!(config.request_timeout, 30);

        let result = config.apply_overrides(|key| {
            (key == "GOE_LUNCH_REQUEST_TIMEOUT").then(|| "soon".to_string())
        });
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
