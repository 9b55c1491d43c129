use crate::catalog::DEFAULT_REDIRECT_URL;
use crate::environment::EnvironmentClass;

pub const DEFAULT_REVEAL_DELAY_MS: u32 = 15_000;
pub const DEFAULT_DRAG_GRACE_MS: u32 = 50;
const MAX_REVEAL_DELAY_MS: u32 = 10 * 60 * 1000;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid reveal_ms value '{0}'")]
    RevealDelay(String),
    #[error("reveal_ms {found} exceeds maximum {max}")]
    RevealDelayTooLarge { found: u32, max: u32 },
    #[error("invalid env value '{0}' (expected normal or restricted)")]
    ForcedEnvironment(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    pub redirect_url: String,
    pub reveal_delay_ms: u32,
    pub drag_grace_ms: u32,
    pub force_env: Option<EnvironmentClass>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            redirect_url: DEFAULT_REDIRECT_URL.to_string(),
            reveal_delay_ms: DEFAULT_REVEAL_DELAY_MS,
            drag_grace_ms: DEFAULT_DRAG_GRACE_MS,
            force_env: None,
        }
    }
}

impl SiteConfig {
    pub fn from_query(search: &str) -> (Self, Vec<ConfigError>) {
        let mut config = Self::default();
        let mut errors = Vec::new();
        let raw = search.trim().trim_start_matches('?');
        for chunk in raw.split('&') {
            let chunk = chunk.trim();
            if chunk.is_empty() {
                continue;
            }
            let mut iter = chunk.splitn(2, '=');
            let key = iter.next().unwrap_or("").trim();
            let value = iter.next().unwrap_or("").trim();
            let applied = if key.eq_ignore_ascii_case("reveal_ms") {
                parse_reveal_delay(value).map(|delay| config.reveal_delay_ms = delay)
            } else if key.eq_ignore_ascii_case("env") {
                parse_forced_env(value).map(|env| config.force_env = Some(env))
            } else {
                Ok(())
            };
            if let Err(err) = applied {
                errors.push(err);
            }
        }
        (config, errors)
    }

    pub fn environment(&self, detected: EnvironmentClass) -> EnvironmentClass {
        self.force_env.unwrap_or(detected)
    }
}

fn parse_reveal_delay(value: &str) -> Result<u32, ConfigError> {
    let delay = value
        .parse::<u32>()
        .map_err(|_| ConfigError::RevealDelay(value.to_string()))?;
    if delay > MAX_REVEAL_DELAY_MS {
        return Err(ConfigError::RevealDelayTooLarge {
            found: delay,
            max: MAX_REVEAL_DELAY_MS,
        });
    }
    Ok(delay)
}

fn parse_forced_env(value: &str) -> Result<EnvironmentClass, ConfigError> {
    if value.eq_ignore_ascii_case("normal") {
        Ok(EnvironmentClass::Normal)
    } else if value.eq_ignore_ascii_case("restricted") {
        Ok(EnvironmentClass::RestrictedInAppBrowser)
    } else {
        Err(ConfigError::ForcedEnvironment(value.to_string()))
    }
}
