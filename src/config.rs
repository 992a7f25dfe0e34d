use crate::*;
use confique::Config as _;
use std::time::Duration;

/// Host supplied completion settings, read from `SQLCOMPLETE_*` environment
/// variables.
#[derive(Debug, Clone, confique::Config)]
pub struct Settings {
    /// Filter suggestions by the clause under the cursor.
    #[config(env = "SQLCOMPLETE_SMART_COMPLETION", default = true)]
    pub smart_completion: bool,
    /// One of `upper`, `lower` or `auto`.
    #[config(env = "SQLCOMPLETE_KEYWORD_CASING", default = "auto")]
    pub keyword_casing: String,
    /// Sort suggestions by match quality instead of category order.
    #[config(env = "SQLCOMPLETE_RANKED", default = false)]
    pub ranked: bool,
    #[config(env = "SQLCOMPLETE_REFRESH_TIMEOUT_SECS", default = 10)]
    pub refresh_timeout_secs: u64,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Ok(Settings::builder().env().load()?)
    }

    pub fn keyword_casing(&self) -> Result<KeywordCasing> {
        self.keyword_casing.parse()
    }

    pub fn refresh_timeout(&self) -> Duration {
        Duration::from_secs(self.refresh_timeout_secs)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            smart_completion: true,
            keyword_casing: KeywordCasing::Auto.to_string(),
            ranked: false,
            refresh_timeout_secs: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_environment() {
        let settings = Settings::builder()
            .load()
            .expect("defaults should satisfy every field");
        assert!(settings.smart_completion);
        assert!(!settings.ranked);
        assert_eq!(settings.keyword_casing().unwrap(), KeywordCasing::Auto);
        assert_eq!(settings.refresh_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn rejects_unknown_casing() {
        let settings = Settings {
            keyword_casing: "shouty".into(),
            ..Settings::default()
        };
        assert!(matches!(settings.keyword_casing(), Err(Error::Config(_))));
    }
}
