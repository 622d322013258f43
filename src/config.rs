use crate::constants;

/// Where the mirror reads from and writes to.
///
/// Built once per process and handed to the pipeline. `Default` carries the
/// fixed production targets; the `with_*` builders exist so tests and local
/// runs can point the pipeline at a stub server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirrorConfig {
    pub source_url: String,
    pub bucket: String,
    pub region: String,
}

impl Default for MirrorConfig {
    fn default() -> Self {
        Self {
            source_url: constants::SOURCE_URL.to_string(),
            bucket: constants::BUCKET.to_string(),
            region: constants::REGION.to_string(),
        }
    }
}

impl MirrorConfig {
    pub fn with_source_url(mut self, url: impl Into<String>) -> Self {
        self.source_url = url.into();
        self
    }

    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = bucket.into();
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }
}

/// Logging knobs read from the environment at startup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogSettings {
    /// Emit JSON lines on stdout instead of human-readable output
    pub json: bool,
    /// When set, also write daily-rotated JSON logs under this directory
    pub log_dir: Option<String>,
}

impl LogSettings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let json = match lookup(constants::LOG_FORMAT_ENV) {
            Some(format) => format.eq_ignore_ascii_case("json"),
            // CloudWatch ingests one record per line; default to JSON inside Lambda
            None => lookup(constants::LAMBDA_FUNCTION_ENV).is_some(),
        };
        let log_dir = lookup(constants::LOG_DIR_ENV).filter(|dir| !dir.trim().is_empty());
        Self { json, log_dir }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config_uses_fixed_targets() {
        let config = MirrorConfig::default();
        assert_eq!(config.source_url, "https://viacep.com.br/ws/14010090/json/");
        assert_eq!(config.bucket, "testebucket-hlvls");
        assert_eq!(config.region, "us-east-1");
    }

    #[test]
    fn test_builders_override_fields() {
        let config = MirrorConfig::default()
            .with_source_url("http://127.0.0.1:9/")
            .with_bucket("scratch")
            .with_region("sa-east-1");
        assert_eq!(config.source_url, "http://127.0.0.1:9/");
        assert_eq!(config.bucket, "scratch");
        assert_eq!(config.region, "sa-east-1");
    }

    #[test]
    fn test_log_settings_default_to_text_outside_lambda() {
        let settings = LogSettings::from_lookup(lookup_from(&[]));
        assert_eq!(settings, LogSettings { json: false, log_dir: None });
    }

    #[test]
    fn test_log_settings_json_inside_lambda() {
        let settings = LogSettings::from_lookup(lookup_from(&[("AWS_LAMBDA_FUNCTION_NAME", "cep-mirror")]));
        assert!(settings.json);
    }

    #[test]
    fn test_explicit_format_wins_over_lambda_detection() {
        let settings = LogSettings::from_lookup(lookup_from(&[
            ("AWS_LAMBDA_FUNCTION_NAME", "cep-mirror"),
            ("MIRROR_LOG_FORMAT", "text"),
            ("MIRROR_LOG_DIR", "/tmp/logs"),
        ]));
        assert!(!settings.json);
        assert_eq!(settings.log_dir.as_deref(), Some("/tmp/logs"));
    }

    #[test]
    fn test_blank_log_dir_is_ignored() {
        let settings = LogSettings::from_lookup(lookup_from(&[("MIRROR_LOG_DIR", "  ")]));
        assert_eq!(settings.log_dir, None);
    }
}
