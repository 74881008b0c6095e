//! Environment provider that reads list settings as comma-separated values.

use figment::providers::Env;
use figment::value::{Dict, Map, Value};
use figment::{Error, Metadata, Profile, Provider};

/// Keys whose values are lists.
const LIST_KEYS: [&str; 2] = ["features", "classpath"];

/// Environment provider for `FEATURE_PATHS_*` variables.
///
/// `FEATURE_PATHS_FEATURES=classpath:a,file:b` becomes a two-item list and a
/// single value becomes a one-item list. Other keys pass through as
/// strings.
#[derive(Clone)]
pub struct ListEnv {
    inner: Env,
}

impl ListEnv {
    /// Reads variables starting with `prefix`, with the prefix removed and
    /// the remainder lowercased.
    #[must_use]
    pub fn prefixed(prefix: &str) -> Self {
        Self {
            inner: Env::prefixed(prefix),
        }
    }

    fn parse_value(key: &str, raw: &str) -> Value {
        let trimmed = raw.trim();
        if LIST_KEYS.contains(&key) {
            trimmed
                .split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(|item| Value::from(item.to_owned()))
                .collect::<Vec<_>>()
                .into()
        } else {
            Value::from(trimmed.to_owned())
        }
    }
}

impl Provider for ListEnv {
    fn metadata(&self) -> Metadata {
        self.inner.metadata()
    }

    fn data(&self) -> Result<Map<Profile, Dict>, Error> {
        let dict: Dict = self
            .inner
            .iter()
            .map(|(key, raw)| {
                let key = key.as_str().to_owned();
                let value = Self::parse_value(&key, &raw);
                (key, value)
            })
            .collect();
        Ok(self.inner.profile.collect(dict))
    }
}
