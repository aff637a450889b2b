#[cfg(test)]
use std::collections::HashMap;

/// Source of environment variables
///
/// Settings are read through this trait so tests can supply their own
/// variables instead of mutating the process environment.
pub trait EnvironmentProvider {
    fn get_var(&self, key: &str) -> Option<String>;
}

/// Reads from the process environment
pub struct SystemEnvironment;

impl EnvironmentProvider for SystemEnvironment {
    fn get_var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// In-memory environment for tests
#[cfg(test)]
pub struct MockEnvironment {
    vars: HashMap<String, String>,
}

#[cfg(test)]
impl MockEnvironment {
    pub fn new(vars: HashMap<String, String>) -> Self {
        Self { vars }
    }

    pub fn empty() -> Self {
        Self {
            vars: HashMap::new(),
        }
    }

    pub fn with_vars(mut self, vars: &[(&str, &str)]) -> Self {
        for (key, value) in vars {
            self.vars.insert(key.to_string(), value.to_string());
        }
        self
    }
}

#[cfg(test)]
impl EnvironmentProvider for MockEnvironment {
    fn get_var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_environment_returns_configured_vars() {
        let provider = MockEnvironment::empty().with_vars(&[("DATABASE_URL", "sqlite::memory:")]);

        assert_eq!(provider.get_var("DATABASE_URL"), Some("sqlite::memory:".to_string()));
        assert_eq!(provider.get_var("PORT"), None);
    }

    #[test]
    fn test_mock_environment_from_map() {
        let provider = MockEnvironment::new(HashMap::from([
            ("HOST".to_string(), "127.0.0.1".to_string()),
        ]));

        assert_eq!(provider.get_var("HOST"), Some("127.0.0.1".to_string()));
    }

    #[test]
    fn test_system_environment_missing_var() {
        let provider = SystemEnvironment;
        assert_eq!(provider.get_var("PRODUCT_BACKEND_SURELY_UNSET_98765"), None);
    }
}
