use thiserror::Error;

/// What a [`FactoryRegistry`](crate::FactoryRegistry) does when a name is
/// registered twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Keep the existing factory and report an error.
    #[default]
    Reject,

    /// Replace the existing factory.
    Replace,
}

/// Configuration for a factory registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    max_name_len: usize,
    duplicates: DuplicatePolicy,
}

/// Errors that can occur when validating a registry config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_name_len must be at least 1")]
    NameLength,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_name_len: 128,
            duplicates: DuplicatePolicy::Reject,
        }
    }
}

impl Config {
    /// Creates a new config.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_name_len` is zero, since no name could ever
    /// be registered.
    pub fn new(max_name_len: usize, duplicates: DuplicatePolicy) -> Result<Self, ConfigError> {
        if max_name_len == 0 {
            return Err(ConfigError::NameLength);
        }

        Ok(Self {
            max_name_len,
            duplicates,
        })
    }

    /// Returns the longest accepted name, in bytes.
    #[must_use]
    pub fn max_name_len(&self) -> usize {
        self.max_name_len
    }

    /// Returns how duplicate registrations are handled.
    #[must_use]
    pub fn duplicates(&self) -> DuplicatePolicy {
        self.duplicates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rejects_duplicates() {
        let config = Config::default();

        assert_eq!(config.max_name_len(), 128);
        assert_eq!(config.duplicates(), DuplicatePolicy::Reject);
    }

    #[test]
    fn zero_name_length_is_invalid() {
        assert_eq!(
            Config::new(0, DuplicatePolicy::Replace),
            Err(ConfigError::NameLength)
        );
        assert!(Config::new(1, DuplicatePolicy::Replace).is_ok());
    }
}
