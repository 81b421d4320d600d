use std::collections::BTreeMap;

use binder_core::Caller;

use crate::{Config, DuplicatePolicy, RegistryError};

/// Named factories that produce a `T` on demand.
///
/// Each factory is a [`Caller`] with its arguments already bound. Looking a
/// name up with [`create`](Self::create) calls the factory once, on the
/// calling thread, and hands back whatever it returns. Registries of trait
/// objects are built by binding functions that return `Box<dyn Trait>`.
///
/// # Example
///
/// ```
/// use binder_core::Caller;
/// use binder_registry::FactoryRegistry;
///
/// fn greeting(name: &'static str) -> String {
///     format!("hello, {name}")
/// }
///
/// let mut registry = FactoryRegistry::with_defaults();
/// registry
///     .register("greeting", Caller::create_static(("world",), greeting))
///     .unwrap();
///
/// assert_eq!(registry.create("greeting").unwrap(), "hello, world");
/// assert!(registry.create("farewell").is_err());
/// ```
#[derive(Debug)]
pub struct FactoryRegistry<T> {
    config: Config,
    factories: BTreeMap<String, Caller<'static, T>>,
}

impl<T> Default for FactoryRegistry<T> {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl<T> FactoryRegistry<T> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config,
            factories: BTreeMap::new(),
        }
    }

    /// Creates an empty registry with the default [`Config`].
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(Config::default())
    }

    /// Returns the registry's configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Stores `factory` under `name`.
    ///
    /// # Errors
    ///
    /// Returns an error if `name` is empty or longer than the configured
    /// limit, if `factory` is empty, or if `name` is taken and the
    /// configuration rejects duplicates. The registry is unchanged on error.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        factory: Caller<'static, T>,
    ) -> Result<(), RegistryError> {
        let name = name.into();

        if let Err(error) = self.validate(&name, &factory) {
            tracing::warn!(name = %name, error = %error, "Rejected factory registration");
            return Err(error);
        }

        if self.factories.insert(name.clone(), factory).is_some() {
            tracing::debug!(name = %name, "Replaced factory");
        } else {
            tracing::debug!(name = %name, "Registered factory");
        }

        Ok(())
    }

    fn validate(&self, name: &str, factory: &Caller<'static, T>) -> Result<(), RegistryError> {
        if name.is_empty() {
            return Err(RegistryError::EmptyName);
        }

        let max = self.config.max_name_len();
        if name.len() > max {
            return Err(RegistryError::NameTooLong {
                name: name.to_owned(),
                len: name.len(),
                max,
            });
        }

        if factory.is_null() {
            return Err(RegistryError::NullCaller);
        }

        if self.config.duplicates() == DuplicatePolicy::Reject && self.factories.contains_key(name)
        {
            return Err(RegistryError::Duplicate(name.to_owned()));
        }

        Ok(())
    }

    /// Removes the factory stored under `name`.
    ///
    /// Returns `true` if a factory was removed.
    pub fn unregister(&mut self, name: &str) -> bool {
        let removed = self.factories.remove(name).is_some();
        if removed {
            tracing::debug!(name = %name, "Removed factory");
        }
        removed
    }

    /// Calls the factory stored under `name` and returns what it produced.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Unknown`] if no factory has that name.
    pub fn create(&self, name: &str) -> Result<T, RegistryError> {
        let factory = self
            .factories
            .get(name)
            .ok_or_else(|| RegistryError::Unknown(name.to_owned()))?;

        let product = factory.try_call()?;
        tracing::debug!(name = %name, "Created instance");

        Ok(product)
    }

    /// Returns `true` if a factory is stored under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Returns the registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }

    /// Returns the number of registered factories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Returns `true` if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}
