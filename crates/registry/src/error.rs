use binder_core::CallerError;
use thiserror::Error;

/// Errors reported by registries and subscriber lists.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("names must not be empty")]
    EmptyName,

    #[error("name `{name}` is {len} bytes long, the limit is {max}")]
    NameTooLong { name: String, len: usize, max: usize },

    #[error("cannot store an empty caller")]
    NullCaller,

    #[error("`{0}` is already registered")]
    Duplicate(String),

    #[error("no factory is registered as `{0}`")]
    Unknown(String),

    #[error("an equal caller is already subscribed")]
    AlreadySubscribed,

    #[error("subscriber {subscriber} rejected the notification")]
    Rejected {
        subscriber: usize,
        #[source]
        source: CallerError,
    },

    #[error(transparent)]
    Caller(#[from] CallerError),
}
