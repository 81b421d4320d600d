use thiserror::Error;

/// Contract violations detected while using a [`Caller`](crate::Caller).
///
/// These always indicate a bug at the call site. The panicking accessors on
/// `Caller` report them by panicking with this message; the `try_*` variants
/// return them instead.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CallerError {
    #[error("the caller is empty")]
    Empty,

    #[error("parameter index {index} is out of range for {arity} parameter(s)")]
    OutOfRange { index: usize, arity: usize },

    #[error("parameter {index} is bound by reference and cannot be accessed")]
    ReferenceParameter { index: usize },

    #[error("parameter {index} holds `{stored}`, not `{requested}`")]
    TypeMismatch {
        index: usize,
        stored: &'static str,
        requested: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_slot() {
        assert_eq!(
            CallerError::OutOfRange { index: 4, arity: 2 }.to_string(),
            "parameter index 4 is out of range for 2 parameter(s)",
        );
        assert_eq!(
            CallerError::TypeMismatch {
                index: 1,
                stored: "i32",
                requested: "f64",
            }
            .to_string(),
            "parameter 1 holds `i32`, not `f64`",
        );
    }
}
