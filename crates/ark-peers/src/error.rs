use ark_native::{ContextState, Field};
use thiserror::Error;

/// Errors surfaced by the materialization layer.
///
/// Unknown node kinds are not errors; they materialize as
/// [`NodeKind::Unsupported`](crate::NodeKind::Unsupported).
#[derive(Debug, Error)]
pub enum Error {
    /// A null handle, or a handle whose kind does not match the wrapper.
    #[error("invalid handle: expected {expected}, found {found}")]
    InvalidHandle {
        expected: &'static str,
        found: String,
    },

    /// The engine entered its error state while advancing.
    #[error("failed to proceed to {state}: {message}")]
    Engine {
        state: ContextState,
        message: String,
    },

    /// The context was torn down after an engine error.
    #[error("compilation context has been destroyed")]
    ContextDestroyed,

    /// An integer field held a value outside its enum's range.
    #[error("unexpected value {value} in field `{field}`")]
    UnexpectedValue { field: Field, value: i32 },

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn null_handle(expected: &'static str) -> Error {
        Error::InvalidHandle {
            expected,
            found: "null".to_string(),
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
