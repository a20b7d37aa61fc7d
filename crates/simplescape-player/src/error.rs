//! Error types for the simplescape-player crate.
//!
//! Transitions never panic. Collection and arithmetic failures surface as
//! [`PlayerError`]; the reducer turns every failure of a command into an
//! [`ActionError`], which decides what (if anything) reaches the log.

use simplescape_types::Item;

use crate::actions::validation::Rejection;

/// Errors raised by collection and progression primitives.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlayerError {
    /// A new stack was needed but every slot is taken.
    #[error("collection full: no free slot for {item} (capacity: {capacity})")]
    CollectionFull {
        /// The item that could not be stored.
        item: Item,
        /// The collection's slot capacity.
        capacity: usize,
    },

    /// A checked computation overflowed.
    #[error("arithmetic overflow: {context}")]
    ArithmeticOverflow {
        /// Description of what was being computed.
        context: String,
    },
}

/// Why a command did not produce a new state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    /// The command does not apply right now and leaves no trace.
    #[error("command ignored")]
    Ignored,

    /// A precondition failed. The reason's text is appended to the log.
    #[error(transparent)]
    Rejected(#[from] Rejection),

    /// A primitive failed halfway through. The transition is discarded.
    #[error(transparent)]
    Internal(#[from] PlayerError),
}

/// Result of a single transition step.
pub type ActionResult = Result<(), ActionError>;

/// Build an [`PlayerError::ArithmeticOverflow`] for `context`.
pub fn overflow(context: &str) -> PlayerError {
    PlayerError::ArithmeticOverflow {
        context: String::from(context),
    }
}
