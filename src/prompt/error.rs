//! Prompt-specific error handling.

use thiserror::Error;

/// Errors raised while prompting the user.
#[derive(Error, Debug)]
pub enum PromptError {
    /// The line did not fit in the read buffer.
    #[error("Buffer overflow: input line exceeds {capacity} bytes")]
    BufferOverflow {
        /// Capacity of the buffer that overflowed.
        capacity: usize,
    },

    /// The input source closed while a selection was pending.
    #[error("Input closed before a valid choice was entered")]
    InputClosed,

    /// A selection was requested from an empty list of choices.
    #[error("Nothing to select from")]
    EmptySelection,

    /// Reading from or writing to the terminal failed.
    #[error("Prompt I/O error: {0}")]
    Io(#[from] std::io::Error),
}
