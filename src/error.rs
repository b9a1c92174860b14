//! Error types for morsecalc.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Every error is recoverable: the face shows a one-render message and
//! carries on with the next button event.

/// Outcome category of submitting a token to a calculator engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CalcError {
    /// The token is neither a number nor a known command.
    UnknownCommand,

    /// Too few operands, or no room left to push a result.
    StackSize,

    /// Any other engine failure, with the engine's own code.
    Other(i32),
}

/// Raw status codes used by C-style calculator engines.
pub mod status {
    /// Token accepted.
    pub const OK: i32 = 0;
    /// Unrecognised command.
    pub const UNKNOWN_COMMAND: i32 = -1;
    /// Bad stack size for the requested operation.
    pub const STACK_SIZE: i32 = -2;
    /// Division by zero (built-in engine).
    pub const DIVIDE_BY_ZERO: i32 = -3;
}

/// Map a raw engine status code onto the tagged result.
pub fn status_from_code(code: i32) -> Result<(), CalcError> {
    match code {
        status::OK => Ok(()),
        status::UNKNOWN_COMMAND => Err(CalcError::UnknownCommand),
        status::STACK_SIZE => Err(CalcError::StackSize),
        other => Err(CalcError::Other(other)),
    }
}

/// Transient conditions the renderer can surface on the main field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ErrorKind {
    /// Append attempted with the token buffer at capacity.
    TokenFull,

    /// The calculator did not recognise the submitted token.
    CommandRejected,

    /// Stack underflow or overflow in the calculator.
    StackSize,

    /// Any other calculator failure.
    Calculator,
}

impl ErrorKind {
    /// Fixed 6-character literal shown in the main field.
    pub const fn message(self) -> &'static str {
        match self {
            ErrorKind::TokenFull => "  full",
            ErrorKind::CommandRejected => "cmderr",
            ErrorKind::StackSize => "stkerr",
            ErrorKind::Calculator => "   err",
        }
    }
}

// Convenience conversions

impl From<CalcError> for ErrorKind {
    fn from(e: CalcError) -> Self {
        match e {
            CalcError::UnknownCommand => ErrorKind::CommandRejected,
            CalcError::StackSize => ErrorKind::StackSize,
            CalcError::Other(_) => ErrorKind::Calculator,
        }
    }
}
