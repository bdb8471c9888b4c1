//! Error types for the `kona-protocol` crate.

use alloc::string::{String, ToString};
use core::fmt;
use thiserror::Error;

/// An error decoding the versioned fee scalar word of the system config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ScalarDecodeError {
    /// The version byte is not a known scalar encoding version.
    #[error("unrecognized scalar version: {0}")]
    UnrecognizedVersion(u8),
    /// The reserved bytes of a version `1` scalar are not zero.
    #[error("invalid scalar encoding")]
    InvalidEncoding,
    /// The padding of a version `0` scalar is not zero.
    ///
    /// Only returned by [`EcotoneScalars::validate`]. Decoding a dirty version `0` word is not an
    /// error, see [`DecodedScalars::LegacyFallback`].
    ///
    /// [`EcotoneScalars::validate`]: crate::EcotoneScalars::validate
    /// [`DecodedScalars::LegacyFallback`]: crate::DecodedScalars::LegacyFallback
    #[error("bedrock scalar padding not empty")]
    DirtyLegacyPadding,
}

/// A [Result] alias for the [ScalarDecodeError] type.
pub type ScalarDecodeResult<T> = core::result::Result<T, ScalarDecodeError>;

/// JSON-RPC and Engine API error codes.
///
/// See the [Engine API errors][errors] for the `-38xxx` range.
///
/// [errors]: https://github.com/ethereum/execution-apis/blob/main/src/engine/common.md#errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ErrorCode {
    /// The method does not exist or is not available.
    MethodNotFound = -32601,
    /// Invalid method parameter(s).
    InvalidParams = -32602,
    /// Payload does not exist or is not available.
    UnknownPayload = -38001,
    /// Forkchoice state is invalid or inconsistent.
    InvalidForkchoiceState = -38002,
    /// Payload attributes are invalid or inconsistent.
    InvalidPayloadAttributes = -38003,
    /// Number of requested entities is too large.
    TooLargeEngineRequest = -38004,
    /// Payload belongs to a fork that is not supported.
    UnsupportedFork = -38005,
}

impl ErrorCode {
    /// Returns the numeric error code.
    pub const fn code(self) -> i32 {
        self as i32
    }
}

impl TryFrom<i32> for ErrorCode {
    type Error = i32;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            -32601 => Ok(Self::MethodNotFound),
            -32602 => Ok(Self::InvalidParams),
            -38001 => Ok(Self::UnknownPayload),
            -38002 => Ok(Self::InvalidForkchoiceState),
            -38003 => Ok(Self::InvalidPayloadAttributes),
            -38004 => Ok(Self::TooLargeEngineRequest),
            -38005 => Ok(Self::UnsupportedFork),
            code => Err(code),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// An error caused by invalid user input.
///
/// Carries both the [ErrorCode] that an RPC layer reports and a description of the underlying
/// failure, so callers can match on the code without parsing messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("input error {code}: {message}")]
pub struct InputError {
    /// The error code reported to the caller.
    pub code: ErrorCode,
    /// The description of the underlying error.
    pub message: String,
}

impl InputError {
    /// Creates a new [InputError] from a code and anything displayable.
    pub fn new(code: ErrorCode, inner: impl fmt::Display) -> Self {
        Self { code, message: inner.to_string() }
    }

    /// Returns the numeric error code.
    pub const fn error_code(&self) -> i32 {
        self.code.code()
    }
}

impl From<ScalarDecodeError> for InputError {
    fn from(err: ScalarDecodeError) -> Self {
        Self::new(ErrorCode::InvalidParams, err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_error_carries_code() {
        let err = InputError::new(ErrorCode::InvalidForkchoiceState, "test error");
        assert_eq!(err.error_code(), -38002);
        assert_eq!(err.code, ErrorCode::InvalidForkchoiceState);
        assert_eq!(err.to_string(), "input error -38002: test error");
    }

    #[test]
    fn test_input_error_from_scalar_error() {
        let err: InputError = ScalarDecodeError::UnrecognizedVersion(2).into();
        assert_eq!(err.code, ErrorCode::InvalidParams);
        assert_eq!(err.message, "unrecognized scalar version: 2");
    }

    #[test]
    fn test_error_code_try_from() {
        for code in [
            ErrorCode::MethodNotFound,
            ErrorCode::InvalidParams,
            ErrorCode::UnknownPayload,
            ErrorCode::InvalidForkchoiceState,
            ErrorCode::InvalidPayloadAttributes,
            ErrorCode::TooLargeEngineRequest,
            ErrorCode::UnsupportedFork,
        ] {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
        assert_eq!(ErrorCode::try_from(-1), Err(-1));
    }
}
