use alloc::string::String;

/// Errors surfaced to callers for configuration the engine cannot honor.
///
/// Structural misuse (generating twice, jumping to an out-of-range index, ...) is not an error:
/// those calls are ignored, since they typically come from per-frame event handlers.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },
}

impl Error {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}
