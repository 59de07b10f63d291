use std::error::Error;

/// Boxed error used as the absence reason by [`crate::catch::Catch`].
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Returned by the escape-hatch accessors in [`crate::unchecked`] when no value is present.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValueMissing {
    message: String,
}

impl ValueMissing {
    pub const DEFAULT_MESSAGE: &'static str = "value is missing";

    pub fn new<S: Into<String>>(message: S) -> Self {
        Self { message: message.into() }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Default for ValueMissing {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MESSAGE)
    }
}
