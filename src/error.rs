use thiserror::Error;

/// Everything that can stop a translation submission. None of these are
/// fatal: the session stays usable after each one is shown.
#[derive(Debug, Error)]
pub enum TranslateError {
    /// Missing credential, detected before dispatch.
    #[error("Please set your GROQ_API_KEY in the .env file.")]
    MissingApiKey,

    /// Empty or whitespace-only input, detected before dispatch.
    #[error("Please enter some text to translate.")]
    EmptyText,

    /// Any failure from the external service call, reported verbatim.
    #[error("An error occurred during the translation: {0}")]
    Dispatch(String),
}

impl TranslateError {
    /// The message type the client renders this error under.
    pub fn message_type(&self) -> &'static str {
        match self {
            TranslateError::MissingApiKey => "config-error",
            TranslateError::EmptyText => "validation-warning",
            TranslateError::Dispatch(_) => "translation-error",
        }
    }
}
