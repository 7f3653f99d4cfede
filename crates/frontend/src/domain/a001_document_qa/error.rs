use thiserror::Error;

/// Everything that can land in the shared error slot.
///
/// Validation variants are raised before any request is sent; the
/// `Upload`/`Answer`/`Clear` variants carry the detail of a failed request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QaError {
    #[error("Please select a PDF file")]
    NotPdf,

    #[error("Please select a file first")]
    NoFileSelected,

    #[error("Please enter a question")]
    EmptyQuestion,

    #[error("An upload is already in progress")]
    UploadInProgress,

    #[error("Documents are being cleared, please wait")]
    ClearInProgress,

    #[error("Wait for the current upload or answer to finish")]
    Busy,

    #[error("Session is still starting, please wait")]
    SessionStarting,

    #[error("Failed to upload document: {0}")]
    Upload(String),

    #[error("Failed to get answer: {0}")]
    Answer(String),

    #[error("Failed to clear documents: {0}")]
    Clear(String),
}
