use super::aggregate::DocumentId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// DELETE: removes every document the service holds
pub const CLEAR_ALL_PATH: &str = "/api/documents/clear_all/";
/// POST multipart: stores a PDF and returns its extracted text
pub const DOCUMENTS_PATH: &str = "/api/documents/";
/// POST JSON: answers a question against the stored documents
pub const ANSWER_PATH: &str = "/api/documents/answer/";

/// Name of the multipart field carrying the uploaded file
pub const UPLOAD_FIELD: &str = "file";

/// Body of a successful `POST /api/documents/`.
///
/// Every field is optional on the wire: when indexing fails after the file
/// was stored, the service answers 201 with only `warning`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentUploadResponse {
    #[serde(default)]
    pub id: Option<DocumentId>,
    #[serde(default)]
    pub extracted_text: Option<String>,
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default)]
    pub uploaded_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub warning: Option<String>,
}

/// Upload response with the fields the client relies on present
#[derive(Debug, Clone, PartialEq)]
pub struct CreatedDocument {
    pub id: DocumentId,
    pub extracted_text: String,
    pub uploaded_at: Option<DateTime<Utc>>,
}

impl DocumentUploadResponse {
    /// Checks that both `id` and `extracted_text` are present.
    ///
    /// A `warning` from the service takes precedence as the failure detail.
    pub fn into_created(self) -> Result<CreatedDocument, String> {
        match (self.id, self.extracted_text) {
            (Some(id), Some(extracted_text)) => Ok(CreatedDocument {
                id,
                extracted_text,
                uploaded_at: self.uploaded_at,
            }),
            (id, _) => {
                if let Some(warning) = self.warning {
                    return Err(warning);
                }
                let missing = if id.is_none() { "id" } else { "extracted_text" };
                Err(format!("response is missing {}", missing))
            }
        }
    }
}

/// Body of `POST /api/documents/answer/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerRequest {
    pub query: String,
}

impl AnswerRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }
}

/// Passage the service used to build an answer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceChunk {
    #[serde(default)]
    pub chunk_id: Option<i64>,
    pub text: String,
    #[serde(default)]
    pub chunk_index: i64,
    pub document_id: DocumentId,
    #[serde(default)]
    pub similarity: f64,
}

/// Body of a successful `POST /api/documents/answer/`.
///
/// `error` is set when the service could not run the language model and fell
/// back to quoting the best matching passage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerResponse {
    pub answer: String,
    #[serde(default)]
    pub source_chunks: Vec<SourceChunk>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Body of a successful `DELETE /api/documents/clear_all/`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClearAllResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Error body the service sends with non-2xx statuses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
}

impl ApiErrorBody {
    /// Pulls the `error` field out of a raw response body, if there is one
    pub fn detail_from(body: &str) -> Option<String> {
        serde_json::from_str::<ApiErrorBody>(body)
            .ok()
            .map(|b| b.error)
            .filter(|e| !e.trim().is_empty())
    }
}
