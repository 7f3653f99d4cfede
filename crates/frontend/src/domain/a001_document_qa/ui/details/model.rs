//! Document Q&A - Model (API functions)

use crate::shared::api_utils::{api_url, failure_detail};
use contracts::domain::a001_document_qa::dto::{
    AnswerRequest, AnswerResponse, ClearAllResponse, CreatedDocument, DocumentUploadResponse,
    ANSWER_PATH, CLEAR_ALL_PATH, DOCUMENTS_PATH, UPLOAD_FIELD,
};
use gloo_net::http::{Request, Response};

async fn error_detail(response: Response) -> String {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    failure_detail(status, &body)
}

/// Remove every document the service holds
pub async fn clear_all_documents() -> Result<ClearAllResponse, String> {
    let response = Request::delete(&api_url(CLEAR_ALL_PATH))
        .header("Content-Type", "application/json")
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !response.ok() {
        return Err(error_detail(response).await);
    }

    // Only the status matters; the body is kept for logging
    let text = response.text().await.unwrap_or_default();
    Ok(serde_json::from_str(&text).unwrap_or_default())
}

/// Upload a PDF as multipart form data
pub async fn upload_document(file: &web_sys::File) -> Result<CreatedDocument, String> {
    let form_data = web_sys::FormData::new().map_err(|e| format!("{e:?}"))?;
    form_data
        .append_with_blob_and_filename(UPLOAD_FIELD, file, &file.name())
        .map_err(|e| format!("{e:?}"))?;

    let response = Request::post(&api_url(DOCUMENTS_PATH))
        .body(form_data)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !response.ok() {
        return Err(error_detail(response).await);
    }

    let data: DocumentUploadResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    data.into_created()
}

/// Ask a question against the uploaded documents
pub async fn ask_question(query: &str) -> Result<AnswerResponse, String> {
    let response = Request::post(&api_url(ANSWER_PATH))
        .json(&AnswerRequest::new(query))
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !response.ok() {
        return Err(error_detail(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
