//! Document Q&A session state
//!
//! `QaSession` owns everything the page shows: the selected file, the
//! uploaded documents, the preview, the question/answer pair, the
//! in-flight flags and the shared error slot. Every flow is split into a
//! `begin_*` transition, run before the request is sent, and a `finish_*`
//! transition, run with the response. Responses are applied only if their
//! token is still the latest one issued for the flow.

use super::error::QaError;
use contracts::domain::a001_document_qa::aggregate::{DocumentId, UploadedDocumentRef};
use contracts::domain::a001_document_qa::dto::{AnswerResponse, CreatedDocument, SourceChunk};

pub const PDF_MIME_TYPE: &str = "application/pdf";

/// Identifies one request of one flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

/// Whether a `finish_*` call changed the state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Stale,
}

#[derive(Debug, Clone, Copy, Default)]
struct TokenCounter {
    latest: u64,
}

impl TokenCounter {
    fn issue(&mut self) -> RequestToken {
        self.latest += 1;
        RequestToken(self.latest)
    }

    fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.latest
    }

    /// Makes every token issued so far stale
    fn invalidate(&mut self) {
        self.latest += 1;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Corpus clear not finished yet; user operations are refused
    Starting,
    Ready,
}

/// File picked by the user, waiting to be uploaded.
///
/// `handle` is the browser `File` in the app and plain bytes in tests.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile<F> {
    pub name: String,
    pub mime_type: String,
    pub handle: F,
}

impl<F> SelectedFile<F> {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, handle: F) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            handle,
        }
    }

    pub fn is_pdf(&self) -> bool {
        self.mime_type == PDF_MIME_TYPE
    }
}

/// Latest answer with the passages it was built from
#[derive(Debug, Clone, PartialEq)]
pub struct Answer {
    pub text: String,
    pub sources: Vec<SourceChunk>,
    /// Set when the service fell back to quoting a passage
    pub notice: Option<String>,
}

impl From<AnswerResponse> for Answer {
    fn from(resp: AnswerResponse) -> Self {
        Self {
            text: resp.answer,
            sources: resp.source_chunks,
            notice: resp.error,
        }
    }
}

/// What the caller needs to send an upload request
#[derive(Debug, Clone)]
pub struct UploadTicket<F> {
    pub token: RequestToken,
    pub file: SelectedFile<F>,
}

/// What the caller needs to send a question
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionTicket {
    pub token: RequestToken,
    pub query: String,
}

#[derive(Debug, Clone)]
pub struct QaSession<F> {
    phase: SessionPhase,
    session_clear_issued: bool,

    selected_file: Option<SelectedFile<F>>,
    documents: Vec<UploadedDocumentRef>,
    preview: String,
    question: String,
    answer: Option<Answer>,

    uploading: bool,
    answering: bool,
    clearing: bool,
    error: Option<String>,

    upload_tokens: TokenCounter,
    question_tokens: TokenCounter,
    clear_tokens: TokenCounter,
    /// Name of the file sent by the latest upload request
    pending_upload_name: Option<String>,
}

impl<F: Clone> Default for QaSession<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Clone> QaSession<F> {
    pub fn new() -> Self {
        Self {
            phase: SessionPhase::Starting,
            session_clear_issued: false,
            selected_file: None,
            documents: Vec::new(),
            preview: String::new(),
            question: String::new(),
            answer: None,
            uploading: false,
            answering: false,
            clearing: false,
            error: None,
            upload_tokens: TokenCounter::default(),
            question_tokens: TokenCounter::default(),
            clear_tokens: TokenCounter::default(),
            pending_upload_name: None,
        }
    }

    // ---- accessors ----

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_ready(&self) -> bool {
        self.phase == SessionPhase::Ready
    }

    pub fn selected_file(&self) -> Option<&SelectedFile<F>> {
        self.selected_file.as_ref()
    }

    pub fn documents(&self) -> &[UploadedDocumentRef] {
        &self.documents
    }

    pub fn has_documents(&self) -> bool {
        !self.documents.is_empty()
    }

    /// Local name of a document, if it was uploaded in this session
    pub fn document_name(&self, id: &DocumentId) -> Option<&str> {
        self.documents
            .iter()
            .find(|d| &d.id == id)
            .map(|d| d.name.as_str())
    }

    /// Full extracted text of the most recent upload; empty if none
    pub fn preview(&self) -> &str {
        &self.preview
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> Option<&Answer> {
        self.answer.as_ref()
    }

    pub fn is_uploading(&self) -> bool {
        self.uploading
    }

    pub fn is_answering(&self) -> bool {
        self.answering
    }

    pub fn is_clearing(&self) -> bool {
        self.clearing
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn can_upload(&self) -> bool {
        self.is_ready() && self.selected_file.is_some() && !self.uploading && !self.clearing
    }

    /// Asking is offered only once something has been uploaded
    pub fn can_ask(&self) -> bool {
        self.is_ready() && self.has_documents() && !self.answering && !self.clearing
    }

    pub fn can_clear(&self) -> bool {
        self.is_ready()
            && self.has_documents()
            && !self.clearing
            && !self.uploading
            && !self.answering
    }

    fn fail(&mut self, err: QaError) -> QaError {
        self.error = Some(err.to_string());
        err
    }

    fn ensure_ready(&mut self) -> Result<(), QaError> {
        if !self.is_ready() {
            return Err(self.fail(QaError::SessionStarting));
        }
        if self.clearing {
            return Err(self.fail(QaError::ClearInProgress));
        }
        Ok(())
    }

    /// Drops every piece of corpus-derived state
    fn reset_corpus(&mut self) {
        self.selected_file = None;
        self.documents.clear();
        self.preview.clear();
        self.answer = None;
    }

    // ---- session start ----

    /// Issues the one corpus clear that opens the session.
    ///
    /// Returns `None` once it has already been issued.
    pub fn begin_session_clear(&mut self) -> Option<RequestToken> {
        if self.session_clear_issued || self.phase != SessionPhase::Starting {
            return None;
        }
        self.session_clear_issued = true;
        Some(self.clear_tokens.issue())
    }

    /// Opens the session whatever the result; failures are never shown.
    /// A file picked while starting stays selected.
    pub fn finish_session_clear(&mut self, token: RequestToken, result: Result<(), String>) -> Outcome {
        if !self.clear_tokens.is_current(token) {
            return Outcome::Stale;
        }
        if result.is_ok() {
            let picked = self.selected_file.take();
            self.reset_corpus();
            self.selected_file = picked;
        }
        self.phase = SessionPhase::Ready;
        Outcome::Applied
    }

    // ---- file selection ----

    /// Validates a picked file. A rejected pick also drops any earlier pick.
    pub fn select_file(&mut self, file: Option<SelectedFile<F>>) -> Result<(), QaError> {
        match file {
            Some(file) if file.is_pdf() => {
                self.selected_file = Some(file);
                self.error = None;
                Ok(())
            }
            _ => {
                self.selected_file = None;
                Err(self.fail(QaError::NotPdf))
            }
        }
    }

    // ---- upload ----

    pub fn begin_upload(&mut self) -> Result<UploadTicket<F>, QaError> {
        self.error = None;
        self.ensure_ready()?;
        if self.uploading {
            return Err(self.fail(QaError::UploadInProgress));
        }
        let Some(file) = self.selected_file.clone() else {
            return Err(self.fail(QaError::NoFileSelected));
        };
        self.uploading = true;
        self.pending_upload_name = Some(file.name.clone());
        Ok(UploadTicket {
            token: self.upload_tokens.issue(),
            file,
        })
    }

    pub fn finish_upload(
        &mut self,
        token: RequestToken,
        result: Result<CreatedDocument, String>,
    ) -> Outcome {
        if !self.upload_tokens.is_current(token) {
            return Outcome::Stale;
        }
        self.uploading = false;
        let name = self.pending_upload_name.take().unwrap_or_default();
        match result {
            Ok(created) => {
                self.preview = created.extracted_text;
                self.documents.push(UploadedDocumentRef::new(created.id, name));
                self.selected_file = None;
            }
            Err(detail) => {
                self.fail(QaError::Upload(detail));
            }
        }
        Outcome::Applied
    }

    // ---- question ----

    pub fn set_question(&mut self, text: impl Into<String>) {
        self.question = text.into();
    }

    /// Starts a question; a pending one is superseded, not waited for.
    pub fn begin_question(&mut self) -> Result<QuestionTicket, QaError> {
        self.error = None;
        self.ensure_ready()?;
        if self.question.trim().is_empty() {
            return Err(self.fail(QaError::EmptyQuestion));
        }
        self.answering = true;
        Ok(QuestionTicket {
            token: self.question_tokens.issue(),
            query: self.question.clone(),
        })
    }

    pub fn finish_question(
        &mut self,
        token: RequestToken,
        result: Result<AnswerResponse, String>,
    ) -> Outcome {
        if !self.question_tokens.is_current(token) {
            return Outcome::Stale;
        }
        self.answering = false;
        match result {
            Ok(resp) => self.answer = Some(Answer::from(resp)),
            Err(detail) => {
                self.fail(QaError::Answer(detail));
            }
        }
        Outcome::Applied
    }

    // ---- user-triggered clear ----

    /// Starts a corpus clear. Refused while an upload or question is
    /// pending; uploads and questions are refused until it resolves.
    pub fn begin_clear(&mut self) -> Result<RequestToken, QaError> {
        self.error = None;
        self.ensure_ready()?;
        if self.uploading || self.answering {
            return Err(self.fail(QaError::Busy));
        }
        self.clearing = true;
        Ok(self.clear_tokens.issue())
    }

    pub fn finish_clear(&mut self, token: RequestToken, result: Result<(), String>) -> Outcome {
        if !self.clear_tokens.is_current(token) {
            return Outcome::Stale;
        }
        self.clearing = false;
        match result {
            Ok(()) => {
                self.upload_tokens.invalidate();
                self.question_tokens.invalidate();
                self.reset_corpus();
            }
            Err(detail) => {
                self.fail(QaError::Clear(detail));
            }
        }
        Outcome::Applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Session = QaSession<Vec<u8>>;

    fn pdf(name: &str) -> SelectedFile<Vec<u8>> {
        SelectedFile::new(name, PDF_MIME_TYPE, b"%PDF-1.5".to_vec())
    }

    fn created(id: &str, text: &str) -> CreatedDocument {
        CreatedDocument {
            id: DocumentId::from(id),
            extracted_text: text.to_string(),
            uploaded_at: None,
        }
    }

    fn answer(text: &str) -> AnswerResponse {
        AnswerResponse {
            answer: text.to_string(),
            source_chunks: Vec::new(),
            error: None,
        }
    }

    fn ready_session() -> Session {
        let mut s = Session::new();
        let token = s.begin_session_clear().unwrap();
        assert_eq!(s.finish_session_clear(token, Ok(())), Outcome::Applied);
        s
    }

    fn with_document(name: &str) -> Session {
        let mut s = ready_session();
        s.select_file(Some(pdf(name))).unwrap();
        let ticket = s.begin_upload().unwrap();
        s.finish_upload(ticket.token, Ok(created("doc1", "text")));
        s
    }

    #[test]
    fn test_session_clear_runs_once() {
        let mut s = Session::new();
        assert_eq!(s.phase(), SessionPhase::Starting);
        let token = s.begin_session_clear();
        assert!(token.is_some());
        assert!(s.begin_session_clear().is_none());
        s.finish_session_clear(token.unwrap(), Ok(()));
        assert!(s.is_ready());
        assert!(s.begin_session_clear().is_none());
    }

    #[test]
    fn test_session_clear_failure_is_silent() {
        let mut s = Session::new();
        let token = s.begin_session_clear().unwrap();
        s.finish_session_clear(token, Err("HTTP 500".into()));
        assert!(s.is_ready());
        assert!(s.error().is_none());
        assert!(s.documents().is_empty());
    }

    #[test]
    fn test_session_clear_on_empty_state_is_idempotent() {
        let s = ready_session();
        assert!(s.documents().is_empty());
        assert_eq!(s.preview(), "");
        assert!(s.answer().is_none());
        assert!(s.selected_file().is_none());
        assert!(s.error().is_none());
    }

    #[test]
    fn test_operations_refused_while_starting() {
        let mut s = Session::new();
        s.select_file(Some(pdf("report.pdf"))).unwrap();
        assert_eq!(s.begin_upload().unwrap_err(), QaError::SessionStarting);
        assert!(!s.is_uploading());
        s.set_question("anything");
        assert_eq!(s.begin_question().unwrap_err(), QaError::SessionStarting);
        assert_eq!(s.error(), Some("Session is still starting, please wait"));
    }

    #[test]
    fn test_select_pdf() {
        let mut s = ready_session();
        assert!(s
            .select_file(Some(SelectedFile::new("x.txt", "text/plain", vec![])))
            .is_err());
        s.select_file(Some(pdf("report.pdf"))).unwrap();
        assert_eq!(s.selected_file().map(|f| f.name.as_str()), Some("report.pdf"));
        assert!(s.error().is_none());
    }

    #[test]
    fn test_select_non_pdf() {
        // Scenario B, plus a stale pick being dropped
        let mut s = ready_session();
        s.select_file(Some(pdf("old.pdf"))).unwrap();
        let err = s
            .select_file(Some(SelectedFile::new("notes.txt", "text/plain", vec![])))
            .unwrap_err();
        assert_eq!(err, QaError::NotPdf);
        assert_eq!(s.error(), Some("Please select a PDF file"));
        assert!(s.selected_file().is_none());
    }

    #[test]
    fn test_select_nothing() {
        let mut s = ready_session();
        assert!(s.select_file(None).is_err());
        assert!(s.selected_file().is_none());
        assert!(s.error().is_some());
    }

    #[test]
    fn test_upload_without_file() {
        let mut s = ready_session();
        assert_eq!(s.begin_upload().unwrap_err(), QaError::NoFileSelected);
        assert!(!s.is_uploading());
        assert_eq!(s.error(), Some("Please select a file first"));
    }

    #[test]
    fn test_upload_success() {
        // Scenario A
        let mut s = ready_session();
        s.select_file(Some(pdf("report.pdf"))).unwrap();
        let ticket = s.begin_upload().unwrap();
        assert!(s.is_uploading());
        assert_eq!(ticket.file.name, "report.pdf");

        let outcome = s.finish_upload(ticket.token, Ok(created("doc1", "Hello world")));
        assert_eq!(outcome, Outcome::Applied);
        assert_eq!(
            s.documents(),
            &[UploadedDocumentRef::new(DocumentId::from("doc1"), "report.pdf")]
        );
        assert_eq!(s.preview(), "Hello world");
        assert!(s.selected_file().is_none());
        assert!(!s.is_uploading());
    }

    #[test]
    fn test_uploads_keep_order_and_replace_preview() {
        let mut s = with_document("a.pdf");
        s.select_file(Some(pdf("b.pdf"))).unwrap();
        let ticket = s.begin_upload().unwrap();
        s.finish_upload(ticket.token, Ok(created("doc2", "second")));
        let names: Vec<_> = s.documents().iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["a.pdf", "b.pdf"]);
        assert_eq!(s.preview(), "second");
    }

    #[test]
    fn test_upload_failure() {
        // Scenario E
        let mut s = with_document("a.pdf");
        s.select_file(Some(pdf("report.pdf"))).unwrap();
        let ticket = s.begin_upload().unwrap();
        s.finish_upload(ticket.token, Err("HTTP 400".into()));
        assert!(s
            .error()
            .unwrap()
            .starts_with("Failed to upload document:"));
        assert_eq!(s.documents().len(), 1);
        assert_eq!(s.selected_file().map(|f| f.name.as_str()), Some("report.pdf"));
        assert!(!s.is_uploading());
    }

    #[test]
    fn test_second_upload_refused_while_in_flight() {
        let mut s = ready_session();
        s.select_file(Some(pdf("report.pdf"))).unwrap();
        let ticket = s.begin_upload().unwrap();
        assert_eq!(s.begin_upload().unwrap_err(), QaError::UploadInProgress);
        assert!(s.is_uploading());
        assert_eq!(s.finish_upload(ticket.token, Ok(created("doc1", "t"))), Outcome::Applied);
        assert_eq!(s.documents().len(), 1);
    }

    #[test]
    fn test_ask_disabled_with_empty_corpus() {
        // Scenario C
        let mut s = ready_session();
        s.set_question("What is the deadline?");
        assert!(!s.can_ask());
        s.set_question("");
        assert!(!s.can_ask());
    }

    #[test]
    fn test_empty_question() {
        let mut s = with_document("a.pdf");
        s.set_question("   \n ");
        assert_eq!(s.begin_question().unwrap_err(), QaError::EmptyQuestion);
        assert!(!s.is_answering());
        assert_eq!(s.error(), Some("Please enter a question"));
    }

    #[test]
    fn test_question_answered() {
        // Scenario D
        let mut s = with_document("a.pdf");
        assert!(s.can_ask());
        s.set_question("What is the deadline?");
        let ticket = s.begin_question().unwrap();
        assert_eq!(ticket.query, "What is the deadline?");
        assert!(s.is_answering());
        assert!(!s.can_ask());

        s.finish_question(ticket.token, Ok(answer("March 5")));
        assert_eq!(s.answer().map(|a| a.text.as_str()), Some("March 5"));
        assert!(!s.is_answering());
    }

    #[test]
    fn test_question_failure_keeps_previous_answer() {
        let mut s = with_document("a.pdf");
        s.set_question("first?");
        let ticket = s.begin_question().unwrap();
        s.finish_question(ticket.token, Ok(answer("one")));

        s.set_question("second?");
        let ticket = s.begin_question().unwrap();
        assert_eq!(s.answer().map(|a| a.text.as_str()), Some("one"));
        s.finish_question(ticket.token, Err("HTTP 500".into()));
        assert_eq!(s.error(), Some("Failed to get answer: HTTP 500"));
        assert_eq!(s.answer().map(|a| a.text.as_str()), Some("one"));
        assert!(!s.is_answering());
    }

    #[test]
    fn test_superseded_question_is_stale() {
        let mut s = with_document("a.pdf");
        s.set_question("old?");
        let old = s.begin_question().unwrap();
        s.set_question("new?");
        let new = s.begin_question().unwrap();

        assert_eq!(s.finish_question(new.token, Ok(answer("new answer"))), Outcome::Applied);
        assert_eq!(s.finish_question(old.token, Ok(answer("old answer"))), Outcome::Stale);
        assert_eq!(s.answer().map(|a| a.text.as_str()), Some("new answer"));

        // a late failure must not clobber the error slot either
        assert_eq!(s.finish_question(old.token, Err("timeout".into())), Outcome::Stale);
        assert!(s.error().is_none());
    }

    #[test]
    fn test_stale_response_keeps_flag_for_newer_request() {
        let mut s = with_document("a.pdf");
        s.set_question("old?");
        let old = s.begin_question().unwrap();
        let new = s.begin_question().unwrap();
        s.finish_question(old.token, Ok(answer("old")));
        assert!(s.is_answering());
        s.finish_question(new.token, Ok(answer("new")));
        assert!(!s.is_answering());
    }

    #[test]
    fn test_error_slot_last_write_wins() {
        let mut s = with_document("a.pdf");
        s.select_file(Some(pdf("b.pdf"))).unwrap();
        let upload = s.begin_upload().unwrap();
        s.set_question("q?");
        let question = s.begin_question().unwrap();

        s.finish_question(question.token, Err("HTTP 500".into()));
        s.finish_upload(upload.token, Err("HTTP 413".into()));
        assert_eq!(s.error(), Some("Failed to upload document: HTTP 413"));
    }

    #[test]
    fn test_clear_resets_corpus() {
        let mut s = with_document("a.pdf");
        s.set_question("q?");
        let ticket = s.begin_question().unwrap();
        s.finish_question(ticket.token, Ok(answer("a")));

        let token = s.begin_clear().unwrap();
        assert!(s.is_clearing());
        s.finish_clear(token, Ok(()));
        assert!(s.documents().is_empty());
        assert_eq!(s.preview(), "");
        assert!(s.answer().is_none());
        assert_eq!(s.question(), "q?");
        assert!(!s.is_clearing());
        assert!(!s.can_ask());
    }

    #[test]
    fn test_clear_failure_keeps_documents() {
        let mut s = with_document("a.pdf");
        let token = s.begin_clear().unwrap();
        s.finish_clear(token, Err("HTTP 500".into()));
        assert_eq!(s.documents().len(), 1);
        assert_eq!(s.error(), Some("Failed to clear documents: HTTP 500"));
    }

    #[test]
    fn test_upload_and_question_refused_while_clearing() {
        let mut s = with_document("a.pdf");
        let clear = s.begin_clear().unwrap();
        s.select_file(Some(pdf("b.pdf"))).unwrap();
        assert!(!s.can_upload());
        assert!(!s.can_ask());
        assert_eq!(s.begin_upload().unwrap_err(), QaError::ClearInProgress);
        s.set_question("q?");
        assert_eq!(s.begin_question().unwrap_err(), QaError::ClearInProgress);
        assert!(!s.is_uploading());
        assert!(!s.is_answering());
        assert_eq!(s.error(), Some("Documents are being cleared, please wait"));

        s.finish_clear(clear, Ok(()));
        assert!(s.documents().is_empty());
    }

    #[test]
    fn test_second_clear_refused_while_clearing() {
        let mut s = with_document("a.pdf");
        let first = s.begin_clear().unwrap();
        assert_eq!(s.begin_clear().unwrap_err(), QaError::ClearInProgress);
        assert_eq!(s.finish_clear(first, Ok(())), Outcome::Applied);
        assert!(!s.is_clearing());
    }

    #[test]
    fn test_clear_refused_while_question_pending() {
        let mut s = with_document("a.pdf");
        s.set_question("What is the deadline?");
        let question = s.begin_question().unwrap();
        assert!(!s.can_clear());
        assert_eq!(s.begin_clear().unwrap_err(), QaError::Busy);
        assert!(!s.is_clearing());

        let outcome = s.finish_question(question.token, Ok(answer("March 5")));
        assert_eq!(outcome, Outcome::Applied);
        assert_eq!(s.answer().map(|a| a.text.as_str()), Some("March 5"));
        assert_eq!(s.documents().len(), 1);
    }

    #[test]
    fn test_clear_refused_while_uploading() {
        let mut s = with_document("a.pdf");
        s.select_file(Some(pdf("b.pdf"))).unwrap();
        let upload = s.begin_upload().unwrap();
        assert_eq!(s.begin_clear().unwrap_err(), QaError::Busy);
        s.finish_upload(upload.token, Ok(created("doc2", "second")));
        assert_eq!(s.documents().len(), 2);
    }

    #[test]
    fn test_failed_clear_leaves_later_question_working() {
        let mut s = with_document("a.pdf");
        let clear = s.begin_clear().unwrap();
        s.finish_clear(clear, Err("HTTP 500".into()));
        s.set_question("q?");
        let question = s.begin_question().unwrap();
        assert_eq!(
            s.finish_question(question.token, Ok(answer("still here"))),
            Outcome::Applied
        );
        assert_eq!(s.documents().len(), 1);
    }

    #[test]
    fn test_file_picked_while_starting_survives_session_clear() {
        let mut s = Session::new();
        let token = s.begin_session_clear().unwrap();
        s.select_file(Some(pdf("early.pdf"))).unwrap();
        s.finish_session_clear(token, Ok(()));
        assert_eq!(s.selected_file().map(|f| f.name.as_str()), Some("early.pdf"));
        assert!(s.can_upload());
    }

    #[test]
    fn test_document_name_lookup() {
        let s = with_document("report.pdf");
        assert_eq!(s.document_name(&DocumentId::from("doc1")), Some("report.pdf"));
        assert_eq!(s.document_name(&DocumentId::from("other")), None);
    }
}
