//! Document Q&A - View Model
//!
//! Wraps `QaSession` in a signal and runs every flow as
//! begin transition -> request -> finish transition.

use super::model;
use crate::domain::a001_document_qa::session::{Outcome, QaSession, SelectedFile};
use leptos::prelude::*;

/// Session holding the browser's `File` handles
pub type BrowserSession = QaSession<web_sys::File>;

#[derive(Clone, Copy)]
pub struct DocumentQaVm {
    pub session: RwSignal<BrowserSession, LocalStorage>,
    pub question: RwSignal<String>,
}

fn elapsed_ms(started: f64) -> f64 {
    js_sys::Date::now() - started
}

fn log_outcome(flow: &str, outcome: Option<Outcome>) {
    if outcome == Some(Outcome::Stale) {
        log::debug!("{}: response superseded, ignored", flow);
    }
}

impl DocumentQaVm {
    pub fn new() -> Self {
        Self {
            session: RwSignal::new_local(QaSession::new()),
            question: RwSignal::new(String::new()),
        }
    }

    /// Clears the service's documents. Runs once per page load, before any
    /// upload or question is accepted.
    pub fn start_session_command(&self) {
        let session = self.session;
        let Some(token) = session.try_update(|s| s.begin_session_clear()).flatten() else {
            return;
        };

        log::info!("Session start: clearing stored documents");
        let started = js_sys::Date::now();
        wasm_bindgen_futures::spawn_local(async move {
            let result = match model::clear_all_documents().await {
                Ok(resp) => {
                    log::info!(
                        "Database cleared in {:.0} ms: {}",
                        elapsed_ms(started),
                        resp.message.as_deref().unwrap_or("ok")
                    );
                    Ok(())
                }
                Err(e) => {
                    log::warn!("Failed to clear documents at session start: {}", e);
                    Err(e)
                }
            };
            let outcome = session.try_update(|s| s.finish_session_clear(token, result));
            log_outcome("session clear", outcome);
        });
    }

    /// Validates the file picked in the file input
    pub fn select_file_command(&self, file: Option<web_sys::File>) {
        let picked = file.map(|f| SelectedFile::new(f.name(), f.type_(), f));
        let description = picked
            .as_ref()
            .map(|f| format!("{} ({})", f.name, f.mime_type))
            .unwrap_or_else(|| "nothing".to_string());

        match self.session.try_update(|s| s.select_file(picked)) {
            Some(Ok(())) => log::info!("Selected {}", description),
            Some(Err(e)) => log::warn!("Rejected {}: {}", description, e),
            None => {}
        }
    }

    pub fn upload_command(&self) {
        let session = self.session;
        let ticket = match session.try_update(|s| s.begin_upload()) {
            Some(Ok(ticket)) => ticket,
            Some(Err(e)) => {
                log::warn!("Upload not started: {}", e);
                return;
            }
            None => return,
        };

        let name = ticket.file.name.clone();
        log::info!("Uploading {} ({} bytes)", name, ticket.file.handle.size());
        let started = js_sys::Date::now();
        wasm_bindgen_futures::spawn_local(async move {
            let result = model::upload_document(&ticket.file.handle).await;
            match &result {
                Ok(doc) => {
                    log::info!(
                        "Uploaded {} as document {} in {:.0} ms ({} chars extracted)",
                        name,
                        doc.id,
                        elapsed_ms(started),
                        doc.extracted_text.chars().count()
                    );
                    if let Some(uploaded_at) = doc.uploaded_at {
                        log::debug!(
                            "Document {} stored at {}",
                            doc.id,
                            uploaded_at.format("%d.%m.%Y %H:%M:%S")
                        );
                    }
                }
                Err(e) => log::error!("Upload of {} failed: {}", name, e),
            }
            let outcome = session.try_update(|s| s.finish_upload(ticket.token, result));
            log_outcome("upload", outcome);
        });
    }

    pub fn ask_command(&self) {
        let session = self.session;
        let text = self.question.get_untracked();
        let ticket = match session.try_update(|s| {
            s.set_question(text);
            s.begin_question()
        }) {
            Some(Ok(ticket)) => ticket,
            Some(Err(e)) => {
                log::warn!("Question not sent: {}", e);
                return;
            }
            None => return,
        };

        log::info!("Asking: {}", ticket.query);
        let started = js_sys::Date::now();
        wasm_bindgen_futures::spawn_local(async move {
            let result = model::ask_question(&ticket.query).await;
            match &result {
                Ok(resp) => {
                    log::info!(
                        "Answer received in {:.0} ms from {} source chunks",
                        elapsed_ms(started),
                        resp.source_chunks.len()
                    );
                    if let Some(notice) = &resp.error {
                        log::warn!("Answer is a fallback: {}", notice);
                    }
                }
                Err(e) => log::error!("Question failed: {}", e),
            }
            let outcome = session.try_update(|s| s.finish_question(ticket.token, result));
            log_outcome("question", outcome);
        });
    }

    /// Clears the service's documents on user request
    pub fn clear_command(&self) {
        let session = self.session;
        let token = match session.try_update(|s| s.begin_clear()) {
            Some(Ok(token)) => token,
            Some(Err(e)) => {
                log::warn!("Clear not started: {}", e);
                return;
            }
            None => return,
        };

        log::info!("Clearing all documents");
        wasm_bindgen_futures::spawn_local(async move {
            let result = match model::clear_all_documents().await {
                Ok(resp) => {
                    log::info!("{}", resp.message.as_deref().unwrap_or("Documents cleared"));
                    Ok(())
                }
                Err(e) => {
                    log::error!("Clear failed: {}", e);
                    Err(e)
                }
            };
            let outcome = session.try_update(|s| s.finish_clear(token, result));
            log_outcome("clear", outcome);
        });
    }
}
