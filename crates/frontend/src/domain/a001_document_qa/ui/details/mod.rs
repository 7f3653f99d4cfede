//! Document Q&A Details UI Module (MVVM Standard)
//!
//! Structure:
//! - model.rs: API functions
//! - view_model.rs: DocumentQaVm wrapping the session signal, with commands
//! - view.rs: Main component DocumentQaDetails
//! - document_list.rs: uploaded documents and answer sources

mod document_list;
mod model;
mod view;
mod view_model;

pub use document_list::{AnswerSources, DocumentList, SourceLine};
pub use view::DocumentQaDetails;
pub use view_model::{BrowserSession, DocumentQaVm};
