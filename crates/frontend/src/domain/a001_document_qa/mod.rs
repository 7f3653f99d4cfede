//! Document Q&A: upload PDFs and ask questions about them
//!
//! - session.rs: state container and transitions for every flow
//! - error.rs: messages shown in the error slot
//! - preview.rs: display form of the extracted text
//! - ui: Leptos components

pub mod error;
pub mod preview;
pub mod session;
pub mod ui;
