//! Document Q&A contracts
//!
//! Wire types for the document service:
//! - aggregate.rs: opaque document id and the client-side document reference
//! - dto.rs: endpoint paths and request/response bodies

pub mod aggregate;
pub mod dto;
