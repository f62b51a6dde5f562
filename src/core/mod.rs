//! Core functionality: document schema, validation, persisted store, and the
//! import/export gateway

pub mod gateway;
pub mod schema;
pub mod store;
pub mod validate;
