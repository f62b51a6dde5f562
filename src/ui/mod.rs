//! UI components for Portfolio Studio

pub mod collections;
pub mod forms;
pub mod json_editor;
pub mod layout;
pub mod preview;
