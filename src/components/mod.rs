//! Reusable view components shared across pages.

pub mod text_field;
