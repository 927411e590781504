//! Email Writer — tone-aware email reply generation over Gemini.

pub mod config;
pub mod error;
pub mod llm;
pub mod reply;
pub mod routes;
pub mod service;
