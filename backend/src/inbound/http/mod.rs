//! HTTP inbound adapter exposing the trivia REST endpoints.

pub mod categories;
pub mod error;
pub mod query;
pub mod questions;
pub mod quizzes;
pub mod state;
pub mod validation;

pub use error::ApiResult;
