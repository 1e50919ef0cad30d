//! Domain primitives for the trivia question bank.
//!
//! Purpose: define the transport-agnostic record types, the uniform failure
//! type, the quiz selector, and the ports consumed by inbound adapters.
//! Inbound adapters map these onto HTTP; outbound adapters implement the
//! ports against a concrete record store.

pub mod error;
pub mod ports;
pub mod quiz;
pub mod trivia;

pub use self::error::{Error, ErrorCode, ErrorEnvelope};
pub use self::trivia::{Category, NewQuestion, Question, category_map};
