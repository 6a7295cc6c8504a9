//! Service layer for Wealth Architect
//!
//! Business logic sits here, independent of the CLI and TUI front ends:
//! the growth projector and the affirmation requester with its
//! generative-text transport.

pub mod affirmation;
pub mod gemini;
pub mod generator;
pub mod projection;

pub use affirmation::{build_prompt, parse_affirmations, response_schema, AffirmationService};
pub use gemini::GeminiClient;
pub use generator::{GenerationRequest, TextGenerator};
pub use projection::{build_projection, project};
