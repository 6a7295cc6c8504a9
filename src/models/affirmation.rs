//! Affirmation records returned by the generative-text service

use serde::{Deserialize, Serialize};

/// A single affirmation
///
/// `category` and `content` are passed through exactly as generated; `id` is
/// whatever the service numbered the item, with no uniqueness guarantee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Affirmation {
    pub id: i64,
    /// Need/tense combination, e.g. "Cống hiến - Tương lai đơn"
    pub category: String,
    /// One Vietnamese sentence
    pub content: String,
}

/// The JSON envelope the service is asked to produce
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AffirmationSet {
    pub affirmations: Vec<Affirmation>,
}
