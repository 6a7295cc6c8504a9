//! Affirmation requester
//!
//! Builds the Vietnamese instruction and output schema for a target amount,
//! sends one generation call, and parses the structured reply. Every failure
//! on this path surfaces as [`WealthError::AffirmationGeneration`]; nothing
//! is retried and the 100-item / 12-tense / 6-needs / 5-phrase contract is
//! requested, not verified.

use std::sync::Arc;

use log::{error, info};
use serde_json::{json, Value};
use uuid::Uuid;

use super::gemini::GeminiClient;
use super::generator::{GenerationRequest, TextGenerator, AFFIRMATION_TEMPERATURE, JSON_MIME_TYPE};
use crate::config::settings::Settings;
use crate::error::{WealthError, WealthResult};
use crate::models::{Affirmation, AffirmationSet};

/// Number of affirmations requested per call
pub const AFFIRMATION_COUNT: usize = 100;

/// The six human needs every batch must cover (Vietnamese label, English label)
pub const HUMAN_NEEDS: [(&str, &str); 6] = [
    ("Sự chắc chắn", "Certainty"),
    ("Sự đa dạng", "Variety"),
    ("Tầm quan trọng", "Significance"),
    ("Kết nối/Yêu thương", "Connection"),
    ("Phát triển", "Growth"),
    ("Cống hiến", "Contribution"),
];

/// Phrases that must be scattered through the generated sentences
pub const SCALE_PHRASES: [&str; 5] = [
    "Thành công cho 12 thế hệ",
    "Gia tộc thịnh vượng",
    "Đội nhóm nhân bản gấp 2 mỗi ngày",
    "Chia sẻ bộ công thức hút nguồn lực cho 10 thế hệ",
    "Tự do tài chính vĩnh viễn",
];

/// Vietnamese openers illustrating the tense-as-time-anchor rule
const TENSE_EXAMPLES: [&str; 4] = [
    "Tôi đã sở hữu...",
    "Tôi đang sở hữu...",
    "Tôi sẽ đang tận hưởng...",
    "Tôi đã hoàn thành việc thu hút...",
];

/// Name of the single array field in the reply
pub const AFFIRMATIONS_FIELD: &str = "affirmations";

/// Build the instruction for a target amount (as typed, e.g. `16,800,000,000`)
pub fn build_prompt(amount: &str) -> String {
    let needs = HUMAN_NEEDS
        .iter()
        .map(|(vi, en)| format!("{vi} ({en})"))
        .collect::<Vec<_>>()
        .join(", ");

    let tense_examples = TENSE_EXAMPLES
        .iter()
        .map(|s| format!("\"{s}\""))
        .collect::<Vec<_>>()
        .join(", ");

    let phrases = SCALE_PHRASES
        .iter()
        .map(|p| format!("   - \"{p}\""))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Bạn là một chuyên gia về tư duy thịnh vượng (Wealth Consciousness) và ngôn ngữ học NLP.\n\
         Người dùng mong muốn sở hữu số tiền: {amount} VND.\n\
         \n\
         Nhiệm vụ: Hãy viết ra chính xác {count} lý do/khẳng định (affirmations) tại sao người dùng đã, đang và sẽ sở hữu số tiền này.\n\
         \n\
         Yêu cầu cấu trúc cực kỳ quan trọng:\n\
         1. **12 Thì Tiếng Anh (English Tenses):** Áp dụng cấu trúc ngữ pháp của 12 thì tiếng Anh nhưng viết bằng Tiếng Việt để tạo ra các mốc thời gian tâm lý (Ví dụ: {tense_examples}).\n\
         2. **6 Nhu cầu của Tony Robbins:** Đảm bảo các lý do phủ sóng đủ 6 nhu cầu: {needs}.\n\
         3. **Nguyên lý Quy Mô Lớn (Scale):** BẮT BUỘC chèn các cụm từ sau vào rải rác các câu:\n\
         {phrases}\n\
         \n\
         Output Format: JSON object with a single property '{field}' which is an array of objects, \
         each with exactly the fields 'id' (integer), 'category' (string) and 'content' (string).\n",
        amount = amount.trim(),
        count = AFFIRMATION_COUNT,
        tense_examples = tense_examples,
        needs = needs,
        phrases = phrases,
        field = AFFIRMATIONS_FIELD,
    )
}

/// Structured-output schema sent alongside the prompt
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            AFFIRMATIONS_FIELD: {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "id": { "type": "INTEGER" },
                        "category": {
                            "type": "STRING",
                            "description": "Kết hợp Nhu cầu và Thì (Ví dụ: Cống hiến - Tương lai đơn)"
                        },
                        "content": {
                            "type": "STRING",
                            "description": "Nội dung khẳng định bằng tiếng Việt"
                        }
                    },
                    "required": ["id", "category", "content"]
                }
            }
        },
        "required": [AFFIRMATIONS_FIELD]
    })
}

/// Parse the reply text into affirmations
///
/// The records are returned unmodified, but each one must carry an integer
/// `id` and string `category` and `content`; one bad record fails the batch. A reply that is not JSON, or whose
/// top-level object lacks the array field, is an error; no partial list is
/// ever produced.
pub fn parse_affirmations(text: &str) -> WealthResult<Vec<Affirmation>> {
    serde_json::from_str::<AffirmationSet>(text)
        .map(|set| set.affirmations)
        .map_err(WealthError::affirmation)
}

/// Service issuing affirmation requests through a [`TextGenerator`]
#[derive(Clone)]
pub struct AffirmationService {
    generator: Arc<dyn TextGenerator>,
    model: String,
}

impl AffirmationService {
    /// Create a new affirmation service
    pub fn new(generator: Arc<dyn TextGenerator>, model: impl Into<String>) -> Self {
        Self {
            generator,
            model: model.into(),
        }
    }

    /// Create a service backed by the Gemini client
    ///
    /// A missing API key is reported as an affirmation failure: from the
    /// user's point of view it is just another way the request cannot succeed.
    pub fn from_settings(settings: &Settings) -> WealthResult<Self> {
        let client = GeminiClient::from_settings(settings).map_err(WealthError::affirmation)?;
        Ok(Self::new(Arc::new(client), settings.model.clone()))
    }

    /// The generation request for a target amount
    pub fn request_for(&self, amount: &str) -> GenerationRequest {
        GenerationRequest {
            model: self.model.clone(),
            prompt: build_prompt(amount),
            response_schema: response_schema(),
            response_mime_type: JSON_MIME_TYPE.to_string(),
            temperature: AFFIRMATION_TEMPERATURE,
        }
    }

    /// Request affirmations for a target amount
    ///
    /// Makes exactly one outbound call. Any failure, whether transport,
    /// status, empty reply, malformed JSON or a missing field, is logged and
    /// returned as an affirmation generation error.
    pub async fn generate(&self, amount: &str) -> WealthResult<Vec<Affirmation>> {
        let request_id = Uuid::new_v4();
        let request = self.request_for(amount);
        info!(
            "event=affirmation_request request_id={} backend={} model={} amount={}",
            request_id,
            self.generator.backend_tag(),
            request.model,
            amount.trim()
        );

        let outcome = match self.generator.generate(&request).await {
            Ok(text) => parse_affirmations(&text),
            Err(e) => Err(WealthError::affirmation(e)),
        };

        match &outcome {
            Ok(items) => info!(
                "event=affirmation_request request_id={} status=ok count={}",
                request_id,
                items.len()
            ),
            Err(e) => error!(
                "event=affirmation_request request_id={} status=error cause={}",
                request_id, e
            ),
        }

        outcome
    }
}
