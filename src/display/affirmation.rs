//! Affirmation display formatting

use super::report::{format_header, separator, wrap_words};
use crate::models::Affirmation;

/// Heading above the card list
pub const LIST_TITLE: &str = "100 Lý Do Bạn Xứng Đáng & Sở Hữu Số Tiền Này";

/// Closing quote under the card list
pub const LIST_FOOTER: &str = "\"Thành công là nơi sự chuẩn bị và cơ hội gặp gỡ.\" - Tony Robbins";

/// Shown whenever the affirmation request fails, whatever the cause
pub const GENERATION_ERROR_MESSAGE: &str =
    "Có lỗi xảy ra khi kết nối với vũ trụ AI. Vui lòng thử lại.";

/// Two-digit card number, counted from 1 by position (not by `id`)
pub fn card_number(index: usize) -> String {
    format!("{:02}", index + 1)
}

/// Format affirmations as numbered cards wrapped to `width`
pub fn format_affirmation_cards(affirmations: &[Affirmation], width: usize) -> String {
    if affirmations.is_empty() {
        return "No affirmations returned.".to_string();
    }

    let body_width = width.saturating_sub(4).max(20);
    let mut output = String::new();
    output.push_str(&format_header(LIST_TITLE, width));
    output.push('\n');
    output.push_str(&separator(width));
    output.push('\n');

    for (index, item) in affirmations.iter().enumerate() {
        output.push_str(&format!(
            "{}  [{}]\n",
            card_number(index),
            item.category.to_uppercase()
        ));
        for line in wrap_words(&format!("\"{}\"", item.content), body_width) {
            output.push_str("    ");
            output.push_str(&line);
            output.push('\n');
        }
        output.push('\n');
    }

    output.push_str(&format_header(LIST_FOOTER, width));
    output.push('\n');
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_number() {
        assert_eq!(card_number(0), "01");
        assert_eq!(card_number(9), "10");
        assert_eq!(card_number(99), "100");
    }

    #[test]
    fn test_cards_numbered_by_position() {
        let items = vec![
            Affirmation {
                id: 42,
                category: "Kết nối - Hiện tại tiếp diễn".into(),
                content: "Tôi đang chia sẻ sự thịnh vượng.".into(),
            },
            Affirmation {
                id: 42,
                category: "Phát triển".into(),
                content: "Gia tộc thịnh vượng.".into(),
            },
        ];
        let output = format_affirmation_cards(&items, 60);
        assert!(output.contains("01  [KẾT NỐI - HIỆN TẠI TIẾP DIỄN]"));
        assert!(output.contains("02  [PHÁT TRIỂN]"));
        assert!(output.contains("\"Tôi đang chia sẻ sự thịnh vượng.\""));
        assert!(output.contains("Tony Robbins"));
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(format_affirmation_cards(&[], 60), "No affirmations returned.");
    }
}
