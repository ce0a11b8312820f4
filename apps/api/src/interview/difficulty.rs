//! Keyword-based question difficulty. Pure and deterministic; no model call.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    #[serde(rename = "低")]
    Low,
    #[serde(rename = "中")]
    Medium,
    #[serde(rename = "高")]
    High,
}

/// Questions asking for reasons or explanations.
const HIGH_KEYWORDS: &[&str] = &["なぜ", "理由", "どう思う", "説明"];
/// Questions asking for concrete experience.
const MEDIUM_KEYWORDS: &[&str] = &["経験", "エピソード", "具体的"];

/// High beats medium: a question matching both sets is high.
pub fn assess_difficulty(question: &str) -> Difficulty {
    if HIGH_KEYWORDS.iter().any(|k| question.contains(k)) {
        Difficulty::High
    } else if MEDIUM_KEYWORDS.iter().any(|k| question.contains(k)) {
        Difficulty::Medium
    } else {
        Difficulty::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_why_question_is_high() {
        assert_eq!(
            assess_difficulty("なぜ当社を志望するのですか？"),
            Difficulty::High
        );
        assert_eq!(
            assess_difficulty("当社の事業内容について説明してください"),
            Difficulty::High
        );
    }

    #[test]
    fn test_strength_question_is_not_high() {
        let d = assess_difficulty("あなたの強みは何ですか？");
        assert!(matches!(d, Difficulty::Medium | Difficulty::Low));
        assert_eq!(d, Difficulty::Low);
    }

    #[test]
    fn test_experience_question_is_medium() {
        assert_eq!(
            assess_difficulty("リーダーシップを発揮した経験は？"),
            Difficulty::Medium
        );
        assert_eq!(
            assess_difficulty("具体的なエピソードを教えてください"),
            Difficulty::Medium
        );
    }

    #[test]
    fn test_high_wins_over_medium() {
        assert_eq!(
            assess_difficulty("その経験を選んだ理由は？"),
            Difficulty::High
        );
    }

    #[test]
    fn test_same_text_same_difficulty() {
        let q = "チームワークで大切にしていることは？";
        let first = assess_difficulty(q);
        for _ in 0..10 {
            assert_eq!(assess_difficulty(q), first);
        }
    }

    #[test]
    fn test_difficulty_serializes_as_kanji() {
        assert_eq!(serde_json::to_string(&Difficulty::High).unwrap(), "\"高\"");
        assert_eq!(serde_json::to_string(&Difficulty::Medium).unwrap(), "\"中\"");
        assert_eq!(serde_json::to_string(&Difficulty::Low).unwrap(), "\"低\"");
    }
}
