//! Canned advisory comments for lopsided axes.

use super::lexicon::Axis;
use super::scorer::AxisPercent;

/// A side must strictly exceed this percentage to earn a comment
pub const COMMENT_THRESHOLD: f64 = 60.0;

/// Returned alone when no axis crosses the threshold
pub const BALANCED_COMMENT: &str = "전체적으로 균형 잡힌 말투입니다.";

/// Per-axis comment rule: message for the first letter, then the second
struct AxisComment {
    axis: Axis,
    first: &'static str,
    second: &'static str,
}

const AXIS_COMMENTS: [AxisComment; 4] = [
    AxisComment {
        axis: Axis::EI,
        first: "사교적이고 외향적인 표현이 많습니다.",
        second: "혼자만의 시간과 생각을 중시하는 말투입니다.",
    },
    AxisComment {
        axis: Axis::SN,
        first: "구체적이고 사실 기반의 표현이 많습니다.",
        second: "아이디어와 가능성 중심의 말투가 돋보입니다.",
    },
    AxisComment {
        axis: Axis::TF,
        first: "논리적이고 분석적인 표현이 강합니다.",
        second: "감정 중심적이고 공감적인 표현이 많습니다.",
    },
    AxisComment {
        axis: Axis::JP,
        first: "체계적이고 계획적인 성향이 드러납니다.",
        second: "즉흥적이고 유연한 성향이 느껴집니다.",
    },
];

/// At most one comment per axis, in axis order. The first letter is checked first.
pub fn generate_comments(axis_percent: &AxisPercent) -> Vec<String> {
    let mut comments: Vec<String> = AXIS_COMMENTS
        .iter()
        .filter_map(|rule| {
            let split = axis_percent.get(rule.axis);
            if split.first > COMMENT_THRESHOLD {
                Some(rule.first)
            } else if split.second > COMMENT_THRESHOLD {
                Some(rule.second)
            } else {
                None
            }
        })
        .map(|s| s.to_string())
        .collect();

    if comments.is_empty() {
        comments.push(BALANCED_COMMENT.to_string());
    }

    comments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::lexicon::Lexicon;
    use crate::style::scorer::{compute_scores, to_axis_percent, StyleScores};

    fn percent_for(text: &str) -> AxisPercent {
        let tokens: Vec<String> = text.split_whitespace().map(|s| s.to_string()).collect();
        to_axis_percent(&compute_scores(&tokens, Lexicon::standard()))
    }

    #[test]
    fn test_balanced_when_no_hits() {
        let comments = generate_comments(&to_axis_percent(&StyleScores::default()));
        assert_eq!(comments, vec![BALANCED_COMMENT.to_string()]);
    }

    #[test]
    fn test_one_comment_per_lopsided_axis() {
        let comments = generate_comments(&percent_for("같이 ㅋㅋ 상상 감정"));

        assert_eq!(
            comments,
            vec![
                "사교적이고 외향적인 표현이 많습니다.".to_string(),
                "아이디어와 가능성 중심의 말투가 돋보입니다.".to_string(),
                "감정 중심적이고 공감적인 표현이 많습니다.".to_string(),
            ]
        );
    }

    #[test]
    fn test_exactly_sixty_is_not_enough() {
        // 3 vs 2 hits on J/P is exactly 60.0 / 40.0
        let comments = generate_comments(&percent_for("계획 마감 정리 즉흥 대충"));
        assert_eq!(comments, vec![BALANCED_COMMENT.to_string()]);
    }

    #[test]
    fn test_just_over_threshold() {
        // 2 vs 1 hits is 66.7 / 33.3
        let comments = generate_comments(&percent_for("계획 마감 즉흥"));
        assert_eq!(comments, vec!["체계적이고 계획적인 성향이 드러납니다.".to_string()]);
    }
}
