//! Analysis Result - output structure of a style analysis.

use serde::Serialize;

use super::comments::COMMENT_THRESHOLD;
use super::lexicon::{Axis, Trait};
use super::scorer::{AxisPercent, AxisSplit, StyleScores};

/// Complete result of analyzing one text. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    /// Trimmed input text
    pub text: String,

    /// Number of characters (Unicode scalar values) in the trimmed text
    pub char_count: usize,

    /// Number of whitespace-delimited tokens
    pub token_count: usize,

    /// Number of non-empty sentences
    pub sentence_count: usize,

    /// Tokens per sentence, two decimals, 0.0 without sentences
    pub avg_sentence_length: f64,

    /// Raw lexicon hits per letter
    pub style_scores: StyleScores,

    /// Four-letter type label
    pub label: String,

    /// Percentage split per axis
    pub axis_percent: AxisPercent,

    /// Advisory comments, never empty
    pub comments: Vec<String>,

    pub tokens: Vec<String>,

    pub sentences: Vec<String>,
}

impl AnalysisResult {
    pub fn score(&self, t: Trait) -> usize {
        self.style_scores.get(t)
    }

    pub fn percent(&self, axis: Axis) -> &AxisSplit {
        self.axis_percent.get(axis)
    }

    /// Axes whose winning side strictly exceeds the comment threshold
    pub fn dominant_axes(&self) -> Vec<Axis> {
        self.axis_percent
            .iter()
            .filter(|s| s.first > COMMENT_THRESHOLD || s.second > COMMENT_THRESHOLD)
            .map(|s| s.axis)
            .collect()
    }

    /// Get a summary for logging
    pub fn summary(&self) -> String {
        let axes: Vec<String> = self
            .axis_percent
            .iter()
            .map(|s| format!("{}={:.1}/{:.1}", s.axis, s.first, s.second))
            .collect();

        format!(
            "Label: {}, Tokens: {}, Sentences: {}, Hits: {}, Axes: [{}]",
            self.label,
            self.token_count,
            self.sentence_count,
            self.style_scores.total(),
            axes.join(", ")
        )
    }
}
