//! Style Analyzer - main orchestrator for the style module.
//!
//! Runs preprocessing, lexicon scoring, labeling and comment generation in a
//! single pass. The analyzer only borrows an immutable lexicon, so one instance
//! can be shared freely between threads.

use std::time::Instant;
use tracing::debug;

use super::comments::generate_comments;
use super::lexicon::Lexicon;
use super::preprocess::{normalize, split_sentences, tokenize};
use super::result::AnalysisResult;
use super::scorer::{compute_scores, derive_label, round_to, to_axis_percent};

/// Main style analyzer
#[derive(Debug, Clone, Copy)]
pub struct StyleAnalyzer<'a> {
    lexicon: &'a Lexicon,
}

impl Default for StyleAnalyzer<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl StyleAnalyzer<'static> {
    /// Create an analyzer over the built-in lexicon
    pub fn new() -> Self {
        Self {
            lexicon: Lexicon::standard(),
        }
    }
}

impl<'a> StyleAnalyzer<'a> {
    /// Create an analyzer over a caller-provided lexicon
    pub fn with_lexicon(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &Lexicon {
        self.lexicon
    }

    /// Analyze a text. Total over all inputs, including empty strings.
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        let start = Instant::now();

        let norm_text = normalize(text);
        let sentences = split_sentences(norm_text);
        let tokens = tokenize(norm_text);

        let char_count = norm_text.chars().count();
        let token_count = tokens.len();
        let sentence_count = sentences.len();
        let avg_sentence_length = if sentence_count > 0 {
            round_to(token_count as f64 / sentence_count as f64, 2)
        } else {
            0.0
        };

        let style_scores = compute_scores(&tokens, self.lexicon);
        let axis_percent = to_axis_percent(&style_scores);
        let label = derive_label(&axis_percent);
        let comments = generate_comments(&axis_percent);

        let result = AnalysisResult {
            text: norm_text.to_string(),
            char_count,
            token_count,
            sentence_count,
            avg_sentence_length,
            style_scores,
            label,
            axis_percent,
            comments,
            tokens,
            sentences,
        };

        debug!(
            label = %result.label,
            tokens = result.token_count,
            elapsed_us = start.elapsed().as_micros() as u64,
            "Style analysis complete"
        );

        result
    }
}
