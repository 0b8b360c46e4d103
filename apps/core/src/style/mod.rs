//! # Style Module
//!
//! Rule-based writing style scorer. Estimates a four-axis type label
//! (E/I, S/N, T/F, J/P) from free-form text by counting exact lexicon hits.
//!
//! ## Components
//! - `preprocess`: trimming, sentence splitting, whitespace tokenization
//! - `lexicon`: trait letters, axis pairs and trigger words
//! - `scorer`: raw counts, axis percentages and label derivation
//! - `comments`: canned comments for lopsided axes
//! - `result`: output data structure
//! - `analyzer`: main orchestrator

pub mod analyzer;
pub mod comments;
pub mod lexicon;
pub mod preprocess;
pub mod result;
pub mod scorer;

pub use analyzer::StyleAnalyzer;
pub use comments::{BALANCED_COMMENT, COMMENT_THRESHOLD};
pub use lexicon::{Axis, Lexicon, Trait};
pub use result::AnalysisResult;
pub use scorer::{AxisPercent, AxisSplit, StyleScores};

/// Analyze a text with the built-in lexicon
pub fn analyze(text: &str) -> AnalysisResult {
    StyleAnalyzer::new().analyze(text)
}
