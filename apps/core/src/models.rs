use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::error::AppError;
use crate::style::{AnalysisResult, Axis, StyleScores, Trait};

fn default_true() -> bool {
    true
}

/// Display toggles chosen in the dashboard sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardOptions {
    /// Include raw per-letter hit counts in the response.
    #[serde(default = "default_true")]
    pub show_raw_scores: bool,
    /// Render the per-axis bar chart.
    #[serde(default = "default_true")]
    pub show_axis_chart: bool,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self {
            show_raw_scores: true,
            show_axis_chart: true,
        }
    }
}

/// Body of `POST /api/analyze`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AnalyzeRequest {
    /// Free-form text to analyze.
    #[validate(length(min = 1))]
    pub text: String,
    #[serde(default)]
    pub options: DashboardOptions,
}

impl AnalyzeRequest {
    /// Reject input the dashboard should never forward to the analyzer.
    pub fn check(&self, max_chars: usize) -> Result<(), AppError> {
        self.validate()?;

        if self.text.trim().is_empty() {
            return Err(AppError::Validation("Text must not be blank".to_string()));
        }

        let chars = self.text.chars().count();
        if chars > max_chars {
            return Err(AppError::Validation(format!(
                "Text is too long: {} characters (limit {})",
                chars, max_chars
            )));
        }

        Ok(())
    }
}

/// One bar of the per-axis chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisRow {
    pub axis: Axis,
    pub letter: Trait,
    pub percent: f64,
}

/// Flatten axis percentages into chart rows, two per axis.
pub fn axis_rows(result: &AnalysisResult) -> Vec<AxisRow> {
    result
        .axis_percent
        .iter()
        .flat_map(|split| {
            let (a, b) = split.axis.pair();
            [
                AxisRow {
                    axis: split.axis,
                    letter: a,
                    percent: split.first,
                },
                AxisRow {
                    axis: split.axis,
                    letter: b,
                    percent: split.second,
                },
            ]
        })
        .collect()
}

/// Response of `POST /api/analyze`.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeResponse {
    /// Unique identifier of this request (UUID v4).
    pub request_id: Uuid,
    pub analyzed_at: DateTime<Utc>,
    pub result: AnalysisResult,
    pub axis_rows: Vec<AxisRow>,
    /// Present only when `show_raw_scores` is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_scores: Option<StyleScores>,
    pub options: DashboardOptions,
}

impl AnalyzeResponse {
    pub fn new(result: AnalysisResult, options: DashboardOptions) -> Self {
        let raw_scores = options.show_raw_scores.then_some(result.style_scores);
        Self {
            request_id: Uuid::new_v4(),
            analyzed_at: Utc::now(),
            axis_rows: axis_rows(&result),
            raw_scores,
            result,
            options,
        }
    }
}

/// Response of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
