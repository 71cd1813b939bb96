use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Section categories that receive improvement advice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionCategory {
    Experience,
    Skills,
    Education,
    Projects,
}

impl SectionCategory {
    pub const ALL: [SectionCategory; 4] = [
        SectionCategory::Experience,
        SectionCategory::Skills,
        SectionCategory::Education,
        SectionCategory::Projects,
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedHighlights {
    /// At most 8, vocabulary order.
    pub skills: Vec<String>,
    /// At most 3 sentence previews, text order, each ending in "...".
    pub projects: Vec<String>,
    /// At most 5, vocabulary order.
    pub keywords: Vec<String>,
}

/// Full analysis result returned by `POST /api/analyze`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    /// 0.0 – 10.0, one fractional digit.
    pub overall_rating: f64,
    /// `overall_rating × 10`.
    pub overall_score: u32,
    pub extracted_highlights: ExtractedHighlights,
    pub professional_summary: String,
    pub section_improvements: BTreeMap<SectionCategory, Vec<String>>,
    /// Never empty.
    pub strengths: Vec<String>,
    /// Never empty.
    pub improvements: Vec<String>,
}
