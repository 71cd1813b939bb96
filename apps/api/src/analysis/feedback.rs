//! Rule lists producing the strengths and improvements sections.
//!
//! Rules fire independently and in a fixed order. Both lists fall back to
//! fixed defaults so neither is ever empty.

use crate::analysis::patterns::{has_monetary_or_percentage, LEADERSHIP_VERB, TEAMWORK_VERB};

const STRONG_SKILL_COUNT: usize = 5;
const WEAK_SKILL_COUNT: usize = 3;
const DETAILED_TEXT_CHARS: usize = 1000;

pub const DEFAULT_STRENGTHS: [&str; 2] = [
    "Well-structured resume format",
    "Clear presentation of information",
];
pub const DEFAULT_IMPROVEMENT: &str = "Consider adding more industry-specific keywords";

pub fn identify_strengths(text: &str, text_lower: &str, skill_count: usize) -> Vec<String> {
    let mut strengths = Vec::new();

    if skill_count > STRONG_SKILL_COUNT {
        strengths.push("Strong technical skill set with diverse technology stack");
    }
    if LEADERSHIP_VERB.is_match(text) {
        strengths.push("Demonstrated leadership and management experience");
    }
    if has_monetary_or_percentage(text) {
        strengths.push("Includes quantified achievements and measurable impact");
    }
    if ["education", "university", "degree"]
        .iter()
        .any(|term| text_lower.contains(term))
    {
        strengths.push("Strong educational background");
    }
    if text.chars().count() > DETAILED_TEXT_CHARS {
        strengths.push("Comprehensive and detailed resume content");
    }

    if strengths.is_empty() {
        return DEFAULT_STRENGTHS.iter().map(|s| s.to_string()).collect();
    }
    strengths.into_iter().map(String::from).collect()
}

pub fn suggest_improvements(text: &str, text_lower: &str, skill_count: usize) -> Vec<String> {
    let mut improvements = Vec::new();

    if !has_monetary_or_percentage(text) {
        improvements.push("Add quantified achievements with specific metrics and numbers");
    }
    if !text_lower.contains("github") && !text_lower.contains("portfolio") {
        improvements.push("Include links to portfolio, GitHub, or personal website");
    }
    if !TEAMWORK_VERB.is_match(text) {
        improvements.push("Highlight leadership experience and teamwork examples");
    }
    if skill_count < WEAK_SKILL_COUNT {
        improvements.push("Expand technical skills section with relevant technologies");
    }

    if improvements.is_empty() {
        return vec![DEFAULT_IMPROVEMENT.to_string()];
    }
    improvements.into_iter().map(String::from).collect()
}
