//! Regular expressions shared by the rating and feedback rules.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// North-American phone number: `555-123-4567`, `555.123.4567`, `5551234567`.
    pub static ref PHONE: Regex = Regex::new(r"\b\d{3}[-.]?\d{3}[-.]?\d{4}\b").expect("phone regex");

    /// "5 years experience", "6 months of experience".
    pub static ref EXPERIENCE_PHRASE: Regex =
        Regex::new(r"(?i)\b(years?|months?)\s+(of\s+)?experience\b").expect("experience regex");

    /// Years-of-experience count for the summary: "5 years", "10+ yrs".
    pub static ref YEARS_COUNT: Regex =
        Regex::new(r"(?i)\b(\d+)\s*\+?\s*(years?|yrs?)\b").expect("years regex");

    pub static ref ACTION_VERB: Regex =
        Regex::new(r"(?i)\b(led|managed|developed|created|built)\b").expect("action verb regex");

    pub static ref LEADERSHIP_VERB: Regex =
        Regex::new(r"(?i)\b(led|managed|supervised)\b").expect("leadership regex");

    pub static ref TEAMWORK_VERB: Regex =
        Regex::new(r"(?i)\b(led|managed|collaborated)\b").expect("teamwork regex");

    /// "40%". No trailing boundary: `%` is a non-word character, so `\b` after it
    /// would reject "40%." and "40% ".
    pub static ref PERCENTAGE: Regex = Regex::new(r"\b\d+%").expect("percentage regex");

    pub static ref DOLLAR_AMOUNT: Regex = Regex::new(r"\$\d+").expect("dollar regex");

    /// "10000 users", "3 customers", "12 projects".
    pub static ref COUNTED_METRIC: Regex =
        Regex::new(r"(?i)\b\d+\s+(users|customers|projects)\b").expect("metric regex");

    pub static ref SENTENCE_TERMINATORS: Regex = Regex::new(r"[.!?]+").expect("sentence regex");
}

/// Percentage or dollar figure. Used by the strengths and improvements rules.
pub fn has_monetary_or_percentage(text: &str) -> bool {
    PERCENTAGE.is_match(text) || DOLLAR_AMOUNT.is_match(text)
}

/// Any quantified achievement, including counted users/customers/projects.
/// Used by the rating.
pub fn has_quantified_achievement(text: &str) -> bool {
    has_monetary_or_percentage(text) || COUNTED_METRIC.is_match(text)
}
