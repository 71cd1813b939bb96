//! Overall résumé rating on a 0–10 scale.
//!
//! Arithmetic is done in integer tenths so the result is always an exact
//! multiple of 0.1 and `overall_score = rating × 10` is an integer.

use crate::analysis::patterns::{
    has_quantified_achievement, ACTION_VERB, EXPERIENCE_PHRASE, PHONE,
};

const BASE_TENTHS: u32 = 50;
const CONTACT_EMAIL_TENTHS: u32 = 5;
const CONTACT_PHONE_TENTHS: u32 = 5;
const PER_SKILL_TENTHS: u32 = 2;
const SKILL_CAP_TENTHS: u32 = 20;
const EXPERIENCE_TENTHS: u32 = 5;
const ACTION_VERB_TENTHS: u32 = 5;
const QUANTIFIED_TENTHS: u32 = 10;
const MAX_TENTHS: u32 = 100;

/// Which rating rules fired for a piece of text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RatingSignals {
    pub has_email: bool,
    pub has_phone: bool,
    pub skill_count: usize,
    pub has_experience_phrase: bool,
    pub has_action_verb: bool,
    pub has_quantified_achievement: bool,
}

impl RatingSignals {
    pub fn detect(text: &str, text_lower: &str, skill_count: usize) -> Self {
        Self {
            // Naive: any "@" plus any ".com" anywhere in the text.
            has_email: text_lower.contains('@') && text_lower.contains(".com"),
            has_phone: PHONE.is_match(text),
            skill_count,
            has_experience_phrase: EXPERIENCE_PHRASE.is_match(text),
            has_action_verb: ACTION_VERB.is_match(text),
            has_quantified_achievement: has_quantified_achievement(text),
        }
    }

    /// Rating in tenths of a point, clamped to 100.
    pub fn tenths(&self) -> u32 {
        let mut tenths = BASE_TENTHS;
        if self.has_email {
            tenths += CONTACT_EMAIL_TENTHS;
        }
        if self.has_phone {
            tenths += CONTACT_PHONE_TENTHS;
        }
        let skill_count = u32::try_from(self.skill_count).unwrap_or(u32::MAX);
        tenths += skill_count
            .saturating_mul(PER_SKILL_TENTHS)
            .min(SKILL_CAP_TENTHS);
        if self.has_experience_phrase {
            tenths += EXPERIENCE_TENTHS;
        }
        if self.has_action_verb {
            tenths += ACTION_VERB_TENTHS;
        }
        if self.has_quantified_achievement {
            tenths += QUANTIFIED_TENTHS;
        }
        tenths.min(MAX_TENTHS)
    }

    /// Rating as a decimal with one fractional digit.
    pub fn rating(&self) -> f64 {
        f64::from(self.tenths()) / 10.0
    }

    /// `rating × 10`, as an integer percentage.
    pub fn score(&self) -> u32 {
        self.tenths()
    }
}
