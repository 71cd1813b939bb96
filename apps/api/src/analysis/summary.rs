//! Professional summary generation: detected role + years of experience
//! dropped into one of three fixed templates.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use rand::Rng;

use crate::analysis::patterns::YEARS_COUNT;

pub const DEFAULT_YEARS: u32 = 2;
pub const TEMPLATE_COUNT: u64 = 3;

/// How the summary template is chosen when no explicit seed is given.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SummarySelection {
    /// Seed derived from the résumé text: same text, same summary.
    #[default]
    TextHash,
    /// Fresh random seed per call.
    Random,
}

impl SummarySelection {
    pub fn seed_for(&self, text: &str) -> u64 {
        match self {
            SummarySelection::TextHash => text_seed(text),
            SummarySelection::Random => rand::thread_rng().gen(),
        }
    }
}

impl std::str::FromStr for SummarySelection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hash" | "text_hash" => Ok(SummarySelection::TextHash),
            "random" => Ok(SummarySelection::Random),
            other => Err(format!("unknown summary selection mode '{other}'")),
        }
    }
}

/// Role label detected from the résumé, checked in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectedRole {
    SoftwareEngineer,
    DataAnalyst,
    Designer,
    Manager,
    Professional,
}

impl DetectedRole {
    pub fn detect(text_lower: &str) -> Self {
        if text_lower.contains("software engineer") || text_lower.contains("developer") {
            DetectedRole::SoftwareEngineer
        } else if text_lower.contains("data scientist") || text_lower.contains("analyst") {
            DetectedRole::DataAnalyst
        } else if text_lower.contains("designer") {
            DetectedRole::Designer
        } else if text_lower.contains("manager") {
            DetectedRole::Manager
        } else {
            DetectedRole::Professional
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DetectedRole::SoftwareEngineer => "Software Engineer",
            DetectedRole::DataAnalyst => "Data Analyst",
            DetectedRole::Designer => "Designer",
            DetectedRole::Manager => "Manager",
            DetectedRole::Professional => "Professional",
        }
    }
}

/// First "N years"/"N+ yrs" count in the text, or [`DEFAULT_YEARS`].
pub fn detect_years(text: &str) -> u32 {
    YEARS_COUNT
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .unwrap_or(DEFAULT_YEARS)
}

/// Builds the summary paragraph. Template index is `seed % 3`.
pub fn generate_summary(text: &str, text_lower: &str, seed: u64) -> String {
    let years = detect_years(text);
    let role = DetectedRole::detect(text_lower).label().to_lowercase();

    match seed % TEMPLATE_COUNT {
        0 => format!(
            "Experienced {role} with {years}+ years building scalable solutions and leading cross-functional teams. \
             Passionate about creating innovative products that drive business growth and deliver exceptional user experiences."
        ),
        1 => format!(
            "Results-driven {role} with {years}+ years of experience in developing high-performance applications and technical leadership. \
             Expert in modern technologies with a proven track record of delivering impactful solutions."
        ),
        _ => format!(
            "Dynamic {role} with {years}+ years specializing in end-to-end product development and team collaboration. \
             Committed to leveraging cutting-edge technologies to solve complex business challenges."
        ),
    }
}

fn text_seed(text: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    text.hash(&mut hasher);
    hasher.finish()
}
