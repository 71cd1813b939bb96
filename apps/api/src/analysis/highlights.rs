//! Skills, project sentences and role keywords pulled out of the résumé.

use crate::analysis::patterns::SENTENCE_TERMINATORS;
use crate::analysis::report::ExtractedHighlights;
use crate::analysis::vocabulary::Vocabulary;

pub const MAX_SKILLS: usize = 8;
pub const MAX_PROJECTS: usize = 3;
pub const MAX_KEYWORDS: usize = 5;
pub const PROJECT_PREVIEW_CHARS: usize = 100;
const ELLIPSIS: &str = "...";

pub fn extract_highlights(
    vocabulary: &Vocabulary,
    text: &str,
    text_lower: &str,
) -> ExtractedHighlights {
    let skills = vocabulary
        .matched_skills(text_lower)
        .into_iter()
        .take(MAX_SKILLS)
        .map(String::from)
        .collect();

    let projects = SENTENCE_TERMINATORS
        .split(text)
        .filter(|sentence| vocabulary.is_project_sentence(sentence))
        .take(MAX_PROJECTS)
        .map(project_preview)
        .collect();

    let keywords = vocabulary
        .matched_industry_terms(text_lower)
        .into_iter()
        .take(MAX_KEYWORDS)
        .map(String::from)
        .collect();

    ExtractedHighlights {
        skills,
        projects,
        keywords,
    }
}

/// Trimmed sentence cut to 100 characters. The ellipsis is appended even when
/// nothing was cut.
fn project_preview(sentence: &str) -> String {
    let mut preview: String = sentence.trim().chars().take(PROJECT_PREVIEW_CHARS).collect();
    preview.push_str(ELLIPSIS);
    preview
}
