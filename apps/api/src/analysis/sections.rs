//! Per-section advice. Static content: the résumé text is not consulted.

use std::collections::BTreeMap;

use crate::analysis::report::SectionCategory;

pub fn section_advice(category: SectionCategory) -> &'static [&'static str] {
    match category {
        SectionCategory::Experience => &[
            "Add specific metrics and quantified achievements (e.g., \"increased efficiency by 40%\")",
            "Include technologies and tools used in each role",
            "Highlight leadership responsibilities and team sizes",
        ],
        SectionCategory::Skills => &[
            "Organize skills by category (Programming Languages, Frameworks, Tools)",
            "Add proficiency levels or years of experience",
            "Include both technical and soft skills",
        ],
        SectionCategory::Education => &[
            "Include relevant coursework and academic projects",
            "Add GPA if above 3.5",
            "Mention academic achievements or honors",
        ],
        SectionCategory::Projects => &[
            "Provide links to live demos or GitHub repositories",
            "Quantify project impact and user metrics",
            "Highlight specific technologies and methodologies used",
        ],
    }
}

pub fn section_improvements() -> BTreeMap<SectionCategory, Vec<String>> {
    SectionCategory::ALL
        .into_iter()
        .map(|category| {
            let advice = section_advice(category)
                .iter()
                .map(|s| s.to_string())
                .collect();
            (category, advice)
        })
        .collect()
}
