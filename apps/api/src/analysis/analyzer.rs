//! Rule-based résumé analyzer.
//!
//! Each sub-analysis scans the full text independently; their outputs are
//! merged into one [`AnalysisReport`]. The analyzer holds only read-only
//! configuration, so a single instance is shared across requests.

use crate::analysis::feedback::{identify_strengths, suggest_improvements};
use crate::analysis::highlights::extract_highlights;
use crate::analysis::rating::RatingSignals;
use crate::analysis::report::AnalysisReport;
use crate::analysis::sections::section_improvements;
use crate::analysis::summary::{generate_summary, SummarySelection};
use crate::analysis::vocabulary::Vocabulary;

#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    vocabulary: Vocabulary,
    selection: SummarySelection,
}

impl Analyzer {
    pub fn new(vocabulary: Vocabulary, selection: SummarySelection) -> Self {
        Self {
            vocabulary,
            selection,
        }
    }

    /// Analyzes `text`, choosing the summary template per the configured
    /// [`SummarySelection`]. Empty text is accepted and yields the base report.
    pub fn analyze(&self, text: &str) -> AnalysisReport {
        let seed = self.selection.seed_for(text);
        self.analyze_with_seed(text, seed)
    }

    /// Fully deterministic: the summary template is `seed % 3`.
    pub fn analyze_with_seed(&self, text: &str, seed: u64) -> AnalysisReport {
        let text_lower = text.to_lowercase();
        let skill_count = self.vocabulary.matched_skills(&text_lower).len();
        let signals = RatingSignals::detect(text, &text_lower, skill_count);

        AnalysisReport {
            overall_rating: signals.rating(),
            overall_score: signals.score(),
            extracted_highlights: extract_highlights(&self.vocabulary, text, &text_lower),
            professional_summary: generate_summary(text, &text_lower, seed),
            section_improvements: section_improvements(),
            strengths: identify_strengths(text, &text_lower, skill_count),
            improvements: suggest_improvements(text, &text_lower, skill_count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::highlights::{MAX_KEYWORDS, MAX_PROJECTS, MAX_SKILLS};

    const EXAMPLE: &str = "Experienced software engineer with 5 years experience. \
        Built a scalable e-commerce platform using React and AWS, increasing sales by 20%. \
        Led a team of 4 engineers.";

    const KITCHEN_SINK: &str = "Jane Doe | jane@mail.com | 555-123-4567. \
        Senior software engineer and full stack developer with 8 years of experience. \
        Developed microservices in JavaScript, Python, Java, React, Angular, Vue, Node.js, \
        Express, MongoDB, SQL, PostgreSQL, MySQL, AWS, Azure, Docker and Kubernetes. \
        Built a platform serving 10000 users. Created a tool that saved $200000. \
        Managed a team of 12. Deployed CI/CD pipelines. University degree in CS. \
        Portfolio at github.com/jane.";

    #[test]
    fn test_example_rating_is_7_4() {
        let report = Analyzer::default().analyze(EXAMPLE);
        assert_eq!(report.overall_rating, 7.4);
        assert_eq!(report.overall_score, 74);
        assert_eq!(report.extracted_highlights.skills, vec!["react", "aws"]);
        assert_eq!(report.extracted_highlights.keywords, vec!["software engineer"]);
    }

    #[test]
    fn test_example_projects_and_feedback() {
        let report = Analyzer::default().analyze(EXAMPLE);
        assert_eq!(
            report.extracted_highlights.projects,
            vec!["Built a scalable e-commerce platform using React and AWS, increasing sales by 20%..."]
        );
        assert_eq!(
            report.strengths,
            vec![
                "Demonstrated leadership and management experience",
                "Includes quantified achievements and measurable impact",
            ]
        );
        assert_eq!(
            report.improvements,
            vec![
                "Include links to portfolio, GitHub, or personal website",
                "Expand technical skills section with relevant technologies",
            ]
        );
    }

    #[test]
    fn test_text_without_patterns_rates_base() {
        let report = Analyzer::default().analyze("Hello there, nice to meet you");
        assert_eq!(report.overall_rating, 5.0);
        assert_eq!(report.overall_score, 50);
    }

    #[test]
    fn test_empty_text_yields_base_report() {
        let report = Analyzer::default().analyze_with_seed("", 0);
        assert_eq!(report.overall_rating, 5.0);
        assert_eq!(report.overall_score, 50);
        assert!(report.extracted_highlights.skills.is_empty());
        assert_eq!(report.strengths.len(), 2);
        assert_eq!(report.improvements.len(), 4);
        assert!(report
            .professional_summary
            .starts_with("Experienced professional with 2+ years"));
    }

    #[test]
    fn test_rich_resume_hits_ten_and_caps_lists() {
        let report = Analyzer::default().analyze(KITCHEN_SINK);
        assert_eq!(report.overall_rating, 10.0);
        assert_eq!(report.overall_score, 100);
        assert_eq!(report.extracted_highlights.skills.len(), MAX_SKILLS);
        assert_eq!(report.extracted_highlights.projects.len(), MAX_PROJECTS);
        assert!(report.extracted_highlights.keywords.len() <= MAX_KEYWORDS);
        assert_eq!(
            report.improvements,
            vec!["Consider adding more industry-specific keywords"]
        );
    }

    #[test]
    fn test_rating_bounds_and_tenths() {
        let analyzer = Analyzer::default();
        for text in [EXAMPLE, KITCHEN_SINK, "", "react", "5 years experience"] {
            let report = analyzer.analyze(text);
            assert!((0.0..=10.0).contains(&report.overall_rating));
            let tenths = report.overall_rating * 10.0;
            assert!((tenths - tenths.round()).abs() < 1e-9);
            assert_eq!(report.overall_score as f64, tenths.round());
            assert!(!report.strengths.is_empty());
            assert!(!report.improvements.is_empty());
        }
    }

    #[test]
    fn test_repeat_analysis_is_identical() {
        let analyzer = Analyzer::default();
        assert_eq!(analyzer.analyze(KITCHEN_SINK), analyzer.analyze(KITCHEN_SINK));
    }

    #[test]
    fn test_random_selection_only_varies_summary() {
        let analyzer = Analyzer::new(Vocabulary::default(), SummarySelection::Random);
        let a = analyzer.analyze(EXAMPLE);
        let b = analyzer.analyze(EXAMPLE);
        assert_eq!(a.overall_rating, b.overall_rating);
        assert_eq!(a.extracted_highlights, b.extracted_highlights);
        assert_eq!(a.section_improvements, b.section_improvements);
        assert_eq!(a.strengths, b.strengths);
        assert_eq!(a.improvements, b.improvements);
    }

    #[test]
    fn test_explicit_seed_selects_template() {
        let analyzer = Analyzer::default();
        let report = analyzer.analyze_with_seed(EXAMPLE, 1);
        assert_eq!(
            report.professional_summary,
            "Results-driven software engineer with 5+ years of experience in developing \
             high-performance applications and technical leadership. Expert in modern \
             technologies with a proven track record of delivering impactful solutions."
        );
    }

    #[test]
    fn test_custom_vocabulary_is_used() {
        let vocabulary = Vocabulary {
            skills: vec!["rust".to_string(), "tokio".to_string()],
            project_verbs: vec!["shipped".to_string()],
            industry_terms: vec!["staff".to_string()],
        };
        let analyzer = Analyzer::new(vocabulary, SummarySelection::TextHash);
        let report = analyzer.analyze("Staff engineer. Shipped a Rust and Tokio service. Likes React.");

        assert_eq!(report.extracted_highlights.skills, vec!["rust", "tokio"]);
        assert_eq!(
            report.extracted_highlights.projects,
            vec!["Shipped a Rust and Tokio service..."]
        );
        assert_eq!(report.extracted_highlights.keywords, vec!["staff"]);
        // 5.0 + 2 × 0.2
        assert_eq!(report.overall_rating, 5.4);
    }
}
