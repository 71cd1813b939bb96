//! Fixed demonstration report served by `GET /api/sample`.

use std::collections::BTreeMap;

use crate::analysis::report::{AnalysisReport, ExtractedHighlights, SectionCategory};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn sample_report() -> AnalysisReport {
    AnalysisReport {
        overall_rating: 8.0,
        overall_score: 80,
        extracted_highlights: ExtractedHighlights {
            skills: strings(&[
                "React",
                "JavaScript",
                "Python",
                "AWS",
                "Git",
                "SQL",
                "Docker",
                "Node.js",
            ]),
            projects: strings(&[
                "Real-time Chat Application with Socket.io",
                "E-commerce Dashboard with Analytics",
                "AI-powered Resume Analyzer (C-VisioN)",
            ]),
            keywords: strings(&[
                "Software Engineer",
                "Full Stack Developer",
                "Frontend Development",
                "Backend APIs",
                "Cloud Computing",
            ]),
        },
        professional_summary: "Innovative software engineer with 4+ years developing high-performance web \
            applications and leading technical initiatives. Expert in modern JavaScript frameworks with a \
            proven track record of delivering scalable solutions that drive business growth."
            .to_string(),
        section_improvements: BTreeMap::from([
            (
                SectionCategory::Experience,
                strings(&[
                    "Include specific impact metrics (e.g., \"improved performance by 40%\")",
                    "Add team size and leadership responsibilities",
                ]),
            ),
            (
                SectionCategory::Skills,
                strings(&[
                    "Group technical skills by proficiency level",
                    "Add soft skills relevant to your target role",
                ]),
            ),
            (
                SectionCategory::Education,
                strings(&[
                    "Include relevant academic projects",
                    "Mention any honors or distinctions",
                ]),
            ),
            (
                SectionCategory::Projects,
                strings(&[
                    "Add deployment links or GitHub repositories",
                    "Quantify project outcomes and user impact",
                ]),
            ),
        ]),
        strengths: strings(&[
            "Excellent technical depth and breadth",
            "Strong project portfolio showcasing real-world applications",
            "Clear demonstration of full-stack capabilities",
            "Professional formatting and structure",
        ]),
        improvements: strings(&[
            "Add more quantified achievements with specific metrics",
            "Include leadership and collaboration examples",
            "Expand on problem-solving methodologies",
            "Add links to live projects or portfolio",
        ]),
    }
}
