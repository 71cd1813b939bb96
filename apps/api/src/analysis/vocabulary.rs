//! Keyword vocabularies consulted by the analyzer.
//!
//! All terms are stored lowercase and matched as plain substrings of the
//! lowercased résumé text. Order matters: highlight lists are reported in
//! vocabulary order, never in the order terms appear in the résumé.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

const DEFAULT_SKILLS: &[&str] = &[
    "javascript",
    "python",
    "java",
    "react",
    "angular",
    "vue",
    "node.js",
    "express",
    "mongodb",
    "sql",
    "postgresql",
    "mysql",
    "aws",
    "azure",
    "docker",
    "kubernetes",
    "git",
    "github",
    "ci/cd",
    "agile",
    "scrum",
    "html",
    "css",
    "bootstrap",
    "tailwind",
];

const DEFAULT_PROJECT_VERBS: &[&str] = &[
    "developed",
    "built",
    "created",
    "designed",
    "implemented",
    "deployed",
    "project",
    "application",
    "website",
    "system",
    "platform",
    "tool",
];

const DEFAULT_INDUSTRY_TERMS: &[&str] = &[
    "software engineer",
    "full stack",
    "frontend",
    "backend",
    "developer",
    "programmer",
    "architect",
    "analyst",
    "manager",
    "lead",
    "senior",
];

/// Read-only keyword configuration handed to the analyzer at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vocabulary {
    /// Technology terms counted toward the skills highlight and the rating.
    pub skills: Vec<String>,
    /// Terms that mark a sentence as describing a project.
    pub project_verbs: Vec<String>,
    /// Role and seniority terms reported as keywords.
    pub industry_terms: Vec<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            skills: to_owned_terms(DEFAULT_SKILLS),
            project_verbs: to_owned_terms(DEFAULT_PROJECT_VERBS),
            industry_terms: to_owned_terms(DEFAULT_INDUSTRY_TERMS),
        }
    }
}

impl Vocabulary {
    /// Loads a vocabulary from a JSON file shaped like
    /// `{"skills": [...], "project_verbs": [...], "industry_terms": [...]}`.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read vocabulary file '{}'", path.display()))?;
        let parsed: Vocabulary = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid vocabulary JSON in '{}'", path.display()))?;
        Ok(parsed.normalized())
    }

    /// Lowercases and trims every term, dropping blanks.
    pub fn normalized(self) -> Self {
        Self {
            skills: normalize_terms(self.skills),
            project_verbs: normalize_terms(self.project_verbs),
            industry_terms: normalize_terms(self.industry_terms),
        }
    }

    /// Skill terms present in `text_lower`, in vocabulary order.
    pub fn matched_skills<'a>(&'a self, text_lower: &str) -> Vec<&'a str> {
        matching_terms(&self.skills, text_lower)
    }

    /// Industry/role terms present in `text_lower`, in vocabulary order.
    pub fn matched_industry_terms<'a>(&'a self, text_lower: &str) -> Vec<&'a str> {
        matching_terms(&self.industry_terms, text_lower)
    }

    /// True if the sentence mentions any project term (case-insensitive).
    pub fn is_project_sentence(&self, sentence: &str) -> bool {
        let lower = sentence.to_lowercase();
        self.project_verbs.iter().any(|verb| lower.contains(verb.as_str()))
    }
}

fn to_owned_terms(terms: &[&str]) -> Vec<String> {
    terms.iter().map(|t| t.to_string()).collect()
}

fn normalize_terms(terms: Vec<String>) -> Vec<String> {
    terms
        .into_iter()
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}

fn matching_terms<'a>(terms: &'a [String], text_lower: &str) -> Vec<&'a str> {
    terms
        .iter()
        .filter(|term| text_lower.contains(term.as_str()))
        .map(String::as_str)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_vocabulary_sizes() {
        let vocab = Vocabulary::default();
        assert_eq!(vocab.skills.len(), 25);
        assert_eq!(vocab.project_verbs.len(), 12);
        assert_eq!(vocab.industry_terms.len(), 11);
    }

    #[test]
    fn test_matched_skills_in_vocabulary_order() {
        let vocab = Vocabulary::default();
        let matched = vocab.matched_skills("docker, aws and python");
        assert_eq!(matched, vec!["python", "aws", "docker"]);
    }

    #[test]
    fn test_substring_matching_counts_nested_terms() {
        // "javascript" contains "java"; "github" contains "git".
        let vocab = Vocabulary::default();
        let matched = vocab.matched_skills("javascript on github");
        assert_eq!(matched, vec!["javascript", "java", "git", "github"]);
    }

    #[test]
    fn test_is_project_sentence_case_insensitive() {
        let vocab = Vocabulary::default();
        assert!(vocab.is_project_sentence("DEPLOYED a service"));
        assert!(!vocab.is_project_sentence("Enjoys hiking"));
    }

    #[test]
    fn test_from_json_file_normalizes_terms() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"skills": [" Rust ", "", "Tokio"], "project_verbs": ["Shipped"], "industry_terms": []}}"#
        )
        .unwrap();

        let vocab = Vocabulary::from_json_file(file.path()).unwrap();
        assert_eq!(vocab.skills, vec!["rust", "tokio"]);
        assert_eq!(vocab.project_verbs, vec!["shipped"]);
        assert!(vocab.industry_terms.is_empty());
    }

    #[test]
    fn test_from_json_file_missing_file_errors() {
        let err = Vocabulary::from_json_file(Path::new("/nonexistent/vocab.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read vocabulary file"));
    }
}
