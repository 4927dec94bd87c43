//! Topic Inference
//!
//! Infers interview topics from the job description and resume with a simple
//! keyword scan. A real implementation would call an LLM for deeper analysis;
//! the contract callers rely on is that the result is deterministic and never
//! empty.

use crate::interview::InterviewContext;

/// Keyword table scanned against the interview context, in emission order.
const KEYWORDS: [&str; 6] = [
    "python",
    "javascript",
    "java",
    "frontend",
    "backend",
    "database",
];

/// Topic emitted when no keyword matches.
const FALLBACK_TOPIC: &str = "general";

/// Extracts interview topics from the context.
///
/// Matching is a case-insensitive substring scan over the concatenated job
/// description and resume. Keywords are emitted in table order; an input with
/// no match yields `["general"]`.
pub fn determine_topics(context: &InterviewContext) -> Vec<String> {
    let haystack = format!(
        "{} {}",
        context.job_description,
        context.candidate_resume.as_deref().unwrap_or_default()
    )
    .to_lowercase();

    let topics: Vec<String> = KEYWORDS
        .iter()
        .copied()
        .filter(|keyword| haystack.contains(keyword))
        .map(str::to_string)
        .collect();

    if topics.is_empty() {
        vec![FALLBACK_TOPIC.to_string()]
    } else {
        topics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(job_description: &str, candidate_resume: Option<&str>) -> InterviewContext {
        InterviewContext {
            job_description: job_description.to_string(),
            candidate_resume: candidate_resume.map(str::to_string),
        }
    }

    #[test]
    fn test_no_keyword_yields_fallback() {
        let topics = determine_topics(&context("Staff accountant", None));
        assert_eq!(topics, vec!["general"]);
    }

    #[test]
    fn test_empty_context_yields_fallback() {
        let topics = determine_topics(&InterviewContext::default());
        assert_eq!(topics, vec!["general"]);
    }

    #[test]
    fn test_keywords_emitted_in_table_order() {
        let topics = determine_topics(&context("database tuning and python scripting", None));
        assert_eq!(topics, vec!["python", "database"]);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let topics = determine_topics(&context("Senior JAVA engineer", None));
        assert_eq!(topics, vec!["java"]);
    }

    #[test]
    fn test_resume_contributes_to_matches() {
        let topics = determine_topics(&context(
            "Staff accountant",
            Some("Hobby Python projects"),
        ));
        assert_eq!(topics, vec!["python"]);
    }

    #[test]
    fn test_javascript_also_matches_java() {
        // Substring semantics: "javascript" contains "java".
        let topics = determine_topics(&context("JavaScript developer", None));
        assert_eq!(topics, vec!["javascript", "java"]);
    }

    #[test]
    fn test_deterministic_for_same_input() {
        let input = context("python, javascript, frontend", Some("database work"));
        assert_eq!(determine_topics(&input), determine_topics(&input));
    }
}
