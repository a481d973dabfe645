//! Keyword Matcher — partitions a job description's keyword set by presence
//! in the resume's keyword set.

use serde::{Deserialize, Serialize};

use crate::keywords::extract::{extract_keywords, KeywordSet};

/// Result of matching a job description against resume content.
///
/// `matched` and `missing` always partition the job-description keyword set
/// exactly: every job keyword lands in one of the two, and never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordMatch {
    /// Job keywords also present in the resume.
    pub matched: KeywordSet,
    /// Job keywords absent from the resume.
    pub missing: KeywordSet,
    /// Size of the full job keyword set, for "matching N of M" displays.
    pub total_job_keywords: usize,
}

/// Computes the keyword overlap between a job description and resume text.
///
/// Pure function of its two arguments; both sides go through
/// [`extract_keywords`], so word order, casing, punctuation, and repetition
/// in either input are irrelevant.
pub fn match_keywords(job_text: &str, resume_text: &str) -> KeywordMatch {
    let job = extract_keywords(job_text);
    let resume = extract_keywords(resume_text);

    let matched: KeywordSet = job.intersection(&resume).cloned().collect();
    let missing: KeywordSet = job.difference(&resume).cloned().collect();

    KeywordMatch {
        total_job_keywords: job.len(),
        matched,
        missing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&str]) -> KeywordSet {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_full_overlap() {
        let result = match_keywords("React JavaScript", "I use react and JavaScript daily");
        assert_eq!(result.matched, set(&["react", "javascript"]));
        assert!(result.missing.is_empty());
        assert_eq!(result.total_job_keywords, 2);
    }

    #[test]
    fn test_empty_resume_misses_everything() {
        let result = match_keywords("Salesforce Marketing Cloud experience required", "");
        assert!(result.matched.is_empty());
        assert_eq!(
            result.missing,
            set(&["salesforce", "marketing", "cloud", "experience", "required"])
        );
        assert_eq!(result.total_job_keywords, 5);
    }

    #[test]
    fn test_empty_job_description() {
        let result = match_keywords("", "Rust engineer with axum experience");
        assert!(result.matched.is_empty());
        assert!(result.missing.is_empty());
        assert_eq!(result.total_job_keywords, 0);
    }

    #[test]
    fn test_matched_and_missing_partition_job_set() {
        let job = "Senior Rust engineer: Kubernetes, Kafka, distributed systems, 5+ years";
        let resume = "Built distributed systems in Rust; operated Kafka clusters.";
        let result = match_keywords(job, resume);

        let union: KeywordSet = result.matched.union(&result.missing).cloned().collect();
        assert_eq!(union, extract_keywords(job));
        assert!(result.matched.is_disjoint(&result.missing));
        assert_eq!(
            result.matched.len() + result.missing.len(),
            result.total_job_keywords
        );
    }

    #[test]
    fn test_word_order_is_irrelevant() {
        let shuffled_job = match_keywords("JavaScript React", "daily react JavaScript use");
        let straight_job = match_keywords("React JavaScript", "I use react and JavaScript daily");
        assert_eq!(shuffled_job.matched, straight_job.matched);
        assert_eq!(shuffled_job.missing, straight_job.missing);
    }

    #[test]
    fn test_repetition_does_not_inflate_counts() {
        let result = match_keywords("Rust Rust Rust", "rust");
        assert_eq!(result.total_job_keywords, 1);
        assert_eq!(result.matched, set(&["rust"]));
    }

    #[test]
    fn test_serializes_to_sorted_arrays() {
        let result = match_keywords("Zig Ada Cobol", "ada");
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["matched"], serde_json::json!(["ada"]));
        assert_eq!(json["missing"], serde_json::json!(["cobol", "zig"]));
        assert_eq!(json["total_job_keywords"], 3);
    }
}
