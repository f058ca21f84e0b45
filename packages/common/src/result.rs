use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::status::{SubmissionStatus, TestVerdict};

/// Result of judging a submission, owned by the external judge service.
///
/// Polled by submission id. A result whose `status` is not final is an
/// in-progress snapshot and carries whatever the judge has so far.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResult {
    /// Submission this result belongs to.
    pub submission_id: i32,
    /// Lifecycle status. Only final statuses are verdicts.
    pub status: SubmissionStatus,
    /// Overall pass/fail flag.
    pub passed: bool,
    /// Total score across all test cases.
    pub score: i32,
    /// 1-based attempt number for this assignment.
    pub attempt_number: i32,
    /// Individual test case results.
    #[serde(default)]
    pub test_cases: Vec<TestCaseResult>,
    /// Generated feedback text.
    #[serde(default)]
    pub feedback: Option<String>,
    /// Generated improvement suggestion.
    #[serde(default)]
    pub suggestion: Option<String>,
    /// Estimated time complexity (e.g., "O(n log n)").
    #[serde(default)]
    pub time_complexity: Option<String>,
    /// Estimated space complexity.
    #[serde(default)]
    pub space_complexity: Option<String>,
    /// Comments left by lecturers on this submission.
    #[serde(default)]
    pub teacher_feedback: Vec<TeacherFeedback>,
    /// When judging finished. `None` while in progress.
    #[serde(default)]
    pub judged_at: Option<DateTime<Utc>>,
}

impl SubmissionResult {
    /// Test cases the submitter is allowed to inspect.
    pub fn visible_cases(&self) -> impl Iterator<Item = &TestCaseResult> {
        self.test_cases.iter().filter(|c| c.visible)
    }

    /// Number of accepted test cases.
    pub fn passed_count(&self) -> usize {
        self.test_cases
            .iter()
            .filter(|c| c.verdict.is_accepted())
            .count()
    }

    /// Total number of test cases.
    pub fn total_count(&self) -> usize {
        self.test_cases.len()
    }
}

/// Result for a single test case execution.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCaseResult {
    /// Input fed to the program. Withheld for hidden cases.
    #[serde(default)]
    pub stdin: Option<String>,
    /// Program output. Withheld for hidden cases.
    #[serde(default)]
    pub stdout: Option<String>,
    /// Expected output. Withheld for hidden cases.
    #[serde(default)]
    pub expected_output: Option<String>,
    /// Verdict for this case.
    pub verdict: TestVerdict,
    /// Time used in milliseconds.
    #[serde(default)]
    pub time_ms: Option<i32>,
    /// Memory used in kilobytes.
    #[serde(default)]
    pub memory_kb: Option<i32>,
    /// Whether the submitter may see the case data.
    #[serde(default = "default_visible")]
    pub visible: bool,
}

fn default_visible() -> bool {
    true
}

/// A comment left by a lecturer on a submission.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherFeedback {
    /// Username of the lecturer.
    pub lecturer: String,
    /// Comment body.
    pub comment: String,
    /// When the comment was left.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_result() {
        let json = r#"{
            "submissionId": 42,
            "status": "Failed",
            "passed": false,
            "score": 60,
            "attemptNumber": 2,
            "testCases": [
                {"stdin": "1 2", "stdout": "3", "expectedOutput": "3",
                 "verdict": "Accepted", "timeMs": 4, "memoryKb": 1024, "visible": true},
                {"verdict": "WrongAnswer", "visible": false}
            ],
            "feedback": "Off-by-one on the last element.",
            "suggestion": "Check your loop bounds.",
            "timeComplexity": "O(n^2)",
            "spaceComplexity": "O(1)",
            "teacherFeedback": [
                {"lecturer": "drchen", "comment": "See chapter 4."}
            ]
        }"#;

        let result: SubmissionResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.submission_id, 42);
        assert!(result.status.is_final());
        assert_eq!(result.passed_count(), 1);
        assert_eq!(result.total_count(), 2);
        assert_eq!(result.visible_cases().count(), 1);
        assert_eq!(result.teacher_feedback.len(), 1);
        assert!(result.judged_at.is_none());
    }

    #[test]
    fn test_deserialize_in_progress_snapshot() {
        let json = r#"{
            "submissionId": 42,
            "status": "Judging",
            "passed": false,
            "score": 0,
            "attemptNumber": 1
        }"#;

        let result: SubmissionResult = serde_json::from_str(json).unwrap();
        assert!(!result.status.is_final());
        assert!(result.test_cases.is_empty());
    }

    #[test]
    fn test_hidden_case_defaults() {
        let json = r#"{"verdict": "Accepted"}"#;
        let case: TestCaseResult = serde_json::from_str(json).unwrap();
        assert!(case.visible);
        assert!(case.stdin.is_none());
    }
}
