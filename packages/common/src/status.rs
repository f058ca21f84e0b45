use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Status of a submission as reported by the judge service.
///
/// A submission only has a verdict once its status is final; anything the
/// judge returns before that is an in-progress snapshot and pollers must
/// keep waiting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum SubmissionStatus {
    /// Accepted by the platform, not yet picked up by the judge.
    Pending,
    /// Currently compiling or running test cases.
    Judging,
    /// All test cases passed.
    Passed,
    /// One or more test cases failed.
    Failed,
    /// The judge could not produce a verdict (internal error).
    JudgeError,
}

impl SubmissionStatus {
    /// Returns true if judging is complete and the result is a verdict.
    pub fn is_final(&self) -> bool {
        !matches!(self, Self::Pending | Self::Judging)
    }

    /// Returns true if the submission passed.
    pub fn is_passed(&self) -> bool {
        matches!(self, Self::Passed)
    }

    /// All possible status values.
    pub const ALL: &'static [SubmissionStatus] = &[
        Self::Pending,
        Self::Judging,
        Self::Passed,
        Self::Failed,
        Self::JudgeError,
    ];

    /// All final statuses.
    pub const FINAL: &'static [SubmissionStatus] =
        &[Self::Passed, Self::Failed, Self::JudgeError];

    /// Returns the string representation (PascalCase).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Judging => "Judging",
            Self::Passed => "Passed",
            Self::Failed => "Failed",
            Self::JudgeError => "JudgeError",
        }
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Default for SubmissionStatus {
    fn default() -> Self {
        Self::Pending
    }
}

impl FromStr for SubmissionStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(Self::Pending),
            "Judging" => Ok(Self::Judging),
            "Passed" => Ok(Self::Passed),
            "Failed" => Ok(Self::Failed),
            "JudgeError" => Ok(Self::JudgeError),
            _ => Err(ParseStatusError::new(s, Self::ALL.iter().map(|v| v.as_str()))),
        }
    }
}

/// Verdict for a single test case execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum TestVerdict {
    /// Output matched the expected output.
    Accepted,
    /// Output did not match.
    WrongAnswer,
    /// Exceeded the time limit.
    TimeLimitExceeded,
    /// Exceeded the memory limit.
    MemoryLimitExceeded,
    /// Program crashed or exited with a non-zero code.
    RuntimeError,
    /// Source failed to compile.
    CompilationError,
    /// Internal judge error while running this case.
    SystemError,
}

impl TestVerdict {
    /// Returns true if the test case passed.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }

    /// All possible verdict values.
    pub const ALL: &'static [TestVerdict] = &[
        Self::Accepted,
        Self::WrongAnswer,
        Self::TimeLimitExceeded,
        Self::MemoryLimitExceeded,
        Self::RuntimeError,
        Self::CompilationError,
        Self::SystemError,
    ];

    /// Returns the string representation (PascalCase).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Accepted => "Accepted",
            Self::WrongAnswer => "WrongAnswer",
            Self::TimeLimitExceeded => "TimeLimitExceeded",
            Self::MemoryLimitExceeded => "MemoryLimitExceeded",
            Self::RuntimeError => "RuntimeError",
            Self::CompilationError => "CompilationError",
            Self::SystemError => "SystemError",
        }
    }

    /// Short code used in compact table output (e.g., "AC", "WA").
    pub fn short_code(&self) -> &'static str {
        match self {
            Self::Accepted => "AC",
            Self::WrongAnswer => "WA",
            Self::TimeLimitExceeded => "TLE",
            Self::MemoryLimitExceeded => "MLE",
            Self::RuntimeError => "RE",
            Self::CompilationError => "CE",
            Self::SystemError => "SE",
        }
    }
}

impl fmt::Display for TestVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TestVerdict {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|v| v.as_str() == s)
            .copied()
            .ok_or_else(|| ParseStatusError::new(s, Self::ALL.iter().map(|v| v.as_str())))
    }
}

/// Error when parsing an invalid status or verdict string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStatusError {
    invalid: String,
    valid: String,
}

impl ParseStatusError {
    fn new<'a>(invalid: &str, valid: impl Iterator<Item = &'a str>) -> Self {
        Self {
            invalid: invalid.to_string(),
            valid: valid.collect::<Vec<_>>().join(", "),
        }
    }
}

impl fmt::Display for ParseStatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid status '{}'. Valid values: {}",
            self.invalid, self.valid
        )
    }
}

impl std::error::Error for ParseStatusError {}
