//! Rendering of judge results and tabular listings.
//!
//! Pure string builders: everything here maps already-fetched data to
//! terminal output so it can be unit tested without a TTY.

use console::{measure_text_width, style};

use common::SubmissionStatus;
use common::result::{SubmissionResult, TestCaseResult};

/// Longest cell content before truncation in test case tables.
const MAX_CELL: usize = 24;

/// Render a full submission result: banner, score, test case table and
/// feedback sections.
pub fn render_result(result: &SubmissionResult) -> String {
    let mut out = String::new();
    out.push_str(&banner(result));
    out.push('\n');
    out.push_str(&score_line(result));
    out.push('\n');

    if !result.test_cases.is_empty() {
        out.push('\n');
        out.push_str(&test_case_table(&result.test_cases));
    }

    if result.time_complexity.is_some() || result.space_complexity.is_some() {
        out.push('\n');
        out.push_str(&complexity_line(result));
        out.push('\n');
    }

    if let Some(feedback) = &result.feedback {
        out.push('\n');
        out.push_str(&section("Feedback", feedback));
    }
    if let Some(suggestion) = &result.suggestion {
        out.push('\n');
        out.push_str(&section("Suggestion", suggestion));
    }

    if !result.teacher_feedback.is_empty() {
        out.push('\n');
        out.push_str(&format!("{}\n", style("Teacher feedback").bold()));
        for fb in &result.teacher_feedback {
            out.push_str(&format!("  [{}] {}\n", style(&fb.lecturer).cyan(), fb.comment));
        }
    }

    out
}

fn banner(result: &SubmissionResult) -> String {
    let label = match result.status {
        SubmissionStatus::Passed => style("PASSED").green().bold(),
        SubmissionStatus::Failed => style("FAILED").red().bold(),
        SubmissionStatus::JudgeError => style("JUDGE ERROR").yellow().bold(),
        SubmissionStatus::Pending | SubmissionStatus::Judging => {
            style("IN PROGRESS").cyan().bold()
        }
    };
    format!(
        "{} (submission #{}, attempt {})",
        label, result.submission_id, result.attempt_number
    )
}

fn score_line(result: &SubmissionResult) -> String {
    let cases = if result.test_cases.is_empty() {
        String::new()
    } else {
        format!(
            "    Test cases: {}/{} passed",
            result.passed_count(),
            result.total_count()
        )
    };
    format!("Score: {}{}", result.score, cases)
}

fn complexity_line(result: &SubmissionResult) -> String {
    let time = result.time_complexity.as_deref().unwrap_or("?");
    let space = result.space_complexity.as_deref().unwrap_or("?");
    format!("Estimated complexity: time {time}, space {space}")
}

fn section(title: &str, body: &str) -> String {
    let mut out = format!("{}\n", style(title).bold());
    for line in body.lines() {
        out.push_str(&format!("  {line}\n"));
    }
    out
}

/// Per-test-case table. Hidden cases show a placeholder instead of their
/// input and expected output.
pub fn test_case_table(cases: &[TestCaseResult]) -> String {
    let headers = ["#", "Verdict", "Time", "Memory", "Stdin", "Expected", "Got"];
    let rows: Vec<Vec<String>> = cases
        .iter()
        .enumerate()
        .map(|(i, case)| {
            let verdict = if case.verdict.is_accepted() {
                style(case.verdict.short_code()).green().to_string()
            } else {
                style(case.verdict.short_code()).red().to_string()
            };
            let time = case
                .time_ms
                .map(|ms| format!("{ms} ms"))
                .unwrap_or_else(|| "-".into());
            let memory = case
                .memory_kb
                .map(|kb| format!("{kb} KB"))
                .unwrap_or_else(|| "-".into());
            let (stdin, expected, got) = if case.visible {
                (
                    cell(case.stdin.as_deref()),
                    cell(case.expected_output.as_deref()),
                    cell(case.stdout.as_deref()),
                )
            } else {
                let hidden = style("(hidden)").dim().to_string();
                (hidden.clone(), hidden.clone(), hidden)
            };
            vec![
                (i + 1).to_string(),
                verdict,
                time,
                memory,
                stdin,
                expected,
                got,
            ]
        })
        .collect();

    format_table(&headers, &rows)
}

fn cell(value: Option<&str>) -> String {
    truncate(value.unwrap_or("-"), MAX_CELL)
}

/// Truncate to `max` characters, appending an ellipsis. Newlines collapse
/// so one case cannot break the table.
fn truncate(s: &str, max: usize) -> String {
    let flat = s.replace('\n', "\\n");
    if flat.chars().count() <= max {
        flat
    } else {
        let cut: String = flat.chars().take(max.saturating_sub(1)).collect();
        format!("{cut}…")
    }
}

/// Left-aligned plain table with two-space gutters. Widths are measured
/// ANSI-aware so styled cells line up.
pub fn format_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let columns = headers.len();
    let mut widths: Vec<usize> = headers.iter().map(|h| measure_text_width(h)).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(columns) {
            widths[i] = widths[i].max(measure_text_width(cell));
        }
    }

    let mut out = String::new();
    render_row(&mut out, &widths, headers.iter().map(|h| h.to_string()));
    for row in rows {
        render_row(&mut out, &widths, row.iter().cloned());
    }
    out
}

fn render_row(out: &mut String, widths: &[usize], cells: impl Iterator<Item = String>) {
    let mut line = String::new();
    for (i, cell) in cells.enumerate() {
        let pad = widths[i].saturating_sub(measure_text_width(&cell));
        line.push_str(&cell);
        if i + 1 < widths.len() {
            line.push_str(&" ".repeat(pad + 2));
        }
    }
    out.push_str(line.trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::TestVerdict;
    use common::result::TeacherFeedback;
    use console::strip_ansi_codes;

    fn case(verdict: TestVerdict, visible: bool) -> TestCaseResult {
        TestCaseResult {
            stdin: Some("1 2".into()),
            stdout: Some("3".into()),
            expected_output: Some("3".into()),
            verdict,
            time_ms: Some(4),
            memory_kb: Some(1024),
            visible,
        }
    }

    fn sample() -> SubmissionResult {
        SubmissionResult {
            submission_id: 42,
            status: SubmissionStatus::Failed,
            passed: false,
            score: 60,
            attempt_number: 2,
            test_cases: vec![
                case(TestVerdict::Accepted, true),
                case(TestVerdict::WrongAnswer, false),
            ],
            feedback: Some("Off-by-one on the last element.".into()),
            suggestion: Some("Check your loop bounds.".into()),
            time_complexity: Some("O(n^2)".into()),
            space_complexity: Some("O(1)".into()),
            teacher_feedback: vec![TeacherFeedback {
                lecturer: "drchen".into(),
                comment: "See chapter 4.".into(),
                created_at: None,
            }],
            judged_at: None,
        }
    }

    #[test]
    fn test_render_failed_result() {
        let text = render_result(&sample());
        let plain = strip_ansi_codes(&text).to_string();
        assert!(plain.contains("FAILED (submission #42, attempt 2)"));
        assert!(plain.contains("Score: 60"));
        assert!(plain.contains("1/2 passed"));
        assert!(plain.contains("Off-by-one"));
        assert!(plain.contains("time O(n^2), space O(1)"));
        assert!(plain.contains("[drchen] See chapter 4."));
    }

    #[test]
    fn test_hidden_cases_are_masked() {
        let table = test_case_table(&[case(TestVerdict::WrongAnswer, false)]);
        let plain = strip_ansi_codes(&table).to_string();
        assert!(plain.contains("(hidden)"));
        assert!(!plain.contains("1 2"));
    }

    #[test]
    fn test_passed_banner() {
        let mut result = sample();
        result.status = SubmissionStatus::Passed;
        result.passed = true;
        let plain = strip_ansi_codes(&render_result(&result)).to_string();
        assert!(plain.starts_with("PASSED"));
    }

    #[test]
    fn test_truncate_collapses_newlines() {
        assert_eq!(truncate("a\nb", 10), "a\\nb");
        let long = "x".repeat(40);
        let cut = truncate(&long, 8);
        assert_eq!(cut.chars().count(), 8);
        assert!(cut.ends_with('…'));
    }

    #[test]
    fn test_format_table_alignment() {
        let table = format_table(
            &["Id", "Title"],
            &[
                vec!["1".into(), "Intro".into()],
                vec!["200".into(), "Graphs".into()],
            ],
        );
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        // Both data rows align their second column.
        let title_col = lines[1].find("Intro").unwrap();
        assert_eq!(lines[2].find("Graphs").unwrap(), title_col);
    }
}
