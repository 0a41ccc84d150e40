//! Plain-text and JSON renderings of a [`Report`].
//!
//! The text layout is the one existing consumers parse:
//!
//! ```text
//! 📑 Plagiarism Report
//! ------------------------------------------------------------
//! a.txt  <-->  b.txt  :  86.36% similar
//!    Common content snippets:
//!      - the quick brown fox
//! ------------------------------------------------------------
//! ```
//!
//! The saved file uses the same pair blocks without the header and with a
//! one-space indent on the snippet label.

use std::fmt::Write as _;

use sim_compare::{PairResult, Report};

/// Separator printed after the header and after every pair.
pub const RULE: &str = "------------------------------------------------------------";

const HEADER: &str = "📑 Plagiarism Report";

/// Which of the two historical text layouts to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Interactive output: header line and rule, indented snippet label.
    Console,
    /// `detailed_report.txt`: no header, snippet label indented by one space.
    File,
}

impl Layout {
    fn snippet_label(self) -> &'static str {
        match self {
            Layout::Console => "   Common content snippets:",
            Layout::File => " Common content snippets:",
        }
    }
}

/// Render `report` as text in the given layout.
///
/// An empty report renders as the header alone (console) or as nothing
/// (file).
pub fn render_text(report: &Report, layout: Layout) -> String {
    let mut out = String::new();
    if layout == Layout::Console {
        out.push_str(HEADER);
        out.push('\n');
        out.push_str(RULE);
        out.push('\n');
    }
    for pair in &report.pairs {
        render_pair(&mut out, pair, layout);
    }
    out
}

/// Pretty-printed JSON of the whole report.
pub fn render_json(report: &Report) -> sim_core::Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Format a score the way earlier reports printed it: shortest decimal
/// that round-trips, always with a fractional part (`100.0`, `0.0`,
/// `86.36`).
pub fn format_score(score: f64) -> String {
    let mut text = score.to_string();
    if score.is_finite() && !text.contains('.') {
        text.push_str(".0");
    }
    text
}

fn render_pair(out: &mut String, pair: &PairResult, layout: Layout) {
    // Writing into a String cannot fail.
    let _ = writeln!(
        out,
        "{}  <-->  {}  :  {}% similar",
        pair.left,
        pair.right,
        format_score(pair.score)
    );
    if !pair.fragments.is_empty() {
        out.push_str(layout.snippet_label());
        out.push('\n');
        for fragment in &pair.fragments {
            let _ = writeln!(out, "     - {}", fragment);
        }
    }
    out.push_str(RULE);
    out.push('\n');
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use sim_compare::{compare_all, DocumentSummary};
    use sim_core::Document;

    fn report_with(pairs: Vec<PairResult>) -> Report {
        Report {
            run_id: uuid::Uuid::new_v4(),
            generated_at: chrono::Utc::now(),
            elapsed_ms: 0,
            documents: Vec::<DocumentSummary>::new(),
            pairs,
        }
    }

    fn pair(left: &str, right: &str, score: f64, fragments: &[&str]) -> PairResult {
        PairResult {
            left: left.to_string(),
            right: right.to_string(),
            score,
            matched_chars: 0,
            fragments: fragments.iter().map(|f| f.to_string()).collect(),
        }
    }

    #[test]
    fn rule_is_sixty_dashes() {
        assert_eq!(RULE.len(), 60);
        assert!(RULE.chars().all(|c| c == '-'));
    }

    #[test]
    fn format_score_always_has_fraction() {
        assert_eq!(format_score(100.0), "100.0");
        assert_eq!(format_score(0.0), "0.0");
        assert_eq!(format_score(86.36), "86.36");
        assert_eq!(format_score(50.5), "50.5");
        assert_eq!(format_score(9.09), "9.09");
    }

    #[test]
    fn console_layout() {
        let report = report_with(vec![
            pair("a.txt", "b.txt", 86.36, &["the quick brown fox"]),
            pair("a.txt", "c.txt", 0.0, &[]),
        ]);
        let expected = format!(
            "📑 Plagiarism Report\n{rule}\n\
             a.txt  <-->  b.txt  :  86.36% similar\n\
             \x20  Common content snippets:\n\
             \x20    - the quick brown fox\n\
             {rule}\n\
             a.txt  <-->  c.txt  :  0.0% similar\n\
             {rule}\n",
            rule = RULE
        );
        assert_eq!(render_text(&report, Layout::Console), expected);
    }

    #[test]
    fn file_layout() {
        let report = report_with(vec![pair("a.txt", "b.txt", 100.0, &["same", "text"])]);
        let expected = format!(
            "a.txt  <-->  b.txt  :  100.0% similar\n\
             \x20Common content snippets:\n\
             \x20    - same\n\
             \x20    - text\n\
             {rule}\n",
            rule = RULE
        );
        assert_eq!(render_text(&report, Layout::File), expected);
    }

    #[test]
    fn empty_report_layouts() {
        let report = report_with(vec![]);
        assert_eq!(render_text(&report, Layout::File), "");
        assert_eq!(
            render_text(&report, Layout::Console),
            format!("📑 Plagiarism Report\n{}\n", RULE)
        );
    }

    #[test]
    fn renders_engine_output() {
        let report = compare_all(&[
            Document::new("a.txt", "The quick brown fox"),
            Document::new("b.txt", "The quick brown fox jumps"),
        ]);
        let text = render_text(&report, Layout::Console);
        assert!(text.contains("a.txt  <-->  b.txt  :  86.36% similar\n"));
        assert!(text.contains("     - the quick brown fox\n"));
    }

    #[test]
    fn json_rendering_contains_pairs() {
        let report = report_with(vec![pair("a.txt", "b.txt", 42.5, &["shared"])]);
        let json = render_json(&report).expect("json");
        assert!(json.contains("\"score\": 42.5"));
        assert!(json.contains("\"shared\""));
        assert!(json.contains("\"run_id\""));
    }
}
