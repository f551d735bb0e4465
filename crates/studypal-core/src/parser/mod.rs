//! Parser for generated revision plan text.
//!
//! The generative model is asked to answer in a fixed layout:
//!
//! ```text
//! **Day 1: Monday (10 days until first exam)**
//! Morning Session (9:00 AM - 12:00 PM):
//! • Mathematics - Algebra
//!   - Practice questions
//! ```
//!
//! [`parse_plan`] scans that text one line at a time and turns it into
//! [`PlanDay`] records. Each trimmed line is run through [`RULES`] top to
//! bottom and the first rule that matches decides what the line means; a
//! line no rule matches is ignored. The order of the table is observable: a
//! bullet line mentioning an exam is a bullet task, not an exam note.
//!
//! Parsing never fails. When the text contains no day header at all the
//! parser returns [`fallback_plan`] instead of an empty schedule.
//!
//! ```rust
//! use studypal_core::parser::parse_plan;
//!
//! let days = parse_plan(
//!     "**Day 1: Jan 1 (5 days until exam)**\nMorning Session (9-12):\n• Study Algebra\n",
//! );
//! assert_eq!(days.len(), 1);
//! assert_eq!(days[0].date, "Day 1: Jan 1 (5 days until exam)");
//! assert_eq!(days[0].tasks[0].description, "[Morning Session (9-12):] Study Algebra");
//! ```

use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use crate::models::{PlanDay, PlanTask};

mod fallback;


pub use fallback::fallback_plan;

static DAY_HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\*\*Day [0-9]+:.*\([0-9]+ days until.*\)\*\*$").unwrap()
});

static SESSION_HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(Morning|Afternoon|Evening) Session").unwrap());

static BULLET_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[•-]\s").unwrap());

static BULLET_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[•-]\s*").unwrap());

static SUBTASK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s+-\s").unwrap());

static SUBTASK_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*-\s*").unwrap());

/// Meaning assigned to a single line by the first matching [`Rule`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// Starts a new day; holds the header with `**` removed
    DayHeader(String),
    /// Opens a session; holds the full trimmed line
    SessionHeader(String),
    /// Bullet or subtask; holds the text with marker and `*` removed
    Task(String),
    /// Unstructured line mentioning an exam; holds the trimmed line as is
    ExamNote(String),
}

/// A named line classifier. `classify` receives the raw line and its
/// trimmed form.
pub struct Rule {
    pub name: &'static str,
    pub classify: fn(&str, &str) -> Option<LineKind>,
}

/// Classification rules in priority order.
pub const RULES: [Rule; 5] = [
    Rule {
        name: "day-header",
        classify: day_header,
    },
    Rule {
        name: "session-header",
        classify: session_header,
    },
    Rule {
        name: "task",
        classify: bullet_task,
    },
    Rule {
        name: "subtask",
        classify: indented_subtask,
    },
    Rule {
        name: "exam-note",
        classify: exam_note,
    },
];

fn day_header(_raw: &str, trimmed: &str) -> Option<LineKind> {
    DAY_HEADER_RE
        .is_match(trimmed)
        .then(|| LineKind::DayHeader(trimmed.replace("**", "")))
}

fn session_header(_raw: &str, trimmed: &str) -> Option<LineKind> {
    SESSION_HEADER_RE
        .is_match(trimmed)
        .then(|| LineKind::SessionHeader(trimmed.to_string()))
}

fn bullet_task(_raw: &str, trimmed: &str) -> Option<LineKind> {
    BULLET_RE
        .is_match(trimmed)
        .then(|| LineKind::Task(strip_emphasis(&BULLET_PREFIX_RE.replace(trimmed, ""))))
}

// Any line this matches also satisfies `bullet_task` once trimmed, so the
// rule only fires if the table order changes.
fn indented_subtask(raw: &str, trimmed: &str) -> Option<LineKind> {
    SUBTASK_RE
        .is_match(raw)
        .then(|| LineKind::Task(strip_emphasis(&SUBTASK_PREFIX_RE.replace(trimmed, ""))))
}

fn exam_note(_raw: &str, trimmed: &str) -> Option<LineKind> {
    trimmed
        .to_ascii_lowercase()
        .contains("exam")
        .then(|| LineKind::ExamNote(trimmed.to_string()))
}

fn strip_emphasis(text: &str) -> String {
    text.replace('*', "")
}

/// Runs `line` through [`RULES`] and returns the first match.
pub fn classify_line(line: &str) -> Option<(&'static str, LineKind)> {
    let trimmed = line.trim();
    RULES
        .iter()
        .find_map(|rule| (rule.classify)(line, trimmed).map(|kind| (rule.name, kind)))
}

/// Fold state threaded through the line scan.
struct ParseState {
    days: Vec<PlanDay>,
    current_date: Option<String>,
    current_tasks: Vec<PlanTask>,
    current_session: Option<String>,
    next_id: u64,
}

impl ParseState {
    fn new() -> Self {
        Self {
            days: Vec::new(),
            current_date: None,
            current_tasks: Vec::new(),
            current_session: None,
            next_id: 1,
        }
    }

    fn apply(mut self, kind: LineKind) -> Self {
        match kind {
            LineKind::DayHeader(date) => {
                // Tasks seen before the first header stay in the accumulator
                // and end up on that first day.
                self.close_day();
                self.current_date = Some(date);
                self.current_session = None;
            }
            LineKind::SessionHeader(session) => self.current_session = Some(session),
            LineKind::Task(text) | LineKind::ExamNote(text) => self.push_task(text),
        }
        self
    }

    fn push_task(&mut self, text: String) {
        let description = match &self.current_session {
            Some(session) => format!("[{session}] {text}"),
            None => text,
        };
        self.current_tasks
            .push(PlanTask::new(self.next_id.to_string(), description));
        self.next_id += 1;
    }

    fn close_day(&mut self) {
        if let Some(date) = self.current_date.take() {
            self.days.push(PlanDay {
                date,
                tasks: std::mem::take(&mut self.current_tasks),
            });
        }
    }

    fn finish(mut self) -> Vec<PlanDay> {
        self.close_day();
        self.days
    }
}

/// Parses generated plan text into days and tasks.
///
/// Returns [`fallback_plan`] when no line is recognised as a day header.
pub fn parse_plan(text: &str) -> Vec<PlanDay> {
    let days = text
        .split(['\r', '\n'])
        .fold(ParseState::new(), |state, line| match classify_line(line) {
            Some((rule, kind)) => {
                debug!("Line matched {rule}: {}", line.trim());
                state.apply(kind)
            }
            None => state,
        })
        .finish();

    if days.is_empty() {
        debug!("No day headers found, using fallback plan");
        return fallback_plan();
    }

    debug!(
        "Parsed {} days with {} tasks",
        days.len(),
        days.iter().map(|d| d.tasks.len()).sum::<usize>()
    );
    days
}
