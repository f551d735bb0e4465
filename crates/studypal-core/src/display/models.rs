//! Display implementations for domain models.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{PlanDay, PlanTask, Subject, User};

impl PlanTask {
    /// Status icon used in listings.
    pub fn icon(&self) -> &'static str {
        if self.is_completed {
            "✓"
        } else {
            "○"
        }
    }
}

impl fmt::Display for PlanTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- {} {}. {}", self.icon(), self.id, self.description)
    }
}

impl fmt::Display for PlanDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}", self.date)?;
        writeln!(f)?;

        if self.tasks.is_empty() {
            return writeln!(f, "No tasks for this day.");
        }

        for task in &self.tasks {
            write!(f, "{task}")?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "Completed: {}/{}",
            self.completed_count(),
            self.tasks.len()
        )
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}", self.name)?;
        writeln!(f)?;
        writeln!(f, "- ID: {}", self.id)?;
        writeln!(f, "- Exam date: {}", self.exam_date)?;
        writeln!(f, "- Added: {}", LocalDateTime(&self.created_at))
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Signed in as {} (ID: {})", self.email, self.id)
    }
}

#[cfg(test)]
mod tests {
    use jiff::{civil::date, Timestamp};

    use super::*;

    #[test]
    fn test_task_icons() {
        let mut task = PlanTask::new("4", "Mock exam");
        assert_eq!(task.to_string(), "- ○ 4. Mock exam\n");
        task.is_completed = true;
        assert_eq!(task.to_string(), "- ✓ 4. Mock exam\n");
    }

    #[test]
    fn test_day_with_progress() {
        let day = PlanDay {
            date: "Day 1: Mon (2 days until exam)".to_string(),
            tasks: vec![
                PlanTask {
                    is_completed: true,
                    ..PlanTask::new("1", "A")
                },
                PlanTask::new("2", "B"),
            ],
        };
        let output = day.to_string();
        assert!(output.starts_with("## Day 1: Mon (2 days until exam)\n\n"));
        assert!(output.contains("- ✓ 1. A\n- ○ 2. B\n"));
        assert!(output.ends_with("Completed: 1/2\n"));
    }

    #[test]
    fn test_empty_day() {
        let day = PlanDay {
            date: "Day 3".to_string(),
            tasks: vec![],
        };
        assert!(day.to_string().contains("No tasks for this day."));
    }

    #[test]
    fn test_subject_display() {
        let subject = Subject {
            id: "s-1".to_string(),
            name: "Biology".to_string(),
            exam_date: date(2025, 7, 1),
            user_id: "u-1".to_string(),
            created_at: Timestamp::now(),
        };
        let output = subject.to_string();
        assert!(output.starts_with("## Biology\n"));
        assert!(output.contains("- ID: s-1\n"));
        assert!(output.contains("- Exam date: 2025-07-01\n"));
    }
}
