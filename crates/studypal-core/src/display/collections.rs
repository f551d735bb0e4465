//! Collection wrapper types for displaying groups of domain objects.

use std::fmt;

use crate::models::{PlanDay, Subject};

/// Newtype wrapper for displaying a list of subjects.
pub struct Subjects(pub Vec<Subject>);

impl Subjects {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of subjects in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for Subjects {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No subjects found.");
        }
        for (i, subject) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{subject}")?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying a whole revision plan.
pub struct RevisionPlan(pub Vec<PlanDay>);

impl RevisionPlan {
    /// Total number of tasks across all days.
    pub fn task_count(&self) -> usize {
        self.0.iter().map(|d| d.tasks.len()).sum()
    }

    /// Number of completed tasks across all days.
    pub fn completed_count(&self) -> usize {
        self.0.iter().map(PlanDay::completed_count).sum()
    }
}

impl fmt::Display for RevisionPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Revision Plan")?;
        writeln!(f)?;

        if self.0.is_empty() {
            return writeln!(f, "No days in this plan.");
        }

        for day in &self.0 {
            write!(f, "{day}")?;
            writeln!(f)?;
        }
        writeln!(
            f,
            "Overall: {}/{} tasks completed",
            self.completed_count(),
            self.task_count()
        )
    }
}
