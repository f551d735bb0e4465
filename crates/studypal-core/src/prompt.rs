//! Prompt construction for the generative text service.
//!
//! The instructions at the end of the prompt request the exact
//! day/session/bullet layout that [`crate::parser`] understands, so the
//! template text should only change together with the parser rules.

use jiff::civil::Date;

use crate::{
    error::{Result, StudyError},
    models::Subject,
};

const PLAN_REQUIREMENTS: &str = "\
Please create a detailed day-by-day revision schedule that includes:
1. Subject Prioritization:
   - Focus on subjects with earlier exam dates
   - Consider subject difficulty and student's strengths/weaknesses
   - Allocate more time to subjects with less time until exam
2. Daily Schedule Structure:
   - Morning session (2-3 hours)
   - Afternoon session (2-3 hours)
   - Evening review (1-2 hours)
3. Study Techniques:
   - Active recall methods
   - Practice questions
   - Mind mapping
   - Flashcards
4. Regular Review Sessions:
   - Weekly comprehensive reviews
   - Subject-specific reviews
   - Pre-exam intensive reviews
5. Break Management:
   - Short breaks between study sessions
   - Longer breaks for meals
   - Rest days
6. Exam Preparation:
   - Mock exams
   - Past paper practice
   - Time management practice
";

const FORMAT_INSTRUCTIONS: &str = "\
IMPORTANT: Follow this EXACT format for each day:
Day 1: [Date] (X days until first exam)
Morning Session (9:00 AM - 12:00 PM):
• [Subject] - [Topic]
  - [Specific Task]
  - [Study Technique]
  - [Resources Needed]

Afternoon Session (2:00 PM - 5:00 PM):
• [Subject] - [Topic]
  - [Specific Task]
  - [Study Technique]
  - [Resources Needed]

Evening Review (7:00 PM - 9:00 PM):
• [Review Topics]
• [Practice Questions]

Breaks:
• [Break Times]
• [Break Activities]

Daily Goals:
• [Goal 1]
• [Goal 2]

Continue this EXACT format for each day until the last exam date. Use bullet points (•) for main tasks and dashes (-) for subtasks.

IMPORTANT: Include countdown to each exam in the daily headers and adjust the intensity of study based on proximity to exams.";

/// Subject name and exam date as they appear in the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptSubject {
    pub name: String,
    pub exam_date: Date,
}

impl From<&Subject> for PromptSubject {
    fn from(subject: &Subject) -> Self {
        Self {
            name: subject.name.clone(),
            exam_date: subject.exam_date,
        }
    }
}

/// Builds the revision-plan prompt for `subjects` as seen from `today`.
///
/// Subjects are listed by exam date, earliest first.
///
/// # Errors
///
/// Returns `StudyError::InvalidInput` if `subjects` is empty.
pub fn build_revision_prompt(subjects: &[PromptSubject], today: Date) -> Result<String> {
    let mut sorted = subjects.to_vec();
    sorted.sort_by_key(|s| s.exam_date);

    let (first, last) = match (sorted.first(), sorted.last()) {
        (Some(first), Some(last)) => (first.exam_date, last.exam_date),
        _ => {
            return Err(StudyError::invalid_input("subjects")
                .with_reason("At least one subject is required to build a plan"))
        }
    };

    let days_until_first = days_between(today, first)?;
    let total_days = days_between(first, last)? + 1;

    let subject_lines: String = sorted
        .iter()
        .map(|subject| format!("{}: {}\n", subject.name, subject.exam_date))
        .collect();

    Ok(format!(
        "Create a comprehensive revision plan for the following subjects and their exam dates:\n\n\
         {subject_lines}\n\
         Total days until first exam: {days_until_first}\n\
         Total days between first and last exam: {total_days}\n\n\
         {PLAN_REQUIREMENTS}\n\
         {FORMAT_INSTRUCTIONS}"
    ))
}

/// Whole days from `from` to `to`; negative when `to` is earlier.
pub fn days_between(from: Date, to: Date) -> Result<i32> {
    from.until(to)
        .map(|span| span.get_days())
        .map_err(|e| StudyError::invalid_input("exam_date").with_reason(e.to_string()))
}
