//! Plan documents: a catalog seed plus an ordered list of proposed changes.
//!
//! ```json
//! {
//!   "options": { "strict_references": true },
//!   "professors": [{ "id": 1, "name": "Ivan Petrenko", "department": "Computer Science" }],
//!   "classrooms": [{ "number": "101", "capacity": 30, "has_projector": true }],
//!   "courses": [{ "id": 1, "name": "Introduction to Programming", "type": "Lecture" }],
//!   "operations": [
//!     { "op": "add", "lesson": { "id": 1, "course_id": 1, "professor_id": 1,
//!       "classroom_number": "101", "day": "Monday", "slot": "8:30-10:00" } },
//!     { "op": "reassign", "lesson_id": 1, "room": "102" },
//!     { "op": "cancel", "lesson_id": 1 }
//!   ]
//! }
//! ```

use std::fmt;

use anyhow::{Context, Result};
use serde::Deserialize;
use timetable_engine::{
    Catalog, Classroom, Course, EngineOptions, Lesson, LessonId, Professor, Timetable,
    TimetableError,
};
use tracing::debug;

#[derive(Debug, Clone, Deserialize)]
pub struct Plan {
    #[serde(default)]
    pub options: EngineOptions,
    #[serde(default)]
    pub professors: Vec<Professor>,
    #[serde(default)]
    pub classrooms: Vec<Classroom>,
    #[serde(default)]
    pub courses: Vec<Course>,
    #[serde(default)]
    pub operations: Vec<Operation>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    Add { lesson: Lesson },
    Reassign { lesson_id: LessonId, room: String },
    Cancel { lesson_id: LessonId },
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Add { lesson } => write!(
                f,
                "add lesson {} ({}, room {})",
                lesson.id,
                lesson.cell(),
                lesson.classroom_number
            ),
            Operation::Reassign { lesson_id, room } => {
                write!(f, "reassign lesson {} to room {}", lesson_id, room)
            }
            Operation::Cancel { lesson_id } => write!(f, "cancel lesson {}", lesson_id),
        }
    }
}

/// What happened to one operation during replay.
#[derive(Debug)]
pub struct Outcome {
    pub operation: Operation,
    pub result: std::result::Result<(), TimetableError>,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.result {
            Ok(()) => write!(f, "ok      {}", self.operation),
            Err(err) => write!(f, "reject  {}: {}", self.operation, err),
        }
    }
}

impl Plan {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse plan document")
    }

    /// Build the catalog, rejecting duplicate or malformed entries.
    pub fn catalog(&self) -> Result<Catalog> {
        let mut catalog = Catalog::new();
        for professor in &self.professors {
            catalog
                .add_professor(professor.clone())
                .with_context(|| format!("Invalid professor '{}'", professor.name))?;
        }
        for classroom in &self.classrooms {
            catalog
                .add_classroom(classroom.clone())
                .with_context(|| format!("Invalid classroom '{}'", classroom.number))?;
        }
        for course in &self.courses {
            catalog
                .add_course(course.clone())
                .with_context(|| format!("Invalid course '{}'", course.name))?;
        }
        Ok(catalog)
    }

    /// Apply every operation in order. Rejected operations are recorded and
    /// skipped; they never stop the replay.
    pub fn replay(&self, options: EngineOptions) -> Result<(Timetable, Vec<Outcome>)> {
        let mut timetable = Timetable::with_options(self.catalog()?, options);
        let mut outcomes = Vec::with_capacity(self.operations.len());

        for operation in &self.operations {
            let result = match operation {
                Operation::Add { lesson } => timetable.add_lesson(lesson.clone()),
                Operation::Reassign { lesson_id, room } => {
                    timetable.reassign_classroom(*lesson_id, room).map(|_| ())
                }
                Operation::Cancel { lesson_id } => {
                    timetable.cancel_lesson(*lesson_id);
                    Ok(())
                }
            };
            outcomes.push(Outcome {
                operation: operation.clone(),
                result,
            });
        }

        debug!(
            operations = outcomes.len(),
            rejected = outcomes.iter().filter(|o| o.result.is_err()).count(),
            "plan replayed"
        );
        Ok((timetable, outcomes))
    }

    /// Lessons proposed by `add` operations, in plan order.
    pub fn proposed_lessons(&self) -> Vec<Lesson> {
        self.operations
            .iter()
            .filter_map(|op| match op {
                Operation::Add { lesson } => Some(lesson.clone()),
                _ => None,
            })
            .collect()
    }
}
