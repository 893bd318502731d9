//! Error types for timetable-engine operations.

use std::fmt;

use thiserror::Error;

use crate::model::{Lesson, LessonId};

/// The kind of entity an id refers to, used to qualify reference and
/// uniqueness errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entity {
    Professor,
    Classroom,
    Course,
    Lesson,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Entity::Professor => "professor",
            Entity::Classroom => "classroom",
            Entity::Course => "course",
            Entity::Lesson => "lesson",
        })
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TimetableError {
    /// The candidate's professor already teaches the carried lesson in the same cell.
    #[error(
        "Professor conflict: professor {} already teaches lesson {} on {} at {}",
        .0.professor_id, .0.id, .0.day, .0.slot
    )]
    ProfessorConflict(Lesson),

    /// The candidate's classroom already hosts the carried lesson in the same cell.
    #[error(
        "Classroom conflict: room {} already hosts lesson {} on {} at {}",
        .0.classroom_number, .0.id, .0.day, .0.slot
    )]
    ClassroomConflict(Lesson),

    #[error("Lesson not found: {0}")]
    NotFound(LessonId),

    /// A label (day, time slot, course type) that is not part of the fixed grid.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unknown {entity} referenced: {id}")]
    InvalidReference { entity: Entity, id: String },

    #[error("Duplicate {entity} id: {id}")]
    DuplicateId { entity: Entity, id: String },
}

impl TimetableError {
    /// The already-placed lesson a conflict collided with, if this is a conflict.
    pub fn conflicting_lesson(&self) -> Option<&Lesson> {
        match self {
            TimetableError::ProfessorConflict(lesson)
            | TimetableError::ClassroomConflict(lesson) => Some(lesson),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, TimetableError>;
