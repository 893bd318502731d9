//! Detect double-booked professors and classrooms.
//!
//! Two lessons collide when they occupy the same grid cell and share either
//! the professor or the classroom. The professor dimension is always checked
//! first: a candidate that collides on both is reported as a professor
//! conflict.

use std::fmt;

use serde::Serialize;

use crate::error::TimetableError;
use crate::model::{Lesson, LessonId};

/// Which shared resource caused a collision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ConflictKind {
    Professor,
    Classroom,
}

impl fmt::Display for ConflictKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ConflictKind::Professor => "professor",
            ConflictKind::Classroom => "classroom",
        })
    }
}

/// A candidate placement collided with an already-placed lesson.
#[derive(Debug, Clone, PartialEq)]
pub struct Conflict {
    pub kind: ConflictKind,
    /// The placed lesson the candidate collided with.
    pub lesson: Lesson,
}

impl From<Conflict> for TimetableError {
    fn from(conflict: Conflict) -> Self {
        match conflict.kind {
            ConflictKind::Professor => TimetableError::ProfessorConflict(conflict.lesson),
            ConflictKind::Classroom => TimetableError::ClassroomConflict(conflict.lesson),
        }
    }
}

/// Check `candidate` against every lesson in `lessons`.
///
/// The lesson whose id equals `exclude` is skipped, so a lesson being
/// reassigned does not collide with its own current placement. The first
/// colliding lesson in slice order is reported; professor collisions take
/// precedence over classroom collisions regardless of order.
pub fn validate(lessons: &[Lesson], candidate: &Lesson, exclude: Option<LessonId>) -> Option<Conflict> {
    let mut same_cell = lessons
        .iter()
        .filter(|l| Some(l.id) != exclude && l.occupies(candidate.day, candidate.slot));

    if let Some(lesson) = same_cell
        .clone()
        .find(|l| l.professor_id == candidate.professor_id)
    {
        return Some(Conflict {
            kind: ConflictKind::Professor,
            lesson: lesson.clone(),
        });
    }

    same_cell
        .find(|l| l.classroom_number == candidate.classroom_number)
        .map(|lesson| Conflict {
            kind: ConflictKind::Classroom,
            lesson: lesson.clone(),
        })
}

/// A pair of lessons in one set that double-book a resource.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DoubleBooking {
    pub kind: ConflictKind,
    pub first: Lesson,
    pub second: Lesson,
}

/// Find every pairwise double-booking within `lessons`.
///
/// Unlike [`validate`], this audits an arbitrary set (for example a plan that
/// has not been applied yet). A pair that shares both professor and
/// classroom yields two entries, professor first. Pairs are reported in
/// slice order of their first, then second, element.
pub fn find_conflicts(lessons: &[Lesson]) -> Vec<DoubleBooking> {
    let mut bookings = Vec::new();

    for (i, first) in lessons.iter().enumerate() {
        for second in &lessons[i + 1..] {
            if first.cell() != second.cell() {
                continue;
            }
            if first.professor_id == second.professor_id {
                bookings.push(DoubleBooking {
                    kind: ConflictKind::Professor,
                    first: first.clone(),
                    second: second.clone(),
                });
            }
            if first.classroom_number == second.classroom_number {
                bookings.push(DoubleBooking {
                    kind: ConflictKind::Classroom,
                    first: first.clone(),
                    second: second.clone(),
                });
            }
        }
    }

    bookings
}
