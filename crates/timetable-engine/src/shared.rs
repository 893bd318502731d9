//! A [`Timetable`] shared between threads.
//!
//! Mutations take the write side of a single lock for the whole
//! validate-then-commit sequence, so two callers cannot both pass the
//! conflict check for the same cell. Queries take the read side and see one
//! consistent state.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::Result;
use crate::model::{CourseType, DayOfWeek, Lesson, LessonId, ProfessorId, TimeSlot};
use crate::timetable::Timetable;

/// Cheaply cloneable handle; clones share the same timetable.
#[derive(Debug, Clone, Default)]
pub struct SharedTimetable {
    inner: Arc<RwLock<Timetable>>,
}

impl SharedTimetable {
    pub fn new(timetable: Timetable) -> Self {
        Self {
            inner: Arc::new(RwLock::new(timetable)),
        }
    }

    pub fn add_lesson(&self, lesson: Lesson) -> Result<()> {
        self.inner.write().add_lesson(lesson)
    }

    pub fn reassign_classroom(&self, lesson_id: LessonId, new_room: &str) -> Result<Lesson> {
        self.inner.write().reassign_classroom(lesson_id, new_room)
    }

    pub fn cancel_lesson(&self, lesson_id: LessonId) -> Option<Lesson> {
        self.inner.write().cancel_lesson(lesson_id)
    }

    /// Run `f` against a consistent view of the timetable.
    pub fn read<R>(&self, f: impl FnOnce(&Timetable) -> R) -> R {
        f(&self.inner.read())
    }

    /// Run `f` with exclusive access, e.g. to seed the catalog.
    pub fn write<R>(&self, f: impl FnOnce(&mut Timetable) -> R) -> R {
        f(&mut self.inner.write())
    }

    /// A point-in-time copy.
    pub fn snapshot(&self) -> Timetable {
        self.inner.read().clone()
    }

    pub fn available_classrooms(&self, day: DayOfWeek, slot: TimeSlot) -> Vec<String> {
        self.read(|t| t.available_classrooms(day, slot))
    }

    pub fn professor_schedule(&self, professor_id: ProfessorId) -> Vec<Lesson> {
        self.read(|t| t.professor_schedule(professor_id))
    }

    pub fn classroom_utilization(&self, room: &str) -> f64 {
        self.read(|t| t.classroom_utilization(room))
    }

    pub fn most_popular_course_type(&self) -> CourseType {
        self.read(|t| t.most_popular_course_type())
    }
}
