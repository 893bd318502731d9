//! The authoritative set of placed lessons.
//!
//! The store is a plain container: it guarantees lesson-id uniqueness and
//! nothing else. Double-booking checks happen in [`crate::conflict`] before
//! the [`crate::timetable::Timetable`] calls into it.

use crate::error::{Entity, Result, TimetableError};
use crate::model::{Lesson, LessonId};

/// Lessons in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScheduleStore {
    lessons: Vec<Lesson>,
}

impl ScheduleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }

    pub fn len(&self) -> usize {
        self.lessons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }

    pub fn get(&self, id: LessonId) -> Option<&Lesson> {
        self.lessons.iter().find(|l| l.id == id)
    }

    pub fn contains(&self, id: LessonId) -> bool {
        self.get(id).is_some()
    }

    fn position(&self, id: LessonId) -> Option<usize> {
        self.lessons.iter().position(|l| l.id == id)
    }

    /// Append a lesson.
    ///
    /// # Errors
    /// `DuplicateId` if a lesson with the same id is already stored.
    pub fn insert(&mut self, lesson: Lesson) -> Result<()> {
        if self.contains(lesson.id) {
            return Err(duplicate(lesson.id));
        }
        self.lessons.push(lesson);
        Ok(())
    }

    /// Overwrite lesson `id` in place, keeping its position, and return the
    /// previous value.
    ///
    /// # Errors
    /// `NotFound` if `id` is not stored; `DuplicateId` if the replacement
    /// carries a different id that belongs to another stored lesson.
    pub fn replace(&mut self, id: LessonId, lesson: Lesson) -> Result<Lesson> {
        let index = self.position(id).ok_or(TimetableError::NotFound(id))?;
        if lesson.id != id && self.contains(lesson.id) {
            return Err(duplicate(lesson.id));
        }
        Ok(std::mem::replace(&mut self.lessons[index], lesson))
    }

    /// Remove lesson `id`, preserving the order of the rest. `None` when absent.
    pub fn remove(&mut self, id: LessonId) -> Option<Lesson> {
        let index = self.position(id)?;
        Some(self.lessons.remove(index))
    }
}

fn duplicate(id: LessonId) -> TimetableError {
    TimetableError::DuplicateId {
        entity: Entity::Lesson,
        id: id.to_string(),
    }
}
