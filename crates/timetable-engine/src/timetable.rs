//! The department timetable: catalog + schedule behind an all-or-nothing
//! mutation API.
//!
//! Every mutation builds its candidate state, runs the reference and
//! conflict checks against the current schedule, and touches the store only
//! once all checks pass. A rejected call leaves the timetable unchanged.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::conflict::{self, Conflict};
use crate::error::{Entity, Result, TimetableError};
use crate::model::{CourseType, DayOfWeek, GridCell, Lesson, LessonId, ProfessorId, TimeSlot};
use crate::query::{self, ProfessorLoad, RoomUtilization};
use crate::store::ScheduleStore;

/// Behavior knobs for a [`Timetable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineOptions {
    /// Reject lessons whose course or professor is missing from the catalog.
    /// The classroom reference is checked regardless.
    pub strict_references: bool,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            strict_references: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Timetable {
    catalog: Catalog,
    schedule: ScheduleStore,
    options: EngineOptions,
}

impl Timetable {
    pub fn new(catalog: Catalog) -> Self {
        Self::with_options(catalog, EngineOptions::default())
    }

    pub fn with_options(catalog: Catalog, options: EngineOptions) -> Self {
        Self {
            catalog,
            schedule: ScheduleStore::new(),
            options,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Catalog entries may be added at any time; none can be removed.
    pub fn catalog_mut(&mut self) -> &mut Catalog {
        &mut self.catalog
    }

    pub fn schedule(&self) -> &ScheduleStore {
        &self.schedule
    }

    pub fn lessons(&self) -> &[Lesson] {
        self.schedule.lessons()
    }

    pub fn options(&self) -> EngineOptions {
        self.options
    }

    /// Run the conflict validator against the current schedule without
    /// changing anything.
    pub fn validate(&self, candidate: &Lesson, exclude: Option<LessonId>) -> Option<Conflict> {
        conflict::validate(self.lessons(), candidate, exclude)
    }

    /// Place a new lesson.
    ///
    /// # Errors
    /// - `InvalidReference` if the classroom (or, in strict mode, the course
    ///   or professor) is not in the catalog.
    /// - `DuplicateId` if a lesson with the same id is already placed.
    /// - `ProfessorConflict` / `ClassroomConflict` naming the placed lesson
    ///   the candidate collides with.
    pub fn add_lesson(&mut self, lesson: Lesson) -> Result<()> {
        self.check_references(&lesson)?;
        if self.schedule.contains(lesson.id) {
            return Err(TimetableError::DuplicateId {
                entity: Entity::Lesson,
                id: lesson.id.to_string(),
            });
        }
        if let Some(conflict) = self.validate(&lesson, None) {
            info!(
                lesson_id = lesson.id,
                conflict = %conflict.kind,
                with = conflict.lesson.id,
                cell = %lesson.cell(),
                "lesson rejected"
            );
            return Err(conflict.into());
        }

        let (lesson_id, cell, room) = (lesson.id, lesson.cell(), lesson.classroom_number.clone());
        self.schedule.insert(lesson)?;
        debug!(lesson_id, %cell, %room, "lesson placed");
        Ok(())
    }

    /// Move lesson `lesson_id` to `new_room`, keeping its cell, and return
    /// the lesson as it was before the move.
    ///
    /// # Errors
    /// - `NotFound` if no lesson has that id.
    /// - `InvalidReference` if `new_room` is not in the catalog.
    /// - `ProfessorConflict` / `ClassroomConflict` as for [`Self::add_lesson`];
    ///   the lesson never conflicts with its own current placement.
    pub fn reassign_classroom(&mut self, lesson_id: LessonId, new_room: &str) -> Result<Lesson> {
        let current = self
            .schedule
            .get(lesson_id)
            .ok_or(TimetableError::NotFound(lesson_id))?;
        let candidate = Lesson {
            classroom_number: new_room.to_string(),
            ..current.clone()
        };

        self.check_classroom(&candidate)?;
        if let Some(conflict) = self.validate(&candidate, Some(lesson_id)) {
            info!(
                lesson_id,
                conflict = %conflict.kind,
                with = conflict.lesson.id,
                room = new_room,
                "reassignment rejected"
            );
            return Err(conflict.into());
        }

        let previous = self.schedule.replace(lesson_id, candidate)?;
        debug!(lesson_id, from = %previous.classroom_number, to = new_room, "classroom reassigned");
        Ok(previous)
    }

    /// Remove a lesson. Cancelling an unknown id is a no-op returning `None`.
    pub fn cancel_lesson(&mut self, lesson_id: LessonId) -> Option<Lesson> {
        let removed = self.schedule.remove(lesson_id);
        debug!(lesson_id, removed = removed.is_some(), "lesson cancelled");
        removed
    }

    fn check_references(&self, lesson: &Lesson) -> Result<()> {
        if self.options.strict_references {
            if self.catalog.find_course(lesson.course_id).is_none() {
                return Err(TimetableError::InvalidReference {
                    entity: Entity::Course,
                    id: lesson.course_id.to_string(),
                });
            }
            if self.catalog.find_professor(lesson.professor_id).is_none() {
                return Err(TimetableError::InvalidReference {
                    entity: Entity::Professor,
                    id: lesson.professor_id.to_string(),
                });
            }
        }
        self.check_classroom(lesson)
    }

    fn check_classroom(&self, lesson: &Lesson) -> Result<()> {
        match self.catalog.find_classroom(&lesson.classroom_number) {
            Some(_) => Ok(()),
            None => Err(TimetableError::InvalidReference {
                entity: Entity::Classroom,
                id: lesson.classroom_number.clone(),
            }),
        }
    }

    // Queries

    pub fn available_classrooms(&self, day: DayOfWeek, slot: TimeSlot) -> Vec<String> {
        query::available_classrooms(&self.catalog, self.lessons(), day, slot)
    }

    pub fn professor_schedule(&self, professor_id: ProfessorId) -> Vec<Lesson> {
        query::professor_schedule(self.lessons(), professor_id)
    }

    pub fn professor_agenda(&self, professor_id: ProfessorId) -> Vec<Lesson> {
        query::professor_agenda(self.lessons(), professor_id)
    }

    pub fn classroom_utilization(&self, room: &str) -> f64 {
        query::classroom_utilization(self.lessons(), room)
    }

    pub fn utilization_report(&self) -> Vec<RoomUtilization> {
        query::utilization_report(&self.catalog, self.lessons())
    }

    pub fn most_popular_course_type(&self) -> CourseType {
        query::most_popular_course_type(&self.catalog, self.lessons())
    }

    pub fn professor_load(&self) -> Vec<ProfessorLoad> {
        query::professor_load(&self.catalog, self.lessons())
    }

    pub fn free_cells_for_professor(&self, professor_id: ProfessorId) -> Vec<GridCell> {
        query::free_cells_for_professor(self.lessons(), professor_id)
    }

    pub fn free_cells_for_classroom(&self, room: &str) -> Vec<GridCell> {
        query::free_cells_for_classroom(self.lessons(), room)
    }
}
