//! # timetable-engine
//!
//! Conflict-free placement of lessons on a department's weekly timetable.
//!
//! The week is a fixed 5 x 5 grid of (day, time slot) cells. A lesson binds
//! one course, one professor and one classroom to one cell. The engine
//! guarantees that no professor and no classroom is ever booked twice in the
//! same cell, and answers the queries that support manual scheduling.
//!
//! ## Modules
//!
//! - [`model`] - Days, slots, grid cells, catalog entities and lessons
//! - [`catalog`] - Professors, classrooms and courses
//! - [`store`] - The set of placed lessons
//! - [`conflict`] - Double-booking detection
//! - [`query`] - Availability, agendas, utilization and load reports
//! - [`timetable`] - All-or-nothing add / reassign / cancel
//! - [`shared`] - Thread-safe handle around a timetable
//! - [`error`] - Error types

pub mod catalog;
pub mod conflict;
pub mod error;
pub mod model;
pub mod query;
pub mod shared;
pub mod store;
pub mod timetable;

pub use catalog::Catalog;
pub use conflict::{find_conflicts, validate, Conflict, ConflictKind, DoubleBooking};
pub use error::{Entity, TimetableError};
pub use model::{
    Classroom, Course, CourseId, CourseType, DayOfWeek, GridCell, Lesson, LessonId, Professor,
    ProfessorId, TimeSlot, GRID_CELLS,
};
pub use shared::SharedTimetable;
pub use store::ScheduleStore;
pub use timetable::{EngineOptions, Timetable};
