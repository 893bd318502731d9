//! Read-only views over the catalog and the placed lessons.
//!
//! Every function here is pure: it takes the catalog and/or a lesson slice
//! and derives a report. [`crate::timetable::Timetable`] exposes the same
//! queries as methods over its own state.

use serde::Serialize;
use tracing::trace;

use crate::catalog::Catalog;
use crate::model::{CourseType, DayOfWeek, GridCell, Lesson, ProfessorId, TimeSlot, GRID_CELLS};

/// Per-professor teaching load.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfessorLoad {
    pub professor_id: ProfessorId,
    pub name: String,
    /// Number of grid cells in which the professor teaches.
    pub lessons: usize,
    /// Number of grid cells left free.
    pub free_cells: usize,
}

/// Per-classroom occupancy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomUtilization {
    pub number: String,
    pub lessons: usize,
    pub percent: f64,
}

/// Room numbers of catalog classrooms with no lesson at `(day, slot)`,
/// sorted by room number.
pub fn available_classrooms(
    catalog: &Catalog,
    lessons: &[Lesson],
    day: DayOfWeek,
    slot: TimeSlot,
) -> Vec<String> {
    let mut rooms: Vec<String> = catalog
        .list_classrooms()
        .iter()
        .filter(|room| {
            !lessons
                .iter()
                .any(|l| l.occupies(day, slot) && l.classroom_number == room.number)
        })
        .map(|room| room.number.clone())
        .collect();
    rooms.sort();
    trace!(%day, %slot, free = rooms.len(), "available classrooms");
    rooms
}

/// The professor's lessons in schedule (insertion) order.
pub fn professor_schedule(lessons: &[Lesson], professor_id: ProfessorId) -> Vec<Lesson> {
    lessons
        .iter()
        .filter(|l| l.professor_id == professor_id)
        .cloned()
        .collect()
}

/// The professor's lessons sorted by day, then slot.
pub fn professor_agenda(lessons: &[Lesson], professor_id: ProfessorId) -> Vec<Lesson> {
    let mut agenda = professor_schedule(lessons, professor_id);
    agenda.sort_by_key(Lesson::cell);
    agenda
}

/// Share of the week's grid cells in which `room` hosts a lesson, as a
/// percentage: `100 * count / 25`.
///
/// The value is not clamped. With the double-booking invariants in force a
/// room holds at most one lesson per cell, so it never exceeds 100.
pub fn classroom_utilization(lessons: &[Lesson], room: &str) -> f64 {
    let used = lessons.iter().filter(|l| l.classroom_number == room).count();
    100.0 * used as f64 / GRID_CELLS as f64
}

/// Utilization of every catalog classroom, in catalog order.
pub fn utilization_report(catalog: &Catalog, lessons: &[Lesson]) -> Vec<RoomUtilization> {
    catalog
        .list_classrooms()
        .iter()
        .map(|room| RoomUtilization {
            number: room.number.clone(),
            lessons: lessons
                .iter()
                .filter(|l| l.classroom_number == room.number)
                .count(),
            percent: classroom_utilization(lessons, &room.number),
        })
        .collect()
}

/// The course type with the most placed lessons.
///
/// Ties go to the type declared first (Lecture, Seminar, Lab, Practice), so
/// an empty schedule yields `Lecture`. Lessons whose course is missing from
/// the catalog are not counted.
pub fn most_popular_course_type(catalog: &Catalog, lessons: &[Lesson]) -> CourseType {
    let mut counts = [0usize; CourseType::ALL.len()];
    for lesson in lessons {
        if let Some(course) = catalog.find_course(lesson.course_id) {
            counts[course.kind as usize] += 1;
        }
    }

    let mut best = CourseType::Lecture;
    for kind in CourseType::ALL {
        if counts[kind as usize] > counts[best as usize] {
            best = kind;
        }
    }
    trace!(?counts, %best, "course type popularity");
    best
}

/// Teaching load of every catalog professor, in catalog order.
pub fn professor_load(catalog: &Catalog, lessons: &[Lesson]) -> Vec<ProfessorLoad> {
    catalog
        .list_professors()
        .iter()
        .map(|p| {
            let taught = lessons.iter().filter(|l| l.professor_id == p.id).count();
            ProfessorLoad {
                professor_id: p.id,
                name: p.name.clone(),
                lessons: taught,
                free_cells: GRID_CELLS.saturating_sub(taught),
            }
        })
        .collect()
}

/// Grid cells in which the professor teaches nothing, in week order.
pub fn free_cells_for_professor(lessons: &[Lesson], professor_id: ProfessorId) -> Vec<GridCell> {
    free_cells(lessons, |l| l.professor_id == professor_id)
}

/// Grid cells in which the room hosts nothing, in week order.
pub fn free_cells_for_classroom(lessons: &[Lesson], room: &str) -> Vec<GridCell> {
    free_cells(lessons, |l| l.classroom_number == room)
}

fn free_cells(lessons: &[Lesson], uses: impl Fn(&Lesson) -> bool) -> Vec<GridCell> {
    GridCell::all()
        .filter(|cell| !lessons.iter().any(|l| uses(l) && l.cell() == *cell))
        .collect()
}
