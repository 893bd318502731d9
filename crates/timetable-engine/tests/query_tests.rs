//! Tests for availability, agenda, utilization and popularity reports.

use timetable_engine::query::{self, ProfessorLoad};
use timetable_engine::{
    Catalog, Classroom, Course, CourseType, DayOfWeek, GridCell, Lesson, Professor, TimeSlot,
    Timetable,
};

// ── Helpers ─────────────────────────────────────────────────────────────────

fn department() -> Catalog {
    let mut catalog = Catalog::new();
    for (id, name) in [(1, "Ivan Petrenko"), (2, "Veronika Watson"), (3, "Olena Koval")] {
        catalog
            .add_professor(Professor {
                id,
                name: name.to_string(),
                department: "Computer Science".to_string(),
            })
            .unwrap();
    }
    // Registered out of order to exercise sorting.
    for number in ["202", "101", "102"] {
        catalog
            .add_classroom(Classroom {
                number: number.to_string(),
                capacity: 30,
                has_projector: true,
            })
            .unwrap();
    }
    for (id, kind) in [
        (1, CourseType::Lecture),
        (2, CourseType::Seminar),
        (3, CourseType::Lab),
        (4, CourseType::Practice),
    ] {
        catalog
            .add_course(Course {
                id,
                name: format!("{} course", kind),
                kind,
            })
            .unwrap();
    }
    catalog
}

fn lesson(id: u32, course: u32, professor: u32, room: &str, day: DayOfWeek, slot: TimeSlot) -> Lesson {
    Lesson {
        id,
        course_id: course,
        professor_id: professor,
        classroom_number: room.to_string(),
        day,
        slot,
    }
}

fn timetable_with(lessons: Vec<Lesson>) -> Timetable {
    let mut timetable = Timetable::new(department());
    for l in lessons {
        timetable.add_lesson(l).unwrap();
    }
    timetable
}

// ── Available classrooms ────────────────────────────────────────────────────

#[test]
fn all_rooms_free_in_empty_schedule_sorted_by_number() {
    let timetable = Timetable::new(department());
    assert_eq!(
        timetable.available_classrooms(DayOfWeek::Monday, TimeSlot::Second),
        vec!["101", "102", "202"]
    );
}

#[test]
fn occupied_rooms_are_excluded_only_in_their_cell() {
    let timetable = timetable_with(vec![
        lesson(1, 1, 1, "101", DayOfWeek::Monday, TimeSlot::First),
        lesson(2, 2, 2, "202", DayOfWeek::Wednesday, TimeSlot::Third),
    ]);

    assert_eq!(
        timetable.available_classrooms(DayOfWeek::Monday, TimeSlot::First),
        vec!["102", "202"]
    );
    assert_eq!(
        timetable.available_classrooms(DayOfWeek::Monday, TimeSlot::Second),
        vec!["101", "102", "202"]
    );
    assert_eq!(
        timetable.available_classrooms(DayOfWeek::Wednesday, TimeSlot::Third),
        vec!["101", "102"]
    );
}

#[test]
fn no_rooms_when_all_occupied() {
    let timetable = timetable_with(vec![
        lesson(1, 1, 1, "101", DayOfWeek::Friday, TimeSlot::Fifth),
        lesson(2, 1, 2, "102", DayOfWeek::Friday, TimeSlot::Fifth),
        lesson(3, 1, 3, "202", DayOfWeek::Friday, TimeSlot::Fifth),
    ]);
    assert!(timetable
        .available_classrooms(DayOfWeek::Friday, TimeSlot::Fifth)
        .is_empty());
}

// ── Professor schedule / agenda ─────────────────────────────────────────────

#[test]
fn professor_schedule_is_in_insertion_order() {
    let timetable = timetable_with(vec![
        lesson(1, 1, 1, "101", DayOfWeek::Thursday, TimeSlot::First),
        lesson(2, 1, 2, "101", DayOfWeek::Monday, TimeSlot::First),
        lesson(3, 1, 1, "102", DayOfWeek::Monday, TimeSlot::Second),
    ]);

    let ids: Vec<u32> = timetable.professor_schedule(1).iter().map(|l| l.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn professor_agenda_is_sorted_by_cell() {
    let timetable = timetable_with(vec![
        lesson(1, 1, 1, "101", DayOfWeek::Thursday, TimeSlot::First),
        lesson(2, 1, 1, "101", DayOfWeek::Monday, TimeSlot::Third),
        lesson(3, 1, 1, "102", DayOfWeek::Monday, TimeSlot::Second),
    ]);

    let ids: Vec<u32> = timetable.professor_agenda(1).iter().map(|l| l.id).collect();
    assert_eq!(ids, vec![3, 2, 1]);
}

#[test]
fn unknown_professor_has_empty_schedule() {
    let timetable = timetable_with(vec![lesson(1, 1, 1, "101", DayOfWeek::Monday, TimeSlot::First)]);
    assert!(timetable.professor_schedule(42).is_empty());
}

// ── Utilization ─────────────────────────────────────────────────────────────

#[test]
fn utilization_is_count_over_twenty_five_cells() {
    let timetable = timetable_with(vec![
        lesson(1, 1, 1, "101", DayOfWeek::Monday, TimeSlot::First),
        lesson(2, 1, 1, "101", DayOfWeek::Monday, TimeSlot::Second),
        lesson(3, 1, 2, "101", DayOfWeek::Tuesday, TimeSlot::First),
        lesson(4, 1, 2, "102", DayOfWeek::Tuesday, TimeSlot::Second),
    ]);

    assert_eq!(timetable.classroom_utilization("101"), 12.0);
    assert_eq!(timetable.classroom_utilization("102"), 4.0);
    assert_eq!(timetable.classroom_utilization("202"), 0.0);
    assert_eq!(timetable.classroom_utilization("unknown"), 0.0);
}

#[test]
fn fully_booked_room_is_one_hundred_percent() {
    let lessons: Vec<Lesson> = GridCell::all()
        .enumerate()
        .map(|(i, cell)| lesson(i as u32 + 1, 1, 1, "202", cell.day, cell.slot))
        .collect();
    let timetable = timetable_with(lessons);

    assert_eq!(timetable.classroom_utilization("202"), 100.0);
    assert!(timetable.free_cells_for_classroom("202").is_empty());
}

#[test]
fn utilization_is_not_clamped_for_unvalidated_lesson_sets() {
    // The pure query does not assume the invariants: 30 lessons in one room.
    let lessons: Vec<Lesson> = (0..30)
        .map(|i| lesson(i, 1, i, "101", DayOfWeek::Monday, TimeSlot::First))
        .collect();
    assert_eq!(query::classroom_utilization(&lessons, "101"), 120.0);
}

#[test]
fn utilization_report_follows_catalog_order() {
    let timetable = timetable_with(vec![lesson(1, 1, 1, "101", DayOfWeek::Monday, TimeSlot::First)]);

    let report = timetable.utilization_report();

    let rows: Vec<(&str, usize, f64)> = report
        .iter()
        .map(|r| (r.number.as_str(), r.lessons, r.percent))
        .collect();
    assert_eq!(rows, vec![("202", 0, 0.0), ("101", 1, 4.0), ("102", 0, 0.0)]);
}

// ── Most popular course type ────────────────────────────────────────────────

#[test]
fn empty_schedule_defaults_to_lecture() {
    let timetable = Timetable::new(department());
    assert_eq!(timetable.most_popular_course_type(), CourseType::Lecture);
}

#[test]
fn highest_count_wins() {
    let timetable = timetable_with(vec![
        lesson(1, 1, 1, "101", DayOfWeek::Monday, TimeSlot::First),
        lesson(2, 3, 1, "101", DayOfWeek::Monday, TimeSlot::Second),
        lesson(3, 3, 1, "101", DayOfWeek::Monday, TimeSlot::Third),
    ]);
    assert_eq!(timetable.most_popular_course_type(), CourseType::Lab);
}

#[test]
fn ties_resolve_by_declaration_order() {
    let timetable = timetable_with(vec![
        lesson(1, 4, 1, "101", DayOfWeek::Monday, TimeSlot::First),
        lesson(2, 2, 1, "101", DayOfWeek::Monday, TimeSlot::Second),
    ]);
    // Practice was placed first, but Seminar is declared first.
    assert_eq!(timetable.most_popular_course_type(), CourseType::Seminar);
}

#[test]
fn lessons_with_unknown_course_are_not_counted() {
    let lessons = vec![
        lesson(1, 99, 1, "101", DayOfWeek::Monday, TimeSlot::First),
        lesson(2, 99, 1, "101", DayOfWeek::Monday, TimeSlot::Second),
        lesson(3, 4, 1, "101", DayOfWeek::Monday, TimeSlot::Third),
    ];
    assert_eq!(
        query::most_popular_course_type(&department(), &lessons),
        CourseType::Practice
    );
}

// ── Load and free cells ─────────────────────────────────────────────────────

#[test]
fn professor_load_covers_every_catalog_professor() {
    let timetable = timetable_with(vec![
        lesson(1, 1, 1, "101", DayOfWeek::Monday, TimeSlot::First),
        lesson(2, 1, 1, "101", DayOfWeek::Monday, TimeSlot::Second),
        lesson(3, 1, 2, "102", DayOfWeek::Monday, TimeSlot::First),
    ]);

    let load = timetable.professor_load();

    assert_eq!(load.len(), 3);
    assert_eq!(
        load[0],
        ProfessorLoad {
            professor_id: 1,
            name: "Ivan Petrenko".to_string(),
            lessons: 2,
            free_cells: 23,
        }
    );
    assert_eq!(load[1].lessons, 1);
    assert_eq!(load[2].lessons, 0);
    assert_eq!(load[2].free_cells, 25);
}

#[test]
fn free_cells_skip_taught_cells_in_week_order() {
    let timetable = timetable_with(vec![
        lesson(1, 1, 1, "101", DayOfWeek::Monday, TimeSlot::Second),
        lesson(2, 1, 1, "102", DayOfWeek::Friday, TimeSlot::Fifth),
    ]);

    let free = timetable.free_cells_for_professor(1);

    assert_eq!(free.len(), 23);
    assert_eq!(free[0], GridCell::new(DayOfWeek::Monday, TimeSlot::First));
    assert_eq!(free[1], GridCell::new(DayOfWeek::Monday, TimeSlot::Third));
    assert_eq!(free[22], GridCell::new(DayOfWeek::Friday, TimeSlot::Fourth));
    assert_eq!(timetable.free_cells_for_classroom("101").len(), 24);
}
