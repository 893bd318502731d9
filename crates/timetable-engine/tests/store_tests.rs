//! Tests for the lesson store primitives.

use timetable_engine::{DayOfWeek, Entity, Lesson, ScheduleStore, TimeSlot, TimetableError};

fn lesson(id: u32, room: &str) -> Lesson {
    Lesson {
        id,
        course_id: 1,
        professor_id: 1,
        classroom_number: room.to_string(),
        day: DayOfWeek::Monday,
        slot: TimeSlot::First,
    }
}

#[test]
fn insert_keeps_insertion_order() {
    let mut store = ScheduleStore::new();
    store.insert(lesson(3, "101")).unwrap();
    store.insert(lesson(1, "102")).unwrap();

    let ids: Vec<u32> = store.lessons().iter().map(|l| l.id).collect();
    assert_eq!(ids, vec![3, 1]);
    assert_eq!(store.len(), 2);
}

#[test]
fn insert_does_not_check_conflicts() {
    // Same professor, same cell: the store is a plain container.
    let mut store = ScheduleStore::new();
    store.insert(lesson(1, "101")).unwrap();
    store.insert(lesson(2, "101")).unwrap();
    assert_eq!(store.len(), 2);
}

#[test]
fn duplicate_lesson_id_is_rejected() {
    let mut store = ScheduleStore::new();
    store.insert(lesson(1, "101")).unwrap();

    let err = store.insert(lesson(1, "202")).unwrap_err();

    assert_eq!(
        err,
        TimetableError::DuplicateId {
            entity: Entity::Lesson,
            id: "1".to_string()
        }
    );
    assert_eq!(store.get(1).unwrap().classroom_number, "101");
}

#[test]
fn replace_swaps_in_place_and_returns_previous() {
    let mut store = ScheduleStore::new();
    store.insert(lesson(1, "101")).unwrap();
    store.insert(lesson(2, "102")).unwrap();

    let previous = store.replace(1, lesson(1, "202")).unwrap();

    assert_eq!(previous.classroom_number, "101");
    assert_eq!(store.lessons()[0].classroom_number, "202");
    assert_eq!(store.lessons()[1].id, 2);
}

#[test]
fn replace_unknown_id_is_not_found_and_changes_nothing() {
    let mut store = ScheduleStore::new();
    store.insert(lesson(1, "101")).unwrap();
    let before = store.clone();

    assert_eq!(
        store.replace(9, lesson(9, "202")),
        Err(TimetableError::NotFound(9))
    );
    assert_eq!(store, before);
}

#[test]
fn replace_cannot_steal_another_lessons_id() {
    let mut store = ScheduleStore::new();
    store.insert(lesson(1, "101")).unwrap();
    store.insert(lesson(2, "102")).unwrap();
    let before = store.clone();

    assert!(matches!(
        store.replace(1, lesson(2, "202")),
        Err(TimetableError::DuplicateId { .. })
    ));
    assert_eq!(store, before);
}

#[test]
fn remove_returns_lesson_and_tolerates_unknown_ids() {
    let mut store = ScheduleStore::new();
    store.insert(lesson(1, "101")).unwrap();
    store.insert(lesson(2, "102")).unwrap();
    store.insert(lesson(3, "202")).unwrap();

    assert_eq!(store.remove(2).map(|l| l.id), Some(2));
    assert!(store.remove(2).is_none());

    let ids: Vec<u32> = store.lessons().iter().map(|l| l.id).collect();
    assert_eq!(ids, vec![1, 3], "remaining lessons keep their order");
    assert!(!store.contains(2));
}

#[test]
fn empty_store() {
    let store = ScheduleStore::new();
    assert!(store.is_empty());
    assert!(store.get(1).is_none());
}
