//! Core data model: catalog entities, the weekly grid, and lessons.
//!
//! The week is a fixed grid of five teaching days by five time slots. Every
//! lesson occupies exactly one grid cell. The text labels used by `Display`,
//! `FromStr` and serde are stable and shared with every external caller.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::TimetableError;

pub type ProfessorId = u32;
pub type CourseId = u32;
pub type LessonId = u32;

/// Number of grid cells in one week (5 days x 5 slots).
pub const GRID_CELLS: usize = DayOfWeek::ALL.len() * TimeSlot::ALL.len();

/// A teaching day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl DayOfWeek {
    pub const ALL: [DayOfWeek; 5] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DayOfWeek {
    type Err = TimetableError;

    /// Parses a day name, ignoring ASCII case. Weekend days are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        DayOfWeek::ALL
            .into_iter()
            .find(|day| day.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| TimetableError::InvalidInput(format!("unknown day of week '{}'", s)))
    }
}

impl TryFrom<Weekday> for DayOfWeek {
    type Error = TimetableError;

    fn try_from(weekday: Weekday) -> Result<Self, Self::Error> {
        match weekday {
            Weekday::Mon => Ok(DayOfWeek::Monday),
            Weekday::Tue => Ok(DayOfWeek::Tuesday),
            Weekday::Wed => Ok(DayOfWeek::Wednesday),
            Weekday::Thu => Ok(DayOfWeek::Thursday),
            Weekday::Fri => Ok(DayOfWeek::Friday),
            Weekday::Sat | Weekday::Sun => Err(TimetableError::InvalidInput(format!(
                "{} is not a teaching day",
                weekday
            ))),
        }
    }
}

/// One of the five fixed teaching intervals of a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum TimeSlot {
    #[serde(rename = "8:30-10:00")]
    First,
    #[serde(rename = "10:15-11:45")]
    Second,
    #[serde(rename = "12:15-13:45")]
    Third,
    #[serde(rename = "14:00-15:30")]
    Fourth,
    #[serde(rename = "15:45-17:15")]
    Fifth,
}

impl TimeSlot {
    pub const ALL: [TimeSlot; 5] = [
        TimeSlot::First,
        TimeSlot::Second,
        TimeSlot::Third,
        TimeSlot::Fourth,
        TimeSlot::Fifth,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TimeSlot::First => "8:30-10:00",
            TimeSlot::Second => "10:15-11:45",
            TimeSlot::Third => "12:15-13:45",
            TimeSlot::Fourth => "14:00-15:30",
            TimeSlot::Fifth => "15:45-17:15",
        }
    }

    /// `((start_hour, start_min), (end_hour, end_min))`
    fn bounds(self) -> ((u32, u32), (u32, u32)) {
        match self {
            TimeSlot::First => ((8, 30), (10, 0)),
            TimeSlot::Second => ((10, 15), (11, 45)),
            TimeSlot::Third => ((12, 15), (13, 45)),
            TimeSlot::Fourth => ((14, 0), (15, 30)),
            TimeSlot::Fifth => ((15, 45), (17, 15)),
        }
    }

    pub fn start(self) -> NaiveTime {
        let (h, m) = self.bounds().0;
        NaiveTime::from_hms_opt(h, m, 0).unwrap_or_default()
    }

    pub fn end(self) -> NaiveTime {
        let (h, m) = self.bounds().1;
        NaiveTime::from_hms_opt(h, m, 0).unwrap_or_default()
    }

    /// The slot whose interval contains `time` (start inclusive, end exclusive).
    /// Breaks between slots belong to no slot.
    pub fn containing(time: NaiveTime) -> Option<TimeSlot> {
        TimeSlot::ALL
            .into_iter()
            .find(|slot| slot.start() <= time && time < slot.end())
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TimeSlot {
    type Err = TimetableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        TimeSlot::ALL
            .into_iter()
            .find(|slot| slot.label() == s)
            .ok_or_else(|| TimetableError::InvalidInput(format!("unknown time slot '{}'", s)))
    }
}

/// Course category. Declaration order is the tie-break order for popularity
/// reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum CourseType {
    Lecture,
    Seminar,
    Lab,
    Practice,
}

impl CourseType {
    pub const ALL: [CourseType; 4] = [
        CourseType::Lecture,
        CourseType::Seminar,
        CourseType::Lab,
        CourseType::Practice,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CourseType::Lecture => "Lecture",
            CourseType::Seminar => "Seminar",
            CourseType::Lab => "Lab",
            CourseType::Practice => "Practice",
        }
    }
}

impl fmt::Display for CourseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CourseType {
    type Err = TimetableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        CourseType::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| TimetableError::InvalidInput(format!("unknown course type '{}'", s)))
    }
}

// Deserialization goes through `FromStr`, so serde and the command line
// accept the same labels and reject unknown ones with `InvalidInput`.
macro_rules! try_from_label {
    ($($ty:ty),*) => {$(
        impl TryFrom<String> for $ty {
            type Error = TimetableError;

            fn try_from(label: String) -> Result<Self, Self::Error> {
                label.parse()
            }
        }
    )*};
}

try_from_label!(DayOfWeek, TimeSlot, CourseType);

/// A (day, slot) pair; the unit of occupancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GridCell {
    pub day: DayOfWeek,
    pub slot: TimeSlot,
}

impl GridCell {
    pub fn new(day: DayOfWeek, slot: TimeSlot) -> Self {
        Self { day, slot }
    }

    /// All 25 cells of the week, day-major.
    pub fn all() -> impl Iterator<Item = GridCell> {
        DayOfWeek::ALL
            .into_iter()
            .flat_map(|day| TimeSlot::ALL.into_iter().map(move |slot| GridCell { day, slot }))
    }
}

impl fmt::Display for GridCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.day, self.slot)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Professor {
    pub id: ProfessorId,
    pub name: String,
    pub department: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classroom {
    pub number: String,
    /// Seats; must be positive.
    pub capacity: u32,
    #[serde(default)]
    pub has_projector: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: CourseType,
}

/// A single placed occurrence of a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: LessonId,
    pub course_id: CourseId,
    pub professor_id: ProfessorId,
    pub classroom_number: String,
    pub day: DayOfWeek,
    pub slot: TimeSlot,
}

impl Lesson {
    pub fn cell(&self) -> GridCell {
        GridCell::new(self.day, self.slot)
    }

    /// Whether this lesson occupies the given cell.
    pub fn occupies(&self, day: DayOfWeek, slot: TimeSlot) -> bool {
        self.day == day && self.slot == slot
    }
}
