//! Reference data: professors, classrooms and courses.
//!
//! The catalog holds no placement logic. It is seeded before lessons are
//! placed and only grows; nothing is ever removed from it, so a lesson that
//! passed the reference check stays sound.

use crate::error::{Entity, Result, TimetableError};
use crate::model::{Classroom, Course, CourseId, Professor, ProfessorId};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    professors: Vec<Professor>,
    classrooms: Vec<Classroom>,
    courses: Vec<Course>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// # Errors
    /// `DuplicateId` if a professor with the same id is already registered.
    pub fn add_professor(&mut self, professor: Professor) -> Result<()> {
        if self.find_professor(professor.id).is_some() {
            return Err(TimetableError::DuplicateId {
                entity: Entity::Professor,
                id: professor.id.to_string(),
            });
        }
        self.professors.push(professor);
        Ok(())
    }

    /// # Errors
    /// `DuplicateId` if the room number is taken, `InvalidInput` if the
    /// capacity is zero.
    pub fn add_classroom(&mut self, classroom: Classroom) -> Result<()> {
        if classroom.capacity == 0 {
            return Err(TimetableError::InvalidInput(format!(
                "classroom {} must have a positive capacity",
                classroom.number
            )));
        }
        if self.find_classroom(&classroom.number).is_some() {
            return Err(TimetableError::DuplicateId {
                entity: Entity::Classroom,
                id: classroom.number,
            });
        }
        self.classrooms.push(classroom);
        Ok(())
    }

    /// # Errors
    /// `DuplicateId` if a course with the same id is already registered.
    pub fn add_course(&mut self, course: Course) -> Result<()> {
        if self.find_course(course.id).is_some() {
            return Err(TimetableError::DuplicateId {
                entity: Entity::Course,
                id: course.id.to_string(),
            });
        }
        self.courses.push(course);
        Ok(())
    }

    pub fn list_professors(&self) -> &[Professor] {
        &self.professors
    }

    pub fn list_classrooms(&self) -> &[Classroom] {
        &self.classrooms
    }

    pub fn list_courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn find_professor(&self, id: ProfessorId) -> Option<&Professor> {
        self.professors.iter().find(|p| p.id == id)
    }

    pub fn find_classroom(&self, number: &str) -> Option<&Classroom> {
        self.classrooms.iter().find(|c| c.number == number)
    }

    pub fn find_course(&self, id: CourseId) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }
}
