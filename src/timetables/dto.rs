use serde::Serialize;

use crate::domain::{Assignment, Lesson};

/// One timetable day with its ids resolved to full records, ready for a
/// schedule view.
#[derive(Debug, Serialize)]
pub struct DaySchedule {
    pub day: u32,
    pub lessons: Vec<Lesson>,
    pub assignments: Vec<Assignment>,
}
