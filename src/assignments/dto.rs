use serde::Deserialize;

use crate::store::NewAssignment;

/// Body for creating or re-scheduling an assignment: the record fields
/// plus the timetable day it lands on.
#[derive(Debug, Deserialize)]
pub struct AssignmentRequest {
    #[serde(flatten)]
    pub assignment: NewAssignment,
    pub day: u32,
}
