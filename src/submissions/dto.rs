use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionFilter {
    #[serde(alias = "student_id")]
    pub student_id: Option<String>,
    #[serde(alias = "assignment_id")]
    pub assignment_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct FeedbackRequest {
    pub grade: String,
    pub comments: String,
}
