use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Student,
    Teacher,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlanType {
    OneSession,
    CrashCourse,
    Intensive,
    Full,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Subject {
    // MBE
    #[serde(rename = "Civil Procedure")]
    CivilProcedure,
    #[serde(rename = "Constitutional Law")]
    ConstitutionalLaw,
    #[serde(rename = "Contracts")]
    Contracts,
    #[serde(rename = "Criminal Law & Procedure")]
    CriminalLawProcedure,
    #[serde(rename = "Evidence")]
    Evidence,
    #[serde(rename = "Real Property")]
    RealProperty,
    #[serde(rename = "Torts")]
    Torts,
    // MEE/MPT
    #[serde(rename = "Business Associations")]
    BusinessAssociations,
    #[serde(rename = "Family Law")]
    FamilyLaw,
    #[serde(rename = "Trusts & Estates")]
    TrustsEstates,
    #[serde(rename = "Secured Transactions")]
    SecuredTransactions,
    #[serde(rename = "Conflict of Laws")]
    ConflictOfLaws,
    // Other
    #[serde(rename = "State-Specific Law")]
    StateSpecific,
    #[serde(rename = "Review & Strategy")]
    ReviewStrategy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LessonFormat {
    #[serde(rename = "Outline/Lecture")]
    OutlineLecture,
    #[serde(rename = "MBE Practice")]
    MbePractice,
    #[serde(rename = "Essay Practice (MEE)")]
    EssayPractice,
    #[serde(rename = "Performance Test (MPT)")]
    MptPractice,
    #[serde(rename = "Video Explanation")]
    VideoExplanation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssignmentType {
    #[serde(rename = "Short Answer Q&A")]
    ShortAnswer,
    #[serde(rename = "Timed Quiz (MBE)")]
    TimedQuiz,
    #[serde(rename = "Essay (MEE)")]
    Essay,
    #[serde(rename = "Document Upload (MPT)")]
    DocumentUpload,
    #[serde(rename = "Reflective Journal")]
    ReflectiveJournal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Text,
    Video,
    Pdf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    Submitted,
    Graded,
}

/// Catalog entry. Reference data only: never created or mutated by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub id: PlanType,
    pub name: String,
    /// Plan length in days.
    pub duration: u32,
    pub price: u32,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<PlanType>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub id: String,
    pub title: String,
    pub subject: Subject,
    pub format: LessonFormat,
    /// Markdown, a video URL, or a stored file reference depending on `content_type`.
    pub content: String,
    pub content_type: ContentKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
}

/// A task bound to one lesson. `lesson_id` is not referentially enforced;
/// readers filter dangling ids instead of writers rejecting them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub id: String,
    pub lesson_id: String,
    pub title: String,
    pub subject: Subject,
    #[serde(rename = "type")]
    pub kind: AssignmentType,
    pub description: String,
}

/// One scheduled day on a timetable track: at most one entry per day,
/// entries kept sorted ascending by day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableEntry {
    pub day: u32,
    pub lesson_ids: Vec<String>,
    pub assignment_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: String,
    pub assignment_id: String,
    pub student_id: String,
    #[serde(with = "time::serde::rfc3339")]
    pub submitted_at: OffsetDateTime,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    pub status: SubmissionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<Feedback>,
}

/// Grader output, attached to its submission exactly once and never edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub id: String,
    pub submission_id: String,
    pub teacher_id: String,
    pub grade: String,
    pub comments: String,
    #[serde(with = "time::serde::rfc3339")]
    pub graded_at: OffsetDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_type_uses_wire_names() {
        assert_eq!(
            serde_json::to_string(&PlanType::CrashCourse).unwrap(),
            r#""CRASH_COURSE""#
        );
        let parsed: PlanType = serde_json::from_str(r#""ONE_SESSION""#).unwrap();
        assert_eq!(parsed, PlanType::OneSession);
    }

    #[test]
    fn assignment_serializes_type_field() {
        let a = Assignment {
            id: "a-1".into(),
            lesson_id: "l-1".into(),
            title: "Quiz".into(),
            subject: Subject::Contracts,
            kind: AssignmentType::TimedQuiz,
            description: "desc".into(),
        };
        let json = serde_json::to_string(&a).unwrap();
        assert!(json.contains(r#""type":"Timed Quiz (MBE)""#));
        assert!(json.contains(r#""lessonId":"l-1""#));
    }

    #[test]
    fn submission_timestamps_are_rfc3339() {
        let s = Submission {
            id: "s-1".into(),
            assignment_id: "a-1".into(),
            student_id: "user-1".into(),
            submitted_at: time::macros::datetime!(2023-10-26 10:00 UTC),
            content: "essay".into(),
            file_name: None,
            status: SubmissionStatus::Submitted,
            feedback: None,
        };
        let json = serde_json::to_string(&s).unwrap();
        assert!(json.contains("2023-10-26T10:00:00Z"));
        assert!(!json.contains("fileName"));
        let back: Submission = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }
}
