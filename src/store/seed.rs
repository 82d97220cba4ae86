//! Reference dataset written on first-ever load, when the blob store has
//! nothing persisted yet: the plan catalog, demo accounts, and a small set
//! of lessons, assignments, timetables, and submissions.

use time::macros::datetime;

use crate::domain::{
    Assignment, AssignmentType, ContentKind, Feedback, Lesson, LessonFormat, Plan, PlanType, Role,
    Subject, Submission, SubmissionStatus, TimetableEntry, User,
};

use super::AppData;

/// The demo mentor account; feedback is recorded under this identity.
pub const MENTOR_USER_ID: &str = "user-2";

fn lesson(
    id: &str,
    subject: Subject,
    title: &str,
    format: LessonFormat,
    content_type: ContentKind,
    content: &str,
) -> Lesson {
    Lesson {
        id: id.into(),
        title: title.into(),
        subject,
        format,
        content: content.into(),
        content_type,
        file_name: None,
    }
}

fn assignment(
    id: &str,
    lesson_id: &str,
    subject: Subject,
    title: &str,
    kind: AssignmentType,
    description: &str,
) -> Assignment {
    Assignment {
        id: id.into(),
        lesson_id: lesson_id.into(),
        title: title.into(),
        subject,
        kind,
        description: description.into(),
    }
}

fn entry(day: u32, lesson_ids: &[&str], assignment_ids: &[&str]) -> TimetableEntry {
    TimetableEntry {
        day,
        lesson_ids: lesson_ids.iter().map(|s| s.to_string()).collect(),
        assignment_ids: assignment_ids.iter().map(|s| s.to_string()).collect(),
    }
}

fn mentorship_features() -> Vec<String> {
    [
        "Daily study schedules (1, 3, & 6-month options)",
        "Upload & submit essays, MCQs, and MPTs on a schedule",
        "Receive marked PDF feedback & personalized improvements",
        "Receive recorded video explanations for selected essays",
        "Track your completion percentage and progress",
        "Book 1-on-1 sessions directly through Calendly",
        "Chat privately for guidance and assignment clarification",
        "Weekly motivation & rule memorization drills",
        "Optional live group study sessions & recall games",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

pub fn plans() -> Vec<Plan> {
    vec![
        Plan {
            id: PlanType::OneSession,
            name: "One Session Overview".into(),
            duration: 1,
            price: 100,
            description: "A one-time review of your bar exam plan and study roadmap (no feedback)."
                .into(),
            features: Some(
                ["1-hour strategy call", "Roadmap review", "Q&A Session"]
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            ),
        },
        Plan {
            id: PlanType::CrashCourse,
            name: "Crash Course".into(),
            duration: 30,
            price: 1000,
            description: "For last-minute preppers needing an intense, structured final month."
                .into(),
            features: Some(mentorship_features()),
        },
        Plan {
            id: PlanType::Intensive,
            name: "Intensive Plan".into(),
            duration: 90,
            price: 1800,
            description: "A personalized 3-month plan with weekly feedback and strategy calls."
                .into(),
            features: Some(mentorship_features()),
        },
        Plan {
            id: PlanType::Full,
            name: "Full Mentorship".into(),
            duration: 180,
            price: 2900,
            description: "The complete 6-month mentorship experience for ultimate accountability."
                .into(),
            features: Some(mentorship_features()),
        },
    ]
}

fn users() -> Vec<User> {
    vec![
        User {
            id: "user-1".into(),
            name: "Alice Candidate".into(),
            email: "student@example.com".into(),
            role: Role::Student,
            plan: None,
        },
        User {
            id: MENTOR_USER_ID.into(),
            name: "Cynthia Azor".into(),
            email: "teacher@example.com".into(),
            role: Role::Teacher,
            plan: None,
        },
        User {
            id: "user-3".into(),
            name: "Charlie Candidate".into(),
            email: "student2@example.com".into(),
            role: Role::Student,
            plan: Some(PlanType::Intensive),
        },
    ]
}

fn lessons() -> Vec<Lesson> {
    vec![
        lesson(
            "l-c1",
            Subject::Contracts,
            "Formation of Contracts",
            LessonFormat::OutlineLecture,
            ContentKind::Video,
            "https://picsum.photos/seed/lc1/800/450",
        ),
        lesson(
            "l-c2",
            Subject::Contracts,
            "Consideration Doctrine",
            LessonFormat::OutlineLecture,
            ContentKind::Pdf,
            "consideration.pdf",
        ),
        lesson(
            "l-c3",
            Subject::Contracts,
            "MBE Practice: Contracts Set 1",
            LessonFormat::MbePractice,
            ContentKind::Text,
            "25 multiple-choice questions on contract formation and consideration.",
        ),
        lesson(
            "l-t1",
            Subject::Torts,
            "Introduction to Negligence",
            LessonFormat::OutlineLecture,
            ContentKind::Video,
            "https://picsum.photos/seed/lt1/800/450",
        ),
        lesson(
            "l-t2",
            Subject::Torts,
            "Intentional Torts",
            LessonFormat::OutlineLecture,
            ContentKind::Text,
            "A deep dive into assault, battery, and false imprisonment.",
        ),
        lesson(
            "l-t3",
            Subject::Torts,
            "MEE Essay Practice: Negligence",
            LessonFormat::EssayPractice,
            ContentKind::Text,
            "Analyze a fact pattern involving multiple parties and potential negligence claims.",
        ),
        lesson(
            "l-r1",
            Subject::ReviewStrategy,
            "Effective Study Schedules",
            LessonFormat::OutlineLecture,
            ContentKind::Video,
            "https://picsum.photos/seed/lr1/800/450",
        ),
        lesson(
            "l-mpt1",
            Subject::BusinessAssociations,
            "MPT: Franklin v. Baxter",
            LessonFormat::MptPractice,
            ContentKind::Pdf,
            "mpt_task_memo.pdf",
        ),
        lesson(
            "l-v1",
            Subject::Torts,
            "Video Explanation for Negligence Essay",
            LessonFormat::VideoExplanation,
            ContentKind::Video,
            "https://picsum.photos/seed/lv1/800/450",
        ),
    ]
}

fn assignments() -> Vec<Assignment> {
    vec![
        assignment(
            "a-c1",
            "l-c3",
            Subject::Contracts,
            "Submit MBE Answers: Contracts Set 1",
            AssignmentType::TimedQuiz,
            "Complete the 25-question quiz under timed conditions (45 minutes).",
        ),
        assignment(
            "a-t1",
            "l-t3",
            Subject::Torts,
            "Submit MEE Essay: Negligence",
            AssignmentType::Essay,
            "Write a full MEE-style essay based on the provided fact pattern.",
        ),
        assignment(
            "a-mpt1",
            "l-mpt1",
            Subject::BusinessAssociations,
            "Submit MPT: Franklin v. Baxter",
            AssignmentType::DocumentUpload,
            "Draft a persuasive brief based on the case file and library, and upload as a PDF.",
        ),
        assignment(
            "a-r1",
            "l-r1",
            Subject::ReviewStrategy,
            "My Weekly Study Plan",
            AssignmentType::ReflectiveJournal,
            "Submit a short journal entry outlining your study plan for the upcoming week.",
        ),
    ]
}

fn timetable_crash() -> Vec<TimetableEntry> {
    vec![
        entry(1, &["l-r1"], &["a-r1"]),
        entry(3, &["l-c1", "l-c2"], &[]),
        entry(5, &["l-c3"], &["a-c1"]),
        entry(10, &["l-t1", "l-t2"], &[]),
        entry(12, &["l-t3"], &["a-t1"]),
        entry(25, &["l-mpt1"], &["a-mpt1"]),
    ]
}

fn timetable_intensive() -> Vec<TimetableEntry> {
    vec![
        entry(1, &["l-c1", "l-c2"], &[]),
        entry(2, &["l-c3"], &["a-c1"]),
        entry(14, &["l-t1", "l-t2"], &[]),
        entry(15, &["l-t3"], &["a-t1"]),
        entry(16, &["l-v1"], &[]),
        entry(45, &["l-mpt1"], &["a-mpt1"]),
    ]
}

fn timetable_full() -> Vec<TimetableEntry> {
    vec![
        entry(1, &["l-r1"], &["a-r1"]),
        entry(7, &["l-c1"], &[]),
        entry(9, &["l-c2"], &[]),
        entry(14, &["l-c3"], &["a-c1"]),
        entry(30, &["l-t1"], &[]),
        entry(32, &["l-t2"], &[]),
        entry(35, &["l-t3"], &["a-t1"]),
        entry(37, &["l-v1"], &[]),
        entry(90, &["l-mpt1"], &["a-mpt1"]),
    ]
}

fn submissions() -> Vec<Submission> {
    vec![
        Submission {
            id: "s-1".into(),
            assignment_id: "a-t1".into(),
            student_id: "user-1".into(),
            submitted_at: datetime!(2023-10-26 10:00 UTC),
            content: "Here is my essay on negligence. I spotted the issues of duty, breach, \
                      causation, and damages..."
                .into(),
            file_name: None,
            status: SubmissionStatus::Graded,
            feedback: Some(Feedback {
                id: "f-1".into(),
                submission_id: "s-1".into(),
                teacher_id: MENTOR_USER_ID.into(),
                grade: "B+".into(),
                comments: "Good issue spotting. Work on structuring your analysis with IRAC \
                           more clearly for each point."
                    .into(),
                graded_at: datetime!(2023-10-27 14:00 UTC),
            }),
        },
        Submission {
            id: "s-2".into(),
            assignment_id: "a-c1".into(),
            student_id: "user-3".into(),
            submitted_at: datetime!(2023-11-15 12:30 UTC),
            content: "Completed the quiz. Score: 20/25".into(),
            file_name: None,
            status: SubmissionStatus::Submitted,
            feedback: None,
        },
        Submission {
            id: "s-3".into(),
            assignment_id: "a-mpt1".into(),
            student_id: "user-3".into(),
            submitted_at: datetime!(2023-11-20 09:00 UTC),
            content: "Attached is my persuasive brief for the MPT.".into(),
            file_name: Some("MPT_Franklin_Brief_CS.pdf".into()),
            status: SubmissionStatus::Submitted,
            feedback: None,
        },
    ]
}

pub fn initial_data() -> AppData {
    AppData {
        users: users(),
        plans: plans(),
        lessons: lessons(),
        assignments: assignments(),
        submissions: submissions(),
        timetable_crash: timetable_crash(),
        timetable_intensive: timetable_intensive(),
        timetable_full: timetable_full(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_is_internally_consistent() {
        let data = initial_data();
        assert_eq!(data.plans.len(), 4);
        assert_eq!(data.users.len(), 3);
        for tt in [
            &data.timetable_crash,
            &data.timetable_intensive,
            &data.timetable_full,
        ] {
            let mut days: Vec<u32> = tt.iter().map(|e| e.day).collect();
            let sorted = days.clone();
            days.sort_unstable();
            assert_eq!(days, sorted, "seed timetables must be sorted by day");
        }
        // every scheduled id resolves in the seed itself
        for e in data
            .timetable_crash
            .iter()
            .chain(&data.timetable_intensive)
            .chain(&data.timetable_full)
        {
            for lid in &e.lesson_ids {
                assert!(data.lessons.iter().any(|l| &l.id == lid), "lesson {lid}");
            }
            for aid in &e.assignment_ids {
                assert!(
                    data.assignments.iter().any(|a| &a.id == aid),
                    "assignment {aid}"
                );
            }
        }
    }
}
