mod error;
pub mod seed;
mod timetable;

pub use error::StoreError;

use std::sync::Arc;

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::domain::{
    Assignment, AssignmentType, ContentKind, Feedback, Lesson, LessonFormat, Plan, Subject,
    Submission, SubmissionStatus, TimetableEntry, User,
};
use crate::domain::{PlanType, Role};
use crate::storage::BlobStore;

/// The persisted blob: every domain collection, serialized as one JSON
/// object and rewritten wholly on each mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppData {
    pub users: Vec<User>,
    pub plans: Vec<Plan>,
    pub lessons: Vec<Lesson>,
    pub assignments: Vec<Assignment>,
    pub submissions: Vec<Submission>,
    pub timetable_crash: Vec<TimetableEntry>,
    pub timetable_intensive: Vec<TimetableEntry>,
    pub timetable_full: Vec<TimetableEntry>,
}

impl AppData {
    /// Tracks that participate in assignment-day placement. The crash
    /// track carries seed content only, and the one-session plan has no
    /// timetable at all.
    fn schedulable_tracks(&mut self) -> [&mut Vec<TimetableEntry>; 2] {
        [&mut self.timetable_intensive, &mut self.timetable_full]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimetableTrack {
    Crash,
    Intensive,
    Full,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLesson {
    pub title: String,
    pub subject: Subject,
    pub format: LessonFormat,
    pub content: String,
    pub content_type: ContentKind,
    #[serde(default)]
    pub file_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAssignment {
    pub lesson_id: String,
    pub title: String,
    pub subject: Subject,
    #[serde(rename = "type")]
    pub kind: AssignmentType,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSubmission {
    pub assignment_id: String,
    pub student_id: String,
    pub content: String,
    #[serde(default)]
    pub file_name: Option<String>,
}

fn fresh_id(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4())
}

/// Authoritative in-memory snapshot of all collections.
///
/// Mutations clone the current snapshot, apply the change, persist the
/// result, and only then swap it in; a failed save leaves the visible
/// snapshot untouched. The write lock is held across the persistence
/// await, so mutations are strictly serialized.
pub struct DataStore {
    blob: Arc<dyn BlobStore>,
    data: RwLock<Option<AppData>>,
}

impl DataStore {
    pub fn new(blob: Arc<dyn BlobStore>) -> Self {
        Self {
            blob,
            data: RwLock::new(None),
        }
    }

    /// Reads the persisted blob, seeding the reference dataset if nothing
    /// was ever written. Until this succeeds every operation returns
    /// `StoreError::NotLoaded`; a failed load can only be recovered by
    /// calling `load` again.
    pub async fn load(&self) -> Result<(), StoreError> {
        let mut guard = self.data.write().await;
        *guard = None;
        let data = match self.blob.load().await.map_err(StoreError::Load)? {
            Some(bytes) => {
                let data: AppData =
                    serde_json::from_slice(&bytes).map_err(|e| StoreError::Load(e.into()))?;
                debug!(
                    users = data.users.len(),
                    lessons = data.lessons.len(),
                    assignments = data.assignments.len(),
                    submissions = data.submissions.len(),
                    "loaded persisted data"
                );
                data
            }
            None => {
                info!("no persisted data found, seeding reference dataset");
                let seeded = seed::initial_data();
                let blob = serde_json::to_vec(&seeded).map_err(|e| StoreError::Save(e.into()))?;
                self.blob
                    .save(Bytes::from(blob))
                    .await
                    .map_err(StoreError::Save)?;
                seeded
            }
        };
        *guard = Some(data);
        Ok(())
    }

    async fn persist(&self, data: &AppData) -> Result<(), StoreError> {
        let blob = serde_json::to_vec(data).map_err(|e| StoreError::Save(e.into()))?;
        self.blob
            .save(Bytes::from(blob))
            .await
            .map_err(StoreError::Save)
    }

    /// Clone-apply-persist-swap. The closure returns `None` to signal
    /// "nothing to change" (duplicate email, unknown id); in that case
    /// nothing is persisted and the snapshot stays as-is.
    async fn mutate<T>(
        &self,
        apply: impl FnOnce(&mut AppData) -> Option<T>,
    ) -> Result<Option<T>, StoreError> {
        let mut guard = self.data.write().await;
        let current = guard.as_ref().ok_or(StoreError::NotLoaded)?;
        let mut next = current.clone();
        let Some(out) = apply(&mut next) else {
            return Ok(None);
        };
        self.persist(&next).await?;
        *guard = Some(next);
        Ok(Some(out))
    }

    async fn read<T>(&self, pick: impl FnOnce(&AppData) -> T) -> Result<T, StoreError> {
        let guard = self.data.read().await;
        let data = guard.as_ref().ok_or(StoreError::NotLoaded)?;
        Ok(pick(data))
    }

    // --- reads ---

    pub async fn snapshot(&self) -> Result<AppData, StoreError> {
        self.read(|d| d.clone()).await
    }

    pub async fn users(&self) -> Result<Vec<User>, StoreError> {
        self.read(|d| d.users.clone()).await
    }

    pub async fn plans(&self) -> Result<Vec<Plan>, StoreError> {
        self.read(|d| d.plans.clone()).await
    }

    pub async fn lessons(&self) -> Result<Vec<Lesson>, StoreError> {
        self.read(|d| d.lessons.clone()).await
    }

    pub async fn assignments(&self) -> Result<Vec<Assignment>, StoreError> {
        self.read(|d| d.assignments.clone()).await
    }

    pub async fn submissions(&self) -> Result<Vec<Submission>, StoreError> {
        self.read(|d| d.submissions.clone()).await
    }

    pub async fn timetable(&self, track: TimetableTrack) -> Result<Vec<TimetableEntry>, StoreError> {
        self.read(|d| match track {
            TimetableTrack::Crash => d.timetable_crash.clone(),
            TimetableTrack::Intensive => d.timetable_intensive.clone(),
            TimetableTrack::Full => d.timetable_full.clone(),
        })
        .await
    }

    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let wanted = email.to_lowercase();
        self.read(|d| {
            d.users
                .iter()
                .find(|u| u.email.to_lowercase() == wanted)
                .cloned()
        })
        .await
    }

    // --- mutations ---

    pub async fn create_lesson(&self, new: NewLesson) -> Result<Lesson, StoreError> {
        let lesson = Lesson {
            id: fresh_id("l"),
            title: new.title,
            subject: new.subject,
            format: new.format,
            content: new.content,
            content_type: new.content_type,
            file_name: new.file_name,
        };
        let created = lesson.clone();
        self.mutate(move |data| {
            data.lessons.push(lesson);
            Some(())
        })
        .await?;
        debug!(lesson_id = %created.id, "lesson created");
        Ok(created)
    }

    /// Replaces the lesson with a matching id. An unknown id leaves the
    /// collection unchanged and is not an error.
    pub async fn update_lesson(&self, lesson: Lesson) -> Result<(), StoreError> {
        self.mutate(move |data| {
            if let Some(slot) = data.lessons.iter_mut().find(|l| l.id == lesson.id) {
                *slot = lesson;
            }
            Some(())
        })
        .await?;
        Ok(())
    }

    /// Appends the assignment and places its id on `day` of every
    /// schedulable track. One persist covers both.
    pub async fn create_assignment(
        &self,
        new: NewAssignment,
        day: u32,
    ) -> Result<Assignment, StoreError> {
        let assignment = Assignment {
            id: fresh_id("a"),
            lesson_id: new.lesson_id,
            title: new.title,
            subject: new.subject,
            kind: new.kind,
            description: new.description,
        };
        let created = assignment.clone();
        self.mutate(move |data| {
            let id = assignment.id.clone();
            data.assignments.push(assignment);
            for track in data.schedulable_tracks() {
                timetable::place_assignment(track, day, &id);
            }
            Some(())
        })
        .await?;
        debug!(assignment_id = %created.id, day, "assignment created");
        Ok(created)
    }

    /// Replaces the assignment record and moves its id to `day`: the id is
    /// stripped from every entry of each schedulable track, re-placed on
    /// the new day, and entries left scheduling nothing are pruned.
    pub async fn update_assignment(
        &self,
        assignment: Assignment,
        day: u32,
    ) -> Result<(), StoreError> {
        self.mutate(move |data| {
            let id = assignment.id.clone();
            if let Some(slot) = data.assignments.iter_mut().find(|a| a.id == id) {
                *slot = assignment;
            }
            for track in data.schedulable_tracks() {
                timetable::unplace_assignment(track, &id);
                timetable::place_assignment(track, day, &id);
                timetable::prune_empty(track);
            }
            Some(())
        })
        .await?;
        Ok(())
    }

    pub async fn create_submission(&self, new: NewSubmission) -> Result<Submission, StoreError> {
        let submission = Submission {
            id: fresh_id("s"),
            assignment_id: new.assignment_id,
            student_id: new.student_id,
            submitted_at: OffsetDateTime::now_utc(),
            content: new.content,
            file_name: new.file_name,
            status: SubmissionStatus::Submitted,
            feedback: None,
        };
        let created = submission.clone();
        self.mutate(move |data| {
            data.submissions.push(submission);
            Some(())
        })
        .await?;
        debug!(submission_id = %created.id, assignment_id = %created.assignment_id, "submission created");
        Ok(created)
    }

    /// Marks a submission graded and attaches freshly built feedback under
    /// the mentor identity. Returns `None` (persisting nothing) when the
    /// submission id is unknown.
    pub async fn record_feedback(
        &self,
        submission_id: &str,
        grade: String,
        comments: String,
    ) -> Result<Option<Submission>, StoreError> {
        let wanted = submission_id.to_string();
        let graded = self
            .mutate(move |data| {
                let submission = data.submissions.iter_mut().find(|s| s.id == wanted)?;
                submission.status = SubmissionStatus::Graded;
                submission.feedback = Some(Feedback {
                    id: fresh_id("f"),
                    submission_id: submission.id.clone(),
                    teacher_id: seed::MENTOR_USER_ID.into(),
                    grade,
                    comments,
                    graded_at: OffsetDateTime::now_utc(),
                });
                Some(submission.clone())
            })
            .await?;
        if graded.is_none() {
            warn!(submission_id, "feedback for unknown submission ignored");
        }
        Ok(graded)
    }

    /// Case-insensitive email uniqueness; a collision returns `None` with
    /// nothing mutated. New accounts start as students without a plan.
    pub async fn register_user(
        &self,
        name: String,
        email: String,
    ) -> Result<Option<User>, StoreError> {
        self.mutate(move |data| {
            let wanted = email.to_lowercase();
            if data.users.iter().any(|u| u.email.to_lowercase() == wanted) {
                return None;
            }
            let user = User {
                id: fresh_id("user"),
                name,
                email,
                role: Role::Student,
                plan: None,
            };
            data.users.push(user.clone());
            Some(user)
        })
        .await
    }

    /// Purchase completion: pins the bought plan onto the user record.
    /// Returns `None` for an unknown user id.
    pub async fn assign_plan(
        &self,
        user_id: &str,
        plan: PlanType,
    ) -> Result<Option<User>, StoreError> {
        let user_id = user_id.to_string();
        self.mutate(move |data| {
            let user = data.users.iter_mut().find(|u| u.id == user_id)?;
            user.plan = Some(plan);
            Some(user.clone())
        })
        .await
    }
}
