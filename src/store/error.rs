use thiserror::Error;

/// Failures the data store surfaces to its callers. Negative lookups
/// (duplicate email, unknown submission id) are not errors; they come back
/// as `Option`/no-op results.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No snapshot has been loaded yet, or the last load failed.
    /// Every operation is refused until a `load` succeeds.
    #[error("data store is not loaded")]
    NotLoaded,

    /// The persisted blob could not be read or parsed. Terminal until a
    /// fresh load is retried.
    #[error("failed to load persisted data")]
    Load(#[source] anyhow::Error),

    /// Persisting a mutation failed. The in-memory snapshot is left at its
    /// pre-operation value; the caller may retry the same mutation.
    #[error("failed to persist data")]
    Save(#[source] anyhow::Error),
}
