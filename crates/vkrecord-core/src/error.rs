use crate::handle::ResourceId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("staging upload into {resource:?} failed: {message}")]
    Upload { resource: ResourceId, message: String },

    #[error("pre-execute hook failed: {0}")]
    Hook(String),
}

/// Every failure produced by one run of a pre-execute hook list.
/// Each entry carries the registration index of the hook that failed.
#[derive(Debug, thiserror::Error)]
#[error("{} of {total} pre-execute hooks failed", .failures.len())]
pub struct HookFailures {
    pub total: usize,
    pub failures: Vec<(usize, CoreError)>,
}
