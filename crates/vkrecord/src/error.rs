use ash::vk;

#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    /// A native entry point reported failure. The command buffer holds an
    /// unspecified partial recording and must be discarded or re-recorded.
    #[error("{call} failed: {result}")]
    Native {
        call: &'static str,
        result: vk::Result,
    },

    #[error("recording was invalidated by an earlier failure")]
    Invalidated,
}

impl RecordError {
    pub(crate) fn native(call: &'static str) -> impl FnOnce(vk::Result) -> RecordError {
        move |result| RecordError::Native { call, result }
    }
}
