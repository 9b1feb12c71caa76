mod job;
mod job_id;
mod job_status;
mod media_url;
mod transcription;

pub use job::{Job, JobTransitionError};
pub use job_id::JobId;
pub use job_status::JobStatus;
pub use media_url::{MediaUrl, MediaUrlError, validate_media_url};
pub use transcription::{DEFAULT_LANGUAGE, TranscriptionRequest, TranscriptionResult};
