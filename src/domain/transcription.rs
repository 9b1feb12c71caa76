pub const DEFAULT_LANGUAGE: &str = "en";

/// What a client asked for. The URL is kept as submitted; it is validated when the job runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptionRequest {
    pub url: String,
    pub language: String,
    pub translate: bool,
}

impl TranscriptionRequest {
    pub fn new(url: impl Into<String>, language: impl Into<String>, translate: bool) -> Self {
        Self {
            url: url.into(),
            language: language.into(),
            translate,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptionResult {
    pub transcription: String,
    pub translation: Option<String>,
}

impl TranscriptionResult {
    pub fn new(transcription: impl Into<String>, translation: Option<String>) -> Self {
        Self {
            transcription: transcription.into(),
            translation,
        }
    }
}
