use thiserror::Error;

#[derive(Error, Debug)]
pub enum SubtitryError {
    #[error("not a recognized YouTube URL: {input}")]
    InvalidVideoUrl { input: String },

    #[error("transcript endpoint returned HTTP {status}")]
    Upstream { status: u16 },

    #[error("transcript endpoint returned a non-JSON body: {0}")]
    MalformedResponse(#[source] serde_json::Error),

    #[error("no transcript available for video {video_id}")]
    NoTranscriptAvailable { video_id: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, SubtitryError>;
