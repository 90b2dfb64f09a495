use serde::{Deserialize, Serialize};

use crate::video_id::VideoId;

/// A transcript as handed to callers: plain text plus the identifiers it was
/// fetched for. This is also the on-disk cache format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchedTranscript {
    pub video_id: VideoId,
    pub language: String,
    pub text: String,
}
