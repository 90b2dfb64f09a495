//! Subtitry Core Library
//!
//! Fetches plain-text transcripts for YouTube videos by talking to the
//! internal `get_transcript` endpoint directly: extract the video id from a
//! URL, encode the opaque request token, POST with browser-like headers, and
//! walk the nested response into normalized caption text.

pub mod cache;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod params;
pub mod types;
pub mod video_id;

// Re-export commonly used items at crate root
pub use cache::{
    get_cache_dir, get_root_cache_dir, get_transcript_path, load_transcript, save_transcript,
};
pub use error::{Result, SubtitryError};
pub use extract::TranscriptResponse;
pub use fetch::{DEFAULT_LANGUAGE, TranscriptClient};
pub use params::{TrackKind, transcript_params};
pub use types::FetchedTranscript;
pub use video_id::VideoId;
