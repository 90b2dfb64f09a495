use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::types::FetchedTranscript;
use crate::video_id::VideoId;

pub fn get_root_cache_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("/tmp"))
        .join("subtitry")
}

/// Get the cache directory for a single video
pub fn get_cache_dir(video_id: &VideoId) -> PathBuf {
    get_root_cache_dir().join(video_id.as_str())
}

/// Get the path for a cached transcript file (language aware)
pub fn get_transcript_path(cache_dir: &Path, language: &str) -> PathBuf {
    cache_dir.join(format!("transcript_{language}.json"))
}

/// Load a transcript from a cached file
pub fn load_transcript(path: &Path) -> Result<FetchedTranscript> {
    let json_content = std::fs::read_to_string(path)?;
    let transcript: FetchedTranscript = serde_json::from_str(&json_content)?;
    Ok(transcript)
}

/// Save a transcript to a file, creating the cache directory if needed
pub fn save_transcript(transcript: &FetchedTranscript, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let pretty_json = serde_json::to_string_pretty(transcript)?;
    std::fs::write(path, &pretty_json)?;
    Ok(())
}
