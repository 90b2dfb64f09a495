//! Talks to the internal `get_transcript` endpoint.
//!
//! The endpoint is undocumented and expects a browser: the request carries a
//! desktop user agent, YouTube's own `Origin`/`Referer`, and the web client
//! identification block. A lookup is single-shot; upstream failures surface
//! to the caller without retries.

use std::time::Duration;

use serde_json::json;
use tracing::debug;

use crate::error::{Result, SubtitryError};
use crate::extract::TranscriptResponse;
use crate::params::{TrackKind, transcript_params};
use crate::types::FetchedTranscript;
use crate::video_id::VideoId;

const GET_TRANSCRIPT_URL: &str = "https://www.youtube.com/youtubei/v1/get_transcript";
const YOUTUBE_ORIGIN: &str = "https://www.youtube.com";
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";
const CLIENT_NAME: &str = "WEB";
const CLIENT_VERSION: &str = "2.20250626.01.00";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub const DEFAULT_LANGUAGE: &str = "en";

/// Client for transcript lookups. Stateless between calls; safe to share.
pub struct TranscriptClient {
    http: reqwest::Client,
    stub_transcript: Option<String>,
}

impl TranscriptClient {
    pub fn new() -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            stub_transcript: None,
        })
    }

    /// A client that answers every lookup with `transcript` without touching
    /// the network. Deterministic aid for tests and dry runs; never the
    /// default, so production failures stay visible as typed errors.
    pub fn with_stub(transcript: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            stub_transcript: Some(transcript.into()),
        }
    }

    /// Fetch the transcript for a watch/share URL.
    pub async fn fetch_transcript(&self, url: &str, language: &str) -> Result<FetchedTranscript> {
        let video_id = VideoId::from_url(url)?;
        self.fetch_transcript_by_id(&video_id, language).await
    }

    pub async fn fetch_transcript_by_id(
        &self,
        video_id: &VideoId,
        language: &str,
    ) -> Result<FetchedTranscript> {
        if let Some(stub) = &self.stub_transcript {
            return Ok(FetchedTranscript {
                video_id: video_id.clone(),
                language: language.to_string(),
                text: stub.clone(),
            });
        }

        let params = transcript_params(video_id, language, TrackKind::Asr);
        debug!(video_id = %video_id, language, "requesting transcript");

        let response = self
            .http
            .post(GET_TRANSCRIPT_URL)
            .header("Origin", YOUTUBE_ORIGIN)
            .header("Referer", format!("{YOUTUBE_ORIGIN}/watch?v={video_id}"))
            .header("Accept-Language", "en-US,en;q=0.9")
            .json(&json!({
                "context": {
                    "client": {
                        "clientName": CLIENT_NAME,
                        "clientVersion": CLIENT_VERSION
                    }
                },
                "params": params
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            debug!(video_id = %video_id, status = status.as_u16(), "upstream rejected request");
            return Err(SubtitryError::Upstream {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        parse_transcript_body(&body, video_id, language)
    }
}

/// Decode and extract, split from the request path so the stage is testable
/// without a live endpoint.
fn parse_transcript_body(
    body: &str,
    video_id: &VideoId,
    language: &str,
) -> Result<FetchedTranscript> {
    let document: TranscriptResponse =
        serde_json::from_str(body).map_err(SubtitryError::MalformedResponse)?;

    let text = document
        .transcript_text()
        .ok_or_else(|| SubtitryError::NoTranscriptAvailable {
            video_id: video_id.to_string(),
        })?;

    Ok(FetchedTranscript {
        video_id: video_id.clone(),
        language: language.to_string(),
        text,
    })
}
