//! Builds the opaque `params` token the `get_transcript` endpoint expects.
//!
//! The token is a minimal length-delimited (protobuf wire format) message,
//! nested twice and base64-encoded at each level: an inner frame carrying
//! `(trackKind, languageCode)` and an outer frame carrying
//! `(videoId, base64(inner))`. Only fields 1 and 2 exist and both are
//! length-delimited strings, so nothing more general is implemented here.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::video_id::VideoId;

/// Wire type for length-delimited fields.
const WIRE_TYPE_LEN: u8 = 2;

/// Caption track kind requested from the endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrackKind {
    /// Automatic speech recognition track.
    #[default]
    Asr,
    /// Human-authored track.
    Manual,
}

/// Encode the double-nested request token for `(video, language, kind)`.
///
/// Values are ASCII (real video ids and language codes always are); the
/// encoder writes raw bytes and a single length byte, which covers payloads
/// under 128 bytes.
pub fn transcript_params(video_id: &VideoId, language: &str, kind: TrackKind) -> String {
    let mut inner = Vec::new();
    // The upstream decoder is sensitive to field presence: a non-ASR track
    // means no field 1 at all, not a zero-length one.
    if kind == TrackKind::Asr {
        push_string_field(&mut inner, 1, "asr");
    }
    push_string_field(&mut inner, 2, language);
    let inner_b64 = STANDARD.encode(&inner);

    let mut outer = Vec::new();
    push_string_field(&mut outer, 1, video_id.as_str());
    push_string_field(&mut outer, 2, &inner_b64);
    STANDARD.encode(&outer)
}

fn push_string_field(buf: &mut Vec<u8>, field: u8, value: &str) {
    debug_assert!(value.len() < 128, "single-byte length prefix only");
    buf.push((field << 3) | WIRE_TYPE_LEN);
    buf.push(value.len() as u8);
    buf.extend_from_slice(value.as_bytes());
}
