use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SubtitryError};

/// Length of every YouTube video identifier.
pub const VIDEO_ID_LEN: usize = 11;

/// A validated 11-character YouTube video identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VideoId(String);

impl VideoId {
    /// Extract the video id from a watch/share URL.
    ///
    /// Recognized shapes: `watch?v=ID`, `youtu.be/ID`, `embed/ID` and `v/ID`.
    /// The trailing token must be exactly 11 id characters; shorter or longer
    /// runs are rejected rather than truncated.
    pub fn from_url(url: &str) -> Result<Self> {
        let tail = url
            .split_once("watch?v=")
            .or_else(|| url.split_once("youtu.be/"))
            .or_else(|| url.split_once("/embed/"))
            .or_else(|| url.split_once("/v/"))
            .map(|(_, after)| after)
            .ok_or_else(|| SubtitryError::InvalidVideoUrl {
                input: url.to_string(),
            })?;

        let id: String = tail.chars().take_while(|c| is_id_char(*c)).collect();
        if id.len() != VIDEO_ID_LEN {
            return Err(SubtitryError::InvalidVideoUrl {
                input: url.to_string(),
            });
        }

        Ok(VideoId(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn is_id_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID: &str = "dQw4w9WgXcQ";

    #[test]
    fn extracts_same_id_from_all_url_shapes() {
        let urls = [
            format!("https://www.youtube.com/watch?v={ID}"),
            format!("https://youtu.be/{ID}"),
            format!("https://www.youtube.com/embed/{ID}"),
            format!("https://www.youtube.com/v/{ID}"),
        ];
        for url in urls {
            assert_eq!(VideoId::from_url(&url).unwrap().as_str(), ID, "{url}");
        }
    }

    #[test]
    fn ignores_trailing_query_parameters() {
        let url = format!("https://www.youtube.com/watch?v={ID}&t=42s");
        assert_eq!(VideoId::from_url(&url).unwrap().as_str(), ID);
        let url = format!("https://youtu.be/{ID}?si=share");
        assert_eq!(VideoId::from_url(&url).unwrap().as_str(), ID);
    }

    #[test]
    fn rejects_unrecognized_inputs() {
        for url in ["not a url", "", "https://example.com/watch", ID] {
            assert!(matches!(
                VideoId::from_url(url),
                Err(SubtitryError::InvalidVideoUrl { .. })
            ));
        }
    }

    #[test]
    fn rejects_ids_that_are_too_short_or_too_long() {
        let short = "https://www.youtube.com/watch?v=dQw4w9WgXc";
        assert!(VideoId::from_url(short).is_err());
        let long = "https://www.youtube.com/watch?v=dQw4w9WgXcQQ";
        assert!(VideoId::from_url(long).is_err());
    }
}
