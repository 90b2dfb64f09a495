//! Decodes the `get_transcript` response into plain caption text.
//!
//! The response shape is owned by YouTube, versioned silently, and varies
//! between a segment-list layout and an older cue-group layout. Every level
//! of the tree is optional here so that a missing or renamed node degrades
//! to "no transcript" instead of a decode failure; renderer variants this
//! module does not know about deserialize with all fields `None` and are
//! skipped.

use serde::Deserialize;

/// Top of the `get_transcript` response document.
#[derive(Debug, Deserialize)]
pub struct TranscriptResponse {
    #[serde(default)]
    actions: Vec<Action>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Action {
    update_engagement_panel_action: Option<PanelAction>,
}

#[derive(Debug, Deserialize)]
struct PanelAction {
    content: Option<PanelContent>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PanelContent {
    transcript_renderer: Option<TranscriptRenderer>,
}

#[derive(Debug, Deserialize)]
struct TranscriptRenderer {
    content: Option<RendererContent>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RendererContent {
    transcript_search_panel_renderer: Option<SearchPanelRenderer>,
    body: Option<RendererBody>,
}

#[derive(Debug, Deserialize)]
struct SearchPanelRenderer {
    body: Option<SearchPanelBody>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchPanelBody {
    transcript_segment_list_renderer: Option<SegmentListRenderer>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SegmentListRenderer {
    #[serde(default)]
    initial_segments: Vec<SegmentNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RendererBody {
    transcript_body_renderer: Option<BodyRenderer>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BodyRenderer {
    #[serde(default)]
    cue_groups: Vec<SegmentNode>,
}

/// One entry of a segment or cue-group list. At most one renderer key is
/// populated per node; an unrecognized renderer leaves all of them `None`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SegmentNode {
    transcript_segment_renderer: Option<SnippetHolder>,
    transcript_section_header_renderer: Option<SnippetHolder>,
    transcript_cue_group_renderer: Option<CueGroupRenderer>,
}

#[derive(Debug, Deserialize)]
struct SnippetHolder {
    snippet: Option<TextNode>,
}

#[derive(Debug, Deserialize)]
struct CueGroupRenderer {
    #[serde(default)]
    cues: Vec<CueNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CueNode {
    transcript_cue_renderer: Option<CueRenderer>,
}

#[derive(Debug, Deserialize)]
struct CueRenderer {
    cue: Option<TextNode>,
}

/// A text leaf: either a plain string or an ordered list of runs.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TextNode {
    simple_text: Option<String>,
    runs: Option<Vec<Run>>,
}

#[derive(Debug, Deserialize)]
struct Run {
    text: Option<String>,
}

impl TranscriptResponse {
    /// Walk the known document shapes and produce the normalized transcript
    /// text, or `None` when the document carries no usable captions.
    pub fn transcript_text(&self) -> Option<String> {
        let renderer = self
            .actions
            .first()?
            .update_engagement_panel_action
            .as_ref()?
            .content
            .as_ref()?
            .transcript_renderer
            .as_ref()?
            .content
            .as_ref()?;

        let segments = renderer
            .initial_segments()
            .or_else(|| renderer.cue_groups())?;

        let mut parts = Vec::new();
        for node in segments {
            node.collect_text(&mut parts);
        }
        if parts.is_empty() {
            return None;
        }

        Some(normalize_whitespace(&parts.join(" ")))
    }
}

impl RendererContent {
    fn initial_segments(&self) -> Option<&[SegmentNode]> {
        let segments = &self
            .transcript_search_panel_renderer
            .as_ref()?
            .body
            .as_ref()?
            .transcript_segment_list_renderer
            .as_ref()?
            .initial_segments;
        (!segments.is_empty()).then_some(segments.as_slice())
    }

    fn cue_groups(&self) -> Option<&[SegmentNode]> {
        let groups = &self
            .body
            .as_ref()?
            .transcript_body_renderer
            .as_ref()?
            .cue_groups;
        (!groups.is_empty()).then_some(groups.as_slice())
    }
}

impl SegmentNode {
    fn collect_text(&self, parts: &mut Vec<String>) {
        if let Some(snippet) = self
            .transcript_segment_renderer
            .as_ref()
            .and_then(|r| r.snippet.as_ref())
        {
            push_part(snippet.text(), parts);
        } else if let Some(snippet) = self
            .transcript_section_header_renderer
            .as_ref()
            .and_then(|r| r.snippet.as_ref())
        {
            push_part(snippet.text(), parts);
        } else if let Some(group) = self.transcript_cue_group_renderer.as_ref() {
            for cue in &group.cues {
                if let Some(text) = cue
                    .transcript_cue_renderer
                    .as_ref()
                    .and_then(|r| r.cue.as_ref())
                {
                    push_part(text.text(), parts);
                }
            }
        }
        // unknown renderer variants contribute nothing
    }
}

impl TextNode {
    fn text(&self) -> String {
        if let Some(text) = &self.simple_text {
            return text.clone();
        }
        if let Some(runs) = &self.runs {
            return runs.iter().filter_map(|r| r.text.as_deref()).collect();
        }
        String::new()
    }
}

fn push_part(text: String, parts: &mut Vec<String>) {
    let trimmed = text.trim();
    if !trimmed.is_empty() {
        parts.push(trimmed.to_string());
    }
}

fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn document(content: serde_json::Value) -> TranscriptResponse {
        let doc = json!({
            "actions": [{
                "updateEngagementPanelAction": {
                    "content": {
                        "transcriptRenderer": { "content": content }
                    }
                }
            }]
        });
        serde_json::from_value(doc).unwrap()
    }

    fn segment(text: &str) -> serde_json::Value {
        json!({ "transcriptSegmentRenderer": { "snippet": { "simpleText": text } } })
    }

    fn segment_list(segments: Vec<serde_json::Value>) -> serde_json::Value {
        json!({
            "transcriptSearchPanelRenderer": {
                "body": {
                    "transcriptSegmentListRenderer": { "initialSegments": segments }
                }
            }
        })
    }

    #[test]
    fn extracts_simple_text_segments() {
        let doc = document(segment_list(vec![segment("Hello"), segment("world")]));
        assert_eq!(doc.transcript_text().as_deref(), Some("Hello world"));
    }

    #[test]
    fn falls_back_to_cue_groups() {
        let doc = document(json!({
            "body": {
                "transcriptBodyRenderer": {
                    "cueGroups": [{
                        "transcriptCueGroupRenderer": {
                            "cues": [
                                { "transcriptCueRenderer": { "cue": { "simpleText": "foo" } } },
                                { "transcriptCueRenderer": { "cue": { "simpleText": "bar" } } }
                            ]
                        }
                    }]
                }
            }
        }));
        assert_eq!(doc.transcript_text().as_deref(), Some("foo bar"));
    }

    #[test]
    fn concatenates_runs_without_separator() {
        let doc = document(segment_list(vec![json!({
            "transcriptSegmentRenderer": {
                "snippet": { "runs": [{ "text": "a" }, { "text": "b" }, { "text": "c" }] }
            }
        })]));
        assert_eq!(doc.transcript_text().as_deref(), Some("abc"));
    }

    #[test]
    fn section_headers_contribute_text() {
        let doc = document(segment_list(vec![
            json!({ "transcriptSectionHeaderRenderer": { "snippet": { "simpleText": "Intro" } } }),
            segment("Hello"),
        ]));
        assert_eq!(doc.transcript_text().as_deref(), Some("Intro Hello"));
    }

    #[test]
    fn unknown_segment_variants_are_skipped() {
        let doc = document(segment_list(vec![
            segment("Hello"),
            json!({ "someFutureRenderer": { "snippet": { "simpleText": "nope" } } }),
            segment("world"),
        ]));
        assert_eq!(doc.transcript_text().as_deref(), Some("Hello world"));
    }

    #[test]
    fn collapses_whitespace_and_trims() {
        let doc = document(segment_list(vec![
            segment("  Hello\n  there "),
            segment("\tworld  "),
        ]));
        assert_eq!(doc.transcript_text().as_deref(), Some("Hello there world"));
    }

    #[test]
    fn empty_actions_yield_none() {
        let doc: TranscriptResponse = serde_json::from_value(json!({ "actions": [] })).unwrap();
        assert_eq!(doc.transcript_text(), None);
        let doc: TranscriptResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(doc.transcript_text(), None);
    }

    #[test]
    fn whitespace_only_segments_yield_none() {
        let doc = document(segment_list(vec![segment("   "), segment("")]));
        assert_eq!(doc.transcript_text(), None);
    }

    #[test]
    fn empty_segment_list_falls_back_to_cue_groups() {
        let doc = document(json!({
            "transcriptSearchPanelRenderer": {
                "body": { "transcriptSegmentListRenderer": { "initialSegments": [] } }
            },
            "body": {
                "transcriptBodyRenderer": {
                    "cueGroups": [{
                        "transcriptCueGroupRenderer": {
                            "cues": [{ "transcriptCueRenderer": { "cue": { "simpleText": "foo" } } }]
                        }
                    }]
                }
            }
        }));
        assert_eq!(doc.transcript_text().as_deref(), Some("foo"));
    }

    #[test]
    fn extraction_is_idempotent() {
        let doc = document(segment_list(vec![segment("Hello"), segment("world")]));
        assert_eq!(doc.transcript_text(), doc.transcript_text());
    }
}
