//! Extraction pipeline: HTML → embedded JSON blob → flat video records
//!
//! This is the heart of the service. YouTube does not expose search results
//! through a clean endpoint on the results page; the data ships as a JSON
//! object assigned to `ytInitialData` inside inline script markup. The
//! pipeline locates that blob, parses it, and walks the renderer tree into
//! [`VideoRecord`](crate::results::VideoRecord)s.
//!
//! Every stage degrades to an empty record list instead of erroring: a
//! missing blob, malformed JSON, or a reshuffled tree all mean "no results",
//! since the upstream markup is not a stable contract.

mod locator;
mod mapper;

pub use locator::locate_initial_data;
pub use mapper::map_videos;

use crate::results::VideoRecord;

/// Run the full extraction pipeline over a fetched results page.
///
/// Pure and stateless; calling it twice on the same input yields the same
/// output. Never panics on hostile or truncated input.
pub fn extract_videos(html: &str) -> Vec<VideoRecord> {
    let json_text = match locate_initial_data(html) {
        Some(text) => text,
        None => {
            tracing::warn!("ytInitialData blob not found in page markup");
            return Vec::new();
        }
    };

    match serde_json::from_str(json_text) {
        Ok(data) => map_videos(&data),
        Err(e) => {
            tracing::warn!("ytInitialData blob is not valid JSON: {}", e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_with_videos(ids: &[&str]) -> String {
        let items: Vec<String> = ids
            .iter()
            .map(|id| {
                format!(
                    r#"{{"videoRenderer":{{"videoId":"{}","title":{{"runs":[{{"text":"Video {}"}}]}}}}}}"#,
                    id, id
                )
            })
            .collect();
        format!(
            r#"<html><body><script nonce="x">var ytInitialData = {{"contents":{{"twoColumnSearchResultsRenderer":{{"primaryContents":{{"sectionListRenderer":{{"contents":[{{"itemSectionRenderer":{{"contents":[{}]}}}}]}}}}}}}}}};</script></body></html>"#,
            items.join(",")
        )
    }

    #[test]
    fn test_pipeline_extracts_all_videos_in_order() {
        let html = page_with_videos(&["aaa", "bbb", "ccc"]);
        let records = extract_videos(&html);

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].video_id, "aaa");
        assert_eq!(records[1].video_id, "bbb");
        assert_eq!(records[2].video_id, "ccc");
    }

    #[test]
    fn test_pipeline_is_idempotent() {
        let html = page_with_videos(&["abc123"]);
        assert_eq!(extract_videos(&html), extract_videos(&html));
    }

    #[test]
    fn test_no_blob_yields_empty() {
        let html = "<html><body><p>consent wall</p></body></html>";
        assert!(extract_videos(html).is_empty());
    }

    #[test]
    fn test_invalid_json_yields_empty() {
        let html = r#"<script>ytInitialData = {"contents": oops};</script>"#;
        assert!(extract_videos(html).is_empty());
    }

    #[test]
    fn test_spec_scenario_minimal_video() {
        let html = r#"<script>ytInitialData = {"contents":{"twoColumnSearchResultsRenderer":{"primaryContents":{"sectionListRenderer":{"contents":[{"itemSectionRenderer":{"contents":[{"videoRenderer":{"videoId":"abc123","title":{"runs":[{"text":"Test Video"}]}}}]}}]}}}}};</script>"#;
        let records = extract_videos(html);

        assert_eq!(records.len(), 1);
        let rec = &records[0];
        assert_eq!(rec.video_id, "abc123");
        assert_eq!(rec.title, "Test Video");
        assert_eq!(rec.channel, "");
        assert_eq!(rec.channel_id, "");
        assert_eq!(rec.views, "");
        assert_eq!(rec.published, "");
        assert_eq!(rec.duration, "");
        assert_eq!(rec.thumbnail, "");
        assert!(!rec.is_live);
        assert_eq!(rec.description, "");
    }
}
