//! Output schema for extracted search results
//!
//! Consumers get a fixed, flat shape: every key is always present, with
//! empty-string or `false` standing in for anything the source tree did not
//! provide. No field is ever serialized as `null`.

use serde::{Deserialize, Serialize};

/// One extracted video entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoRecord {
    pub video_id: String,
    pub title: String,
    pub channel: String,
    pub channel_id: String,
    pub views: String,
    pub published: String,
    pub duration: String,
    pub thumbnail: String,
    pub is_live: bool,
    pub description: String,
}

impl VideoRecord {
    /// Canonical watch URL for this record, or `None` if the id is missing.
    pub fn watch_url(&self) -> Option<String> {
        if self.video_id.is_empty() {
            None
        } else {
            Some(format!("https://www.youtube.com/watch?v={}", self.video_id))
        }
    }
}

/// The response envelope: echoed query, ordered records, and their count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultSet {
    pub query: String,
    pub results: Vec<VideoRecord>,
    pub count: usize,
}

impl ResultSet {
    /// Build an envelope; `count` is derived so it always matches
    /// `results.len()`.
    pub fn new(query: impl Into<String>, results: Vec<VideoRecord>) -> Self {
        let count = results.len();
        Self {
            query: query.into(),
            results,
            count,
        }
    }

    /// Envelope for the "nothing extracted" outcome, which is a normal
    /// success rather than an error.
    pub fn empty(query: impl Into<String>) -> Self {
        Self::new(query, Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_matches_results_len() {
        let set = ResultSet::new("rust", vec![VideoRecord::default(); 3]);
        assert_eq!(set.count, 3);
        assert_eq!(set.count, set.results.len());

        let empty = ResultSet::empty("rust");
        assert_eq!(empty.count, 0);
    }

    #[test]
    fn test_record_serializes_with_fixed_camel_case_keys() {
        let json = serde_json::to_value(VideoRecord::default()).unwrap();
        let obj = json.as_object().unwrap();

        for key in [
            "videoId",
            "title",
            "channel",
            "channelId",
            "views",
            "published",
            "duration",
            "thumbnail",
            "isLive",
            "description",
        ] {
            assert!(obj.contains_key(key), "missing key {}", key);
            assert!(!obj[key].is_null(), "key {} must not be null", key);
        }

        assert_eq!(json["videoId"], "");
        assert_eq!(json["isLive"], false);
    }

    #[test]
    fn test_watch_url() {
        let mut rec = VideoRecord::default();
        assert_eq!(rec.watch_url(), None);

        rec.video_id = "abc123".to_string();
        assert_eq!(
            rec.watch_url().unwrap(),
            "https://www.youtube.com/watch?v=abc123"
        );
    }
}
