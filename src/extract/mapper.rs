//! Mapping the parsed `ytInitialData` tree to flat video records
//!
//! The renderer tree is deeply nested and optional at every step, and the
//! same logical field shows up under different shapes depending on the page
//! variant (`runs` vs `simpleText`, owner vs byline). Each output field is
//! therefore driven by an ordered list of JSON-pointer fallback paths; the
//! first path yielding a defined value wins, and a miss on every path takes
//! the field's default.

use crate::results::VideoRecord;
use serde_json::Value;

/// Path from the tree root to the section list of search results.
const SECTIONS: &str =
    "/contents/twoColumnSearchResultsRenderer/primaryContents/sectionListRenderer/contents";

const TITLE: &[&str] = &["/title/runs/0/text", "/title/simpleText"];
const CHANNEL: &[&str] = &["/ownerText/runs/0/text", "/longBylineText/runs/0/text"];
const CHANNEL_ID: &[&str] = &[
    "/ownerText/runs/0/navigationEndpoint/browseEndpoint/browseId",
    "/channelId",
];
const VIEWS: &[&str] = &["/viewCountText/simpleText", "/viewCountText/runs/0/text"];
const PUBLISHED: &[&str] = &["/publishedTimeText/simpleText"];
const DURATION: &[&str] = &["/lengthText/simpleText", "/lengthText/runs/0/text"];
const DESCRIPTION_RUNS: &[&str] = &[
    "/detailedMetadataSnippets/0/snippetText/runs",
    "/descriptionSnippet/runs",
];

/// Overlay slot whose style tag marks a live broadcast.
const LIVE_STYLE: &str = "/thumbnailOverlays/0/thumbnailOverlayTimeStatusRenderer/style";

/// Walk the results container and emit one record per video renderer.
///
/// Elements that are not tagged `videoRenderer` (ads, shelves, continuation
/// tokens) are skipped. A tree missing the container path at any depth
/// yields an empty vec; nothing here panics or errors.
pub fn map_videos(data: &Value) -> Vec<VideoRecord> {
    let mut records = Vec::new();

    let sections = match data.pointer(SECTIONS).and_then(Value::as_array) {
        Some(s) => s,
        None => return records,
    };

    for section in sections {
        let contents = match section
            .pointer("/itemSectionRenderer/contents")
            .and_then(Value::as_array)
        {
            Some(c) => c,
            None => continue,
        };

        for item in contents {
            if let Some(video) = item.get("videoRenderer") {
                records.push(map_record(video));
            }
        }
    }

    records
}

fn map_record(video: &Value) -> VideoRecord {
    VideoRecord {
        video_id: first_str(video, &["/videoId"]).unwrap_or_default().to_string(),
        title: first_str(video, TITLE).unwrap_or_default().to_string(),
        channel: first_str(video, CHANNEL).unwrap_or_default().to_string(),
        channel_id: first_str(video, CHANNEL_ID).unwrap_or_default().to_string(),
        views: first_str(video, VIEWS).unwrap_or_default().to_string(),
        published: first_str(video, PUBLISHED).unwrap_or_default().to_string(),
        duration: first_str(video, DURATION).unwrap_or_default().to_string(),
        thumbnail: thumbnail_url(video).unwrap_or_default().to_string(),
        is_live: is_live(video),
        description: joined_runs(video, DESCRIPTION_RUNS).unwrap_or_default(),
    }
}

/// First path that resolves to a string wins.
fn first_str<'a>(node: &'a Value, paths: &[&str]) -> Option<&'a str> {
    paths
        .iter()
        .find_map(|p| node.pointer(p).and_then(Value::as_str))
}

/// First path that resolves to a runs array wins; its text segments are
/// joined in order with no separator.
fn joined_runs(node: &Value, paths: &[&str]) -> Option<String> {
    paths.iter().find_map(|p| {
        let runs = node.pointer(p).and_then(Value::as_array)?;
        Some(
            runs.iter()
                .filter_map(|r| r.get("text").and_then(Value::as_str))
                .collect::<String>(),
        )
    })
}

/// The last thumbnail is conventionally the highest resolution.
fn thumbnail_url(video: &Value) -> Option<&str> {
    video
        .pointer("/thumbnail/thumbnails")
        .and_then(Value::as_array)?
        .last()?
        .get("url")
        .and_then(Value::as_str)
}

fn is_live(video: &Value) -> bool {
    video.pointer(LIVE_STYLE).and_then(Value::as_str) == Some("LIVE")
}
