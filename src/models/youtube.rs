//! Payload returned by the YouTube Data API search endpoint.

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
pub struct SearchItem {
    pub id: SearchItemId,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchItemId {
    #[serde(default)]
    pub video_id: Option<String>,
}

impl SearchResponse {
    /// Id of the first video in the response, if any.
    pub fn first_video_id(self) -> Option<String> {
        self.items
            .into_iter()
            .find_map(|item| item.id.video_id.filter(|id| !id.is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn picks_first_video_id() {
        let response: SearchResponse = serde_json::from_value(json!({
            "items": [
                { "id": { "kind": "youtube#channel" } },
                { "id": { "kind": "youtube#video", "videoId": "xyz" } }
            ]
        }))
        .unwrap();

        assert_eq!(response.first_video_id().as_deref(), Some("xyz"));
    }

    #[test]
    fn no_items_means_no_video() {
        let response: SearchResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(response.first_video_id(), None);
    }
}
