//! Pixabay request parameters and response models.

use serde::{Deserialize, Serialize};

/// Query parameters for an image search.
///
/// Unset fields are omitted from the query string; the `key` credential is
/// attached by the client itself.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchParams {
    /// Search term.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    /// Filter by image type ("all", "photo", "illustration", "vector").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_type: Option<String>,
    /// Results per page, 3..=200.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    /// 1-based page number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

/// Response payload of a search request.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    /// Total number of hits for the query.
    pub total: u64,
    /// Number of hits accessible through the API.
    #[serde(rename = "totalHits")]
    pub total_hits: u64,
    /// The current page of results.
    pub hits: Vec<ImageHit>,
}

/// A single image result.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageHit {
    /// Pixabay image id.
    pub id: u64,
    /// Pixabay page for the image.
    #[serde(rename = "pageURL")]
    pub page_url: String,
    /// Comma-separated tags.
    pub tags: String,
    /// Low-resolution preview URL.
    #[serde(rename = "previewURL")]
    pub preview_url: String,
    /// Medium-resolution URL, what the views render.
    #[serde(rename = "webformatURL")]
    pub webformat_url: String,
    /// Full-resolution URL.
    #[serde(rename = "largeImageURL")]
    pub large_image_url: String,
    /// Uploader's display name.
    pub user: String,
    /// Like count.
    pub likes: u64,
    /// Download count.
    pub downloads: u64,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn params_serialize_only_set_fields() {
        let params = SearchParams {
            q: Some("kittens".to_string()),
            per_page: Some(20),
            ..SearchParams::default()
        };

        let encoded = serde_json::to_value(&params).unwrap();
        assert_eq!(encoded, json!({"q": "kittens", "per_page": 20}));
    }

    #[test]
    fn response_decodes_camel_case_fields() {
        let payload = json!({
            "total": 4692,
            "totalHits": 500,
            "hits": [{
                "id": 195893,
                "pageURL": "https://pixabay.com/photos/blossom-bloom-flower-195893/",
                "tags": "blossom, bloom, flower",
                "previewURL": "https://cdn.pixabay.com/photo/preview.jpg",
                "webformatURL": "https://pixabay.com/get/webformat.jpg",
                "largeImageURL": "https://pixabay.com/get/large.jpg",
                "user": "Josch13",
                "likes": 500,
                "downloads": 67342
            }]
        });

        let decoded: SearchResponse = serde_json::from_value(payload).unwrap();
        assert_eq!(decoded.total_hits, 500);
        assert_eq!(decoded.hits[0].webformat_url, "https://pixabay.com/get/webformat.jpg");
        assert_eq!(decoded.hits[0].user, "Josch13");
    }
}
