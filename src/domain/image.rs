//! Image result types and page arithmetic.
//!
//! This module defines the wire-level types returned by the image search API:
//! individual [`Image`] records and the [`ResultPage`] envelope carrying one
//! page of hits plus the total match count. The session core treats images as
//! opaque records, passing them through to the UI unchanged; the only
//! interpretation it performs is counting them and deriving the page total.

use serde::{Deserialize, Serialize};

/// Number of results in every fetched page.
///
/// Fixed by the controller and baked into the API request; callers cannot
/// change it. Page totals are always derived against this constant.
pub const PAGE_SIZE: u32 = 12;

/// A single image record as returned by the search API.
///
/// Fields are passed through unchanged from the API response. The session core
/// never inspects them beyond counting records; they exist for the UI layer to
/// render. Wire names use the API's mixed-case spelling (`pageURL`,
/// `webformatURL`), mapped here via serde renames.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    /// Unique identifier assigned by the API.
    pub id: u64,

    /// URL of the image's page on the provider's site.
    #[serde(rename = "pageURL", default)]
    pub page_url: String,

    /// Comma-separated descriptive tags.
    #[serde(default)]
    pub tags: String,

    /// URL of the low-resolution preview rendition.
    #[serde(rename = "previewURL", default)]
    pub preview_url: String,

    /// URL of the medium-resolution web rendition.
    #[serde(rename = "webformatURL", default)]
    pub webformat_url: String,

    /// URL of the full-resolution rendition.
    #[serde(rename = "largeImageURL", default)]
    pub large_image_url: String,

    /// Name of the uploading user.
    #[serde(default)]
    pub user: String,

    /// Number of likes the image has received.
    #[serde(default)]
    pub likes: u32,
}

/// One page of search results plus the total match count.
///
/// This is the envelope the fetch layer hands back to the session core. The
/// API reports `total_hits` as the number of results reachable through
/// pagination, from which the total page count is derived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultPage {
    /// Total number of matches reachable through pagination.
    #[serde(rename = "totalHits")]
    pub total_hits: u32,

    /// The images on this page, in API return order.
    pub hits: Vec<Image>,
}

impl ResultPage {
    /// Returns the total number of pages available for this result set.
    ///
    /// Computed as `total_hits / 12` rounded up. A result set with zero
    /// matches still counts as one page, so exhaustion checks
    /// (`page == last_page`) hold without a zero-result special case.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixquest::domain::ResultPage;
    ///
    /// let page = ResultPage { total_hits: 25, hits: vec![] };
    /// assert_eq!(page.last_page(), 3);
    ///
    /// let empty = ResultPage { total_hits: 0, hits: vec![] };
    /// assert_eq!(empty.last_page(), 1);
    /// ```
    #[must_use]
    pub fn last_page(&self) -> u32 {
        self.total_hits.div_ceil(PAGE_SIZE).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_with_hits(total_hits: u32) -> ResultPage {
        ResultPage {
            total_hits,
            hits: vec![],
        }
    }

    #[test]
    fn last_page_rounds_up() {
        assert_eq!(page_with_hits(25).last_page(), 3);
        assert_eq!(page_with_hits(24).last_page(), 2);
        assert_eq!(page_with_hits(13).last_page(), 2);
    }

    #[test]
    fn last_page_of_single_partial_page() {
        assert_eq!(page_with_hits(1).last_page(), 1);
        assert_eq!(page_with_hits(12).last_page(), 1);
    }

    #[test]
    fn last_page_of_empty_result_set_is_one() {
        assert_eq!(page_with_hits(0).last_page(), 1);
    }

    #[test]
    fn image_deserializes_from_api_wire_names() {
        let raw = r#"{
            "id": 195893,
            "pageURL": "https://pixabay.com/en/blossom-bloom-flower-195893/",
            "tags": "blossom, bloom, flower",
            "previewURL": "https://cdn.pixabay.com/photo/preview.jpg",
            "webformatURL": "https://pixabay.com/get/webformat.jpg",
            "largeImageURL": "https://pixabay.com/get/large.jpg",
            "user": "Josch13",
            "likes": 310,
            "views": 7671
        }"#;

        let image: Image = serde_json::from_str(raw).expect("valid image JSON");
        assert_eq!(image.id, 195_893);
        assert_eq!(image.tags, "blossom, bloom, flower");
        assert_eq!(image.webformat_url, "https://pixabay.com/get/webformat.jpg");
        assert_eq!(image.likes, 310);
    }

    #[test]
    fn result_page_tolerates_missing_optional_fields() {
        let raw = r#"{
            "totalHits": 2,
            "hits": [
                { "id": 1 },
                { "id": 2, "tags": "cat" }
            ]
        }"#;

        let page: ResultPage = serde_json::from_str(raw).expect("valid page JSON");
        assert_eq!(page.total_hits, 2);
        assert_eq!(page.hits.len(), 2);
        assert_eq!(page.hits[0].user, "");
        assert_eq!(page.hits[1].tags, "cat");
    }
}
