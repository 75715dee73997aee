use serde::{Deserialize, Serialize};

use crate::error::AppResult;

/// Empty envelope written when a preview cannot be serialized.
pub const EMPTY_ENVELOPE: &str =
    r#"{"success":1,"meta":{"title":"","description":"","image":{"url":""}}}"#;

// ============================================================================
// Extracted Open Graph data
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OgImage {
    pub url: String,
}

/// Metadata read from a page's Open Graph tags. Missing tags are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpenGraphData {
    pub title: String,
    pub description: String,
    pub images: Vec<OgImage>,
}

// ============================================================================
// Wire shape returned by GET /fetchUrl
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkPreviewImage {
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkPreviewMeta {
    pub title: String,
    pub description: String,
    pub image: LinkPreviewImage,
}

/// `success` is always 1, even when the page had no metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkPreviewResponse {
    pub success: u8,
    pub meta: LinkPreviewMeta,
}

/// Reserved error shape. Not emitted by any route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorMessage {
    pub code: i32,
    pub message: String,
}

impl From<&OpenGraphData> for LinkPreviewResponse {
    fn from(data: &OpenGraphData) -> Self {
        LinkPreviewResponse {
            success: 1,
            meta: LinkPreviewMeta {
                title: data.title.clone(),
                description: data.description.clone(),
                image: LinkPreviewImage {
                    url: data
                        .images
                        .first()
                        .map(|img| img.url.clone())
                        .unwrap_or_default(),
                },
            },
        }
    }
}

pub fn format(data: &OpenGraphData) -> LinkPreviewResponse {
    LinkPreviewResponse::from(data)
}

pub fn to_json(preview: &LinkPreviewResponse) -> AppResult<String> {
    Ok(serde_json::to_string(preview)?)
}
