pub mod link_preview;

pub use link_preview::{
    ErrorMessage, LinkPreviewImage, LinkPreviewMeta, LinkPreviewResponse, OgImage, OpenGraphData,
};
