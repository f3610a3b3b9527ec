//! Image byte fetching for clipboard copies.
//!
//! No timeout: a slow response just delays the copy confirmation.

use gloo_net::http::Request;
use icons_core::{CopyError, FetchedImage, ImageFetcher};

/// MIME type assumed when the server does not send one.
const DEFAULT_IMAGE_TYPE: &str = "image/png";

/// Fetches images from the site with the Fetch API.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpImageFetcher;

impl ImageFetcher for HttpImageFetcher {
    async fn fetch_bytes(&self, url: &str) -> Result<FetchedImage, CopyError> {
        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| CopyError::Fetch(e.to_string()))?;

        if !response.ok() {
            return Err(CopyError::HttpStatus(response.status()));
        }

        let content_type = response
            .headers()
            .get("content-type")
            .map(|value| content_type_essence(&value).to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_IMAGE_TYPE.to_string());

        let bytes = response
            .binary()
            .await
            .map_err(|e| CopyError::Fetch(e.to_string()))?;

        Ok(FetchedImage {
            bytes,
            content_type,
        })
    }
}

/// Strip parameters from a Content-Type header (`image/png; charset=x` → `image/png`).
fn content_type_essence(value: &str) -> &str {
    value.split(';').next().unwrap_or_default().trim()
}
