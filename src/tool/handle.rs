//! Object-URL wrapper around the fetched image bytes.

use js_sys::{Array, Uint8Array};
use wasm_bindgen::JsValue;
use web_sys::{Blob, Url};

use crate::tool::model::Releasable;

/// An object URL backed by the browser's blob store. The URL keeps the
/// binary payload alive until it is revoked, so every handle must be
/// released once it stops being shown.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectUrl(String);

impl ObjectUrl {
    /// Wrap the raw response body in a Blob and register an object URL
    /// for it.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, JsValue> {
        let chunk = Uint8Array::from(bytes);
        let parts = Array::of1(&chunk);
        let blob = Blob::new_with_u8_array_sequence(&parts)?;
        let url = Url::create_object_url_with_blob(&blob)?;
        Ok(Self(url))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Releasable for ObjectUrl {
    fn release(&self) {
        let _ = Url::revoke_object_url(&self.0);
    }
}
