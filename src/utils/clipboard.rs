//! Clipboard image writes.
//!
//! `ClipboardItem` and `navigator.clipboard.write` are reached through the
//! Reflect API so no unstable web-sys bindings are needed.

use js_sys::{Array, Function, Object, Promise, Reflect, Uint8Array};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag};

use icons_core::{ClipboardSink, CopyError, FetchedImage};

use super::dom;

/// Writes images to the system clipboard.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserClipboard;

impl ClipboardSink for BrowserClipboard {
    async fn write_image(&self, image: &FetchedImage) -> Result<(), CopyError> {
        let window = dom::window().ok_or_else(|| unsupported("window"))?;

        let clipboard = Reflect::get(&window.navigator(), &"clipboard".into())
            .ok()
            .filter(|value| !value.is_undefined())
            .ok_or_else(|| unsupported("navigator.clipboard"))?;

        let blob = to_blob(image)?;
        let item = clipboard_item(&image.content_type, &blob)?;

        let write = Reflect::get(&clipboard, &"write".into())
            .ok()
            .and_then(|f| f.dyn_into::<Function>().ok())
            .ok_or_else(|| unsupported("navigator.clipboard.write"))?;

        let promise: Promise = write
            .call1(&clipboard, &Array::of1(&item))
            .map_err(|e| CopyError::Clipboard(describe(&e)))?
            .unchecked_into();

        JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|e| CopyError::Clipboard(describe(&e)))
    }
}

fn to_blob(image: &FetchedImage) -> Result<Blob, CopyError> {
    let parts = Array::of1(&Uint8Array::from(image.bytes.as_slice()));
    let options = BlobPropertyBag::new();
    options.set_type(&image.content_type);
    Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|e| CopyError::Clipboard(describe(&e)))
}

/// `new ClipboardItem({ [contentType]: blob })`
fn clipboard_item(content_type: &str, blob: &Blob) -> Result<JsValue, CopyError> {
    let constructor = Reflect::get(&js_sys::global(), &"ClipboardItem".into())
        .ok()
        .and_then(|c| c.dyn_into::<Function>().ok())
        .ok_or_else(|| unsupported("ClipboardItem"))?;

    let record = Object::new();
    Reflect::set(&record, &content_type.into(), blob)
        .map_err(|e| CopyError::Clipboard(describe(&e)))?;

    Reflect::construct(&constructor, &Array::of1(&record))
        .map_err(|e| CopyError::Clipboard(describe(&e)))
}

fn unsupported(api: &str) -> CopyError {
    CopyError::Unsupported(format!("{} not available", api))
}

/// Best-effort message from a JS exception.
fn describe(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}
