//! Bindings to the PDF.js bridge (`assets/js/pdf_bridge.js`).
//!
//! The bridge keeps loaded documents keyed by the selection generation from
//! the [`LoadTicket`], so a late load for an old selection never replaces the
//! document being rendered.

use std::fmt;

use js_sys::Uint8Array;
use pdfdeck_core::LoadTicket;
use serde::Deserialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, HtmlCanvasElement};

#[wasm_bindgen(module = "/assets/js/pdf_bridge.js")]
extern "C" {
    #[wasm_bindgen(js_name = configureWorker)]
    fn configure_worker_js(src: &str);

    /// Resolves to `{ numPages }`.
    #[wasm_bindgen(js_name = loadDocument, catch)]
    async fn load_document_js(id: f64, data: Uint8Array) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = renderPage, catch)]
    async fn render_page_js(
        id: f64,
        canvas: HtmlCanvasElement,
        page: u32,
        width: f64,
    ) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = releaseDocument)]
    fn release_document_js(id: f64);
}

/// Renderer bridge failures.
#[derive(Debug, Clone)]
pub enum RenderError {
    /// Reading the file's bytes failed
    ReadFailed(String),
    /// PDF.js could not open the document
    LoadFailed(String),
    /// Bridge returned something other than `{ numPages }`
    InvalidResponse(String),
    /// Drawing a page failed
    RenderFailed(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReadFailed(msg) => write!(f, "Failed to read file: {}", msg),
            Self::LoadFailed(msg) => write!(f, "Failed to load document: {}", msg),
            Self::InvalidResponse(msg) => write!(f, "Unexpected renderer response: {}", msg),
            Self::RenderFailed(msg) => write!(f, "Failed to render page: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DocumentInfo {
    num_pages: u32,
}

fn document_id(ticket: &LoadTicket) -> f64 {
    ticket.generation() as f64
}

fn js_error_message(err: JsValue) -> String {
    err.as_string()
        .or_else(|| err.dyn_ref::<js_sys::Error>().map(|e| String::from(e.message())))
        .unwrap_or_else(|| "Unknown error".to_string())
}

/// Point PDF.js at its worker script. Call once at startup.
pub fn configure_worker(src: &str) {
    configure_worker_js(src);
}

/// Load `file` for `ticket` and return its page count.
pub async fn load_document(ticket: &LoadTicket, file: &File) -> Result<u32, RenderError> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| RenderError::ReadFailed(js_error_message(e)))?;
    let data = Uint8Array::new(&buffer);

    let info = load_document_js(document_id(ticket), data)
        .await
        .map_err(|e| RenderError::LoadFailed(js_error_message(e)))?;
    let info: DocumentInfo = serde_wasm_bindgen::from_value(info)
        .map_err(|e| RenderError::InvalidResponse(e.to_string()))?;

    Ok(info.num_pages)
}

/// Draw `page` of the document loaded for `ticket` into `canvas`.
pub async fn render_page(
    ticket: &LoadTicket,
    canvas: HtmlCanvasElement,
    page: u32,
    width: f64,
) -> Result<(), RenderError> {
    render_page_js(document_id(ticket), canvas, page, width)
        .await
        .map(|_| ())
        .map_err(|e| RenderError::RenderFailed(js_error_message(e)))
}

/// Free the document loaded for `ticket`, if any.
pub fn release(ticket: &LoadTicket) {
    release_document_js(document_id(ticket));
}
