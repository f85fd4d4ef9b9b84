//! # richmark-wasm
//!
//! WebAssembly bindings for richmark, so the browser editor can convert
//! without a server round trip.
//!
//! ## Usage
//!
//! ```javascript
//! import init, { markdown_to_html, html_to_markdown, WasmConvertOptions } from './pkg/richmark_wasm.js';
//!
//! await init();
//!
//! const options = new WasmConvertOptions();
//! options.set_open_links_in_new_tab(true);
//!
//! const html = markdown_to_html("## Notes\n\n- **bold** item", options);
//! const markdown = html_to_markdown(html, options);
//! ```

mod error;

use error::{MAX_INPUT_BYTES, validate_input};
use richmark::ConvertOptions;
use wasm_bindgen::prelude::*;

pub use error::WasmError;

/// Initialize panic hook for better error messages in console
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// JS-side builder for [`ConvertOptions`]
#[wasm_bindgen]
pub struct WasmConvertOptions {
    max_heading_level: u8,
    open_links_in_new_tab: bool,
    allowed_schemes: Vec<String>,
}

#[wasm_bindgen]
impl WasmConvertOptions {
    /// Create new options with defaults
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        let defaults = ConvertOptions::default();
        Self {
            max_heading_level: defaults.max_heading_level,
            open_links_in_new_tab: defaults.open_links_in_new_tab,
            allowed_schemes: defaults.allowed_schemes,
        }
    }

    /// Deepest heading level to recognize (clamped to 1..=6 on use)
    #[wasm_bindgen]
    pub fn set_max_heading_level(&mut self, level: u8) {
        self.max_heading_level = level;
    }

    #[wasm_bindgen(getter)]
    pub fn max_heading_level(&self) -> u8 {
        self.max_heading_level
    }

    #[wasm_bindgen]
    pub fn set_open_links_in_new_tab(&mut self, enabled: bool) {
        self.open_links_in_new_tab = enabled;
    }

    #[wasm_bindgen(getter)]
    pub fn open_links_in_new_tab(&self) -> bool {
        self.open_links_in_new_tab
    }

    /// Replace the link scheme allow-list
    #[wasm_bindgen]
    pub fn set_allowed_schemes(&mut self, schemes: Vec<String>) {
        self.allowed_schemes = schemes;
    }

    #[wasm_bindgen(getter)]
    pub fn allowed_schemes(&self) -> Vec<String> {
        self.allowed_schemes.clone()
    }
}

impl Default for WasmConvertOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&WasmConvertOptions> for ConvertOptions {
    fn from(opts: &WasmConvertOptions) -> Self {
        ConvertOptions::builder()
            .max_heading_level(opts.max_heading_level)
            .open_links_in_new_tab(opts.open_links_in_new_tab)
            .allowed_schemes(opts.allowed_schemes.clone())
            .build()
    }
}

fn resolve_options(options: Option<WasmConvertOptions>) -> ConvertOptions {
    options
        .as_ref()
        .map_or_else(ConvertOptions::default, ConvertOptions::from)
}

/// Render editor Markdown as sanitized HTML
///
/// Throws `{ kind: "validationError", ... }` for inputs over 10MB.
#[wasm_bindgen]
pub fn markdown_to_html(
    markdown: &str,
    options: Option<WasmConvertOptions>,
) -> Result<String, JsValue> {
    validate_input(markdown, MAX_INPUT_BYTES)?;
    Ok(richmark::markdown_to_html_with_options(
        markdown,
        &resolve_options(options),
    ))
}

/// Convert editor HTML back to Markdown
///
/// Throws `{ kind: "validationError", ... }` for inputs over 10MB.
#[wasm_bindgen]
pub fn html_to_markdown(html: &str, options: Option<WasmConvertOptions>) -> Result<String, JsValue> {
    validate_input(html, MAX_INPUT_BYTES)?;
    Ok(richmark::html_to_markdown_with_options(
        html,
        &resolve_options(options),
    ))
}

/// `<pre><code>` block with the code escaped
#[wasm_bindgen]
pub fn create_code_block_html(code: &str) -> String {
    richmark::create_code_block_html(code)
}

/// The href if its scheme is allowed by default, otherwise ""
#[wasm_bindgen]
pub fn sanitize_href(href: &str) -> String {
    richmark::sanitize_href(href)
}

/// `{ label, variant }` for a block tag
#[wasm_bindgen]
pub fn block_display(tag: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&richmark::block_display(tag)).map_err(|e| {
        JsValue::from(WasmError::serialization_with_details(
            "Failed to serialize block display",
            e.to_string(),
        ))
    })
}
