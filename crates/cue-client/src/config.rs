//! Loads `TurnConfig` from the page.
//!
//! The page may embed `<script type="application/json" id="cue-config">`;
//! without it the defaults apply.

use cue_core::TurnConfig;
use web_sys::Document;

const CONFIG_ELEMENT_ID: &str = "cue-config";

pub fn load(document: &Document) -> Result<TurnConfig, serde_json::Error> {
    let Some(text) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    else {
        return Ok(TurnConfig::default());
    };
    if text.trim().is_empty() {
        return Ok(TurnConfig::default());
    }
    TurnConfig::from_json(&text)
}
