#![cfg(target_arch = "wasm32")]
use cursor_core::{CursorConfig, Mounted};
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

mod constants;
mod dom;
mod events;
mod frame;
mod style;

thread_local! {
    // One cursor per page; mounting again replaces it.
    static ACTIVE: RefCell<Option<Mounted<dom::DomHost>>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("cursor-web starting");

    if let Err(e) = install(CursorConfig::default()) {
        log::warn!("cursor not mounted: {:#}", e);
    }
    Ok(())
}

/// Mount (or re-mount) the cursor. `config` is an optional partial config object.
#[wasm_bindgen]
pub fn mount_cursor(config: JsValue) -> Result<(), JsValue> {
    let config = config_from_js(&config).map_err(to_js_error)?;
    install(config).map_err(to_js_error)
}

#[wasm_bindgen]
pub fn unmount_cursor() {
    let previous = ACTIVE.with(|a| a.borrow_mut().take());
    drop(previous);
}

#[wasm_bindgen]
pub fn cursor_captured() -> bool {
    ACTIVE.with(|a| {
        a.borrow()
            .as_ref()
            .map(|m| m.cursor().is_captured())
            .unwrap_or(false)
    })
}

fn install(config: CursorConfig) -> anyhow::Result<()> {
    unmount_cursor();
    let mounted = dom::mount_document(config)?;
    ACTIVE.with(|a| *a.borrow_mut() = Some(mounted));
    Ok(())
}

fn config_from_js(value: &JsValue) -> anyhow::Result<CursorConfig> {
    if value.is_undefined() || value.is_null() {
        return Ok(CursorConfig::default());
    }
    let json: String = js_sys::JSON::stringify(value)
        .map_err(|e| anyhow::anyhow!("config is not serializable: {:?}", e))?
        .into();
    Ok(serde_json::from_str(&json)?)
}

fn to_js_error(e: anyhow::Error) -> JsValue {
    js_sys::Error::new(&format!("{:#}", e)).into()
}
