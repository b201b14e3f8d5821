//! Browser-backed download, clipboard and notice collaborators

use async_trait::async_trait;
use mockup_common::collaborators::{ClipboardWriter, Downloader, Notifier};
use mockup_common::{CollaboratorError, Notice};
use tracing::warn;
use wasm_bindgen_x::prelude::*;
use wasm_bindgen_x::JsCast;

/// Saves a data URL through a hidden `<a download>` element
pub struct AnchorDownloader;

impl Downloader for AnchorDownloader {
    fn download(&self, payload: &str, filename: &str) -> Result<(), CollaboratorError> {
        trigger_download(payload, filename)
            .map_err(|e| CollaboratorError::Rejected(format!("download failed: {e:?}")))
    }
}

fn trigger_download(href: &str, filename: &str) -> Result<(), JsValue> {
    let window = web_sys_x::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;
    let body = document.body().ok_or("no body")?;

    let elem = document.create_element("a")?;
    elem.set_attribute("href", href)?;
    elem.set_attribute("download", filename)?;
    elem.set_attribute("style", "display:none")?;
    body.append_child(&elem)?;
    if let Some(html_elem) = elem.dyn_ref::<web_sys_x::HtmlElement>() {
        html_elem.click();
    }
    body.remove_child(&elem)?;
    Ok(())
}

/// `navigator.clipboard.writeText`
pub struct NavigatorClipboard;

#[async_trait(?Send)]
impl ClipboardWriter for NavigatorClipboard {
    async fn write_text(&self, text: &str) -> Result<(), CollaboratorError> {
        let window = web_sys_x::window()
            .ok_or_else(|| CollaboratorError::Unavailable("no window".to_string()))?;
        let clipboard = js_sys_x::Reflect::get(&window, &"navigator".into())
            .and_then(|navigator| js_sys_x::Reflect::get(&navigator, &"clipboard".into()))
            .ok()
            .filter(|clipboard| !clipboard.is_undefined())
            .ok_or_else(|| CollaboratorError::Unavailable("clipboard API".to_string()))?;

        write_clipboard(&clipboard, text)
            .await
            .map_err(|e| CollaboratorError::Rejected(format!("{e:?}")))
    }
}

async fn write_clipboard(clipboard: &JsValue, text: &str) -> Result<(), JsValue> {
    let write_text = js_sys_x::Reflect::get(clipboard, &"writeText".into())?;
    let func = write_text
        .dyn_ref::<js_sys_x::Function>()
        .ok_or("writeText not a function")?;
    let promise = func
        .call1(clipboard, &text.into())?
        .dyn_into::<js_sys_x::Promise>()?;
    wasm_bindgen_futures_x::JsFuture::from(promise).await?;
    Ok(())
}

/// Blocking `window.alert`
pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn notify(&self, notice: &Notice) {
        let Some(window) = web_sys_x::window() else {
            warn!("No window to show notice: {}", notice.message());
            return;
        };
        if let Err(e) = window.alert_with_message(&notice.message()) {
            warn!("Failed to show notice: {e:?}");
        }
    }
}
