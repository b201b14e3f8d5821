//! html2canvas binding used to rasterize the mockup list

use async_trait::async_trait;
use mockup_common::collaborators::Rasterizer;
use mockup_common::{CollaboratorError, RasterizeOptions};
use wasm_bindgen_x::closure::Closure;
use wasm_bindgen_x::prelude::*;
use wasm_bindgen_x::JsCast;

/// Renders the element with `target_id` to a canvas
pub struct Html2CanvasRasterizer {
    target_id: &'static str,
}

impl Html2CanvasRasterizer {
    pub fn new(target_id: &'static str) -> Self {
        Self { target_id }
    }
}

#[async_trait(?Send)]
impl Rasterizer for Html2CanvasRasterizer {
    type Image = JsValue;

    async fn rasterize(&self, options: &RasterizeOptions) -> Result<JsValue, CollaboratorError> {
        render_to_canvas(self.target_id, options)
            .await
            .map_err(|e| CollaboratorError::Rejected(format!("html2canvas failed: {e:?}")))
    }

    fn encode(
        &self,
        image: &JsValue,
        mime_type: &str,
        quality: f64,
    ) -> Result<String, CollaboratorError> {
        canvas_to_data_url(image, mime_type, quality)
            .map_err(|e| CollaboratorError::Rejected(format!("toDataURL failed: {e:?}")))
    }
}

async fn render_to_canvas(target_id: &str, options: &RasterizeOptions) -> Result<JsValue, JsValue> {
    let window = web_sys_x::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;
    let target = document
        .get_element_by_id(target_id)
        .ok_or("mockup list not found")?;

    let html2canvas = js_sys_x::Reflect::get(&window, &"html2canvas".into())?;
    let func = html2canvas
        .dyn_ref::<js_sys_x::Function>()
        .ok_or("html2canvas is not loaded")?;

    // Skip the remove affordances so they don't show up in the picture
    let exclude_class = options.exclude_class.clone();
    let ignore_elements = Closure::wrap(Box::new(move |node: JsValue| -> bool {
        node.dyn_ref::<web_sys_x::Element>()
            .is_some_and(|el| el.class_list().contains(&exclude_class))
    }) as Box<dyn FnMut(JsValue) -> bool>);

    let opts = js_sys_x::Object::new();
    js_sys_x::Reflect::set(&opts, &"ignoreElements".into(), ignore_elements.as_ref())?;
    js_sys_x::Reflect::set(
        &opts,
        &"backgroundColor".into(),
        &options.background.as_str().into(),
    )?;
    js_sys_x::Reflect::set(&opts, &"useCORS".into(), &JsValue::from_bool(options.use_cors))?;

    let promise = func
        .call2(&JsValue::NULL, &target, &opts)?
        .dyn_into::<js_sys_x::Promise>()?;
    let canvas = wasm_bindgen_futures_x::JsFuture::from(promise).await?;

    drop(ignore_elements);
    Ok(canvas)
}

fn canvas_to_data_url(canvas: &JsValue, mime_type: &str, quality: f64) -> Result<String, JsValue> {
    let to_data_url = js_sys_x::Reflect::get(canvas, &"toDataURL".into())?;
    let func = to_data_url
        .dyn_ref::<js_sys_x::Function>()
        .ok_or("result is not a canvas")?;
    func.call2(canvas, &mime_type.into(), &JsValue::from_f64(quality))?
        .as_string()
        .ok_or_else(|| JsValue::from_str("toDataURL returned a non-string"))
}
