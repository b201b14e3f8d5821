//! SortableJS binding for the mockup list
//!
//! Sortable moves DOM nodes itself, which would leave the rendered list out of
//! step with the virtual DOM. On drop we read the new order, put the dragged
//! node back where it was and hand the order to the caller, who re-renders the
//! list from state.
//!
//! The library is loaded via the script resources in Dioxus.toml.

use mockup_common::{PairId, SortableConfig};
use mockup_ui::PAIR_ID_ATTRIBUTE;
use tracing::{debug, warn};
use wasm_bindgen_x::closure::Closure;
use wasm_bindgen_x::prelude::*;
use wasm_bindgen_x::JsCast;

/// A live Sortable instance. Destroyed on drop.
pub struct SortableHandle {
    instance: JsValue,
    _on_end: Closure<dyn FnMut(JsValue)>,
}

impl SortableHandle {
    /// Attach drag reordering to `container`. `on_reorder` receives the ids in
    /// their new visual order after each completed drag.
    pub fn attach(
        container: &web_sys_x::Element,
        config: &SortableConfig,
        mut on_reorder: impl FnMut(Vec<PairId>) + 'static,
    ) -> Result<Self, JsValue> {
        let window = web_sys_x::window().ok_or("no window")?;
        let sortable = js_sys_x::Reflect::get(&window, &"Sortable".into())?;
        let ctor = sortable
            .dyn_ref::<js_sys_x::Function>()
            .ok_or("Sortable is not loaded")?;

        let list = container.clone();
        let on_end = Closure::wrap(Box::new(move |evt: JsValue| {
            let order = read_visual_order(&list);
            if let Err(e) = restore_dragged_node(&evt) {
                warn!("Failed to restore dragged node: {e:?}");
            }
            debug!("Drag finished, new order: {order:?}");
            on_reorder(order);
        }) as Box<dyn FnMut(JsValue)>);

        let opts = js_sys_x::Object::new();
        js_sys_x::Reflect::set(
            &opts,
            &"animation".into(),
            &JsValue::from_f64(f64::from(config.animation_ms)),
        )?;
        js_sys_x::Reflect::set(&opts, &"ghostClass".into(), &config.ghost_class.as_str().into())?;
        js_sys_x::Reflect::set(
            &opts,
            &"chosenClass".into(),
            &config.chosen_class.as_str().into(),
        )?;
        js_sys_x::Reflect::set(&opts, &"dragClass".into(), &config.drag_class.as_str().into())?;
        js_sys_x::Reflect::set(&opts, &"onEnd".into(), on_end.as_ref())?;

        let args = js_sys_x::Array::new();
        args.push(container);
        args.push(&opts);
        let instance = js_sys_x::Reflect::construct(ctor, &args)?;

        Ok(Self {
            instance,
            _on_end: on_end,
        })
    }
}

impl Drop for SortableHandle {
    fn drop(&mut self) {
        if let Ok(destroy) = js_sys_x::Reflect::get(&self.instance, &"destroy".into()) {
            if let Some(func) = destroy.dyn_ref::<js_sys_x::Function>() {
                let _ = func.call0(&self.instance);
            }
        }
    }
}

/// Pair ids of the container's children, in DOM order
fn read_visual_order(container: &web_sys_x::Element) -> Vec<PairId> {
    let children = container.children();
    (0..children.length())
        .filter_map(|i| children.item(i))
        .filter_map(|child| child.get_attribute(PAIR_ID_ATTRIBUTE))
        .filter_map(|raw| raw.parse().ok())
        .collect()
}

/// Undo Sortable's DOM move so only the renderer reorders nodes.
fn restore_dragged_node(evt: &JsValue) -> Result<(), JsValue> {
    let item = js_sys_x::Reflect::get(evt, &"item".into())?.dyn_into::<web_sys_x::Element>()?;
    let from = js_sys_x::Reflect::get(evt, &"from".into())?.dyn_into::<web_sys_x::Element>()?;
    let old_index = js_sys_x::Reflect::get(evt, &"oldIndex".into())?
        .as_f64()
        .ok_or("missing oldIndex")? as u32;
    let new_index = js_sys_x::Reflect::get(evt, &"newIndex".into())?
        .as_f64()
        .ok_or("missing newIndex")? as u32;
    if old_index == new_index {
        return Ok(());
    }

    let sibling_index = original_sibling_index(old_index, new_index);
    let sibling = from.children().item(sibling_index);
    from.insert_before(&item, sibling.as_deref())?;
    Ok(())
}

/// Index, in the post-drag child list, of the node that followed the dragged
/// item before the drag.
///
/// With the item taken out both orders agree, so that node sits at
/// `old_index`, shifted by one when the item landed in front of it.
fn original_sibling_index(old_index: u32, new_index: u32) -> u32 {
    if old_index < new_index {
        old_index
    } else {
        old_index + 1
    }
}
