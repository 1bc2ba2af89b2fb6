use wasm_bindgen::JsValue;
use web_sys::window;

/// Lee `navigator.onLine` vía Reflect. `None` si no hay window/navigator
/// (por ejemplo en tests fuera del browser).
pub fn navigator_online() -> Option<bool> {
    let win = window()?;
    let navigator = js_sys::Reflect::get(&win, &JsValue::from_str("navigator")).ok()?;
    js_sys::Reflect::get(&navigator, &JsValue::from_str("onLine"))
        .ok()?
        .as_bool()
}
