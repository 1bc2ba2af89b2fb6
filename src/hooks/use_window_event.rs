use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, Event};
use yew::prelude::*;

use crate::utils::events::parse_detail;

/// Suscribe el componente a un CustomEvent de window con detail JSON.
/// Devuelve el último payload recibido (None hasta el primer evento).
/// El listener se quita al desmontar.
#[hook]
pub fn use_window_event_json<T>(event_name: &'static str) -> Option<T>
where
    T: DeserializeOwned + Clone + PartialEq + 'static,
{
    let value = use_state(|| None::<T>);

    {
        let value = value.clone();
        use_effect_with((), move |_| {
            let closure = Closure::wrap(Box::new(move |event: Event| {
                if let Some(payload) = parse_detail::<T>(&event) {
                    value.set(Some(payload));
                }
            }) as Box<dyn FnMut(Event)>);

            if let Some(win) = window() {
                let _ = win.add_event_listener_with_callback(
                    event_name,
                    closure.as_ref().unchecked_ref(),
                );
            }

            move || {
                if let Some(win) = window() {
                    let _ = win.remove_event_listener_with_callback(
                        event_name,
                        closure.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    (*value).clone()
}
