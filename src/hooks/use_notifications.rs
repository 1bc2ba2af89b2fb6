use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, Event};
use yew::prelude::*;

use crate::models::Notification;
use crate::utils::events::{parse_detail, NOTIFICATION_EVENT};

/// Tiempo que un toast queda visible
const TOAST_DURATION_MS: u32 = 5_000;

pub enum NotificationsAction {
    Push(Notification),
    Dismiss(String),
}

#[derive(Default, PartialEq)]
pub struct NotificationList {
    pub items: Vec<Notification>,
}

impl Reducible for NotificationList {
    type Action = NotificationsAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut items = self.items.clone();

        match action {
            NotificationsAction::Push(notification) => items.push(notification),
            NotificationsAction::Dismiss(id) => items.retain(|n| n.id != id),
        }

        Rc::new(Self { items })
    }
}

/// Notificaciones activas del toast. Cada una se descarta sola tras unos
/// segundos; el sync layer solo publica el evento, nunca toca esta lista.
#[hook]
pub fn use_notifications() -> Vec<Notification> {
    let list = use_reducer(NotificationList::default);

    {
        let list = list.clone();
        use_effect_with((), move |_| {
            let closure = Closure::wrap(Box::new(move |event: Event| {
                let Some(notification) = parse_detail::<Notification>(&event) else {
                    return;
                };

                let id = notification.id.clone();
                list.dispatch(NotificationsAction::Push(notification));

                let list = list.clone();
                Timeout::new(TOAST_DURATION_MS, move || {
                    list.dispatch(NotificationsAction::Dismiss(id));
                })
                .forget();
            }) as Box<dyn FnMut(Event)>);

            if let Some(win) = window() {
                let _ = win.add_event_listener_with_callback(
                    NOTIFICATION_EVENT,
                    closure.as_ref().unchecked_ref(),
                );
            }

            move || {
                if let Some(win) = window() {
                    let _ = win.remove_event_listener_with_callback(
                        NOTIFICATION_EVENT,
                        closure.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    list.items.clone()
}
