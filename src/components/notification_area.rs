use yew::prelude::*;

use crate::hooks::use_notifications;

/// Sink de notificaciones: renderiza lo que el sync layer publica
#[function_component(NotificationArea)]
pub fn notification_area() -> Html {
    let notifications = use_notifications();

    html! {
        <div class="notification-area">
            {
                for notifications.iter().map(|n| html! {
                    <div key={n.id.clone()} class={classes!("notification", n.kind.css_class())}>
                        { &n.message }
                    </div>
                })
            }
        </div>
    }
}
