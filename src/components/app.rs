use yew::prelude::*;

use crate::components::connection_indicator::ConnectionIndicator;
use crate::components::dashboard::Dashboard;
use crate::components::notification_area::NotificationArea;
use crate::components::sync_indicator::SyncIndicator;
use crate::services::SyncServices;

#[function_component(App)]
pub fn app() -> Html {
    // Los services se construyen UNA vez al montar y bajan por contexto
    let services = use_state(SyncServices::start);

    html! {
        <ContextProvider<SyncServices> context={(*services).clone()}>
            <header class="app-header">
                <h1>{"Coinflow"}</h1>
                <ConnectionIndicator />
                <SyncIndicator />
            </header>
            <NotificationArea />
            <Dashboard />
        </ContextProvider<SyncServices>>
    }
}
