use yew::prelude::*;

use crate::hooks::use_window_event_json;
use crate::models::{Coin, Transaction, TransactionKind};
use crate::services::session;
use crate::utils::events::{BalancePayload, BALANCE_EVENT, PRICES_EVENT, TRANSACTIONS_EVENT};
use crate::utils::format::format_usd;
use crate::utils::storage::{load_from_storage, KEY_COIN_PRICES};

/// Panel que consume los snapshots que el sincronizador republica. Los
/// valores iniciales salen del cache local (lo que el UI lee al cargar).
#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let balance_event = use_window_event_json::<BalancePayload>(BALANCE_EVENT);
    let prices_event = use_window_event_json::<Vec<Coin>>(PRICES_EVENT);
    let transactions_event = use_window_event_json::<Vec<Transaction>>(TRANSACTIONS_EVENT);

    let balance = balance_event
        .map(|p| p.balance)
        .or_else(|| session::load_user().map(|u| u.balance));

    let prices = prices_event
        .or_else(|| load_from_storage::<Vec<Coin>>(KEY_COIN_PRICES))
        .unwrap_or_default();

    let transactions = transactions_event.unwrap_or_default();

    html! {
        <main class="dashboard">
            <section class="card">
                <h2>{"Balance"}</h2>
                <div class="balance-amount">
                    {
                        match balance {
                            Some(amount) => format_usd(amount),
                            None => "—".to_string(),
                        }
                    }
                </div>
            </section>

            <section class="card">
                <h2>{"Precios"}</h2>
                {
                    if prices.is_empty() {
                        html! { <p>{"Sin datos de precios todavía"}</p> }
                    } else {
                        html! {
                            for prices.iter().map(|coin| html! {
                                <div key={coin.id.clone()} class="price-row">
                                    <span>{format!("{} ({})", coin.name, coin.symbol)}</span>
                                    <span>{format_usd(coin.current_price)}</span>
                                </div>
                            })
                        }
                    }
                }
            </section>

            <section class="card">
                <h2>{"Historial"}</h2>
                {
                    if transactions.is_empty() {
                        html! { <p>{"Sin movimientos"}</p> }
                    } else {
                        html! {
                            for transactions.iter().map(|tx| {
                                let kind = match tx.kind {
                                    TransactionKind::Buy => "Compra",
                                    TransactionKind::Withdraw => "Retiro",
                                };
                                html! {
                                    <div key={tx.id.clone()} class="tx-row">
                                        <span>{format!("{} {} {}", kind, tx.amount, tx.coin_symbol)}</span>
                                        <span>{format_usd(tx.price_usd)}</span>
                                    </div>
                                }
                            })
                        }
                    }
                }
            </section>
        </main>
    }
}
