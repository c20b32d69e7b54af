//! Transient status banner.
//!
//! Shows the controller's current message and expires it with a browser timer.

use gloo_timers::callback::Timeout;
use leptos::*;

use crate::controller::{ExpiryTimer, PageController};

/// `setTimeout`-backed timer, never cancelled.
struct BrowserTimer;

impl ExpiryTimer for BrowserTimer {
    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) {
        Timeout::new(delay_ms, callback).forget();
    }
}

#[component]
pub fn MessageContainer(controller: PageController) -> impl IntoView {
    let messages = controller.messages;

    controller.expire_messages_with(BrowserTimer);

    view! {
        <div id="messageContainer" class="message-container">
            {move || {
                messages
                    .with(|board| board.current().cloned())
                    .map(|message| view! { <div class=message.class_name()>{message.text}</div> })
            }}
        </div>
    }
}
