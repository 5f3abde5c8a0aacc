//! Full-page loader shown while the session resolves.

use std::time::Duration;

use dioxus::prelude::*;
use tokio::time::sleep;

const MESSAGES: [&str; 4] = [
    "Checking authentication...",
    "Loading your messages...",
    "Connecting to your inbox...",
    "Preparing the assistant...",
];

const ROTATE_EVERY: Duration = Duration::from_millis(2200);

#[component]
pub fn PageLoader() -> Element {
    let mut message_index = use_signal(|| 0usize);

    // Cycle through the status messages; the loop dies with the component.
    use_future(move || async move {
        loop {
            sleep(ROTATE_EVERY).await;
            let next = (*message_index.peek() + 1) % MESSAGES.len();
            message_index.set(next);
        }
    });

    let message = MESSAGES[message_index()];

    rsx! {
        div {
            class: "page-loader",
            div { class: "page-loader-spinner" }
            p {
                class: "page-loader-message",
                "{message}"
            }
        }
    }
}
