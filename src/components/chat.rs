use leptos::ev;
use leptos::html;
use leptos::prelude::*;

use crate::models::{FeedbackType, Role, SUPPORTED_MODELS};
use crate::session::{TranscriptEntry, UiMode};
use crate::state::AppState;

/// Main chat area: transcript plus the input form. Before the first message
/// (or chat load) the form renders centered under an intro title; afterwards
/// it is the standard bottom bar.
#[component]
pub fn ChatArea() -> impl IntoView {
    let state = expect_context::<AppState>();
    let chat_window = NodeRef::<html::Div>::new();

    let session = state.session;

    // Keep the transcript scrolled to the newest message.
    Effect::new(move |_| {
        session.track();
        if let Some(el) = chat_window.get() {
            el.set_scroll_top(el.scroll_height());
        }
    });

    view! {
        <main class="chat-area">
            {move || {
                (session.get().mode() == UiMode::FirstMessage).then(|| {
                    view! {
                        <h2 class="query-title">"What do you want to ask LogQLLM?"</h2>
                    }
                })
            }}

            <div class="chat-window" node_ref=chat_window>
                <For
                    each=move || session.get().entries().to_vec()
                    key=|entry| entry.id
                    let:entry
                >
                    <MessageBubble entry=entry />
                </For>
            </div>

            <ChatInput />
        </main>
    }
}

/// A single transcript bubble. Assistant bubbles carry the thumbs-up/down
/// control, visible while the pointer hovers over the wrapper.
#[component]
fn MessageBubble(entry: TranscriptEntry) -> impl IntoView {
    let state = expect_context::<AppState>();
    let (hovered, set_hovered) = signal(false);

    let wrapper_class = format!("message-wrapper {}", entry.role);
    let bubble_class = format!("message {}", entry.role);
    let entry_id = entry.id;

    let feedback = (entry.role == Role::Assistant).then(|| {
        let up_state = state.clone();
        let down_state = state.clone();
        view! {
            <div
                class="feedback-form"
                style:visibility=move || if hovered.get() { "visible" } else { "hidden" }
            >
                <span
                    class="thumbs-up"
                    on:click=move |_| up_state.send_feedback(entry_id, FeedbackType::Positive)
                >
                    "\u{1F44D}"
                </span>
                <span
                    class="thumbs-down"
                    on:click=move |_| down_state.send_feedback(entry_id, FeedbackType::Negative)
                >
                    "\u{1F44E}"
                </span>
            </div>
        }
    });

    view! {
        <div
            class=wrapper_class
            on:mouseenter=move |_| set_hovered.set(true)
            on:mouseleave=move |_| set_hovered.set(false)
        >
            <div class=bubble_class>{entry.content.clone()}</div>
            {feedback}
        </div>
    }
}

/// Input form: textarea (Enter sends, Shift+Enter inserts a newline), model
/// selector and send button.
#[component]
fn ChatInput() -> impl IntoView {
    let state = expect_context::<AppState>();
    let (input, set_input) = signal(String::new());

    let session = state.session;
    let is_sending = state.is_sending;
    let is_first = move || session.get().mode() == UiMode::FirstMessage;

    let send = {
        let state = state.clone();
        move || {
            let text = input.get_untracked();
            if text.trim().is_empty() || is_sending.get_untracked() {
                return;
            }
            set_input.set(String::new());
            state.submit(text);
        }
    };

    let send_on_enter = send.clone();
    let on_keydown = move |ev: ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            send_on_enter();
        }
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        send();
    };

    let set_model = state.set_model;

    view! {
        <form
            class="input-area"
            class=("first-message-form", is_first)
            on:submit=on_submit
        >
            <textarea
                class="user-input"
                class=("first-message-textarea", is_first)
                rows="1"
                placeholder="Describe the logs you are looking for\u{2026}"
                prop:value=input
                on:input=move |ev| set_input.set(event_target_value(&ev))
                on:keydown=on_keydown
            />
            <select
                class="model-select"
                class=("first-message-model-select", is_first)
                on:change=move |ev| set_model.set(event_target_value(&ev))
            >
                {SUPPORTED_MODELS
                    .iter()
                    .map(|m| view! { <option value={*m}>{*m}</option> })
                    .collect_view()}
            </select>
            <button
                type="submit"
                class="send-button"
                class=("first-message-send-button", is_first)
                disabled=move || is_sending.get() || input.get().trim().is_empty()
            >
                {move || if is_sending.get() { "Sending\u{2026}" } else { "Send" }}
            </button>
        </form>
    }
}
