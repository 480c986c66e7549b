use leptos::prelude::*;

use crate::state::AppState;

/// Sidebar: New Chat plus links to the user's previous chats.
#[component]
pub fn Sidebar() -> impl IntoView {
    let state = expect_context::<AppState>();
    let chat_index = state.chat_index;

    // A new chat is a fresh page: the server issues the chat_id cookie and
    // all client state resets with the reload.
    let on_new = move |_| {
        if let Some(window) = web_sys::window() {
            if window.location().set_href("/").is_err() {
                log::error!("navigation to / failed");
            }
        }
    };

    view! {
        <aside class="sidebar">
            <div class="sidebar-header">
                <h2>"LogQLLM"</h2>
                <button class="new-chat-btn" on:click=on_new>
                    "+ New Chat"
                </button>
            </div>
            <div class="chat-list">
                {move || {
                    if chat_index.get().is_empty() {
                        view! {
                            <div class="chat-list-empty">"No previous chats"</div>
                        }
                            .into_any()
                    } else {
                        let state = state.clone();
                        view! {
                            <For
                                each=move || chat_index.get()
                                key=|chat| chat.id.clone()
                                let:chat
                            >
                                {
                                    let state = state.clone();
                                    let id = chat.id.clone();
                                    view! {
                                        <div
                                            class="chat-item"
                                            on:click=move |_| state.load_chat(id.clone())
                                        >
                                            {chat.title.clone()}
                                        </div>
                                    }
                                }
                            </For>
                        }
                            .into_any()
                    }
                }}
            </div>
        </aside>
    }
}
