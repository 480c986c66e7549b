use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::cookies;
use crate::models::{ChatSummary, FeedbackRequest, FeedbackType, SUPPORTED_MODELS};
use crate::session::ChatSession;

/// DOM id of the JSON chat index the server embeds in the page.
const CHAT_INDEX_ELEMENT_ID: &str = "chat-index";

/// The chat controller, provided via Leptos context. All session mutation
/// goes through `submit`, `load_chat` and `send_feedback`.
#[derive(Clone)]
pub struct AppState {
    pub session: ReadSignal<ChatSession>,
    pub model: ReadSignal<String>,
    pub is_sending: ReadSignal<bool>,
    pub chat_index: ReadSignal<Vec<ChatSummary>>,

    pub set_session: WriteSignal<ChatSession>,
    pub set_model: WriteSignal<String>,
    set_is_sending: WriteSignal<bool>,
}

impl AppState {
    /// Create the controller and provide it in the current Leptos context.
    pub fn provide() -> Self {
        let (session, set_session) = signal(ChatSession::new());
        let (model, set_model) = signal(SUPPORTED_MODELS[0].to_string());
        let (is_sending, set_is_sending) = signal(false);
        let (chat_index, _) = signal(embedded_chat_index());

        let state = Self {
            session,
            model,
            is_sending,
            chat_index,
            set_session,
            set_model,
            set_is_sending,
        };

        provide_context(state.clone());
        state
    }

    /// Submits a user message: renders it immediately, then asks the backend
    /// for a reply. No-op for blank input or while a request is in flight.
    pub fn submit(&self, text: String) {
        if self.is_sending.get_untracked() {
            return;
        }

        let mut pushed = None;
        self.set_session.update(|s| {
            pushed = s.push_user(&text);
            if pushed.is_some() {
                s.mark_started();
            }
        });
        if pushed.is_none() {
            return;
        }

        // Snapshot the conversation and model as of this submission.
        let messages = self.session.get_untracked().conversation();
        let model = self.model.get_untracked();

        self.set_is_sending.set(true);
        let set_session = self.set_session;
        let set_is_sending = self.set_is_sending;

        spawn_local(async move {
            match api::send_chat(&model, messages).await {
                Ok(resp) => {
                    set_session.update(|s| {
                        s.push_assistant(resp.reply);
                    });
                }
                Err(e) => {
                    log::error!("chat request failed: {e}");
                    set_session.update(|s| {
                        s.push_error_notice();
                    });
                }
            }
            set_is_sending.set(false);
        });
    }

    /// Switches to an existing chat: resets the transcript, points the
    /// `chat_id` cookie at it, then fetches and renders its history. A failed
    /// fetch is logged and leaves the window as the reset left it.
    pub fn load_chat(&self, chat_id: String) {
        self.set_session.update(|s| {
            s.clear();
            s.mark_started();
        });
        cookies::set_chat_id(&chat_id);

        let set_session = self.set_session;
        spawn_local(async move {
            match api::fetch_chat(&chat_id).await {
                Ok(messages) => {
                    set_session.update(|s| s.replace_with_history(messages));
                }
                Err(e) => {
                    log::error!("failed to load chat history: {e}");
                }
            }
        });
    }

    /// Records a thumbs-up/down for a transcript entry. Fire-and-forget: the
    /// user never sees the outcome, failures are only logged.
    pub fn send_feedback(&self, entry_id: u64, feedback_type: FeedbackType) {
        let Some(message_idx) = self.session.get_untracked().position_of(entry_id) else {
            return;
        };

        let request = FeedbackRequest {
            feedback_type,
            user_id: cookies::get("user_id"),
            chat_id: cookies::get("chat_id"),
            message_idx,
        };

        spawn_local(async move {
            if let Err(e) = api::send_feedback(&request).await {
                log::error!("failed to submit feedback: {e}");
            }
        });
    }
}

/// Prior chats for the sidebar, parsed from the JSON the server embeds in
/// the page. A missing element means no history to show.
fn embedded_chat_index() -> Vec<ChatSummary> {
    let Some(text) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CHAT_INDEX_ELEMENT_ID))
        .and_then(|el| el.text_content())
    else {
        return Vec::new();
    };

    match serde_json::from_str(&text) {
        Ok(index) => index,
        Err(e) => {
            log::error!("malformed chat index in page: {e}");
            Vec::new()
        }
    }
}
