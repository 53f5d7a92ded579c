//! Conversation driver: user input, simulated thinking time, canned reply.

use rand::Rng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::chat::core::message::{Message, Sender};
use crate::chat::responder::classifier::ResponseClassifier;
use crate::chat::session::state::{PendingReply, SessionState, SubmitOutcome};
use crate::chat::session::view::{CLEARED_NOTICE, ChatView};
use crate::chat::storage::kv_store::KeyValueStore;
use crate::chat::store::conversation_store::ConversationStore;

/// One conversation wired to a store, a reply generator and a view.
pub struct ChatSession<S, V, R = StdRng> {
    store: ConversationStore<S>,
    classifier: ResponseClassifier<R>,
    view: V,
    state: SessionState,
}

impl<S, V, R> ChatSession<S, V, R>
where
    S: KeyValueStore,
    V: ChatView,
    R: Rng,
{
    /// Assemble a session. Call [`Self::start`] to show the loaded state.
    #[must_use]
    pub fn new(store: ConversationStore<S>, classifier: ResponseClassifier<R>, view: V) -> Self {
        Self {
            store,
            classifier,
            view,
            state: SessionState::Idle,
        }
    }

    /// Push the loaded log, theme and memory status to the view.
    pub fn start(&mut self) {
        self.view.apply_theme(self.store.preferences().dark_mode);
        self.view.render(self.store.messages());
        self.view.set_memory_status(self.store.memory_status());
    }

    /// Offer raw user input.
    ///
    /// Blank input is ignored and input during a pending reply is rejected.
    /// Otherwise the trimmed text is stored and the session waits for
    /// [`Self::complete`].
    pub fn submit(&mut self, raw: &str) -> SubmitOutcome {
        let text = raw.trim();
        if text.is_empty() {
            return SubmitOutcome::Ignored;
        }
        if self.state == SessionState::AwaitingReply {
            debug!("send rejected while a reply is pending");
            return SubmitOutcome::Rejected;
        }

        let message = self.store.create_message(Sender::User, text);
        let user_message = message.id;
        self.store.append(message);
        self.view.render(self.store.messages());
        let status = self.store.persist();
        self.view.set_memory_status(status);

        self.state = SessionState::AwaitingReply;
        self.view.set_typing(true);

        SubmitOutcome::Accepted(PendingReply {
            prompt: text.to_string(),
            user_message,
        })
    }

    /// Produce and store the assistant reply, returning to idle.
    pub fn complete(&mut self, pending: PendingReply) -> Message {
        self.state = SessionState::Idle;
        self.view.set_typing(false);

        let reply = self.classifier.respond(&pending.prompt);
        let message = self.store.create_message(Sender::Assistant, reply.text);
        self.store.append(message.clone());
        self.view.render(self.store.messages());
        let status = self.store.persist();
        self.view.set_memory_status(status);

        debug!(
            user_message = %pending.user_message,
            reply = %message.id,
            category = %reply.category,
            "reply stored"
        );
        message
    }

    /// Submit, wait the configured typing delay, then complete.
    ///
    /// Returns the assistant message, or `None` if the input was ignored or
    /// rejected.
    pub async fn send(&mut self, raw: &str) -> Option<Message> {
        let SubmitOutcome::Accepted(pending) = self.submit(raw) else {
            return None;
        };
        tokio::time::sleep(self.store.config().typing_delay()).await;
        Some(self.complete(pending))
    }

    /// Clear the conversation after the view confirms.
    ///
    /// Returns whether anything was cleared.
    pub fn clear(&mut self) -> bool {
        if self.store.is_empty() || !self.view.confirm_clear() {
            return false;
        }

        self.store.clear();
        self.view.render(self.store.messages());
        self.view.set_memory_status(self.store.memory_status());
        self.view.notify(CLEARED_NOTICE);
        true
    }

    /// Flip the theme, persist it and tell the view. Returns the new value.
    pub fn toggle_theme(&mut self) -> bool {
        let dark_mode = self.store.toggle_dark_mode();
        let status = self.store.persist();
        self.view.apply_theme(dark_mode);
        self.view.set_memory_status(status);
        info!(dark_mode, "theme toggled");
        dark_mode
    }

    /// Current send/reply state.
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Backing conversation store.
    #[must_use]
    pub const fn store(&self) -> &ConversationStore<S> {
        &self.store
    }

    /// Attached view.
    #[must_use]
    pub const fn view(&self) -> &V {
        &self.view
    }

    /// Attached view, mutably.
    pub const fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }
}
