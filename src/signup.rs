//! State of the landing page signup forms.
//!
//! Both forms on the page are bound to one [`SignupForm`]. A submission shows a
//! [`SubmitMessage`] that is cleared again after a fixed delay. The clear runs on
//! a task owned by the form: it is aborted when the form is dropped, and a newer
//! message is never cleared by an older timer.

use std::{
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc, Mutex, PoisonError,
    },
    time::Duration,
};

use tokio::{sync::watch, task::AbortHandle};
use tracing::{debug, warn};

use crate::client;

/// Shown when the endpoint could not be reached or answered with something unreadable.
pub const NETWORK_ERROR_MESSAGE: &str = "An error occurred. Please try again.";

pub const MESSAGE_CLEAR_DELAY: Duration = Duration::from_secs(5);

/// The answer of the subscription endpoint, whatever its status code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscribeReply {
    pub status: u16,
    pub message: Option<String>,
    pub error: Option<String>,
}

impl SubscribeReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait::async_trait]
pub trait SubscribeApi: Send + Sync + 'static {
    async fn subscribe(&self, email: &str) -> client::Result<SubscribeReply>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitMessage {
    pub kind: MessageKind,
    pub text: String,
}

impl SubmitMessage {
    fn success(text: impl Into<String>) -> Self {
        SubmitMessage {
            kind: MessageKind::Success,
            text: text.into(),
        }
    }

    fn error(text: impl Into<String>) -> Self {
        SubmitMessage {
            kind: MessageKind::Error,
            text: text.into(),
        }
    }

    /// Success replies show `message`; anything else prefers `message`, then `error`.
    fn from_reply(reply: SubscribeReply) -> Self {
        if reply.is_success() {
            return SubmitMessage::success(reply.message.unwrap_or_default());
        }

        let text = reply
            .message
            .or(reply.error)
            .unwrap_or_else(|| NETWORK_ERROR_MESSAGE.to_string());
        SubmitMessage::error(text)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub email: String,
    /// While `true` the inputs are disabled and further submissions are ignored.
    pub is_submitting: bool,
    pub message: Option<SubmitMessage>,
}

pub struct SignupForm<A> {
    api: A,
    state: Arc<watch::Sender<FormState>>,
    /// Bumped every time a message is shown, a clear task only clears its own message.
    message_generation: Arc<AtomicU64>,
    clear_task: Mutex<Option<AbortHandle>>,
    clear_delay: Duration,
}

impl<A: SubscribeApi> SignupForm<A> {
    pub fn new(api: A) -> Self {
        Self::with_clear_delay(api, MESSAGE_CLEAR_DELAY)
    }

    pub fn with_clear_delay(api: A, clear_delay: Duration) -> Self {
        let (state, _) = watch::channel(FormState::default());

        SignupForm {
            api,
            state: Arc::new(state),
            message_generation: Arc::new(AtomicU64::new(0)),
            clear_task: Mutex::new(None),
            clear_delay,
        }
    }

    pub fn state(&self) -> FormState {
        self.state.borrow().clone()
    }

    /// A receiver that sees every change of the form state, including the delayed clear.
    pub fn subscribe_state(&self) -> watch::Receiver<FormState> {
        self.state.subscribe()
    }

    /// Updates the email field. Ignored while a submission is in flight, returns whether it was applied.
    pub fn set_email(&self, email: impl Into<String>) -> bool {
        let email = email.into();
        self.state.send_if_modified(|state| {
            if state.is_submitting {
                return false;
            }
            state.email = email;
            true
        })
    }

    /// Sends the current email to the endpoint and shows the outcome.
    ///
    /// Returns `None` without doing anything if a submission is already in flight.
    pub async fn submit(&self) -> Option<SubmitMessage> {
        let mut email = None;
        self.state.send_if_modified(|state| {
            if state.is_submitting {
                return false;
            }
            state.is_submitting = true;
            state.message = None;
            email = Some(state.email.clone());
            true
        });

        let Some(email) = email else {
            debug!("{:<20} - submission already in flight", "signup_form");
            return None;
        };
        let in_flight = InFlight::new(&self.state);
        self.cancel_pending_clear();

        let message = match self.api.subscribe(&email).await {
            Ok(reply) => SubmitMessage::from_reply(reply),
            Err(er) => {
                warn!("{:<20} - submission failed: {er}", "signup_form");
                SubmitMessage::error(NETWORK_ERROR_MESSAGE)
            }
        };

        let generation = self.message_generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.send_modify(|state| {
            state.is_submitting = false;
            if message.kind == MessageKind::Success {
                state.email.clear();
            }
            state.message = Some(message.clone());
        });
        in_flight.disarm();
        self.schedule_clear(generation);

        Some(message)
    }

    fn schedule_clear(&self, generation: u64) {
        let state = Arc::clone(&self.state);
        let current_generation = Arc::clone(&self.message_generation);
        let delay = self.clear_delay;

        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            state.send_if_modified(|state| {
                if current_generation.load(Ordering::SeqCst) != generation {
                    return false;
                }
                state.message.take().is_some()
            });
        });

        let previous = self
            .clear_task
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .replace(task.abort_handle());
        if let Some(previous) = previous {
            previous.abort();
        }
    }

    fn cancel_pending_clear(&self) {
        let pending = self
            .clear_task
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(pending) = pending {
            pending.abort();
        }
    }
}

/// Resets the in-flight flag if a submission is dropped before it finished.
struct InFlight<'a> {
    state: &'a watch::Sender<FormState>,
    armed: bool,
}

impl<'a> InFlight<'a> {
    fn new(state: &'a watch::Sender<FormState>) -> Self {
        InFlight { state, armed: true }
    }

    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        debug!("{:<20} - submission cancelled", "signup_form");
        self.state.send_modify(|state| state.is_submitting = false);
    }
}

impl<A> Drop for SignupForm<A> {
    fn drop(&mut self) {
        let pending = self
            .clear_task
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(pending) = pending {
            pending.abort();
        }
    }
}
