use std::rc::Rc;

use futures::future::{select, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use serde::Serialize;
use thiserror::Error;
use yew::Reducible;

#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub message: String,
}

impl ContactDraft {
    pub fn new(name: &str, email: &str, subject: &str, message: &str) -> Self {
        let subject = subject.trim();
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            subject: (!subject.is_empty()).then(|| subject.to_string()),
            message: message.trim().to_string(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContactError {
    #[error("No se pudo enviar el mensaje. Revisa tu conexión e inténtalo de nuevo.")]
    Request(String),
    #[error("El servidor rechazó el mensaje (código {0}). Inténtalo de nuevo más tarde.")]
    Status(u16),
    #[error("El envío tardó demasiado. Inténtalo de nuevo.")]
    Timeout,
}

/// Where a submitted draft goes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Delivery {
    /// No relay configured: acknowledge in the page and drop the draft.
    LocalAck,
    Post { endpoint: &'static str, timeout_ms: u32 },
}

impl Delivery {
    pub fn from_config(endpoint: Option<&'static str>, timeout_ms: u32) -> Self {
        match endpoint.map(str::trim) {
            Some(endpoint) if !endpoint.is_empty() => Delivery::Post { endpoint, timeout_ms },
            _ => Delivery::LocalAck,
        }
    }
}

/// What a submit press should do with a draft. Field validation is left to
/// the browser, so every submit that gets here is acted on.
#[derive(Clone, Debug, PartialEq)]
pub enum Submission {
    Acknowledge,
    Deliver { endpoint: &'static str, timeout_ms: u32 },
}

pub fn plan_submission(delivery: Delivery) -> Submission {
    match delivery {
        Delivery::LocalAck => Submission::Acknowledge,
        Delivery::Post { endpoint, timeout_ms } => Submission::Deliver { endpoint, timeout_ms },
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Banner {
    Sent,
    Failed(String),
}

/// Submission status shown under the form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormState {
    pub banner: Option<Banner>,
    pub sending: bool,
    /// Number of acknowledgements so far; a dismiss only applies to the
    /// acknowledgement it was scheduled for.
    pub acks: u32,
}

pub enum FormAction {
    Sending,
    Acknowledged,
    Failed(String),
    Dismiss { ack: u32 },
}

impl Reducible for FormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: FormAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            FormAction::Sending => {
                next.sending = true;
                next.banner = None;
            }
            FormAction::Acknowledged => {
                next.sending = false;
                next.acks += 1;
                next.banner = Some(Banner::Sent);
            }
            FormAction::Failed(reason) => {
                next.sending = false;
                next.banner = Some(Banner::Failed(reason));
            }
            FormAction::Dismiss { ack } => {
                if ack != self.acks || self.banner != Some(Banner::Sent) {
                    return self;
                }
                next.banner = None;
            }
        }
        Rc::new(next)
    }
}

pub const ACK_MESSAGE: &str = "¡Gracias! Hemos recibido tu mensaje y te responderemos en 24–48h.";

/// POSTs the draft as JSON; any 2xx counts as delivered.
pub async fn post_draft(
    endpoint: &str,
    timeout_ms: u32,
    draft: &ContactDraft,
) -> Result<(), ContactError> {
    let request = Request::post(endpoint)
        .json(draft)
        .map_err(|e| ContactError::Request(e.to_string()))?;

    let send = Box::pin(request.send());
    let timeout = Box::pin(TimeoutFuture::new(timeout_ms));

    match select(send, timeout).await {
        Either::Left((Ok(response), _)) if response.ok() => Ok(()),
        Either::Left((Ok(response), _)) => Err(ContactError::Status(response.status())),
        Either::Left((Err(e), _)) => Err(ContactError::Request(e.to_string())),
        Either::Right(_) => Err(ContactError::Timeout),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn blank_subject_is_dropped_from_payload() {
        let draft = ContactDraft::new(" Ana ", "ana@example.com", "   ", "Quiero reformar mi piso");
        assert_eq!(draft.subject, None);
        assert_eq!(
            serde_json::to_value(&draft).unwrap(),
            json!({
                "name": "Ana",
                "email": "ana@example.com",
                "message": "Quiero reformar mi piso",
            })
        );
    }

    #[test]
    fn subject_is_sent_when_present() {
        let draft = ContactDraft::new("Ana", "ana@example.com", "Presupuesto", "Hola");
        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(value["subject"], "Presupuesto");
    }

    #[test]
    fn missing_endpoint_means_local_acknowledgement() {
        assert_eq!(Delivery::from_config(None, 10_000), Delivery::LocalAck);
        assert_eq!(Delivery::from_config(Some("  "), 10_000), Delivery::LocalAck);
    }

    #[test]
    fn configured_endpoint_means_post() {
        assert_eq!(
            Delivery::from_config(Some("https://forms.example.com/contact"), 5_000),
            Delivery::Post {
                endpoint: "https://forms.example.com/contact",
                timeout_ms: 5_000,
            }
        );
    }

    fn submit(state: Rc<FormState>, delivery: Delivery) -> Rc<FormState> {
        match plan_submission(delivery) {
            Submission::Acknowledge => state.reduce(FormAction::Acknowledged),
            Submission::Deliver { .. } => state.reduce(FormAction::Sending),
        }
    }

    #[test]
    fn submit_without_relay_acknowledges_exactly_once() {
        let state = submit(Rc::new(FormState::default()), Delivery::LocalAck);
        assert_eq!(state.acks, 1);
        assert_eq!(state.banner, Some(Banner::Sent));
        assert!(!state.sending);
    }

    #[test]
    fn whitespace_fields_accepted_by_the_browser_are_still_acknowledged() {
        let draft = ContactDraft::new("   ", "ana@example.com", "", "Hola");
        assert_eq!(draft.name, "");
        assert_eq!(plan_submission(Delivery::LocalAck), Submission::Acknowledge);
    }

    #[test]
    fn submit_with_relay_waits_for_delivery() {
        let delivery = Delivery::from_config(Some("https://forms.example.com/contact"), 10_000);
        assert_eq!(
            plan_submission(delivery),
            Submission::Deliver {
                endpoint: "https://forms.example.com/contact",
                timeout_ms: 10_000,
            }
        );

        let state = submit(Rc::new(FormState::default()), delivery);
        assert!(state.sending);
        assert_eq!(state.banner, None);
        assert_eq!(state.acks, 0);

        let state = state.reduce(FormAction::Acknowledged);
        assert!(!state.sending);
        assert_eq!(state.acks, 1);
        assert_eq!(state.banner, Some(Banner::Sent));
    }

    #[test]
    fn failed_delivery_shows_the_reason_and_allows_retry() {
        let state = Rc::new(FormState::default())
            .reduce(FormAction::Sending)
            .reduce(FormAction::Failed(ContactError::Timeout.to_string()));
        assert!(!state.sending);
        assert_eq!(state.acks, 0);
        assert_eq!(
            state.banner,
            Some(Banner::Failed(ContactError::Timeout.to_string()))
        );

        let state = state.reduce(FormAction::Sending);
        assert_eq!(state.banner, None);
    }

    #[test]
    fn acknowledgement_is_dismissed_by_its_own_timer() {
        let state = submit(Rc::new(FormState::default()), Delivery::LocalAck);
        let state = state.reduce(FormAction::Dismiss { ack: 1 });
        assert_eq!(state.banner, None);
        assert_eq!(state.acks, 1);
    }

    #[test]
    fn stale_timer_leaves_a_newer_acknowledgement_visible() {
        let first = submit(Rc::new(FormState::default()), Delivery::LocalAck);
        let second = submit(first, Delivery::LocalAck);
        let after_stale = second.clone().reduce(FormAction::Dismiss { ack: 1 });
        assert!(Rc::ptr_eq(&second, &after_stale));
        assert_eq!(after_stale.banner, Some(Banner::Sent));

        let after_current = after_stale.reduce(FormAction::Dismiss { ack: 2 });
        assert_eq!(after_current.banner, None);
    }

    #[test]
    fn dismiss_does_not_hide_an_error() {
        let state = Rc::new(FormState::default())
            .reduce(FormAction::Failed("fallo".to_string()))
            .reduce(FormAction::Dismiss { ack: 0 });
        assert_eq!(state.banner, Some(Banner::Failed("fallo".to_string())));
    }

    #[test]
    fn errors_read_as_user_messages() {
        assert!(ContactError::Status(502).to_string().contains("502"));
        assert!(!ContactError::Timeout.to_string().is_empty());
    }
}
