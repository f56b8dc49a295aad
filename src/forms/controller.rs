use std::cell::RefCell;
use std::fmt;
use std::rc::Weak;

use gloo_net::http::Request;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::config::MANUAL_CONTACT_EMAIL;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormKind {
    Contact,
    Whistleblow,
    Newsletter,
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FormKind::Contact => "contact",
            FormKind::Whistleblow => "whistleblow",
            FormKind::Newsletter => "newsletter",
        };
        f.write_str(name)
    }
}

/// User-facing strings for one form.
///
/// `failure_description` is followed by the manual contact address.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormCopy {
    pub consent_required: &'static str,
    pub success_title: &'static str,
    pub success_description: &'static str,
    pub success_status: &'static str,
    pub failure_title: &'static str,
    pub failure_description: &'static str,
    pub failure_status: &'static str,
}

/// Field set of a form. Serializes to the JSON body that is posted.
pub trait FormFields: Serialize + Default + Clone + PartialEq + 'static {
    const KIND: FormKind;
    const COPY: FormCopy;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeVariant {
    Default,
    Destructive,
}

/// A toast the form wants shown.
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub variant: NoticeVariant,
}

#[derive(Debug, Error, PartialEq)]
pub enum SubmitError {
    #[error("no submission endpoint configured")]
    MissingEndpoint,
    #[error("could not encode form: {0}")]
    Encode(String),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server answered with status {0}")]
    Status(u16),
}

/// Outbound side of a submission. Resolves to the HTTP status code.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn post_json(&self, endpoint: &str, body: &Value) -> Result<u16, SubmitError>;
}

/// Posts through the browser's fetch.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTransport;

impl Transport for GlooTransport {
    async fn post_json(&self, endpoint: &str, body: &Value) -> Result<u16, SubmitError> {
        let request = Request::post(endpoint)
            .header("Content-Type", "application/json")
            .json(body)
            .map_err(|e| SubmitError::Encode(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;
        Ok(response.status())
    }
}

/// A request that `begin` cleared for sending.
#[derive(Clone, Debug, PartialEq)]
pub struct Dispatch {
    pub endpoint: String,
    pub body: Value,
    attempt: u64,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Begin {
    /// A request is already in flight.
    Busy,
    /// Consent missing, nothing sent.
    Blocked,
    /// Failed before any request could be made.
    Failed,
    Dispatch(Dispatch),
}

/// Submission state machine for one form instance.
pub struct SubmissionController<F: FormFields> {
    endpoint: Option<String>,
    fields: F,
    consent: bool,
    state: SubmissionState,
    status: Option<String>,
    notices: Vec<Notice>,
    attempt: u64,
}

impl<F: FormFields> SubmissionController<F> {
    pub fn new(endpoint: Option<String>) -> Self {
        Self {
            endpoint,
            fields: F::default(),
            consent: false,
            state: SubmissionState::Idle,
            status: None,
            notices: Vec::new(),
            attempt: 0,
        }
    }

    pub fn fields(&self) -> &F {
        &self.fields
    }

    pub fn consent(&self) -> bool {
        self.consent
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    pub fn edit(&mut self, change: impl FnOnce(&mut F)) {
        change(&mut self.fields);
        self.settle();
    }

    pub fn set_consent(&mut self, consent: bool) {
        self.consent = consent;
        self.settle();
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Runs the checks of a new attempt and, when they pass, moves to
    /// `Submitting` and hands back the request to send.
    pub fn begin(&mut self) -> Begin {
        if self.is_submitting() {
            return Begin::Busy;
        }

        self.state = SubmissionState::Validating;
        if !self.consent {
            self.state = SubmissionState::Idle;
            self.status = Some(F::COPY.consent_required.to_string());
            return Begin::Blocked;
        }
        self.status = None;

        let Some(endpoint) = self.endpoint.clone() else {
            self.fail(SubmitError::MissingEndpoint);
            return Begin::Failed;
        };
        let body = match serde_json::to_value(&self.fields) {
            Ok(body) => body,
            Err(e) => {
                self.fail(SubmitError::Encode(e.to_string()));
                return Begin::Failed;
            }
        };

        self.attempt += 1;
        self.state = SubmissionState::Submitting;
        log::info!("{} form: submitting attempt {}", F::KIND, self.attempt);
        Begin::Dispatch(Dispatch {
            endpoint,
            body,
            attempt: self.attempt,
        })
    }

    /// Applies the outcome of `dispatch`. Stale outcomes are ignored.
    pub fn finish(&mut self, dispatch: &Dispatch, outcome: Result<u16, SubmitError>) {
        if !self.is_submitting() || dispatch.attempt != self.attempt {
            log::debug!("{} form: ignoring stale response", F::KIND);
            return;
        }

        let outcome = outcome.and_then(|status| {
            if (200..300).contains(&status) {
                Ok(())
            } else {
                Err(SubmitError::Status(status))
            }
        });

        match outcome {
            Ok(()) => {
                log::info!("{} form: delivered", F::KIND);
                self.state = SubmissionState::Succeeded;
                self.fields = F::default();
                self.consent = false;
                self.status = Some(F::COPY.success_status.to_string());
                self.notices.push(Notice {
                    title: F::COPY.success_title.to_string(),
                    description: F::COPY.success_description.to_string(),
                    variant: NoticeVariant::Default,
                });
            }
            Err(e) => self.fail(e),
        }
    }

    fn fail(&mut self, error: SubmitError) {
        log::warn!("{} form: submission failed: {}", F::KIND, error);
        self.state = SubmissionState::Failed;
        self.status = Some(F::COPY.failure_status.to_string());
        self.notices.push(Notice {
            title: F::COPY.failure_title.to_string(),
            description: format!("{} {}", F::COPY.failure_description, MANUAL_CONTACT_EMAIL),
            variant: NoticeVariant::Destructive,
        });
    }

    fn settle(&mut self) {
        if matches!(
            self.state,
            SubmissionState::Succeeded | SubmissionState::Failed
        ) {
            self.state = SubmissionState::Idle;
        }
    }
}

/// Sends `dispatch` and applies the result if the controller still exists.
///
/// Returns `false` when the owner was torn down before the response arrived.
pub async fn deliver<F, T>(
    controller: Weak<RefCell<SubmissionController<F>>>,
    dispatch: Dispatch,
    transport: &T,
) -> bool
where
    F: FormFields,
    T: Transport,
{
    let outcome = transport.post_json(&dispatch.endpoint, &dispatch.body).await;
    match controller.upgrade() {
        Some(controller) => {
            controller.borrow_mut().finish(&dispatch, outcome);
            true
        }
        None => {
            log::debug!("{} form: response arrived after teardown", F::KIND);
            false
        }
    }
}

/// `begin` followed by `deliver` when a request was cleared.
pub async fn submit<F, T>(controller: Weak<RefCell<SubmissionController<F>>>, transport: &T) -> bool
where
    F: FormFields,
    T: Transport,
{
    let begin = match controller.upgrade() {
        Some(strong) => strong.borrow_mut().begin(),
        None => return false,
    };
    match begin {
        Begin::Dispatch(dispatch) => deliver(controller, dispatch, transport).await,
        Begin::Busy | Begin::Blocked | Begin::Failed => true,
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use serde_json::json;

    use super::*;
    use crate::forms::contact::ContactFields;
    use crate::forms::newsletter::NewsletterFields;
    use crate::forms::whistleblow::WhistleblowFields;

    struct MockTransport {
        reply: Result<u16, SubmitError>,
        calls: Cell<usize>,
        last: RefCell<Option<(String, Value)>>,
    }

    impl MockTransport {
        fn replying(reply: Result<u16, SubmitError>) -> Self {
            Self {
                reply,
                calls: Cell::new(0),
                last: RefCell::new(None),
            }
        }
    }

    impl Transport for MockTransport {
        async fn post_json(&self, endpoint: &str, body: &Value) -> Result<u16, SubmitError> {
            self.calls.set(self.calls.get() + 1);
            *self.last.borrow_mut() = Some((endpoint.to_string(), body.clone()));
            tokio::task::yield_now().await;
            match &self.reply {
                Ok(status) => Ok(*status),
                Err(SubmitError::Transport(reason)) => Err(SubmitError::Transport(reason.clone())),
                Err(_) => Err(SubmitError::Transport("mock".to_string())),
            }
        }
    }

    fn contact(endpoint: Option<&str>) -> Rc<RefCell<SubmissionController<ContactFields>>> {
        let controller: SubmissionController<ContactFields> =
            SubmissionController::new(endpoint.map(str::to_string));
        let controller = Rc::new(RefCell::new(controller));
        controller.borrow_mut().edit(|fields| {
            fields.name = "Camille".to_string();
            fields.email = "camille@example.org".to_string();
            fields.message = "Devis multiplié par trois sur place.".to_string();
        });
        controller
    }

    #[tokio::test]
    async fn missing_consent_blocks_without_request() {
        let controller = contact(Some("https://forms.example.org/contact"));
        let transport = MockTransport::replying(Ok(200));

        submit(Rc::downgrade(&controller), &transport).await;

        let controller = controller.borrow();
        assert_eq!(transport.calls.get(), 0);
        assert_eq!(controller.state(), SubmissionState::Idle);
        assert_eq!(controller.status(), Some(ContactFields::COPY.consent_required));
        assert_eq!(controller.fields().name, "Camille");
    }

    #[tokio::test]
    async fn missing_endpoint_fails_without_request() {
        let controller = contact(None);
        controller.borrow_mut().set_consent(true);
        let transport = MockTransport::replying(Ok(200));

        submit(Rc::downgrade(&controller), &transport).await;

        let mut controller = controller.borrow_mut();
        assert_eq!(transport.calls.get(), 0);
        assert_eq!(controller.state(), SubmissionState::Failed);
        assert_eq!(controller.status(), Some(ContactFields::COPY.failure_status));
        let notices = controller.take_notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].variant, NoticeVariant::Destructive);
        assert!(notices[0].description.contains(MANUAL_CONTACT_EMAIL));
    }

    #[tokio::test]
    async fn ok_response_clears_fields_and_consent() {
        let controller = contact(Some("https://forms.example.org/contact"));
        controller.borrow_mut().set_consent(true);
        let transport = MockTransport::replying(Ok(200));

        submit(Rc::downgrade(&controller), &transport).await;

        assert_eq!(transport.calls.get(), 1);
        let (endpoint, body) = transport.last.borrow().clone().unwrap();
        assert_eq!(endpoint, "https://forms.example.org/contact");
        assert_eq!(
            body,
            json!({
                "name": "Camille",
                "email": "camille@example.org",
                "message": "Devis multiplié par trois sur place.",
            })
        );

        let mut controller = controller.borrow_mut();
        assert_eq!(controller.state(), SubmissionState::Succeeded);
        assert_eq!(*controller.fields(), ContactFields::default());
        assert!(!controller.consent());
        assert_eq!(controller.status(), Some(ContactFields::COPY.success_status));
        let notices = controller.take_notices();
        assert_eq!(notices[0].title, ContactFields::COPY.success_title);
        assert_eq!(notices[0].variant, NoticeVariant::Default);
    }

    #[tokio::test]
    async fn server_error_keeps_fields() {
        let controller = contact(Some("https://forms.example.org/contact"));
        controller.borrow_mut().set_consent(true);
        let transport = MockTransport::replying(Ok(500));

        submit(Rc::downgrade(&controller), &transport).await;

        let mut controller = controller.borrow_mut();
        assert_eq!(transport.calls.get(), 1);
        assert_eq!(controller.state(), SubmissionState::Failed);
        assert_eq!(controller.fields().email, "camille@example.org");
        assert!(controller.consent());
        assert!(controller.take_notices()[0]
            .description
            .contains(MANUAL_CONTACT_EMAIL));
    }

    #[tokio::test]
    async fn network_error_is_a_failure() {
        let controller: Rc<RefCell<SubmissionController<NewsletterFields>>> = Rc::new(RefCell::new(
            SubmissionController::new(Some("https://forms.example.org/news".to_string())),
        ));
        controller.borrow_mut().edit(|fields| fields.email = "vigie@example.org".to_string());
        controller.borrow_mut().set_consent(true);
        let transport = MockTransport::replying(Err(SubmitError::Transport("offline".to_string())));

        submit(Rc::downgrade(&controller), &transport).await;

        let controller = controller.borrow();
        assert_eq!(controller.state(), SubmissionState::Failed);
        assert_eq!(controller.status(), Some(NewsletterFields::COPY.failure_status));
        assert_eq!(controller.fields().email, "vigie@example.org");
        assert_eq!(
            transport.last.borrow().as_ref().map(|(_, body)| body.clone()),
            Some(json!({ "email": "vigie@example.org" }))
        );
    }

    #[tokio::test]
    async fn whistleblow_posts_only_the_testimony() {
        let controller: Rc<RefCell<SubmissionController<WhistleblowFields>>> = Rc::new(RefCell::new(
            SubmissionController::new(Some("https://forms.example.org/alert".to_string())),
        ));
        controller.borrow_mut().edit(|fields| fields.message = "Facture doublée.".to_string());
        controller.borrow_mut().set_consent(true);
        let transport = MockTransport::replying(Ok(201));

        submit(Rc::downgrade(&controller), &transport).await;

        assert_eq!(
            transport.last.borrow().as_ref().map(|(_, body)| body.clone()),
            Some(json!({ "message": "Facture doublée." }))
        );
        let controller = controller.borrow();
        assert_eq!(controller.state(), SubmissionState::Succeeded);
        assert_eq!(controller.status(), Some(WhistleblowFields::COPY.success_status));
        assert!(controller.fields().message.is_empty());
    }

    #[tokio::test]
    async fn repeated_submits_while_in_flight_send_once() {
        let controller = contact(Some("https://forms.example.org/contact"));
        controller.borrow_mut().set_consent(true);
        let transport = MockTransport::replying(Ok(204));

        tokio::join!(
            submit(Rc::downgrade(&controller), &transport),
            submit(Rc::downgrade(&controller), &transport),
            submit(Rc::downgrade(&controller), &transport),
        );

        assert_eq!(transport.calls.get(), 1);
        assert_eq!(controller.borrow().state(), SubmissionState::Succeeded);
    }

    #[tokio::test]
    async fn late_response_after_teardown_is_ignored() {
        let controller = contact(Some("https://forms.example.org/contact"));
        controller.borrow_mut().set_consent(true);
        let dispatch = match controller.borrow_mut().begin() {
            Begin::Dispatch(dispatch) => dispatch,
            other => panic!("expected dispatch, got {other:?}"),
        };
        let weak = Rc::downgrade(&controller);
        drop(controller);

        let transport = MockTransport::replying(Ok(200));
        assert!(!deliver(weak, dispatch, &transport).await);
        assert_eq!(transport.calls.get(), 1);
    }

    #[test]
    fn busy_controller_refuses_new_attempt() {
        let controller = contact(Some("https://forms.example.org/contact"));
        let mut controller = controller.borrow_mut();
        controller.set_consent(true);
        assert!(matches!(controller.begin(), Begin::Dispatch(_)));
        assert!(controller.is_submitting());
        assert_eq!(controller.begin(), Begin::Busy);
    }

    #[test]
    fn stale_outcome_does_not_override_newer_attempt() {
        let controller = contact(Some("https://forms.example.org/contact"));
        let mut controller = controller.borrow_mut();
        controller.set_consent(true);
        let Begin::Dispatch(first) = controller.begin() else {
            panic!("expected dispatch");
        };
        controller.finish(&first, Ok(503));
        assert_eq!(controller.state(), SubmissionState::Failed);

        let Begin::Dispatch(second) = controller.begin() else {
            panic!("expected dispatch");
        };
        controller.finish(&first, Ok(200));
        assert_eq!(controller.state(), SubmissionState::Submitting);
        controller.finish(&second, Ok(200));
        assert_eq!(controller.state(), SubmissionState::Succeeded);
    }

    #[test]
    fn editing_after_terminal_state_returns_to_idle() {
        let controller = contact(None);
        let mut controller = controller.borrow_mut();
        controller.set_consent(true);
        assert_eq!(controller.begin(), Begin::Failed);
        assert_eq!(controller.state(), SubmissionState::Failed);

        controller.edit(|fields| fields.message.push_str(" Et aucun suivi."));
        assert_eq!(controller.state(), SubmissionState::Idle);
    }
}
