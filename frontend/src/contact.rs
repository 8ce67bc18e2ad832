use log::info;
use serde::Serialize;
use yew::Callback;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactFormDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Message,
}

impl ContactFormDraft {
    pub fn with_field(&self, field: ContactField, value: String) -> Self {
        let mut draft = self.clone();
        match field {
            ContactField::Name => draft.name = value,
            ContactField::Email => draft.email = value,
            ContactField::Phone => draft.phone = value,
            ContactField::Message => draft.message = value,
        }
        draft
    }
}

/// Whoever receives a submitted draft. The form does no validation, network
/// or storage work of its own.
pub trait SubmissionHandler {
    fn submit(&self, draft: &ContactFormDraft);
}

/// Default handler: records the draft in the console and nothing else.
pub struct DiagnosticLog;

impl SubmissionHandler for DiagnosticLog {
    fn submit(&self, draft: &ContactFormDraft) {
        match serde_json::to_string(draft) {
            Ok(json) => info!("Form submitted: {}", json),
            Err(_) => info!("Form submitted: {:?}", draft),
        }
    }
}

impl SubmissionHandler for Callback<ContactFormDraft> {
    fn submit(&self, draft: &ContactFormDraft) {
        self.emit(draft.clone());
    }
}

/// Routes a submitted draft: to the supplied collaborator when there is one,
/// otherwise to `fallback`. Exactly one of them sees the draft.
pub fn dispatch(
    on_submit: Option<&Callback<ContactFormDraft>>,
    fallback: &dyn SubmissionHandler,
    draft: &ContactFormDraft,
) {
    match on_submit {
        Some(handler) => handler.submit(draft),
        None => fallback.submit(draft),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Recorder {
        received: RefCell<Vec<ContactFormDraft>>,
    }

    impl SubmissionHandler for Recorder {
        fn submit(&self, draft: &ContactFormDraft) {
            self.received.borrow_mut().push(draft.clone());
        }
    }

    fn ada() -> ContactFormDraft {
        ContactFormDraft::default()
            .with_field(ContactField::Name, "Ada".into())
            .with_field(ContactField::Email, "ada@x.com".into())
            .with_field(ContactField::Message, "Hi".into())
    }

    #[test]
    fn edits_replace_only_their_field() {
        let draft = ada().with_field(ContactField::Phone, "555".into());
        assert_eq!(
            draft,
            ContactFormDraft {
                name: "Ada".into(),
                email: "ada@x.com".into(),
                phone: "555".into(),
                message: "Hi".into(),
            }
        );
        let draft = draft.with_field(ContactField::Phone, String::new());
        assert_eq!(draft, ada());
    }

    fn recording_callback() -> (Rc<RefCell<Vec<ContactFormDraft>>>, Callback<ContactFormDraft>) {
        let received = Rc::new(RefCell::new(Vec::new()));
        let sink = received.clone();
        let callback = Callback::from(move |draft: ContactFormDraft| sink.borrow_mut().push(draft));
        (received, callback)
    }

    #[test]
    fn submit_hands_over_the_exact_draft_once_and_keeps_fields() {
        let draft = ada();
        let (received, callback) = recording_callback();
        let fallback = Recorder::default();

        dispatch(Some(&callback), &fallback, &draft);

        assert_eq!(
            *received.borrow(),
            vec![ContactFormDraft {
                name: "Ada".into(),
                email: "ada@x.com".into(),
                phone: String::new(),
                message: "Hi".into(),
            }]
        );
        assert!(fallback.received.borrow().is_empty());
        assert_eq!(draft, ada());
    }

    #[test]
    fn submit_without_collaborator_goes_to_fallback() {
        let fallback = Recorder::default();

        dispatch(None, &fallback, &ada());

        assert_eq!(*fallback.received.borrow(), vec![ada()]);
    }

    #[test]
    fn each_submit_is_handed_over_separately() {
        let (received, callback) = recording_callback();
        let fallback = Recorder::default();
        let first = ada();
        let second = first.with_field(ContactField::Phone, "555".into());

        dispatch(Some(&callback), &fallback, &first);
        dispatch(Some(&callback), &fallback, &second);

        assert_eq!(*received.borrow(), vec![first, second]);
    }

    #[test]
    fn draft_serializes_all_four_fields() {
        let json = serde_json::to_value(ada()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Ada",
                "email": "ada@x.com",
                "phone": "",
                "message": "Hi",
            })
        );
    }
}
