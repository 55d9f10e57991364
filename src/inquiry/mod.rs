//! Lead-capture form state and its submission lifecycle.
//!
//! ```text
//! Editing --submit(valid)--> Submitting --> Acknowledged --(dwell)--> Editing
//! Editing --submit(invalid)--> Editing
//! Submitting --resolve(Err)--> Editing        (remote delivery only)
//! ```

pub mod delivery;
pub mod fields;

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};
use std::time::Duration;

use log::{debug, info, warn};
use thiserror::Error;

use crate::timer::{Scheduler, TimerHandle};

pub use delivery::DeliveryError;
pub use fields::{
    looks_like_email, Budget, Choice, Field, FieldUpdate, InquiryFields, ProjectType, Timeline,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    Editing,
    Submitting,
    Acknowledged,
}

impl fmt::Display for Lifecycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Lifecycle::Editing => "editing",
            Lifecycle::Submitting => "submitting",
            Lifecycle::Acknowledged => "acknowledged",
        })
    }
}

fn join(fields: &[Field]) -> String {
    fields
        .iter()
        .map(|f| f.key())
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Error)]
#[error("inquiry is incomplete (missing: [{}], invalid: [{}])", join(.missing), join(.invalid))]
pub struct ValidationError {
    pub missing: Vec<Field>,
    pub invalid: Vec<Field>,
}

impl ValidationError {
    pub fn is_empty(&self) -> bool {
        self.missing.is_empty() && self.invalid.is_empty()
    }

    pub fn mentions(&self, field: Field) -> bool {
        self.missing.contains(&field) || self.invalid.contains(&field)
    }

    /// Drops `field` from both lists, e.g. once the user edits it.
    pub fn clear(&mut self, field: Field) {
        self.missing.retain(|f| *f != field);
        self.invalid.retain(|f| *f != field);
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("inquiry is already {0}")]
    Busy(Lifecycle),
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// How a validated inquiry leaves the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitMode {
    /// Acknowledge immediately without sending anything.
    Simulated,
    /// POST the fields to `endpoint` and wait for the answer.
    Remote { endpoint: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InquirySettings {
    pub mode: SubmitMode,
    pub dwell: Duration,
    pub require_email_format: bool,
}

impl Default for InquirySettings {
    fn default() -> Self {
        Self {
            mode: SubmitMode::Simulated,
            dwell: Duration::from_millis(3000),
            require_email_format: false,
        }
    }
}

/// An inquiry waiting for the caller to deliver it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingSubmission {
    pub endpoint: String,
    pub fields: InquiryFields,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Submission {
    Acknowledged,
    Pending(PendingSubmission),
}

struct FormState {
    fields: InquiryFields,
    lifecycle: Lifecycle,
    dirty: bool,
    delivery_error: Option<DeliveryError>,
    reset_timer: Option<TimerHandle>,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            fields: InquiryFields::default(),
            lifecycle: Lifecycle::Editing,
            dirty: false,
            delivery_error: None,
            reset_timer: None,
        }
    }
}

type Listeners = RefCell<Vec<Rc<dyn Fn(Lifecycle)>>>;

pub struct InquiryFormController {
    settings: InquirySettings,
    scheduler: Rc<dyn Scheduler>,
    state: Rc<RefCell<FormState>>,
    listeners: Rc<Listeners>,
}

impl InquiryFormController {
    pub fn new(settings: InquirySettings, scheduler: Rc<dyn Scheduler>) -> Self {
        Self {
            settings,
            scheduler,
            state: Rc::new(RefCell::new(FormState::default())),
            listeners: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn settings(&self) -> &InquirySettings {
        &self.settings
    }

    /// Called after every lifecycle transition, including the timed reset.
    pub fn subscribe(&self, listener: impl Fn(Lifecycle) + 'static) {
        self.listeners.borrow_mut().push(Rc::new(listener));
    }

    pub fn fields(&self) -> InquiryFields {
        self.state.borrow().fields.clone()
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.state.borrow().lifecycle
    }

    pub fn is_dirty(&self) -> bool {
        self.state.borrow().dirty
    }

    pub fn delivery_error(&self) -> Option<DeliveryError> {
        self.state.borrow().delivery_error.clone()
    }

    pub fn set_field(&self, update: FieldUpdate) {
        let mut state = self.state.borrow_mut();
        update.apply(&mut state.fields);
        state.dirty = true;
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let state = self.state.borrow();
        let mut error = ValidationError {
            missing: state.fields.missing_required(),
            invalid: Vec::new(),
        };
        if self.settings.require_email_format
            && state.fields.is_filled(Field::Email)
            && !looks_like_email(&state.fields.email)
        {
            error.invalid.push(Field::Email);
        }
        if error.is_empty() {
            Ok(())
        } else {
            Err(error)
        }
    }

    pub fn submit(&self) -> Result<Submission, SubmitError> {
        let lifecycle = self.lifecycle();
        if lifecycle != Lifecycle::Editing {
            return Err(SubmitError::Busy(lifecycle));
        }
        if let Err(error) = self.validate() {
            debug!("inquiry rejected: {}", error);
            return Err(error.into());
        }

        let fields = {
            let mut state = self.state.borrow_mut();
            state.lifecycle = Lifecycle::Submitting;
            state.delivery_error = None;
            state.fields.clone()
        };
        notify(&self.listeners, Lifecycle::Submitting);

        match &self.settings.mode {
            SubmitMode::Simulated => {
                self.acknowledge();
                Ok(Submission::Acknowledged)
            }
            SubmitMode::Remote { endpoint } => Ok(Submission::Pending(PendingSubmission {
                endpoint: endpoint.clone(),
                fields,
            })),
        }
    }

    /// Completes a remote delivery. Ignored unless the form is submitting.
    pub fn resolve(&self, result: Result<(), DeliveryError>) {
        let lifecycle = self.lifecycle();
        if lifecycle != Lifecycle::Submitting {
            warn!("delivery result arrived while {}, ignoring", lifecycle);
            return;
        }
        match result {
            Ok(()) => self.acknowledge(),
            Err(error) => {
                warn!("inquiry delivery failed: {}", error);
                {
                    let mut state = self.state.borrow_mut();
                    state.lifecycle = Lifecycle::Editing;
                    state.delivery_error = Some(error);
                }
                notify(&self.listeners, Lifecycle::Editing);
            }
        }
    }

    fn acknowledge(&self) {
        let state = Rc::downgrade(&self.state);
        let listeners = Rc::downgrade(&self.listeners);
        let timer = self.scheduler.once(
            self.settings.dwell,
            Box::new(move || reset(&state, &listeners)),
        );
        let previous = {
            let mut state = self.state.borrow_mut();
            state.lifecycle = Lifecycle::Acknowledged;
            state.reset_timer.replace(timer)
        };
        drop(previous);
        info!("inquiry acknowledged");
        notify(&self.listeners, Lifecycle::Acknowledged);
    }
}

fn reset(state: &Weak<RefCell<FormState>>, listeners: &Weak<Listeners>) {
    let (Some(state), Some(listeners)) = (state.upgrade(), listeners.upgrade()) else {
        return;
    };
    {
        let mut state = state.borrow_mut();
        if state.lifecycle != Lifecycle::Acknowledged {
            return;
        }
        state.fields = InquiryFields::default();
        state.lifecycle = Lifecycle::Editing;
        state.dirty = false;
        state.delivery_error = None;
    }
    debug!("acknowledgment elapsed, form cleared");
    notify(&listeners, Lifecycle::Editing);
}

fn notify(listeners: &Listeners, lifecycle: Lifecycle) {
    let listeners: Vec<_> = listeners.borrow().iter().cloned().collect();
    for listener in listeners {
        listener(lifecycle);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    use proptest::prelude::*;

    use super::*;
    use crate::timer::manual::ManualScheduler;

    fn controller_with(settings: InquirySettings) -> (InquiryFormController, ManualScheduler) {
        let scheduler = ManualScheduler::new();
        let controller = InquiryFormController::new(settings, Rc::new(scheduler.clone()));
        (controller, scheduler)
    }

    fn controller() -> (InquiryFormController, ManualScheduler) {
        controller_with(InquirySettings::default())
    }

    fn transitions(controller: &InquiryFormController) -> Rc<RefCell<Vec<Lifecycle>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        controller.subscribe(move |lifecycle| sink.borrow_mut().push(lifecycle));
        seen
    }

    fn fill_jane(controller: &InquiryFormController) {
        controller.set_field(FieldUpdate::Name("Jane Doe".into()));
        controller.set_field(FieldUpdate::Email("jane@example.com".into()));
        controller.set_field(FieldUpdate::ProjectType(Some(
            ProjectType::ResidentialRenovation,
        )));
        controller.set_field(FieldUpdate::Message("Kitchen remodel".into()));
    }

    #[test]
    fn set_field_touches_only_that_field() {
        let (form, _) = controller();
        assert!(!form.is_dirty());

        form.set_field(FieldUpdate::Phone("(604) 123-4567".into()));
        form.set_field(FieldUpdate::Timeline(Some(Timeline::Asap)));

        let fields = form.fields();
        assert_eq!(fields.phone, "(604) 123-4567");
        assert_eq!(fields.timeline, Some(Timeline::Asap));
        assert_eq!(fields.name, "");
        assert_eq!(fields.budget, None);
        assert!(form.is_dirty());
        assert_eq!(form.lifecycle(), Lifecycle::Editing);
    }

    #[test]
    fn missing_name_keeps_editing_and_names_fields() {
        let (form, scheduler) = controller();
        let seen = transitions(&form);
        form.set_field(FieldUpdate::Email("jane@example.com".into()));
        form.set_field(FieldUpdate::Budget(Some(Budget::Over500k)));
        let before = form.fields();

        let validation = match form.submit() {
            Err(SubmitError::Invalid(validation)) => validation,
            other => panic!("expected validation error, got {other:?}"),
        };
        assert_eq!(
            validation.missing,
            vec![Field::Name, Field::ProjectType, Field::Message]
        );
        assert_eq!(form.lifecycle(), Lifecycle::Editing);
        assert_eq!(form.fields(), before);
        assert!(seen.borrow().is_empty());
        assert_eq!(scheduler.live_timers(), 0);
    }

    #[test]
    fn valid_submit_acknowledges_then_resets_after_dwell() {
        let (form, scheduler) = controller();
        let seen = transitions(&form);
        fill_jane(&form);

        assert_eq!(form.submit(), Ok(Submission::Acknowledged));
        assert_eq!(
            *seen.borrow(),
            vec![Lifecycle::Submitting, Lifecycle::Acknowledged]
        );
        assert_eq!(form.fields().name, "Jane Doe");

        scheduler.advance(Duration::from_millis(2999));
        assert_eq!(form.lifecycle(), Lifecycle::Acknowledged);

        scheduler.advance(Duration::from_millis(1));
        assert_eq!(form.lifecycle(), Lifecycle::Editing);
        assert_eq!(form.fields(), InquiryFields::default());
        assert!(!form.is_dirty());
        assert_eq!(
            *seen.borrow(),
            vec![
                Lifecycle::Submitting,
                Lifecycle::Acknowledged,
                Lifecycle::Editing
            ]
        );
    }

    #[test]
    fn second_submit_while_acknowledged_is_rejected() {
        let (form, _) = controller();
        fill_jane(&form);
        form.submit().unwrap();

        assert_eq!(
            form.submit(),
            Err(SubmitError::Busy(Lifecycle::Acknowledged))
        );
    }

    #[test]
    fn dropping_form_cancels_pending_reset() {
        let (form, scheduler) = controller();
        let seen = transitions(&form);
        fill_jane(&form);
        form.submit().unwrap();
        assert_eq!(scheduler.live_timers(), 1);

        drop(form);
        assert_eq!(scheduler.live_timers(), 0);
        scheduler.advance(Duration::from_secs(5));
        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn remote_submit_waits_for_delivery() {
        let (form, scheduler) = controller_with(InquirySettings {
            mode: SubmitMode::Remote {
                endpoint: "/api/inquiries".into(),
            },
            ..InquirySettings::default()
        });
        let seen = transitions(&form);
        fill_jane(&form);

        let Ok(Submission::Pending(pending)) = form.submit() else {
            panic!("remote mode must hand back a pending submission");
        };
        assert_eq!(pending.endpoint, "/api/inquiries");
        assert_eq!(pending.fields.message, "Kitchen remodel");
        assert_eq!(form.lifecycle(), Lifecycle::Submitting);
        assert_eq!(form.submit(), Err(SubmitError::Busy(Lifecycle::Submitting)));

        scheduler.advance(Duration::from_secs(10));
        assert_eq!(form.lifecycle(), Lifecycle::Submitting);

        form.resolve(Ok(()));
        assert_eq!(form.lifecycle(), Lifecycle::Acknowledged);
        scheduler.advance(Duration::from_millis(3000));
        assert_eq!(form.lifecycle(), Lifecycle::Editing);
        assert_eq!(
            *seen.borrow(),
            vec![
                Lifecycle::Submitting,
                Lifecycle::Acknowledged,
                Lifecycle::Editing
            ]
        );
    }

    #[test]
    fn failed_delivery_returns_to_editing_with_fields() {
        let (form, scheduler) = controller_with(InquirySettings {
            mode: SubmitMode::Remote {
                endpoint: "/api/inquiries".into(),
            },
            ..InquirySettings::default()
        });
        fill_jane(&form);
        form.submit().unwrap();

        form.resolve(Err(DeliveryError::Rejected(502)));
        assert_eq!(form.lifecycle(), Lifecycle::Editing);
        assert_eq!(form.fields().name, "Jane Doe");
        assert_eq!(form.delivery_error(), Some(DeliveryError::Rejected(502)));
        assert_eq!(scheduler.live_timers(), 0);

        form.submit().unwrap();
        assert_eq!(form.delivery_error(), None);
    }

    #[test]
    fn late_delivery_result_is_ignored() {
        let (form, _) = controller();
        form.resolve(Ok(()));
        assert_eq!(form.lifecycle(), Lifecycle::Editing);
    }

    #[test]
    fn email_format_is_checked_only_when_enabled() {
        let (lenient, _) = controller();
        fill_jane(&lenient);
        lenient.set_field(FieldUpdate::Email("jane".into()));
        assert!(lenient.validate().is_ok());

        let (strict, _) = controller_with(InquirySettings {
            require_email_format: true,
            ..InquirySettings::default()
        });
        fill_jane(&strict);
        strict.set_field(FieldUpdate::Email("jane".into()));
        let err = strict.validate().unwrap_err();
        assert!(err.missing.is_empty());
        assert_eq!(err.invalid, vec![Field::Email]);
        assert!(err.mentions(Field::Email));
    }

    #[test]
    fn validation_error_lists_fields() {
        let err = ValidationError {
            missing: vec![Field::Name, Field::Message],
            invalid: vec![],
        };
        assert_eq!(
            err.to_string(),
            "inquiry is incomplete (missing: [name, message], invalid: [])"
        );
    }

    #[test]
    fn clearing_a_field_drops_it_from_both_lists() {
        let mut err = ValidationError {
            missing: vec![Field::Name, Field::ProjectType],
            invalid: vec![Field::Email],
        };
        err.clear(Field::Email);
        assert!(!err.mentions(Field::Email));
        assert_eq!(err.missing, vec![Field::Name, Field::ProjectType]);

        err.clear(Field::Name);
        err.clear(Field::ProjectType);
        assert!(err.is_empty());
    }

    fn update_strategy() -> impl Strategy<Value = FieldUpdate> {
        let text = "[a-zA-Z0-9 @.]{0,12}";
        prop_oneof![
            text.prop_map(FieldUpdate::Name),
            text.prop_map(FieldUpdate::Email),
            text.prop_map(FieldUpdate::Phone),
            text.prop_map(FieldUpdate::Message),
            proptest::option::of(proptest::sample::select(ProjectType::ALL))
                .prop_map(FieldUpdate::ProjectType),
            proptest::option::of(proptest::sample::select(Budget::ALL))
                .prop_map(FieldUpdate::Budget),
            proptest::option::of(proptest::sample::select(Timeline::ALL))
                .prop_map(FieldUpdate::Timeline),
        ]
    }

    proptest! {
        #[test]
        fn fields_hold_last_value_per_field(updates in proptest::collection::vec(update_strategy(), 0..40)) {
            let (form, _) = controller();
            let mut expected = InquiryFields::default();
            for update in &updates {
                form.set_field(update.clone());
            }
            for field in Field::ALL {
                if let Some(last) = updates.iter().rev().find(|u| u.field() == field) {
                    last.clone().apply(&mut expected);
                }
            }
            prop_assert_eq!(form.fields(), expected);
            prop_assert_eq!(form.is_dirty(), !updates.is_empty());
        }
    }
}
