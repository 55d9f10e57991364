use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config;
use crate::inquiry::delivery::{self, DeliveryError};
use crate::inquiry::{
    FieldUpdate, InquiryFields, InquiryFormController, Lifecycle, SubmitError, Submission,
    ValidationError,
};
use crate::timer::BrowserScheduler;

#[derive(Clone)]
pub struct UseInquiryFormHandle {
    controller: Rc<InquiryFormController>,
    validation: UseStateHandle<Option<ValidationError>>,
    update: UseForceUpdateHandle,
}

impl UseInquiryFormHandle {
    pub fn fields(&self) -> InquiryFields {
        self.controller.fields()
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.controller.lifecycle()
    }

    pub fn validation(&self) -> Option<ValidationError> {
        (*self.validation).clone()
    }

    pub fn delivery_error(&self) -> Option<DeliveryError> {
        self.controller.delivery_error()
    }

    pub fn set_field(&self, update: FieldUpdate) {
        let field = update.field();
        self.controller.set_field(update);

        if let Some(mut error) = (*self.validation).clone() {
            if error.mentions(field) {
                error.clear(field);
                self.validation.set((!error.is_empty()).then_some(error));
            }
        }
        self.update.force_update();
    }

    pub fn submit(&self) {
        let outcome = self.controller.submit();
        match outcome {
            Ok(Submission::Acknowledged) => self.validation.set(None),
            Ok(Submission::Pending(pending)) => {
                self.validation.set(None);
                let controller = Rc::downgrade(&self.controller);
                spawn_local(async move {
                    let result = delivery::deliver(&pending).await;
                    match controller.upgrade() {
                        Some(controller) => controller.resolve(result),
                        None => debug!("inquiry form unmounted before delivery finished"),
                    }
                });
            }
            Err(SubmitError::Invalid(error)) => {
                warn!("{}", error);
                self.validation.set(Some(error));
            }
            Err(SubmitError::Busy(lifecycle)) => debug!("ignoring submit while {}", lifecycle),
        }
    }
}

/// Owns an inquiry form for the lifetime of the calling component.
#[hook]
pub fn use_inquiry_form() -> UseInquiryFormHandle {
    let update = use_force_update();
    let validation = use_state(|| None::<ValidationError>);

    let controller = {
        let update = update.clone();
        use_memo(move |_| {
            let controller =
                InquiryFormController::new(config::inquiry_settings(), Rc::new(BrowserScheduler));
            debug!("inquiry form delivers via {:?}", controller.settings().mode);
            controller.subscribe(move |lifecycle| {
                debug!("inquiry form is {}", lifecycle);
                update.force_update();
            });
            controller
        }, ())
    };

    UseInquiryFormHandle {
        controller,
        validation,
        update,
    }
}
