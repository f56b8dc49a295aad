use std::cell::{Ref, RefCell};
use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::controller::{deliver, Begin, FormFields, GlooTransport, SubmissionController};
use crate::components::toast::Toaster;

/// A form's controller bound to the component that owns it.
pub struct UseSubmissionHandle<F: FormFields> {
    controller: Rc<RefCell<SubmissionController<F>>>,
    refresh: UseForceUpdateHandle,
    toaster: Option<Toaster>,
}

impl<F: FormFields> Clone for UseSubmissionHandle<F> {
    fn clone(&self) -> Self {
        Self {
            controller: self.controller.clone(),
            refresh: self.refresh.clone(),
            toaster: self.toaster.clone(),
        }
    }
}

impl<F: FormFields> UseSubmissionHandle<F> {
    pub fn current(&self) -> Ref<'_, SubmissionController<F>> {
        self.controller.borrow()
    }

    pub fn edit(&self, change: impl FnOnce(&mut F)) {
        self.controller.borrow_mut().edit(change);
        self.refresh.force_update();
    }

    pub fn set_consent(&self, consent: bool) {
        self.controller.borrow_mut().set_consent(consent);
        self.refresh.force_update();
    }

    /// Form `onsubmit` handler.
    pub fn on_submit(&self) -> Callback<SubmitEvent> {
        let handle = self.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let begin = handle.controller.borrow_mut().begin();
            flush(&handle.controller, &handle.refresh, handle.toaster.as_ref());

            let Begin::Dispatch(dispatch) = begin else {
                return;
            };
            // The in-flight request only holds a weak reference, so a response
            // arriving after unmount is dropped.
            let weak = Rc::downgrade(&handle.controller);
            let refresh = handle.refresh.clone();
            let toaster = handle.toaster.clone();
            spawn_local(async move {
                if deliver(weak.clone(), dispatch, &GlooTransport).await {
                    if let Some(controller) = weak.upgrade() {
                        flush(&controller, &refresh, toaster.as_ref());
                    }
                }
            });
        })
    }
}

fn flush<F: FormFields>(
    controller: &Rc<RefCell<SubmissionController<F>>>,
    refresh: &UseForceUpdateHandle,
    toaster: Option<&Toaster>,
) {
    let notices = controller.borrow_mut().take_notices();
    if let Some(toaster) = toaster {
        for notice in notices {
            toaster.push(notice);
        }
    }
    refresh.force_update();
}

#[hook]
pub fn use_submission<F: FormFields>(endpoint: Option<String>) -> UseSubmissionHandle<F> {
    let controller = use_mut_ref(move || SubmissionController::<F>::new(endpoint));
    let refresh = use_force_update();
    let toaster = use_context::<Toaster>();

    UseSubmissionHandle {
        controller,
        refresh,
        toaster,
    }
}
