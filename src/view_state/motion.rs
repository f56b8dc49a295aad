use std::rc::Rc;

use js_sys::Reflect;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::MediaQueryList;
use yew::prelude::*;

use super::check_listener;

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// A media query that can report its state and notify about changes.
///
/// Older engines only offer `addListener`/`removeListener`, so both
/// registration styles are part of the contract.
pub trait MotionQuery: 'static {
    type Listener;

    fn matches(&self) -> bool;
    fn supports_change_events(&self) -> bool;
    fn add_change_listener(&self, on_change: Rc<dyn Fn(bool)>) -> Self::Listener;
    fn remove_change_listener(&self, listener: Self::Listener);
    fn add_legacy_listener(&self, on_change: Rc<dyn Fn(bool)>) -> Self::Listener;
    fn remove_legacy_listener(&self, listener: Self::Listener);
}

enum Registration<L> {
    Change(L),
    Legacy(L),
}

/// Keeps a reduced-motion flag in sync with a [`MotionQuery`] until dropped.
pub struct MotionSubscription<Q: MotionQuery> {
    query: Rc<Q>,
    registration: Option<Registration<Q::Listener>>,
}

impl<Q: MotionQuery> MotionSubscription<Q> {
    pub fn subscribe(query: Rc<Q>, publish: Rc<dyn Fn(bool)>) -> Self {
        publish(query.matches());

        let registration = if query.supports_change_events() {
            Registration::Change(query.add_change_listener(publish))
        } else {
            log::debug!("media query lacks change events, using legacy listener");
            Registration::Legacy(query.add_legacy_listener(publish))
        };

        Self {
            query,
            registration: Some(registration),
        }
    }
}

impl<Q: MotionQuery> Drop for MotionSubscription<Q> {
    fn drop(&mut self) {
        match self.registration.take() {
            Some(Registration::Change(listener)) => self.query.remove_change_listener(listener),
            Some(Registration::Legacy(listener)) => self.query.remove_legacy_listener(listener),
            None => {}
        }
    }
}

/// `prefers-reduced-motion` as evaluated by the browser.
pub struct BrowserMotionQuery {
    list: MediaQueryList,
}

impl BrowserMotionQuery {
    /// `None` when there is no window or it cannot evaluate media queries.
    pub fn current() -> Option<Self> {
        let window = web_sys::window()?;
        let has_match_media = Reflect::get(&window, &JsValue::from_str("matchMedia"))
            .map(|value| value.is_function())
            .unwrap_or(false);
        if !has_match_media {
            return None;
        }
        let list = window.match_media(REDUCED_MOTION_QUERY).ok().flatten()?;
        Some(Self { list })
    }

    fn callback(&self, on_change: Rc<dyn Fn(bool)>) -> Closure<dyn FnMut()> {
        let list = self.list.clone();
        Closure::wrap(Box::new(move || on_change(list.matches())) as Box<dyn FnMut()>)
    }
}

impl MotionQuery for BrowserMotionQuery {
    type Listener = Closure<dyn FnMut()>;

    fn matches(&self) -> bool {
        self.list.matches()
    }

    fn supports_change_events(&self) -> bool {
        Reflect::get(&self.list, &JsValue::from_str("addEventListener"))
            .map(|value| value.is_function())
            .unwrap_or(false)
    }

    fn add_change_listener(&self, on_change: Rc<dyn Fn(bool)>) -> Self::Listener {
        let callback = self.callback(on_change);
        check_listener(
            self.list.add_event_listener_with_callback("change", callback.as_ref().unchecked_ref()),
            "attach reduced-motion change listener",
        );
        callback
    }

    fn remove_change_listener(&self, listener: Self::Listener) {
        check_listener(
            self.list.remove_event_listener_with_callback("change", listener.as_ref().unchecked_ref()),
            "detach reduced-motion change listener",
        );
    }

    fn add_legacy_listener(&self, on_change: Rc<dyn Fn(bool)>) -> Self::Listener {
        let callback = self.callback(on_change);
        check_listener(
            self.list.add_listener_with_opt_callback(Some(callback.as_ref().unchecked_ref())),
            "attach legacy reduced-motion listener",
        );
        callback
    }

    fn remove_legacy_listener(&self, listener: Self::Listener) {
        check_listener(
            self.list.remove_listener_with_opt_callback(Some(listener.as_ref().unchecked_ref())),
            "detach legacy reduced-motion listener",
        );
    }
}

/// Whether the user asked the platform to reduce motion.
///
/// Defaults to `false` where media queries are unavailable.
#[hook]
pub fn use_prefers_reduced_motion() -> bool {
    let reduced = use_state_eq(|| {
        BrowserMotionQuery::current()
            .map(|query| query.matches())
            .unwrap_or(false)
    });

    {
        let reduced = reduced.clone();
        use_effect_with_deps(
            move |_| {
                let subscription = BrowserMotionQuery::current().map(|query| {
                    MotionSubscription::subscribe(
                        Rc::new(query),
                        Rc::new(move |value| reduced.set(value)),
                    )
                });
                move || drop(subscription)
            },
            (),
        );
    }

    *reduced
}
