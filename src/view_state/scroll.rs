use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_render::{request_animation_frame, AnimationFrame};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Window};
use yew::prelude::*;

use super::check_listener;

/// Source of scroll offsets and animation frames.
///
/// A pending frame is cancelled by dropping its handle.
pub trait ScrollHost: 'static {
    type Listener;
    type Frame;

    fn scroll_offset(&self) -> f64;
    fn listen(&self, on_scroll: Rc<dyn Fn()>) -> Self::Listener;
    fn unlisten(&self, listener: Self::Listener);
    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Self::Frame;
}

/// Offsets below zero (rubber-band overscroll) or NaN read as the top of the page.
pub fn clamp_offset(raw: f64) -> f64 {
    if raw.is_nan() {
        0.0
    } else {
        raw.max(0.0)
    }
}

/// Live subscription to a [`ScrollHost`].
///
/// Raw scroll events are coalesced: at most one frame is outstanding, and the
/// offset is sampled when that frame runs. Dropping the subscription cancels
/// the outstanding frame and removes the listener.
pub struct ScrollSubscription<H: ScrollHost> {
    host: Rc<H>,
    listener: Option<H::Listener>,
    pending: Rc<RefCell<Option<H::Frame>>>,
}

impl<H: ScrollHost> ScrollSubscription<H> {
    pub fn subscribe(host: Rc<H>, publish: Rc<dyn Fn(f64)>) -> Self {
        publish(clamp_offset(host.scroll_offset()));

        let pending: Rc<RefCell<Option<H::Frame>>> = Rc::new(RefCell::new(None));
        let on_scroll: Rc<dyn Fn()> = {
            let host = Rc::downgrade(&host);
            let pending = Rc::downgrade(&pending);
            Rc::new(move || schedule_sample(&host, &pending, &publish))
        };
        let listener = host.listen(on_scroll);

        Self {
            host,
            listener: Some(listener),
            pending,
        }
    }

    pub fn has_pending_frame(&self) -> bool {
        self.pending.borrow().is_some()
    }
}

fn schedule_sample<H: ScrollHost>(
    host: &Weak<H>,
    pending: &Weak<RefCell<Option<H::Frame>>>,
    publish: &Rc<dyn Fn(f64)>,
) {
    let (Some(host_rc), Some(pending_rc)) = (host.upgrade(), pending.upgrade()) else {
        return;
    };
    if pending_rc.borrow().is_some() {
        return;
    }

    let callback = {
        let host = host.clone();
        let pending = pending.clone();
        let publish = publish.clone();
        Box::new(move || {
            if let Some(pending) = pending.upgrade() {
                pending.borrow_mut().take();
            }
            if let Some(host) = host.upgrade() {
                publish(clamp_offset(host.scroll_offset()));
            }
        })
    };
    let frame = host_rc.request_frame(callback);
    *pending_rc.borrow_mut() = Some(frame);
}

impl<H: ScrollHost> Drop for ScrollSubscription<H> {
    fn drop(&mut self) {
        self.pending.borrow_mut().take();
        if let Some(listener) = self.listener.take() {
            self.host.unlisten(listener);
        }
    }
}

/// The browser window as a scroll host.
pub struct WindowScroll {
    window: Window,
}

impl WindowScroll {
    /// `None` outside an interactive browser context.
    pub fn current() -> Option<Self> {
        web_sys::window().map(|window| Self { window })
    }
}

impl ScrollHost for WindowScroll {
    type Listener = Closure<dyn FnMut()>;
    type Frame = AnimationFrame;

    fn scroll_offset(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn listen(&self, on_scroll: Rc<dyn Fn()>) -> Self::Listener {
        let callback = Closure::wrap(Box::new(move || on_scroll()) as Box<dyn FnMut()>);
        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        check_listener(
            self.window.add_event_listener_with_callback_and_add_event_listener_options(
                "scroll",
                callback.as_ref().unchecked_ref(),
                &options,
            ),
            "attach scroll listener",
        );
        callback
    }

    fn unlisten(&self, listener: Self::Listener) {
        check_listener(
            self.window
                .remove_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref()),
            "detach scroll listener",
        );
    }

    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Self::Frame {
        request_animation_frame(move |_timestamp| callback())
    }
}

/// Current vertical scroll offset, sampled at most once per display frame.
///
/// Stays at 0 when there is no window to scroll.
#[hook]
pub fn use_scroll_position() -> f64 {
    let offset = use_state_eq(|| {
        WindowScroll::current()
            .map(|host| clamp_offset(host.scroll_offset()))
            .unwrap_or(0.0)
    });

    {
        let offset = offset.clone();
        use_effect_with_deps(
            move |_| {
                let subscription = WindowScroll::current().map(|host| {
                    ScrollSubscription::subscribe(
                        Rc::new(host),
                        Rc::new(move |value| offset.set(value)),
                    )
                });
                move || drop(subscription)
            },
            (),
        );
    }

    *offset
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    type FrameQueue = Rc<RefCell<Vec<(u32, Box<dyn FnOnce()>)>>>;

    #[derive(Default)]
    struct FakeHost {
        offset: Cell<f64>,
        listeners: RefCell<Vec<(u32, Rc<dyn Fn()>)>>,
        frames: FrameQueue,
        next_id: Cell<u32>,
        frames_requested: Cell<usize>,
        frames_cancelled: Rc<Cell<usize>>,
    }

    struct FakeFrame {
        id: u32,
        frames: FrameQueue,
        cancelled: Rc<Cell<usize>>,
    }

    impl Drop for FakeFrame {
        fn drop(&mut self) {
            let mut frames = self.frames.borrow_mut();
            let before = frames.len();
            frames.retain(|(id, _)| *id != self.id);
            if frames.len() < before {
                self.cancelled.set(self.cancelled.get() + 1);
            }
        }
    }

    impl FakeHost {
        fn next_id(&self) -> u32 {
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            id
        }

        fn scroll_to(&self, offset: f64) {
            self.offset.set(offset);
            let listeners: Vec<_> = self.listeners.borrow().iter().map(|(_, l)| l.clone()).collect();
            for listener in listeners {
                listener();
            }
        }

        fn run_frames(&self) {
            let due: Vec<_> = self.frames.borrow_mut().drain(..).collect();
            for (_, callback) in due {
                callback();
            }
        }
    }

    impl ScrollHost for FakeHost {
        type Listener = u32;
        type Frame = FakeFrame;

        fn scroll_offset(&self) -> f64 {
            self.offset.get()
        }

        fn listen(&self, on_scroll: Rc<dyn Fn()>) -> u32 {
            let id = self.next_id();
            self.listeners.borrow_mut().push((id, on_scroll));
            id
        }

        fn unlisten(&self, listener: u32) {
            self.listeners.borrow_mut().retain(|(id, _)| *id != listener);
        }

        fn request_frame(&self, callback: Box<dyn FnOnce()>) -> FakeFrame {
            let id = self.next_id();
            self.frames_requested.set(self.frames_requested.get() + 1);
            self.frames.borrow_mut().push((id, callback));
            FakeFrame {
                id,
                frames: self.frames.clone(),
                cancelled: self.frames_cancelled.clone(),
            }
        }
    }

    fn recorder() -> (Rc<RefCell<Vec<f64>>>, Rc<dyn Fn(f64)>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        (seen, Rc::new(move |value| sink.borrow_mut().push(value)))
    }

    #[test]
    fn publishes_current_offset_on_subscribe() {
        let host = Rc::new(FakeHost::default());
        host.offset.set(640.0);
        let (seen, publish) = recorder();

        let _subscription = ScrollSubscription::subscribe(host.clone(), publish);

        assert_eq!(*seen.borrow(), vec![640.0]);
        assert_eq!(host.frames_requested.get(), 0);
    }

    #[test]
    fn bursts_of_scroll_events_coalesce_into_one_frame() {
        let host = Rc::new(FakeHost::default());
        let (seen, publish) = recorder();
        let subscription = ScrollSubscription::subscribe(host.clone(), publish);

        host.scroll_to(10.0);
        host.scroll_to(25.0);
        host.scroll_to(90.0);
        assert_eq!(host.frames_requested.get(), 1);
        assert!(subscription.has_pending_frame());

        host.run_frames();
        assert_eq!(*seen.borrow(), vec![0.0, 90.0]);
        assert!(!subscription.has_pending_frame());

        host.scroll_to(120.0);
        host.run_frames();
        assert_eq!(host.frames_requested.get(), 2);
        assert_eq!(*seen.borrow(), vec![0.0, 90.0, 120.0]);
    }

    #[test]
    fn drop_cancels_pending_frame_and_removes_listener() {
        let host = Rc::new(FakeHost::default());
        let (seen, publish) = recorder();
        let subscription = ScrollSubscription::subscribe(host.clone(), publish);

        host.scroll_to(300.0);
        drop(subscription);

        assert_eq!(host.frames_cancelled.get(), 1);
        assert!(host.listeners.borrow().is_empty());
        host.run_frames();
        host.scroll_to(500.0);
        assert_eq!(*seen.borrow(), vec![0.0]);
    }

    #[test]
    fn negative_and_nan_offsets_read_as_zero() {
        assert_eq!(clamp_offset(-42.0), 0.0);
        assert_eq!(clamp_offset(f64::NAN), 0.0);
        assert_eq!(clamp_offset(12.5), 12.5);

        let host = Rc::new(FakeHost::default());
        host.offset.set(-15.0);
        let (seen, publish) = recorder();
        let _subscription = ScrollSubscription::subscribe(host, publish);
        assert_eq!(*seen.borrow(), vec![0.0]);
    }
}
