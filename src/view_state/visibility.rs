use std::collections::BTreeSet;
use std::rc::Rc;

use js_sys::{Array, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config::VISIBILITY_THRESHOLD;

/// One intersection report for the section at `index`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Observation {
    pub index: usize,
    pub ratio: f64,
    pub intersecting: bool,
}

impl Observation {
    fn is_visible(&self, threshold: f64) -> bool {
        self.intersecting && self.ratio >= threshold
    }
}

/// Indices of the sections currently on screen, out of `total`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VisibleSections {
    total: usize,
    visible: BTreeSet<usize>,
}

impl VisibleSections {
    pub fn none(total: usize) -> Self {
        Self {
            total,
            visible: BTreeSet::new(),
        }
    }

    pub fn all(total: usize) -> Self {
        Self {
            total,
            visible: (0..total).collect(),
        }
    }

    /// Applies a batch of observations. Returns whether membership changed.
    ///
    /// Reports for indices outside `0..total` are dropped.
    pub fn apply(&mut self, batch: &[Observation], threshold: f64) -> bool {
        let mut changed = false;
        for observation in batch.iter().filter(|o| o.index < self.total) {
            changed |= if observation.is_visible(threshold) {
                self.visible.insert(observation.index)
            } else {
                self.visible.remove(&observation.index)
            };
        }
        changed
    }

    pub fn contains(&self, index: usize) -> bool {
        self.visible.contains(&index)
    }

    pub fn max_visible(&self) -> Option<usize> {
        self.visible.iter().next_back().copied()
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.visible.iter().copied()
    }
}

/// Something that can watch a fixed list of anchors for viewport intersection.
pub trait IntersectionHost: 'static {
    type Observer;

    fn supported(&self) -> bool;
    fn anchor_count(&self) -> usize;
    /// `None` if the observer could not be created.
    fn observe(
        &self,
        threshold: f64,
        on_batch: Box<dyn FnMut(Vec<Observation>)>,
    ) -> Option<Self::Observer>;
    fn disconnect(&self, observer: Self::Observer);
}

/// Maintains the visible set for every anchor of an [`IntersectionHost`].
pub struct VisibilityTracker<H: IntersectionHost> {
    host: Rc<H>,
    observer: Option<H::Observer>,
}

impl<H: IntersectionHost> VisibilityTracker<H> {
    /// With reduced motion, or without observation support, every section is
    /// published as visible once and nothing is observed.
    pub fn start(host: Rc<H>, reduced_motion: bool, publish: Rc<dyn Fn(VisibleSections)>) -> Self {
        let total = host.anchor_count();
        if reduced_motion || !host.supported() {
            publish(VisibleSections::all(total));
            return Self {
                host,
                observer: None,
            };
        }

        // Clears any set an earlier run left behind.
        let mut current = VisibleSections::none(total);
        publish(current.clone());
        let on_batch = {
            let publish = publish.clone();
            Box::new(move |batch: Vec<Observation>| {
                if current.apply(&batch, VISIBILITY_THRESHOLD) {
                    publish(current.clone());
                }
            })
        };
        let observer = host.observe(VISIBILITY_THRESHOLD, on_batch);
        if observer.is_none() {
            log::warn!("intersection observer unavailable, showing all sections");
            publish(VisibleSections::all(total));
        }

        Self { host, observer }
    }

    pub fn is_observing(&self) -> bool {
        self.observer.is_some()
    }
}

impl<H: IntersectionHost> Drop for VisibilityTracker<H> {
    fn drop(&mut self) {
        if let Some(observer) = self.observer.take() {
            self.host.disconnect(observer);
        }
    }
}

pub struct BrowserObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array)>,
}

/// Slots that hold an element, with their position among all slots.
///
/// Empty slots are skipped without shifting the positions of later ones.
pub fn bound_slots<T>(slots: &[Option<T>]) -> impl Iterator<Item = (usize, &T)> {
    slots
        .iter()
        .enumerate()
        .filter_map(|(index, slot)| slot.as_ref().map(|item| (index, item)))
}

/// Browser anchors observed through a single shared `IntersectionObserver`.
///
/// Anchor `i` is section `i`. An unbound anchor stays in place and is never
/// observed.
pub struct BrowserIntersection {
    anchors: Rc<Vec<Option<Element>>>,
}

impl BrowserIntersection {
    pub fn new(anchors: Vec<Option<Element>>) -> Self {
        Self {
            anchors: Rc::new(anchors),
        }
    }
}

impl IntersectionHost for BrowserIntersection {
    type Observer = BrowserObserver;

    fn supported(&self) -> bool {
        web_sys::window()
            .map(|window| {
                Reflect::has(&window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
            })
            .unwrap_or(false)
    }

    fn anchor_count(&self) -> usize {
        self.anchors.len()
    }

    fn observe(
        &self,
        threshold: f64,
        mut on_batch: Box<dyn FnMut(Vec<Observation>)>,
    ) -> Option<Self::Observer> {
        let anchors = self.anchors.clone();
        let callback = Closure::wrap(Box::new(move |entries: Array| {
            let batch = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .filter_map(|entry| {
                    let target = entry.target();
                    let (index, _) = bound_slots(anchors.as_slice())
                        .find(|(_, anchor)| anchor.is_same_node(Some(target.as_ref())))?;
                    Some(Observation {
                        index,
                        ratio: entry.intersection_ratio(),
                        intersecting: entry.is_intersecting(),
                    })
                })
                .collect();
            on_batch(batch);
        }) as Box<dyn FnMut(Array)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init).ok()?;
        for (_, anchor) in bound_slots(self.anchors.as_slice()) {
            observer.observe(anchor);
        }

        Some(BrowserObserver {
            observer,
            _callback: callback,
        })
    }

    fn disconnect(&self, observer: Self::Observer) {
        observer.observer.disconnect();
    }
}

/// Tracks which of `anchors` are on screen.
///
/// Everything counts as visible when motion is reduced or the browser cannot
/// observe intersections.
#[hook]
pub fn use_visible_sections(anchors: Vec<NodeRef>, reduced_motion: bool) -> VisibleSections {
    let total = anchors.len();
    let visible = use_state_eq(|| {
        if reduced_motion {
            VisibleSections::all(total)
        } else {
            VisibleSections::none(total)
        }
    });

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |(reduced_motion, _)| {
                let elements: Vec<Option<Element>> = anchors
                    .iter()
                    .enumerate()
                    .map(|(index, anchor)| {
                        let element = anchor.cast::<Element>();
                        if element.is_none() {
                            log::warn!("section anchor {} is not mounted", index);
                        }
                        element
                    })
                    .collect();
                let tracker = VisibilityTracker::start(
                    Rc::new(BrowserIntersection::new(elements)),
                    *reduced_motion,
                    Rc::new(move |sections| visible.set(sections)),
                );
                move || drop(tracker)
            },
            (reduced_motion, total),
        );
    }

    (*visible).clone()
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;

    fn seen(index: usize, ratio: f64) -> Observation {
        Observation {
            index,
            ratio,
            intersecting: ratio > 0.0,
        }
    }

    struct FakeIntersection {
        anchors: usize,
        supported: bool,
        on_batch: RefCell<Option<Box<dyn FnMut(Vec<Observation>)>>>,
        observe_calls: Cell<usize>,
        disconnects: Cell<usize>,
    }

    impl FakeIntersection {
        fn new(anchors: usize, supported: bool) -> Rc<Self> {
            Rc::new(Self {
                anchors,
                supported,
                on_batch: RefCell::new(None),
                observe_calls: Cell::new(0),
                disconnects: Cell::new(0),
            })
        }

        fn fire(&self, batch: Vec<Observation>) {
            if let Some(on_batch) = self.on_batch.borrow_mut().as_mut() {
                on_batch(batch);
            }
        }
    }

    impl IntersectionHost for FakeIntersection {
        type Observer = ();

        fn supported(&self) -> bool {
            self.supported
        }

        fn anchor_count(&self) -> usize {
            self.anchors
        }

        fn observe(&self, threshold: f64, on_batch: Box<dyn FnMut(Vec<Observation>)>) -> Option<()> {
            assert_eq!(threshold, 0.3);
            self.observe_calls.set(self.observe_calls.get() + 1);
            *self.on_batch.borrow_mut() = Some(on_batch);
            Some(())
        }

        fn disconnect(&self, _observer: ()) {
            self.disconnects.set(self.disconnects.get() + 1);
            self.on_batch.borrow_mut().take();
        }
    }

    fn recorder() -> (Rc<RefCell<Vec<VisibleSections>>>, Rc<dyn Fn(VisibleSections)>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        (seen, Rc::new(move |sections| sink.borrow_mut().push(sections)))
    }

    #[test]
    fn threshold_decides_membership() {
        let mut sections = VisibleSections::none(4);
        assert!(sections.apply(&[seen(0, 0.5), seen(1, 0.29), seen(2, 0.3)], 0.3));
        assert_eq!(sections.iter().collect::<Vec<_>>(), vec![0, 2]);

        assert!(sections.apply(&[seen(0, 0.1)], 0.3));
        assert_eq!(sections.iter().collect::<Vec<_>>(), vec![2]);
        assert_eq!(sections.max_visible(), Some(2));
    }

    #[test]
    fn non_intersecting_entry_is_never_visible() {
        let mut sections = VisibleSections::none(2);
        let stale = Observation {
            index: 1,
            ratio: 0.8,
            intersecting: false,
        };
        assert!(!sections.apply(&[stale], 0.3));
        assert!(sections.is_empty());
    }

    #[test]
    fn unchanged_membership_reports_no_change() {
        let mut sections = VisibleSections::none(3);
        sections.apply(&[seen(1, 0.9)], 0.3);
        assert!(!sections.apply(&[seen(1, 0.6), seen(2, 0.0)], 0.3));
    }

    #[test]
    fn out_of_range_indices_are_ignored() {
        let mut sections = VisibleSections::none(2);
        assert!(!sections.apply(&[seen(5, 1.0)], 0.3));
        assert_eq!(sections.len(), 0);
        assert_eq!(sections.total(), 2);
    }

    #[test]
    fn tracks_intersecting_anchors_only() {
        let host = FakeIntersection::new(4, true);
        let (published, publish) = recorder();
        let tracker = VisibilityTracker::start(host.clone(), false, publish);
        assert!(tracker.is_observing());

        host.fire(vec![seen(0, 0.6), seen(1, 0.0), seen(2, 0.45), seen(3, 0.1)]);

        let published = published.borrow();
        assert_eq!(published.len(), 2);
        assert!(published[0].is_empty());
        assert_eq!(published[1].iter().collect::<Vec<_>>(), vec![0, 2]);
    }

    #[test]
    fn observing_starts_from_an_empty_set() {
        let host = FakeIntersection::new(4, true);
        let (published, publish) = recorder();
        let _tracker = VisibilityTracker::start(host, false, publish);

        assert_eq!(*published.borrow(), vec![VisibleSections::none(4)]);
    }

    #[test]
    fn leaving_reduced_motion_off_screen_clears_visible_set() {
        let host = FakeIntersection::new(4, true);
        let (published, publish) = recorder();

        let reduced = VisibilityTracker::start(host.clone(), true, publish.clone());
        assert_eq!(published.borrow().last(), Some(&VisibleSections::all(4)));
        drop(reduced);

        let _tracker = VisibilityTracker::start(host.clone(), false, publish);
        host.fire(vec![seen(0, 0.0), seen(1, 0.0), seen(2, 0.0), seen(3, 0.0)]);

        let published = published.borrow();
        let last = published.last().cloned().unwrap_or_else(|| VisibleSections::all(4));
        assert_eq!(last.len(), 0);
        assert_eq!(last.total(), 4);
    }

    #[test]
    fn republishes_only_on_membership_change() {
        let host = FakeIntersection::new(4, true);
        let (published, publish) = recorder();
        let _tracker = VisibilityTracker::start(host.clone(), false, publish);

        host.fire(vec![seen(1, 0.5)]);
        host.fire(vec![seen(1, 0.7)]);
        host.fire(vec![seen(3, 0.05)]);
        assert_eq!(published.borrow().len(), 2);

        host.fire(vec![seen(1, 0.0)]);
        assert_eq!(published.borrow().len(), 3);
        assert!(published.borrow()[2].is_empty());
    }

    #[test]
    fn reduced_motion_shows_everything_without_observing() {
        let host = FakeIntersection::new(4, true);
        let (published, publish) = recorder();
        let tracker = VisibilityTracker::start(host.clone(), true, publish);

        assert!(!tracker.is_observing());
        assert_eq!(host.observe_calls.get(), 0);
        assert_eq!(*published.borrow(), vec![VisibleSections::all(4)]);

        drop(tracker);
        assert_eq!(host.disconnects.get(), 0);
    }

    #[test]
    fn missing_capability_shows_everything() {
        let host = FakeIntersection::new(3, false);
        let (published, publish) = recorder();
        let _tracker = VisibilityTracker::start(host.clone(), false, publish);

        assert_eq!(host.observe_calls.get(), 0);
        assert_eq!(published.borrow()[0].len(), 3);
    }

    #[test]
    fn empty_slots_keep_later_positions() {
        let slots = [Some("hook"), None, Some("trap"), Some("truth")];
        let bound: Vec<_> = bound_slots(&slots[..]).collect();
        assert_eq!(bound, vec![(0, &"hook"), (2, &"trap"), (3, &"truth")]);
        assert!(bound_slots::<&str>(&[None, None]).next().is_none());
    }

    #[test]
    fn teardown_disconnects_observer() {
        let host = FakeIntersection::new(4, true);
        let (published, publish) = recorder();
        let tracker = VisibilityTracker::start(host.clone(), false, publish);

        drop(tracker);
        assert_eq!(host.disconnects.get(), 1);

        host.fire(vec![seen(0, 1.0)]);
        assert_eq!(*published.borrow(), vec![VisibleSections::none(4)]);
    }
}
