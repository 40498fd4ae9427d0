//! Headless open/close controller for trigger + panel disclosures.
//!
//! [`DisclosureController`] owns a two-state machine ([`DisclosureState`]) and closes itself when
//! an interaction lands outside its [`BoundaryRegion`]. The document-level listener is acquired
//! through an [`InteractionSource`] only while the controller is open; the returned handle
//! releases the registration when dropped, so every exit path (toggle, outside interaction,
//! [`DisclosureController::dispose`], or dropping the last controller clone) removes it exactly
//! once.
//!
//! Browser adapters live in [`crate::dom`]. [`InteractionBus`] is a synchronous in-memory source
//! for non-DOM hosts and tests.

use std::{
    cell::{Cell, RefCell},
    collections::BTreeMap,
    rc::{Rc, Weak},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Open/closed state of a disclosure.
pub enum DisclosureState {
    /// Panel hidden, no document listener.
    Closed,
    /// Panel rendered, document listener registered.
    Open,
}

impl Default for DisclosureState {
    fn default() -> Self {
        Self::Closed
    }
}

impl DisclosureState {
    /// Returns `true` for [`DisclosureState::Open`].
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    /// Returns the opposite state.
    pub fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Closed => "closed",
            Self::Open => "open",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Horizontal placement of a disclosure panel relative to its trigger.
pub enum PanelAlign {
    /// Panel's left edge lines up with the trigger's left edge.
    Left,
    /// Panel's right edge lines up with the trigger's right edge.
    Right,
}

impl Default for PanelAlign {
    fn default() -> Self {
        Self::Left
    }
}

impl PanelAlign {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Render slot for a disclosure trigger.
///
/// Either variant activates through the same [`DisclosureController::toggle`] entry point.
pub enum TriggerSlot<C> {
    /// Caller-supplied trigger content.
    Custom(C),
    /// Built-in labelled control.
    Default {
        /// Visible label of the default control.
        label: String,
    },
}

impl<C> TriggerSlot<C> {
    /// Picks custom content when present, otherwise the default control with `label`.
    pub fn resolve(custom: Option<C>, label: impl Into<String>) -> Self {
        match custom {
            Some(content) => Self::Custom(content),
            None => Self::Default {
                label: label.into(),
            },
        }
    }

    /// Returns `true` when the slot carries caller-supplied content.
    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom(_))
    }
}

/// Containment test for the set of elements considered "inside" a disclosure.
pub trait BoundaryRegion<T: ?Sized> {
    /// Returns `true` when `target` lies within the region.
    fn contains(&self, target: &T) -> bool;
}

impl<T: ?Sized, F> BoundaryRegion<T> for F
where
    F: Fn(&T) -> bool,
{
    fn contains(&self, target: &T) -> bool {
        self(target)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Pointer position in layout coordinates.
pub struct Point {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
}

impl Point {
    /// Creates a point.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Axis-aligned rectangle used for hit-testing when no containment primitive exists.
pub struct Rect {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width.
    pub w: i32,
    /// Height.
    pub h: i32,
}

impl Rect {
    /// Creates a rectangle.
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Returns `true` when `point` is inside; the origin edges are inclusive, the far edges are not.
    pub fn contains_point(self, point: Point) -> bool {
        point.x >= self.x
            && point.y >= self.y
            && point.x < self.x.saturating_add(self.w)
            && point.y < self.y.saturating_add(self.h)
    }
}

impl BoundaryRegion<Point> for Rect {
    fn contains(&self, target: &Point) -> bool {
        self.contains_point(*target)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Union of rectangles (typically trigger + panel) hit-tested as one region.
pub struct RectRegion {
    rects: Vec<Rect>,
}

impl RectRegion {
    /// Creates a region from the supplied rectangles.
    pub fn new(rects: impl IntoIterator<Item = Rect>) -> Self {
        Self {
            rects: rects.into_iter().collect(),
        }
    }

    /// Adds a rectangle to the region.
    pub fn push(&mut self, rect: Rect) {
        self.rects.push(rect);
    }
}

impl BoundaryRegion<Point> for RectRegion {
    fn contains(&self, target: &Point) -> bool {
        self.rects.iter().any(|rect| rect.contains_point(*target))
    }
}

/// Handler invoked for each interaction-start event.
pub type InteractionHandler<T: ?Sized> = Rc<dyn Fn(&T)>;

/// Document-wide source of "interaction started" notifications.
pub trait InteractionSource {
    /// Event target type handed to subscribers.
    type Target: ?Sized;
    /// Registration handle; dropping it removes the subscription.
    type Handle;

    /// Registers `handler` until the returned handle is dropped.
    fn subscribe(&self, handler: InteractionHandler<Self::Target>) -> Self::Handle;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
struct ListenerToken(u64);

struct BusState<T: ?Sized> {
    next_token: u64,
    by_token: BTreeMap<ListenerToken, InteractionHandler<T>>,
}

/// Synchronous in-memory [`InteractionSource`].
pub struct InteractionBus<T: ?Sized> {
    state: Rc<RefCell<BusState<T>>>,
}

impl<T: ?Sized> Clone for InteractionBus<T> {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
        }
    }
}

impl<T: ?Sized> Default for InteractionBus<T> {
    fn default() -> Self {
        Self {
            state: Rc::new(RefCell::new(BusState {
                next_token: 0,
                by_token: BTreeMap::new(),
            })),
        }
    }
}

impl<T: ?Sized> InteractionBus<T> {
    /// Creates an empty bus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live subscriptions.
    pub fn listener_count(&self) -> usize {
        self.state.borrow().by_token.len()
    }

    /// Delivers `target` to every live subscriber and returns how many were invoked.
    ///
    /// Handlers may release their own or other registrations while running; a handler removed
    /// mid-dispatch is skipped.
    pub fn dispatch(&self, target: &T) -> usize {
        let snapshot = self
            .state
            .borrow()
            .by_token
            .iter()
            .map(|(token, handler)| (*token, Rc::clone(handler)))
            .collect::<Vec<_>>();

        let mut invoked = 0;
        for (token, handler) in snapshot {
            if !self.state.borrow().by_token.contains_key(&token) {
                continue;
            }
            handler(target);
            invoked += 1;
        }
        invoked
    }

    fn register(&self, handler: InteractionHandler<T>) -> ListenerToken {
        let mut state = self.state.borrow_mut();
        state.next_token = state.next_token.saturating_add(1);
        let token = ListenerToken(state.next_token);
        state.by_token.insert(token, handler);
        token
    }

    fn unregister(&self, token: ListenerToken) {
        let removed = self.state.borrow_mut().by_token.remove(&token);
        drop(removed);
    }
}

/// Drop-based registration handle for [`InteractionBus`].
pub struct InteractionListenerHandle<T: ?Sized> {
    bus: InteractionBus<T>,
    token: ListenerToken,
    active: Cell<bool>,
}

impl<T: ?Sized> InteractionListenerHandle<T> {
    /// Removes the subscription if it is still active.
    pub fn release(&self) {
        if self.active.replace(false) {
            self.bus.unregister(self.token);
        }
    }
}

impl<T: ?Sized> Drop for InteractionListenerHandle<T> {
    fn drop(&mut self) {
        self.release();
    }
}

impl<T: ?Sized> InteractionSource for InteractionBus<T> {
    type Target = T;
    type Handle = InteractionListenerHandle<T>;

    fn subscribe(&self, handler: InteractionHandler<T>) -> Self::Handle {
        let token = self.register(handler);
        InteractionListenerHandle {
            bus: self.clone(),
            token,
            active: Cell::new(true),
        }
    }
}

type StateObserver = Rc<dyn Fn(DisclosureState)>;

struct ControllerInner<S: InteractionSource> {
    state: Cell<DisclosureState>,
    source: S,
    boundary: Box<dyn BoundaryRegion<S::Target>>,
    listener: RefCell<Option<S::Handle>>,
    observer: RefCell<Option<StateObserver>>,
}

/// Open/close controller with outside-interaction dismissal.
///
/// Clones share one state machine. The document listener is held only while open.
pub struct DisclosureController<S: InteractionSource> {
    inner: Rc<ControllerInner<S>>,
}

impl<S: InteractionSource> Clone for DisclosureController<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<S> DisclosureController<S>
where
    S: InteractionSource + 'static,
    S::Target: 'static,
{
    /// Creates a closed controller listening on `source` and hit-testing against `boundary`.
    pub fn new(source: S, boundary: impl BoundaryRegion<S::Target> + 'static) -> Self {
        Self {
            inner: Rc::new(ControllerInner {
                state: Cell::new(DisclosureState::Closed),
                source,
                boundary: Box::new(boundary),
                listener: RefCell::new(None),
                observer: RefCell::new(None),
            }),
        }
    }

    /// Current state.
    pub fn state(&self) -> DisclosureState {
        self.inner.state.get()
    }

    /// Returns `true` while open.
    pub fn is_open(&self) -> bool {
        self.state().is_open()
    }

    /// Whether the panel should be rendered.
    pub fn panel_visible(&self) -> bool {
        self.is_open()
    }

    /// Whether a document-level listener is currently registered.
    pub fn is_listening(&self) -> bool {
        self.inner.listener.borrow().is_some()
    }

    /// Flips the state.
    pub fn toggle(&self) {
        let next = self.state().toggled();
        Self::transition(&self.inner, next);
    }

    /// Opens the panel; no-op when already open.
    pub fn open(&self) {
        Self::transition(&self.inner, DisclosureState::Open);
    }

    /// Closes the panel; no-op when already closed.
    pub fn close(&self) {
        Self::transition(&self.inner, DisclosureState::Closed);
    }

    /// Installs the observer called after every transition, replacing any previous one.
    pub fn on_change(&self, observer: impl Fn(DisclosureState) + 'static) {
        *self.inner.observer.borrow_mut() = Some(Rc::new(observer));
    }

    /// Unmount path: resets to closed and releases the listener without notifying the observer.
    pub fn dispose(&self) {
        self.inner.state.set(DisclosureState::Closed);
        let observer = self.inner.observer.borrow_mut().take();
        let listener = self.inner.listener.borrow_mut().take();
        drop(observer);
        drop(listener);
    }

    /// Applies the outside-dismissal rule to one interaction target.
    pub fn handle_interaction(&self, target: &S::Target) {
        Self::dismiss_if_outside(&self.inner, target);
    }

    fn transition(inner: &Rc<ControllerInner<S>>, next: DisclosureState) {
        if inner.state.get() == next {
            return;
        }
        inner.state.set(next);

        match next {
            DisclosureState::Open => {
                let handle = inner
                    .source
                    .subscribe(Self::outside_handler(Rc::downgrade(inner)));
                let previous = inner.listener.borrow_mut().replace(handle);
                drop(previous);
            }
            DisclosureState::Closed => {
                let released = inner.listener.borrow_mut().take();
                drop(released);
            }
        }

        let observer = inner.observer.borrow().clone();
        if let Some(observer) = observer {
            observer(next);
        }
    }

    fn dismiss_if_outside(inner: &Rc<ControllerInner<S>>, target: &S::Target) {
        if inner.state.get().is_open() && !inner.boundary.contains(target) {
            Self::transition(inner, DisclosureState::Closed);
        }
    }

    fn outside_handler(inner: Weak<ControllerInner<S>>) -> InteractionHandler<S::Target> {
        Rc::new(move |target: &S::Target| {
            if let Some(inner) = inner.upgrade() {
                Self::dismiss_if_outside(&inner, target);
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use pretty_assertions::assert_eq;

    use super::*;

    fn inside_dropdown(target: &str) -> bool {
        target.starts_with("dropdown")
    }

    fn controller() -> (InteractionBus<str>, DisclosureController<InteractionBus<str>>) {
        let bus = InteractionBus::<str>::new();
        let controller = DisclosureController::new(bus.clone(), inside_dropdown);
        (bus, controller)
    }

    #[test]
    fn starts_closed_without_listener() {
        let (bus, controller) = controller();
        assert_eq!(controller.state(), DisclosureState::Closed);
        assert!(!controller.panel_visible());
        assert!(!controller.is_listening());
        assert_eq!(bus.listener_count(), 0);
    }

    #[test]
    fn toggle_alternates_starting_from_closed() {
        let (bus, controller) = controller();
        let mut expected = DisclosureState::Closed;
        for _ in 0..7 {
            controller.toggle();
            expected = expected.toggled();
            assert_eq!(controller.state(), expected);
            assert_eq!(bus.listener_count(), usize::from(expected.is_open()));
        }
        assert_eq!(controller.state(), DisclosureState::Open);
    }

    #[test]
    fn outside_interaction_closes_and_releases_listener() {
        let (bus, controller) = controller();
        controller.toggle();
        assert_eq!(bus.dispatch("body"), 1);
        assert_eq!(controller.state(), DisclosureState::Closed);
        assert_eq!(bus.listener_count(), 0);
    }

    #[test]
    fn inside_interaction_keeps_panel_open() {
        let (bus, controller) = controller();
        controller.toggle();
        bus.dispatch("dropdown/panel/item-2");
        bus.dispatch("dropdown/trigger");
        assert_eq!(controller.state(), DisclosureState::Open);
        assert_eq!(bus.listener_count(), 1);
    }

    #[test]
    fn closed_controller_ignores_outside_events() {
        let (bus, controller) = controller();
        let seen = Rc::new(RefCell::new(Vec::new()));
        controller.on_change({
            let seen = Rc::clone(&seen);
            move |state| seen.borrow_mut().push(state)
        });

        assert_eq!(bus.dispatch("body"), 0);
        assert_eq!(controller.state(), DisclosureState::Closed);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn dropping_open_controller_removes_listener() {
        let (bus, controller) = controller();
        let calls = Rc::new(Cell::new(0));
        controller.on_change({
            let calls = Rc::clone(&calls);
            move |_| calls.set(calls.get() + 1)
        });
        controller.open();
        assert_eq!(bus.listener_count(), 1);

        drop(controller);
        assert_eq!(bus.listener_count(), 0);
        assert_eq!(bus.dispatch("body"), 0);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn dispose_resets_without_notifying() {
        let (bus, controller) = controller();
        let seen = Rc::new(RefCell::new(Vec::new()));
        controller.on_change({
            let seen = Rc::clone(&seen);
            move |state| seen.borrow_mut().push(state)
        });
        controller.open();

        let mounted_elsewhere = controller.clone();
        controller.dispose();

        assert_eq!(mounted_elsewhere.state(), DisclosureState::Closed);
        assert!(!mounted_elsewhere.is_listening());
        assert_eq!(bus.dispatch("body"), 0);
        assert_eq!(*seen.borrow(), vec![DisclosureState::Open]);
    }

    #[test]
    fn end_to_end_trigger_then_inside_then_outside() {
        let (bus, controller) = controller();
        assert!(!controller.panel_visible());

        controller.toggle();
        assert!(controller.panel_visible());

        bus.dispatch("dropdown/panel/child");
        assert!(controller.panel_visible());

        bus.dispatch("document/body");
        assert_eq!(controller.state(), DisclosureState::Closed);
        assert!(!controller.panel_visible());
        assert!(!controller.is_listening());
    }

    #[test]
    fn direct_toggle_closes_and_removes_listener() {
        let (bus, controller) = controller();
        controller.toggle();
        assert!(controller.is_listening());

        controller.toggle();
        assert_eq!(controller.state(), DisclosureState::Closed);
        assert!(!controller.is_listening());
        assert_eq!(bus.listener_count(), 0);
    }

    #[test]
    fn reopening_after_dismissal_registers_single_listener() {
        let (bus, controller) = controller();
        for _ in 0..3 {
            controller.open();
            controller.open();
            assert_eq!(bus.listener_count(), 1);
            bus.dispatch("header");
            assert_eq!(bus.listener_count(), 0);
        }
    }

    #[test]
    fn observer_sees_each_transition_once_in_order() {
        let (bus, controller) = controller();
        let seen = Rc::new(RefCell::new(Vec::new()));
        controller.on_change({
            let seen = Rc::clone(&seen);
            move |state| seen.borrow_mut().push(state)
        });

        controller.toggle();
        bus.dispatch("dropdown/panel");
        bus.dispatch("footer");
        bus.dispatch("footer");
        controller.open();
        controller.close();

        assert_eq!(
            *seen.borrow(),
            vec![
                DisclosureState::Open,
                DisclosureState::Closed,
                DisclosureState::Open,
                DisclosureState::Closed,
            ]
        );
    }

    #[test]
    fn only_dismisses_the_controller_clicked_outside_of() {
        let bus = InteractionBus::<str>::new();
        let account = DisclosureController::new(bus.clone(), |t: &str| t.starts_with("account"));
        let currency = DisclosureController::new(bus.clone(), |t: &str| t.starts_with("currency"));
        account.open();
        currency.open();
        assert_eq!(bus.listener_count(), 2);

        bus.dispatch("account/panel/orders");
        assert!(account.is_open());
        assert!(!currency.is_open());
        assert_eq!(bus.listener_count(), 1);
    }

    #[test]
    fn rect_region_hit_tests_trigger_and_panel_together() {
        let trigger = Rect::new(100, 10, 80, 24);
        let panel = Rect::new(100, 34, 160, 120);
        let region = RectRegion::new([trigger, panel]);

        assert!(region.contains(&Point::new(100, 10)));
        assert!(region.contains(&Point::new(259, 153)));
        assert!(!region.contains(&Point::new(260, 100)));
        assert!(!region.contains(&Point::new(190, 20)));
        assert!(!region.contains(&Point::new(99, 40)));
    }

    #[test]
    fn rect_region_drives_dismissal_for_pointer_hosts() {
        let bus = InteractionBus::<Point>::new();
        let mut region = RectRegion::default();
        region.push(Rect::new(0, 0, 40, 20));
        region.push(Rect::new(0, 20, 120, 200));
        let controller = DisclosureController::new(bus.clone(), region);

        controller.toggle();
        bus.dispatch(&Point::new(60, 150));
        assert!(controller.is_open());
        bus.dispatch(&Point::new(300, 5));
        assert!(!controller.is_open());
    }

    #[test]
    fn trigger_slot_prefers_custom_content() {
        let custom = TriggerSlot::resolve(Some("avatar"), "Account");
        let fallback = TriggerSlot::<&str>::resolve(None, "Account");

        assert_eq!(custom, TriggerSlot::Custom("avatar"));
        assert!(custom.is_custom());
        assert_eq!(
            fallback,
            TriggerSlot::Default {
                label: "Account".to_string()
            }
        );
    }

    #[test]
    fn tokens_are_stable() {
        assert_eq!(DisclosureState::Open.token(), "open");
        assert_eq!(DisclosureState::Closed.token(), "closed");
        assert_eq!(PanelAlign::Left.token(), "left");
        assert_eq!(PanelAlign::Right.token(), "right");
        assert_eq!(PanelAlign::default(), PanelAlign::Left);
    }
}
