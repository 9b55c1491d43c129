#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use vitrine_core::{ModalHook, ModalState, PageEvent, PageHost, PageSignal, SignalHandler, Verdict};

type WeakHandler = Weak<dyn Fn(&PageSignal) -> Verdict>;

struct PendingTimer {
    due_ms: u64,
    cancelled: Rc<Cell<bool>>,
    callback: Box<dyn FnOnce()>,
}

/// In-memory page with a logical clock. Listener handles own their handler;
/// the page only keeps weak references, so dropping a handle unregisters it.
pub struct FakePage {
    now_ms: Cell<u64>,
    listeners: RefCell<Vec<(PageEvent, WeakHandler)>>,
    timers: RefCell<Vec<PendingTimer>>,
    opened: RefCell<Vec<String>>,
}

pub struct FakeListener {
    _handler: SignalHandler,
}

pub struct FakeTimer {
    cancelled: Rc<Cell<bool>>,
}

impl Drop for FakeTimer {
    fn drop(&mut self) {
        self.cancelled.set(true);
    }
}

impl FakePage {
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            now_ms: Cell::new(0),
            listeners: RefCell::new(Vec::new()),
            timers: RefCell::new(Vec::new()),
            opened: RefCell::new(Vec::new()),
        })
    }

    pub fn active_listeners(&self, event: PageEvent) -> usize {
        self.listeners
            .borrow()
            .iter()
            .filter(|(kind, handler)| *kind == event && handler.strong_count() > 0)
            .count()
    }

    pub fn total_listeners(&self) -> usize {
        self.listeners
            .borrow()
            .iter()
            .filter(|(_, handler)| handler.strong_count() > 0)
            .count()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers
            .borrow()
            .iter()
            .filter(|timer| !timer.cancelled.get())
            .count()
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened.borrow().clone()
    }

    pub fn dispatch(&self, signal: PageSignal) -> Vec<Verdict> {
        let event = event_of(&signal);
        let handlers: Vec<SignalHandler> = self
            .listeners
            .borrow()
            .iter()
            .filter(|(kind, _)| *kind == event)
            .filter_map(|(_, handler)| handler.upgrade())
            .collect();
        handlers.iter().map(|handler| handler(&signal)).collect()
    }

    pub fn advance(&self, ms: u64) {
        let now = self.now_ms.get() + ms;
        self.now_ms.set(now);
        loop {
            let due = {
                let mut timers = self.timers.borrow_mut();
                timers.retain(|timer| !timer.cancelled.get());
                let index = timers.iter().position(|timer| timer.due_ms <= now);
                index.map(|index| timers.remove(index))
            };
            let Some(timer) = due else {
                break;
            };
            (timer.callback)();
        }
    }
}

impl PageHost for FakePage {
    type Listener = FakeListener;
    type Timer = FakeTimer;

    fn listen(&self, event: PageEvent, handler: SignalHandler) -> Self::Listener {
        self.listeners
            .borrow_mut()
            .push((event, Rc::downgrade(&handler)));
        FakeListener { _handler: handler }
    }

    fn set_timeout(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Timer {
        let cancelled = Rc::new(Cell::new(false));
        self.timers.borrow_mut().push(PendingTimer {
            due_ms: self.now_ms.get() + delay_ms as u64,
            cancelled: cancelled.clone(),
            callback,
        });
        FakeTimer { cancelled }
    }

    fn open_external(&self, url: &str) {
        self.opened.borrow_mut().push(url.to_string());
    }
}

fn event_of(signal: &PageSignal) -> PageEvent {
    match signal {
        PageSignal::ContextMenu => PageEvent::ContextMenu,
        PageSignal::KeyDown(_) => PageEvent::KeyDown,
        PageSignal::BeforeUnload => PageEvent::BeforeUnload,
        PageSignal::MouseLeave { .. } => PageEvent::MouseLeave,
    }
}

/// Records every modal change pushed to the view.
pub fn recording_hook() -> (ModalHook, Rc<RefCell<Vec<ModalState>>>) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    let hook: ModalHook = Rc::new(move |state| sink.borrow_mut().push(state));
    (hook, seen)
}
