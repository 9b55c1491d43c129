use std::cell::RefCell;
use std::rc::Rc;

use crate::engagement::{Effect, EngagementMachine, ModalState};
use crate::environment::EnvironmentClass;
use crate::shortcuts::KeyCombo;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageEvent {
    ContextMenu,
    KeyDown,
    BeforeUnload,
    MouseLeave,
}

pub const PAGE_EVENTS: [PageEvent; 4] = [
    PageEvent::ContextMenu,
    PageEvent::KeyDown,
    PageEvent::BeforeUnload,
    PageEvent::MouseLeave,
];

impl PageEvent {
    pub fn dom_name(self) -> &'static str {
        match self {
            PageEvent::ContextMenu => "contextmenu",
            PageEvent::KeyDown => "keydown",
            PageEvent::BeforeUnload => "beforeunload",
            PageEvent::MouseLeave => "mouseleave",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum PageSignal {
    ContextMenu,
    KeyDown(KeyCombo),
    BeforeUnload,
    MouseLeave { client_y: f64 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    Suppress,
    ConfirmLeave,
}

pub type SignalHandler = Rc<dyn Fn(&PageSignal) -> Verdict>;
pub type ModalHook = Rc<dyn Fn(ModalState)>;

pub trait PageHost: 'static {
    type Listener;
    type Timer;

    fn listen(&self, event: PageEvent, handler: SignalHandler) -> Self::Listener;

    fn set_timeout(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Timer;

    fn open_external(&self, url: &str);
}

pub fn apply_effects<H: PageHost>(host: &H, effects: &[Effect], on_change: &ModalHook) {
    for effect in effects {
        match effect {
            Effect::OpenExternal(url) => host.open_external(url),
            Effect::ShowModal(_) => on_change(ModalState::Visible),
        }
    }
}

pub struct EngagementMount<H: PageHost> {
    machine: Rc<RefCell<EngagementMachine>>,
    _listeners: Vec<H::Listener>,
    _reveal_timer: H::Timer,
}

impl<H: PageHost> EngagementMount<H> {
    pub fn mount(
        host: &Rc<H>,
        machine: Rc<RefCell<EngagementMachine>>,
        on_change: ModalHook,
    ) -> Self {
        let delay_ms = machine.borrow_mut().mount();
        let listeners = PAGE_EVENTS
            .iter()
            .map(|event| {
                let handler = signal_handler(host, &machine, &on_change);
                host.listen(*event, handler)
            })
            .collect();
        let reveal_timer = {
            let machine = machine.clone();
            let on_change = on_change.clone();
            host.set_timeout(
                delay_ms,
                Box::new(move || {
                    let effect = machine.borrow_mut().fire_reveal_timer();
                    if effect.is_some() {
                        on_change(ModalState::Visible);
                    }
                }),
            )
        };
        Self {
            machine,
            _listeners: listeners,
            _reveal_timer: reveal_timer,
        }
    }

    pub fn machine(&self) -> &Rc<RefCell<EngagementMachine>> {
        &self.machine
    }
}

pub fn mount_for_environment<H: PageHost>(
    environment: EnvironmentClass,
    host: &Rc<H>,
    machine: Rc<RefCell<EngagementMachine>>,
    on_change: ModalHook,
) -> Option<EngagementMount<H>> {
    if environment.is_restricted() {
        return None;
    }
    Some(EngagementMount::mount(host, machine, on_change))
}

impl<H: PageHost> Drop for EngagementMount<H> {
    fn drop(&mut self) {
        self.machine.borrow_mut().unmount();
    }
}

fn signal_handler<H: PageHost>(
    host: &Rc<H>,
    machine: &Rc<RefCell<EngagementMachine>>,
    on_change: &ModalHook,
) -> SignalHandler {
    let host = host.clone();
    let machine = machine.clone();
    let on_change = on_change.clone();
    Rc::new(move |signal: &PageSignal| match signal {
        PageSignal::ContextMenu => {
            if machine.borrow().on_context_menu() {
                Verdict::Suppress
            } else {
                Verdict::Pass
            }
        }
        PageSignal::KeyDown(combo) => {
            if machine.borrow().on_key_down(combo) {
                Verdict::Suppress
            } else {
                Verdict::Pass
            }
        }
        PageSignal::BeforeUnload => {
            if machine.borrow().on_unload_attempt() {
                Verdict::ConfirmLeave
            } else {
                Verdict::Pass
            }
        }
        PageSignal::MouseLeave { client_y } => {
            let effects = machine.borrow_mut().on_pointer_leave(*client_y);
            apply_effects(host.as_ref(), &effects, &on_change);
            Verdict::Pass
        }
    })
}
