use gloo::events::{EventListener, EventListenerOptions};
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{BeforeUnloadEvent, Event, EventTarget, KeyboardEvent, MouseEvent};

use vitrine_core::{KeyCombo, PageEvent, PageHost, PageSignal, SignalHandler, Verdict};

const LEAVE_PROMPT: &str = "Tem certeza que deseja sair?";

pub(crate) struct WebHost;

impl PageHost for WebHost {
    type Listener = Option<EventListener>;
    type Timer = Timeout;

    fn listen(&self, event: PageEvent, handler: SignalHandler) -> Self::Listener {
        let target = event_target(event)?;
        let listener = EventListener::new_with_options(
            &target,
            event.dom_name(),
            EventListenerOptions::enable_prevent_default(),
            move |raw: &Event| {
                let Some(signal) = signal_from_event(event, raw) else {
                    return;
                };
                apply_verdict(raw, handler(&signal));
            },
        );
        Some(listener)
    }

    fn set_timeout(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Timer {
        Timeout::new(delay_ms, callback)
    }

    fn open_external(&self, url: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        // A blocked popup still returns Ok(None); the modal covers that case.
        if window.open_with_url_and_target(url, "_blank").is_err() {
            gloo::console::warn!("page: open failed", url);
        }
    }
}

fn event_target(event: PageEvent) -> Option<EventTarget> {
    let window = web_sys::window()?;
    match event {
        PageEvent::MouseLeave => {
            let document = window.document()?;
            Some(document.into())
        }
        PageEvent::ContextMenu | PageEvent::KeyDown | PageEvent::BeforeUnload => Some(window.into()),
    }
}

fn signal_from_event(event: PageEvent, raw: &Event) -> Option<PageSignal> {
    match event {
        PageEvent::ContextMenu => Some(PageSignal::ContextMenu),
        PageEvent::BeforeUnload => Some(PageSignal::BeforeUnload),
        PageEvent::KeyDown => {
            let key_event = raw.dyn_ref::<KeyboardEvent>()?;
            Some(PageSignal::KeyDown(KeyCombo {
                key: key_event.key(),
                ctrl: key_event.ctrl_key(),
                shift: key_event.shift_key(),
                alt: key_event.alt_key(),
                meta: key_event.meta_key(),
            }))
        }
        PageEvent::MouseLeave => {
            let mouse_event = raw.dyn_ref::<MouseEvent>()?;
            Some(PageSignal::MouseLeave {
                client_y: mouse_event.client_y() as f64,
            })
        }
    }
}

fn apply_verdict(raw: &Event, verdict: Verdict) {
    match verdict {
        Verdict::Pass => {}
        Verdict::Suppress => raw.prevent_default(),
        Verdict::ConfirmLeave => {
            raw.prevent_default();
            if let Some(unload) = raw.dyn_ref::<BeforeUnloadEvent>() {
                unload.set_return_value(LEAVE_PROMPT);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    use console_error_panic_hook::set_once as set_panic_hook;
    use vitrine_core::{
        mount_for_environment, EngagementMachine, EngagementMount, EnvironmentClass, ModalHook,
        SiteConfig,
    };
    use wasm_bindgen_test::*;
    use web_sys::{EventInit, KeyboardEventInit};

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount_in(environment: EnvironmentClass) -> Option<EngagementMount<WebHost>> {
        let machine = Rc::new(RefCell::new(EngagementMachine::new(&SiteConfig::default())));
        let hook: ModalHook = Rc::new(|_| {});
        mount_for_environment(environment, &Rc::new(WebHost), machine, hook)
    }

    fn mount() -> EngagementMount<WebHost> {
        mount_in(EnvironmentClass::Normal).expect("normal environment mounts")
    }

    fn dispatch_on_window(event: &Event) -> bool {
        let window = web_sys::window().expect("window available");
        window.dispatch_event(event).expect("dispatch event")
    }

    fn cancelable_event(name: &str) -> Event {
        let init = EventInit::new();
        init.set_cancelable(true);
        Event::new_with_event_init_dict(name, &init).expect("create event")
    }

    fn key_event(key: &str, ctrl: bool, shift: bool) -> Event {
        let init = KeyboardEventInit::new();
        init.set_key(key);
        init.set_ctrl_key(ctrl);
        init.set_shift_key(shift);
        init.set_cancelable(true);
        KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init)
            .expect("create keyboard event")
            .into()
    }

    #[wasm_bindgen_test]
    fn context_menu_is_blocked_only_while_mounted() {
        set_panic_hook();
        let mount = mount();
        assert!(!dispatch_on_window(&cancelable_event("contextmenu")));
        drop(mount);
        assert!(dispatch_on_window(&cancelable_event("contextmenu")));
    }

    #[wasm_bindgen_test]
    fn restricted_environment_leaves_page_alone() {
        set_panic_hook();
        let mount = mount_in(EnvironmentClass::RestrictedInAppBrowser);
        assert!(mount.is_none());
        assert!(dispatch_on_window(&cancelable_event("contextmenu")));
        assert!(dispatch_on_window(&key_event("F12", false, false)));
    }

    #[wasm_bindgen_test]
    fn inspection_keys_are_blocked_and_typing_is_not() {
        set_panic_hook();
        let _mount = mount();
        assert!(!dispatch_on_window(&key_event("F12", false, false)));
        assert!(!dispatch_on_window(&key_event("I", true, true)));
        assert!(dispatch_on_window(&key_event("a", false, false)));
        assert!(dispatch_on_window(&key_event("c", true, false)));
    }

    #[wasm_bindgen_test]
    fn remount_leaves_a_single_listener() {
        set_panic_hook();
        let first = mount();
        drop(first);
        let second = mount();
        let calls = Rc::new(RefCell::new(0u32));
        let counter = calls.clone();
        let window = web_sys::window().expect("window available");
        let _observer = EventListener::new(&window, "contextmenu", move |event| {
            if event.default_prevented() {
                *counter.borrow_mut() += 1;
            }
        });
        assert!(!dispatch_on_window(&cancelable_event("contextmenu")));
        assert_eq!(*calls.borrow(), 1);
        drop(second);
        assert!(dispatch_on_window(&cancelable_event("contextmenu")));
        assert_eq!(*calls.borrow(), 1);
    }
}
