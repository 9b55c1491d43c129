use std::rc::Rc;

use yew::prelude::*;

use vitrine_core::{
    mount_for_environment, Effect, EngagementMachine, EnvironmentClass, ModalHook, ModalState,
    PageHost, SiteConfig, CATALOG_ROWS,
};

use crate::page_host::WebHost;
use crate::row::VideoRow;
use crate::views::{Footer, Hero, Navbar, RevealModal};

#[derive(Properties, PartialEq)]
pub(crate) struct StorefrontProps {
    pub(crate) config: Rc<SiteConfig>,
    pub(crate) environment: EnvironmentClass,
}

#[function_component(Storefront)]
pub(crate) fn storefront(props: &StorefrontProps) -> Html {
    let host = use_memo((), |_| WebHost);
    let machine = {
        let config = props.config.clone();
        use_mut_ref(move || EngagementMachine::new(&config))
    };
    let modal = use_state(|| ModalState::Hidden);

    {
        let host = host.clone();
        let machine = machine.clone();
        let modal = modal.clone();
        use_effect_with(props.environment, move |environment| {
            let on_change: ModalHook = {
                let machine = machine.clone();
                Rc::new(move |state| {
                    let reveals = machine.borrow().reveal_count();
                    gloo::console::log!("engagement: modal", format!("{state:?}"), reveals);
                    modal.set(state);
                })
            };
            let mount = mount_for_environment(*environment, &host, machine, on_change);
            if mount.is_some() {
                gloo::console::log!("engagement: listeners registered");
            } else {
                gloo::console::log!("engagement: skipped", environment.label());
            }
            move || {
                if mount.is_some() {
                    drop(mount);
                    gloo::console::log!("engagement: listeners released");
                }
            }
        });
    }

    let on_redirect = {
        let host = host.clone();
        let machine = machine.clone();
        Callback::from(move |_: ()| {
            if let Effect::OpenExternal(url) = machine.borrow().redirect() {
                host.open_external(&url);
            }
        })
    };

    let on_dismiss = {
        let machine = machine.clone();
        let modal = modal.clone();
        Callback::from(move |_: ()| {
            let dismissed = machine.borrow_mut().dismiss();
            if dismissed {
                let count = machine.borrow().dismiss_count();
                gloo::console::log!("engagement: dismissed", count);
                modal.set(ModalState::Hidden);
            }
        })
    };

    let grace_ms = props.config.drag_grace_ms;
    let rows: Html = CATALOG_ROWS
        .iter()
        .map(|row| {
            html! {
                <VideoRow
                    key={row.title}
                    row={*row}
                    {grace_ms}
                    on_redirect={on_redirect.clone()}
                />
            }
        })
        .collect();

    html! {
        <div class="storefront">
            <Navbar />
            <main>
                <Hero on_redirect={on_redirect.clone()} />
                <div class="rows">{rows}</div>
            </main>
            <Footer on_redirect={on_redirect.clone()} />
            if *modal == ModalState::Visible {
                <RevealModal {on_redirect} {on_dismiss} />
            }
        </div>
    }
}
