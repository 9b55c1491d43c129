use std::cell::RefCell;
use std::rc::Rc;

use vitrine_core::{EnvironmentClass, SiteConfig};

use crate::site_config;

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct BootContext {
    pub(crate) config: Rc<SiteConfig>,
    pub(crate) environment: EnvironmentClass,
}

thread_local! {
    static BOOT_CONTEXT: RefCell<Option<BootContext>> = RefCell::new(None);
}

pub(crate) fn set_boot_context(context: BootContext) {
    BOOT_CONTEXT.with(|slot| {
        *slot.borrow_mut() = Some(context);
    });
}

pub(crate) fn boot_context() -> BootContext {
    BOOT_CONTEXT
        .with(|slot| slot.borrow().clone())
        .unwrap_or_else(site_config::load_boot_context)
}
