use std::rc::Rc;

use vitrine_core::{classify_user_agent, EnvironmentClass, SiteConfig};

use crate::app_runtime::BootContext;

pub(crate) fn load_boot_context() -> BootContext {
    let config = load_site_config();
    let environment = detect_environment(&config);
    BootContext {
        config: Rc::new(config),
        environment,
    }
}

pub(crate) fn load_site_config() -> SiteConfig {
    let search = location_search().unwrap_or_default();
    let (config, errors) = SiteConfig::from_query(&search);
    for err in errors {
        gloo::console::warn!("config: query key ignored", err.to_string());
    }
    config
}

pub(crate) fn detect_environment(config: &SiteConfig) -> EnvironmentClass {
    let user_agent = user_agent();
    let detected = classify_user_agent(user_agent.as_deref());
    let environment = config.environment(detected);
    if environment != detected {
        gloo::console::log!(
            "config: environment forced",
            detected.label(),
            environment.label()
        );
    }
    environment
}

fn user_agent() -> Option<String> {
    let window = web_sys::window()?;
    window.navigator().user_agent().ok()
}

fn location_search() -> Option<String> {
    let window = web_sys::window()?;
    window.location().search().ok()
}
