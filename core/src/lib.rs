pub mod catalog;
pub mod config;
pub mod drag_scroll;
pub mod engagement;
pub mod environment;
pub mod page;
pub mod shortcuts;

pub use catalog::{CatalogRow, BRAND, CATALOG_ROWS, DEFAULT_REDIRECT_URL, HERO_IMAGE};
pub use config::{ConfigError, SiteConfig, DEFAULT_DRAG_GRACE_MS, DEFAULT_REVEAL_DELAY_MS};
pub use drag_scroll::{DragPhase, DragScroll, ScrollDirection, SPEED_MULTIPLIER};
pub use engagement::{Effect, EngagementMachine, ModalState, RevealCause};
pub use environment::{classify_user_agent, EnvironmentClass, RESTRICTED_MARKERS};
pub use page::{
    mount_for_environment, EngagementMount, ModalHook, PageEvent, PageHost, PageSignal, SignalHandler,
    Verdict, PAGE_EVENTS,
};
pub use shortcuts::{is_inspection_shortcut, KeyCombo};
