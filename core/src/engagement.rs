use crate::config::SiteConfig;
use crate::shortcuts::{is_inspection_shortcut, KeyCombo};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Hidden,
    Visible,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealCause {
    Timer,
    ExitIntent,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    OpenExternal(String),
    ShowModal(RevealCause),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RevealTimer {
    Idle,
    Armed,
    Fired,
    Cancelled,
}

#[derive(Clone, Debug)]
pub struct EngagementMachine {
    redirect_url: String,
    reveal_delay_ms: u32,
    modal: ModalState,
    timer: RevealTimer,
    mounted: bool,
    reveal_count: u32,
    dismiss_count: u32,
}

impl EngagementMachine {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            redirect_url: config.redirect_url.clone(),
            reveal_delay_ms: config.reveal_delay_ms,
            modal: ModalState::Hidden,
            timer: RevealTimer::Idle,
            mounted: false,
            reveal_count: 0,
            dismiss_count: 0,
        }
    }

    pub fn modal(&self) -> ModalState {
        self.modal
    }

    pub fn is_visible(&self) -> bool {
        self.modal == ModalState::Visible
    }

    pub fn reveal_count(&self) -> u32 {
        self.reveal_count
    }

    pub fn dismiss_count(&self) -> u32 {
        self.dismiss_count
    }

    pub fn redirect_url(&self) -> &str {
        &self.redirect_url
    }

    pub fn mount(&mut self) -> u32 {
        self.mounted = true;
        self.modal = ModalState::Hidden;
        self.timer = RevealTimer::Armed;
        self.reveal_delay_ms
    }

    pub fn unmount(&mut self) {
        self.mounted = false;
        self.modal = ModalState::Hidden;
        if self.timer == RevealTimer::Armed {
            self.timer = RevealTimer::Cancelled;
        }
    }

    pub fn fire_reveal_timer(&mut self) -> Option<Effect> {
        if !self.mounted || self.timer != RevealTimer::Armed {
            return None;
        }
        self.timer = RevealTimer::Fired;
        self.reveal(RevealCause::Timer)
    }

    // Crossings while the modal is up are ignored.
    pub fn on_pointer_leave(&mut self, client_y: f64) -> Vec<Effect> {
        if !self.mounted || client_y > 0.0 || self.is_visible() {
            return Vec::new();
        }
        let mut effects = vec![self.redirect()];
        effects.extend(self.reveal(RevealCause::ExitIntent));
        effects
    }

    pub fn on_key_down(&self, combo: &KeyCombo) -> bool {
        self.mounted && is_inspection_shortcut(combo)
    }

    pub fn on_context_menu(&self) -> bool {
        self.mounted
    }

    pub fn on_unload_attempt(&self) -> bool {
        self.mounted
    }

    pub fn redirect(&self) -> Effect {
        Effect::OpenExternal(self.redirect_url.clone())
    }

    pub fn dismiss(&mut self) -> bool {
        if self.modal == ModalState::Hidden {
            return false;
        }
        self.modal = ModalState::Hidden;
        self.dismiss_count = self.dismiss_count.saturating_add(1);
        true
    }

    fn reveal(&mut self, cause: RevealCause) -> Option<Effect> {
        if self.modal == ModalState::Visible {
            return None;
        }
        self.modal = ModalState::Visible;
        self.reveal_count = self.reveal_count.saturating_add(1);
        Some(Effect::ShowModal(cause))
    }
}
