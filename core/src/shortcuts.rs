#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyCombo {
    pub key: String,
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
    pub meta: bool,
}

impl KeyCombo {
    pub fn plain(key: &str) -> Self {
        Self {
            key: key.to_string(),
            ..Self::default()
        }
    }

    pub fn ctrl(key: &str) -> Self {
        Self {
            key: key.to_string(),
            ctrl: true,
            ..Self::default()
        }
    }

    pub fn ctrl_shift(key: &str) -> Self {
        Self {
            key: key.to_string(),
            ctrl: true,
            shift: true,
            ..Self::default()
        }
    }

    pub fn meta_alt(key: &str) -> Self {
        Self {
            key: key.to_string(),
            alt: true,
            meta: true,
            ..Self::default()
        }
    }
}

const DEVTOOLS_PANEL_KEYS: &[&str] = &["i", "j", "c"];
const VIEW_SOURCE_KEY: &str = "u";

pub fn is_inspection_shortcut(combo: &KeyCombo) -> bool {
    let key = combo.key.to_ascii_lowercase();
    if key == "f12" {
        return true;
    }
    if combo.ctrl && combo.shift && !combo.alt && DEVTOOLS_PANEL_KEYS.contains(&key.as_str()) {
        return true;
    }
    if combo.ctrl && !combo.shift && !combo.alt && key == VIEW_SOURCE_KEY {
        return true;
    }
    if combo.meta && combo.alt {
        return DEVTOOLS_PANEL_KEYS.contains(&key.as_str()) || key == VIEW_SOURCE_KEY;
    }
    false
}
