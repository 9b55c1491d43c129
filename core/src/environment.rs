pub const RESTRICTED_MARKERS: &[&str] = &["tiktok", "bytedancewebview", "musical_ly", "bytelocale"];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EnvironmentClass {
    #[default]
    Normal,
    RestrictedInAppBrowser,
}

impl EnvironmentClass {
    pub fn is_restricted(self) -> bool {
        matches!(self, EnvironmentClass::RestrictedInAppBrowser)
    }

    pub fn label(self) -> &'static str {
        match self {
            EnvironmentClass::Normal => "normal",
            EnvironmentClass::RestrictedInAppBrowser => "restricted",
        }
    }
}

pub fn classify_user_agent(user_agent: Option<&str>) -> EnvironmentClass {
    let Some(raw) = user_agent else {
        return EnvironmentClass::Normal;
    };
    let lowered = raw.to_lowercase();
    if RESTRICTED_MARKERS
        .iter()
        .any(|marker| lowered.contains(marker))
    {
        EnvironmentClass::RestrictedInAppBrowser
    } else {
        EnvironmentClass::Normal
    }
}
