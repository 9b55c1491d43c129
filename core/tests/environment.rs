use vitrine_core::{classify_user_agent, EnvironmentClass, RESTRICTED_MARKERS};

#[test]
fn every_marker_matches_in_any_case() {
    for marker in RESTRICTED_MARKERS {
        let lower = format!("Mozilla/5.0 (Linux; Android 14) {marker}/34.1.3");
        let upper = lower.to_uppercase();
        assert_eq!(
            classify_user_agent(Some(&lower)),
            EnvironmentClass::RestrictedInAppBrowser,
            "{lower}"
        );
        assert_eq!(
            classify_user_agent(Some(&upper)),
            EnvironmentClass::RestrictedInAppBrowser,
            "{upper}"
        );
    }
}

#[test]
fn known_in_app_user_agents_are_restricted() {
    let agents = [
        "Mozilla/5.0 (Linux; Android 13; SM-A536B Build/TP1A.220624.014; wv) AppleWebKit/537.36 (KHTML, like Gecko) Version/4.0 Chrome/120.0.6099.230 Mobile Safari/537.36 trill_320405 JsSdk/1.0 NetType/WIFI Channel/googleplay AppName/musical_ly app_version/32.4.5 ByteLocale/pt-BR Region/BR",
        "Mozilla/5.0 (iPhone; CPU iPhone OS 17_2 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Mobile/15E148 BytedanceWebview/d8a21c6 TikTok 32.9.0",
    ];
    for agent in agents {
        assert!(classify_user_agent(Some(agent)).is_restricted(), "{agent}");
    }
}

#[test]
fn ordinary_browsers_are_normal() {
    let agents = [
        "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0",
        "Mozilla/5.0 (Macintosh; Intel Mac OS X 14_5) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.5 Safari/605.1.15",
        "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/126.0.0.0 Mobile Safari/537.36",
        "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Mobile/15E148 Instagram 330.0.0.40.92",
        "",
        "   ",
        "tik tok",
    ];
    for agent in agents {
        assert_eq!(classify_user_agent(Some(agent)), EnvironmentClass::Normal, "{agent:?}");
    }
    assert_eq!(classify_user_agent(None), EnvironmentClass::Normal);
}
