use stickyheader_core::{ConfigError, ObserverOptions, ToggleConfig};

#[test]
fn default_matches_blog_theme() {
    let config = ToggleConfig::default();
    assert_eq!(config.title_selector, ".first-entry .entry-header h1");
    assert_eq!(config.header_selector, ".header");
    assert_eq!(config.header_flag, "scrolled");
    assert_eq!(config.title_flag, "hidden");
    assert_eq!(config.threshold, 0.0);
    assert_eq!(config.root_margin, "0px");
}

#[test]
fn partial_json_falls_back_to_defaults() {
    let config: ToggleConfig =
        serde_json::from_str(r#"{"headerFlag": "compact", "rootMargin": "-64px 0px 0px 0px"}"#)
            .unwrap();

    assert_eq!(config.header_flag, "compact");
    assert_eq!(config.root_margin, "-64px 0px 0px 0px");
    assert_eq!(config.title_flag, "hidden");
    assert_eq!(config.title_selector, ".first-entry .entry-header h1");
    assert_eq!(config.validate(), Ok(()));
}

#[test]
fn empty_json_is_default() {
    let config: ToggleConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, ToggleConfig::default());
}

#[test]
fn serializes_camel_case() {
    let json = serde_json::to_value(ToggleConfig::default()).unwrap();
    assert_eq!(json["titleSelector"], ".first-entry .entry-header h1");
    assert_eq!(json["rootMargin"], "0px");
}

#[test]
fn validation_errors() {
    let cases = [
        (
            ToggleConfig {
                title_selector: "  ".into(),
                ..Default::default()
            },
            ConfigError::EmptySelector("title"),
        ),
        (
            ToggleConfig {
                header_selector: String::new(),
                ..Default::default()
            },
            ConfigError::EmptySelector("header"),
        ),
        (
            ToggleConfig {
                header_flag: String::new(),
                ..Default::default()
            },
            ConfigError::InvalidFlag("header"),
        ),
        (
            ToggleConfig {
                threshold: 1.5,
                ..Default::default()
            },
            ConfigError::Threshold(1.5),
        ),
        (
            ToggleConfig {
                threshold: -0.1,
                ..Default::default()
            },
            ConfigError::Threshold(-0.1),
        ),
        (
            ToggleConfig {
                root_margin: "auto".into(),
                ..Default::default()
            },
            ConfigError::RootMargin("auto".into()),
        ),
    ];

    for (config, expected) in cases {
        assert_eq!(config.validate(), Err(expected));
    }
}

#[test]
fn observer_options_follow_config() {
    let config = ToggleConfig {
        threshold: 0.25,
        root_margin: "10px".into(),
        ..Default::default()
    };
    let options = ObserverOptions::from(&config);
    assert_eq!(options.threshold, 0.25);
    assert_eq!(options.root_margin, "10px");
    assert_eq!(ObserverOptions::default().root_margin, "0px");
}
