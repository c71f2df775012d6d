use super::*;

#[test]
fn default_targets_same_origin_and_logs_out_on_empty() {
    let config = ClientConfig::default();
    assert_eq!(config.api_base, "/");
    assert_eq!(config.empty_list_policy, EmptyListPolicy::Logout);
}

#[test]
fn from_meta_trims_and_falls_back_on_blank() {
    let config = ClientConfig::from_meta(Some("  http://api.local:5000/ ".to_owned()), None);
    assert_eq!(config.api_base, "http://api.local:5000/");
    let config = ClientConfig::from_meta(Some("   ".to_owned()), None);
    assert_eq!(config.api_base, "/");
}

#[test]
fn from_meta_parses_policy_words() {
    let keep = ClientConfig::from_meta(None, Some("KEEP".to_owned()));
    assert_eq!(keep.empty_list_policy, EmptyListPolicy::Keep);
    let other = ClientConfig::from_meta(None, Some("whatever".to_owned()));
    assert_eq!(other.empty_list_policy, EmptyListPolicy::Logout);
}

#[test]
fn meta_value_round_trips_policy() {
    for policy in [EmptyListPolicy::Logout, EmptyListPolicy::Keep] {
        let config = ClientConfig { empty_list_policy: policy, ..ClientConfig::default() };
        let parsed = ClientConfig::from_meta(None, Some(config.empty_list_meta_value().to_owned()));
        assert_eq!(parsed.empty_list_policy, policy);
    }
}

#[test]
fn from_document_is_default_outside_browser() {
    assert_eq!(ClientConfig::from_document(), ClientConfig::default());
}
