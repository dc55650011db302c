//! Contract tests against JSON as the web client actually sends it

use agentrwkv_core::{HeadElement, Language, ModelId, ModelSettings, PageMetadata, SettingsError};

#[test]
fn test_client_settings_json_round_trip() {
    let json = r#"{
        "language": "en",
        "customApiKey": "sk-test",
        "customModelName": "gpt-3.5-turbo-16k",
        "customTemperature": 0.9,
        "customMaxLoops": 4,
        "maxTokens": 16000
    }"#;

    let settings: ModelSettings = serde_json::from_str(json).expect("client JSON must parse");
    assert_eq!(settings.language, Language::English);
    assert_eq!(settings.custom_api_key, "sk-test");
    assert_eq!(settings.custom_model_name, ModelId::Gpt35Turbo16k);
    assert_eq!(settings.custom_max_loops, 4);
    settings.validate().expect("in-budget settings must validate");

    // Serializing reproduces the client's field names and identifier strings
    let value = serde_json::to_value(&settings).unwrap();
    assert_eq!(value["customModelName"], "gpt-3.5-turbo-16k");
    assert_eq!(value["maxTokens"], 16000);
    assert_eq!(value["language"], "en");
}

#[test]
fn test_over_budget_settings_are_flagged() {
    let json = r#"{"customModelName": "gpt-3.5-turbo-16k", "maxTokens": 20000}"#;
    let settings: ModelSettings = serde_json::from_str(json).unwrap();
    match settings.validate() {
        Err(SettingsError::TokenBudgetExceeded {
            model,
            requested,
            budget,
        }) => {
            assert_eq!(model, ModelId::Gpt35Turbo16k);
            assert_eq!(requested, 20000);
            assert_eq!(budget, 16000);
        }
        other => panic!("expected budget rejection, got {other:?}"),
    }
}

#[test]
fn test_unknown_model_identifier_is_rejected() {
    let json = r#"{"customModelName": "gpt-3.5-turbo"}"#;
    assert!(serde_json::from_str::<ModelSettings>(json).is_err());
}

#[test]
fn test_unknown_language_falls_back_without_failing() {
    let json = r#"{"language": "tlh"}"#;
    let settings: ModelSettings = serde_json::from_str(json).unwrap();
    assert_eq!(settings.language, Language::English);
}

#[test]
fn test_page_render_end_to_end() {
    let elements = PageMetadata::new().head_elements();
    assert_eq!(
        elements[0],
        HeadElement::Title {
            text: "AgentRWKV".to_string()
        }
    );
    let width = elements.iter().find_map(|element| match element {
        HeadElement::MetaProperty { property, content } if property == "og:image:width" => {
            Some(content.clone())
        }
        _ => None,
    });
    let height = elements.iter().find_map(|element| match element {
        HeadElement::MetaProperty { property, content } if property == "og:image:height" => {
            Some(content.clone())
        }
        _ => None,
    });
    assert_eq!(width.as_deref(), Some("1280"));
    assert_eq!(height.as_deref(), Some("640"));
}
