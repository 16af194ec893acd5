use podforge::application::services::{build_prompts, truncate_content};
use podforge::domain::{ChatVoice, GenerationParams, Language, PodcastStyle};

fn test_params(language: Language) -> GenerationParams {
    GenerationParams {
        target_words: 800,
        style: PodcastStyle::Interview,
        first_speaker: "Ana".to_string(),
        second_speaker: "Ben".to_string(),
        podcast_name: "Deep Currents".to_string(),
        tagline: "ideas worth hearing".to_string(),
        language,
        tts_model: "edge".to_string(),
        creativity: 0.4,
        first_speaker_voice: ChatVoice::Onyx,
        second_speaker_voice: ChatVoice::Nova,
        first_speaker_premium_voice: "voice-one".to_string(),
        second_speaker_premium_voice: "voice-two".to_string(),
    }
}

#[test]
fn given_short_content_when_truncating_then_content_is_unchanged() {
    let content = "short enough";
    assert_eq!(truncate_content(content, 100), content);
}

#[test]
fn given_long_content_when_truncating_then_ellipsis_is_appended() {
    let content = "x".repeat(150);
    let excerpt = truncate_content(&content, 100);

    assert!(excerpt.starts_with(&"x".repeat(100)));
    assert!(excerpt.ends_with("..."));
    assert_eq!(excerpt.chars().count(), 103);
}

#[test]
fn given_multibyte_content_when_truncating_then_cut_is_counted_in_chars() {
    let content = "é".repeat(150);
    let excerpt = truncate_content(&content, 100);

    assert!(excerpt.starts_with(&"é".repeat(100)));
    assert!(excerpt.ends_with("..."));
}

#[test]
fn given_french_language_when_building_prompts_then_french_template_is_used() {
    let prompts = build_prompts("du contenu", &test_params(Language::French));

    assert!(prompts.system.contains("expert en création de podcasts"));
    assert!(prompts.user.contains("Génère un script de podcast"));
    assert!(prompts.user.contains("du contenu"));
    assert!(prompts.user.contains("Nom du podcast: Deep Currents"));
}

#[test]
fn given_english_language_when_building_prompts_then_english_template_is_used() {
    let prompts = build_prompts("some content", &test_params(Language::English));

    assert!(prompts.system.contains("expert podcast creator"));
    assert!(prompts.user.contains("<Person1>"));
    assert!(prompts.user.contains("<Person2>"));
    assert!(prompts.user.contains("Podcast name: Deep Currents"));
    assert!(prompts.user.contains("Tagline: ideas worth hearing"));
    assert!(!prompts.user.contains("Write the entire script in"));
}

#[test]
fn given_other_language_when_building_prompts_then_language_directive_is_appended() {
    let prompts = build_prompts("some content", &test_params(Language::Spanish));

    assert!(prompts.system.contains("expert podcast creator"));
    assert!(prompts.user.ends_with("Write the entire script in Spanish."));
}

#[test]
fn given_params_when_building_prompts_then_details_are_interpolated() {
    let prompts = build_prompts("some content", &test_params(Language::English));

    assert!(prompts.user.contains("First speaker: Ana"));
    assert!(prompts.user.contains("Second speaker: Ben"));
    assert!(prompts.user.contains("Style: interview"));
    assert!(prompts.user.contains("around 800 words"));
    assert!(prompts.user.contains("Creativity level: 0.4"));
}
