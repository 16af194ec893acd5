use podforge::domain::{
    ChatVoice, GenerationParams, InvalidParams, Language, PodcastStyle, SourceKind, TtsEngine,
};

fn valid_params() -> GenerationParams {
    GenerationParams {
        target_words: 800,
        style: PodcastStyle::Conversational,
        first_speaker: "Host".to_string(),
        second_speaker: "Expert".to_string(),
        podcast_name: "Deep Currents".to_string(),
        tagline: "ideas worth hearing".to_string(),
        language: Language::English,
        tts_model: "edge".to_string(),
        creativity: 0.7,
        first_speaker_voice: ChatVoice::Onyx,
        second_speaker_voice: ChatVoice::Nova,
        first_speaker_premium_voice: "voice-one".to_string(),
        second_speaker_premium_voice: "voice-two".to_string(),
    }
}

#[test]
fn given_valid_params_when_validating_then_passes() {
    assert!(valid_params().validate().is_ok());
}

#[test]
fn given_boundary_lengths_when_validating_then_both_ends_pass() {
    let mut params = valid_params();
    params.target_words = 500;
    assert!(params.validate().is_ok());
    params.target_words = 5000;
    assert!(params.validate().is_ok());
}

#[test]
fn given_out_of_range_length_when_validating_then_fails() {
    let mut params = valid_params();
    params.target_words = 499;
    assert!(matches!(
        params.validate(),
        Err(InvalidParams::TargetWordsOutOfRange(499))
    ));
    params.target_words = 5001;
    assert!(params.validate().is_err());
}

#[test]
fn given_boundary_creativity_when_validating_then_both_ends_pass() {
    let mut params = valid_params();
    params.creativity = 0.0;
    assert!(params.validate().is_ok());
    params.creativity = 1.0;
    assert!(params.validate().is_ok());
}

#[test]
fn given_out_of_range_creativity_when_validating_then_fails() {
    let mut params = valid_params();
    params.creativity = -0.1;
    assert!(matches!(
        params.validate(),
        Err(InvalidParams::CreativityOutOfRange(_))
    ));
    params.creativity = 1.1;
    assert!(params.validate().is_err());
}

#[test]
fn given_blank_speaker_when_validating_then_fails() {
    let mut params = valid_params();
    params.first_speaker = "   ".to_string();
    assert!(matches!(
        params.validate(),
        Err(InvalidParams::EmptySpeakerName("firstSpeaker"))
    ));
}

#[test]
fn given_blank_podcast_name_when_validating_then_fails() {
    let mut params = valid_params();
    params.podcast_name = String::new();
    assert!(matches!(
        params.validate(),
        Err(InvalidParams::EmptyPodcastName)
    ));
}

#[test]
fn given_engine_names_when_parsing_then_known_engines_resolve() {
    assert_eq!("openai".parse::<TtsEngine>().unwrap(), TtsEngine::OpenAi);
    assert_eq!("edge".parse::<TtsEngine>().unwrap(), TtsEngine::Edge);
    assert_eq!(
        "ElevenLabs".parse::<TtsEngine>().unwrap(),
        TtsEngine::ElevenLabs
    );
    assert!("acme".parse::<TtsEngine>().is_err());
}

#[test]
fn given_style_names_when_parsing_then_known_styles_resolve() {
    assert_eq!(
        "debate".parse::<PodcastStyle>().unwrap(),
        PodcastStyle::Debate
    );
    assert!("freestyle".parse::<PodcastStyle>().is_err());
}

#[test]
fn given_voice_names_when_parsing_then_known_voices_resolve() {
    assert_eq!("shimmer".parse::<ChatVoice>().unwrap(), ChatVoice::Shimmer);
    assert_eq!(ChatVoice::default(), ChatVoice::Alloy);
    assert!("baritone".parse::<ChatVoice>().is_err());
}

#[test]
fn given_source_kinds_when_parsing_then_known_kinds_resolve() {
    assert_eq!("text".parse::<SourceKind>().unwrap(), SourceKind::Text);
    assert_eq!("URL".parse::<SourceKind>().unwrap(), SourceKind::Url);
    assert!("file".parse::<SourceKind>().is_err());
}
