use podforge::application::services::{clean_transcript, strip_speech_markup};

#[test]
fn given_heading_lines_when_cleaning_then_headings_are_dropped() {
    let raw = "# Podcast Script\n<Person1>Hello.</Person1>\n## Outro\n<Person2>Bye.</Person2>";
    let cleaned = clean_transcript(raw);

    assert!(!cleaned.contains("Podcast Script"));
    assert!(!cleaned.contains("Outro"));
    assert!(cleaned.contains("<Person1>Hello.</Person1>"));
    assert!(cleaned.contains("<Person2>Bye.</Person2>"));
}

#[test]
fn given_bold_markers_when_cleaning_then_inner_text_survives() {
    let cleaned = clean_transcript("This is **really important** news.");
    assert_eq!(cleaned, "This is really important news.");
}

#[test]
fn given_underline_markers_when_cleaning_then_inner_text_survives() {
    let cleaned = clean_transcript("A __quiet__ moment.");
    assert_eq!(cleaned, "A quiet moment.");
}

#[test]
fn given_tagline_line_when_cleaning_then_line_is_dropped() {
    let raw = "Tagline: ideas worth hearing\n<Person1>Welcome.</Person1>";
    let cleaned = clean_transcript(raw);

    assert!(!cleaned.contains("ideas worth hearing"));
    assert!(cleaned.contains("Welcome."));
}

#[test]
fn given_uppercase_tagline_line_when_cleaning_then_line_is_dropped() {
    let cleaned = clean_transcript("TAGLINE: shouty version\nHello.");
    assert_eq!(cleaned, "Hello.");
}

#[test]
fn given_bullet_lines_when_cleaning_then_markers_are_stripped() {
    let cleaned = clean_transcript("- first point\n* second point\n• third point");
    assert_eq!(cleaned, "first point\nsecond point\nthird point");
}

#[test]
fn given_single_star_emphasis_when_cleaning_then_markers_are_kept() {
    let cleaned = clean_transcript("*Host:* Welcome everyone.");
    assert_eq!(cleaned, "*Host:* Welcome everyone.");
}

#[test]
fn given_fullwidth_characters_when_cleaning_then_text_is_normalized() {
    let cleaned = clean_transcript("Ｈｏｓｔ： Ｈｅｌｌｏ");
    assert_eq!(cleaned, "Host: Hello");
}

#[test]
fn given_padded_input_when_cleaning_then_result_is_trimmed() {
    let cleaned = clean_transcript("\n\n  Hello there.  \n\n");
    assert_eq!(cleaned, "Hello there.");
}

#[test]
fn given_tags_when_stripping_markup_then_tags_become_spaces() {
    let stripped = strip_speech_markup("Hello <break time=\"1s\"/> world");
    assert_eq!(stripped, "Hello   world");
}

#[test]
fn given_emphasis_characters_when_stripping_markup_then_they_are_removed() {
    let stripped = strip_speech_markup("*Really* __important__ stuff");
    assert_eq!(stripped, "Really important stuff");
}

#[test]
fn given_plain_text_when_stripping_markup_then_text_is_unchanged() {
    let stripped = strip_speech_markup("Nothing special here.");
    assert_eq!(stripped, "Nothing special here.");
}
