use podforge::infrastructure::observability::preview_content;

#[test]
fn given_empty_content_when_previewing_then_returns_empty_marker() {
    assert_eq!(preview_content(""), "[EMPTY]");
    assert_eq!(preview_content("   "), "[EMPTY]");
}

#[test]
fn given_short_content_when_previewing_then_returns_unchanged() {
    let content = "What should this podcast cover?";
    assert_eq!(preview_content(content), content);
}

#[test]
fn given_long_content_when_previewing_then_truncates_with_length() {
    let content = "a".repeat(150);
    let result = preview_content(&content);
    assert!(result.starts_with(&"a".repeat(100)));
    assert!(result.contains("... (150 chars total)"));
}

#[test]
fn given_long_multibyte_content_when_previewing_then_cut_lands_on_char_boundary() {
    let content = "é".repeat(150);
    let result = preview_content(&content);
    assert!(result.starts_with(&"é".repeat(100)));
    assert!(result.contains("... (150 chars total)"));
}

#[test]
fn given_api_key_token_when_previewing_then_token_is_masked() {
    let result = preview_content("my key is sk-abc123xyz789 thanks");
    assert!(result.contains("sk-[REDACTED]"));
    assert!(!result.contains("sk-abc123xyz789"));
}

#[test]
fn given_bearer_token_when_previewing_then_redacts_token() {
    let result = preview_content("Authorization: Bearer tok123xyz");
    assert!(result.contains("Bearer [REDACTED]"));
    assert!(!result.contains("tok123xyz"));
}

#[test]
fn given_api_key_parameter_when_previewing_then_redacts_value() {
    let result = preview_content("request with api_key=secret123");
    assert!(result.contains("api_key=[REDACTED]"));
    assert!(!result.contains("secret123"));
}

#[test]
fn given_password_when_previewing_then_redacts_value() {
    let result = preview_content("login with password=hunter2");
    assert!(result.contains("password=[REDACTED]"));
    assert!(!result.contains("hunter2"));
}

#[test]
fn given_padded_content_when_previewing_then_trims() {
    assert_eq!(preview_content("  Hello world  "), "Hello world");
}
