use regex::Regex;
use std::sync::LazyLock;

use crate::domain::{DialogueTurn, GenerationParams, TtsEngine};

use super::transcript_cleaner::clean_transcript;

static PERSON_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<Person(\d+)>(.*?)</Person\d+>").unwrap());

static EMPHASIZED_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[*_]\s*([^*_\n:]{1,64}?)\s*(?::\s*[*_]|[*_]\s*:)").unwrap()
});

static LABELED_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([^:\n]{1,64}?)\s*:\s*(.+)$").unwrap());

/// Engine-appropriate voice selectors for the two configured speakers.
struct VoicePair {
    first: String,
    second: String,
}

impl VoicePair {
    fn resolve(params: &GenerationParams, engine: TtsEngine) -> Self {
        match engine {
            TtsEngine::OpenAi => Self {
                first: params.first_speaker_voice.as_str().to_string(),
                second: params.second_speaker_voice.as_str().to_string(),
            },
            TtsEngine::Edge => {
                let (first, second) = params.language.neural_voice_pair();
                Self {
                    first: first.to_string(),
                    second: second.to_string(),
                }
            }
            TtsEngine::ElevenLabs => Self {
                first: params.first_speaker_premium_voice.clone(),
                second: params.second_speaker_premium_voice.clone(),
            },
        }
    }

    /// Maps a speaker label from the transcript to one of the two voices.
    ///
    /// Matching is by case-insensitive substring against the configured
    /// speaker names. Labels matching neither fall to the second voice, so
    /// interjections from narrators or guests do not reuse the host voice.
    fn for_label(&self, label: &str, params: &GenerationParams) -> String {
        let label = label.to_lowercase();
        let first = params.first_speaker.trim().to_lowercase();
        if !first.is_empty() && label.contains(&first) {
            return self.first.clone();
        }
        self.second.clone()
    }
}

/// Turns a raw transcript into ordered dialogue turns.
///
/// Strategies are tried from the most to the least structured; the first one
/// yielding at least one turn wins. Non-empty input always produces at least
/// one turn.
pub fn extract_dialogue(
    transcript: &str,
    params: &GenerationParams,
    engine: TtsEngine,
) -> Vec<DialogueTurn> {
    let cleaned = clean_transcript(transcript);
    let voices = VoicePair::resolve(params, engine);

    let strategies: [fn(&str, &GenerationParams, &VoicePair) -> Vec<DialogueTurn>; 4] = [
        extract_person_tags,
        extract_emphasized_labels,
        extract_labeled_lines,
        extract_alternating_blocks,
    ];

    for strategy in strategies {
        let turns = strategy(&cleaned, params, &voices);
        if !turns.is_empty() {
            return turns;
        }
    }

    whole_text_turn(&cleaned, transcript, params, &voices)
}

/// Strategy 1: `<PersonN>text</PersonN>` tags, the format prompts mandate.
fn extract_person_tags(
    text: &str,
    params: &GenerationParams,
    voices: &VoicePair,
) -> Vec<DialogueTurn> {
    let mut turns = Vec::new();
    for caps in PERSON_TAG.captures_iter(text) {
        let body = caps[2].trim();
        if body.is_empty() {
            continue;
        }
        let turn = if &caps[1] == "1" {
            DialogueTurn::new(params.first_speaker.clone(), body, voices.first.clone())
        } else {
            DialogueTurn::new(params.second_speaker.clone(), body, voices.second.clone())
        };
        turns.push(turn);
    }
    turns
}

/// Strategy 2: emphasized labels such as `*Host:*` or `*Host*:` acting as
/// turn delimiters. The text of a turn runs to the next label.
fn extract_emphasized_labels(
    text: &str,
    params: &GenerationParams,
    voices: &VoicePair,
) -> Vec<DialogueTurn> {
    let mut turns = Vec::new();
    let mut current: Option<String> = None;
    let mut cursor = 0;

    for caps in EMPHASIZED_LABEL.captures_iter(text) {
        let marker = caps.get(0).unwrap();
        if let Some(label) = current.take() {
            push_labeled_turn(&mut turns, &label, &text[cursor..marker.start()], params, voices);
        }
        current = Some(caps[1].trim().to_string());
        cursor = marker.end();
    }

    if let Some(label) = current {
        push_labeled_turn(&mut turns, &label, &text[cursor..], params, voices);
    }

    turns
}

/// Strategy 3: plain `Name: text` lines. Unlabeled lines continue the
/// preceding turn.
fn extract_labeled_lines(
    text: &str,
    params: &GenerationParams,
    voices: &VoicePair,
) -> Vec<DialogueTurn> {
    let mut turns: Vec<DialogueTurn> = Vec::new();
    let mut matched_any = false;

    for line in text.lines() {
        if let Some(caps) = LABELED_LINE.captures(line) {
            let label = caps[1].trim().to_string();
            if label.chars().any(|c| c.is_alphabetic()) {
                matched_any = true;
                let voice = voices.for_label(&label, params);
                turns.push(DialogueTurn::new(label, caps[2].trim(), voice));
                continue;
            }
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(last) = turns.last_mut() {
            last.text.push(' ');
            last.text.push_str(line);
        }
    }

    if matched_any {
        turns.retain(|turn| !turn.text.trim().is_empty());
        turns
    } else {
        Vec::new()
    }
}

/// Strategy 4: no recognizable labels at all. Every non-blank line (or, for
/// single-block text, every paragraph) becomes a turn, alternating between
/// the two speakers.
fn extract_alternating_blocks(
    text: &str,
    params: &GenerationParams,
    voices: &VoicePair,
) -> Vec<DialogueTurn> {
    let mut blocks: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if blocks.is_empty() {
        blocks = text
            .split("\n\n")
            .map(str::trim)
            .filter(|block| !block.is_empty())
            .collect();
    }

    blocks
        .into_iter()
        .enumerate()
        .map(|(index, block)| {
            if index % 2 == 0 {
                DialogueTurn::new(params.first_speaker.clone(), block, voices.first.clone())
            } else {
                DialogueTurn::new(params.second_speaker.clone(), block, voices.second.clone())
            }
        })
        .collect()
}

/// Last resort: the entire text as a single first-speaker turn.
fn whole_text_turn(
    cleaned: &str,
    raw: &str,
    params: &GenerationParams,
    voices: &VoicePair,
) -> Vec<DialogueTurn> {
    let body = if cleaned.is_empty() { raw.trim() } else { cleaned };
    if body.is_empty() {
        return Vec::new();
    }
    vec![DialogueTurn::new(
        params.first_speaker.clone(),
        body,
        voices.first.clone(),
    )]
}

fn push_labeled_turn(
    turns: &mut Vec<DialogueTurn>,
    label: &str,
    body: &str,
    params: &GenerationParams,
    voices: &VoicePair,
) {
    let body = body.trim();
    if body.is_empty() {
        return;
    }
    let voice = voices.for_label(label, params);
    turns.push(DialogueTurn::new(label, body, voice));
}
