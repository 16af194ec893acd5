use crate::domain::{GenerationParams, Language};

/// System and user prompt pair for one script-generation call.
#[derive(Debug, Clone)]
pub struct PromptSet {
    pub system: String,
    pub user: String,
}

/// Bounds source content to `max_chars` characters, appending an ellipsis
/// marker when anything was cut.
pub fn truncate_content(content: &str, max_chars: usize) -> String {
    if content.chars().count() <= max_chars {
        return content.to_string();
    }
    let mut excerpt: String = content.chars().take(max_chars).collect();
    excerpt.push_str("...");
    excerpt
}

/// Builds the prompts for the requested language.
///
/// French and English carry dedicated templates; every other language reuses
/// the English template with an explicit language directive, which the models
/// follow reliably.
pub fn build_prompts(source_excerpt: &str, params: &GenerationParams) -> PromptSet {
    match params.language {
        Language::French => PromptSet {
            system: "Tu es un expert en création de podcasts. Tu dois générer un script de \
                     podcast naturel et engageant."
                .to_string(),
            user: french_user_prompt(source_excerpt, params),
        },
        Language::English => PromptSet {
            system: ENGLISH_SYSTEM_PROMPT.to_string(),
            user: english_user_prompt(source_excerpt, params, None),
        },
        other => PromptSet {
            system: ENGLISH_SYSTEM_PROMPT.to_string(),
            user: english_user_prompt(source_excerpt, params, Some(other)),
        },
    }
}

const ENGLISH_SYSTEM_PROMPT: &str =
    "You are an expert podcast creator. You must generate a natural and engaging podcast script.";

fn french_user_prompt(source_excerpt: &str, params: &GenerationParams) -> String {
    format!(
        "Génère un script de podcast entre deux personnes sur le sujet suivant:\n\
         \n\
         {content}\n\
         \n\
         Format du script:\n\
         <Person1>Texte de la première personne</Person1>\n\
         <Person2>Texte de la deuxième personne</Person2>\n\
         \n\
         Détails du podcast:\n\
         - Nom du podcast: {name}\n\
         - Tagline: {tagline}\n\
         - Premier intervenant: {first}\n\
         - Second intervenant: {second}\n\
         - Style: {style}\n\
         - Langue: {language}\n\
         - Niveau de créativité: {creativity}\n\
         \n\
         Le script doit être naturel, avec des pauses, des hésitations et des expressions \
         conversationnelles.\n\
         La longueur du script doit être d'environ {length} mots.\n\
         Le script doit inclure une introduction claire et une conclusion.",
        content = source_excerpt,
        name = params.podcast_name,
        tagline = params.tagline,
        first = params.first_speaker,
        second = params.second_speaker,
        style = params.style,
        language = params.language,
        creativity = params.creativity,
        length = params.target_words,
    )
}

fn english_user_prompt(
    source_excerpt: &str,
    params: &GenerationParams,
    directive: Option<Language>,
) -> String {
    let language_directive = match directive {
        Some(language) => format!("\nWrite the entire script in {}.", language.english_name()),
        None => String::new(),
    };
    format!(
        "Generate a podcast script between two people about the following topic:\n\
         \n\
         {content}\n\
         \n\
         Script format:\n\
         <Person1>First speaker's text</Person1>\n\
         <Person2>Second speaker's text</Person2>\n\
         \n\
         Podcast details:\n\
         - Podcast name: {name}\n\
         - Tagline: {tagline}\n\
         - First speaker: {first}\n\
         - Second speaker: {second}\n\
         - Style: {style}\n\
         - Language: {language}\n\
         - Creativity level: {creativity}\n\
         \n\
         The script must sound natural, with pauses, hesitations and conversational \
         expressions.\n\
         The script should be around {length} words long.\n\
         The script must include a clear introduction and a conclusion.{directive}",
        content = source_excerpt,
        name = params.podcast_name,
        tagline = params.tagline,
        first = params.first_speaker,
        second = params.second_speaker,
        style = params.style,
        language = params.language,
        creativity = params.creativity,
        length = params.target_words,
        directive = language_directive,
    )
}
