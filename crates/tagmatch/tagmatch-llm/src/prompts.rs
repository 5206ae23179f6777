//! Prompt text and message builders for each collaborator.

use tagmatch_core::constants::MAX_REASON_INTERESTS;

use crate::client::ChatMessage;

pub const SCORING_TEMPERATURE: f32 = 0.2;
pub const EXTRACTION_TEMPERATURE: f32 = 0.3;
pub const REASON_TEMPERATURE: f32 = 0.7;
pub const REASON_MAX_TOKENS: u32 = 50;

const SCORING_SYSTEM: &str = "You are a game analysis expert. Rate how similar the two games \
are on a scale from 0 to 1, considering genre, gameplay mechanics and visual style. \
Reply with the number only.";

const EXTRACTION_SYSTEM: &str = "You are a game interest extraction assistant. Extract the \
game titles or game genre keywords from the user's message, separated by commas. Return only \
the keywords, no explanations.\n\
Example input: 'I like playing Genshin Impact and Honor of Kings'\n\
Example output: Genshin Impact, Honor of Kings";

pub fn scoring_messages(tag_a: &str, tag_b: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(SCORING_SYSTEM),
        ChatMessage::user(format!(
            "The similarity score between '{tag_a}' and '{tag_b}' is:"
        )),
    ]
}

pub fn extraction_messages(text: &str) -> Vec<ChatMessage> {
    vec![ChatMessage::system(EXTRACTION_SYSTEM), ChatMessage::user(text)]
}

/// Single system message listing at most five interests per side.
pub fn reason_messages(base: &[String], candidate: &[String]) -> Vec<ChatMessage> {
    let mine = join_limited(base);
    let theirs = join_limited(candidate);
    vec![ChatMessage::system(format!(
        "You are a professional game matching analyst. Explain in one sentence why these \
two players match.\n\
My interests: {mine}\n\
Their interests: {theirs}\n\
Consider game genre, gameplay mechanics, player profile and trends.\n\
Use casual English, no more than 20 words."
    ))]
}

fn join_limited(tags: &[String]) -> String {
    tags.iter()
        .take(MAX_REASON_INTERESTS)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
