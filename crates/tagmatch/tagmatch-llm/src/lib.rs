//! # tagmatch-llm
//!
//! An OpenAI-compatible chat-completions client and the three collaborators
//! built on it: the pair scorer used by the similarity oracle, the free-text
//! tag extractor, and the match-reason generator.

pub mod client;
pub mod extractor;
pub mod prompts;
pub mod reasoner;
pub mod scorer;

pub use client::{ChatClient, ChatMessage, ChatRequest};
pub use extractor::{parse_tags, ChatTagExtractor};
pub use reasoner::ChatMatchReasoner;
pub use scorer::ChatPairScorer;
