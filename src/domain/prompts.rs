//! Writing prompts shown on empty days

use rand::seq::SliceRandom;

pub const INSPIRATION_PROMPTS: [&str; 12] = [
    "What happened on this day?",
    "What made you smile today?",
    "What was the weather like?",
    "A delicious meal you had?",
    "A song that fits today's mood?",
    "Who did you meet today?",
    "A thought that crossed your mind?",
    "Something you are grateful for?",
    "A challenge you faced?",
    "What are you looking forward to?",
    "Describe the sky today.",
    "A small achievement?",
];

/// Pick one prompt at random
pub fn random_prompt() -> &'static str {
    INSPIRATION_PROMPTS
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(INSPIRATION_PROMPTS[0])
}
