use std::time::Duration;

use chrono::Utc;
use rand::Rng;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{AiSuggestion, SuggestionKind};

/// Simulated model latency. The command future is dropped if the caller
/// goes away, which cancels the sleep and the whole generation.
const SUGGESTION_DELAY: Duration = Duration::from_secs(2);

/// Trailing slice of the editor content attached to each suggestion.
const CONTEXT_CHARS: usize = 100;

const CONTINUATION_CONFIDENCE: f32 = 0.85;
const IMPROVEMENT_CONFIDENCE: f32 = 0.78;

const CONTINUATIONS: [&str; 5] = [
    "The shadows deepened as evening approached, casting long fingers across the room.",
    "She paused at the threshold, her hand trembling on the door handle.",
    "The sound of footsteps echoed through the empty hallway, growing closer with each passing moment.",
    "A gentle breeze stirred the curtains, carrying with it the scent of rain and distant memories.",
    "The old photograph fell to the floor, its edges yellowed with time and secrets.",
];

const IMPROVEMENTS: [&str; 5] = [
    "Try using more sensory details to immerse the reader in the scene.",
    "Consider varying your sentence structure for better flow.",
    "This would be a great place to add some dialogue to break up the narrative.",
    "You could strengthen this passage with more specific, concrete imagery.",
    "Think about adding internal conflict or tension to this moment.",
];

/// Canned stand-in for a real inference backend: after a fixed delay,
/// returns one continuation and one improvement drawn uniformly from the
/// fixed lists. The editor only depends on this contract, so a real
/// provider can slot in behind the same signature.
pub async fn generate_suggestions(content: &str) -> Result<Vec<AiSuggestion>, AppError> {
    if content.trim().is_empty() {
        return Err(AppError::Validation(
            "write some content before requesting suggestions".to_string(),
        ));
    }

    tokio::time::sleep(SUGGESTION_DELAY).await;
    Ok(build_suggestions(content))
}

fn build_suggestions(content: &str) -> Vec<AiSuggestion> {
    let mut rng = rand::thread_rng();
    let continuation = CONTINUATIONS[rng.gen_range(0..CONTINUATIONS.len())];
    let improvement = IMPROVEMENTS[rng.gen_range(0..IMPROVEMENTS.len())];
    let context = trailing_context(content);
    let now = Utc::now();

    vec![
        AiSuggestion {
            id: Uuid::new_v4().to_string(),
            kind: SuggestionKind::Continuation,
            content: format!("Here's a suggested continuation: {continuation}"),
            context: context.clone(),
            confidence: CONTINUATION_CONFIDENCE,
            timestamp: now,
        },
        AiSuggestion {
            id: Uuid::new_v4().to_string(),
            kind: SuggestionKind::Improvement,
            content: format!("Consider this improvement: {improvement}"),
            context,
            confidence: IMPROVEMENT_CONFIDENCE,
            timestamp: now,
        },
    ]
}

fn trailing_context(content: &str) -> String {
    let chars: Vec<char> = content.chars().collect();
    let start = chars.len().saturating_sub(CONTEXT_CHARS);
    chars[start..].iter().collect()
}
