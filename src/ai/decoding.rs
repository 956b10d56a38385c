//! Greedy token selection shared by the model implementations.

use super::GenerationParams;

/// What the decoder loop should do after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Emit(u32),
    Stop,
}

/// Picks the highest scoring token id.
///
/// Ties resolve to the lowest id so identical logits always give the same
/// answer. NaN scores are never selected.
#[must_use]
pub fn argmax(logits: &[f32]) -> Option<u32> {
    let mut best: Option<(usize, f32)> = None;
    for (idx, &score) in logits.iter().enumerate() {
        if score.is_nan() {
            continue;
        }
        match best {
            Some((_, top)) if score <= top => {}
            _ => best = Some((idx, score)),
        }
    }
    best.and_then(|(idx, _)| u32::try_from(idx).ok())
}

/// Decides the next decoder step given the logits for the current position
/// and the number of tokens generated so far (not counting the decoder start
/// token).
#[must_use]
pub fn next_step(
    logits: &[f32],
    generated: usize,
    eos_token_id: u32,
    params: &GenerationParams,
) -> Step {
    if generated >= params.max_length {
        return Step::Stop;
    }

    let eos = eos_token_id as usize;
    let token = if generated < params.min_length && eos < logits.len() {
        let mut masked = logits.to_vec();
        masked[eos] = f32::NEG_INFINITY;
        argmax(&masked)
    } else {
        argmax(logits)
    };

    match token {
        Some(t) if t == eos_token_id => Step::Stop,
        Some(t) => Step::Emit(t),
        None => Step::Stop,
    }
}
