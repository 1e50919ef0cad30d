//! Quiz question selection.
//!
//! The selector draws uniformly from the eligible set computed once up
//! front, so it terminates even when every candidate has been seen. The set
//! of previously seen ids is typically small (one quiz round), hence the
//! linear scan.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::domain::Question;

/// Pick a uniformly random question from `candidates`, excluding ids in
/// `seen`. Returns `None` on exhaustion: no candidates, or all of them seen.
pub fn draw_question<'a, R: Rng + ?Sized>(
    candidates: &'a [Question],
    seen: &[i64],
    rng: &mut R,
) -> Option<&'a Question> {
    let eligible: Vec<&Question> = candidates
        .iter()
        .filter(|question| !seen.contains(&question.id))
        .collect();
    eligible.choose(rng).copied()
}
