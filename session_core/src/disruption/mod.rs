//! Disruption scheduler.
//!
//! While sanity is low the host runs a fixed-period tick, and each tick
//! rolls for a glitch, then for a hallucination. Disruptions only touch the
//! transient store, never the persisted state, so an ill-timed tick cannot
//! corrupt a save.

use std::time::Duration;

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::transient::Transients;

/// Period between disruption rolls while a session is on screen.
pub const TICK_PERIOD: Duration = Duration::from_secs(3);

/// Sanity must drop below this before disruptions start.
pub const SANITY_THRESHOLD: u8 = 50;

/// Chance per tick of a glitch.
pub const GLITCH_CHANCE: f64 = 0.3;

/// Chance of a hallucination on a tick whose glitch roll failed.
pub const HALLUCINATION_CHANCE: f64 = 0.1;

/// What a tick produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Disruption {
    Glitch,
    Hallucination(String),
}

/// Rolls one disruption tick.
///
/// Nothing happens at [`SANITY_THRESHOLD`] or above. Below it, the glitch is
/// rolled first and only a failed glitch roll proceeds to the hallucination
/// roll, so at most one disruption fires per tick.
pub fn roll_disruption<R: Rng + ?Sized>(
    sanity: u8,
    pool: &[String],
    rng: &mut R,
    effects: &mut Transients,
) -> Option<Disruption> {
    if sanity >= SANITY_THRESHOLD {
        return None;
    }

    if rng.gen_bool(GLITCH_CHANCE) {
        effects.trigger_glitch();
        debug!("disruption tick: glitch at sanity {sanity}");
        return Some(Disruption::Glitch);
    }

    if rng.gen_bool(HALLUCINATION_CHANCE) {
        if let Some(message) = pool.choose(rng) {
            effects.show_hallucination(message.clone());
            debug!("disruption tick: hallucination at sanity {sanity}");
            return Some(Disruption::Hallucination(message.clone()));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn pool() -> Vec<String> {
        vec![
            "Ты не один здесь...".to_string(),
            "Обернись. Медленно.".to_string(),
        ]
    }

    #[test]
    fn test_no_disruption_at_or_above_threshold() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut effects = Transients::new();
        let pool = pool();

        for sanity in [SANITY_THRESHOLD, 75, 100] {
            for _ in 0..100 {
                assert_eq!(roll_disruption(sanity, &pool, &mut rng, &mut effects), None);
            }
        }
        assert!(effects.glitch().is_none());
        assert!(effects.hallucination().is_none());
    }

    #[test]
    fn test_low_sanity_eventually_disrupts() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut effects = Transients::new();
        let pool = pool();

        let mut glitches = 0;
        let mut hallucinations = 0;
        for _ in 0..500 {
            match roll_disruption(30, &pool, &mut rng, &mut effects) {
                Some(Disruption::Glitch) => {
                    glitches += 1;
                    assert!(effects.glitch().is_some());
                }
                Some(Disruption::Hallucination(message)) => {
                    hallucinations += 1;
                    assert!(pool.contains(&message));
                    let (_, shown) = effects.hallucination().unwrap();
                    assert_eq!(shown, message);
                }
                None => {}
            }
        }

        // 500 draws at 30% and 7% effective rates cannot plausibly miss.
        assert!(glitches > 0);
        assert!(hallucinations > 0);
        assert!(glitches > hallucinations);
    }

    #[test]
    fn test_empty_pool_never_hallucinates() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut effects = Transients::new();

        for _ in 0..500 {
            let rolled = roll_disruption(10, &[], &mut rng, &mut effects);
            assert!(!matches!(rolled, Some(Disruption::Hallucination(_))));
        }
        assert!(effects.hallucination().is_none());
    }

    #[test]
    fn test_threshold_boundary_is_exclusive() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut effects = Transients::new();
        let pool = pool();

        // 49 may disrupt, 50 never does.
        let mut fired = false;
        for _ in 0..500 {
            if roll_disruption(49, &pool, &mut rng, &mut effects).is_some() {
                fired = true;
            }
            assert_eq!(roll_disruption(50, &pool, &mut rng, &mut effects), None);
        }
        assert!(fired);
    }
}
