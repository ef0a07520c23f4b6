//! Transient presentation effects.
//!
//! Glitches, hallucination messages and achievement banners are shown for a
//! fixed duration and then cleared by a host timer. Each emission carries a
//! monotonic token, and a clear only lands when its token matches the
//! emission currently showing. A timer belonging to an effect that has since
//! been replaced therefore cannot wipe the newer one.

use std::time::Duration;

/// Kinds of transient effect the engine can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransientKind {
    /// Screen-wide visual distortion.
    Glitch,
    /// Whispered message drawn from the hallucination pool.
    Hallucination,
    /// Achievement unlock banner.
    AchievementBanner,
}

impl TransientKind {
    /// How long the host should display this effect before clearing it.
    pub fn display_duration(&self) -> Duration {
        match self {
            TransientKind::Glitch => Duration::from_millis(500),
            TransientKind::Hallucination => Duration::from_millis(3000),
            TransientKind::AchievementBanner => Duration::from_millis(3000),
        }
    }
}

/// Handle identifying one emission of a transient effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransientToken(u64);

/// One live emission: the payload plus the token that may clear it.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Emission<T> {
    token: TransientToken,
    payload: T,
}

/// The set of currently visible transient effects, at most one per kind.
#[derive(Debug, Clone, Default)]
pub struct Transients {
    next_token: u64,
    glitch: Option<Emission<()>>,
    hallucination: Option<Emission<String>>,
    banner: Option<Emission<String>>,
}

impl Transients {
    pub fn new() -> Self {
        Transients::default()
    }

    fn issue_token(&mut self) -> TransientToken {
        let token = TransientToken(self.next_token);
        self.next_token += 1;
        token
    }

    /// Starts a glitch, replacing any glitch already showing.
    pub fn trigger_glitch(&mut self) -> TransientToken {
        let token = self.issue_token();
        self.glitch = Some(Emission { token, payload: () });
        token
    }

    /// Shows a hallucination message, replacing any already showing.
    pub fn show_hallucination(&mut self, message: impl Into<String>) -> TransientToken {
        let token = self.issue_token();
        self.hallucination = Some(Emission {
            token,
            payload: message.into(),
        });
        token
    }

    /// Shows an achievement banner, replacing any already showing.
    pub fn show_banner(&mut self, title: impl Into<String>) -> TransientToken {
        let token = self.issue_token();
        self.banner = Some(Emission {
            token,
            payload: title.into(),
        });
        token
    }

    /// Token of the glitch currently showing.
    pub fn glitch(&self) -> Option<TransientToken> {
        self.glitch.as_ref().map(|emission| emission.token)
    }

    /// The hallucination currently showing.
    pub fn hallucination(&self) -> Option<(TransientToken, &str)> {
        self.hallucination
            .as_ref()
            .map(|emission| (emission.token, emission.payload.as_str()))
    }

    /// The banner currently showing.
    pub fn banner(&self) -> Option<(TransientToken, &str)> {
        self.banner
            .as_ref()
            .map(|emission| (emission.token, emission.payload.as_str()))
    }

    /// Clears one effect, but only if `token` matches the emission showing.
    ///
    /// Returns whether anything was cleared. A mismatch means the timer that
    /// fired belonged to an emission that has since been replaced.
    pub fn clear(&mut self, kind: TransientKind, token: TransientToken) -> bool {
        let showing = match kind {
            TransientKind::Glitch => self.glitch(),
            TransientKind::Hallucination => self.hallucination.as_ref().map(|e| e.token),
            TransientKind::AchievementBanner => self.banner.as_ref().map(|e| e.token),
        };
        if showing != Some(token) {
            return false;
        }

        match kind {
            TransientKind::Glitch => self.glitch = None,
            TransientKind::Hallucination => self.hallucination = None,
            TransientKind::AchievementBanner => self.banner = None,
        }
        true
    }

    /// Drops every live effect unconditionally.
    pub fn clear_all(&mut self) {
        self.glitch = None;
        self.hallucination = None;
        self.banner = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_are_distinct_across_kinds() {
        let mut effects = Transients::new();
        let a = effects.trigger_glitch();
        let b = effects.show_hallucination("...");
        let c = effects.show_banner("...");

        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(a, c);
    }

    #[test]
    fn test_clear_with_matching_token() {
        let mut effects = Transients::new();
        let token = effects.trigger_glitch();

        assert!(effects.clear(TransientKind::Glitch, token));
        assert!(effects.glitch().is_none());
    }

    #[test]
    fn test_stale_token_does_not_clear_replacement() {
        let mut effects = Transients::new();
        let first = effects.trigger_glitch();
        let second = effects.trigger_glitch();

        // The timer from the first emission fires after the second replaced it.
        assert!(!effects.clear(TransientKind::Glitch, first));
        assert_eq!(effects.glitch(), Some(second));

        assert!(effects.clear(TransientKind::Glitch, second));
        assert!(effects.glitch().is_none());
    }

    #[test]
    fn test_clear_checks_the_kind() {
        let mut effects = Transients::new();
        let token = effects.show_hallucination("Обернись.");

        assert!(!effects.clear(TransientKind::Glitch, token));
        assert!(effects.hallucination().is_some());
    }

    #[test]
    fn test_new_emission_replaces_payload() {
        let mut effects = Transients::new();
        effects.show_banner("Первая разгадка");
        effects.show_banner("Мастер загадок");

        let (_, title) = effects.banner().unwrap();
        assert_eq!(title, "Мастер загадок");
    }

    #[test]
    fn test_clear_all_drops_everything() {
        let mut effects = Transients::new();
        effects.trigger_glitch();
        effects.show_hallucination("...");
        effects.show_banner("...");

        effects.clear_all();
        assert!(effects.glitch().is_none());
        assert!(effects.hallucination().is_none());
        assert!(effects.banner().is_none());
    }

    #[test]
    fn test_display_durations() {
        assert_eq!(
            TransientKind::Glitch.display_duration(),
            Duration::from_millis(500)
        );
        assert_eq!(
            TransientKind::Hallucination.display_duration(),
            Duration::from_millis(3000)
        );
        assert_eq!(
            TransientKind::AchievementBanner.display_duration(),
            Duration::from_millis(3000)
        );
    }
}
