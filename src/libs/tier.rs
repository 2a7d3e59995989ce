//! Resolution tiers: the window length compared at a pair of positions is a
//! step function of their separation `j - i`.

/// Separation thresholds (inclusive upper bounds).
pub const NEAR_MAX_SEP: usize = 100_000;
pub const MID_MAX_SEP: usize = 1_000_000;

/// Window lengths per tier.
pub const NEAR_WINDOW: usize = 10;
pub const MID_WINDOW: usize = 100;
pub const FAR_WINDOW: usize = 1_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Near,
    Mid,
    Far,
}

/// One row of the policy table.
#[derive(Debug, Clone, Copy)]
pub struct TierStep {
    /// Largest separation (inclusive) this step applies to.
    pub max_sep: usize,
    pub tier: Tier,
    pub window: usize,
}

/// An ordered table of `(max_sep, window)` steps, last step unbounded.
///
/// Total over all separations: `resolve()` always returns a step.
#[derive(Debug, Clone)]
pub struct TierPolicy {
    steps: Vec<TierStep>,
}

impl Default for TierPolicy {
    fn default() -> Self {
        Self::new(vec![
            TierStep {
                max_sep: NEAR_MAX_SEP,
                tier: Tier::Near,
                window: NEAR_WINDOW,
            },
            TierStep {
                max_sep: MID_MAX_SEP,
                tier: Tier::Mid,
                window: MID_WINDOW,
            },
            TierStep {
                max_sep: usize::MAX,
                tier: Tier::Far,
                window: FAR_WINDOW,
            },
        ])
    }
}

impl TierPolicy {
    /// Steps must be sorted by `max_sep` and the last one must be unbounded.
    pub fn new(steps: Vec<TierStep>) -> Self {
        assert!(!steps.is_empty(), "policy table is empty");
        assert!(
            steps.windows(2).all(|w| w[0].max_sep < w[1].max_sep),
            "policy table not sorted by max_sep"
        );
        assert_eq!(
            steps[steps.len() - 1].max_sep,
            usize::MAX,
            "last policy step must cover all separations"
        );
        Self { steps }
    }

    /// A single-step policy with the same window at every separation.
    /// Handy for sequences far shorter than the default thresholds.
    pub fn uniform(window: usize) -> Self {
        Self::new(vec![TierStep {
            max_sep: usize::MAX,
            tier: Tier::Near,
            window,
        }])
    }

    pub fn resolve(&self, sep: usize) -> &TierStep {
        self.steps
            .iter()
            .find(|s| sep <= s.max_sep)
            .expect("last policy step is unbounded")
    }

    pub fn window_for(&self, sep: usize) -> usize {
        self.resolve(sep).window
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_boundaries() {
        let policy = TierPolicy::default();

        assert_eq!(policy.resolve(0).tier, Tier::Near);
        assert_eq!(policy.window_for(0), 10);

        // Both sides of each threshold
        assert_eq!(policy.resolve(100_000).tier, Tier::Near);
        assert_eq!(policy.window_for(100_000), 10);
        assert_eq!(policy.resolve(100_001).tier, Tier::Mid);
        assert_eq!(policy.window_for(100_001), 100);

        assert_eq!(policy.resolve(1_000_000).tier, Tier::Mid);
        assert_eq!(policy.window_for(1_000_000), 100);
        assert_eq!(policy.resolve(1_000_001).tier, Tier::Far);
        assert_eq!(policy.window_for(1_000_001), 1_000);

        assert_eq!(policy.resolve(usize::MAX).tier, Tier::Far);
    }

    #[test]
    fn test_window_monotonic() {
        let policy = TierPolicy::default();
        let seps = [
            0,
            1,
            99_999,
            100_000,
            100_001,
            500_000,
            1_000_000,
            1_000_001,
            50_000_000,
        ];
        let mut last = 0;
        for sep in seps {
            let w = policy.window_for(sep);
            assert!(w >= last, "window shrank at separation {}", sep);
            last = w;
        }
    }

    #[test]
    fn test_uniform() {
        let policy = TierPolicy::uniform(2);
        assert_eq!(policy.window_for(0), 2);
        assert_eq!(policy.window_for(10_000_000), 2);
    }

    #[test]
    #[should_panic(expected = "last policy step")]
    fn test_bounded_table_rejected() {
        TierPolicy::new(vec![TierStep {
            max_sep: 100,
            tier: Tier::Near,
            window: 10,
        }]);
    }
}
