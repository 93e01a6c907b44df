use spotter_types::Tier;

/// Number of most recent answers the adaptation looks at
pub const ADAPTATION_WINDOW: usize = 3;

/// Pick the next tier from the trailing window of correctness flags.
///
/// Three straight hits step up one tier, three straight misses step down one.
/// Anything else, or fewer than three flags, keeps the current tier.
pub fn next_difficulty(current: Tier, recent: &[bool]) -> Tier {
    if recent.len() < ADAPTATION_WINDOW {
        return current;
    }

    let window = &recent[recent.len() - ADAPTATION_WINDOW..];
    if window.iter().all(|&correct| correct) {
        current.harder()
    } else if window.iter().all(|&correct| !correct) {
        current.easier()
    } else {
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_hits_step_up() {
        assert_eq!(next_difficulty(Tier::Medium, &[true, true, true]), Tier::Hard);
        assert_eq!(next_difficulty(Tier::Easy, &[true, true, true]), Tier::Medium);
    }

    #[test]
    fn test_three_misses_step_down() {
        assert_eq!(next_difficulty(Tier::Medium, &[false, false, false]), Tier::Easy);
        assert_eq!(next_difficulty(Tier::Hard, &[false, false, false]), Tier::Medium);
    }

    #[test]
    fn test_ceiling_and_floor_hold() {
        assert_eq!(next_difficulty(Tier::Hard, &[true, true, true]), Tier::Hard);
        assert_eq!(next_difficulty(Tier::Easy, &[false, false, false]), Tier::Easy);
    }

    #[test]
    fn test_mixed_window_unchanged() {
        assert_eq!(next_difficulty(Tier::Easy, &[true, false, true]), Tier::Easy);
        assert_eq!(next_difficulty(Tier::Hard, &[false, true, false]), Tier::Hard);
    }

    #[test]
    fn test_short_history_unchanged() {
        for current in Tier::ALL {
            assert_eq!(next_difficulty(current, &[]), current);
            assert_eq!(next_difficulty(current, &[true]), current);
            assert_eq!(next_difficulty(current, &[false, false]), current);
        }
    }

    #[test]
    fn test_only_trailing_window_counts() {
        // Old misses are outside the window
        let flags = [false, false, false, false, true, true, true];
        assert_eq!(next_difficulty(Tier::Medium, &flags), Tier::Hard);

        let flags = [true, true, true, true, false, true];
        assert_eq!(next_difficulty(Tier::Medium, &flags), Tier::Medium);
    }
}
