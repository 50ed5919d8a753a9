/// Decide whether the screen should be lit, given the base power state and
/// the inactivity policy.
pub fn screen_should_be_on(
    base_display_on: bool,
    auto_off_enabled: bool,
    idle_secs: u64,
    auto_off_timeout_secs: u64,
) -> bool {
    if !base_display_on {
        return false;
    }

    if auto_off_enabled && idle_secs >= auto_off_timeout_secs {
        return false;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::screen_should_be_on;
    use crate::config::SCREEN_AUTO_OFF_TIMEOUT_SECS;

    #[test]
    fn stays_on_before_timeout() {
        assert!(screen_should_be_on(true, true, 0, SCREEN_AUTO_OFF_TIMEOUT_SECS));
        assert!(screen_should_be_on(
            true,
            true,
            SCREEN_AUTO_OFF_TIMEOUT_SECS - 1,
            SCREEN_AUTO_OFF_TIMEOUT_SECS
        ));
    }

    #[test]
    fn turns_off_at_timeout() {
        assert!(!screen_should_be_on(
            true,
            true,
            SCREEN_AUTO_OFF_TIMEOUT_SECS,
            SCREEN_AUTO_OFF_TIMEOUT_SECS
        ));
    }

    #[test]
    fn auto_off_disabled_keeps_screen_on() {
        assert!(screen_should_be_on(true, false, 3600, SCREEN_AUTO_OFF_TIMEOUT_SECS));
    }

    #[test]
    fn base_state_off_wins() {
        assert!(!screen_should_be_on(false, false, 0, SCREEN_AUTO_OFF_TIMEOUT_SECS));
    }
}
