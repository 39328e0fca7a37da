//! Inventory rule library.
//!
//! Stateless, deterministic functions implementing each atomic rule of the
//! daily update. None of them mutate their arguments and none of them fail:
//! arithmetic is fixed-width `i32` and wraps on overflow in every build
//! profile.
//!
//! Rulesets compose these functions into a per-category update; see
//! [`ruleset`](crate::ruleset).

/// Amount `sell_in` drops by each day.
pub const SELL_IN_ADJUSTMENT: i32 = 1;

/// `sell_in` values strictly below this have passed.
pub const SELL_IN_CUTOFF: i32 = 0;

/// Standard daily quality loss.
pub const QUALITY_DEGRADES_BY: i32 = 1;

/// Multiplier on quality loss once `sell_in` has passed.
pub const SELL_IN_PASSED_MULTIPLIER: i32 = 2;

/// Daily quality gain for maturing items.
pub const QUALITY_MATURES_BY: i32 = 1;

/// Event items at or below this many days are "close".
pub const EVENT_CLOSE_THRESHOLD: i32 = 10;

/// Quality gain for "close" event items.
pub const EVENT_CLOSE_QUALITY_INCREASE: i32 = 2;

/// Event items at or below this many days are "imminent".
pub const EVENT_IMMINENT_THRESHOLD: i32 = 5;

/// Quality gain for "imminent" event items.
pub const EVENT_IMMINENT_QUALITY_INCREASE: i32 = 3;

/// Quality of an event item once the event has passed.
pub const EVENT_PASSED_QUALITY: i32 = 0;

/// Conjured items degrade this many times faster than normal ones.
pub const CONJURED_DEGRADE_MULTIPLIER: i32 = 2;

/// Lowest quality allowed after a tick.
pub const MIN_QUALITY: i32 = 0;

/// Highest quality allowed after a tick.
pub const MAX_QUALITY: i32 = 50;

/// Apply the standard daily `sell_in` adjustment.
///
/// Wraps at `i32::MIN`.
///
/// # Examples
///
/// ```rust
/// use gilded_rose::rules::decrement_sell_in;
///
/// assert_eq!(decrement_sell_in(5), 4);
/// assert_eq!(decrement_sell_in(0), -1);
/// assert_eq!(decrement_sell_in(i32::MIN), i32::MAX);
/// ```
pub fn decrement_sell_in(sell_in: i32) -> i32 {
    sell_in.wrapping_sub(SELL_IN_ADJUSTMENT)
}

/// Whether the sell-by date has passed.
///
/// # Examples
///
/// ```rust
/// use gilded_rose::rules::has_sell_in_passed;
///
/// assert!(has_sell_in_passed(-1));
/// assert!(!has_sell_in_passed(0));
/// ```
pub fn has_sell_in_passed(sell_in: i32) -> bool {
    sell_in < SELL_IN_CUTOFF
}

fn standard_degrade_amount(sell_in_passed: bool) -> i32 {
    if sell_in_passed {
        QUALITY_DEGRADES_BY * SELL_IN_PASSED_MULTIPLIER
    } else {
        QUALITY_DEGRADES_BY
    }
}

/// Quality of an item that degrades over time.
///
/// Loses 1 per day, or 2 once the sell-by date has passed.
///
/// # Examples
///
/// ```rust
/// use gilded_rose::rules::degrade_quality;
///
/// assert_eq!(degrade_quality(10, false), 9);
/// assert_eq!(degrade_quality(10, true), 8);
/// ```
pub fn degrade_quality(quality: i32, sell_in_passed: bool) -> i32 {
    quality.wrapping_sub(standard_degrade_amount(sell_in_passed))
}

/// Quality of an item that improves with age.
///
/// # Examples
///
/// ```rust
/// use gilded_rose::rules::mature_quality;
///
/// assert_eq!(mature_quality(49), 50);
/// ```
pub fn mature_quality(quality: i32) -> i32 {
    quality.wrapping_add(QUALITY_MATURES_BY)
}

/// Quality of an item tied to an event on its sell-by date.
///
/// Gains 1 while the event is far off, 2 within ten days, 3 within five
/// days, and drops to zero once the event has passed.
///
/// # Examples
///
/// ```rust
/// use gilded_rose::rules::event_quality;
///
/// assert_eq!(event_quality(20, 11), 21);
/// assert_eq!(event_quality(20, 10), 22);
/// assert_eq!(event_quality(20, 5), 23);
/// assert_eq!(event_quality(20, 0), 23);
/// assert_eq!(event_quality(20, -1), 0);
/// ```
pub fn event_quality(quality: i32, sell_in: i32) -> i32 {
    if has_sell_in_passed(sell_in) {
        return EVENT_PASSED_QUALITY;
    }

    if sell_in <= EVENT_IMMINENT_THRESHOLD {
        return quality.wrapping_add(EVENT_IMMINENT_QUALITY_INCREASE);
    }

    if sell_in <= EVENT_CLOSE_THRESHOLD {
        return quality.wrapping_add(EVENT_CLOSE_QUALITY_INCREASE);
    }

    // Far from the event it matures like any aged item.
    mature_quality(quality)
}

/// Quality of a conjured item: twice the standard degrade rate.
///
/// # Examples
///
/// ```rust
/// use gilded_rose::rules::conjured_quality;
///
/// assert_eq!(conjured_quality(10, false), 8);
/// assert_eq!(conjured_quality(10, true), 6);
/// ```
pub fn conjured_quality(quality: i32, sell_in_passed: bool) -> i32 {
    let amount = standard_degrade_amount(sell_in_passed) * CONJURED_DEGRADE_MULTIPLIER;
    quality.wrapping_sub(amount)
}

/// Raise quality to the minimum if it fell below it.
pub fn clamp_min(quality: i32) -> i32 {
    quality.max(MIN_QUALITY)
}

/// Lower quality to the maximum if it rose above it.
pub fn clamp_max(quality: i32) -> i32 {
    quality.min(MAX_QUALITY)
}

/// Sulfuras never changes. This rule does nothing.
pub fn sulfuras_noop() {}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDARIES: [i32; 7] = [i32::MAX, 36500, 1, 0, -1, -36500, i32::MIN];

    #[test]
    fn test_decrement_sell_in() {
        for sell_in in BOUNDARIES {
            assert_eq!(decrement_sell_in(sell_in), sell_in.wrapping_sub(1));
        }
    }

    #[test]
    fn test_decrement_sell_in_wraps_at_min() {
        assert_eq!(decrement_sell_in(i32::MIN), i32::MAX);
    }

    #[test]
    fn test_sell_in_passed() {
        for sell_in in [-1, -36500, i32::MIN] {
            assert!(has_sell_in_passed(sell_in), "{sell_in} should have passed");
        }
        for sell_in in [0, 1, 36500, i32::MAX] {
            assert!(!has_sell_in_passed(sell_in), "{sell_in} should not have passed");
        }
    }

    #[test]
    fn test_degrade_quality() {
        for quality in BOUNDARIES {
            assert_eq!(degrade_quality(quality, false), quality.wrapping_sub(1));
            assert_eq!(degrade_quality(quality, true), quality.wrapping_sub(2));
        }
    }

    #[test]
    fn test_mature_quality() {
        for quality in BOUNDARIES {
            assert_eq!(mature_quality(quality), quality.wrapping_add(1));
        }
        assert_eq!(mature_quality(i32::MAX), i32::MIN);
    }

    #[test]
    fn test_event_quality_far() {
        for (quality, sell_in) in [(i32::MIN, 11), (-100, 11), (0, 11), (100, 36500)] {
            assert_eq!(event_quality(quality, sell_in), quality + 1);
        }
        assert_eq!(event_quality(i32::MAX, i32::MAX), i32::MIN);
    }

    #[test]
    fn test_event_quality_close() {
        for (quality, sell_in) in [(i32::MIN, 10), (-100, 9), (-1, 8), (0, 7), (100, 6)] {
            assert_eq!(event_quality(quality, sell_in), quality + 2);
        }
    }

    #[test]
    fn test_event_quality_imminent() {
        for (quality, sell_in) in [(i32::MIN, 5), (-100, 4), (-1, 3), (0, 2), (1, 1), (100, 0)] {
            assert_eq!(event_quality(quality, sell_in), quality + 3);
        }
    }

    #[test]
    fn test_event_quality_passed() {
        for (quality, sell_in) in [
            (i32::MIN, -1),
            (-100, -10),
            (1, -365000),
            (i32::MAX, i32::MIN),
        ] {
            assert_eq!(event_quality(quality, sell_in), 0);
        }
    }

    #[test]
    fn test_conjured_quality() {
        for quality in BOUNDARIES {
            assert_eq!(conjured_quality(quality, false), quality.wrapping_sub(2));
            assert_eq!(conjured_quality(quality, true), quality.wrapping_sub(4));
        }
    }

    #[test]
    fn test_clamps() {
        assert_eq!(clamp_min(-1), 0);
        assert_eq!(clamp_min(i32::MIN), 0);
        assert_eq!(clamp_min(0), 0);
        assert_eq!(clamp_min(7), 7);

        assert_eq!(clamp_max(51), 50);
        assert_eq!(clamp_max(i32::MAX), 50);
        assert_eq!(clamp_max(50), 50);
        assert_eq!(clamp_max(-7), -7);
    }
}
