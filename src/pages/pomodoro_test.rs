use super::*;

// =============================================================
// Phase arithmetic
// =============================================================

#[test]
fn work_counts_down_without_rolling() {
    assert_eq!(advance(Phase::Work, 100), (Phase::Work, 99, false));
}

#[test]
fn work_rolls_into_break_at_zero() {
    assert_eq!(advance(Phase::Work, 1), (Phase::Break, BREAK_SECS, true));
}

#[test]
fn break_rolls_back_into_work() {
    assert_eq!(advance(Phase::Break, 1), (Phase::Work, WORK_SECS, true));
}

#[test]
fn phase_durations_are_25_and_5_minutes() {
    assert_eq!(Phase::Work.duration_secs(), 1500);
    assert_eq!(Phase::Break.duration_secs(), 300);
}

// =============================================================
// Clock formatting
// =============================================================

#[test]
fn clock_pads_minutes_and_seconds() {
    assert_eq!(format_clock(1500), "25:00");
    assert_eq!(format_clock(61), "01:01");
    assert_eq!(format_clock(0), "00:00");
    assert_eq!(format_clock(9), "00:09");
}
