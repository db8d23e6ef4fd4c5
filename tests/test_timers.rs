use std::time::{Duration, Instant};

use star_defender::timers::{Cadence, Cadences, TickEvents, Timings};

#[test]
fn default_timings_match_reference_cadences() {
    let t = Timings::default();
    assert_eq!(t.fire_every, Duration::from_millis(100));
    assert_eq!(t.spawn_every, Duration::from_millis(2000));
    assert_eq!(t.fall_every, Duration::from_millis(500));
    assert_eq!(t.tick_delay, Duration::from_millis(10));
}

#[test]
fn cadence_not_due_before_threshold() {
    let t0 = Instant::now();
    let mut c = Cadence::new(Duration::from_millis(100), t0);
    assert!(!c.due(t0));
    assert!(!c.due(t0 + Duration::from_millis(50)));
    assert!(!c.due(t0 + Duration::from_millis(99)));
}

#[test]
fn cadence_due_at_threshold_then_resets() {
    let t0 = Instant::now();
    let mut c = Cadence::new(Duration::from_millis(100), t0);
    assert!(c.due(t0 + Duration::from_millis(100)));
    // Firing reset the clock to the firing instant.
    assert!(!c.due(t0 + Duration::from_millis(150)));
    assert!(c.due(t0 + Duration::from_millis(200)));
}

#[test]
fn cadence_checking_without_firing_has_no_side_effect() {
    let t0 = Instant::now();
    let mut c = Cadence::new(Duration::from_millis(100), t0);
    for ms in [10, 20, 30, 40, 50] {
        assert!(!c.due(t0 + Duration::from_millis(ms)));
    }
    // The not-due checks did not push the deadline back.
    assert!(c.due(t0 + Duration::from_millis(100)));
}

#[test]
fn cadences_fire_independently() {
    let t0 = Instant::now();
    let timings = Timings::default();
    let mut cadences = Cadences::new(&timings, t0);

    // 100 ms in: only fire is due.
    assert_eq!(
        cadences.poll(t0 + Duration::from_millis(100)),
        TickEvents { fire: true, spawn: false, fall: false }
    );
    // 500 ms in: fire (reset at 100) and fall are both due.
    assert_eq!(
        cadences.poll(t0 + Duration::from_millis(500)),
        TickEvents { fire: true, spawn: false, fall: true }
    );
    // 2000 ms in: everything is due.
    assert_eq!(
        cadences.poll(t0 + Duration::from_millis(2000)),
        TickEvents { fire: true, spawn: true, fall: true }
    );
}
