//! Interaction controller tests
//!
//! These tests drive the press → burst → reveal cycle with a seeded RNG and
//! synthetic timestamps.

use itsajoke::constants::{
    BURST_DURATION, FLASH_DURATION, PARTICLE_COUNT, PARTICLE_MAX_DISTANCE, PARTICLE_MIN_DISTANCE,
};
use itsajoke::{InteractionController, JokeError, JokeEvent, JokeResult, ModalContent, Phase};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::f32::consts::TAU;
use std::time::{Duration, Instant};

const AREA_HEIGHT: f32 = 800.0;
const FRAME: f32 = 1.0 / 60.0;

/// Press and release, returning the release instant and cycle id
fn press_and_release(
    controller: &mut InteractionController,
    rng: &mut StdRng,
) -> (Instant, uuid::Uuid) {
    assert!(controller.on_press_start());
    let released_at = Instant::now();
    let cycle = controller
        .on_press_end(released_at, AREA_HEIGHT, rng)
        .expect("release should start a cycle");
    (released_at, cycle)
}

#[test]
fn test_full_cycle_returns_to_idle() {
    let mut controller = InteractionController::new();
    let mut rng = StdRng::seed_from_u64(1);

    assert_eq!(controller.phase(), Phase::Idle);
    controller.on_press_start();
    assert_eq!(controller.phase(), Phase::Pressed);

    let released_at = Instant::now();
    controller.on_press_end(released_at, AREA_HEIGHT, &mut rng);
    assert_eq!(controller.phase(), Phase::Bursting);
    assert_eq!(controller.joke(), Some(&JokeResult::Pending));

    controller.tick(released_at + BURST_DURATION, FRAME);
    assert_eq!(controller.phase(), Phase::ModalShown);
    assert!(controller.is_modal_visible());
    assert!(controller.burst().is_none());

    controller.dismiss();
    assert_eq!(controller.phase(), Phase::Idle);
    assert!(!controller.is_modal_visible());
}

#[test]
fn test_modal_revealed_exactly_once_at_burst_end() {
    let mut controller = InteractionController::new();
    let mut rng = StdRng::seed_from_u64(2);
    let (released_at, _) = press_and_release(&mut controller, &mut rng);

    assert_eq!(controller.bursts_started(), 1);

    controller.tick(released_at + Duration::from_millis(500), FRAME);
    controller.tick(released_at + Duration::from_millis(999), FRAME);
    assert!(!controller.is_modal_visible());
    assert!(controller.burst().is_some());

    controller.tick(released_at + Duration::from_millis(1000), FRAME);
    assert!(controller.is_modal_visible());
    assert_eq!(controller.modal_reveals(), 1);

    for ms in [1016, 1500, 5000] {
        controller.tick(released_at + Duration::from_millis(ms), FRAME);
    }
    assert_eq!(controller.modal_reveals(), 1);
    assert_eq!(controller.bursts_started(), 1);
}

#[test]
fn test_reveal_does_not_wait_for_fetch() {
    let mut controller = InteractionController::new();
    let mut rng = StdRng::seed_from_u64(3);
    let (released_at, _) = press_and_release(&mut controller, &mut rng);

    controller.tick(released_at + BURST_DURATION, FRAME);

    let snapshot = controller.snapshot(released_at + BURST_DURATION);
    assert!(snapshot.modal_visible);
    assert_eq!(snapshot.modal, ModalContent::Loading);
    assert_eq!(snapshot.modal.text(), "Loading...");
}

#[test]
fn test_early_result_shows_on_reveal() {
    let mut controller = InteractionController::new();
    let mut rng = StdRng::seed_from_u64(4);
    let (released_at, cycle) = press_and_release(&mut controller, &mut rng);

    assert!(controller.on_joke_settled(cycle, Ok("You're the punchline.".to_string())));
    assert!(!controller.is_modal_visible());

    controller.tick(released_at + BURST_DURATION, FRAME);
    let snapshot = controller.snapshot(released_at + BURST_DURATION);
    assert_eq!(
        snapshot.modal,
        ModalContent::Joke("You're the punchline.".to_string())
    );
}

#[test]
fn test_late_result_updates_open_modal() {
    let mut controller = InteractionController::new();
    let mut rng = StdRng::seed_from_u64(5);
    let (released_at, cycle) = press_and_release(&mut controller, &mut rng);

    let revealed = released_at + BURST_DURATION;
    controller.tick(revealed, FRAME);
    assert_eq!(controller.snapshot(revealed).modal, ModalContent::Loading);
    assert!(controller.is_animating());

    controller.handle_event(JokeEvent::Settled {
        cycle,
        outcome: Err(JokeError::Api("rate limited".to_string())),
    });

    let later = revealed + Duration::from_millis(300);
    let snapshot = controller.snapshot(later);
    assert!(snapshot.modal_visible);
    assert_eq!(snapshot.modal.text(), "Error: rate limited");
}

#[test]
fn test_particle_batch_geometry() {
    let mut controller = InteractionController::new();
    let mut rng = StdRng::seed_from_u64(6);
    press_and_release(&mut controller, &mut rng);

    let burst = controller.burst().expect("burst should be active");
    assert_eq!(burst.particles().len(), PARTICLE_COUNT);

    let min = PARTICLE_MIN_DISTANCE * AREA_HEIGHT;
    let max = PARTICLE_MAX_DISTANCE * AREA_HEIGHT;
    for particle in burst.particles() {
        let magnitude = particle.target.length();
        assert!(
            magnitude >= min - 0.01 && magnitude <= max + 0.01,
            "displacement {} outside [{}, {}]",
            magnitude,
            min,
            max
        );
        assert!((0.0..TAU).contains(&particle.angle));
    }
}

#[test]
fn test_particle_angles_cover_all_quadrants_evenly() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut quadrants = [0usize; 4];

    for _ in 0..1000 {
        let mut controller = InteractionController::new();
        press_and_release(&mut controller, &mut rng);
        for particle in controller.burst().unwrap().particles() {
            let q = ((particle.angle / TAU) * 4.0).floor() as usize;
            quadrants[q.min(3)] += 1;
        }
    }

    let total: usize = quadrants.iter().sum();
    assert_eq!(total, 1000 * PARTICLE_COUNT);
    for count in quadrants {
        assert!(
            (2700..=3300).contains(&count),
            "quadrant counts not uniform: {:?}",
            quadrants
        );
    }
}

#[test]
fn test_flash_opacity_is_non_increasing() {
    let mut controller = InteractionController::new();
    let mut rng = StdRng::seed_from_u64(8);
    let (released_at, _) = press_and_release(&mut controller, &mut rng);

    let mut previous = f32::INFINITY;
    let mut ms = 0;
    while ms <= FLASH_DURATION.as_millis() as u64 {
        let opacity = controller
            .snapshot(released_at + Duration::from_millis(ms))
            .flash_opacity
            .expect("flash active during burst");
        assert!(opacity <= previous, "flash brightened at {}ms", ms);
        previous = opacity;
        ms += 5;
    }

    let start = controller.snapshot(released_at).flash_opacity.unwrap();
    let end = controller
        .snapshot(released_at + FLASH_DURATION)
        .flash_opacity
        .unwrap();
    assert_eq!(start, 1.0);
    assert_eq!(end, 0.0);
}

#[test]
fn test_presses_ignored_until_dismissed() {
    let mut controller = InteractionController::new();
    let mut rng = StdRng::seed_from_u64(9);
    let (released_at, first_cycle) = press_and_release(&mut controller, &mut rng);

    // Mid-burst
    assert!(!controller.on_press_start());
    assert!(controller
        .on_press_end(released_at, AREA_HEIGHT, &mut rng)
        .is_none());

    // Modal open
    controller.tick(released_at + BURST_DURATION, FRAME);
    assert!(!controller.on_press_start());

    assert_eq!(controller.bursts_started(), 1);
    assert_eq!(controller.current_cycle(), Some(first_cycle));
}

#[test]
fn test_stale_outcome_is_discarded() {
    let mut controller = InteractionController::new();
    let mut rng = StdRng::seed_from_u64(10);

    let (first_release, first_cycle) = press_and_release(&mut controller, &mut rng);
    controller.tick(first_release + BURST_DURATION, FRAME);
    controller.dismiss();

    let (_, second_cycle) = press_and_release(&mut controller, &mut rng);
    assert_ne!(first_cycle, second_cycle);

    // First cycle's fetch settles late
    assert!(!controller.on_joke_settled(first_cycle, Ok("old joke".to_string())));
    assert_eq!(controller.joke(), Some(&JokeResult::Pending));

    assert!(controller.on_joke_settled(second_cycle, Ok("new joke".to_string())));
    assert_eq!(
        controller.joke(),
        Some(&JokeResult::Success("new joke".to_string()))
    );
}

#[test]
fn test_button_scale_follows_press() {
    let mut controller = InteractionController::new();
    let mut rng = StdRng::seed_from_u64(11);
    let start = Instant::now();

    controller.on_press_start();
    for _ in 0..60 {
        controller.tick(start, FRAME);
    }
    assert!((controller.button_scale() - 0.92).abs() < 1e-3);

    controller.on_press_end(start, AREA_HEIGHT, &mut rng);
    for _ in 0..60 {
        controller.tick(start, FRAME);
    }
    assert!((controller.button_scale() - 1.0).abs() < 1e-3);
}

#[test]
fn test_snapshot_without_burst_has_no_overlay() {
    let controller = InteractionController::new();
    let snapshot = controller.snapshot(Instant::now());
    assert!(snapshot.flash_opacity.is_none());
    assert!(snapshot.particles.is_empty());
    assert_eq!(snapshot.modal, ModalContent::Placeholder);
}
