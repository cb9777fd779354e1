//! Signal timer behaviour
//!
//! Validates the per-direction countdown and the fixed color ring.

use smart_signal::simulation::{
    tick, transition, Direction, SignalBoard, SignalColor, SignalState, SignalTimings,
};

fn state(color: SignalColor, remaining: u32) -> SignalState {
    SignalState::new(color, remaining)
}

#[test]
fn test_tick_counts_down() {
    let timings = SignalTimings::default();
    assert_eq!(
        tick(state(SignalColor::Red, 1), &timings),
        state(SignalColor::Red, 0)
    );
}

#[test]
fn test_tick_transitions_at_zero() {
    let timings = SignalTimings::default();
    assert_eq!(
        tick(state(SignalColor::Red, 0), &timings),
        state(SignalColor::Green, 30)
    );
    assert_eq!(
        tick(state(SignalColor::Green, 0), &timings),
        state(SignalColor::Yellow, 5)
    );
    assert_eq!(
        tick(state(SignalColor::Yellow, 0), &timings),
        state(SignalColor::Red, 45)
    );
}

#[test]
fn test_transition_ring() {
    assert_eq!(transition(SignalColor::Red), SignalColor::Green);
    assert_eq!(transition(SignalColor::Green), SignalColor::Yellow);
    assert_eq!(transition(SignalColor::Yellow), SignalColor::Red);
}

#[test]
fn test_custom_timings_used_on_transition() {
    let timings = SignalTimings::new(10, 7, 2).unwrap();
    assert_eq!(
        tick(state(SignalColor::Yellow, 0), &timings),
        state(SignalColor::Red, 10)
    );
    assert_eq!(timings.cycle_period(), 22);
}

#[test]
fn test_zero_duration_rejected() {
    assert!(SignalTimings::new(45, 30, 0).is_err());
    assert!(SignalTimings::new(0, 30, 5).is_err());
    assert!(SignalTimings::default().validate().is_ok());
}

#[test]
fn test_cycle_returns_to_start_and_visits_every_color() {
    let timings = SignalTimings::default();
    let period = timings.cycle_period();
    assert_eq!(period, 83);

    for color in [SignalColor::Red, SignalColor::Green, SignalColor::Yellow] {
        for remaining in [0, 1, timings.duration_for(color)] {
            let start = state(color, remaining);
            let mut current = start;
            let mut seen = vec![current.color];

            for _ in 0..period {
                current = tick(current, &timings);
                if !seen.contains(&current.color) {
                    seen.push(current.color);
                }
            }

            assert_eq!(current, start, "cycle did not close from {:?}", start);
            assert_eq!(seen.len(), 3, "not every color visited from {:?}", start);
        }
    }
}

#[test]
fn test_board_initial_state() {
    let board = SignalBoard::initial();
    assert_eq!(board.get(Direction::North), state(SignalColor::Red, 25));
    assert_eq!(board.get(Direction::South), state(SignalColor::Green, 18));
    assert_eq!(board.get(Direction::East), state(SignalColor::Red, 40));
    assert_eq!(board.get(Direction::West), state(SignalColor::Yellow, 3));

    // Initial countdowns never exceed the color's duration
    let timings = SignalTimings::default();
    for (_, s) in board.iter() {
        assert!(s.remaining_seconds <= timings.duration_for(s.color));
    }
}

#[test]
fn test_board_ticks_directions_independently() {
    let timings = SignalTimings::default();
    let mut board = SignalBoard::initial();

    let mut transitions = 0;
    for _ in 0..4 {
        transitions += board.tick_all(&timings);
    }

    assert_eq!(transitions, 1);
    assert_eq!(board.get(Direction::North), state(SignalColor::Red, 21));
    assert_eq!(board.get(Direction::South), state(SignalColor::Green, 14));
    assert_eq!(board.get(Direction::East), state(SignalColor::Red, 36));
    assert_eq!(board.get(Direction::West), state(SignalColor::Red, 45));
}

#[test]
fn test_all_directions_can_be_green_together() {
    let timings = SignalTimings::default();
    let mut board = SignalBoard::initial();
    for direction in Direction::ALL {
        board.set(direction, state(SignalColor::Red, 0));
    }

    board.tick_all(&timings);
    assert_eq!(board.count_showing(SignalColor::Green), 4);
}

#[test]
fn test_remaining_never_negative_over_long_run() {
    let timings = SignalTimings::default();
    let mut board = SignalBoard::initial();
    for _ in 0..1000 {
        board.tick_all(&timings);
        for (_, s) in board.iter() {
            assert!(s.remaining_seconds <= timings.duration_for(s.color));
        }
    }
}

#[test]
fn test_clamped_state_floors_negative() {
    assert_eq!(
        SignalState::clamped(SignalColor::Green, -4),
        state(SignalColor::Green, 0)
    );
    assert_eq!(
        SignalState::clamped(SignalColor::Green, 12),
        state(SignalColor::Green, 12)
    );
}
