// Copyright 2020 The xi-editor Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Additional unit tests that cross file or module boundaries.


use std::time::Duration;

use float_cmp::approx_eq;

use crate::kurbo::{Point, Vec2};
use crate::*;
use harness::*;

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

#[test]
fn deck_drops_in_and_settles() {
    let mut harness = Harness::new();
    harness.load(3);
    assert_eq!(
        harness.deck().frame(0).unwrap().pose,
        CardPose::new(Vec2::new(0.0, -1000.0), 0.0, 1.5)
    );
    harness.settle();
    assert!(harness.paints() > 0);
    for frame in harness.deck().frames() {
        assert_eq!(frame.pose, CardPose::IDENTITY);
        assert_eq!(frame.phase, CardPhase::Idle);
        assert_eq!(
            frame.transform,
            "perspective(1500px) rotateY(0deg) rotateZ(0deg) scale(1)"
        );
    }
}

#[test]
fn held_card_lifts_and_follows() {
    let mut harness = Harness::new();
    harness.load(1);
    harness.settle();

    harness
        .drag(DragSample {
            index: 0,
            active: true,
            delta_x: 50.0,
            direction_x: 1.0,
            velocity_x: 0.4,
        })
        .unwrap();
    harness.settle();
    let frame = harness.deck().frame(0).unwrap();
    assert_eq!(frame.phase, CardPhase::Dragging);
    assert_eq!(frame.pose.offset, Vec2::new(50.0, 0.0));
    assert!(approx_eq!(f64, frame.pose.rotation, 0.5));
    assert!(approx_eq!(f64, frame.pose.scale, 1.1));

    // a slow release snaps back to the middle but keeps the tilt
    harness
        .drag(DragSample {
            index: 0,
            active: false,
            delta_x: 50.0,
            direction_x: 1.0,
            velocity_x: 0.1,
        })
        .unwrap();
    harness.settle();
    let frame = harness.deck().frame(0).unwrap();
    assert_eq!(frame.phase, CardPhase::Idle);
    assert_eq!(frame.pose.offset, Vec2::ZERO);
    assert!(approx_eq!(f64, frame.pose.rotation, 0.5));
    assert_eq!(frame.pose.scale, 1.0);
    assert_eq!(harness.pending_timers(), 0);
}

#[test]
fn flung_card_leaves_the_viewport() {
    let mut harness = Harness::new();
    harness.load(3);
    harness.settle();

    harness.swipe(2, 200.0, 0.5).unwrap();
    harness.settle();
    let frame = harness.deck().frame(2).unwrap();
    assert_eq!(frame.phase, CardPhase::Exiting);
    assert_eq!(frame.pose.offset.x, 200.0 + VIEWPORT_WIDTH);
    assert_eq!(frame.pose.rotation, 7.0);
    assert_eq!(
        frame.transform,
        "perspective(1500px) rotateY(0.7deg) rotateZ(7deg) scale(1)"
    );
    // the others did not move
    assert_eq!(harness.deck().frame(1).unwrap().pose, CardPose::IDENTITY);
    assert_eq!(harness.pending_timers(), 0);
}

#[test]
fn last_card_out_brings_the_deck_back() {
    let mut harness = Harness::new();
    harness.load(2);
    harness.settle();

    let released_at = harness.now();
    harness.swipe(1, 150.0, 0.6).unwrap();
    harness.swipe(0, -150.0, 0.6).unwrap();
    assert!(harness.deck().stack().is_fully_exited());
    assert_eq!(harness.pending_timers(), 1);
    assert_eq!(harness.deck().pending_resets().len(), 1);

    harness.advance(ms(592));
    assert!(harness.deck().stack().is_fully_exited());

    harness.advance(ms(16));
    assert_eq!(harness.now() - released_at, ms(608));
    let stack = harness.deck().stack();
    assert!(!stack.is_fully_exited());
    assert_eq!(stack.exited_count(), 0);
    for card in stack.cards() {
        assert!(!card.exited);
        assert_eq!(card.pose, CardPose::IDENTITY);
    }
    assert!(harness.deck().pending_resets().is_empty());

    // the cards drop in from above again
    let frame = harness.deck().frame(0).unwrap();
    assert_eq!(frame.phase, CardPhase::Idle);
    assert!(frame.pose.offset.y < -900.0);

    harness.settle();
    for frame in harness.deck().frames() {
        assert_eq!(frame.pose, CardPose::IDENTITY);
    }
}

#[test]
fn reset_timers_are_not_cancelled() {
    let mut harness = Harness::new();
    harness.load(1);
    harness.settle();

    harness.swipe(0, 100.0, 0.5).unwrap();
    harness.advance(ms(304));
    // another release of the gone card asks for a second reset
    harness
        .drag(DragSample {
            index: 0,
            active: false,
            delta_x: 100.0,
            direction_x: 1.0,
            velocity_x: 0.0,
        })
        .unwrap();
    assert_eq!(harness.pending_timers(), 2);

    harness.advance(ms(304));
    assert_eq!(harness.deck().stack().exited_count(), 0);

    harness.swipe(0, 100.0, 0.5).unwrap();
    assert!(harness.deck().stack().is_fully_exited());

    // the second timer of the previous cycle still fires
    harness.advance(ms(304));
    assert_eq!(harness.deck().stack().exited_count(), 0);
    assert_eq!(harness.pending_timers(), 1);

    harness.advance(ms(304));
    assert_eq!(harness.pending_timers(), 0);
    assert_eq!(harness.deck().stack().exited_count(), 0);
}

#[test]
fn settled_deck_does_not_repaint() {
    let mut harness = Harness::new();
    harness.load(2);
    harness.settle();
    assert!(!harness.force_frame());

    harness.swipe(0, 30.0, 0.05).unwrap();
    assert!(harness.force_frame());
}

#[test]
fn pointer_events_drive_the_deck() {
    let mut harness = Harness::new();
    harness.load(1);
    harness.settle();

    let mut tracker = DragTracker::new();
    let down = tracker.pointer_down(0, Point::new(100.0, 100.0), ms(0));
    harness.drag(down).unwrap();
    let moved = tracker
        .pointer_move(Point::new(160.0, 104.0), ms(16))
        .unwrap();
    harness.drag(moved).unwrap();
    let moved = tracker
        .pointer_move(Point::new(260.0, 110.0), ms(32))
        .unwrap();
    harness.drag(moved).unwrap();
    let up = tracker.pointer_up(Point::new(260.0, 110.0), ms(40)).unwrap();
    assert!(up.velocity_x > 0.2);
    harness.drag(up).unwrap();

    assert!(harness.deck().stack().is_exited(0).unwrap());
    assert_eq!(
        harness.deck().stack().get_pose(0).unwrap().offset.x,
        200.0 + VIEWPORT_WIDTH
    );
    assert_eq!(harness.pending_timers(), 1);
}

#[test]
fn theme_overrides_apply() {
    let env = theme::init()
        .adding(theme::TRIGGER_VELOCITY, 1.0)
        .adding(theme::ENTRANCE_STAGGER_MS, 100);
    let mut harness = Harness::with_env(env);
    harness.load(3);

    harness.advance(ms(48));
    assert!(harness.deck().frame(0).unwrap().pose.offset.y > -1000.0);
    assert_eq!(harness.deck().frame(2).unwrap().pose.offset.y, -1000.0);

    harness.settle();
    harness.swipe(0, 120.0, 0.5).unwrap();
    assert!(!harness.deck().stack().is_exited(0).unwrap());
    harness.swipe(0, 120.0, 1.5).unwrap();
    assert!(harness.deck().stack().is_exited(0).unwrap());
}

#[test]
fn stale_index_is_an_error() {
    let mut harness = Harness::new();
    harness.load(3);
    harness.load(1);
    let err = harness.swipe(2, 100.0, 0.5).unwrap_err();
    assert!(matches!(err, Error::IndexOutOfRange { index: 2, len: 1 }));
    assert!(harness.deck().frame(2).is_err());
}
