// Copyright 2019 The xi-editor Authors.
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

//! Theme keys and initial values.

use crate::{Env, Key};

/// Width of the visible area; exiting cards travel this far plus `EXIT_MARGIN`.
pub const VIEWPORT_WIDTH: Key<f64> = Key::new("swipedeck.viewport-width");
/// Release velocity (px/ms) that must be strictly exceeded to fling a card.
pub const TRIGGER_VELOCITY: Key<f64> = Key::new("swipedeck.trigger-velocity");
pub const EXIT_MARGIN: Key<f64> = Key::new("swipedeck.exit-margin");
/// Horizontal displacement per degree of tilt.
pub const ROTATION_DIVISOR: Key<f64> = Key::new("swipedeck.rotation-divisor");
/// Extra spin on exit, multiplied by direction and velocity.
pub const EXIT_SPIN: Key<f64> = Key::new("swipedeck.exit-spin");
pub const LIFT_SCALE: Key<f64> = Key::new("swipedeck.lift-scale");

pub const SPRING_FRICTION: Key<f64> = Key::new("swipedeck.spring-friction");
pub const SPRING_TENSION_ACTIVE: Key<f64> = Key::new("swipedeck.spring-tension-active");
pub const SPRING_TENSION_EXITING: Key<f64> = Key::new("swipedeck.spring-tension-exiting");
pub const SPRING_TENSION_IDLE: Key<f64> = Key::new("swipedeck.spring-tension-idle");

/// Delay between the last card leaving and the deck coming back.
pub const RESET_DELAY_MS: Key<u64> = Key::new("swipedeck.reset-delay-ms");
pub const ENTRANCE_OFFSET_Y: Key<f64> = Key::new("swipedeck.entrance-offset-y");
pub const ENTRANCE_SCALE: Key<f64> = Key::new("swipedeck.entrance-scale");
/// Per-index delay applied to the entrance drop; zero drops every card at once.
pub const ENTRANCE_STAGGER_MS: Key<u64> = Key::new("swipedeck.entrance-stagger-ms");

/// An initial theme.
pub fn init() -> Env {
    Env::default()
        .adding(VIEWPORT_WIDTH, 1280.0)
        .adding(TRIGGER_VELOCITY, 0.2)
        .adding(EXIT_MARGIN, 200.0)
        .adding(ROTATION_DIVISOR, 100.0)
        .adding(EXIT_SPIN, 10.0)
        .adding(LIFT_SCALE, 1.1)
        .adding(SPRING_FRICTION, 50.0)
        .adding(SPRING_TENSION_ACTIVE, 800.0)
        .adding(SPRING_TENSION_EXITING, 200.0)
        .adding(SPRING_TENSION_IDLE, 500.0)
        .adding(RESET_DELAY_MS, 600)
        .adding(ENTRANCE_OFFSET_Y, -1000.0)
        .adding(ENTRANCE_SCALE, 1.5)
        .adding(ENTRANCE_STAGGER_MS, 0)
}
