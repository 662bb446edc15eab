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

//! Spring animation of card poses.

use std::time::Duration;

use crate::kurbo::Vec2;
use crate::stack::CardPose;

/// Length of one integration step, in seconds.
const STEP: f64 = 0.001;
const REST_DISPLACEMENT: f64 = 0.005;
const REST_VELOCITY: f64 = 0.05;

const X: usize = 0;
const Y: usize = 1;
const ROTATION: usize = 2;
const SCALE: usize = 3;

/// How stiff and how damped a spring is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub tension: f64,
    pub friction: f64,
    pub mass: f64,
}

/// A single animated value pulled toward a target.
#[derive(Debug, Clone, Copy)]
pub struct Spring {
    value: f64,
    /// Units per second.
    velocity: f64,
    target: f64,
    config: SpringConfig,
}

/// Four springs, one per pose component, moving a card toward a target pose.
#[derive(Debug, Clone)]
pub struct PoseAnimator {
    /// Indexed by `X`, `Y`, `ROTATION` and `SCALE`.
    springs: [Spring; 4],
    delay: Duration,
}

impl SpringConfig {
    /// A gentle, nearly critically damped spring.
    pub const DEFAULT: SpringConfig = SpringConfig::new(170.0, 26.0);

    pub const fn new(tension: f64, friction: f64) -> SpringConfig {
        SpringConfig {
            tension,
            friction,
            mass: 1.0,
        }
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        SpringConfig::DEFAULT
    }
}

impl Spring {
    /// A spring at rest at `value`.
    pub fn new(value: f64) -> Spring {
        Spring {
            value,
            velocity: 0.0,
            target: value,
            config: SpringConfig::DEFAULT,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    /// Retarget the spring. The current velocity is kept, so an interrupted
    /// motion bends toward the new target instead of restarting.
    pub fn set_target(&mut self, target: f64, config: SpringConfig) {
        self.target = target;
        self.config = config;
    }

    /// Place the spring at `value`, at rest.
    pub fn jump_to(&mut self, value: f64) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
    }

    pub fn is_settled(&self) -> bool {
        self.value == self.target && self.velocity == 0.0
    }

    /// Integrate for `secs` seconds in fixed steps.
    pub fn step(&mut self, secs: f64) {
        if self.is_settled() || secs <= 0.0 {
            return;
        }
        let mut remaining = secs;
        while remaining > 0.0 {
            let dt = remaining.min(STEP);
            let spring_force = -self.config.tension * (self.value - self.target);
            let damping_force = -self.config.friction * self.velocity;
            let acceleration = (spring_force + damping_force) / self.config.mass;
            self.velocity += acceleration * dt;
            self.value += self.velocity * dt;
            remaining -= dt;

            if (self.value - self.target).abs() < REST_DISPLACEMENT
                && self.velocity.abs() < REST_VELOCITY
            {
                self.jump_to(self.target);
                break;
            }
        }
    }
}

impl PoseAnimator {
    /// An animator resting at `pose`.
    pub fn new(pose: CardPose) -> PoseAnimator {
        PoseAnimator {
            springs: [
                Spring::new(pose.offset.x),
                Spring::new(pose.offset.y),
                Spring::new(pose.rotation),
                Spring::new(pose.scale),
            ],
            delay: Duration::from_secs(0),
        }
    }

    /// Builder-style method to hold the animation still for `delay` first.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// The pose currently displayed.
    pub fn current(&self) -> CardPose {
        let s = &self.springs;
        CardPose::new(
            Vec2::new(s[X].value(), s[Y].value()),
            s[ROTATION].value(),
            s[SCALE].value(),
        )
    }

    /// The pose being animated toward.
    pub fn target(&self) -> CardPose {
        let s = &self.springs;
        CardPose::new(
            Vec2::new(s[X].target(), s[Y].target()),
            s[ROTATION].target(),
            s[SCALE].target(),
        )
    }

    /// Start moving toward `pose` with the given spring.
    pub fn animate_to(&mut self, pose: CardPose, config: SpringConfig) {
        for (spring, target) in self.springs.iter_mut().zip(components(pose).iter()) {
            spring.set_target(*target, config);
        }
    }

    /// Snap to `pose` with no motion. Any pending delay is dropped.
    pub fn jump_to(&mut self, pose: CardPose) {
        for (spring, value) in self.springs.iter_mut().zip(components(pose).iter()) {
            spring.jump_to(*value);
        }
        self.delay = Duration::from_secs(0);
    }

    pub fn is_settled(&self) -> bool {
        self.springs.iter().all(Spring::is_settled)
    }

    /// Advance by one animation frame. Returns `true` while still moving.
    pub fn advance(&mut self, interval_ns: u64) -> bool {
        let mut elapsed = Duration::from_nanos(interval_ns);
        if self.delay > Duration::from_secs(0) {
            if elapsed <= self.delay {
                self.delay -= elapsed;
                return !self.is_settled();
            }
            elapsed -= self.delay;
            self.delay = Duration::from_secs(0);
        }
        let secs = elapsed.as_secs_f64();
        for spring in self.springs.iter_mut() {
            spring.step(secs);
        }
        !self.is_settled()
    }
}

/// The pose as `[x, y, rotation, scale]`.
fn components(pose: CardPose) -> [f64; 4] {
    [pose.offset.x, pose.offset.y, pose.rotation, pose.scale]
}
