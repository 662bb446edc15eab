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

//! Turning drags into card poses.
//!
//! A drag is described by a stream of [`DragSample`]s. The
//! [`GestureInterpreter`] maps each sample onto the pose of the dragged
//! card and decides when the card is flung out of the deck. Hosts that
//! only have raw pointer positions can produce samples with a
//! [`DragTracker`].
//!
//! [`DragSample`]: struct.DragSample.html
//! [`GestureInterpreter`]: struct.GestureInterpreter.html
//! [`DragTracker`]: struct.DragTracker.html

use std::time::Duration;

use log::{debug, trace};

use crate::animate::SpringConfig;
use crate::kurbo::{Point, Vec2};
use crate::stack::{CardPose, CardStack};
use crate::{theme, Env, Error};

/// A release this long after the last movement counts as a standstill.
const RELEASE_STALE: Duration = Duration::from_millis(32);

/// One sample of a horizontal drag on a card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSample {
    /// The card being dragged.
    pub index: usize,
    /// `true` while the pointer is down.
    pub active: bool,
    /// Horizontal displacement since the drag started.
    pub delta_x: f64,
    /// Sign of the latest horizontal movement: -1, 0 or 1.
    pub direction_x: f64,
    /// Magnitude of the horizontal speed, in px per ms.
    pub velocity_x: f64,
}

/// Where a card is in its per-cycle life.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardPhase {
    Idle,
    Dragging,
    /// Flung out; only a stack reset brings the card back.
    Exiting,
}

/// The result of interpreting one sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureOutcome {
    pub index: usize,
    /// The pose the card should now move toward.
    pub pose: CardPose,
    pub phase: CardPhase,
    /// The spring the pose should be animated with.
    pub spring: SpringConfig,
    /// Set when this sample released the last card of the deck.
    pub schedule_reset: bool,
}

/// Maps drag samples onto card poses.
///
/// All tuning values are read from the [`Env`] once, at construction.
///
/// [`Env`]: ../struct.Env.html
#[derive(Debug, Clone, PartialEq)]
pub struct GestureInterpreter {
    viewport_width: f64,
    trigger_velocity: f64,
    exit_margin: f64,
    rotation_divisor: f64,
    exit_spin: f64,
    lift_scale: f64,
    friction: f64,
    tension_active: f64,
    tension_exiting: f64,
    tension_idle: f64,
}

/// Builds [`DragSample`]s out of raw pointer events.
///
/// Times are measured from any fixed origin chosen by the host.
///
/// [`DragSample`]: struct.DragSample.html
#[derive(Debug, Clone, Default)]
pub struct DragTracker {
    drag: Option<Drag>,
}

#[derive(Debug, Clone, Copy)]
struct Drag {
    index: usize,
    start: Point,
    last: Point,
    last_time: Duration,
    direction_x: f64,
    velocity_x: f64,
}

impl CardPhase {
    pub fn is_exiting(self) -> bool {
        self == CardPhase::Exiting
    }
}

impl GestureInterpreter {
    /// Read the interpreter's tuning from `env`.
    ///
    /// Fails if any of the gesture keys in [`theme`] is missing.
    ///
    /// [`theme`]: ../theme/index.html
    pub fn from_env(env: &Env) -> Result<GestureInterpreter, Error> {
        Ok(GestureInterpreter {
            viewport_width: env.get(theme::VIEWPORT_WIDTH)?,
            trigger_velocity: env.get(theme::TRIGGER_VELOCITY)?,
            exit_margin: env.get(theme::EXIT_MARGIN)?,
            rotation_divisor: env.get(theme::ROTATION_DIVISOR)?,
            exit_spin: env.get(theme::EXIT_SPIN)?,
            lift_scale: env.get(theme::LIFT_SCALE)?,
            friction: env.get(theme::SPRING_FRICTION)?,
            tension_active: env.get(theme::SPRING_TENSION_ACTIVE)?,
            tension_exiting: env.get(theme::SPRING_TENSION_EXITING)?,
            tension_idle: env.get(theme::SPRING_TENSION_IDLE)?,
        })
    }

    pub fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    /// Update the viewport width, e.g. after the host window was resized.
    pub fn set_viewport_width(&mut self, width: f64) {
        self.viewport_width = width;
    }

    /// Apply one sample to the card it targets.
    ///
    /// Only the pose of `sample.index` is touched. A release faster than
    /// the trigger velocity marks the card as exited; that flag stays set
    /// until the stack is reset.
    pub fn apply(
        &self,
        stack: &mut CardStack,
        sample: &DragSample,
    ) -> Result<GestureOutcome, Error> {
        let index = sample.index;
        let trigger = sample.velocity_x > self.trigger_velocity;
        if !sample.active && trigger {
            stack.mark_exited(index)?;
        }
        let exiting = stack.is_exited(index)?;

        let x = if exiting {
            (self.exit_margin + self.viewport_width) * sample.direction_x
        } else if sample.active {
            sample.delta_x
        } else {
            0.0
        };
        let spin = if exiting {
            sample.direction_x * self.exit_spin * sample.velocity_x
        } else {
            0.0
        };
        let rotation = sample.delta_x / self.rotation_divisor + spin;
        let scale = if sample.active { self.lift_scale } else { 1.0 };
        let pose = CardPose::new(Vec2::new(x, 0.0), rotation, scale);
        stack.set_pose(index, pose)?;

        let phase = if sample.active {
            CardPhase::Dragging
        } else if exiting {
            CardPhase::Exiting
        } else {
            CardPhase::Idle
        };
        let tension = if sample.active {
            self.tension_active
        } else if exiting {
            self.tension_exiting
        } else {
            self.tension_idle
        };
        let schedule_reset = !sample.active && stack.is_fully_exited();
        if schedule_reset {
            debug!("card {} was the last one out, deck reset due", index);
        }
        trace!("card {} -> {:?} ({:?})", index, pose, phase);

        Ok(GestureOutcome {
            index,
            pose,
            phase,
            spring: SpringConfig::new(tension, self.friction),
            schedule_reset,
        })
    }
}

impl DragTracker {
    pub fn new() -> DragTracker {
        DragTracker::default()
    }

    /// The card being dragged, if any.
    pub fn dragging(&self) -> Option<usize> {
        self.drag.map(|d| d.index)
    }

    /// Start a drag on card `index`. Any drag in progress is abandoned.
    pub fn pointer_down(&mut self, index: usize, pos: Point, time: Duration) -> DragSample {
        let drag = Drag {
            index,
            start: pos,
            last: pos,
            last_time: time,
            direction_x: 0.0,
            velocity_x: 0.0,
        };
        self.drag = Some(drag);
        drag.sample(true)
    }

    /// Continue the drag. Returns `None` when no drag is in progress.
    pub fn pointer_move(&mut self, pos: Point, time: Duration) -> Option<DragSample> {
        let drag = self.drag.as_mut()?;
        drag.track(pos, time, false);
        Some(drag.sample(true))
    }

    /// End the drag, producing its final, inactive sample.
    pub fn pointer_up(&mut self, pos: Point, time: Duration) -> Option<DragSample> {
        let mut drag = self.drag.take()?;
        drag.track(pos, time, true);
        Some(drag.sample(false))
    }
}

impl Drag {
    fn track(&mut self, pos: Point, time: Duration, releasing: bool) {
        let dx = pos.x - self.last.x;
        let dt = time.checked_sub(self.last_time).unwrap_or_default();
        if dx != 0.0 {
            self.direction_x = dx.signum();
        }
        if dt > Duration::from_secs(0) {
            let dt_ms = dt.as_secs_f64() * 1000.0;
            if dx != 0.0 || !releasing {
                self.velocity_x = dx.abs() / dt_ms;
            } else if dt > RELEASE_STALE {
                self.velocity_x = 0.0;
            }
        }
        self.last = pos;
        self.last_time = time;
    }

    fn sample(&self, active: bool) -> DragSample {
        DragSample {
            index: self.index,
            active,
            delta_x: self.last.x - self.start.x,
            direction_x: self.direction_x,
            velocity_x: self.velocity_x,
        }
    }
}
