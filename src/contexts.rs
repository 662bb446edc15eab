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

//! The context passed to the deck during event handling.

use std::mem;
use std::time::Duration;

use crate::TimerToken;

/// Requests made by the deck while it handles an event.
///
/// The host creates one of these (or reuses one), passes it to
/// [`Deck::event`], and then acts on what was requested: schedule the
/// timers, keep the animation loop running, repaint.
///
/// [`Deck::event`]: struct.Deck.html#method.event
#[derive(Debug, Default)]
pub struct DeckCtx {
    timers: Vec<(TimerToken, Duration)>,
    anim_frame_requested: bool,
    paint_requested: bool,
}

impl DeckCtx {
    pub fn new() -> DeckCtx {
        DeckCtx::default()
    }

    /// Request a timer event.
    ///
    /// The return value is a token, which can be used to associate the
    /// request with the event.
    pub fn request_timer(&mut self, delay: Duration) -> TimerToken {
        let token = TimerToken::next();
        self.timers.push((token, delay));
        token
    }

    /// Request an animation frame.
    pub fn request_anim_frame(&mut self) {
        self.anim_frame_requested = true;
    }

    /// Request a repaint of the cards.
    pub fn request_paint(&mut self) {
        self.paint_requested = true;
    }

    pub fn anim_frame_requested(&self) -> bool {
        self.anim_frame_requested
    }

    pub fn paint_requested(&self) -> bool {
        self.paint_requested
    }

    /// Take the timers requested since the last call, with their delays.
    pub fn take_timers(&mut self) -> Vec<(TimerToken, Duration)> {
        mem::take(&mut self.timers)
    }

    /// Clear the animation and paint flags, typically once per host frame.
    pub fn clear_requests(&mut self) {
        self.anim_frame_requested = false;
        self.paint_requested = false;
    }
}
