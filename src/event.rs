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

//! Events.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::gesture::DragSample;

/// An event delivered to a [`Deck`] by its host.
///
/// [`Deck`]: struct.Deck.html
#[derive(Debug, Clone)]
pub enum Event {
    /// One sample of a drag on a card.
    Drag(DragSample),
    /// A timer requested through [`DeckCtx::request_timer`] has fired.
    ///
    /// [`DeckCtx::request_timer`]: struct.DeckCtx.html#method.request_timer
    Timer(TimerToken),
    /// Called at the beginning of a new animation frame.
    ///
    /// The `u64` is the number of nanoseconds elapsed since the previous
    /// animation frame; 0 for the first frame of a run.
    AnimFrame(u64),
}

/// A token that uniquely identifies a running timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerToken(u64);

impl TimerToken {
    /// Create a new token.
    pub fn next() -> TimerToken {
        static TIMER_COUNTER: AtomicU64 = AtomicU64::new(1);
        TimerToken(TIMER_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_unique() {
        let a = TimerToken::next();
        let b = TimerToken::next();
        assert_ne!(a, b);
        assert!(a < b);
    }
}
