// Copyright 2018 The xi-editor Authors.
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

//! A data-oriented engine for a deck of swipeable cards.
//!
//! The deck keeps one card per image. Dragging a card moves, tilts and
//! lifts it; releasing it fast enough flings it off screen, and once every
//! card is gone the whole deck drops back in after a short delay.
//!
//! `swipedeck` does no painting and owns no window. A host feeds a
//! [`Deck`] with [`Event`]s (drag samples, timers, animation frames) and
//! reads the animated [`CardFrame`]s back when it paints:
//!
//! ```
//! use swipedeck::{theme, Deck, DeckCtx, DragSample, Event, ImageRecord};
//!
//! let mut deck = Deck::new(theme::init()).unwrap();
//! let mut ctx = DeckCtx::new();
//! deck.load(&mut ctx, vec![ImageRecord::default(); 2]);
//!
//! let fling = DragSample {
//!     index: 1,
//!     active: false,
//!     delta_x: 120.0,
//!     direction_x: 1.0,
//!     velocity_x: 0.8,
//! };
//! deck.event(&mut ctx, &Event::Drag(fling)).unwrap();
//! assert!(deck.stack().is_exited(1).unwrap());
//! ```
//!
//! [`Deck`]: struct.Deck.html
//! [`Event`]: enum.Event.html
//! [`CardFrame`]: struct.CardFrame.html

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub use kurbo;

pub mod animate;
pub mod gesture;
pub mod stack;
pub mod theme;

mod contexts;
mod data;
mod deck;
mod env;
mod error;
mod event;
mod transform;

#[cfg(test)]
mod tests;

pub use contexts::DeckCtx;
pub use data::Data;
pub use deck::{CardFrame, Deck, ImageRecord};
pub use env::{Env, Key, Value, ValueType, ValueTypeError};
pub use error::Error;
pub use event::{Event, TimerToken};
pub use gesture::{CardPhase, DragSample, DragTracker, GestureInterpreter, GestureOutcome};
pub use stack::{CardPose, CardStack, CardState};
pub use transform::{trans, CardTransform};
