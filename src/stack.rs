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

//! The card stack model: per-card poses and exit flags.

use log::debug;

use crate::kurbo::Vec2;
use crate::{Data, Error};

/// Where a card sits and how it is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardPose {
    /// Horizontal and vertical displacement from the resting position.
    pub offset: Vec2,
    /// Rotation in degrees.
    pub rotation: f64,
    pub scale: f64,
}

/// One entry of the stack.
#[derive(Debug, Clone, PartialEq)]
pub struct CardState {
    /// Stable, dense, 0-based identity.
    pub index: usize,
    /// Whether the card has been flung out during the current cycle.
    pub exited: bool,
    pub pose: CardPose,
}

/// The ordered collection of cards, and the count of cards that left.
///
/// This is the only owner of per-card state. Poses are handed out by value,
/// so readers always get a snapshot.
#[derive(Debug, Clone, Default)]
pub struct CardStack {
    cards: Vec<CardState>,
    exited_count: usize,
}

impl CardPose {
    /// The resting pose: centered, upright, unscaled.
    pub const IDENTITY: CardPose = CardPose {
        offset: Vec2::ZERO,
        rotation: 0.0,
        scale: 1.0,
    };

    /// Create a new pose.
    pub const fn new(offset: Vec2, rotation: f64, scale: f64) -> CardPose {
        CardPose {
            offset,
            rotation,
            scale,
        }
    }
}

impl Default for CardPose {
    fn default() -> Self {
        CardPose::IDENTITY
    }
}

impl Data for CardPose {
    fn same(&self, other: &Self) -> bool {
        self.offset.same(&other.offset)
            && self.rotation.same(&other.rotation)
            && self.scale.same(&other.scale)
    }
}

impl CardState {
    fn new(index: usize) -> CardState {
        CardState {
            index,
            exited: false,
            pose: CardPose::IDENTITY,
        }
    }
}

impl CardStack {
    /// Create an empty stack.
    pub fn new() -> CardStack {
        CardStack::default()
    }

    /// Replace any prior state with `n` idle cards in the identity pose.
    pub fn initialize(&mut self, n: usize) {
        self.cards = (0..n).map(CardState::new).collect();
        self.exited_count = 0;
        debug!("stack initialized with {} cards", n);
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The number of cards currently flagged as exited.
    pub fn exited_count(&self) -> usize {
        self.exited_count
    }

    pub fn cards(&self) -> &[CardState] {
        &self.cards
    }

    pub fn card(&self, index: usize) -> Result<&CardState, Error> {
        let len = self.cards.len();
        self.cards
            .get(index)
            .ok_or(Error::IndexOutOfRange { index, len })
    }

    fn card_mut(&mut self, index: usize) -> Result<&mut CardState, Error> {
        let len = self.cards.len();
        self.cards
            .get_mut(index)
            .ok_or(Error::IndexOutOfRange { index, len })
    }

    pub fn get_pose(&self, index: usize) -> Result<CardPose, Error> {
        self.card(index).map(|card| card.pose)
    }

    /// Overwrite the pose of one card. Nothing is validated beyond the index.
    pub fn set_pose(&mut self, index: usize, pose: CardPose) -> Result<(), Error> {
        self.card_mut(index)?.pose = pose;
        Ok(())
    }

    pub fn is_exited(&self, index: usize) -> Result<bool, Error> {
        self.card(index).map(|card| card.exited)
    }

    /// Flag a card as gone. Calling this on a card that already left is a no-op.
    pub fn mark_exited(&mut self, index: usize) -> Result<(), Error> {
        let card = self.card_mut(index)?;
        if !card.exited {
            card.exited = true;
            self.exited_count += 1;
            debug!("card {} exited ({}/{})", index, self.exited_count, self.len());
        }
        Ok(())
    }

    /// Whether every card has left. An empty stack never counts as exited.
    pub fn is_fully_exited(&self) -> bool {
        !self.cards.is_empty() && self.exited_count == self.cards.len()
    }

    /// Bring every card back: exit flags cleared, identity pose restored.
    pub fn reset_all(&mut self) {
        for card in &mut self.cards {
            card.exited = false;
            card.pose = CardPose::IDENTITY;
        }
        self.exited_count = 0;
        debug!("stack reset, {} cards back in play", self.len());
    }
}
