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

//! The deck: cards, gestures, springs and the reset timer in one place.

use std::time::Duration;

use log::{debug, info, warn};

use crate::animate::{PoseAnimator, SpringConfig};
use crate::gesture::{CardPhase, DragSample, GestureInterpreter};
use crate::kurbo::Vec2;
use crate::stack::{CardPose, CardStack};
use crate::transform::trans;
use crate::{theme, Data, DeckCtx, Env, Error, Event, TimerToken};

/// An image as handed over by the image source.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageRecord {
    /// File extension, e.g. `png`. Host-side metadata for filtering; the
    /// deck carries it along but never reads it.
    pub ext: Option<String>,
    pub url: Option<String>,
}

/// Everything a renderer needs to paint one card for the current frame.
#[derive(Debug, Clone, PartialEq)]
pub struct CardFrame {
    pub index: usize,
    /// The displayed (animated) pose, not the target pose.
    pub pose: CardPose,
    pub phase: CardPhase,
    /// The rotation and scale of `pose` as a transform string.
    pub transform: String,
    /// The card's image; `None` paints an empty background.
    pub background: Option<String>,
}

/// A deck of swipeable cards.
///
/// The deck owns the [`CardStack`], interprets drags with a
/// [`GestureInterpreter`], animates every card with a [`PoseAnimator`],
/// and brings the cards back after the last one has been flung out.
///
/// The host drives it with [`event`] and reads [`frame`]s back whenever it
/// paints. Requests for timers, animation frames and repaints come out
/// through the [`DeckCtx`].
///
/// [`CardStack`]: stack/struct.CardStack.html
/// [`GestureInterpreter`]: gesture/struct.GestureInterpreter.html
/// [`PoseAnimator`]: animate/struct.PoseAnimator.html
/// [`event`]: #method.event
/// [`frame`]: #method.frame
/// [`DeckCtx`]: struct.DeckCtx.html
#[derive(Debug)]
pub struct Deck {
    env: Env,
    stack: CardStack,
    interpreter: GestureInterpreter,
    animators: Vec<PoseAnimator>,
    phases: Vec<CardPhase>,
    /// What was last reported as displayed, to detect changes.
    displayed: Vec<CardPose>,
    images: Vec<ImageRecord>,
    pending_resets: Vec<TimerToken>,
    reset_delay: Duration,
    entrance: CardPose,
    entrance_stagger_ms: u64,
}

impl Deck {
    /// Create an empty deck tuned by `env`.
    ///
    /// `env` must hold every key of [`theme::init`].
    ///
    /// [`theme::init`]: theme/fn.init.html
    pub fn new(env: Env) -> Result<Deck, Error> {
        let interpreter = GestureInterpreter::from_env(&env)?;
        let reset_delay = Duration::from_millis(env.get(theme::RESET_DELAY_MS)?);
        let entrance = CardPose::new(
            Vec2::new(0.0, env.get(theme::ENTRANCE_OFFSET_Y)?),
            0.0,
            env.get(theme::ENTRANCE_SCALE)?,
        );
        let entrance_stagger_ms = env.get(theme::ENTRANCE_STAGGER_MS)?;
        Ok(Deck {
            env,
            stack: CardStack::new(),
            interpreter,
            animators: Vec::new(),
            phases: Vec::new(),
            displayed: Vec::new(),
            images: Vec::new(),
            pending_resets: Vec::new(),
            reset_delay,
            entrance,
            entrance_stagger_ms,
        })
    }

    pub fn env(&self) -> &Env {
        &self.env
    }

    pub fn stack(&self) -> &CardStack {
        &self.stack
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Reset timers that were requested but have not fired yet.
    pub fn pending_resets(&self) -> &[TimerToken] {
        &self.pending_resets
    }

    /// Follow a change in the width of the visible area.
    pub fn set_viewport_width(&mut self, width: f64) -> Result<(), Error> {
        self.env.set(theme::VIEWPORT_WIDTH, width)?;
        self.interpreter.set_viewport_width(width);
        Ok(())
    }

    /// Replace the cards with one card per image, in the given order.
    ///
    /// The cards drop in from the entrance pose. Reset timers still in
    /// flight are forgotten.
    pub fn load(&mut self, ctx: &mut DeckCtx, images: Vec<ImageRecord>) {
        let n = images.len();
        info!("loading {} cards", n);
        self.images = images;
        self.stack.initialize(n);
        self.pending_resets.clear();
        self.phases = vec![CardPhase::Idle; n];
        self.enter_all();
        ctx.request_anim_frame();
        ctx.request_paint();
    }

    /// Handle an event from the host.
    pub fn event(&mut self, ctx: &mut DeckCtx, event: &Event) -> Result<(), Error> {
        match event {
            Event::Drag(sample) => self.drag(ctx, sample)?,
            Event::Timer(token) => self.timer(ctx, *token),
            Event::AnimFrame(interval) => self.anim_frame(ctx, *interval),
        }
        Ok(())
    }

    /// The current frame of card `index`.
    pub fn frame(&self, index: usize) -> Result<CardFrame, Error> {
        let card = self.stack.card(index)?;
        let pose = self
            .animators
            .get(index)
            .map(PoseAnimator::current)
            .unwrap_or(card.pose);
        Ok(CardFrame {
            index,
            pose,
            phase: self.phases.get(index).copied().unwrap_or(CardPhase::Idle),
            transform: trans(pose.rotation, pose.scale),
            background: self.images.get(index).and_then(|image| image.url.clone()),
        })
    }

    /// The current frames of every card, bottom of the deck first.
    pub fn frames(&self) -> Vec<CardFrame> {
        (0..self.len()).filter_map(|i| self.frame(i).ok()).collect()
    }

    fn drag(&mut self, ctx: &mut DeckCtx, sample: &DragSample) -> Result<(), Error> {
        let outcome = self.interpreter.apply(&mut self.stack, sample)?;
        self.animators[outcome.index].animate_to(outcome.pose, outcome.spring);
        self.phases[outcome.index] = outcome.phase;
        if outcome.schedule_reset {
            let token = ctx.request_timer(self.reset_delay);
            debug!("reset of {} cards in {:?} ({:?})", self.len(), self.reset_delay, token);
            self.pending_resets.push(token);
        }
        ctx.request_anim_frame();
        Ok(())
    }

    fn timer(&mut self, ctx: &mut DeckCtx, token: TimerToken) {
        match self.pending_resets.iter().position(|t| *t == token) {
            Some(pos) => {
                self.pending_resets.remove(pos);
                self.reset_all(ctx);
            }
            None => warn!("ignoring unknown timer {:?}", token),
        }
    }

    fn anim_frame(&mut self, ctx: &mut DeckCtx, interval: u64) {
        let mut moving = false;
        let mut changed = false;
        for (animator, shown) in self.animators.iter_mut().zip(self.displayed.iter_mut()) {
            moving |= animator.advance(interval);
            let now = animator.current();
            if !now.same(shown) {
                *shown = now;
                changed = true;
            }
        }
        if changed {
            ctx.request_paint();
        }
        if moving {
            ctx.request_anim_frame();
        }
    }

    /// Bring every card back into play. The timer is not tied to any
    /// particular cycle, so this also runs if cards came back some other way.
    fn reset_all(&mut self, ctx: &mut DeckCtx) {
        self.stack.reset_all();
        for phase in &mut self.phases {
            *phase = CardPhase::Idle;
        }
        self.enter_all();
        ctx.request_anim_frame();
        ctx.request_paint();
    }

    fn enter_all(&mut self) {
        let entrance = self.entrance;
        let stagger_ms = self.entrance_stagger_ms;
        self.animators = self
            .stack
            .cards()
            .iter()
            .map(|card| {
                let delay = stagger_ms.saturating_mul(card.index as u64);
                let mut animator =
                    PoseAnimator::new(entrance).with_delay(Duration::from_millis(delay));
                animator.animate_to(card.pose, SpringConfig::DEFAULT);
                animator
            })
            .collect();
        self.displayed = vec![entrance; self.animators.len()];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn images(n: usize) -> Vec<ImageRecord> {
        (0..n)
            .map(|i| ImageRecord {
                ext: Some("png".into()),
                url: Some(format!("https://example.com/{}.png", i)),
            })
            .collect()
    }

    #[test]
    fn load_drops_cards_in() {
        let mut deck = Deck::new(theme::init()).unwrap();
        let mut ctx = DeckCtx::new();
        deck.load(&mut ctx, images(3));
        assert_eq!(deck.len(), 3);
        assert!(ctx.anim_frame_requested());
        let frame = deck.frame(2).unwrap();
        assert_eq!(frame.pose, CardPose::new(Vec2::new(0.0, -1000.0), 0.0, 1.5));
        assert_eq!(frame.phase, CardPhase::Idle);
        assert_eq!(frame.background.as_deref(), Some("https://example.com/2.png"));
        assert_eq!(
            frame.transform,
            "perspective(1500px) rotateY(0deg) rotateZ(0deg) scale(1.5)"
        );
    }

    #[test]
    fn missing_url_is_empty_background() {
        let mut deck = Deck::new(theme::init()).unwrap();
        let mut ctx = DeckCtx::new();
        deck.load(&mut ctx, vec![ImageRecord::default()]);
        assert_eq!(deck.frame(0).unwrap().background, None);
    }

    #[test]
    fn empty_deck_never_resets() {
        let mut deck = Deck::new(theme::init()).unwrap();
        let mut ctx = DeckCtx::new();
        deck.load(&mut ctx, Vec::new());
        assert!(deck.is_empty());
        assert!(deck.frames().is_empty());
        assert!(deck.frame(0).is_err());
        assert!(deck
            .event(
                &mut ctx,
                &Event::Drag(DragSample {
                    index: 0,
                    active: false,
                    delta_x: 0.0,
                    direction_x: 1.0,
                    velocity_x: 1.0,
                })
            )
            .is_err());
        assert!(ctx.take_timers().is_empty());
    }

    #[test]
    fn unknown_timer_is_ignored() {
        let mut deck = Deck::new(theme::init()).unwrap();
        let mut ctx = DeckCtx::new();
        deck.load(&mut ctx, images(1));
        deck.event(&mut ctx, &Event::Timer(TimerToken::next()))
            .unwrap();
        assert_eq!(deck.stack().exited_count(), 0);
    }

    #[test]
    fn huge_stagger_saturates() {
        let env = theme::init().adding(theme::ENTRANCE_STAGGER_MS, u64::MAX / 2);
        let mut deck = Deck::new(env).unwrap();
        let mut ctx = DeckCtx::new();
        deck.load(&mut ctx, images(3));
        deck.event(&mut ctx, &Event::AnimFrame(16_000_000)).unwrap();
        assert!(deck.frame(0).unwrap().pose.offset.y > -1000.0);
        assert_eq!(deck.frame(1).unwrap().pose.offset.y, -1000.0);
        assert_eq!(deck.frame(2).unwrap().pose.offset.y, -1000.0);
    }

    #[test]
    fn viewport_resize() {
        let mut deck = Deck::new(theme::init()).unwrap();
        let mut ctx = DeckCtx::new();
        deck.load(&mut ctx, images(1));
        deck.set_viewport_width(600.0).unwrap();
        assert_eq!(deck.env().get(theme::VIEWPORT_WIDTH).unwrap(), 600.0);
        deck.event(
            &mut ctx,
            &Event::Drag(DragSample {
                index: 0,
                active: false,
                delta_x: 40.0,
                direction_x: 1.0,
                velocity_x: 0.5,
            }),
        )
        .unwrap();
        assert_eq!(deck.stack().get_pose(0).unwrap().offset.x, 800.0);
    }
}
