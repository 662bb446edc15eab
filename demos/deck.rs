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

//! A headless host that flings every card of a small deck, alternating
//! sides, and prints the top card's frame as the springs move it.
//!
//! Run with `cargo run --example deck`.

use std::time::Duration;

use log::{info, LevelFilter};

use swipedeck::kurbo::Point;
use swipedeck::{theme, Deck, DeckCtx, DragTracker, Error, Event, ImageRecord, TimerToken};

const FRAME: Duration = Duration::from_millis(16);
const CARDS: usize = 4;

/// Virtual clock, timer queue and animation loop.
struct Host {
    deck: Deck,
    ctx: DeckCtx,
    now: Duration,
    timers: Vec<(Duration, TimerToken)>,
}

impl Host {
    fn run_for(&mut self, duration: Duration) -> Result<(), Error> {
        let end = self.now + duration;
        while self.now < end {
            self.now += FRAME;
            let now = self.now;
            let due: Vec<TimerToken> = self
                .timers
                .iter()
                .filter(|(deadline, _)| *deadline <= now)
                .map(|(_, token)| *token)
                .collect();
            self.timers.retain(|(deadline, _)| *deadline > now);
            for token in due {
                self.deck.event(&mut self.ctx, &Event::Timer(token))?;
            }
            if self.ctx.anim_frame_requested() {
                self.ctx.clear_requests();
                self.deck
                    .event(&mut self.ctx, &Event::AnimFrame(FRAME.as_nanos() as u64))?;
                if self.ctx.paint_requested() {
                    self.paint();
                }
            }
            self.schedule();
        }
        Ok(())
    }

    fn fling(&mut self, index: usize, direction: f64) -> Result<(), Error> {
        let mut tracker = DragTracker::new();
        let mut t = self.now;
        let mut x = 640.0;
        let mut samples = vec![tracker.pointer_down(index, Point::new(x, 400.0), t)];
        for _ in 0..4 {
            t += FRAME;
            x += 40.0 * direction;
            samples.extend(tracker.pointer_move(Point::new(x, 400.0), t));
        }
        samples.extend(tracker.pointer_up(Point::new(x, 400.0), t + Duration::from_millis(4)));
        for sample in samples {
            self.deck.event(&mut self.ctx, &Event::Drag(sample))?;
        }
        self.schedule();
        Ok(())
    }

    fn schedule(&mut self) {
        let now = self.now;
        for (token, delay) in self.ctx.take_timers() {
            self.timers.push((now + delay, token));
        }
    }

    fn paint(&self) {
        if let Some(top) = self.deck.frames().last() {
            info!(
                "{:>5}ms card {} at ({:.1}, {:.1}) {:?} {}",
                self.now.as_millis(),
                top.index,
                top.pose.offset.x,
                top.pose.offset.y,
                top.phase,
                top.transform
            );
        }
    }
}

fn main() -> Result<(), Error> {
    simple_logger::SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .init()
        .ok();

    let images = (0..CARDS)
        .map(|i| ImageRecord {
            ext: Some("png".into()),
            url: Some(format!("https://images.example/{}.png", i)),
        })
        .collect();

    let mut host = Host {
        deck: Deck::new(theme::init())?,
        ctx: DeckCtx::new(),
        now: Duration::from_secs(0),
        timers: Vec::new(),
    };
    host.deck.load(&mut host.ctx, images);
    host.run_for(Duration::from_secs(2))?;

    for index in (0..CARDS).rev() {
        let direction = if index % 2 == 0 { 1.0 } else { -1.0 };
        host.fling(index, direction)?;
        host.run_for(Duration::from_millis(400))?;
    }
    host.run_for(Duration::from_secs(3))?;
    info!(
        "deck back with {} of {} cards out",
        host.deck.stack().exited_count(),
        host.deck.len()
    );
    Ok(())
}
