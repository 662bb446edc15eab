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

//! CSS-style transform strings for card poses.

use std::fmt;

const PERSPECTIVE_PX: f64 = 1500.0;
/// The Y-axis tilt is this fraction of the Z-axis spin.
const TILT_RATIO: f64 = 10.0;

/// The rotation and scale part of a card pose, formatted as a transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardTransform {
    pub rotation: f64,
    pub scale: f64,
}

/// Build the transform string for a card rotated by `rotation` degrees
/// and scaled by `scale`.
///
/// ```
/// assert_eq!(
///     swipedeck::trans(20.0, 1.1),
///     "perspective(1500px) rotateY(2deg) rotateZ(20deg) scale(1.1)"
/// );
/// ```
pub fn trans(rotation: f64, scale: f64) -> String {
    CardTransform { rotation, scale }.to_string()
}

impl fmt::Display for CardTransform {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "perspective({}px) rotateY({}deg) rotateZ({}deg) scale({})",
            Number(PERSPECTIVE_PX),
            Number(self.rotation / TILT_RATIO),
            Number(self.rotation),
            Number(self.scale)
        )
    }
}

/// Shortest decimal form, with negative zero written as `0`.
struct Number(f64);

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.0 == 0.0 {
            write!(f, "0")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity() {
        assert_eq!(
            trans(0.0, 1.0),
            "perspective(1500px) rotateY(0deg) rotateZ(0deg) scale(1)"
        );
    }

    #[test]
    fn fractional_and_negative() {
        assert_eq!(
            trans(-0.5, 1.5),
            "perspective(1500px) rotateY(-0.05deg) rotateZ(-0.5deg) scale(1.5)"
        );
    }

    #[test]
    fn negative_zero_is_plain_zero() {
        assert_eq!(
            trans(-0.0, 1.0),
            "perspective(1500px) rotateY(0deg) rotateZ(0deg) scale(1)"
        );
    }
}
