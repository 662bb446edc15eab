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

//! Errors at the deck level.

use std::fmt;

use crate::env::ValueTypeError;

/// Deck errors.
#[derive(Debug, Clone)]
pub enum Error {
    /// A card index was outside of `0..len`.
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The number of cards at the time of the call.
        len: usize,
    },
    /// An environment key was read before it was set.
    MissingKey(String),
    /// An environment key was read or written with the wrong type.
    ValueType(ValueTypeError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            Error::IndexOutOfRange { index, len } => {
                write!(f, "Card index {} is out of range for a deck of {}.", index, len)
            }
            Error::MissingKey(key) => write!(f, "No value set for environment key '{}'.", key),
            Error::ValueType(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::ValueType(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValueTypeError> for Error {
    fn from(src: ValueTypeError) -> Error {
        Error::ValueType(src)
    }
}
