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

//! An environment holding the tuning values of a deck.

use std::any;
use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;
use std::sync::Arc;

use crate::Error;

/// An environment consulted by the deck and the gesture interpreter.
///
/// Every tuning constant (thresholds, spring tensions, delays, viewport
/// width) lives here under a typed [`Key`], so a host can override any of
/// them without touching the interpreter. [`theme::init`] returns an
/// environment with every key the deck reads.
///
/// Environments are cheap to clone; writes copy the map only when it is
/// shared.
///
/// [`Key`]: struct.Key.html
/// [`theme::init`]: theme/fn.init.html
#[derive(Clone, Default)]
pub struct Env(Arc<HashMap<String, Value>>);

/// A typed [`Env`] key.
///
/// Keys should be `const`s with unique names, and must be set before they
/// are read.
///
/// ```
/// use swipedeck::{Env, Key};
///
/// const CARD_GAP: Key<f64> = Key::new("my-app.card-gap");
///
/// let env = Env::default().adding(CARD_GAP, 12.0);
/// assert_eq!(env.get(CARD_GAP).unwrap(), 12.0);
/// ```
///
/// [`Env`]: struct.Env.html
pub struct Key<T> {
    key: &'static str,
    value_type: PhantomData<T>,
}

/// A dynamic type representing all values that can be stored in an environment.
#[derive(Clone)]
pub enum Value {
    Float(f64),
    UnsignedInt(u64),
}

/// Values which can be stored in an environment.
pub trait ValueType: Sized {
    /// Attempt to convert the generic `Value` into this type.
    fn try_from_value(v: &Value) -> Result<Self, ValueTypeError>;
}

/// The error type for a value of the wrong kind.
///
/// This only happens when the string part of two keys collide but their
/// types differ.
#[derive(Debug, Clone)]
pub struct ValueTypeError {
    expected: &'static str,
    found: Value,
}

impl Env {
    /// Gets a value from the environment.
    ///
    /// Fails with [`Error::MissingKey`] if the key was never set, or with
    /// [`Error::ValueType`] if it holds a value of another kind.
    ///
    /// [`Error::MissingKey`]: enum.Error.html#variant.MissingKey
    /// [`Error::ValueType`]: enum.Error.html#variant.ValueType
    pub fn get<V: ValueType>(&self, key: impl Borrow<Key<V>>) -> Result<V, Error> {
        let key = key.borrow();
        match self.0.get(key.key) {
            Some(value) => Ok(V::try_from_value(value)?),
            None => Err(Error::MissingKey(key.key.to_owned())),
        }
    }

    /// Adds a key/value, acting like a builder.
    pub fn adding<V: ValueType + Into<Value>>(mut self, key: Key<V>, value: V) -> Env {
        Arc::make_mut(&mut self.0).insert(key.into(), value.into());
        self
    }

    /// Sets a value in an environment.
    ///
    /// Fails if the environment already has a value of a different kind for
    /// the key; the existing value is kept in that case.
    pub fn set<V: ValueType + Into<Value>>(&mut self, key: Key<V>, value: V) -> Result<(), Error> {
        let value = value.into();
        let key: String = key.into();
        if let Some(existing) = self.0.get(&key) {
            if !existing.is_same_type(&value) {
                return Err(ValueTypeError::new(existing.kind(), value).into());
            }
        }
        Arc::make_mut(&mut self.0).insert(key, value);
        Ok(())
    }
}

impl<T> Key<T> {
    /// Create a new strongly typed `Key` with the given string value.
    /// The type of the key will be inferred.
    pub const fn new(key: &'static str) -> Self {
        Key {
            key,
            value_type: PhantomData,
        }
    }

    /// Return this key's string name.
    pub const fn name(&self) -> &'static str {
        self.key
    }
}

impl<T> Clone for Key<T> {
    fn clone(&self) -> Self {
        Key::new(self.key)
    }
}

impl<T> Copy for Key<T> {}

impl<T> Debug for Key<T> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Key({:?})", self.key)
    }
}

impl Value {
    fn is_same_type(&self, other: &Value) -> bool {
        use Value::*;
        match (self, other) {
            (Float(_), Float(_)) => true,
            (UnsignedInt(_), UnsignedInt(_)) => true,
            _ => false,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Value::Float(_) => any::type_name::<f64>(),
            Value::UnsignedInt(_) => any::type_name::<u64>(),
        }
    }
}

impl Debug for Value {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            Value::Float(x) => write!(f, "Float {}", x),
            Value::UnsignedInt(x) => write!(f, "UnsignedInt {}", x),
        }
    }
}

impl Debug for Env {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        f.debug_map().entries(self.0.iter()).finish()
    }
}

impl<T> From<Key<T>> for String {
    fn from(src: Key<T>) -> String {
        String::from(src.key)
    }
}

impl ValueTypeError {
    fn new(expected: &'static str, found: Value) -> ValueTypeError {
        ValueTypeError { expected, found }
    }
}

impl std::fmt::Display for ValueTypeError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "Incorrect value type: expected {} found {:?}",
            self.expected, self.found
        )
    }
}

impl std::error::Error for ValueTypeError {}

macro_rules! impl_value_type {
    ($ty:ty, $var:ident) => {
        impl ValueType for $ty {
            fn try_from_value(value: &Value) -> Result<Self, ValueTypeError> {
                match value {
                    Value::$var(f) => Ok(*f),
                    other => Err(ValueTypeError::new(any::type_name::<$ty>(), other.clone())),
                }
            }
        }

        impl From<$ty> for Value {
            fn from(src: $ty) -> Value {
                Value::$var(src)
            }
        }
    };
}

impl_value_type!(f64, Float);
impl_value_type!(u64, UnsignedInt);
