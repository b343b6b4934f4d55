//! Bounded numeric input.

use std::fmt;
use std::io::{BufRead, Write};
use std::str::FromStr;

use super::{Console, INVALID_NUMBER, PromptError};

/// Scalar types [`Console::read_number`] can produce.
pub trait NumberKind: FromStr + PartialOrd + Copy + fmt::Display {
    /// Reject values that parse but are not usable (NaN, infinities).
    fn is_usable(&self) -> bool {
        true
    }
}

macro_rules! integer_kind {
    ($($t:ty),*) => {
        $(impl NumberKind for $t {})*
    };
}

integer_kind!(i32, i64, u32, usize);

impl NumberKind for f64 {
    fn is_usable(&self) -> bool {
        self.is_finite()
    }
}

impl NumberKind for f32 {
    fn is_usable(&self) -> bool {
        self.is_finite()
    }
}

/// Inclusive bounds; values outside are clamped, not rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds<T> {
    pub min: Option<T>,
    pub max: Option<T>,
}

impl<T> Default for Bounds<T> {
    fn default() -> Self {
        Self {
            min: None,
            max: None,
        }
    }
}

/// Which bound (if any) was applied to a value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Clamped<T> {
    Unchanged(T),
    ToMin(T),
    ToMax(T),
}

impl<T: NumberKind> Bounds<T> {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn between(min: T, max: T) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    pub fn clamp(&self, value: T) -> Clamped<T> {
        match (self.min, self.max) {
            (Some(min), _) if value < min => Clamped::ToMin(min),
            (_, Some(max)) if value > max => Clamped::ToMax(max),
            _ => Clamped::Unchanged(value),
        }
    }
}

/// Parse a trimmed answer as `T`; `None` for anything unusable.
pub fn parse_number<T: NumberKind>(raw: &str) -> Option<T> {
    raw.trim().parse::<T>().ok().filter(|v: &T| v.is_usable())
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Prompt until a number of kind `T` is entered.
    ///
    /// An empty answer returns `default` when one is given. Values outside
    /// `bounds` are clamped to the nearest bound and the clamp is announced.
    pub fn read_number<T: NumberKind>(
        &mut self,
        prompt: &str,
        default: Option<T>,
        bounds: Bounds<T>,
    ) -> Result<T, PromptError> {
        loop {
            let answer = self.ask(prompt)?;
            if answer.trim().is_empty()
                && let Some(d) = default
            {
                self.say(format_args!("Using default: {d}"))?;
                return Ok(d);
            }

            let Some(value) = parse_number::<T>(&answer) else {
                self.say(INVALID_NUMBER)?;
                continue;
            };

            return match bounds.clamp(value) {
                Clamped::Unchanged(v) => Ok(v),
                Clamped::ToMin(min) => {
                    self.say(format_args!(
                        "Value {value} is below the minimum; using {min}."
                    ))?;
                    Ok(min)
                }
                Clamped::ToMax(max) => {
                    self.say(format_args!(
                        "Value {value} is above the maximum; using {max}."
                    ))?;
                    Ok(max)
                }
            };
        }
    }
}
