//! Adapter from pull-based "has more / next element" sources to iteration
//!
//! An [`Enumeration`] only knows whether another element is available and
//! how to hand it out. [`EnumerationSpliterator`] drives one element at a
//! time (`try_advance`) or drains it (`for_each_remaining`), reports size
//! characteristics derived from the caller's expected size, and is an
//! [`Iterator`] so it can feed a [`FailableStream`](crate::FailableStream).

use crate::stages::Source;
use crate::stream::{failable_stream, FailableStream};
use failable_core::UNKNOWN_SIZE;
use std::fmt;
use std::iter::Peekable;
use std::ops::BitOr;

/// A pull-based source of elements
pub trait Enumeration {
    type Item;

    /// Whether another element is available
    fn has_more_elements(&mut self) -> bool;

    /// Take the next element, `None` once exhausted
    fn next_element(&mut self) -> Option<Self::Item>;
}

/// An [`Enumeration`] over any iterator
pub struct IterEnumeration<I: Iterator> {
    iter: Peekable<I>,
}

// `Peekable` buffers one item, so both impls also need bounds on `I::Item`.
impl<I> Clone for IterEnumeration<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    fn clone(&self) -> Self {
        Self {
            iter: self.iter.clone(),
        }
    }
}

impl<I> fmt::Debug for IterEnumeration<I>
where
    I: Iterator + fmt::Debug,
    I::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IterEnumeration").field("iter", &self.iter).finish()
    }
}

impl<I: Iterator> IterEnumeration<I> {
    pub fn new(iter: impl IntoIterator<IntoIter = I>) -> Self {
        Self {
            iter: iter.into_iter().peekable(),
        }
    }
}

impl<I: Iterator> Enumeration for IterEnumeration<I> {
    type Item = I::Item;

    fn has_more_elements(&mut self) -> bool {
        self.iter.peek().is_some()
    }

    fn next_element(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }
}

/// Properties a spliterator reports about its elements
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Characteristics(u8);

impl Characteristics {
    pub const NONE: Self = Self(0);
    /// Elements have a defined encounter order
    pub const ORDERED: Self = Self(1);
    /// The element count is known ahead of traversal
    pub const SIZED: Self = Self(1 << 1);
    /// Every split part is also `SIZED`
    pub const SUBSIZED: Self = Self(1 << 2);

    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for Characteristics {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Drives an [`Enumeration`] one element at a time
#[derive(Debug, Clone)]
pub struct EnumerationSpliterator<N> {
    enumeration: N,
    remaining: u64,
    characteristics: Characteristics,
}

impl<N: Enumeration> EnumerationSpliterator<N> {
    /// Wrap an enumeration expected to yield `expected_size` elements.
    ///
    /// Pass [`UNKNOWN_SIZE`] when the count is not known. Enumerations are
    /// always `ORDERED`; a known size adds `SIZED` and `SUBSIZED`.
    pub fn new(expected_size: u64, additional: Characteristics, enumeration: N) -> Self {
        let mut characteristics = additional | Characteristics::ORDERED;
        if expected_size != UNKNOWN_SIZE {
            characteristics = characteristics | Characteristics::SIZED | Characteristics::SUBSIZED;
        }
        Self {
            enumeration,
            remaining: expected_size,
            characteristics,
        }
    }

    /// Hand the next element to `action`; `false` when none was available
    pub fn try_advance<F>(&mut self, action: F) -> bool
    where
        F: FnOnce(N::Item),
    {
        match self.next() {
            Some(element) => {
                action(element);
                true
            }
            None => false,
        }
    }

    /// Hand every remaining element to `action`
    pub fn for_each_remaining<F>(&mut self, mut action: F)
    where
        F: FnMut(N::Item),
    {
        while self.try_advance(&mut action) {}
    }

    /// Elements still expected, or [`UNKNOWN_SIZE`]
    pub fn estimate_size(&self) -> u64 {
        self.remaining
    }

    pub fn characteristics(&self) -> Characteristics {
        self.characteristics
    }

    pub fn has_characteristics(&self, characteristics: Characteristics) -> bool {
        self.characteristics.contains(characteristics)
    }

    fn is_sized(&self) -> bool {
        self.characteristics.contains(Characteristics::SIZED)
    }
}

impl<N: Enumeration> Iterator for EnumerationSpliterator<N> {
    type Item = N::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.enumeration.has_more_elements() {
            return None;
        }
        let element = self.enumeration.next_element()?;
        if self.is_sized() {
            self.remaining = self.remaining.saturating_sub(1);
        }
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.is_sized() {
            (0, usize::try_from(self.remaining).ok())
        } else {
            (0, None)
        }
    }
}

/// A failable stream over an enumeration of unknown size
pub fn enumeration_stream<N: Enumeration>(
    enumeration: N,
) -> FailableStream<Source<EnumerationSpliterator<N>>> {
    failable_stream(EnumerationSpliterator::new(
        UNKNOWN_SIZE,
        Characteristics::ORDERED,
        enumeration,
    ))
}
