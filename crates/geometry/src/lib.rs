//! Plain geometric values.

use core::ops::{Add, Mul};
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle described only by its size.
///
/// No validation is done: negative or zero sizes are stored as given.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rectangle<T = f64> {
    /// Horizontal extent.
    pub width: T,
    /// Vertical extent.
    pub height: T,
}

impl<T> Rectangle<T> {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(width: T, height: T) -> Self {
        Self { width, height }
    }
}

impl<T: Copy + Mul<Output = T>> Rectangle<T> {
    /// Width times height.
    #[inline]
    pub fn area(&self) -> T {
        self.width * self.height
    }
}

impl<T: Copy + Add<Output = T>> Rectangle<T> {
    /// Sum of all four sides.
    #[inline]
    pub fn perimeter(&self) -> T {
        let half = self.width + self.height;
        half + half
    }
}
