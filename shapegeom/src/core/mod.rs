//! Core module has the shared numeric traits and the pure math functions everything else is built
//! on.
pub mod math;
pub mod traits;

/// Basic control flow enum used when visiting query results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control<B = ()> {
    /// Indicates to the query function to continue visiting results.
    Continue,
    /// Indicates to the query function to stop visiting results and return a value.
    Break(B),
}

impl<B> Control<B> {
    /// Returns `true` if visiting should stop.
    #[inline]
    pub fn should_break(&self) -> bool {
        matches!(*self, Control::Break(_))
    }
}

impl<B> Default for Control<B> {
    #[inline]
    fn default() -> Self {
        Control::Continue
    }
}

impl<B> static_aabb2d_index::ControlFlow for Control<B> {
    #[inline]
    fn continuing() -> Self {
        Control::Continue
    }

    #[inline]
    fn should_break(&self) -> bool {
        Control::should_break(self)
    }
}
