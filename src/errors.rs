//! The ways a render request can be rejected before any work starts.
//! The escape-time computation itself is total over its inputs, so
//! nothing here is recoverable mid-render; callers are expected to
//! report the message and give up.

/// Configuration errors caught up front, before any worker is
/// spawned.
#[derive(Copy, Clone, Debug, Fail, PartialEq)]
pub enum RenderError {
    /// The pixel grid has a zero dimension.
    #[fail(display = "image must be at least one pixel in each dimension")]
    EmptyImage,
    /// The rectangle's left edge is not strictly left of its right
    /// edge.
    #[fail(display = "plane rectangle's left edge must lie left of its right edge")]
    InvertedHorizontal,
    /// The rectangle's top edge is not strictly above its bottom
    /// edge.
    #[fail(display = "plane rectangle's top edge must lie above its bottom edge")]
    InvertedVertical,
    /// A render was requested with no workers to run it.
    #[fail(display = "worker count must be at least 1")]
    NoWorkers,
}
