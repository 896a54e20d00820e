//! Utility modules.
//!
//! Provides:
//! - [`RingBuffer`] - Fixed-capacity buffer with O(1) push
//! - [`format_timestamp`] - Locale-independent timestamp rendering

mod format;
mod ring_buffer;

pub use format::format_timestamp;
pub use ring_buffer::RingBuffer;
