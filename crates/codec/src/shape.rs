//! Size arithmetic of the fixed-depth layout.
//!
//! A tree encoded with bound `D` occupies the slots of a complete binary
//! tree of depth `D`. A literal reached `k` levels above the bound owns
//! its own slot plus [`padding(k)`](padding) filler slots.

use crate::error::CodecError;

/// Largest accepted depth bound.
pub const MAX_DEPTH: usize = 16;

/// Filler tokens owed by a literal `remaining` levels above the bound.
///
/// `padding(k) = 2 + 4 + ... + 2^k = 2^(k+1) - 2`, so `padding(0) == 0`.
/// Saturates at `usize::MAX` far beyond [`MAX_DEPTH`].
pub fn padding(remaining: usize) -> usize {
    u32::try_from(remaining.saturating_add(1))
        .ok()
        .and_then(|exp| 2usize.checked_pow(exp))
        .map_or(usize::MAX, |full| full - 2)
}

/// Token count of any tree encoded from depth 0 with bound `max_depth`.
pub fn frame_len(max_depth: usize) -> usize {
    padding(max_depth).saturating_add(1)
}

pub(crate) fn check_bound(max_depth: usize) -> Result<(), CodecError> {
    if max_depth > MAX_DEPTH {
        return Err(CodecError::DepthBoundTooLarge {
            max_depth,
            limit: MAX_DEPTH,
        });
    }
    Ok(())
}
