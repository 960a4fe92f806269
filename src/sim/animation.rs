//! Tick-counted sprite animation

use serde::{Deserialize, Serialize};

use crate::gfx::SpriteId;

/// Maps an elapsed-tick counter onto an ordered list of frames.
///
/// Invariant: `elapsed < frames.len() * frame_duration`. Playback wraps
/// unconditionally when the last frame's duration runs out; `looped` is
/// carried in the data model but not yet consulted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpriteAnimation {
    frames: Vec<SpriteId>,
    frame_duration: u32,
    elapsed: u32,
    looped: bool,
}

impl SpriteAnimation {
    pub fn looping(frames: Vec<SpriteId>, frame_duration: u32) -> Self {
        assert!(!frames.is_empty(), "animation with no frames");
        assert!(frame_duration > 0, "zero frame duration");
        Self {
            frames,
            frame_duration,
            elapsed: 0,
            looped: true,
        }
    }

    /// Advance by one tick, wrapping at the end of the last frame.
    pub fn advance(&mut self) {
        self.elapsed += 1;
        if self.elapsed == self.frames.len() as u32 * self.frame_duration {
            self.elapsed = 0;
        }
    }

    /// The frame for the current tick.
    pub fn current(&self) -> SpriteId {
        self.frames[(self.elapsed / self.frame_duration) as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::Assets;

    fn two_frame() -> SpriteAnimation {
        let assets = Assets::load();
        SpriteAnimation::looping(assets.alien_frames(0).to_vec(), 10)
    }

    #[test]
    fn test_frame_switches_at_duration() {
        let mut anim = two_frame();
        let first = anim.current();
        for _ in 0..9 {
            anim.advance();
            assert_eq!(anim.current(), first);
        }
        anim.advance();
        assert_ne!(anim.current(), first);
    }

    #[test]
    fn test_wraps_to_first_frame() {
        let mut anim = two_frame();
        let first = anim.current();
        for _ in 0..20 {
            anim.advance();
        }
        assert_eq!(anim.current(), first);
        assert_eq!(anim, two_frame());
    }
}
