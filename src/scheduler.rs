//! Frame loop handle
//!
//! The host (requestAnimationFrame on the web, a plain loop natively) drives
//! [`FrameLoop::frame`] once per display refresh. The handle owns the
//! active/inactive state so there is exactly one loop per session: `start` is
//! idempotent, and re-arming is counted even on frames whose update body is
//! skipped by pause.

use crate::sim::{self, GameSession, InputState};

/// Owned handle for the recurring per-frame callback
#[derive(Debug, Default)]
pub struct FrameLoop {
    active: bool,
    frames: u64,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the loop. Returns true only when this call armed it; a second
    /// start while active is a no-op, so callers never schedule a duplicate
    /// callback chain.
    pub fn start(&mut self) -> bool {
        if self.active {
            log::debug!("frame loop already active, start is a no-op");
            return false;
        }
        self.active = true;
        true
    }

    /// Stop the loop; the host stops re-arming once this is false
    pub fn stop(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Frames dispatched since the loop was created, paused ones included
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run one logical tick. Counts the frame unconditionally; the sim body
    /// itself is a no-op unless the session is running.
    pub fn frame(&mut self, session: &mut GameSession, input: &InputState) {
        if !self.active {
            return;
        }
        self.frames += 1;
        sim::tick(session, input);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Phase;

    fn logged_in_session() -> GameSession {
        let mut session = GameSession::new(3);
        session.login("tester").unwrap();
        session.obstacles.clear();
        session
    }

    #[test]
    fn start_is_idempotent() {
        let mut frame_loop = FrameLoop::new();
        assert!(frame_loop.start());
        assert!(!frame_loop.start());
        assert!(frame_loop.is_active());
    }

    #[test]
    fn paused_frames_still_count() {
        let mut session = logged_in_session();
        assert_eq!(session.phase, Phase::Paused);

        let mut input = InputState::new();
        input.set_key("ArrowRight", true);

        let mut frame_loop = FrameLoop::new();
        frame_loop.start();
        for _ in 0..3 {
            frame_loop.frame(&mut session, &input);
        }

        // The loop kept firing but the update body never ran.
        assert_eq!(frame_loop.frames(), 3);
        assert_eq!(session.player.position, glam::Vec3::ZERO);
    }

    #[test]
    fn running_frames_advance_the_sim() {
        let mut session = logged_in_session();
        session.start();

        let mut input = InputState::new();
        input.set_key("ArrowRight", true);

        let mut frame_loop = FrameLoop::new();
        frame_loop.start();
        frame_loop.frame(&mut session, &input);

        assert!(session.player.position.x > 0.0);
    }

    #[test]
    fn stopped_loop_does_nothing() {
        let mut session = logged_in_session();
        session.start();

        let mut input = InputState::new();
        input.set_key("ArrowRight", true);

        let mut frame_loop = FrameLoop::new();
        frame_loop.start();
        frame_loop.stop();
        frame_loop.frame(&mut session, &input);

        assert_eq!(frame_loop.frames(), 0);
        assert_eq!(session.player.position, glam::Vec3::ZERO);
    }

    #[test]
    fn restart_after_stop_rearms() {
        let mut frame_loop = FrameLoop::new();
        frame_loop.start();
        frame_loop.stop();
        assert!(frame_loop.start());
    }
}
