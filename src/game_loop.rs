//! Animation frame bookkeeping
//!
//! Decides, per frame, whether to update, render and reschedule. Each start
//! opens a new frame chain identified by a `LoopTicket`; frames from an older
//! chain are dropped so play-again never runs two chains at once.

use crate::session::SessionPhase;

/// Number of frame timestamps kept for the FPS estimate
const FPS_WINDOW: usize = 60;

/// Identifies one frame chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopTicket(u64);

impl LoopTicket {
    pub fn epoch(self) -> u64 {
        self.0
    }
}

/// What a single frame should do
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStep {
    /// Milliseconds since the previous frame of this chain (0 on the first)
    pub delta_ms: f64,
    /// Run the update step
    pub update: bool,
    /// Run the render step
    pub render: bool,
    /// Request another animation frame
    pub reschedule: bool,
}

/// Frame timing and chain ownership
#[derive(Debug, Clone)]
pub struct FrameLoop {
    epoch: u64,
    last_time: Option<f64>,
    frame_times: [f64; FPS_WINDOW],
    frame_index: usize,
    fps: u32,
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameLoop {
    pub fn new() -> Self {
        Self {
            epoch: 0,
            last_time: None,
            frame_times: [0.0; FPS_WINDOW],
            frame_index: 0,
            fps: 0,
        }
    }

    /// Open a new frame chain, retiring the previous one
    pub fn begin(&mut self) -> LoopTicket {
        self.epoch += 1;
        self.last_time = None;
        self.frame_times = [0.0; FPS_WINDOW];
        self.frame_index = 0;
        self.fps = 0;
        LoopTicket(self.epoch)
    }

    /// Whether `ticket` belongs to the live chain
    pub fn is_current(&self, ticket: LoopTicket) -> bool {
        ticket.0 == self.epoch && self.epoch > 0
    }

    /// Frames per second over the last `FPS_WINDOW` frames
    pub fn fps(&self) -> u32 {
        self.fps
    }

    /// Plan one frame. Returns `None` for a frame from a retired chain.
    ///
    /// Running updates and renders; Paused does neither; both reschedule.
    /// NotStarted renders the reset scene once and ends the chain.
    pub fn frame(
        &mut self,
        ticket: LoopTicket,
        phase: SessionPhase,
        timestamp: f64,
    ) -> Option<FrameStep> {
        if !self.is_current(ticket) {
            return None;
        }

        let last = *self.last_time.get_or_insert(timestamp);
        let delta_ms = (timestamp - last).max(0.0);
        self.last_time = Some(timestamp);
        self.record_fps(timestamp);

        let step = match phase {
            SessionPhase::Running => FrameStep {
                delta_ms,
                update: true,
                render: true,
                reschedule: true,
            },
            SessionPhase::Paused => FrameStep {
                delta_ms,
                update: false,
                render: false,
                reschedule: true,
            },
            SessionPhase::NotStarted => FrameStep {
                delta_ms,
                update: false,
                render: true,
                reschedule: false,
            },
        };
        Some(step)
    }

    fn record_fps(&mut self, time: f64) {
        self.frame_times[self.frame_index] = time;
        self.frame_index = (self.frame_index + 1) % FPS_WINDOW;

        // Oldest sample sits at the next write slot
        let oldest = self.frame_times[self.frame_index];
        if oldest > 0.0 {
            let elapsed = time - oldest;
            if elapsed > 0.0 {
                self.fps = ((FPS_WINDOW - 1) as f64 * 1000.0 / elapsed).round() as u32;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_has_zero_delta() {
        let mut lp = FrameLoop::new();
        let ticket = lp.begin();

        let first = lp.frame(ticket, SessionPhase::Running, 1000.0).unwrap();
        assert_eq!(first.delta_ms, 0.0);

        let second = lp.frame(ticket, SessionPhase::Running, 1016.5).unwrap();
        assert_eq!(second.delta_ms, 16.5);
        assert!(second.update && second.render && second.reschedule);
    }

    #[test]
    fn test_paused_frames_skip_work_but_keep_ticking() {
        let mut lp = FrameLoop::new();
        let ticket = lp.begin();
        let step = lp.frame(ticket, SessionPhase::Paused, 5.0).unwrap();
        assert!(!step.update);
        assert!(!step.render);
        assert!(step.reschedule);
    }

    #[test]
    fn test_not_started_ends_chain_after_render() {
        let mut lp = FrameLoop::new();
        let ticket = lp.begin();
        let step = lp.frame(ticket, SessionPhase::NotStarted, 5.0).unwrap();
        assert!(!step.update);
        assert!(step.render);
        assert!(!step.reschedule);
    }

    #[test]
    fn test_retired_ticket_is_dropped() {
        let mut lp = FrameLoop::new();
        let old = lp.begin();
        lp.frame(old, SessionPhase::Running, 100.0);

        let new = lp.begin();
        assert!(!lp.is_current(old));
        assert_eq!(lp.frame(old, SessionPhase::Running, 116.0), None);

        // New chain bootstraps its own timestamp
        let step = lp.frame(new, SessionPhase::Running, 500.0).unwrap();
        assert_eq!(step.delta_ms, 0.0);
        assert_eq!(new.epoch(), old.epoch() + 1);
    }

    #[test]
    fn test_fps_estimate() {
        let mut lp = FrameLoop::new();
        let ticket = lp.begin();
        for i in 1..=120 {
            lp.frame(ticket, SessionPhase::Running, i as f64 * 20.0);
        }
        assert_eq!(lp.fps(), 50);
    }
}
