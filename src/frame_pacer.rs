//! Frame rate capping
//!
//! Sleeps until the next frame boundary so the loop runs at a fixed rate.
//! A frame that overruns its budget is not made up for: the next frame simply
//! starts immediately.

use std::thread;
use std::time::{Duration, Instant};

pub struct FramePacer {
    frame_duration: Duration,
    frame_start: Instant,
}

impl FramePacer {
    /// Creates a pacer targeting `fps` frames per second (minimum 1)
    pub fn new(fps: u32) -> Self {
        FramePacer {
            frame_duration: Duration::from_secs(1) / fps.max(1),
            frame_start: Instant::now(),
        }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame_duration
    }

    /// Time left in the current frame after `elapsed` has been spent
    pub fn remaining(&self, elapsed: Duration) -> Duration {
        self.frame_duration.saturating_sub(elapsed)
    }

    /// Blocks until the current frame's budget is used up, then starts the next one
    pub fn wait(&mut self) {
        let remaining = self.remaining(self.frame_start.elapsed());
        if !remaining.is_zero() {
            thread::sleep(remaining);
        }
        self.frame_start = Instant::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sixty_fps_budget() {
        let pacer = FramePacer::new(60);
        assert_eq!(pacer.frame_duration(), Duration::from_nanos(16_666_666));
    }

    #[test]
    fn test_remaining_time() {
        let pacer = FramePacer::new(50);
        assert_eq!(pacer.remaining(Duration::from_millis(5)), Duration::from_millis(15));
        assert_eq!(pacer.remaining(Duration::from_millis(20)), Duration::ZERO);
        assert_eq!(pacer.remaining(Duration::from_millis(35)), Duration::ZERO);
    }

    #[test]
    fn test_zero_fps_is_clamped() {
        let pacer = FramePacer::new(0);
        assert_eq!(pacer.frame_duration(), Duration::from_secs(1));
    }

    #[test]
    fn test_wait_sleeps_at_most_one_frame() {
        let mut pacer = FramePacer::new(100);
        let start = Instant::now();
        pacer.wait();
        let elapsed = start.elapsed();
        assert!(elapsed < Duration::from_secs(1), "{elapsed:?}");
    }
}
