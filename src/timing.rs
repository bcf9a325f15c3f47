//! Frame pacing
//!
//! Keeps the loop on a fixed cadence measured from its start time.

use std::time::{Duration, Instant};

/// How long to wait from `elapsed` until the next frame boundary
///
/// Boundaries sit at whole multiples of `frame_time` from the loop start, so
/// an overrun does not push every later frame back: the next boundary is just
/// recomputed from the start time.
pub fn time_to_next_frame(elapsed: Duration, frame_time: Duration) -> Duration {
    let frame_ns = frame_time.as_nanos();
    if frame_ns == 0 {
        return Duration::ZERO;
    }
    let elapsed_ns = elapsed.as_nanos();
    let next_frame = elapsed_ns.div_ceil(frame_ns);
    let wait_ns = next_frame * frame_ns - elapsed_ns;
    Duration::from_nanos(wait_ns as u64)
}

/// FramePacer keeps the loop on a fixed cadence anchored at its start time
pub struct FramePacer {
    start: Instant,
    frame_time: Duration,
    /// Frames completed since start
    pub frame_count: u64,

    // Diagnostics
    fps_timer: Instant,
    fps_frame_count: u32,
    pub current_fps: u32,
    fps_dt: Duration,
}

impl FramePacer {
    pub fn new(frame_time: Duration) -> Self {
        Self::starting_at(Instant::now(), frame_time)
    }

    pub fn starting_at(start: Instant, frame_time: Duration) -> Self {
        Self {
            start,
            frame_time,
            frame_count: 0,
            fps_timer: start,
            fps_frame_count: 0,
            current_fps: 0,
            fps_dt: Duration::from_secs(1),
        }
    }

    pub fn frame_time(&self) -> Duration {
        self.frame_time
    }

    /// Record a finished frame at `now` and return how long to sleep
    pub fn end_frame(&mut self, now: Instant) -> Duration {
        self.frame_count += 1;
        self.fps_frame_count += 1;

        if now - self.fps_timer >= self.fps_dt {
            let elapsed = (now - self.fps_timer).as_secs_f32();
            self.current_fps = (self.fps_frame_count as f32 / elapsed).round() as u32;
            self.fps_frame_count = 0;
            self.fps_timer = now;
            log::debug!("{} fps ({} frames total)", self.current_fps, self.frame_count);
        }

        self.sleep_duration(now)
    }

    /// Time left until the next frame boundary, zero if already past it
    pub fn sleep_duration(&self, now: Instant) -> Duration {
        time_to_next_frame(now.saturating_duration_since(self.start), self.frame_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(16);

    #[test]
    fn test_sleeps_to_next_boundary() {
        assert_eq!(time_to_next_frame(Duration::from_millis(5), FRAME), Duration::from_millis(11));
        assert_eq!(time_to_next_frame(Duration::from_millis(20), FRAME), Duration::from_millis(12));
    }

    #[test]
    fn test_on_boundary_no_sleep() {
        assert_eq!(time_to_next_frame(Duration::ZERO, FRAME), Duration::ZERO);
        assert_eq!(time_to_next_frame(Duration::from_millis(32), FRAME), Duration::ZERO);
    }

    #[test]
    fn test_overrun_realigns_without_drift() {
        // A 40 ms frame overruns boundaries 16 and 32; the wait targets 48
        assert_eq!(time_to_next_frame(Duration::from_millis(40), FRAME), Duration::from_millis(8));

        // Many slow frames later, wake-ups are still on the original grid
        let elapsed = Duration::from_millis(1000 * 16 + 3);
        let wait = time_to_next_frame(elapsed, FRAME);
        assert_eq!((elapsed + wait).as_millis() % 16, 0);
    }

    #[test]
    fn test_zero_frame_time() {
        assert_eq!(time_to_next_frame(Duration::from_millis(7), Duration::ZERO), Duration::ZERO);
    }

    #[test]
    fn test_pacer_anchored_at_start() {
        let start = Instant::now();
        let mut pacer = FramePacer::starting_at(start, FRAME);
        assert_eq!(pacer.end_frame(start + Duration::from_millis(4)), Duration::from_millis(12));
        // Overrun: no sleep owed
        assert_eq!(pacer.sleep_duration(start + Duration::from_millis(16)), Duration::ZERO);
        assert_eq!(pacer.end_frame(start + Duration::from_millis(50)), Duration::from_millis(14));
        assert_eq!(pacer.frame_count, 2);
    }

    #[test]
    fn test_fps_report() {
        let start = Instant::now();
        let mut pacer = FramePacer::starting_at(start, FRAME);
        for i in 1..=60 {
            pacer.end_frame(start + Duration::from_millis(i * 1000 / 60));
        }
        assert_eq!(pacer.current_fps, 60);
    }
}
