use sdl2::TimerSubsystem;
use std::time::Duration;

/// Caps a loop at a fixed number of iterations per second, on SDL's
/// millisecond ticks.
pub struct FrameClock {
    timer: TimerSubsystem,
    frame_ms: u32,
    last_tick: u32,
}

/// Length of one frame in milliseconds at `fps` iterations per second.
pub fn frame_length(fps: u32) -> u32 {
    1000 / fps.max(1)
}

/// Time still to wait once `elapsed_ms` has passed in a `frame_ms` frame.
pub fn remaining(frame_ms: u32, elapsed_ms: u32) -> u32 {
    frame_ms.saturating_sub(elapsed_ms)
}

impl FrameClock {
    pub fn new(timer: TimerSubsystem, fps: u32) -> FrameClock {
        let last_tick = timer.ticks();
        FrameClock {
            timer,
            frame_ms: frame_length(fps),
            last_tick,
        }
    }

    pub fn frame_ms(&self) -> u32 {
        self.frame_ms
    }

    /// Waits until the next tick boundary and returns the full time since the
    /// previous tick, in milliseconds.
    pub fn tick(&mut self) -> u32 {
        let elapsed = self.timer.ticks().wrapping_sub(self.last_tick);
        let wait = remaining(self.frame_ms, elapsed);
        if wait > 0 {
            self.timer.delay(wait);
        }

        let now = self.timer.ticks();
        let frame_time = now.wrapping_sub(self.last_tick);
        self.last_tick = now;

        if frame_time > self.frame_ms * 2 {
            log::warn!("Frame took {}ms, target is {}ms", frame_time, self.frame_ms);
        }
        frame_time
    }

    pub fn pause(&mut self, duration: Duration) {
        self.timer
            .delay(u32::try_from(duration.as_millis()).unwrap_or(u32::MAX));
    }
}
