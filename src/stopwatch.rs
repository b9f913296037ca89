//! Stopwatch timing and lap bookkeeping.
//!
//! The engine is driven entirely by timestamps handed to it by the caller
//! (epoch milliseconds), so it never reads the clock itself.

/// What `primary_action` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimaryOutcome {
    /// A lap was recorded at the front of the list
    Lap,
    /// Elapsed time and laps were cleared
    Reset,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stopwatch {
    running: bool,
    elapsed_millis: u64,
    /// Timestamp of the last accounted tick; only meaningful while running
    last_tick_millis: u64,
    /// Newest lap first
    laps: Vec<u64>,
}

impl Stopwatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn elapsed_millis(&self) -> u64 {
        self.elapsed_millis
    }

    pub fn laps(&self) -> &[u64] {
        &self.laps
    }

    /// Start or stop the stopwatch, returning the new running state
    pub fn toggle(&mut self, now: u64) -> bool {
        self.running = !self.running;
        if self.running {
            self.last_tick_millis = now;
        }
        self.running
    }

    /// Account the time since the previous tick
    ///
    /// Returns the delta that was added. Does nothing while stopped, and a
    /// clock that moved backwards contributes zero.
    pub fn tick(&mut self, now: u64) -> u64 {
        if !self.running {
            return 0;
        }
        let delta = now.saturating_sub(self.last_tick_millis);
        self.elapsed_millis += delta;
        // Never move the reference point backwards either, otherwise the
        // next forward jump would count the skew twice.
        self.last_tick_millis = self.last_tick_millis.max(now);
        delta
    }

    /// Lap while running, reset while stopped
    pub fn primary_action(&mut self) -> PrimaryOutcome {
        if self.running {
            self.laps.insert(0, self.elapsed_millis);
            PrimaryOutcome::Lap
        } else {
            self.elapsed_millis = 0;
            self.laps.clear();
            PrimaryOutcome::Reset
        }
    }

    /// 1-based display number of the lap stored at `index` (oldest lap is 1)
    pub fn lap_number(&self, index: usize) -> usize {
        self.laps.len().saturating_sub(index)
    }

    /// Laps newest first, each paired with its display number
    pub fn numbered_laps(&self) -> impl Iterator<Item = (usize, u64)> + '_ {
        self.laps
            .iter()
            .enumerate()
            .map(|(index, millis)| (self.lap_number(index), *millis))
    }

    pub fn primary_label(&self) -> &'static str {
        if self.running { "Lap" } else { "Reset" }
    }

    pub fn toggle_label(&self) -> &'static str {
        if self.running { "Stop" } else { "Start" }
    }
}

/// Format milliseconds as `MM:SS.CC`
///
/// Minutes wrap at 60; there is no hours field.
pub fn format_time(millis: u64) -> String {
    let minutes = (millis / 60_000) % 60;
    let seconds = (millis / 1_000) % 60;
    let hundredths = (millis / 10) % 100;
    format!("{:02}:{:02}.{:02}", minutes, seconds, hundredths)
}
