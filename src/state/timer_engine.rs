//! Countdown state machine for one babysteps widget

use tracing::debug;

use super::{BackgroundState, Frame};

/// Length of one countdown cycle
pub const CYCLE_SECONDS: u64 = 120;

/// Elapsed time at which a cycle wraps around; the extra 980ms keep "00:00" on screen
pub const CYCLE_OVERFLOW_MS: i64 = CYCLE_SECONDS as i64 * 1000 + 980;

/// Window after a cycle start in which a passed/failed tint fades back to neutral
const CLEAR_WINDOW_MS: std::ops::Range<i64> = 5000..6000;

const WARNING_CAPTION: &str = "00:10";
const EXPIRY_CAPTION: &str = "00:00";

/// Audio cues fired by the countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clip {
    /// Ten seconds left
    Warning,
    /// Cycle expired
    Expiry,
}

impl Clip {
    /// File name of the bundled sound
    pub fn file_name(&self) -> &'static str {
        match self {
            Clip::Warning => "2166__suburban-grilla__bowl-struck.wav",
            Clip::Expiry => "32304__acclivity__shipsbell.wav",
        }
    }
}

/// Effects produced by a tick whose caption changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickOutcome {
    pub frame: Frame,
    pub clip: Option<Clip>,
}

/// Format remaining time for the given elapsed milliseconds as `MM:SS`
pub fn format_caption(elapsed_ms: i64) -> String {
    let elapsed_seconds = elapsed_ms.max(0) / 1000;
    let remaining_seconds = CYCLE_SECONDS as i64 - elapsed_seconds;
    let remaining_minutes = remaining_seconds / 60;
    format!(
        "{:02}:{:02}",
        remaining_minutes,
        remaining_seconds - remaining_minutes * 60
    )
}

/// Timer state shared by the command dispatcher and the tick loop
#[derive(Debug, Clone, Default)]
pub struct TimerEngine {
    running: bool,
    /// Milliseconds since the Unix epoch; only meaningful while running
    cycle_start: i64,
    background: BackgroundState,
    last_caption: Option<String>,
    session: u64,
}

impl TimerEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start counting a fresh cycle, returning the new session id
    pub fn start(&mut self, now: i64) -> u64 {
        self.running = true;
        self.cycle_start = now;
        self.session += 1;
        debug!("Timer started, session {}", self.session);
        self.session
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Restart the cycle and mark it passed, leaving `running` untouched
    pub fn reset(&mut self, now: i64) {
        self.cycle_start = now;
        self.background = BackgroundState::Passed;
    }

    /// Advance to `now`; returns effects only when the caption changed
    pub fn tick(&mut self, now: i64) -> Option<TickOutcome> {
        if !self.running {
            return None;
        }

        let mut elapsed = now - self.cycle_start;
        if elapsed >= CYCLE_OVERFLOW_MS {
            debug!("Cycle overflow after {}ms, starting a new cycle", elapsed);
            self.cycle_start = now;
            elapsed = now - self.cycle_start;
        }

        if CLEAR_WINDOW_MS.contains(&elapsed) && self.background != BackgroundState::Neutral {
            self.background = BackgroundState::Neutral;
        }

        let caption = format_caption(elapsed);
        if self.last_caption.as_deref() == Some(caption.as_str()) {
            return None;
        }

        let clip = match caption.as_str() {
            WARNING_CAPTION => Some(Clip::Warning),
            EXPIRY_CAPTION => {
                self.background = BackgroundState::Failed;
                Some(Clip::Expiry)
            }
            _ => None,
        };
        self.last_caption = Some(caption.clone());

        Some(TickOutcome {
            frame: Frame::new(caption, self.background, true),
            clip,
        })
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// True while `session` is the latest start and the timer has not been stopped
    pub fn is_current(&self, session: u64) -> bool {
        self.running && self.session == session
    }

    pub fn session(&self) -> u64 {
        self.session
    }

    pub fn cycle_start(&self) -> i64 {
        self.cycle_start
    }

    pub fn background(&self) -> BackgroundState {
        self.background
    }

    pub fn last_caption(&self) -> Option<&str> {
        self.last_caption.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running_at(now: i64) -> TimerEngine {
        let mut engine = TimerEngine::new();
        engine.start(now);
        engine
    }

    #[test]
    fn caption_matches_reference_points() {
        assert_eq!(format_caption(0), "02:00");
        assert_eq!(format_caption(999), "02:00");
        assert_eq!(format_caption(1000), "01:59");
        assert_eq!(format_caption(110_000), "00:10");
        assert_eq!(format_caption(119_999), "00:01");
        assert_eq!(format_caption(120_000), "00:00");
        assert_eq!(format_caption(120_979), "00:00");
    }

    #[test]
    fn caption_is_well_formed_over_the_whole_cycle() {
        for elapsed in (0..CYCLE_OVERFLOW_MS).step_by(137) {
            let caption = format_caption(elapsed);
            let bytes = caption.as_bytes();
            assert_eq!(bytes.len(), 5, "{caption}");
            assert_eq!(bytes[2], b':');
            let minutes: i64 = caption[..2].parse().unwrap();
            let seconds: i64 = caption[3..].parse().unwrap();
            assert!(seconds < 60);
            assert_eq!(minutes * 60 + seconds, 120 - elapsed / 1000);
        }
    }

    #[test]
    fn caption_clamps_negative_elapsed() {
        assert_eq!(format_caption(-2500), "02:00");
    }

    #[test]
    fn first_tick_renders_full_cycle_once() {
        let mut engine = running_at(0);

        let outcome = engine.tick(0).expect("first tick renders");
        assert_eq!(outcome.frame, Frame::new("02:00", BackgroundState::Neutral, true));
        assert_eq!(outcome.clip, None);
        assert!(engine.is_running());

        assert_eq!(engine.tick(10), None);
        assert_eq!(engine.tick(990), None);
        assert_eq!(engine.tick(1000).unwrap().frame.caption, "01:59");
    }

    #[test]
    fn warning_clip_fires_once_per_transition() {
        let mut engine = running_at(0);
        engine.tick(109_990);

        let outcome = engine.tick(110_000).unwrap();
        assert_eq!(outcome.frame.caption, "00:10");
        assert_eq!(outcome.clip, Some(Clip::Warning));
        assert_eq!(engine.tick(110_500), None);
        assert_eq!(engine.tick(111_000).unwrap().clip, None);
    }

    #[test]
    fn expiry_clip_fires_once_and_fails_the_cycle() {
        let mut engine = running_at(0);
        engine.tick(119_000);

        let outcome = engine.tick(120_000).unwrap();
        assert_eq!(outcome.frame.caption, "00:00");
        assert_eq!(outcome.frame.background, BackgroundState::Failed);
        assert_eq!(outcome.clip, Some(Clip::Expiry));
        assert_eq!(engine.background(), BackgroundState::Failed);
        assert_eq!(engine.tick(120_970), None);
    }

    #[test]
    fn overflow_wraps_to_a_fresh_cycle() {
        let mut engine = running_at(1_000);
        engine.tick(121_000);

        let outcome = engine.tick(1_000 + CYCLE_OVERFLOW_MS).unwrap();
        assert_eq!(engine.cycle_start(), 1_000 + CYCLE_OVERFLOW_MS);
        assert_eq!(outcome.frame.caption, "02:00");
        assert_eq!(outcome.frame.background, BackgroundState::Failed);
        assert_eq!(outcome.clip, None);
    }

    #[test]
    fn tint_clears_between_five_and_six_seconds() {
        let mut engine = running_at(0);
        engine.reset(0);
        assert_eq!(engine.background(), BackgroundState::Passed);

        engine.tick(4_999);
        assert_eq!(engine.background(), BackgroundState::Passed);

        let outcome = engine.tick(5_000).unwrap();
        assert_eq!(outcome.frame.background, BackgroundState::Neutral);
    }

    #[test]
    fn tint_survives_when_the_window_is_skipped() {
        let mut engine = running_at(0);
        engine.reset(0);
        engine.tick(4_000);
        engine.tick(6_000);
        assert_eq!(engine.background(), BackgroundState::Passed);
    }

    #[test]
    fn reset_restarts_cycle_without_touching_running() {
        let mut engine = running_at(0);
        engine.tick(30_000);

        engine.reset(42_000);
        assert!(engine.is_running());
        assert_eq!(engine.cycle_start(), 42_000);
        assert_eq!(engine.background(), BackgroundState::Passed);

        let outcome = engine.tick(42_000).unwrap();
        assert_eq!(outcome.frame, Frame::new("02:00", BackgroundState::Passed, true));
    }

    #[test]
    fn reset_while_stopped_keeps_timer_stopped() {
        let mut engine = TimerEngine::new();
        engine.reset(7);
        assert!(!engine.is_running());
        assert_eq!(engine.tick(100), None);
    }

    #[test]
    fn stopped_engine_ignores_ticks() {
        let mut engine = running_at(0);
        engine.tick(0);
        engine.stop();
        engine.stop();

        assert_eq!(engine.tick(120_000), None);
        assert_eq!(engine.last_caption(), Some("02:00"));
        assert_eq!(engine.background(), BackgroundState::Neutral);
    }

    #[test]
    fn restart_supersedes_previous_session() {
        let mut engine = TimerEngine::new();
        let first = engine.start(0);
        let second = engine.start(10);
        assert!(!engine.is_current(first));
        assert!(engine.is_current(second));
        engine.stop();
        assert!(!engine.is_current(second));
    }
}
