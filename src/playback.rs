/// Playback state for the verse slideshow.
///
/// One record drives the whole preview: which verse is front and center,
/// whether audio should be rolling, and how far through the active verse's
/// recitation we are. Media elements and the scroll presenter mirror this
/// record; they never own state of their own.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ReelPlayback {
    /// Length of the loaded verse list. Zero means nothing is loaded.
    pub verse_count: usize,
    /// Position into the verse list. Always a valid index, or 0 when the
    /// list is empty.
    pub active_index: usize,
    pub playing: bool,
    /// Elapsed fraction of the active verse's audio, in `[0, 1]`. Pinned to
    /// 0 whenever the active verse changes, so a source whose duration is
    /// not yet known never shows a stale bar.
    pub progress: f64,
}

/// Everything that can move the playback record. User input and media
/// element callbacks funnel through here; nothing mutates the record
/// directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlaybackEvent {
    /// Play/pause button or spacebar.
    UserToggle,
    /// The audio element finished the active verse.
    Ended,
    /// Periodic position report from the audio element.
    TimeUpdate { current: f64, duration: f64 },
    /// A new verse list (or the same list under a new reciter) was loaded.
    SelectionChanged { verse_count: usize },
    /// Rewind-to-start button.
    Restart,
}

impl ReelPlayback {
    pub fn apply(&mut self, event: PlaybackEvent) {
        match event {
            PlaybackEvent::UserToggle => {
                if self.verse_count > 0 {
                    self.playing = !self.playing;
                }
            }
            PlaybackEvent::Ended => {
                if self.verse_count == 0 {
                    return;
                }
                if self.active_index + 1 < self.verse_count {
                    self.active_index += 1;
                    self.progress = 0.0;
                } else {
                    // End of the sequence: stop and rearm at the first
                    // verse. Replaying takes an explicit toggle.
                    self.active_index = 0;
                    self.playing = false;
                    self.progress = 0.0;
                }
            }
            PlaybackEvent::TimeUpdate { current, duration } => {
                if duration.is_finite() && duration > 0.0 {
                    self.progress = (current / duration).clamp(0.0, 1.0);
                }
            }
            PlaybackEvent::SelectionChanged { verse_count } => {
                self.verse_count = verse_count;
                self.active_index = 0;
                self.playing = false;
                self.progress = 0.0;
            }
            PlaybackEvent::Restart => {
                self.active_index = 0;
                self.playing = false;
                self.progress = 0.0;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded(verse_count: usize) -> ReelPlayback {
        let mut state = ReelPlayback::default();
        state.apply(PlaybackEvent::SelectionChanged { verse_count });
        state
    }

    #[test]
    fn toggle_flips_play_state_when_verses_are_loaded() {
        let mut state = loaded(3);
        state.apply(PlaybackEvent::UserToggle);
        assert!(state.playing);
        state.apply(PlaybackEvent::UserToggle);
        assert!(!state.playing);
    }

    #[test]
    fn toggle_does_nothing_on_an_empty_list() {
        let mut state = ReelPlayback::default();
        state.apply(PlaybackEvent::UserToggle);
        assert!(!state.playing);
        assert_eq!(state.active_index, 0);
    }

    #[test]
    fn ended_advances_until_the_last_verse() {
        let mut state = loaded(3);
        state.apply(PlaybackEvent::UserToggle);

        state.apply(PlaybackEvent::Ended);
        assert_eq!(state.active_index, 1);
        assert!(state.playing);

        state.apply(PlaybackEvent::Ended);
        assert_eq!(state.active_index, 2);
        assert!(state.playing);
        assert_eq!(state.active_index + 1, state.verse_count);
    }

    #[test]
    fn ended_on_the_last_verse_stops_and_rearms() {
        let mut state = loaded(3);
        state.apply(PlaybackEvent::UserToggle);
        state.active_index = 2;

        state.apply(PlaybackEvent::Ended);
        assert_eq!(state.active_index, 0);
        assert!(!state.playing);
        assert_eq!(state.progress, 0.0);
    }

    #[test]
    fn a_three_verse_reel_plays_through_in_three_endings() {
        // Seven-verse chapter sliced to verses 2..=4 loads three verses.
        let mut state = loaded(3);
        state.apply(PlaybackEvent::UserToggle);

        state.apply(PlaybackEvent::Ended);
        state.apply(PlaybackEvent::Ended);
        state.apply(PlaybackEvent::Ended);

        assert_eq!(state.active_index, 0);
        assert!(!state.playing);
    }

    #[test]
    fn ended_with_a_single_verse_stops_immediately() {
        let mut state = loaded(1);
        state.apply(PlaybackEvent::UserToggle);
        state.apply(PlaybackEvent::Ended);
        assert_eq!(state.active_index, 0);
        assert!(!state.playing);
    }

    #[test]
    fn advancing_pins_progress_to_zero() {
        let mut state = loaded(2);
        state.apply(PlaybackEvent::UserToggle);
        state.apply(PlaybackEvent::TimeUpdate {
            current: 4.5,
            duration: 5.0,
        });
        assert!(state.progress > 0.8);

        state.apply(PlaybackEvent::Ended);
        assert_eq!(state.progress, 0.0);
    }

    #[test]
    fn time_updates_track_the_elapsed_fraction() {
        let mut state = loaded(1);
        state.apply(PlaybackEvent::TimeUpdate {
            current: 2.0,
            duration: 8.0,
        });
        assert_eq!(state.progress, 0.25);
    }

    #[test]
    fn time_updates_clamp_to_the_unit_interval() {
        let mut state = loaded(1);
        state.apply(PlaybackEvent::TimeUpdate {
            current: 9.0,
            duration: 8.0,
        });
        assert_eq!(state.progress, 1.0);

        state.apply(PlaybackEvent::TimeUpdate {
            current: -1.0,
            duration: 8.0,
        });
        assert_eq!(state.progress, 0.0);
    }

    #[test]
    fn time_updates_without_a_duration_leave_progress_alone() {
        let mut state = loaded(1);
        state.apply(PlaybackEvent::TimeUpdate {
            current: 2.0,
            duration: 8.0,
        });

        state.apply(PlaybackEvent::TimeUpdate {
            current: 3.0,
            duration: 0.0,
        });
        assert_eq!(state.progress, 0.25);

        state.apply(PlaybackEvent::TimeUpdate {
            current: 3.0,
            duration: f64::NAN,
        });
        assert_eq!(state.progress, 0.25);
    }

    #[test]
    fn selection_change_resets_from_any_state() {
        let mut state = loaded(5);
        state.apply(PlaybackEvent::UserToggle);
        state.apply(PlaybackEvent::Ended);
        state.apply(PlaybackEvent::TimeUpdate {
            current: 1.0,
            duration: 2.0,
        });

        state.apply(PlaybackEvent::SelectionChanged { verse_count: 2 });
        assert_eq!(state.verse_count, 2);
        assert_eq!(state.active_index, 0);
        assert!(!state.playing);
        assert_eq!(state.progress, 0.0);
    }

    #[test]
    fn restart_rearms_without_autoplay() {
        let mut state = loaded(4);
        state.apply(PlaybackEvent::UserToggle);
        state.apply(PlaybackEvent::Ended);
        state.apply(PlaybackEvent::Ended);

        state.apply(PlaybackEvent::Restart);
        assert_eq!(state.active_index, 0);
        assert!(!state.playing);
        assert_eq!(state.progress, 0.0);
        assert_eq!(state.verse_count, 4);
    }

    #[test]
    fn index_stays_valid_through_arbitrary_event_runs() {
        let mut state = loaded(3);
        let events = [
            PlaybackEvent::UserToggle,
            PlaybackEvent::Ended,
            PlaybackEvent::Restart,
            PlaybackEvent::Ended,
            PlaybackEvent::Ended,
            PlaybackEvent::Ended,
            PlaybackEvent::SelectionChanged { verse_count: 1 },
            PlaybackEvent::Ended,
            PlaybackEvent::UserToggle,
        ];
        for event in events {
            state.apply(event);
            assert!(state.active_index == 0 || state.active_index < state.verse_count);
        }
    }
}
