// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use smallvec::SmallVec;

use crate::motion::{Motion, Sample};

/// A channel that finished animating during [`Timeline::advance`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Settled<K> {
    /// Channel that came to rest.
    pub key: K,
    /// Final value of the channel.
    pub value: f64,
}

#[derive(Clone, Debug)]
struct Track<K> {
    key: K,
    motion: Motion,
    started_at: u64,
    last: Sample,
}

/// Running animations keyed by channel.
///
/// At most one animation runs per key; starting a new one replaces the old
/// one without a [`Settled`] record, matching how a fresh animation on the
/// same value interrupts the previous one.
#[derive(Clone, Debug)]
pub struct Timeline<K> {
    tracks: SmallVec<[Track<K>; 8]>,
}

impl<K> Default for Timeline<K> {
    fn default() -> Self {
        Self {
            tracks: SmallVec::new(),
        }
    }
}

impl<K: Copy + Eq> Timeline<K> {
    /// Creates an empty timeline.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts `motion` on `key` at host time `now`, replacing any running motion.
    pub fn start(&mut self, key: K, motion: Motion, now: u64) {
        let track = Track {
            key,
            motion,
            started_at: now,
            last: motion.sample(0),
        };
        match self.tracks.iter_mut().find(|t| t.key == key) {
            Some(existing) => *existing = track,
            None => self.tracks.push(track),
        }
    }

    /// Stops the motion on `key` and returns the value it was frozen at.
    pub fn cancel(&mut self, key: K) -> Option<f64> {
        let idx = self.tracks.iter().position(|t| t.key == key)?;
        Some(self.tracks.remove(idx).last.value)
    }

    /// Stops every motion.
    pub fn clear(&mut self) {
        self.tracks.clear();
    }

    /// Returns `true` if a motion is running on `key`.
    #[must_use]
    pub fn is_running(&self, key: K) -> bool {
        self.tracks.iter().any(|t| t.key == key)
    }

    /// Returns `true` if nothing is running.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Number of running motions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Most recently sampled value of `key`.
    #[must_use]
    pub fn value(&self, key: K) -> Option<f64> {
        self.tracks.iter().find(|t| t.key == key).map(|t| t.last.value)
    }

    /// The motion running on `key`.
    #[must_use]
    pub fn motion(&self, key: K) -> Option<&Motion> {
        self.tracks.iter().find(|t| t.key == key).map(|t| &t.motion)
    }

    /// Samples every running motion at host time `now`.
    ///
    /// `apply` receives the current value of each channel, in start order.
    /// Channels that came to rest are removed and returned as [`Settled`]
    /// records in the same order.
    pub fn advance(
        &mut self,
        now: u64,
        mut apply: impl FnMut(K, f64),
    ) -> SmallVec<[Settled<K>; 4]> {
        let mut settled = SmallVec::new();
        for track in &mut self.tracks {
            track.last = track.motion.sample(now.saturating_sub(track.started_at));
            apply(track.key, track.last.value);
            if track.last.done {
                settled.push(Settled {
                    key: track.key,
                    value: track.last.value,
                });
            }
        }
        self.tracks.retain(|t| !t.last.done);
        settled
    }
}

#[cfg(test)]
mod tests {
    use smallvec::SmallVec;

    use super::Timeline;
    use crate::{Decay, Easing, Motion, Timing};

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum Ch {
        A,
        B,
    }

    fn linear(from: f64, to: f64, ms: u64) -> Motion {
        Motion::Timing(Timing::new(from, to, ms, Easing::Linear))
    }

    #[test]
    fn advance_applies_values_and_reports_settled_in_order() {
        let mut tl = Timeline::new();
        tl.start(Ch::A, linear(0.0, 10.0, 100), 0);
        tl.start(Ch::B, linear(0.0, 10.0, 50), 0);

        let mut seen: SmallVec<[(Ch, f64); 4]> = SmallVec::new();
        let settled = tl.advance(50, |k, v| seen.push((k, v)));
        assert_eq!(seen.as_slice(), &[(Ch::A, 5.0), (Ch::B, 10.0)]);
        assert_eq!(settled.len(), 1);
        assert_eq!(settled[0].key, Ch::B);
        assert!(tl.is_running(Ch::A));
        assert!(!tl.is_running(Ch::B));

        let settled = tl.advance(200, |_, _| {});
        assert_eq!(settled[0].key, Ch::A);
        assert_eq!(settled[0].value, 10.0);
        assert!(tl.is_empty());
    }

    #[test]
    fn restart_replaces_without_settling() {
        let mut tl = Timeline::new();
        tl.start(Ch::A, linear(0.0, 10.0, 100), 0);
        tl.start(Ch::A, linear(5.0, 0.0, 100), 10);
        assert_eq!(tl.len(), 1);
        assert_eq!(tl.value(Ch::A), Some(5.0));

        let mut last = f64::NAN;
        let settled = tl.advance(60, |_, v| last = v);
        assert!(settled.is_empty());
        assert!((last - 2.5).abs() < 1e-9);
    }

    #[test]
    fn cancel_returns_frozen_value() {
        let mut tl = Timeline::new();
        tl.start(Ch::A, Motion::Decay(Decay::new(0.0, 2000.0)), 0);
        let mut live = 0.0;
        let _ = tl.advance(100, |_, v| live = v);
        assert_eq!(tl.cancel(Ch::A), Some(live));
        assert!(!tl.is_running(Ch::A));
        assert_eq!(tl.cancel(Ch::A), None);
    }

    #[test]
    fn time_before_start_samples_start_value() {
        let mut tl = Timeline::new();
        tl.start(Ch::A, linear(3.0, 4.0, 100), 1_000);
        let mut v = 0.0;
        let _ = tl.advance(500, |_, x| v = x);
        assert_eq!(v, 3.0);
    }
}
