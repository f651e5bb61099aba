use super::constants::{HISTORY_MARGIN, HISTORY_MIN_CAPACITY, MIN_SAMPLE_INTERVAL};
use glam::Vec3;
use std::collections::VecDeque;

/// Recency buffer of past head positions, newest at index 0. Consecutive
/// samples are at least `sample_interval` apart, so an index maps to an
/// arc-length offset behind the head.
#[derive(Debug, Clone)]
pub struct PathHistory {
    samples: VecDeque<Vec3>,
    spacing: f32,
    sample_interval: f32,
}

impl PathHistory {
    pub fn new(spacing: f32, sample_interval: f32) -> Self {
        Self {
            samples: VecDeque::new(),
            spacing,
            sample_interval: sample_interval.max(MIN_SAMPLE_INTERVAL),
        }
    }

    pub fn sample_interval(&self) -> f32 {
        self.sample_interval
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn newest(&self) -> Option<Vec3> {
        self.samples.front().copied()
    }

    /// Records a new head position if it has moved at least one sample
    /// interval away from the newest entry, evicting the oldest entries past
    /// the capacity for the given segment count. Returns whether the
    /// position was recorded.
    pub fn push(&mut self, position: Vec3, segment_count: usize) -> bool {
        if let Some(front) = self.samples.front() {
            if front.distance(position) < self.sample_interval {
                return false;
            }
        }
        self.samples.push_front(position);
        let cap = self.capacity_for(segment_count);
        while self.samples.len() > cap {
            self.samples.pop_back();
        }
        true
    }

    /// Position at a recency index, clamped to the oldest retained sample.
    /// Only fails on an empty buffer. The clamp is what lets segments fall
    /// back to the tail of the recorded path right after spawn, when the
    /// history is still shorter than the body needs.
    pub fn sample(&self, index: usize) -> Option<Vec3> {
        if self.samples.is_empty() {
            return None;
        }
        let clamped = index.min(self.samples.len() - 1);
        self.samples.get(clamped).copied()
    }

    fn capacity_for(&self, segment_count: usize) -> usize {
        let needed = (segment_count + HISTORY_MARGIN) as f32 * self.spacing / self.sample_interval;
        let cap = (needed.ceil() as usize) * 2;
        cap.max(HISTORY_MIN_CAPACITY)
    }
}
