//! Position transitions between frames.
//!
//! A new target always restarts from the positions currently on screen; an
//! in-flight transition is re-targeted, never queued.

use crate::scene::{join, Frame};
use indexmap::IndexMap;
use lifecycle_layout::Point;
use lifecycle_tree::NodeId;
use std::time::Duration;

/// What a track is doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Enter,
    Update,
    Exit,
}

/// Motion of one node
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Track {
    pub from: Point,
    pub to: Point,
    pub phase: Phase,
}

/// Cubic in-out easing
fn ease(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0) * 2.0;
    if t <= 1.0 {
        t * t * t / 2.0
    } else {
        let t = t - 2.0;
        (t * t * t + 2.0) / 2.0
    }
}

/// Drives node positions from one frame to the next
#[derive(Debug, Clone)]
pub struct Animator {
    duration: Duration,
    elapsed: Duration,
    tracks: IndexMap<NodeId, Track>,
}

impl Animator {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            elapsed: Duration::ZERO,
            tracks: IndexMap::new(),
        }
    }

    /// Start moving towards `next`.
    ///
    /// `previous` is the last frame handed to the animator. Entering nodes grow
    /// out of `source`'s on-screen position; exiting nodes shrink into
    /// `source`'s new position.
    pub fn retarget(&mut self, previous: Option<&Frame>, next: &Frame, source: Option<NodeId>) {
        let on_screen = self.sample();
        let diff = join(previous, next);

        let source_from = source.and_then(|s| on_screen.get(&s).copied());
        let source_to = source.and_then(|s| next.position(s));

        let mut tracks = IndexMap::with_capacity(next.len() + diff.exited.len());
        for (id, view) in &next.nodes {
            // a node still drawn (e.g. mid-exit) continues from where it is
            let (from, phase) = match (on_screen.get(id), diff.entered.contains(id)) {
                (Some(&current), false) => (current, Phase::Update),
                (Some(&current), true) => (current, Phase::Enter),
                (None, _) => (source_from.unwrap_or(view.position), Phase::Enter),
            };
            tracks.insert(
                *id,
                Track {
                    from,
                    to: view.position,
                    phase,
                },
            );
        }
        for id in &diff.exited {
            if let Some(&current) = on_screen.get(id) {
                tracks.insert(
                    *id,
                    Track {
                        from: current,
                        to: source_to.unwrap_or(current),
                        phase: Phase::Exit,
                    },
                );
            }
        }

        tracing::trace!(
            entered = diff.entered.len(),
            updated = diff.updated.len(),
            exited = diff.exited.len(),
            restarted = !self.is_finished(),
            "transition retargeted"
        );
        self.tracks = tracks;
        self.elapsed = Duration::ZERO;
    }

    /// Move the clock forward; returns true once finished.
    pub fn advance(&mut self, dt: Duration) -> bool {
        self.elapsed = (self.elapsed + dt).min(self.duration);
        if self.is_finished() {
            self.tracks.retain(|_, t| t.phase != Phase::Exit);
            for track in self.tracks.values_mut() {
                track.from = track.to;
                track.phase = Phase::Update;
            }
        }
        self.is_finished()
    }

    /// Jump to the end
    pub fn finish(&mut self) {
        self.advance(self.duration);
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Eased progress in `[0, 1]`
    pub fn progress(&self) -> f64 {
        if self.duration.is_zero() {
            1.0
        } else {
            ease(self.elapsed.as_secs_f64() / self.duration.as_secs_f64())
        }
    }

    /// Current position of every node on screen (exiting ones included)
    pub fn sample(&self) -> IndexMap<NodeId, Point> {
        let t = self.progress();
        self.tracks
            .iter()
            .map(|(id, track)| (*id, track.from.lerp(track.to, t)))
            .collect()
    }

    pub fn track(&self, id: NodeId) -> Option<&Track> {
        self.tracks.get(&id)
    }
}
