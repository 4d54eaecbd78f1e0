//! Animation scheduler
//!
//! Owns every running timeline plus a registry of saved, named templates, and
//! advances the running ones once per frame.

use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};

use crate::binding::{Target, TargetKey};
use crate::builder::Animator;
use crate::config::SchedulerConfig;
use crate::diagnostics::Diagnostics;
use crate::interpolator::PlayState;
use crate::timeline::{Repeat, Timeline};

new_key_type! {
    pub struct TimelineId;
}

/// The per-frame driver for all timelines
pub struct Scheduler {
    config: SchedulerConfig,
    timelines: SlotMap<TimelineId, Timeline>,
    /// Insertion order of running timelines
    running: Vec<TimelineId>,
    saved: FxHashMap<String, Timeline>,
    /// Builder timelines not yet committed, one per target
    pending: FxHashMap<TargetKey, Timeline>,
    diagnostics: Diagnostics,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::with_config(SchedulerConfig::default())
    }

    pub fn with_config(config: SchedulerConfig) -> Self {
        Self {
            timelines: SlotMap::with_capacity_and_key(config.running_capacity),
            running: Vec::with_capacity(config.running_capacity),
            saved: FxHashMap::default(),
            pending: FxHashMap::default(),
            diagnostics: Diagnostics::default(),
            config,
        }
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Advance every running timeline by `dt` seconds.
    ///
    /// Timelines are visited newest first so finished ones can be removed in
    /// place. Paused timelines hold their position.
    pub fn update(&mut self, dt: f32) {
        let dt = self.config.frame_delta(dt);

        for i in (0..self.running.len()).rev() {
            let id = self.running[i];
            let Some(timeline) = self.timelines.get_mut(id) else {
                self.running.remove(i);
                continue;
            };

            let done = if is_orphaned(timeline) {
                tracing::trace!("Dropping timeline {:?}: target is gone", id);
                true
            } else {
                match timeline.state() {
                    PlayState::Running => timeline.advance(dt),
                    PlayState::Paused => false,
                    PlayState::Stopped => true,
                }
            };
            self.diagnostics.merge(timeline.take_diagnostics());

            if done {
                self.running.remove(i);
                self.retire(id);
            }
        }

        // Builders left on nodes that have since been dropped
        self.pending.retain(|_, timeline| !is_orphaned(timeline));

        tracing::trace!("Scheduler update: {} running", self.running.len());
    }

    /// Store `timeline` as a named template, replacing any earlier one.
    ///
    /// Saving never starts anything.
    pub fn save(&mut self, name: impl Into<String>, timeline: Timeline) {
        let name = name.into();
        let template = timeline.fresh().with_name(name.clone());
        if self.saved.insert(name.clone(), template).is_some() {
            tracing::debug!("Replaced saved timeline `{}`", name);
        } else {
            tracing::debug!("Saved timeline `{}`", name);
        }
    }

    /// Run a fresh copy of the saved timeline `name` on `target`.
    ///
    /// Any instance of `name` already running on `target` is stopped first.
    /// Returns `None` when nothing is saved under `name`.
    pub fn run_saved(&mut self, target: &Target, name: &str) -> Option<TimelineId> {
        let Some(template) = self.saved.get(name) else {
            tracing::debug!("No saved timeline named `{}`", name);
            return None;
        };
        let timeline = template.fresh().with_target(target);
        Some(self.run(timeline))
    }

    /// Start `timeline` and register it as running.
    ///
    /// A named, bound timeline replaces any running instance with the same
    /// name on the same target. Anonymous timelines never replace anything:
    /// running the same timeline twice yields two independent copies. Use
    /// [`restart`](Self::restart) with the returned id to stop and start one
    /// instance again.
    pub fn run(&mut self, mut timeline: Timeline) -> TimelineId {
        if let (Some(name), Some(bound)) = (timeline.name(), timeline.target()) {
            let key = bound.key();
            self.stop_where(|t| {
                t.name() == Some(name) && t.target().is_some_and(|b| b.key() == key)
            });
        }

        timeline.start();
        tracing::debug!(
            "Running timeline `{}` ({} operations)",
            timeline.name().unwrap_or("<anonymous>"),
            timeline.len()
        );

        let id = self.timelines.insert(timeline);
        self.running.push(id);
        id
    }

    /// Stop a running timeline and start it again from its first pass
    pub fn restart(&mut self, id: TimelineId) -> bool {
        let Some(timeline) = self.timelines.get_mut(id) else {
            return false;
        };
        timeline.stop();
        timeline.start();
        true
    }

    /// Stop one timeline, snapping its active operations to their end values
    pub fn stop(&mut self, id: TimelineId) -> bool {
        self.stop_where_id(id)
    }

    /// Stop every running instance of `name` on `target`
    pub fn stop_named(&mut self, target: &Target, name: &str) -> usize {
        let key = TargetKey::of(target);
        self.stop_where(|t| t.name() == Some(name) && t.target().is_some_and(|b| b.key() == key))
    }

    /// Stop everything running on `target` and drop its pending builder
    pub fn stop_target(&mut self, target: &Target) -> usize {
        let key = TargetKey::of(target);
        self.pending.remove(&key);
        self.stop_where(|t| t.target().is_some_and(|b| b.key() == key))
    }

    pub fn stop_all(&mut self) -> usize {
        self.stop_where(|_| true)
    }

    /// Change the repeat count of a saved timeline.
    ///
    /// Copies already running keep the count they started with. Returns
    /// `false` when nothing is saved under `name`.
    pub fn set_repeat(&mut self, name: &str, repeat: impl Into<Repeat>) -> bool {
        match self.saved.get_mut(name) {
            Some(timeline) => {
                timeline.set_repeat(repeat);
                true
            }
            None => {
                tracing::debug!("Ignoring repeat for unsaved timeline `{}`", name);
                false
            }
        }
    }

    pub fn pause(&mut self, id: TimelineId) -> bool {
        match self.timelines.get_mut(id) {
            Some(timeline) if timeline.is_running() => {
                timeline.pause();
                true
            }
            _ => false,
        }
    }

    pub fn resume(&mut self, id: TimelineId) -> bool {
        match self.timelines.get_mut(id) {
            Some(timeline) if timeline.state() == PlayState::Paused => {
                timeline.resume();
                true
            }
            _ => false,
        }
    }

    /// Start building an animation for `target`.
    ///
    /// Operations accumulate in one pending timeline per target until a
    /// terminal call on the returned [`Animator`]. An uncommitted builder
    /// leaves its timeline pending, and the next call extends it.
    pub fn animate(&mut self, target: &Target) -> Animator<'_> {
        Animator::new(self, target)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────────

    pub fn is_running(&self, id: TimelineId) -> bool {
        self.timelines.contains_key(id)
    }

    pub fn running_count(&self) -> usize {
        self.running.len()
    }

    /// Check if any timeline is still registered
    pub fn has_active_animations(&self) -> bool {
        !self.running.is_empty()
    }

    /// Number of running instances of `name` on `target`
    pub fn running_named(&self, target: &Target, name: &str) -> usize {
        let key = TargetKey::of(target);
        self.running
            .iter()
            .filter_map(|id| self.timelines.get(*id))
            .filter(|t| t.name() == Some(name) && t.target().is_some_and(|b| b.key() == key))
            .count()
    }

    pub fn timeline(&self, id: TimelineId) -> Option<&Timeline> {
        self.timelines.get(id)
    }

    pub fn saved(&self, name: &str) -> Option<&Timeline> {
        self.saved.get(name)
    }

    pub fn saved_names(&self) -> impl Iterator<Item = &str> {
        self.saved.keys().map(String::as_str)
    }

    /// The timeline a builder is accumulating for `target`, if any
    pub fn pending(&self, target: &Target) -> Option<&Timeline> {
        self.pending
            .get(&TargetKey::of(target))
            .filter(|timeline| !is_orphaned(timeline))
    }

    /// Number of targets with an uncommitted builder timeline
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Fault and lifecycle totals since the scheduler was created
    pub fn diagnostics(&self) -> Diagnostics {
        let mut totals = self.diagnostics;
        for timeline in self.timelines.values() {
            totals.merge(*timeline.diagnostics());
        }
        totals
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Builder support
    // ─────────────────────────────────────────────────────────────────────────

    pub(crate) fn pending_mut(&mut self, target: &Target) -> &mut Timeline {
        let key = TargetKey::of(target);
        // A dead target's address can be reused by a new one
        if self.pending.get(&key).is_some_and(is_orphaned) {
            self.pending.remove(&key);
        }

        self.pending
            .entry(key)
            .or_insert_with(|| Timeline::parallel().with_target(target))
    }

    pub(crate) fn take_pending(&mut self, target: &Target) -> Option<Timeline> {
        self.pending
            .remove(&TargetKey::of(target))
            .filter(|timeline| !is_orphaned(timeline))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Removal
    // ─────────────────────────────────────────────────────────────────────────

    fn stop_where(&mut self, mut matches: impl FnMut(&Timeline) -> bool) -> usize {
        let mut stopped = 0;
        for i in (0..self.running.len()).rev() {
            let id = self.running[i];
            let hit = self.timelines.get(id).is_some_and(|t| matches(t));
            if hit && self.stop_where_id(id) {
                stopped += 1;
            }
        }
        stopped
    }

    fn stop_where_id(&mut self, id: TimelineId) -> bool {
        let Some(timeline) = self.timelines.get_mut(id) else {
            return false;
        };
        timeline.stop();
        self.running.retain(|running| *running != id);
        self.retire(id);
        true
    }

    fn retire(&mut self, id: TimelineId) {
        if let Some(mut timeline) = self.timelines.remove(id) {
            self.diagnostics.merge(timeline.take_diagnostics());
            self.diagnostics.timelines_finished += 1;
            tracing::debug!(
                "Timeline `{}` finished",
                timeline.name().unwrap_or("<anonymous>")
            );
        }
    }
}

/// Bound to a target that no longer exists
fn is_orphaned(timeline: &Timeline) -> bool {
    timeline
        .target()
        .is_some_and(|bound| bound.upgrade().is_none())
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}
