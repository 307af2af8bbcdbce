//! Tutorial target registry.
//!
//! Binds tutorial steps to mounted UI elements and keeps the on-screen
//! rectangle of the element belonging to the active step, so the overlay
//! can spotlight it. Measurement only happens for the active step; every
//! other pending measurement is cancelled as soon as the step changes or
//! the tutorial stops.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use dm_core::ports::{ElementMeasurePort, ScrollPort};
use dm_core::tutorial::{Rect, TutorialSnapshot, TutorialStep};

use super::timings::TutorialTimings;

#[derive(Default)]
struct RegistryInner {
    targets: HashMap<TutorialStep, Arc<dyn ElementMeasurePort>>,
    pending: HashMap<TutorialStep, JoinHandle<()>>,
    measurements: HashMap<TutorialStep, Rect>,
}

impl RegistryInner {
    fn cancel(&mut self, step: TutorialStep) {
        if let Some(handle) = self.pending.remove(&step) {
            handle.abort();
        }
    }

    fn cancel_all(&mut self) {
        for (_, handle) in self.pending.drain() {
            handle.abort();
        }
    }
}

pub struct TutorialTargetRegistry {
    timings: TutorialTimings,
    scroll: Option<Arc<dyn ScrollPort>>,
    snapshots: watch::Receiver<TutorialSnapshot>,
    inner: Arc<Mutex<RegistryInner>>,
}

impl TutorialTargetRegistry {
    pub fn new(
        snapshots: watch::Receiver<TutorialSnapshot>,
        timings: TutorialTimings,
        scroll: Option<Arc<dyn ScrollPort>>,
    ) -> Self {
        Self {
            timings,
            scroll,
            snapshots,
            inner: Arc::new(Mutex::new(RegistryInner::default())),
        }
    }

    /// Register the element that represents `step`. Replaces any earlier one.
    pub async fn register(&self, step: TutorialStep, element: Arc<dyn ElementMeasurePort>) {
        {
            let mut inner = self.inner.lock().await;
            inner.cancel(step);
            inner.measurements.remove(&step);
            inner.targets.insert(step, element);
        }
        let snapshot = *self.snapshots.borrow();
        self.sync(&snapshot).await;
    }

    /// Forget the element for `step`, e.g. when it unmounts.
    pub async fn unregister(&self, step: TutorialStep) {
        let mut inner = self.inner.lock().await;
        inner.cancel(step);
        inner.targets.remove(&step);
        inner.measurements.remove(&step);
    }

    pub async fn measurement(&self, step: TutorialStep) -> Option<Rect> {
        self.inner.lock().await.measurements.get(&step).copied()
    }

    pub async fn is_measuring(&self, step: TutorialStep) -> bool {
        self.inner
            .lock()
            .await
            .pending
            .get(&step)
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Reconcile pending work and measurements with a tutorial snapshot.
    pub async fn sync(&self, snapshot: &TutorialSnapshot) {
        let mut inner = self.inner.lock().await;

        let Some(step) = snapshot.current_step() else {
            inner.cancel_all();
            inner.measurements.clear();
            return;
        };

        let stale: Vec<TutorialStep> = inner
            .pending
            .keys()
            .copied()
            .filter(|s| *s != step)
            .collect();
        for other in stale {
            inner.cancel(other);
        }
        inner.measurements.retain(|s, _| *s == step);

        let Some(element) = inner.targets.get(&step).cloned() else {
            return;
        };
        let running = inner
            .pending
            .get(&step)
            .is_some_and(|handle| !handle.is_finished());
        if running || inner.measurements.contains_key(&step) {
            return;
        }

        debug!(step = ?step, "scheduling tutorial target measurement");
        let job = MeasureJob {
            step,
            element,
            scroll: self.scroll.clone(),
            timings: self.timings,
            snapshots: self.snapshots.clone(),
            inner: Arc::clone(&self.inner),
        };
        inner.pending.insert(step, tokio::spawn(job.run()));
    }

    /// Follow the controller's snapshots until the controller goes away.
    pub fn spawn(self: Arc<Self>) -> JoinHandle<()> {
        let mut snapshots = self.snapshots.clone();
        tokio::spawn(async move {
            loop {
                let snapshot = *snapshots.borrow_and_update();
                self.sync(&snapshot).await;
                if snapshots.changed().await.is_err() {
                    break;
                }
            }
            self.inner.lock().await.cancel_all();
        })
    }
}

struct MeasureJob {
    step: TutorialStep,
    element: Arc<dyn ElementMeasurePort>,
    scroll: Option<Arc<dyn ScrollPort>>,
    timings: TutorialTimings,
    snapshots: watch::Receiver<TutorialSnapshot>,
    inner: Arc<Mutex<RegistryInner>>,
}

impl MeasureJob {
    async fn run(self) {
        tokio::time::sleep(self.timings.settle_delay).await;
        let rect = self.locate().await;

        let mut inner = self.inner.lock().await;
        inner.pending.remove(&self.step);
        let Some(rect) = rect else {
            warn!(step = ?self.step, "tutorial target never laid out, spotlight skipped");
            return;
        };
        if self.snapshots.borrow().current_step() != Some(self.step) {
            debug!(step = ?self.step, "tutorial moved on, dropping measurement");
            return;
        }
        debug!(step = ?self.step, ?rect, "tutorial target measured");
        inner.measurements.insert(self.step, rect);
    }

    async fn locate(&self) -> Option<Rect> {
        let rect = self.measure_with_retry().await?;
        let Some(scroll) = &self.scroll else {
            return Some(rect);
        };

        let policy = self.timings.scroll_policy;
        let viewport = scroll.viewport().await;
        if !policy.needs_scroll(&rect, &viewport) {
            return Some(rect);
        }

        let offset = policy.scroll_target(&rect, &viewport);
        debug!(step = ?self.step, offset, "scrolling tutorial target into view");
        scroll.scroll_to(offset).await;
        tokio::time::sleep(self.timings.scroll_settle_delay).await;
        self.measure_with_retry().await
    }

    async fn measure_with_retry(&self) -> Option<Rect> {
        let mut attempt = 0;
        loop {
            if let Some(rect) = self.element.measure().await.filter(Rect::is_laid_out) {
                return Some(rect);
            }
            if attempt >= self.timings.max_measure_retries {
                return None;
            }
            attempt += 1;
            debug!(step = ?self.step, attempt, "tutorial target not laid out, retrying");
            tokio::time::sleep(self.timings.retry_delay).await;
        }
    }
}
