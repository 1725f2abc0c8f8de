//! Iteration observers: hooks for tracing, diagnostics and cancellation.
//!
//! The solver notifies an observer once per power-iteration step with the
//! 1-based step index and the L1 change of that step. Observers never touch
//! the rank vector, so they cannot change the result.
//!
//! Cancellation is polled between steps, the only point a long solve
//! passes through repeatedly.

/// Receives per-iteration diagnostics from the solver
pub trait IterationObserver {
    /// Called after every iteration step
    fn on_iteration(&mut self, _iteration: usize, _delta: f64) {}

    /// Polled before each step; returning `true` aborts the solve
    fn is_cancelled(&self) -> bool {
        false
    }
}

/// Observer that ignores everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl IterationObserver for NoopObserver {}

/// Records every `(iteration, delta)` pair
#[derive(Debug, Clone, Default)]
pub struct TraceRecorder {
    pub steps: Vec<(usize, f64)>,
}

impl TraceRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delta of the last recorded step
    pub fn last_delta(&self) -> Option<f64> {
        self.steps.last().map(|&(_, delta)| delta)
    }
}

impl IterationObserver for TraceRecorder {
    fn on_iteration(&mut self, iteration: usize, delta: f64) {
        self.steps.push((iteration, delta));
    }
}

/// Emits each step as a `tracing` event at TRACE level
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingObserver;

impl IterationObserver for LoggingObserver {
    fn on_iteration(&mut self, iteration: usize, delta: f64) {
        tracing::trace!(iteration, delta, "power iteration step");
    }
}

/// Adapts a closure into an observer
pub struct FnObserver<F>(pub F);

impl<F: FnMut(usize, f64)> IterationObserver for FnObserver<F> {
    fn on_iteration(&mut self, iteration: usize, delta: f64) {
        (self.0)(iteration, delta)
    }
}

/// Cancels the solve once a step budget is used up, forwarding to an inner
/// observer.
#[derive(Debug, Clone)]
pub struct StepLimit<O> {
    inner: O,
    remaining: usize,
}

impl<O: IterationObserver> StepLimit<O> {
    pub fn new(inner: O, steps: usize) -> Self {
        Self {
            inner,
            remaining: steps,
        }
    }

    pub fn into_inner(self) -> O {
        self.inner
    }
}

impl<O: IterationObserver> IterationObserver for StepLimit<O> {
    fn on_iteration(&mut self, iteration: usize, delta: f64) {
        self.remaining = self.remaining.saturating_sub(1);
        self.inner.on_iteration(iteration, delta);
    }

    fn is_cancelled(&self) -> bool {
        self.remaining == 0 || self.inner.is_cancelled()
    }
}

impl<O: IterationObserver + ?Sized> IterationObserver for &mut O {
    fn on_iteration(&mut self, iteration: usize, delta: f64) {
        (**self).on_iteration(iteration, delta)
    }

    fn is_cancelled(&self) -> bool {
        (**self).is_cancelled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trace_recorder() {
        let mut rec = TraceRecorder::new();
        rec.on_iteration(1, 0.5);
        rec.on_iteration(2, 0.1);
        assert_eq!(rec.steps, vec![(1, 0.5), (2, 0.1)]);
        assert_eq!(rec.last_delta(), Some(0.1));
        assert!(!rec.is_cancelled());
    }

    #[test]
    fn test_fn_observer() {
        let mut seen = Vec::new();
        {
            let mut obs = FnObserver(|i: usize, _d: f64| seen.push(i));
            obs.on_iteration(1, 0.0);
            obs.on_iteration(2, 0.0);
        }
        assert_eq!(seen, vec![1, 2]);
    }

    #[test]
    fn test_step_limit_cancels() {
        let mut obs = StepLimit::new(TraceRecorder::new(), 2);
        assert!(!obs.is_cancelled());
        obs.on_iteration(1, 0.3);
        assert!(!obs.is_cancelled());
        obs.on_iteration(2, 0.2);
        assert!(obs.is_cancelled());
        assert_eq!(obs.into_inner().steps.len(), 2);
    }

    #[test]
    fn test_observer_by_mutable_reference() {
        fn feed(mut obs: impl IterationObserver) {
            obs.on_iteration(1, 0.25);
        }

        let mut rec = TraceRecorder::new();
        feed(&mut rec);
        feed(&mut rec);
        assert_eq!(rec.steps.len(), 2);
    }
}
