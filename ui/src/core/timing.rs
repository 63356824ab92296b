//! Timed deferrals and debounce bookkeeping for the refresh cycle.

#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u64) {
    gloo_timers::future::TimeoutFuture::new(ms as u32).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}

/// Epoch counter behind the debounced resize re-render.
///
/// Every resize burst takes a fresh epoch and schedules a settle event
/// stamped with it; a settle event only re-renders if its epoch is still
/// current, so triggers that arrive before the quiet window elapses
/// supersede the pending one instead of stacking re-renders.
#[derive(Debug, Default, Clone, Copy)]
pub struct ResizeDebouncer {
    epoch: u64,
}

impl ResizeDebouncer {
    pub fn trigger(&mut self) -> u64 {
        self.epoch += 1;
        self.epoch
    }

    pub fn is_current(&self, epoch: u64) -> bool {
        self.epoch == epoch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_trigger_supersedes_first() {
        let mut debouncer = ResizeDebouncer::default();
        let first = debouncer.trigger();
        let second = debouncer.trigger();
        // Two triggers inside the quiet window: only the latest settle
        // event survives, so exactly one re-render happens.
        assert!(!debouncer.is_current(first));
        assert!(debouncer.is_current(second));
    }

    #[test]
    fn settled_epoch_remains_current_until_next_trigger() {
        let mut debouncer = ResizeDebouncer::default();
        let epoch = debouncer.trigger();
        assert!(debouncer.is_current(epoch));
        debouncer.trigger();
        assert!(!debouncer.is_current(epoch));
    }
}
