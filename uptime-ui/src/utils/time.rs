use std::time::Duration;

use futures::StreamExt;

fn duration_to_millis(duration: Duration) -> u32 {
    duration.as_millis().try_into().unwrap_or(u32::MAX).max(1)
}

/// Browser interval timer. The first tick completes one period after creation.
#[derive(Debug)]
pub struct Interval {
    inner: gloo_timers::future::IntervalStream,
}

impl Interval {
    fn new(period: Duration) -> Self {
        Self {
            inner: gloo_timers::future::IntervalStream::new(duration_to_millis(period)),
        }
    }

    pub async fn tick(&mut self) {
        // the stream never ends
        let _ = self.inner.next().await;
    }
}

pub fn interval(period: Duration) -> Interval {
    Interval::new(period)
}
