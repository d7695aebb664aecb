use uptime_core::{
    compute_elapsed,
    Clock,
    Config,
    SystemClock,
    UptimeText,
};
use web_sys::Document;

use crate::{
    error::Error,
    targets::Targets,
    utils::{
        futures::{
            spawn_local_and_handle_error,
            JoinError,
            JoinHandle,
        },
        time::interval,
    },
};

/// Writes the time elapsed since the configured start into the target
/// elements, once immediately and then once per period.
#[derive(Debug)]
pub struct UptimeCounter<C = SystemClock> {
    config: Config,
    targets: Targets,
    clock: C,
}

impl UptimeCounter {
    pub fn new(config: Config, document: &Document) -> Result<Self, Error> {
        let targets = Targets::resolve(document, &config.selector, config.targets)?;
        Ok(Self::with_targets(config, targets, SystemClock))
    }
}

impl<C: Clock> UptimeCounter<C> {
    pub fn with_targets(config: Config, targets: Targets, clock: C) -> Self {
        Self {
            config,
            targets,
            clock,
        }
    }

    /// The text to show right now.
    pub fn text(&self) -> UptimeText {
        let breakdown = compute_elapsed(self.config.reference, self.clock.now());
        UptimeText::new(self.config.locale, &breakdown)
    }

    pub fn update(&self) -> Result<(), Error> {
        self.targets.render(&self.text())
    }
}

impl<C: Clock + 'static> UptimeCounter<C> {
    /// Renders once and starts the update loop.
    ///
    /// Returns `None` without starting anything if there are no elements to
    /// update.
    pub fn start(self) -> Result<Option<UptimeHandle>, Error> {
        if self.targets.is_inert() {
            tracing::debug!(
                selector = %self.config.selector,
                "no uptime elements on this page"
            );
            return Ok(None);
        }

        self.update()?;

        tracing::info!(
            reference = %self.config.reference,
            period = ?self.config.period,
            "uptime counter started"
        );
        let join_handle = spawn_local_and_handle_error(self.run());

        Ok(Some(UptimeHandle { join_handle }))
    }

    async fn run(self) -> Result<(), Error> {
        let mut interval = interval(self.config.period);

        loop {
            interval.tick().await;
            self.update()?;
        }
    }
}

/// Handle to a running [`UptimeCounter`].
///
/// Dropping it leaves the counter running for the lifetime of the page.
#[derive(Debug)]
pub struct UptimeHandle {
    join_handle: JoinHandle,
}

impl UptimeHandle {
    /// Stops the update loop. The elements keep their last text.
    pub fn stop(&self) {
        tracing::debug!("stopping uptime counter");
        self.join_handle.abort();
    }

    /// Whether [`stop`](Self::stop) has been called.
    pub fn is_stopped(&self) -> bool {
        self.join_handle.is_aborted()
    }

    /// Waits until the update loop ends, which only happens if it is stopped
    /// or fails.
    pub async fn join(self) -> Result<(), JoinError> {
        self.join_handle.await
    }
}

#[cfg(test)]
mod tests {
    use chrono::{
        TimeDelta,
        TimeZone,
        Utc,
    };
    use futures::{
        executor::LocalPool,
        task::LocalSpawnExt,
    };
    use uptime_core::{
        FixedClock,
        Locale,
        ReferenceInstant,
    };

    use super::*;
    use crate::utils::futures::task;

    fn counter(elapsed: TimeDelta, locale: Locale) -> UptimeCounter<FixedClock> {
        let start = Utc.with_ymd_and_hms(2025, 12, 29, 20, 0, 0).unwrap();
        let config = Config::new(ReferenceInstant::from_datetime(start)).with_locale(locale);
        UptimeCounter::with_targets(
            config,
            Targets::Snapshot(vec![]),
            FixedClock(start + elapsed),
        )
    }

    #[test]
    fn it_computes_the_text_from_the_clock() {
        let text = counter(TimeDelta::hours(63), Locale::Spanish).text();
        assert_eq!(text.short, "2d 15h");
        assert_eq!(text.detailed, "2 días, 15 horas, 0 minutos");

        let text = counter(TimeDelta::minutes(90), Locale::English).text();
        assert_eq!(text.short, "1h 30m");
        assert_eq!(text.detailed, "1 hour, 30 minutes");
    }

    #[test]
    fn it_shows_zero_for_a_future_start() {
        let text = counter(-TimeDelta::hours(1), Locale::Spanish).text();
        assert_eq!(text.short, "0h 00m");
        assert_eq!(text.detailed, "0 minutos");
    }

    #[test]
    fn it_does_not_start_without_elements() {
        let handle = counter(TimeDelta::minutes(5), Locale::Spanish)
            .start()
            .unwrap();
        assert!(handle.is_none());
    }

    #[test]
    fn it_stops_the_update_loop() {
        let mut pool = LocalPool::new();
        let (task, join_handle) = task(std::future::pending::<()>());
        pool.spawner().spawn_local(task).unwrap();
        pool.run_until_stalled();

        let handle = UptimeHandle { join_handle };
        assert!(!handle.is_stopped());

        handle.stop();
        assert!(handle.is_stopped());
        assert!(matches!(
            pool.run_until(handle.join()),
            Err(JoinError::Cancelled)
        ));
    }

    #[test]
    fn it_joins_a_finished_loop() {
        let mut pool = LocalPool::new();
        let (task, join_handle) = task(async {});
        pool.spawner().spawn_local(task).unwrap();

        let handle = UptimeHandle { join_handle };
        assert!(!handle.is_stopped());
        assert!(matches!(pool.run_until(handle.join()), Ok(())));
    }
}
