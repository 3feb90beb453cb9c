//! Daily reminder broadcast
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.0.0: Daily trigger polled on an interval, per-recipient fan-out

use chrono::{Duration as ChronoDuration, NaiveDateTime, NaiveTime};
use log::{debug, error, info, warn};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::{JoinError, JoinHandle};
use tokio::time::{interval, MissedTickBehavior};

use crate::core::clock::Clock;
use crate::features::recipients::{RecipientId, RecipientRegistry};
use crate::gateway::{MessageGateway, Reply};

pub const DAILY_REMINDER: &str =
    "🕘 **Нагадування:** не забудь виконати вправи ЛФК сьогодні! Надішли /status 🦵";

/// First occurrence of `time` strictly after `now`
fn next_occurrence(time: NaiveTime, now: NaiveDateTime) -> NaiveDateTime {
    let today = now.date().and_time(time);
    if today > now {
        today
    } else {
        today + ChronoDuration::days(1)
    }
}

/// Once-a-day trigger at a fixed local wall-clock time
///
/// Runs missed while the process was asleep collapse into a single firing.
#[derive(Debug, Clone)]
pub struct DailyTrigger {
    time: NaiveTime,
    next_run: NaiveDateTime,
}

impl DailyTrigger {
    pub fn new(time: NaiveTime, now: NaiveDateTime) -> Self {
        Self {
            time,
            next_run: next_occurrence(time, now),
        }
    }

    pub fn next_run(&self) -> NaiveDateTime {
        self.next_run
    }

    /// Returns true (and schedules tomorrow) once the trigger time has passed
    pub fn poll(&mut self, now: NaiveDateTime) -> bool {
        if now < self.next_run {
            return false;
        }
        self.next_run = next_occurrence(self.time, now);
        true
    }
}

/// Outcome of one broadcast
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BroadcastReport {
    pub attempted: usize,
    pub delivered: usize,
    pub failed: Vec<RecipientId>,
}

/// Send `reply` to every recipient; a failed send is logged and skipped
pub async fn broadcast(
    gateway: &dyn MessageGateway,
    recipients: &[RecipientId],
    reply: &Reply,
) -> BroadcastReport {
    let mut report = BroadcastReport::default();

    for &recipient in recipients {
        report.attempted += 1;
        match gateway.send(recipient, reply).await {
            Ok(()) => report.delivered += 1,
            Err(e) => {
                warn!("Failed to deliver reminder to {recipient}: {e}");
                report.failed.push(recipient);
            }
        }
    }

    report
}

/// Background task that sends the daily reminder to every recipient
pub struct ReminderScheduler {
    recipients: RecipientRegistry,
    gateway: Arc<dyn MessageGateway>,
    clock: Arc<dyn Clock>,
    trigger: DailyTrigger,
    poll_interval: Duration,
    reminder: Reply,
}

impl ReminderScheduler {
    pub fn new(
        recipients: RecipientRegistry,
        gateway: Arc<dyn MessageGateway>,
        clock: Arc<dyn Clock>,
        reminder_time: NaiveTime,
        poll_interval: Duration,
    ) -> Self {
        let trigger = DailyTrigger::new(reminder_time, clock.now());
        Self {
            recipients,
            gateway,
            clock,
            trigger,
            poll_interval,
            reminder: Reply::markdown(DAILY_REMINDER),
        }
    }

    pub fn next_run(&self) -> NaiveDateTime {
        self.trigger.next_run()
    }

    /// Check the clock once; broadcast if the daily time has been reached
    pub async fn tick(&mut self) -> Option<BroadcastReport> {
        let now = self.clock.now();
        if !self.trigger.poll(now) {
            return None;
        }

        let recipients = self.recipients.all_recipients();
        info!("⏰ Sending daily reminder to {} recipient(s)", recipients.len());

        let report = broadcast(self.gateway.as_ref(), &recipients, &self.reminder).await;
        info!(
            "⏰ Daily reminder done ({} delivered, {} failed); next run at {}",
            report.delivered,
            report.failed.len(),
            self.trigger.next_run()
        );
        Some(report)
    }

    /// Start the scheduler (runs in background)
    pub fn start(self) -> JoinHandle<()> {
        tokio::spawn(async move {
            self.run().await;
        })
    }

    /// Run the scheduler loop; never returns
    pub async fn run(mut self) {
        info!(
            "📅 Reminder scheduler started (poll: {:?}, first run at {})",
            self.poll_interval,
            self.trigger.next_run()
        );

        let mut ticker = interval(self.poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            if self.tick().await.is_none() {
                debug!("Reminder not due yet (next run at {})", self.trigger.next_run());
            }
        }
    }
}

/// Wait for a started scheduler task and log how it ended
///
/// The loop never returns on its own, so any completion is reported as an
/// error; cancellation is the only quiet exit.
pub async fn watch_scheduler(task: JoinHandle<()>) -> Result<(), JoinError> {
    let outcome = task.await;
    match &outcome {
        Ok(()) => error!("❌ Reminder scheduler exited unexpectedly"),
        Err(e) if e.is_cancelled() => info!("Reminder scheduler cancelled"),
        Err(e) => error!("❌ Reminder scheduler task failed: {e}"),
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::testing::FixedClock;
    use crate::gateway::testing::RecordingGateway;
    use chrono::NaiveDate;

    fn at(day: u32, h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 7, day)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn nine() -> NaiveTime {
        NaiveTime::from_hms_opt(9, 0, 0).unwrap()
    }

    #[test]
    fn test_trigger_before_time_fires_today() {
        let trigger = DailyTrigger::new(nine(), at(8, 8, 0));
        assert_eq!(trigger.next_run(), at(8, 9, 0));
    }

    #[test]
    fn test_trigger_at_or_after_time_fires_tomorrow() {
        assert_eq!(DailyTrigger::new(nine(), at(8, 9, 0)).next_run(), at(9, 9, 0));
        assert_eq!(DailyTrigger::new(nine(), at(8, 15, 0)).next_run(), at(9, 9, 0));
    }

    #[test]
    fn test_trigger_fires_once_per_day() {
        let mut trigger = DailyTrigger::new(nine(), at(8, 8, 0));

        assert!(!trigger.poll(at(8, 8, 59)));
        assert!(trigger.poll(at(8, 9, 0)));
        assert!(!trigger.poll(at(8, 9, 0)));
        assert!(!trigger.poll(at(8, 23, 59)));
        assert_eq!(trigger.next_run(), at(9, 9, 0));
        assert!(trigger.poll(at(9, 9, 1)));
    }

    #[test]
    fn test_trigger_collapses_missed_days() {
        let mut trigger = DailyTrigger::new(nine(), at(8, 8, 0));
        assert!(trigger.poll(at(12, 10, 0)));
        assert_eq!(trigger.next_run(), at(13, 9, 0));
        assert!(!trigger.poll(at(12, 11, 0)));
    }

    #[tokio::test]
    async fn test_broadcast_continues_past_failures() {
        let (a, b, c) = (RecipientId(1), RecipientId(2), RecipientId(3));
        let gateway = RecordingGateway::failing_for(&[b]);

        let report = broadcast(&gateway, &[a, b, c], &Reply::markdown(DAILY_REMINDER)).await;

        assert_eq!(gateway.attempts(), vec![a, b, c]);
        assert_eq!(report.attempted, 3);
        assert_eq!(report.delivered, 2);
        assert_eq!(report.failed, vec![b]);
        let delivered: Vec<RecipientId> = gateway.sent().into_iter().map(|(to, _)| to).collect();
        assert_eq!(delivered, vec![a, c]);
    }

    #[tokio::test]
    async fn test_broadcast_to_nobody() {
        let gateway = RecordingGateway::new();
        let report = broadcast(&gateway, &[], &Reply::plain("x")).await;
        assert_eq!(report, BroadcastReport::default());
    }

    #[tokio::test]
    async fn test_scheduler_tick_sends_reminder_to_registry() {
        let clock = FixedClock::new(at(8, 8, 30));
        let registry = RecipientRegistry::new();
        registry.register(RecipientId(10));
        registry.register(RecipientId(20));
        let gateway = Arc::new(RecordingGateway::new());

        let mut scheduler = ReminderScheduler::new(
            registry.clone(),
            gateway.clone(),
            Arc::new(clock.clone()),
            nine(),
            Duration::from_secs(30),
        );

        assert!(scheduler.tick().await.is_none());
        assert!(gateway.sent().is_empty());

        clock.set(at(8, 9, 0));
        let report = scheduler.tick().await.unwrap();
        assert_eq!(report.delivered, 2);

        let sent = gateway.sent();
        assert_eq!(sent.len(), 2);
        assert!(sent.iter().all(|(_, reply)| reply.text == DAILY_REMINDER));

        // Late registrations join the next day's broadcast
        registry.register(RecipientId(30));
        clock.set(at(8, 18, 0));
        assert!(scheduler.tick().await.is_none());

        clock.set(at(9, 9, 0));
        let report = scheduler.tick().await.unwrap();
        assert_eq!(report.delivered, 3);
        assert_eq!(scheduler.next_run(), at(10, 9, 0));
    }

    #[tokio::test]
    async fn test_scheduler_tick_with_failing_recipient() {
        let clock = FixedClock::new(at(8, 8, 0));
        let registry = RecipientRegistry::new();
        for id in [1, 2, 3] {
            registry.register(RecipientId(id));
        }
        let gateway = Arc::new(RecordingGateway::failing_for(&[RecipientId(2)]));
        let mut scheduler = ReminderScheduler::new(
            registry,
            gateway.clone(),
            Arc::new(clock.clone()),
            nine(),
            Duration::from_secs(30),
        );

        clock.set(at(8, 9, 0));
        let report = scheduler.tick().await.unwrap();
        assert_eq!(report.failed, vec![RecipientId(2)]);
        assert_eq!(gateway.attempts().len(), 3);
    }

    #[tokio::test]
    async fn test_started_scheduler_keeps_running() {
        let clock = FixedClock::new(at(8, 8, 0));
        let scheduler = ReminderScheduler::new(
            RecipientRegistry::new(),
            Arc::new(RecordingGateway::new()),
            Arc::new(clock),
            nine(),
            Duration::from_millis(5),
        );

        let task = scheduler.start();
        tokio::time::sleep(Duration::from_millis(30)).await;
        assert!(!task.is_finished());

        task.abort();
        let err = watch_scheduler(task).await.unwrap_err();
        assert!(err.is_cancelled());
    }

    #[tokio::test]
    async fn test_watch_scheduler_surfaces_panic() {
        let task = tokio::spawn(async { panic!("reminder loop crashed") });
        let err = watch_scheduler(task).await.unwrap_err();
        assert!(err.is_panic());
    }
}
