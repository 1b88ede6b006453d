//! Shared process state: one scheduler, one dispatcher, one timecode source, for the process
//! lifetime.

use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use dispatcher::Dispatcher;
use parking_lot::Mutex;
use scheduler::Scheduler;
use tracing::debug;

use crate::timecode::UdpTimeSource;

/// Bookkeeping for the currently-loaded titling session, surfaced through the HTTP API.
#[derive(Debug, Clone)]
pub struct TitlingSession {
    pub vtt_path: String,
    pub cue_count: usize,
    pub segment_count: usize,
    pub time_mode: String,
}

pub struct AppState {
    pub scheduler: Arc<Mutex<Scheduler>>,
    pub dispatcher: Arc<Dispatcher>,
    pub time_source: UdpTimeSource,
    pub session: Arc<Mutex<Option<TitlingSession>>>,
}

/// Milliseconds since the Unix epoch, used as the scheduler's wall clock.
pub fn now_ms() -> u64 {
    SystemTime::now().duration_since(UNIX_EPOCH).expect("system clock before Unix epoch").as_millis() as u64
}

const TICK_PERIOD: Duration = Duration::from_millis(100);

/// Spawns the 100ms tick task that drives the scheduler for the process lifetime.
pub fn spawn_tick_task(state: Arc<AppState>) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(TICK_PERIOD);
        loop {
            interval.tick().await;
            let mut scheduler = state.scheduler.lock();
            scheduler.tick(state.dispatcher.as_ref(), now_ms(), &state.time_source);
            drop(scheduler);
            debug!("scheduler tick");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use scheduler::Mode;
    use segmenter::Segment;

    #[tokio::test(start_paused = true)]
    async fn tick_task_shows_the_active_segment_on_the_documented_cadence() {
        let scheduler = Arc::new(Mutex::new(Scheduler::new(Mode::Autonomous)));
        let origin = now_ms();
        scheduler.lock().load(
            vec![Segment { start_s: 0.0, end_s: 2.0, lines: vec!["Hi".to_string()] }],
            None,
            Some(0.0),
            Some(origin),
        );

        let dispatcher = Arc::new(dispatcher::Dispatcher::spawn("127.0.0.1:1".to_string(), 0, teletext::PageConfig::default()));
        let time_source = crate::timecode::spawn("127.0.0.1:0", "/time".to_string(), false).await.unwrap();

        let state = Arc::new(AppState { scheduler: scheduler.clone(), dispatcher, time_source, session: Arc::new(Mutex::new(None)) });
        spawn_tick_task(state);

        tokio::time::advance(Duration::from_millis(150)).await;
        tokio::task::yield_now().await;

        assert_eq!(scheduler.lock().last_shown_index(), Some(0));
    }
}
