/// A pull-style clock the scheduler reads on every tick while in `external` mode.
///
/// `get_time` returns `None` until a first reading has arrived; the scheduler treats that as "no
/// dispatch this tick" rather than an error.
pub trait TimeSource: Send + Sync {
    fn get_time(&self) -> Option<f64>;
}

/// A `TimeSource` with a fixed reading, useful for tests and as the trivial external source when
/// no timecode listener is wired up.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedTimeSource(pub Option<f64>);

impl TimeSource for FixedTimeSource {
    fn get_time(&self) -> Option<f64> {
        self.0
    }
}
