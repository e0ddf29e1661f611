use jiff::Timestamp;

/// Source of record creation timestamps.
///
/// Any `Fn() -> Timestamp` closure is a clock, which is how tests pin time.
pub trait Clock: Send + Sync {
    /// Returns the instant to stamp on a record being appended.
    fn now(&self) -> Timestamp;
}

/// Wall-clock time from the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}

impl<F> Clock for F
where
    F: Fn() -> Timestamp + Send + Sync,
{
    fn now(&self) -> Timestamp {
        self()
    }
}
