use crossterm::event::{Event, EventStream, KeyEvent, KeyEventKind, MouseEvent};
use futures::{Stream, StreamExt};
use tokio::time::{interval, Duration, Interval, MissedTickBehavior};

/// Interval between application ticks; drives the panel close animation.
pub const TICK_RATE: Duration = Duration::from_millis(100);

/// Merges terminal input with a fixed-rate tick.
///
/// Ticks keep their schedule however much input arrives, so anything driven
/// by `Tick` (the close animation) cannot be starved by mouse motion or key
/// repeat.
pub struct EventHandler<S = EventStream> {
    events: S,
    tick_interval: Interval,
}

impl EventHandler<EventStream> {
    pub fn new() -> Self {
        Self::with_tick_rate(TICK_RATE)
    }

    pub fn with_tick_rate(tick_rate: Duration) -> Self {
        Self::with_source(EventStream::new(), tick_rate)
    }
}

impl<S> EventHandler<S>
where
    S: Stream<Item = std::io::Result<Event>> + Unpin,
{
    /// Build a handler over any terminal event source.
    pub fn with_source(events: S, tick_rate: Duration) -> Self {
        let mut tick_interval = interval(tick_rate);
        tick_interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Self { events, tick_interval }
    }

    pub async fn next_event(&mut self) -> anyhow::Result<EventType> {
        tokio::select! {
            _ = self.tick_interval.tick() => Ok(EventType::Tick),
            event = self.events.next() => match event {
                Some(Ok(event)) => Ok(EventType::from(event)),
                Some(Err(e)) => Err(e.into()),
                None => Err(anyhow::anyhow!("Terminal event stream closed")),
            },
        }
    }
}

#[derive(Debug, Clone)]
pub enum EventType {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    Tick,
    Other,
}

impl From<Event> for EventType {
    fn from(event: Event) -> Self {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => EventType::Key(key),
            Event::Mouse(mouse) => EventType::Mouse(mouse),
            Event::Resize(w, h) => EventType::Resize(w, h),
            _ => EventType::Other,
        }
    }
}

impl Default for EventHandler<EventStream> {
    fn default() -> Self {
        Self::new()
    }
}
