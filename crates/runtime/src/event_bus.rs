/// Minimal event type for traceability.
///
/// Structured text keyed by the tick it happened on; the hosting application
/// decides whether to print, display, or drop these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub tick: u64,
    pub kind: &'static str,
    pub message: String,
}

/// Retained event cap. Once full, the oldest event is evicted per emit, so a
/// long-lived session that never drains keeps the most recent second or so of
/// history instead of growing without bound.
pub const MAX_EVENTS: usize = 256;

#[derive(Debug, Default)]
pub struct EventBus {
    events: Vec<Event>,
}

impl EventBus {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn emit(&mut self, tick: u64, kind: &'static str, message: impl Into<String>) {
        if self.events.len() == MAX_EVENTS {
            self.events.remove(0);
        }
        self.events.push(Event {
            tick,
            kind,
            message: message.into(),
        });
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn drain(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }
}
