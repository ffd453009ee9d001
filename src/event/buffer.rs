/// A reusable buffer for [`Inotify`] [`Events`].
///
/// It contains the raw byte buffer that `read(2)` fills with
/// variable-length `inotify_event` records.
///
/// By storing it in a separate struct,
/// the buffer memory can be reused across [`Inotify::read`] calls.
///
/// [`Inotify`]: crate::inotify::Inotify
/// [`Events`]: super::events::Events
/// [`Inotify::read`]: crate::inotify::Inotify::read
pub struct EventBuffer {
    pub events: Vec<u8>,
}

impl EventBuffer {
    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn shrink_to_fit(&mut self) {
        self.events.shrink_to_fit();
    }

    pub fn reserve(&mut self, additional: EventBufferSize) {
        self.events.reserve(additional.events);
    }

    pub fn set_capacity(&mut self, capacities: EventBufferSize) {
        self.clear();
        self.reserve(capacities);
    }
}

pub struct EventBufferSize {
    pub events: usize,
}

impl Default for EventBufferSize {
    fn default() -> Self {
        Self {
            events: 4096,
        }
    }
}

impl EventBufferSize {
    /// Create an [`EventBuffer`] with this initial capacity.
    pub fn new_buffer(&self) -> EventBuffer {
        EventBuffer {
            events: Vec::with_capacity(self.events),
        }
    }
}

impl From<EventBufferSize> for EventBuffer {
    fn from(size: EventBufferSize) -> Self {
        size.new_buffer()
    }
}

impl Default for EventBuffer {
    fn default() -> Self {
        EventBufferSize::default().new_buffer()
    }
}
