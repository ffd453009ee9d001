use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;

/// The identity of one watch within an [`Inotify`](crate::inotify::Inotify) instance.
///
/// Returned by [`Inotify::add_watch`](crate::inotify::Inotify::add_watch),
/// consumed by [`Inotify::rm_watch`](crate::inotify::Inotify::rm_watch),
/// and reported back in every [`Event`](crate::event::Event).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct WatchDescriptor(pub(crate) i32);

impl WatchDescriptor {
    pub const fn as_raw(&self) -> i32 {
        self.0
    }
}

impl Display for WatchDescriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
