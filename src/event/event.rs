use std::ffi::OsStr;

use crate::watch::Mask;
use crate::watch::WatchDescriptor;

/// One decoded `inotify_event` record.
///
/// The `name` is only present for events on the children of a watched
/// directory. It borrows from the read buffer,
/// with the kernel's trailing nul padding already trimmed.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Event<'a> {
    pub wd: WatchDescriptor,
    pub mask: Mask,
    pub cookie: u32,
    pub name: Option<&'a OsStr>,
}

impl Event<'_> {
    /// Queue overflow pseudo-events carry no valid watch descriptor.
    pub fn is_queue_overflow(&self) -> bool {
        self.mask.contains(Mask::QUEUE_OVERFLOW)
    }

    /// The two halves of a rename are paired by a shared, nonzero cookie.
    pub fn rename_cookie(&self) -> Option<u32> {
        if self.mask.intersects(Mask::moved()) && self.cookie != 0 {
            Some(self.cookie)
        } else {
            None
        }
    }
}
