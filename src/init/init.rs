use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;

use super::Flags;

/// The full argument set of an `inotify_init1` call.
///
/// `inotify_init1` takes a single flags word;
/// [`Init::flags`] is the exact value passed to the syscall.
#[derive(Debug, Eq, PartialEq, Hash)]
pub struct Init {
    pub flags: Flags,
}

impl Init {
    pub const fn const_default() -> Self {
        Self {
            flags: Flags::const_default(),
        }
    }

    /// The flags word passed to `inotify_init1`.
    pub const fn flags(&self) -> u32 {
        self.flags.bits()
    }
}

impl Default for Init {
    fn default() -> Self {
        Self::const_default()
    }
}

impl Display for Init {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        // delegate Debug impl to Init
        write!(f, "{:?}", self)
    }
}
