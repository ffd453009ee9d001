use bitflags::bitflags;

use crate::libc::init::flag;

bitflags! {
    pub struct Flags: u32 {
        const CLOSE_ON_EXEC = flag::IN_CLOEXEC;
        const NON_BLOCKING = flag::IN_NONBLOCK;
    }
}

impl Flags {
    pub const fn const_default() -> Self {
        Self::empty()
    }
}

impl Default for Flags {
    fn default() -> Self {
        Self::const_default()
    }
}
