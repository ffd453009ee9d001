use static_assertions::const_assert_eq;

use crate::libc::init::flag;
use crate::libc::watch::mask;

/// One row of the report: a symbolic name and the value the kernel headers give it.
pub type NamedConstant = (&'static str, u32);

/// The constants the probe reports, in the order they are printed.
///
/// The 14 event mask bits come first, then the two `inotify_init1` option flags.
/// The order is part of the output contract:
/// the report exists to be compared against platform headers by eye.
pub const CONSTANTS: [NamedConstant; 16] = [
    ("IN_ACCESS", mask::IN_ACCESS),
    ("IN_MODIFY", mask::IN_MODIFY),
    ("IN_ATTRIB", mask::IN_ATTRIB),
    ("IN_CLOSE_WRITE", mask::IN_CLOSE_WRITE),
    ("IN_CLOSE_NOWRITE", mask::IN_CLOSE_NOWRITE),
    ("IN_OPEN", mask::IN_OPEN),
    ("IN_MOVED_FROM", mask::IN_MOVED_FROM),
    ("IN_MOVED_TO", mask::IN_MOVED_TO),
    ("IN_CREATE", mask::IN_CREATE),
    ("IN_DELETE", mask::IN_DELETE),
    ("IN_DELETE_SELF", mask::IN_DELETE_SELF),
    ("IN_MOVE_SELF", mask::IN_MOVE_SELF),
    ("IN_UNMOUNT", mask::IN_UNMOUNT),
    ("IN_Q_OVERFLOW", mask::IN_Q_OVERFLOW),
    ("IN_CLOEXEC", flag::IN_CLOEXEC),
    ("IN_NONBLOCK", flag::IN_NONBLOCK),
];

// the whole point of the report is that these numbers can be trusted,
// so pin them against the libc crate's copies of the kernel headers
const_assert_eq!(mask::IN_ACCESS, libc::IN_ACCESS);
const_assert_eq!(mask::IN_MODIFY, libc::IN_MODIFY);
const_assert_eq!(mask::IN_ATTRIB, libc::IN_ATTRIB);
const_assert_eq!(mask::IN_CLOSE_WRITE, libc::IN_CLOSE_WRITE);
const_assert_eq!(mask::IN_CLOSE_NOWRITE, libc::IN_CLOSE_NOWRITE);
const_assert_eq!(mask::IN_OPEN, libc::IN_OPEN);
const_assert_eq!(mask::IN_MOVED_FROM, libc::IN_MOVED_FROM);
const_assert_eq!(mask::IN_MOVED_TO, libc::IN_MOVED_TO);
const_assert_eq!(mask::IN_CREATE, libc::IN_CREATE);
const_assert_eq!(mask::IN_DELETE, libc::IN_DELETE);
const_assert_eq!(mask::IN_DELETE_SELF, libc::IN_DELETE_SELF);
const_assert_eq!(mask::IN_MOVE_SELF, libc::IN_MOVE_SELF);
const_assert_eq!(mask::IN_UNMOUNT, libc::IN_UNMOUNT);
const_assert_eq!(mask::IN_Q_OVERFLOW, libc::IN_Q_OVERFLOW);
const_assert_eq!(mask::IN_IGNORED, libc::IN_IGNORED);
const_assert_eq!(mask::IN_ISDIR, libc::IN_ISDIR);
const_assert_eq!(mask::IN_ALL_EVENTS, libc::IN_ALL_EVENTS);
const_assert_eq!(flag::IN_CLOEXEC, libc::IN_CLOEXEC as u32);
const_assert_eq!(flag::IN_NONBLOCK, libc::IN_NONBLOCK as u32);
