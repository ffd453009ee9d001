//! Contains the main syscalls and the main [`Inotify`] struct.

use std::os::unix::io::{AsRawFd, FromRawFd, IntoRawFd, RawFd};

use nix::errno::Errno;

use super::event::buffer::EventBuffer;
use super::event::events::Events;
use super::fd::FD;
use super::init;
use super::init::Init;
use super::libc::call::{libc_call, libc_void_call, ImpossibleSysCallError};
use super::watch;
use super::watch::{Watch, WatchDescriptor};

/// The main [`Inotify`] struct, the primary entry point to the inotify API.
#[derive(Debug)]
pub struct Inotify {
    /// The inotify descriptor/instance.
    pub(crate) fd: FD,
}

impl AsRawFd for Inotify {
    fn as_raw_fd(&self) -> RawFd {
        self.fd.as_raw_fd()
    }
}

impl IntoRawFd for Inotify {
    fn into_raw_fd(self) -> RawFd {
        self.fd.into_raw_fd()
    }
}

impl FromRawFd for Inotify {
    unsafe fn from_raw_fd(fd: RawFd) -> Self {
        Self {
            fd: FD::from_raw_fd(fd),
        }
    }
}

impl Init {
    /// Create an [`Inotify`] instance using the flags in this [`Init`].
    pub fn run(&self) -> Result<Inotify, init::Error> {
        use init::Error::*;
        use Errno::*;

        // Try to initialize the instance with the flags, then catch and return status
        libc_call(|| unsafe { libc::inotify_init1(self.flags() as libc::c_int) })
            .map_err(|errno| match errno {
                EINVAL => InvalidArgument,
                EMFILE => ExceededInstanceLimit,
                ENFILE => ExceededOpenFileDescriptorLimit,
                ENOMEM => OutOfMemory,
                // an ENOSYS kernel predates inotify_init1 entirely
                ENOSYS => InotifyUnsupported,
                _ => panic!("{}", ImpossibleSysCallError {
                    syscall: "inotify_init1",
                    args: format!("flags = {}; init = {}", self.flags(), self),
                    errno,
                }),
            })
            .map(|fd| unsafe { FD::from_raw_fd(fd) })
            .and_then(|fd| if fd.check() { Ok(fd) } else { Err(InvalidFd { fd }) })
            .map(|fd| Inotify { fd })
    }
}

impl Inotify {
    /// The main method that adds a [`Watch`], only it returns just a [`watch::RawError`].
    /// The below [`add_watch`](Inotify::add_watch) function wraps this into a full [`watch::Error`].
    fn add_watch_raw_error(&self, watch: &Watch) -> Result<WatchDescriptor, watch::RawError> {
        use watch::RawError::*;
        use Errno::*;
        libc_call(|| unsafe {
            libc::inotify_add_watch(self.fd.as_raw_fd(), watch.c_path.as_ptr(), watch.mask.bits())
        }).map_err(|errno| match errno {
            EACCES => PermissionDenied,
            EINVAL => InvalidArgument,
            ENAMETOOLONG => PathTooLong,
            ENOENT => PathDoesNotExist,
            ENOMEM => OutOfMemory,
            ENOSPC => ExceededWatchLimit,
            // EBADF and EFAULT would mean this fd or the path CString are broken
            _ => panic!("{}", ImpossibleSysCallError {
                syscall: "inotify_add_watch",
                args: format!(
                    "fd = {}, path = {:?}, mask = {}; watch = {}",
                    self.fd, watch.c_path, watch.mask.bits(),
                    watch,
                ),
                errno,
            }),
        }).map(WatchDescriptor)
    }

    /// Add a [`Watch`] to this [`Inotify`] instance.
    ///
    /// See [`Watch`] for more details.
    pub fn add_watch<'a>(&self, watch: Watch<'a>) -> Result<WatchDescriptor, watch::Error<'a>> {
        self.add_watch_raw_error(&watch)
            .map_err(|error| watch::Error { error, watch })
    }

    /// Remove a watch from this [`Inotify`] instance.
    ///
    /// The kernel queues an [`IGNORED`](crate::watch::Mask::IGNORED) event for the removed watch.
    pub fn rm_watch(&self, wd: WatchDescriptor) -> Result<(), watch::RemoveError> {
        use watch::RemoveError::*;
        use Errno::*;
        libc_void_call(|| unsafe { libc::inotify_rm_watch(self.fd.as_raw_fd(), wd.as_raw()) })
            .map_err(|errno| match errno {
                EINVAL => InvalidWatchDescriptor { wd },
                // EBADF would mean this fd is broken
                _ => panic!("{}", ImpossibleSysCallError {
                    syscall: "inotify_rm_watch",
                    args: format!("fd = {}, wd = {}", self.fd, wd),
                    errno,
                }),
            })
    }
}

impl Inotify {
    /// Read queued events from this [`Inotify`] instance into the given buffer.
    ///
    /// Return an [`Events`] iterator over the individual events.
    ///
    /// This method blocks unless [`NON_BLOCKING`](init::Flags::NON_BLOCKING)
    /// was set, in which case an empty queue yields [`Errno::EAGAIN`].
    pub fn read<'a>(&'a self, buffer: &'a mut EventBuffer) -> Result<Events<'a>, Errno> {
        Events::read(self, buffer)
    }

    /// Release the instance now instead of on drop, reporting any error.
    ///
    /// The descriptor is consumed either way, so it is released exactly once.
    pub fn close(self) -> Result<(), Errno> {
        self.fd.close()
    }
}
