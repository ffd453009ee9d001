use nix::errno::Errno;

use crate::fd::FD;

#[derive(thiserror::Error, Debug, Eq, PartialEq, Hash)]
pub enum Error {
    #[error("invalid flags specified")]
    InvalidArgument,
    #[error("exceeded the per-user limit on inotify instances")]
    ExceededInstanceLimit,
    #[error("exceeded the system-wide limit on open file descriptors")]
    ExceededOpenFileDescriptorLimit,
    #[error("kernel out of memory")]
    OutOfMemory,
    #[error("the kernel does not support the inotify_init1() syscall")]
    InotifyUnsupported,
    #[error("received an invalid fd: {}", .fd)]
    InvalidFd { fd: FD },
}

impl Error {
    /// The errno behind this error, for callers that report raw OS codes.
    pub fn errno(&self) -> Errno {
        use Errno::*;
        match self {
            Self::InvalidArgument => EINVAL,
            Self::ExceededInstanceLimit => EMFILE,
            Self::ExceededOpenFileDescriptorLimit => ENFILE,
            Self::OutOfMemory => ENOMEM,
            Self::InotifyUnsupported => ENOSYS,
            Self::InvalidFd { .. } => EBADF,
        }
    }
}
