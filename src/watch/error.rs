use thiserror::Error;

use super::Watch;
use super::WatchDescriptor;

#[derive(Error, Debug, Eq, PartialEq, Hash)]
pub enum StaticError {
    #[error("mask must not be empty")]
    EmptyMask,
    #[error("path contains an interior nul byte")]
    PathContainsNul,
}

#[derive(thiserror::Error, Debug, Eq, PartialEq, Hash)]
pub enum RawError {
    #[error("read access to the given path is not permitted")]
    PermissionDenied,
    #[error("invalid argument specified")]
    InvalidArgument,
    #[error("path is too long")]
    PathTooLong,
    #[error("a directory component of the path does not exist or is a dangling symlink")]
    PathDoesNotExist,
    #[error("kernel out of memory")]
    OutOfMemory,
    #[error("exceeded the per-user limit on watches")]
    ExceededWatchLimit,
}

#[derive(thiserror::Error, Debug, Eq, PartialEq, Hash)]
#[error("{:?}: {:?}", .error, .watch)]
pub struct Error<'a> {
    pub error: RawError,
    pub watch: Watch<'a>,
}

#[derive(thiserror::Error, Debug, Eq, PartialEq, Hash)]
pub enum RemoveError {
    #[error("cannot remove watch that does not exist: {}", .wd)]
    InvalidWatchDescriptor { wd: WatchDescriptor },
}
