use std::ffi::CString;
use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

use super::error::StaticError;
use super::Mask;

/// A validated request to watch one path for the events in a [`Mask`].
#[derive(Debug, Eq, PartialEq, Hash)]
pub struct Watch<'a> {
    // fields are not pub b/c they maintain invariants
    pub(crate) path: &'a Path,
    pub(crate) c_path: CString,
    pub(crate) mask: Mask,
}

impl<'a> Watch<'a> {
    /// Validate a (path, mask) pair into a [`Watch`].
    ///
    /// This can only fail before the syscall:
    /// on an empty [`Mask`] (which the kernel would reject with `EINVAL`)
    /// or on a path with an interior nul byte (which can't cross the C boundary).
    pub fn new(path: &'a Path, mask: Mask) -> Result<Self, StaticError> {
        if mask.is_empty() {
            return Err(StaticError::EmptyMask);
        }
        let c_path = CString::new(path.as_os_str().as_bytes())
            .map_err(|_| StaticError::PathContainsNul)?;
        let this = Self {
            path,
            c_path,
            mask,
        };
        Ok(this)
    }

    pub fn path(&self) -> &'a Path {
        self.path
    }

    pub fn mask(&self) -> Mask {
        self.mask
    }
}

impl Display for Watch<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Watch {{ path: {}, mask: {:?} }}",
            self.path.display(),
            self.mask,
        )
    }
}
