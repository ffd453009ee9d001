use std::ops::Neg;

use nix::errno::Errno;
use thiserror::Error;

/// Gives every signed integer type its 0 and 1.
///
/// This allows the checked libc calls below to be written once,
/// generically over the return type, e.g. i32 for fds and isize for read(2).
pub trait ZeroOne {
    const ZERO: Self;
    const ONE: Self;
}

macro_rules! impl_zero_one {
    ($($t:ident)*) => ($(impl ZeroOne for $t {
        const ZERO: Self = 0 as $t;
        const ONE: Self = 1 as $t;
    })*)
}

impl_zero_one! { i8 i16 i32 i64 isize }

/// Make a libc call, detecting the -1 sentinel,
/// and return an [`Err`] with the [`Errno`] in that case.
///
/// The errno is captured immediately after the call
/// so no later operation can overwrite it.
pub fn libc_call<T: ZeroOne + Copy + Eq + Neg<Output = T>, F: FnOnce() -> T>(f: F) -> Result<T, Errno> {
    Errno::clear();
    let result = f();
    if result == T::ONE.neg() {
        let errno = Errno::last();
        Errno::clear();
        Err(errno)
    } else {
        Ok(result)
    }
}

/// Make a libc call like [`libc_call`], except throw away the 0 return value.
pub fn libc_void_call<T: ZeroOne + Copy + Eq + Neg<Output = T>, F: FnOnce() -> T>(f: F) -> Result<(), Errno> {
    if libc_call(f)? == T::ZERO {
        Ok(())
    } else {
        unreachable!()
    }
}

/// An errno the syscall is documented as never returning for the given
/// arguments. Reaching one means a bug in this crate or the kernel,
/// so callers panic with this as the message.
#[derive(Error, Debug)]
#[error("impossible error in syscall {}({}): {:?}", .syscall, .args, .errno)]
pub struct ImpossibleSysCallError {
    pub syscall: &'static str,
    pub args: String,
    pub errno: Errno,
}
