use std::io::Write;
use std::os::unix::io::AsRawFd;

use crate::init::Flags;
use crate::init::Init;

use super::constants::CONSTANTS;

/// Write one `<NAME> <hex>` line per reported constant, then the `Done` marker.
///
/// Write failures are ignored here and throughout the probe:
/// the output is best-effort diagnostic text.
pub fn report_constants(out: &mut impl Write) {
    for (name, value) in CONSTANTS.iter() {
        let _ = writeln!(out, "{} {:x}", name, value);
    }
    let _ = writeln!(out, "Done");
}

/// Acquire one non-blocking instance, report the outcome, and release it.
///
/// Returns the process exit code:
/// 0 if the instance was acquired and released, 1 if acquisition failed.
pub fn probe(out: &mut impl Write, err: &mut impl Write) -> i32 {
    let init = Init {
        flags: Flags::NON_BLOCKING,
    };
    match init.run() {
        Ok(inotify) => {
            let _ = writeln!(out, "inotify_init1 returned  {}", inotify.as_raw_fd());
            // the release confirmation is printed unconditionally:
            // close() consumes the instance, so it is released either way
            let _ = inotify.close();
            let _ = writeln!(out, "FD closed.");
            0
        }
        Err(error) => {
            let errno = error.errno();
            let _ = writeln!(err, "inotify_init1 returned -1");
            let _ = writeln!(err, "error: {} ({})", errno as i32, errno.desc());
            1
        }
    }
}

/// The whole diagnostic: report the constant table, then probe the kernel.
///
/// The report is unconditional and always precedes the probe.
pub fn run(out: &mut impl Write, err: &mut impl Write) -> i32 {
    report_constants(out);
    probe(out, err)
}
