pub use error::Error;
pub use flags::Flags;
pub use init::Init;

mod flags;
#[allow(clippy::module_inception)]
mod init;
mod error;

#[cfg(test)]
mod tests {
    use crate::init::{Flags, Init};

    #[test]
    fn init_display_debug() {
        let args = Init {
            flags: Flags::CLOSE_ON_EXEC | Flags::NON_BLOCKING,
        };
        assert_eq!(
            format!("{}", args),
            "Init { flags: CLOSE_ON_EXEC | NON_BLOCKING }",
        );
    }

    #[test]
    fn init_flags_word() {
        assert_eq!(Init::const_default().flags(), 0);
        let args = Init {
            flags: Flags::NON_BLOCKING,
        };
        assert_eq!(args.flags(), 0x800);
    }
}
