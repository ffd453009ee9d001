pub use constants::NamedConstant;
pub use constants::CONSTANTS;
pub use report::probe;
pub use report::report_constants;
pub use report::run;

mod constants;
mod report;

#[cfg(test)]
mod tests {
    use crate::probe::{report_constants, CONSTANTS};

    #[test]
    fn constant_table_is_header_ordered() {
        assert_eq!(CONSTANTS.len(), 16);
        assert_eq!(CONSTANTS[0], ("IN_ACCESS", 0x1));
        assert_eq!(CONSTANTS[11], ("IN_MOVE_SELF", 0x800));
        assert_eq!(CONSTANTS[13], ("IN_Q_OVERFLOW", 0x4000));
        assert_eq!(CONSTANTS[14], ("IN_CLOEXEC", 0x80000));
        assert_eq!(CONSTANTS[15], ("IN_NONBLOCK", 0x800));
    }

    #[test]
    fn report_is_bare_hex_with_done_marker() {
        let mut out = Vec::new();
        report_constants(&mut out);
        let text = String::from_utf8(out).unwrap();
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), CONSTANTS.len() + 1);
        assert_eq!(lines[0], "IN_ACCESS 1");
        assert_eq!(lines[4], "IN_CLOSE_NOWRITE 10");
        assert_eq!(lines[14], "IN_CLOEXEC 80000");
        assert_eq!(lines[15], "IN_NONBLOCK 800");
        assert_eq!(lines[16], "Done");
    }
}
