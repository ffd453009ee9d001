use bitflags::bitflags;

use crate::libc::watch::mask;

bitflags! {
    pub struct Mask: u32 {
        /// ACCESS refers to the [IN_ACCESS](mask::IN_ACCESS) flag
        const ACCESS = mask::IN_ACCESS;
        /// MODIFY refers to the [IN_MODIFY](mask::IN_MODIFY) flag
        const MODIFY = mask::IN_MODIFY;
        /// ATTRIBUTE_CHANGED refers to the [IN_ATTRIB](mask::IN_ATTRIB) flag
        const ATTRIBUTE_CHANGED = mask::IN_ATTRIB;
        /// CLOSE_WRITE refers to the [IN_CLOSE_WRITE](mask::IN_CLOSE_WRITE) flag
        const CLOSE_WRITE = mask::IN_CLOSE_WRITE;
        /// CLOSE_NO_WRITE refers to the [IN_CLOSE_NOWRITE](mask::IN_CLOSE_NOWRITE) flag
        const CLOSE_NO_WRITE = mask::IN_CLOSE_NOWRITE;
        /// OPEN refers to the [IN_OPEN](mask::IN_OPEN) flag
        const OPEN = mask::IN_OPEN;
        /// MOVED_FROM refers to the [IN_MOVED_FROM](mask::IN_MOVED_FROM) flag
        const MOVED_FROM = mask::IN_MOVED_FROM;
        /// MOVED_TO refers to the [IN_MOVED_TO](mask::IN_MOVED_TO) flag
        const MOVED_TO = mask::IN_MOVED_TO;
        /// CREATE refers to the [IN_CREATE](mask::IN_CREATE) flag
        const CREATE = mask::IN_CREATE;
        /// DELETE refers to the [IN_DELETE](mask::IN_DELETE) flag
        const DELETE = mask::IN_DELETE;
        /// DELETE_SELF refers to the [IN_DELETE_SELF](mask::IN_DELETE_SELF) flag
        const DELETE_SELF = mask::IN_DELETE_SELF;
        /// MOVE_SELF refers to the [IN_MOVE_SELF](mask::IN_MOVE_SELF) flag
        const MOVE_SELF = mask::IN_MOVE_SELF;

        // bits below are only ever set by the kernel in a read event

        /// UNMOUNT refers to the [IN_UNMOUNT](mask::IN_UNMOUNT) flag
        const UNMOUNT = mask::IN_UNMOUNT;
        /// QUEUE_OVERFLOW refers to the [IN_Q_OVERFLOW](mask::IN_Q_OVERFLOW) flag
        const QUEUE_OVERFLOW = mask::IN_Q_OVERFLOW;
        /// IGNORED refers to the [IN_IGNORED](mask::IN_IGNORED) flag
        const IGNORED = mask::IN_IGNORED;
        /// IS_DIR refers to the [IN_ISDIR](mask::IN_ISDIR) flag
        const IS_DIR = mask::IN_ISDIR;
    }
}

#[allow(clippy::identity_op)]
impl Mask {
    // combined flags

    pub const fn close() -> Self {
        Self::from_bits_truncate(0
            | Self::CLOSE_WRITE.bits
            | Self::CLOSE_NO_WRITE.bits
        )
    }

    pub const fn moved() -> Self {
        Self::from_bits_truncate(0
            | Self::MOVED_FROM.bits
            | Self::MOVED_TO.bits
        )
    }

    /// Every bit that is valid in a watch mask.
    pub const fn all_events() -> Self {
        Self::from_bits_truncate(mask::IN_ALL_EVENTS)
    }

    /// Bits the kernel sets in events but rejects in a watch mask.
    pub const fn read_only() -> Self {
        Self::from_bits_truncate(0
            | Self::UNMOUNT.bits
            | Self::QUEUE_OVERFLOW.bits
            | Self::IGNORED.bits
            | Self::IS_DIR.bits
        )
    }
}
