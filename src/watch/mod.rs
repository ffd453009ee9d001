pub use error::Error;
pub use error::RawError;
pub use error::RemoveError;
pub use error::StaticError;
pub use mask::Mask;
pub use watch::Watch;
pub use watchable::Watchable;
pub use wd::WatchDescriptor;

mod error;
mod mask;
#[allow(clippy::module_inception)]
mod watch;
mod watchable;
mod wd;

#[cfg(test)]
mod tests {
    use std::path::Path;

    use crate::watch::{Mask, StaticError, Watch};

    #[test]
    fn watch_static_error() {
        assert_eq!(
            Watch::new(Path::new("/tmp"), Mask::empty()),
            Err(StaticError::EmptyMask),
        );
    }

    #[test]
    fn watch_display_debug() {
        let watch = Watch::new(
            Path::new("/home"),
            Mask::CREATE | Mask::DELETE | Mask::moved(),
        ).unwrap();
        assert_eq!(
            format!("{}", watch),
            "Watch { path: /home, mask: MOVED_FROM | MOVED_TO | CREATE | DELETE }",
        );
    }

    #[test]
    fn mask_combinators() {
        assert_eq!(Mask::close().bits(), 0x18);
        assert_eq!(Mask::moved().bits(), 0xc0);
        assert!(Mask::all_events().contains(Mask::close() | Mask::moved()));
        assert!(!Mask::all_events().intersects(Mask::read_only()));
    }
}
