use super::Error;
use super::Watch;
use super::WatchDescriptor;

pub trait Watchable {
    /// Add a [`Watch`].
    ///
    /// See [`Watch`] for more details.
    fn add_watch<'a>(&self, watch: Watch<'a>) -> Result<WatchDescriptor, Error<'a>>;
}
