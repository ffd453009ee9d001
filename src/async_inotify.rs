use std::io;

use async_io::Async;

use super::{
    event::{
        buffer::EventBuffer,
        events::Events,
    },
    inotify::Inotify,
    watch::{
        self,
        Watch,
        WatchDescriptor,
    },
};

pub struct AsyncInotify {
    inner: Async<Inotify>,
}

impl AsyncInotify {
    pub fn new(inotify: Inotify) -> io::Result<Self> {
        let this = Self {
            inner: Async::new(inotify)?,
        };
        Ok(this)
    }
}

impl Inotify {
    pub fn into_async(self) -> io::Result<AsyncInotify> {
        AsyncInotify::new(self)
    }
}

impl AsyncInotify {
    pub fn inotify(&self) -> &Inotify {
        self.inner.get_ref()
    }

    pub fn inotify_mut(&mut self) -> &mut Inotify {
        self.inner.get_mut()
    }

    pub fn into_inotify(self) -> io::Result<Inotify> {
        self.inner.into_inner()
    }

    pub fn into_inner(self) -> io::Result<Inotify> {
        self.into_inotify()
    }
}

impl AsyncInotify {
    /// Add a [`Watch`] to the wrapped [`Inotify`] instance.
    ///
    /// See [`Watch`] for more details.
    pub fn add_watch<'a>(&self, watch: Watch<'a>) -> Result<WatchDescriptor, watch::Error<'a>> {
        self.inotify().add_watch(watch)
    }

    /// Remove a watch from the wrapped [`Inotify`] instance.
    pub fn rm_watch(&self, wd: WatchDescriptor) -> Result<(), watch::RemoveError> {
        self.inotify().rm_watch(wd)
    }

    /// Read queued events from the wrapped [`Inotify`] instance into the given buffer.
    ///
    /// Return an [`Events`] iterator over the individual events.
    ///
    /// This method does not block.
    pub async fn read<'a>(&'a self, buffer: &'a mut EventBuffer) -> io::Result<Events<'a>> {
        self.inner.readable().await?;
        let events = self.inotify()
            .read(buffer)
            .map_err(|errno| io::Error::from_raw_os_error(errno as i32))?;
        Ok(events)
    }
}
