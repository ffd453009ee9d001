use std::io;

use apply::Apply;
use nix::errno::Errno;

use crate::event::buffer::EventBufferSize;
use crate::event::events::Events;

use super::{
    async_inotify::AsyncInotify,
    event::buffer::EventBuffer,
    inotify::Inotify,
    watch::{
        self,
        Watch,
        Watchable,
        WatchDescriptor,
    },
};

pub struct BufferedInotify {
    pub inotify: Inotify,
    pub buffer: EventBuffer,
}

impl Watchable for BufferedInotify {
    fn add_watch<'a>(&self, watch: Watch<'a>) -> Result<WatchDescriptor, watch::Error<'a>> {
        self.inotify.add_watch(watch)
    }
}

impl BufferedInotify {
    /// See [`Inotify::read`].
    pub fn read(&mut self) -> Result<Events<'_>, Errno> {
        self.inotify.read(&mut self.buffer)
    }
}

pub struct AsyncBufferedInotify {
    pub inotify: AsyncInotify,
    pub buffer: EventBuffer,
}

impl Watchable for AsyncBufferedInotify {
    fn add_watch<'a>(&self, watch: Watch<'a>) -> Result<WatchDescriptor, watch::Error<'a>> {
        self.inotify.add_watch(watch)
    }
}

impl AsyncBufferedInotify {
    /// See [`Inotify::read`].
    pub async fn read(&mut self) -> io::Result<Events<'_>> {
        let Self { inotify, buffer } = self;
        inotify.read(buffer).await
    }
}

pub trait IntoBufferedInotify: Sized {
    type Buffered;
    fn buffered(self, buffer: EventBuffer) -> Self::Buffered;

    fn buffered_with_size(self, size: EventBufferSize) -> Self::Buffered {
        self.buffered(size.into())
    }

    fn buffered_default(self) -> Self::Buffered {
        self.buffered_with_size(Default::default())
    }
}

impl IntoBufferedInotify for Inotify {
    type Buffered = BufferedInotify;

    fn buffered(self, buffer: EventBuffer) -> Self::Buffered {
        Self::Buffered {
            inotify: self,
            buffer,
        }
    }
}

impl IntoBufferedInotify for AsyncInotify {
    type Buffered = AsyncBufferedInotify;

    fn buffered(self, buffer: EventBuffer) -> Self::Buffered {
        Self::Buffered {
            inotify: self,
            buffer,
        }
    }
}

impl BufferedInotify {
    pub fn into_async(self) -> io::Result<AsyncBufferedInotify> {
        let Self { inotify, buffer } = self;
        AsyncBufferedInotify {
            inotify: inotify.into_async()?,
            buffer,
        }.apply(Ok)
    }
}
