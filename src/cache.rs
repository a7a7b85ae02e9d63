//! Bounded cache for extracted animation-frame rasters
//!
//! Extracting a sprite-sheet frame into a standalone raster costs real
//! work, and collision tests tend to hit the same frames every tick. The
//! cache belongs to the rendering collaborator, not the collision core; it
//! is generic over whatever the host stores per frame (decoded raster,
//! texture handle, etc.) and evicts oldest-first once full.

use std::collections::{HashMap, VecDeque};

use log::trace;

/// Identity of a single animation frame: its index plus the source image
/// it was cut from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FrameKey {
    /// Frame index within the sprite sheet
    pub frame_index: usize,
    /// Identifier of the source image (path, URL, or asset id)
    pub image_id: String,
}

impl FrameKey {
    /// Creates a key for `frame_index` of the image named `image_id`
    pub fn new(frame_index: usize, image_id: impl Into<String>) -> Self {
        Self {
            frame_index,
            image_id: image_id.into(),
        }
    }
}

/// Bounded frame-raster cache with oldest-first eviction.
#[derive(Debug)]
pub struct FrameRasterCache<V> {
    entries: HashMap<FrameKey, V>,
    order: VecDeque<FrameKey>,
    capacity: usize,
}

impl<V> FrameRasterCache<V> {
    /// Creates a cache holding at most `capacity` frames. A capacity of 0
    /// disables caching entirely.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            order: VecDeque::new(),
            capacity,
        }
    }

    /// Looks up a cached frame
    pub fn get(&self, key: &FrameKey) -> Option<&V> {
        self.entries.get(key)
    }

    /// Inserts a frame, evicting the oldest entry when the cache is full.
    /// Re-inserting an existing key replaces its value in place.
    pub fn insert(&mut self, key: FrameKey, value: V) {
        if self.capacity == 0 {
            return;
        }

        if self.entries.insert(key.clone(), value).is_some() {
            return;
        }

        if self.order.len() == self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                trace!(
                    "frame cache full, evicting frame {} of {}",
                    oldest.frame_index,
                    oldest.image_id
                );
                self.entries.remove(&oldest);
            }
        }
        self.order.push_back(key);
    }

    /// Drops a single frame, e.g. after its source image was reloaded
    pub fn invalidate(&mut self, key: &FrameKey) -> Option<V> {
        let removed = self.entries.remove(key);
        if removed.is_some() {
            self.order.retain(|cached| cached != key);
        }
        removed
    }

    /// Drops every cached frame
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    /// Number of cached frames
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is cached
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
