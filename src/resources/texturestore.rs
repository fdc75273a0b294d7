//! Texture creation for assembled frames.
//!
//! Sprite assembly asks a [`TextureFactory`] for one texture per frame and
//! keeps the returned [`TextureHandle`] for the rest of the process. The
//! factory owns the actual GPU (or CPU) resource.
//!
//! - [`HeadlessTextures`] keeps the source images in memory. Used for tools
//!   that only need geometry and for tests.
//! - [`TextureStore`] (feature `preview`) uploads to raylib. Creation only
//!   queues the image; [`TextureStore::upload_pending`] must run on the render
//!   thread before the handles are drawn.

use crate::resources::actorpackage::Image;

/// Opaque handle to a texture owned by a [`TextureFactory`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextureHandle(pub u32);

/// Renderer side of sprite assembly.
pub trait TextureFactory {
    /// Create a texture from `image`. Ownership stays with the factory for the
    /// lifetime of the process.
    fn create_owned_texture(&mut self, image: &Image) -> TextureHandle;
}

/// Texture factory that stores images in memory.
#[derive(Debug, Default)]
pub struct HeadlessTextures {
    images: Vec<Image>,
}

impl HeadlessTextures {
    pub fn new() -> Self {
        Self::default()
    }

    /// Image backing `handle`.
    pub fn image(&self, handle: TextureHandle) -> Option<&Image> {
        self.images.get(handle.0 as usize)
    }

    /// Number of textures created so far.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

impl TextureFactory for HeadlessTextures {
    fn create_owned_texture(&mut self, image: &Image) -> TextureHandle {
        let handle = TextureHandle(self.images.len() as u32);
        self.images.push(image.clone());
        handle
    }
}

#[cfg(feature = "preview")]
pub use raylib_store::TextureStore;

#[cfg(feature = "preview")]
mod raylib_store {
    use log::{debug, error};
    use raylib::prelude::{Color, RaylibHandle, RaylibThread, Texture2D};
    use rustc_hash::FxHashMap;

    use super::{TextureFactory, TextureHandle};
    use crate::resources::actorpackage::Image;

    /// Raylib textures keyed by handle.
    ///
    /// This is a non-send resource; raylib textures must stay on the main thread.
    pub struct TextureStore {
        next: u32,
        pending: Vec<(TextureHandle, Image)>,
        map: FxHashMap<TextureHandle, Texture2D>,
    }

    impl TextureStore {
        pub fn new() -> Self {
            Self {
                next: 0,
                pending: Vec::new(),
                map: FxHashMap::default(),
            }
        }

        /// Get an uploaded texture.
        pub fn get(&self, handle: TextureHandle) -> Option<&Texture2D> {
            self.map.get(&handle)
        }

        /// Upload every queued image. Must be called from the render thread.
        pub fn upload_pending(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread) {
            for (handle, image) in self.pending.drain(..) {
                let mut rl_image = raylib::prelude::Image::gen_image_color(
                    image.extents.width as i32,
                    image.extents.height as i32,
                    Color::BLANK,
                );
                let width = image.extents.width as usize;
                for (index, px) in image.pixels.chunks_exact(4).enumerate() {
                    let color = Color::new(px[0], px[1], px[2], px[3]);
                    rl_image.draw_pixel((index % width) as i32, (index / width) as i32, color);
                }
                match rl.load_texture_from_image(thread, &rl_image) {
                    Ok(texture) => {
                        debug!("Uploaded texture {:?}", handle);
                        self.map.insert(handle, texture);
                    }
                    Err(e) => error!("Failed to upload texture {:?}: {}", handle, e),
                }
            }
        }
    }

    impl Default for TextureStore {
        fn default() -> Self {
            Self::new()
        }
    }

    impl TextureFactory for TextureStore {
        fn create_owned_texture(&mut self, image: &Image) -> TextureHandle {
            let handle = TextureHandle(self.next);
            self.next += 1;
            self.pending.push((handle, image.clone()));
            handle
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Extents;

    #[test]
    fn test_headless_handles_are_sequential() {
        let mut textures = HeadlessTextures::new();
        let a = textures.create_owned_texture(&Image::filled(Extents::new(1, 1), [1, 1, 1, 1]));
        let b = textures.create_owned_texture(&Image::filled(Extents::new(2, 1), [2, 2, 2, 2]));
        assert_eq!(a, TextureHandle(0));
        assert_eq!(b, TextureHandle(1));
        assert_eq!(textures.len(), 2);
    }

    #[test]
    fn test_headless_keeps_image_content() {
        let mut textures = HeadlessTextures::new();
        let image = Image::filled(Extents::new(2, 2), [5, 6, 7, 8]);
        let handle = textures.create_owned_texture(&image);
        assert_eq!(textures.image(handle), Some(&image));
        assert_eq!(textures.image(TextureHandle(7)), None);
    }
}
