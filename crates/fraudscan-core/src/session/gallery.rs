//! Active-image tracking for a result's gallery.

/// Which image of the current result is shown large.
///
/// The active image is always a member of the image list the selection was
/// initialized with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GallerySelection {
    images: Vec<String>,
    active: Option<String>,
}

impl GallerySelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopts a new image list and activates its first image, if any.
    pub fn initialize(&mut self, images: &[String]) {
        self.images = images.to_vec();
        self.active = self.images.first().cloned();
    }

    /// Activates `url`. Returns false (and keeps the current image) when the
    /// URL is not part of the image list.
    pub fn select(&mut self, url: &str) -> bool {
        if !self.images.iter().any(|image| image == url) {
            return false;
        }
        self.active = Some(url.to_string());
        true
    }

    /// Activates the image at `index` in display order.
    pub fn select_index(&mut self, index: usize) -> bool {
        match self.images.get(index) {
            Some(image) => {
                self.active = Some(image.clone());
                true
            }
            None => false,
        }
    }

    /// Closes the large view; the image list is kept.
    pub fn clear(&mut self) {
        self.active = None;
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }
}
