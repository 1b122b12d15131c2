// SPDX-License-Identifier: MPL-2.0
//! Gallery entry and category types.

use std::fmt;

// =============================================================================
// GalleryError
// =============================================================================

/// Errors raised while building gallery entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryError {
    /// An entry was declared without any image.
    NoImages(EntryId),

    /// Two entries share the same identifier.
    DuplicateId(EntryId),
}

impl GalleryError {
    /// Returns the i18n message key for this error.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            GalleryError::NoImages(_) => "error-gallery-no-images",
            GalleryError::DuplicateId(_) => "error-gallery-duplicate-id",
        }
    }
}

impl fmt::Display for GalleryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GalleryError::NoImages(id) => write!(f, "Gallery entry {id} has no images"),
            GalleryError::DuplicateId(id) => write!(f, "Gallery entry id {id} is used twice"),
        }
    }
}

impl std::error::Error for GalleryError {}

// =============================================================================
// EntryId
// =============================================================================

/// Unique, immutable identifier of a gallery entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntryId(u32);

impl EntryId {
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// =============================================================================
// Category
// =============================================================================

/// Closed set of gallery categories.
///
/// Labels match what the page displays and what the category buttons carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Team,
    Technology,
    Projects,
    Events,
    Office,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 5] = [
        Category::Team,
        Category::Technology,
        Category::Projects,
        Category::Events,
        Category::Office,
    ];

    /// Display label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Category::Team => "Team",
            Category::Technology => "Technology",
            Category::Projects => "Projects",
            Category::Events => "Events",
            Category::Office => "Office",
        }
    }

    /// Parses a display label. Matching is exact, like the selector buttons.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// GalleryEntry
// =============================================================================

/// One catalog item with one or more images.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryEntry {
    id: EntryId,
    title: String,
    description: String,
    category: Category,
    /// Ordered image URLs. Never empty; index 0 is the cover.
    images: Vec<String>,
    /// Lowercase search keywords.
    tags: Vec<String>,
}

impl GalleryEntry {
    /// Creates an entry.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::NoImages`] when `images` is empty.
    pub fn new(
        id: EntryId,
        title: impl Into<String>,
        description: impl Into<String>,
        category: Category,
        images: Vec<String>,
        tags: Vec<String>,
    ) -> Result<Self, GalleryError> {
        if images.is_empty() {
            return Err(GalleryError::NoImages(id));
        }

        Ok(Self {
            id,
            title: title.into(),
            description: description.into(),
            category,
            images,
            tags: tags.into_iter().map(|t| t.to_lowercase()).collect(),
        })
    }

    #[must_use]
    pub fn id(&self) -> EntryId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub fn images(&self) -> &[String] {
        &self.images
    }

    /// Number of images, always at least one.
    #[must_use]
    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    /// Cover image (first image).
    #[must_use]
    pub fn cover(&self) -> &str {
        // Non-empty by construction.
        &self.images[0]
    }

    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Case-insensitive substring match against title, description and tags.
    ///
    /// `needle` must already be lowercase.
    #[must_use]
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
    }
}
