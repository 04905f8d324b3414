// Portfolio catalog types.
// Defines the deserialized content shown in the projects, media, and places tabs.

use serde::{Deserialize, Serialize};

/// A portfolio project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub url: Option<String>,
    pub year: Option<u16>,
}

/// A book, album, or digital work on a media shelf.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaItem {
    pub title: String,
    pub creator: Option<String>,
    pub note: Option<String>,
}

/// A visited place, as `[longitude, latitude]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    pub country: Option<String>,
    pub coords: [f64; 2],
    #[serde(default = "default_marker_size")]
    pub size: u8,
}

fn default_marker_size() -> u8 {
    4
}

impl Place {
    pub fn longitude(&self) -> f64 {
        self.coords[0]
    }

    pub fn latitude(&self) -> f64 {
        self.coords[1]
    }
}

/// Media shelf categories, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MediaCategory {
    #[default]
    Books,
    Music,
    Digitals,
}

impl MediaCategory {
    pub const ALL: [MediaCategory; 3] = [
        MediaCategory::Books,
        MediaCategory::Music,
        MediaCategory::Digitals,
    ];

    /// Panel key used for pagination.
    pub fn key(&self) -> &'static str {
        match self {
            MediaCategory::Books => "books",
            MediaCategory::Music => "music",
            MediaCategory::Digitals => "digitals",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            MediaCategory::Books => "Books",
            MediaCategory::Music => "Music",
            MediaCategory::Digitals => "Digitals",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            MediaCategory::Books => MediaCategory::Music,
            MediaCategory::Music => MediaCategory::Digitals,
            MediaCategory::Digitals => MediaCategory::Books,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            MediaCategory::Books => MediaCategory::Digitals,
            MediaCategory::Music => MediaCategory::Books,
            MediaCategory::Digitals => MediaCategory::Music,
        }
    }
}

/// Everything the portfolio displays.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub books: Vec<MediaItem>,
    #[serde(default)]
    pub music: Vec<MediaItem>,
    #[serde(default)]
    pub digitals: Vec<MediaItem>,
    #[serde(default)]
    pub places: Vec<Place>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_cycle() {
        let mut category = MediaCategory::default();
        for _ in 0..3 {
            category = category.next();
        }
        assert_eq!(category, MediaCategory::Books);
        assert_eq!(MediaCategory::Books.prev(), MediaCategory::Digitals);
        assert_eq!(MediaCategory::Music.key(), "music");
    }

    #[test]
    fn test_sparse_catalog_deserializes() {
        let json = r#"{
            "projects": [{ "title": "Tide Tables" }],
            "places": [{ "name": "Kyoto", "coords": [135.7, 35.0] }]
        }"#;

        let catalog: Catalog = serde_json::from_str(json).unwrap();

        assert_eq!(catalog.projects[0].summary, "");
        assert!(catalog.projects[0].tags.is_empty());
        assert!(catalog.books.is_empty());
        assert_eq!(catalog.places[0].size, 4);
        assert_eq!(catalog.places[0].longitude(), 135.7);
        assert_eq!(catalog.places[0].latitude(), 35.0);
    }
}
