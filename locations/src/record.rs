use std::fmt;

use serde::Deserialize;

/// Marks an image slot that was never filled with a real picture.
pub const PLACEHOLDER_IMAGE: &str = "請自行尋找照片 URL";

/// Stable identifier of a record: its position in the loaded data file.
///
/// Cards, markers and carousels are correlated through this id instead of
/// comparing coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(pub usize);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub lat: f64,
    pub lng: f64,
}

impl Position {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// One geotagged post, as it appears in the data file.
///
/// Records are immutable once loaded. Visibility is not stored here; it is
/// part of the [`crate::FilteredView`] computed for each query.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LocationRecord {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub members: Vec<String>,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub note: String,
    /// Comma separated list of post URLs.
    #[serde(rename = "sourceUrls", alias = "ig_post_url", default)]
    pub source_urls: String,
    #[serde(rename = "imageUrls", alias = "ig_img_urls", default)]
    pub image_urls: Vec<String>,
}

impl LocationRecord {
    pub fn position(&self) -> Position {
        Position::new(self.lat, self.lng)
    }

    /// Splits the raw source field into trimmed, non-empty URLs, keeping
    /// their original order.
    pub fn source_urls(&self) -> Vec<&str> {
        self.source_urls
            .split(',')
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .collect()
    }

    /// Whether the first image is a real picture, which is what decides if
    /// the record gets a carousel and a popup preview.
    pub fn has_valid_image(&self) -> bool {
        match self.image_urls.first() {
            Some(first) => !first.is_empty() && first != PLACEHOLDER_IMAGE,
            None => false,
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn record(
        name: &str,
        members: &[&str],
        country: &str,
        city: &str,
        date: &str,
    ) -> LocationRecord {
        LocationRecord {
            name: name.to_string(),
            lat: 0.0,
            lng: 0.0,
            members: members.iter().map(|m| m.to_string()).collect(),
            country: country.to_string(),
            city: city.to_string(),
            date: date.to_string(),
            note: String::new(),
            source_urls: String::new(),
            image_urls: vec![],
        }
    }

    #[test]
    fn test_source_urls_are_trimmed_and_empty_entries_dropped() {
        let mut location = record("A", &["Karina"], "", "", "");
        location.source_urls =
            " https://www.instagram.com/p/1 ,, https://youtu.be/x ,".to_string();

        assert_eq!(
            location.source_urls(),
            vec!["https://www.instagram.com/p/1", "https://youtu.be/x"]
        );
    }

    #[test]
    fn test_empty_source_field_yields_no_urls() {
        let location = record("A", &["Karina"], "", "", "");
        assert!(location.source_urls().is_empty());
    }

    #[test]
    fn test_placeholder_first_image_is_not_valid() {
        let mut location = record("A", &["Karina"], "", "", "");
        assert!(!location.has_valid_image(), "No images means no preview");

        location.image_urls = vec![PLACEHOLDER_IMAGE.to_string()];
        assert!(!location.has_valid_image(), "Placeholder must not count as an image");

        location.image_urls = vec![String::new(), "https://img/1.jpg".to_string()];
        assert!(!location.has_valid_image(), "Only the first slot is checked");

        location.image_urls = vec!["https://img/1.jpg".to_string()];
        assert!(location.has_valid_image());
    }
}
