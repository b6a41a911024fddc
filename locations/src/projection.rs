use crate::{
    members::{MemberColor, MemberRegistry},
    record::{LocationRecord, Position, RecordId},
};

/// Display category of a source link, decided by the URL's host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Instagram,
    YouTube,
    External,
}

impl LinkKind {
    pub fn classify(url: &str) -> Self {
        if url.contains("instagram.com") {
            LinkKind::Instagram
        } else if url.contains("youtube.com") || url.contains("youtu.be") {
            LinkKind::YouTube
        } else {
            LinkKind::External
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LinkKind::Instagram => "🔗 IG Post",
            LinkKind::YouTube => "▶️ YouTube",
            LinkKind::External => "🌐 External",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLink {
    pub kind: LinkKind,
    pub url: String,
}

pub const NAVIGATION_LABEL: &str = "📍 Navigate";

/// Directions link to the record's coordinates.
pub fn navigation_url(position: Position) -> String {
    format!(
        "https://www.google.com/maps/dir/?api=1&destination={},{}",
        position.lat, position.lng
    )
}

/// Cyclic image viewer of a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    images: Vec<String>,
    current: usize,
}

impl Carousel {
    /// A carousel only exists when the first image is a real picture.
    pub fn for_record(record: &LocationRecord) -> Option<Self> {
        if !record.has_valid_image() {
            return None;
        }
        Some(Self {
            images: record.image_urls.clone(),
            current: 0,
        })
    }

    /// Moves to the next image, wrapping around. A single image stays put.
    pub fn advance(&mut self) {
        if self.images.len() <= 1 {
            return;
        }
        self.current = (self.current + 1) % self.images.len();
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_image(&self) -> &str {
        &self.images[self.current]
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

/// Everything a sidebar card shows.
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub id: RecordId,
    pub symbol_line: String,
    pub name: String,
    pub place: String,
    pub members: String,
    pub date: String,
    pub note: String,
    pub source_links: Vec<SourceLink>,
    pub navigation_url: String,
}

impl CardView {
    pub fn project(id: RecordId, record: &LocationRecord, registry: &MemberRegistry) -> Self {
        let symbol_line = record
            .members
            .iter()
            .map(|member| registry.symbol_for(member))
            .collect::<Vec<_>>()
            .join(" ");

        let source_links = record
            .source_urls()
            .into_iter()
            .map(|url| SourceLink {
                kind: LinkKind::classify(url),
                url: url.to_string(),
            })
            .collect();

        Self {
            id,
            symbol_line,
            name: record.name.clone(),
            place: format!("{} {}", record.country, record.city),
            members: record.members.join(", "),
            date: record.date.clone(),
            note: record.note.clone(),
            source_links,
            navigation_url: navigation_url(record.position()),
        }
    }
}

/// What a map marker needs.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerView {
    pub id: RecordId,
    pub position: Position,
    pub title: String,
    pub color: MemberColor,
}

impl MarkerView {
    pub fn project(id: RecordId, record: &LocationRecord, registry: &MemberRegistry) -> Self {
        Self {
            id,
            position: record.position(),
            title: record.name.clone(),
            color: registry.lookup(&record.members).color,
        }
    }
}

/// Content of the detail popup.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayView {
    pub id: RecordId,
    pub preview_image: Option<String>,
    pub name: String,
    pub member_lines: Vec<String>,
    pub date: String,
    pub note: String,
}

impl OverlayView {
    pub fn project(id: RecordId, record: &LocationRecord, registry: &MemberRegistry) -> Self {
        let preview_image = if record.has_valid_image() {
            record.image_urls.first().cloned()
        } else {
            None
        };

        let member_lines = record
            .members
            .iter()
            .map(|member| format!("{} {}", registry.symbol_for(member), member.trim()))
            .collect();

        Self {
            id,
            preview_image,
            name: record.name.clone(),
            member_lines,
            date: record.date.clone(),
            note: record.note.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{tests::record, PLACEHOLDER_IMAGE};

    fn with_images(images: &[&str]) -> LocationRecord {
        let mut location = record("A", &["Karina"], "JP", "Tokyo", "2024年01月05日");
        location.image_urls = images.iter().map(|i| i.to_string()).collect();
        location
    }

    #[test]
    fn test_link_classification() {
        assert_eq!(
            LinkKind::classify("https://www.instagram.com/p/abc"),
            LinkKind::Instagram
        );
        assert_eq!(
            LinkKind::classify("https://www.youtube.com/watch?v=1"),
            LinkKind::YouTube
        );
        assert_eq!(LinkKind::classify("https://youtu.be/1"), LinkKind::YouTube);
        assert_eq!(
            LinkKind::classify("https://example.com/post"),
            LinkKind::External
        );
    }

    #[test]
    fn test_card_keeps_link_order_and_member_symbols() {
        let registry = MemberRegistry::new();
        let mut location = record("Cafe", &["Karina", "Mystery", "Winter"], "JP", "Tokyo", "");
        location.source_urls =
            "https://example.com/a, https://www.instagram.com/p/b,https://youtu.be/c".to_string();

        let card = CardView::project(RecordId(3), &location, &registry);

        assert_eq!(card.symbol_line, "💙 🔮 ⭐");
        assert_eq!(card.place, "JP Tokyo");
        assert_eq!(card.members, "Karina, Mystery, Winter");
        let kinds: Vec<_> = card.source_links.iter().map(|l| l.kind).collect();
        assert_eq!(
            kinds,
            vec![LinkKind::External, LinkKind::Instagram, LinkKind::YouTube]
        );
        assert_eq!(card.source_links[1].url, "https://www.instagram.com/p/b");
    }

    #[test]
    fn test_navigation_url_format() {
        assert_eq!(
            navigation_url(Position::new(35.6762, 139.6503)),
            "https://www.google.com/maps/dir/?api=1&destination=35.6762,139.6503"
        );
    }

    #[test]
    fn test_carousel_cycles_through_images() {
        let location = with_images(&["a.jpg", "b.jpg", "c.jpg"]);
        let mut carousel = Carousel::for_record(&location).expect("Expected a carousel");

        assert_eq!(carousel.current_image(), "a.jpg");
        for expected in [1, 2, 0, 1] {
            carousel.advance();
            assert_eq!(carousel.current_index(), expected);
            assert!(carousel.current_index() < carousel.len());
        }
        assert_eq!(carousel.current_image(), "b.jpg");
    }

    #[test]
    fn test_single_image_carousel_does_not_move() {
        let mut carousel =
            Carousel::for_record(&with_images(&["a.jpg"])).expect("Expected a carousel");
        carousel.advance();
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn test_no_carousel_without_real_first_image() {
        assert!(Carousel::for_record(&with_images(&[])).is_none());
        assert!(Carousel::for_record(&with_images(&[PLACEHOLDER_IMAGE, "b.jpg"])).is_none());
    }

    #[test]
    fn test_marker_color_uses_group_default() {
        let registry = MemberRegistry::new();
        let solo = record("A", &["Giselle"], "", "", "");
        let group = record("B", &["Giselle", "Winter"], "", "", "");

        assert_eq!(
            MarkerView::project(RecordId(0), &solo, &registry).color,
            MemberColor::Pink
        );
        assert_eq!(
            MarkerView::project(RecordId(1), &group, &registry).color,
            MemberColor::Orange
        );
    }

    #[test]
    fn test_overlay_lists_members_with_symbols() {
        let registry = MemberRegistry::new();
        let mut location = with_images(&["a.jpg", "b.jpg"]);
        location.members = vec![" Karina".into(), "Giselle".into()];

        let overlay = OverlayView::project(RecordId(0), &location, &registry);
        assert_eq!(overlay.member_lines, vec!["💙 Karina", "🌙 Giselle"]);
        assert_eq!(overlay.preview_image.as_deref(), Some("a.jpg"));

        let overlay = OverlayView::project(RecordId(0), &with_images(&[PLACEHOLDER_IMAGE]), &registry);
        assert_eq!(overlay.preview_image, None);
    }
}
