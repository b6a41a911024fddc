use std::{fs, path::Path};

use tracing::{debug, info};

use crate::{errors::LocationsError, record::LocationRecord};

/// Reads and validates the record set from a JSON file.
pub fn load_records(path: &Path) -> Result<Vec<LocationRecord>, LocationsError> {
    debug!(path = %path.display(), "reading locations");
    let content = fs::read_to_string(path).map_err(|source| LocationsError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let records = parse_records(&content)?;
    info!(count = records.len(), path = %path.display(), "locations loaded");
    Ok(records)
}

/// Parses a JSON array of records. A record without members or with
/// non-finite coordinates rejects the whole set.
pub fn parse_records(json: &str) -> Result<Vec<LocationRecord>, LocationsError> {
    let records: Vec<LocationRecord> = serde_json::from_str(json)?;

    for (index, record) in records.iter().enumerate() {
        if record.members.is_empty() {
            return Err(LocationsError::EmptyMembers {
                index,
                name: record.name.clone(),
            });
        }
        if !record.lat.is_finite() || !record.lng.is_finite() {
            return Err(LocationsError::InvalidCoordinates {
                index,
                name: record.name.clone(),
                lat: record.lat,
                lng: record.lng,
            });
        }
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    const SAMPLE: &str = r#"[
        {
            "name": "Cafe",
            "lat": 35.6,
            "lng": 139.7,
            "members": ["Karina"],
            "country": "JP",
            "city": "Tokyo",
            "date": "2024年01月05日",
            "note": "latte",
            "ig_post_url": "https://www.instagram.com/p/1, https://youtu.be/2",
            "ig_img_urls": ["https://img/1.jpg"]
        },
        {
            "name": "Park",
            "lat": 37.5,
            "lng": 127.0,
            "members": ["Winter", "Giselle"],
            "sourceUrls": "https://example.com",
            "imageUrls": []
        }
    ]"#;

    #[test]
    fn test_parse_accepts_both_field_spellings() {
        let records = parse_records(SAMPLE).expect("Failed to parse sample");
        assert_eq!(records.len(), 2);

        assert_eq!(records[0].source_urls().len(), 2);
        assert_eq!(records[0].image_urls, vec!["https://img/1.jpg"]);

        assert_eq!(records[1].source_urls(), vec!["https://example.com"]);
        assert_eq!(records[1].country, "", "Missing country defaults to empty");
        assert_eq!(records[1].note, "");
    }

    #[test]
    fn test_parse_rejects_empty_members() {
        let json = r#"[{"name": "X", "lat": 1.0, "lng": 1.0, "members": []}]"#;
        match parse_records(json) {
            Err(LocationsError::EmptyMembers { index, name }) => {
                assert_eq!(index, 0);
                assert_eq!(name, "X");
            }
            other => panic!("Expected EmptyMembers, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        assert!(matches!(
            parse_records("{ not json"),
            Err(LocationsError::Parse(_))
        ));
        assert!(matches!(
            parse_records(r#"[{"name": "X"}]"#),
            Err(LocationsError::Parse(_))
        ));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let path = env::temp_dir().join("member_map_does_not_exist.json");
        assert!(matches!(load_records(&path), Err(LocationsError::Io { .. })));
    }

    #[test]
    fn test_load_from_file() {
        let path = env::temp_dir().join(format!("member_map_loader_{}.json", std::process::id()));
        fs::write(&path, SAMPLE).expect("Failed to write sample file");

        let records = load_records(&path).expect("Failed to load sample file");
        assert_eq!(records[0].name, "Cafe");

        fs::remove_file(&path).expect("Failed to remove sample file");
    }
}
