use crate::record::{LocationRecord, Position};

/// Zoom used when there is a single record to show.
pub const SINGLE_RECORD_ZOOM: f64 = 12.0;
const MIN_FIT_ZOOM: f64 = 2.0;
const MAX_FIT_ZOOM: f64 = 16.0;

/// The geographical boundaries of a set of positions, defined by minimum
/// and maximum latitude and longitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapBounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl MapBounds {
    /// Smallest box holding every position, `None` when there are none.
    pub fn from_positions<I>(positions: I) -> Option<Self>
    where
        I: IntoIterator<Item = Position>,
    {
        let mut positions = positions.into_iter();
        let first = positions.next()?;
        let mut bounds = MapBounds {
            min_lat: first.lat,
            max_lat: first.lat,
            min_lon: first.lng,
            max_lon: first.lng,
        };
        for position in positions {
            bounds.extend(position);
        }
        Some(bounds)
    }

    pub fn extend(&mut self, pos: Position) {
        self.min_lat = self.min_lat.min(pos.lat);
        self.max_lat = self.max_lat.max(pos.lat);
        self.min_lon = self.min_lon.min(pos.lng);
        self.max_lon = self.max_lon.max(pos.lng);
    }

    pub fn center(&self) -> Position {
        Position::new(
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lon + self.max_lon) / 2.0,
        )
    }

    /// Largest whole zoom level at which both spans fit on screen.
    ///
    /// At zoom `z` the map shows roughly `360 / 2^z` degrees of longitude and
    /// `180 / 2^z` degrees of latitude.
    pub fn fit_zoom(&self) -> f64 {
        let lon_span = self.max_lon - self.min_lon;
        let lat_span = self.max_lat - self.min_lat;

        let zoom_for = |full: f64, span: f64| {
            if span <= 0.0 {
                MAX_FIT_ZOOM
            } else {
                (full / span).log2().floor()
            }
        };

        zoom_for(360.0, lon_span)
            .min(zoom_for(180.0, lat_span))
            .clamp(MIN_FIT_ZOOM, MAX_FIT_ZOOM)
    }
}

/// Where the map starts once the records are loaded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Viewport {
    Center { position: Position, zoom: f64 },
    Fit { center: Position, zoom: f64 },
}

impl Viewport {
    pub fn center(&self) -> Position {
        match self {
            Viewport::Center { position, .. } => *position,
            Viewport::Fit { center, .. } => *center,
        }
    }

    pub fn zoom(&self) -> f64 {
        match self {
            Viewport::Center { zoom, .. } | Viewport::Fit { zoom, .. } => *zoom,
        }
    }
}

/// A single record is centered at a fixed zoom instead of fitting an empty
/// box; several records fit the box around all of them.
pub fn initial_viewport(records: &[LocationRecord]) -> Option<Viewport> {
    match records {
        [] => None,
        [only] => Some(Viewport::Center {
            position: only.position(),
            zoom: SINGLE_RECORD_ZOOM,
        }),
        _ => {
            let bounds = MapBounds::from_positions(records.iter().map(|r| r.position()))?;
            Some(Viewport::Fit {
                center: bounds.center(),
                zoom: bounds.fit_zoom(),
            })
        }
    }
}
