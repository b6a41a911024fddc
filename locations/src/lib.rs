//! Core of the member map: loading geotagged posts, filtering and sorting
//! them, and projecting the visible ones into what the map markers and the
//! sidebar cards display.
//!
//! Nothing in this crate knows about a UI toolkit. The interface feeds
//! [`Message`]s into [`AppState::update`] and applies the returned
//! [`Effect`]s to its own map surface.

pub mod bounds;
pub mod date;
pub mod engine;
pub mod errors;
pub mod loader;
pub mod members;
pub mod options;
pub mod projection;
pub mod query;
pub mod record;
pub mod state;

pub use bounds::{initial_viewport, MapBounds, Viewport};
pub use engine::{apply, FilteredView, ViewEntry};
pub use errors::LocationsError;
pub use loader::{load_records, parse_records};
pub use members::{MemberColor, MemberInfo, MemberRegistry};
pub use projection::{CardView, Carousel, LinkKind, MarkerView, OverlayView, SourceLink};
pub use query::{FilterQuery, MemberFilter, SortOrder};
pub use record::{LocationRecord, Position, RecordId};
pub use state::{AppState, Effect, LoadState, Message};
