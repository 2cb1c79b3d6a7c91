//! Location lookup: free-text search and map clicks.
//!
//! [`NominatimClient`] talks to an OpenStreetMap Nominatim instance,
//! [`CachedResolver`] puts a TTL cache in front of any resolver, and
//! [`StaticResolver`] answers from a fixed list.

mod cache;
mod error;
mod nominatim;
mod resolver;
mod static_resolver;

pub use cache::{CacheConfig, CachedResolver};
pub use error::GeocodeError;
pub use nominatim::{DEFAULT_BASE_URL, DEFAULT_USER_AGENT, NominatimClient, NominatimConfig};
pub use resolver::{LocationCandidate, LocationResolver, MapClick};
pub use static_resolver::StaticResolver;
