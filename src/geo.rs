//! External boundary geometry: GeoJSON collections keyed by administrative
//! level, fetched over HTTP and matched to units by the `shapeName` feature
//! property. Fetching is a collaborator concern; the store below keeps the
//! bookkeeping honest with per-level caching and last-write-wins by requester
//! identity, so a stale response can never overwrite the view the user has
//! since navigated to.

use std::collections::HashMap;

use serde::Deserialize;
use thiserror::Error;

use crate::model::Level;

const ADM1_URL: &str = "https://github.com/wmgeolab/geoBoundaries/raw/9469f09/releaseData/gbOpen/AGO/ADM1/geoBoundaries-AGO-ADM1.geojson";
const ADM2_URL: &str = "https://github.com/wmgeolab/geoBoundaries/raw/9469f09/releaseData/gbOpen/AGO/ADM2/geoBoundaries-AGO-ADM2.geojson";

#[derive(Debug, Error)]
pub enum GeoError {
    #[error("no boundary collection is published at {} level", .0.as_str())]
    NoBoundarySet(Level),
    #[error("boundary request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// The slice of GeoJSON the stylist needs. Lenient on purpose: missing
/// properties or geometry decode to defaults instead of failing the render.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeatureCollection {
    #[serde(default)]
    pub features: Vec<BoundaryFeature>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BoundaryFeature {
    #[serde(default)]
    pub properties: FeatureProperties,
    #[serde(default)]
    pub geometry: serde_json::Value,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeatureProperties {
    #[serde(rename = "shapeName", default)]
    pub shape_name: String,
}

/// Source of boundary polygons for a level. District boundaries are not
/// published; the district view renders without a map.
pub fn boundary_url(level: Level) -> Option<&'static str> {
    match level {
        Level::Province => Some(ADM1_URL),
        Level::Municipality => Some(ADM2_URL),
        Level::District => None,
    }
}

pub async fn fetch_boundaries(
    client: &reqwest::Client,
    level: Level,
) -> Result<FeatureCollection, GeoError> {
    let url = boundary_url(level).ok_or(GeoError::NoBoundarySet(level))?;
    tracing::debug!(level = level.as_str(), url, "fetching boundary collection");
    let collection = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;
    Ok(collection)
}

/// Identifies one outstanding fetch: the level it was issued for and the
/// store generation at issue time. A response is only accepted while its
/// ticket is still current.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundaryTicket {
    level: Level,
    generation: u64,
}

impl BoundaryTicket {
    pub fn level(self) -> Level {
        self.level
    }
}

/// Level-keyed holder for the current boundary collection.
///
/// Switching level bumps the generation, which orphans any in-flight fetch:
/// if its result arrives after another switch, `complete` discards it
/// (last-write-wins by requester identity, not arrival order). Collections
/// are cached per level, so revisiting a level needs no refetch.
#[derive(Debug)]
pub struct BoundaryStore {
    level: Level,
    generation: u64,
    current: Option<FeatureCollection>,
    cache: HashMap<Level, FeatureCollection>,
}

impl BoundaryStore {
    pub fn new(level: Level) -> Self {
        Self {
            level,
            generation: 0,
            current: None,
            cache: HashMap::new(),
        }
    }

    pub fn level(&self) -> Level {
        self.level
    }

    /// Switch the view level. Returns a ticket when a fetch is needed, or
    /// `None` when the cache already covers the level (or it has no
    /// boundary set at all).
    pub fn set_level(&mut self, level: Level) -> Option<BoundaryTicket> {
        self.level = level;
        self.generation += 1;
        self.current = self.cache.get(&level).cloned();
        if self.current.is_some() || boundary_url(level).is_none() {
            None
        } else {
            Some(BoundaryTicket {
                level,
                generation: self.generation,
            })
        }
    }

    /// Deliver a fetched collection. The collection is cached for its level
    /// either way; it only becomes current when the ticket still matches the
    /// store's generation.
    pub fn complete(&mut self, ticket: BoundaryTicket, collection: FeatureCollection) -> bool {
        let fresh = ticket.generation == self.generation && ticket.level == self.level;
        self.cache.insert(ticket.level, collection.clone());
        if fresh {
            self.current = Some(collection);
        } else {
            tracing::warn!(
                requested = ticket.level.as_str(),
                current = self.level.as_str(),
                "discarding stale boundary response"
            );
        }
        fresh
    }

    /// The collection for the current level, if it has arrived. Rendering
    /// simply suspends while this is `None`.
    pub fn boundaries(&self) -> Option<&FeatureCollection> {
        self.current.as_ref()
    }
}
