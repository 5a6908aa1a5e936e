use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// Placeholder title for a category whose title element is missing.
pub const UNKNOWN_TITLE: &str = "Unknown";

/// Selects which shape of nominee record the extractor produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractProfile {
    /// Emit the `image` key with the nominee thumbnail URL.
    pub include_image: bool,
    /// Split names containing a line break into `actor` and `movie`.
    pub split_actor_movie: bool,
}

impl ExtractProfile {
    pub const RICH: Self = Self {
        include_image: true,
        split_actor_movie: true,
    };
    pub const SIMPLE: Self = Self {
        include_image: false,
        split_actor_movie: false,
    };
}

impl Default for ExtractProfile {
    fn default() -> Self {
        Self::RICH
    }
}

/// One award category with its predicted nominees in page order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    #[serde(rename = "category")]
    pub title: String,
    #[serde(rename = "predictions")]
    pub nominees: Vec<Nominee>,
}

/// Keys are written as `position, image, odds, <identity>` when the image is
/// kept and `position, <identity>, odds` when the profile leaves it out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nominee {
    pub position: Option<String>,
    /// `None` when the profile leaves images out, `Some(None)` when the
    /// profile wants them but the markup has none (serialized as `null`).
    pub image: Option<Option<String>>,
    pub odds: Option<String>,
    pub identity: Identity,
}

impl Serialize for Nominee {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("position", &self.position)?;
        match &self.image {
            Some(image) => {
                map.serialize_entry("image", image)?;
                map.serialize_entry("odds", &self.odds)?;
                self.identity.serialize_entries(&mut map)?;
            }
            None => {
                self.identity.serialize_entries(&mut map)?;
                map.serialize_entry("odds", &self.odds)?;
            }
        }
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identity {
    /// Acting/writing style entry where the name cell holds `person\nwork`.
    Credit {
        actor: String,
        movie: Option<String>,
    },
    Named {
        name: Option<String>,
    },
}

impl Identity {
    fn serialize_entries<M: SerializeMap>(&self, map: &mut M) -> Result<(), M::Error> {
        match self {
            Identity::Credit { actor, movie } => {
                map.serialize_entry("actor", actor)?;
                map.serialize_entry("movie", movie)
            }
            Identity::Named { name } => map.serialize_entry("name", name),
        }
    }
}
