use serde::Deserialize;

pub type RouterId = i64;
pub type LocationId = i64;

/// A network device: where it lives and which routers it links to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Router {
    pub id: RouterId,
    pub location_id: LocationId,
    // Older payloads call this field `links`.
    #[serde(default, alias = "links")]
    pub router_links: Vec<RouterId>,
}

/// A named physical site hosting routers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Location {
    pub id: LocationId,
    pub name: String,
}

/// The decoded API payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Dataset {
    pub routers: Vec<Router>,
    pub locations: Vec<Location>,
}

impl Dataset {
    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }
}
