//! Location-level adjacency derived from router links.

use std::collections::HashMap;

use indexmap::IndexMap;
use tracing::debug;

use crate::error::{AnalyzerError, Result};
use crate::types::{Dataset, LocationId, Router, RouterId};

/// Location name -> distinct connected location names.
///
/// Keys iterate in the order they were first seen, values in the order each
/// connection was first recorded. Always symmetric, never self-referencing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionMap {
    entries: IndexMap<String, Vec<String>>,
}

impl ConnectionMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, location: &str) -> bool {
        self.entries.contains_key(location)
    }

    pub fn get(&self, location: &str) -> Option<&[String]> {
        self.entries.get(location).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, links)| (name.as_str(), links.as_slice()))
    }

    /// Number of undirected connections.
    pub fn connection_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum::<usize>() / 2
    }

    fn slot(&mut self, location: &str) -> usize {
        match self.entries.get_index_of(location) {
            Some(i) => i,
            None => self.entries.insert_full(location.to_string(), Vec::new()).0,
        }
    }

    /// Records `a <-> b`. Both names become keys even when `a == b`, but a
    /// location is never connected to itself.
    pub fn add_connection(&mut self, a: &str, b: &str) {
        let ia = self.slot(a);
        let ib = self.slot(b);
        if ia == ib {
            return;
        }
        if !self.entries[ia].iter().any(|n| n == b) {
            self.entries[ia].push(b.to_string());
        }
        if !self.entries[ib].iter().any(|n| n == a) {
            self.entries[ib].push(a.to_string());
        }
    }
}

/// Resolves router links to location names. Lookup tables are built once per
/// dataset; on duplicate ids the first record wins.
pub struct ConnectionBuilder<'a> {
    routers: &'a [Router],
    router_by_id: HashMap<RouterId, &'a Router>,
    location_name_by_id: HashMap<LocationId, &'a str>,
}

impl<'a> ConnectionBuilder<'a> {
    pub fn new(data: &'a Dataset) -> Self {
        let mut router_by_id = HashMap::with_capacity(data.routers.len());
        for r in &data.routers {
            router_by_id.entry(r.id).or_insert(r);
        }
        let mut location_name_by_id = HashMap::with_capacity(data.locations.len());
        for loc in &data.locations {
            location_name_by_id
                .entry(loc.id)
                .or_insert(loc.name.as_str());
        }
        Self {
            routers: &data.routers,
            router_by_id,
            location_name_by_id,
        }
    }

    fn location_name(&self, router: &Router) -> Result<&'a str> {
        self.location_name_by_id
            .get(&router.location_id)
            .copied()
            .ok_or_else(|| AnalyzerError::UnknownLocation {
                router_id: router.id,
                location_id: router.location_id,
            })
    }

    fn linked_router(&self, router: &Router, linked_id: RouterId) -> Result<&'a Router> {
        self.router_by_id
            .get(&linked_id)
            .copied()
            .ok_or_else(|| AnalyzerError::UnknownRouter {
                router_id: router.id,
                linked_id,
            })
    }

    /// Walks routers and their links in payload order. Any unresolved id
    /// aborts the whole build.
    pub fn build(&self) -> Result<ConnectionMap> {
        let mut map = ConnectionMap::new();
        for router in self.routers {
            let source = self.location_name(router)?;
            for &linked_id in &router.router_links {
                let linked = self.linked_router(router, linked_id)?;
                let target = self.location_name(linked)?;
                map.add_connection(source, target);
            }
        }
        debug!(
            locations = map.len(),
            connections = map.connection_count(),
            "built connection map"
        );
        Ok(map)
    }
}

pub fn build(data: &Dataset) -> Result<ConnectionMap> {
    ConnectionBuilder::new(data).build()
}
