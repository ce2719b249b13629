use crate::connections::ConnectionMap;

/// One `"<location> <-> <connected>"` line per map entry value. Each undirected
/// connection therefore shows up twice, once from each side.
pub fn report(map: &ConnectionMap) -> Vec<String> {
    map.iter()
        .flat_map(|(location, links)| {
            links
                .iter()
                .map(move |connected| format!("{location} <-> {connected}"))
        })
        .collect()
}
