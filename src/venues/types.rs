//! Venue record type

/// A venue returned by the places service.
///
/// Opaque record; the only field this crate interprets is [`distance_m`],
/// which the remote service computes relative to the query origin.
///
/// [`distance_m`]: Venue::distance_m
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Venue {
    /// Service-assigned venue identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Formatted address, if the service provided one.
    pub address: Option<String>,
    /// Distance from the query origin in meters.
    pub distance_m: u32,
}

/// Sort venues ascending by distance from the query origin.
///
/// Stable: venues at equal distance keep their relative order.
pub fn sort_by_distance(venues: &mut [Venue]) {
    venues.sort_by_key(|venue| venue.distance_m);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn venue(id: &str, distance_m: u32) -> Venue {
        Venue {
            id: id.to_string(),
            name: format!("Venue {id}"),
            address: None,
            distance_m,
        }
    }

    #[test]
    fn test_sort_by_distance_ascending() {
        let mut venues = vec![venue("a", 5), venue("b", 1), venue("c", 3)];
        sort_by_distance(&mut venues);

        let distances: Vec<u32> = venues.iter().map(|v| v.distance_m).collect();
        assert_eq!(distances, vec![1, 3, 5]);
    }

    #[test]
    fn test_sort_by_distance_is_stable() {
        // Equal distances keep their arrival order
        let mut venues = vec![
            venue("first", 10),
            venue("second", 10),
            venue("closer", 2),
            venue("third", 10),
        ];
        sort_by_distance(&mut venues);

        let ids: Vec<&str> = venues.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["closer", "first", "second", "third"]);
    }

    #[test]
    fn test_sort_by_distance_empty() {
        let mut venues: Vec<Venue> = Vec::new();
        sort_by_distance(&mut venues);
        assert!(venues.is_empty());
    }
}
