use crate::config::{MultiplierKind, ScoringConfig};
use crate::score::BandScore;
use crate::types::Entity;
use std::collections::HashMap;

// A key with count zero is not held. Counts are not clamped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultiplierTracker {
    enabled: Vec<MultiplierKind>,
    cq_zones: HashMap<u8, i32>,
    itu_zones: HashMap<u8, i32>,
    prefixes: HashMap<String, i32>,
}

impl MultiplierTracker {
    pub fn new(config: &ScoringConfig) -> Self {
        Self {
            enabled: config.multipliers.clone(),
            ..Self::default()
        }
    }

    pub fn adjust(&mut self, delta: i32, entity: &Entity) -> BandScore {
        let cq_zones = step(&mut self.cq_zones, entity.cq_zone, delta);
        let itu_zones = step(&mut self.itu_zones, entity.itu_zone, delta);
        let prefixes = step(&mut self.prefixes, entity.prefix.clone(), delta);

        let multis = self
            .enabled
            .iter()
            .map(|kind| match kind {
                MultiplierKind::CqZone => cq_zones,
                MultiplierKind::ItuZone => itu_zones,
                MultiplierKind::Dxcc => prefixes,
            })
            .sum();

        BandScore {
            cq_zones,
            itu_zones,
            prefixes,
            multis,
            ..BandScore::default()
        }
    }

    pub fn count(&self, kind: MultiplierKind, entity: &Entity) -> i32 {
        match kind {
            MultiplierKind::CqZone => self.cq_zones.get(&entity.cq_zone).copied(),
            MultiplierKind::ItuZone => self.itu_zones.get(&entity.itu_zone).copied(),
            MultiplierKind::Dxcc => self.prefixes.get(&entity.prefix).copied(),
        }
        .unwrap_or(0)
    }

    pub fn held(&self, kind: MultiplierKind) -> usize {
        match kind {
            MultiplierKind::CqZone => self.cq_zones.values().filter(|c| **c != 0).count(),
            MultiplierKind::ItuZone => self.itu_zones.values().filter(|c| **c != 0).count(),
            MultiplierKind::Dxcc => self.prefixes.values().filter(|c| **c != 0).count(),
        }
    }

    pub fn is_empty(&self) -> bool {
        MultiplierKind::ALL.into_iter().all(|kind| self.held(kind) == 0)
    }
}

fn step<K>(counts: &mut HashMap<K, i32>, key: K, delta: i32) -> i32
where
    K: Eq + std::hash::Hash,
{
    let count = counts.entry(key).or_insert(0);
    let before = *count;
    *count += delta;
    if before == 0 || *count == 0 {
        delta.signum()
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CategoryPoints;
    use crate::types::Continent;

    fn tracker(kinds: &[MultiplierKind]) -> MultiplierTracker {
        let config = ScoringConfig::new(
            CategoryPoints::default(),
            kinds.iter().copied(),
            Vec::<String>::new(),
        );
        MultiplierTracker::new(&config)
    }

    #[test]
    fn first_occurrence_gains_credit_in_every_dimension() {
        let mut tracker = tracker(&MultiplierKind::ALL);
        let dl = Entity::new("DL", Continent::EU, 14, 28);

        let delta = tracker.adjust(1, &dl);
        assert_eq!(delta.cq_zones, 1);
        assert_eq!(delta.itu_zones, 1);
        assert_eq!(delta.prefixes, 1);
        assert_eq!(delta.multis, 3);
        assert_eq!(delta.points, 0);
        assert_eq!(delta.qsos(), 0);

        assert!(tracker.adjust(1, &dl).is_zero());
        assert_eq!(tracker.count(MultiplierKind::CqZone, &dl), 2);
    }

    #[test]
    fn shared_zone_only_credits_new_prefix() {
        let mut tracker = tracker(&MultiplierKind::ALL);
        tracker.adjust(1, &Entity::new("DL", Continent::EU, 14, 28));

        let delta = tracker.adjust(1, &Entity::new("DF", Continent::EU, 14, 28));
        assert_eq!(delta.cq_zones, 0);
        assert_eq!(delta.itu_zones, 0);
        assert_eq!(delta.prefixes, 1);
        assert_eq!(delta.multis, 1);
    }

    #[test]
    fn disabled_dimensions_track_counts_without_contributing() {
        let mut tracker = tracker(&[MultiplierKind::CqZone]);
        let dl = Entity::new("DL", Continent::EU, 14, 28);

        let delta = tracker.adjust(1, &dl);
        assert_eq!(delta.prefixes, 1);
        assert_eq!(delta.itu_zones, 1);
        assert_eq!(delta.multis, 1);
        assert_eq!(tracker.count(MultiplierKind::Dxcc, &dl), 1);
    }

    #[test]
    fn last_removal_loses_credit() {
        let mut tracker = tracker(&MultiplierKind::ALL);
        let dl = Entity::new("DL", Continent::EU, 14, 28);
        tracker.adjust(1, &dl);
        tracker.adjust(1, &dl);

        assert!(tracker.adjust(-1, &dl).is_zero());
        let delta = tracker.adjust(-1, &dl);
        assert_eq!(delta.cq_zones, -1);
        assert_eq!(delta.itu_zones, -1);
        assert_eq!(delta.prefixes, -1);
        assert_eq!(delta.multis, -3);
        assert_eq!(tracker.count(MultiplierKind::CqZone, &dl), 0);
    }

    #[test]
    fn add_then_remove_restores_prior_holdings() {
        let mut tracker = tracker(&MultiplierKind::ALL);
        let dl = Entity::new("DL", Continent::EU, 14, 28);
        let k = Entity::new("K", Continent::NA, 5, 8);
        tracker.adjust(1, &dl);

        let added = tracker.adjust(1, &k);
        let removed = tracker.adjust(-1, &k);
        assert_eq!(removed, -added);
        assert_eq!(tracker.held(MultiplierKind::CqZone), 1);
        assert_eq!(tracker.held(MultiplierKind::Dxcc), 1);
        assert_eq!(tracker.count(MultiplierKind::Dxcc, &k), 0);
        assert_eq!(tracker.count(MultiplierKind::Dxcc, &dl), 1);

        tracker.adjust(-1, &dl);
        assert!(tracker.is_empty());
    }

    #[test]
    fn unmatched_removal_goes_negative() {
        let mut tracker = tracker(&MultiplierKind::ALL);
        let dl = Entity::new("DL", Continent::EU, 14, 28);

        let delta = tracker.adjust(-1, &dl);
        assert_eq!(delta.multis, -3);
        assert_eq!(tracker.count(MultiplierKind::CqZone, &dl), -1);
    }

    #[test]
    fn unresolved_entities_share_one_key() {
        let mut tracker = tracker(&MultiplierKind::ALL);
        let first = tracker.adjust(1, &Entity::default());
        let second = tracker.adjust(1, &Entity::default());
        assert_eq!(first.multis, 3);
        assert!(second.is_zero());
    }
}
