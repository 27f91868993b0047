use contest_score::config::{CategoryPoints, MultiplierKind, ScoringConfig};
use contest_score::counter::ScoreCounter;
use contest_score::mults::MultiplierTracker;
use contest_score::score::{BandScore, Score};
use contest_score::types::{Band, Contact, Continent, Entity};
use proptest::prelude::*;

fn config() -> ScoringConfig {
    ScoringConfig::new(
        CategoryPoints {
            same_country: 1,
            same_continent: 2,
            specific_country: 5,
            other: 3,
        },
        MultiplierKind::ALL,
        ["OE"],
    )
}

fn counter() -> ScoreCounter {
    let mut counter = ScoreCounter::new(config());
    counter.set_own_entity(Entity::new("DL", Continent::EU, 14, 28));
    counter
}

fn entity_strategy() -> impl Strategy<Value = Entity> {
    prop_oneof![
        Just(Entity::default()),
        (
            prop::sample::select(vec!["DL", "DF", "OE", "F", "K", "JA"]),
            prop::sample::select(vec![Continent::EU, Continent::NA, Continent::AS]),
            1u8..6,
            1u8..6,
        )
            .prop_map(|(prefix, continent, cq, itu)| Entity::new(prefix, continent, cq, itu)),
    ]
}

fn contact_strategy() -> impl Strategy<Value = Contact> {
    (
        prop::sample::select(Band::ALL.to_vec()),
        entity_strategy(),
    )
        .prop_map(|(band, entity)| Contact::new("N0CALL", band, entity))
}

fn assert_same_score(actual: &ScoreCounter, expected: &ScoreCounter) {
    assert_eq!(actual.score(), expected.score());
    assert!(actual.bands().all(|(_, score)| score.qsos() > 0));
}

#[test]
fn concrete_add_scenario() {
    let mut counter = counter();
    counter.add(&Contact::new(
        "DL1ABC",
        Band::B80,
        Entity::new("DL", Continent::EU, 14, 28),
    ));
    counter.add(&Contact::new(
        "DF2XYZ",
        Band::B80,
        Entity::new("DF", Continent::EU, 14, 28),
    ));

    for score in [counter.total(), counter.overall(), counter.band(Band::B80)] {
        assert_eq!(score.same_country_qsos, 1);
        assert_eq!(score.same_continent_qsos, 1);
        assert_eq!(score.cq_zones, 1);
        assert_eq!(score.itu_zones, 1);
        assert_eq!(score.prefixes, 2);
    }
}

#[test]
fn same_zone_on_same_band_is_credited_once() {
    let mut counter = counter();
    counter.add(&Contact::new("K1ZZ", Band::B20, Entity::new("K", Continent::NA, 5, 8)));
    counter.add(&Contact::new("W1AW", Band::B20, Entity::new("K", Continent::NA, 5, 8)));

    assert_eq!(counter.band(Band::B20).cq_zones, 1);
    assert_eq!(counter.overall().cq_zones, 1);
    assert_eq!(counter.total().other_qsos, 2);
}

proptest! {
    #[test]
    fn update_with_same_contact_leaves_totals(contacts in prop::collection::vec(contact_strategy(), 1..16)) {
        let mut counter = counter();
        for contact in &contacts {
            counter.add(contact);
        }
        let before = counter.score().clone();
        for contact in &contacts {
            counter.update(contact, contact);
        }
        prop_assert_eq!(counter.score(), &before);
    }

    #[test]
    fn update_matches_fresh_add(
        first in contact_strategy(),
        second in contact_strategy(),
    ) {
        prop_assume!(first.entity != second.entity);
        let mut updated = counter();
        updated.add(&first);
        updated.update(&first, &second);

        let mut fresh = counter();
        fresh.clear();
        fresh.add(&second);

        assert_same_score(&updated, &fresh);
    }

    #[test]
    fn order_does_not_matter(
        (contacts, shuffled) in prop::collection::vec(contact_strategy(), 0..24)
            .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle()))
    ) {
        let mut a = counter();
        for contact in &contacts {
            a.add(contact);
        }
        let mut b = counter();
        for contact in &shuffled {
            b.add(contact);
        }
        assert_same_score(&a, &b);

        let band_sum: BandScore = a.bands().map(|(_, score)| score).sum();
        prop_assert_eq!(band_sum, a.total());
    }

    #[test]
    fn removing_everything_returns_to_zero(
        contacts in prop::collection::vec(contact_strategy(), 0..24)
    ) {
        let mut counter = counter();
        for contact in &contacts {
            counter.add(contact);
        }
        for contact in contacts.iter().rev() {
            counter.remove(contact);
        }
        prop_assert_eq!(counter.score(), &Score::default());
        prop_assert_eq!(counter.bands().count(), 0);
    }

    #[test]
    fn tracker_counts_stay_non_negative(
        entities in prop::collection::vec(entity_strategy(), 0..24),
        keep in 0usize..24,
    ) {
        let mut tracker = MultiplierTracker::new(&config());
        for entity in &entities {
            tracker.adjust(1, entity);
        }
        let keep = keep.min(entities.len());
        for entity in &entities[keep..] {
            tracker.adjust(-1, entity);
        }
        for entity in &entities {
            for kind in MultiplierKind::ALL {
                prop_assert!(tracker.count(kind, entity) >= 0);
            }
        }
        for entity in &entities[..keep] {
            for kind in MultiplierKind::ALL {
                prop_assert!(tracker.count(kind, entity) > 0);
            }
        }
    }
}
