use crate::config::ScoringConfig;
use crate::mults::MultiplierTracker;
use crate::score::{BandScore, Score, categorize};
use crate::types::{Band, Contact, Entity};
use std::collections::HashMap;

pub trait ScoreListener {
    fn score_updated(&mut self, score: &Score);
}

impl<F> ScoreListener for F
where
    F: FnMut(&Score),
{
    fn score_updated(&mut self, score: &Score) {
        self(score)
    }
}

/// Listeners are notified in registration order. Contacts are not stored, so
/// callers must only remove or update contacts they added.
pub struct ScoreCounter {
    config: ScoringConfig,
    own_entity: Option<Entity>,
    score: Score,
    overall_mults: MultiplierTracker,
    band_mults: HashMap<Band, MultiplierTracker>,
    listeners: Vec<Box<dyn ScoreListener>>,
}

impl ScoreCounter {
    pub fn new(config: ScoringConfig) -> Self {
        let overall_mults = MultiplierTracker::new(&config);
        Self {
            config,
            own_entity: None,
            score: Score::default(),
            overall_mults,
            band_mults: HashMap::new(),
            listeners: Vec::new(),
        }
    }

    /// Contacts already scored keep the category they were added with, so a
    /// later `update` or `remove` of them subtracts under the new entity.
    /// Set this before the first `add`.
    pub fn set_own_entity(&mut self, entity: Entity) {
        if self.score.total.qsos() != 0 {
            tracing::warn!(
                qsos = self.score.total.qsos(),
                prefix = entity.prefix.as_str(),
                "own entity changed after contacts were scored"
            );
        }
        self.own_entity = Some(entity);
    }

    pub fn own_entity(&self) -> Option<&Entity> {
        self.own_entity.as_ref()
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn add_listener(&mut self, listener: impl ScoreListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn add(&mut self, contact: &Contact) {
        self.apply(1, contact);
        self.emit();
    }

    /// Re-scores a contact whose entity changed. Edits that keep the entity
    /// (call or band only) leave the score untouched and are not broadcast.
    pub fn update(&mut self, old: &Contact, new: &Contact) {
        if old.entity == new.entity {
            tracing::trace!(call = new.call.as_str(), "entity unchanged, skipping rescore");
            return;
        }
        self.apply(-1, old);
        self.apply(1, new);
        self.emit();
    }

    pub fn remove(&mut self, contact: &Contact) {
        self.apply(-1, contact);
        self.emit();
    }

    pub fn clear(&mut self) {
        self.score = Score::default();
        self.overall_mults = MultiplierTracker::new(&self.config);
        self.band_mults.clear();
        tracing::info!("score cleared");
        self.emit();
    }

    pub fn reconfigure(&mut self, config: ScoringConfig) {
        self.config = config;
        self.clear();
    }

    pub fn score(&self) -> &Score {
        &self.score
    }

    pub fn total(&self) -> BandScore {
        self.score.total
    }

    pub fn overall(&self) -> BandScore {
        self.score.overall
    }

    pub fn band(&self, band: Band) -> BandScore {
        self.score.band(band)
    }

    pub fn bands(&self) -> impl Iterator<Item = (Band, BandScore)> + '_ {
        self.score.bands.iter().map(|(band, score)| (*band, *score))
    }

    // Category points land in total, overall and the band; band multiplier
    // credits in total and the band; overall credits in overall only.
    fn apply(&mut self, delta: i32, contact: &Contact) {
        let category = categorize(&self.config, self.own_entity.as_ref(), &contact.entity);
        let category_delta = BandScore::for_category(category, &self.config, delta);

        let band_mults = self
            .band_mults
            .entry(contact.band)
            .or_insert_with(|| MultiplierTracker::new(&self.config))
            .adjust(delta, &contact.entity);
        let overall_mults = self.overall_mults.adjust(delta, &contact.entity);

        if band_mults.multis != 0 || overall_mults.multis != 0 {
            tracing::debug!(
                call = contact.call.as_str(),
                band = %contact.band,
                band_multis = band_mults.multis,
                overall_multis = overall_mults.multis,
                "multiplier credit changed"
            );
        }

        self.score.total += category_delta + band_mults;
        self.score.overall += category_delta + overall_mults;
        let band_score = self.score.band_mut(contact.band);
        *band_score += category_delta + band_mults;

        // Only bands holding at least one contact stay in the map.
        if band_score.qsos() == 0 {
            self.score.bands.remove(&contact.band);
        }
        if self
            .band_mults
            .get(&contact.band)
            .is_some_and(MultiplierTracker::is_empty)
        {
            self.band_mults.remove(&contact.band);
        }
    }

    fn emit(&mut self) {
        let snapshot = self.score.clone();
        for listener in &mut self.listeners {
            listener.score_updated(&snapshot);
        }
    }
}
