use crate::config::ScoringConfig;
use crate::types::{Band, Entity};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    SpecificCountry,
    SameCountry,
    SameContinent,
    Other,
}

pub fn categorize(config: &ScoringConfig, own: Option<&Entity>, entity: &Entity) -> Category {
    if config.is_specific_country(&entity.prefix) {
        return Category::SpecificCountry;
    }
    let Some(own) = own else {
        return Category::Other;
    };
    if !entity.prefix.is_empty() && entity.prefix == own.prefix {
        Category::SameCountry
    } else if entity.continent.is_some() && entity.continent == own.continent {
        Category::SameContinent
    } else {
        Category::Other
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandScore {
    pub specific_country_qsos: i32,
    pub same_country_qsos: i32,
    pub same_continent_qsos: i32,
    pub other_qsos: i32,
    pub points: i64,
    pub cq_zones: i32,
    pub itu_zones: i32,
    pub prefixes: i32,
    pub multis: i32,
}

impl BandScore {
    pub fn for_category(category: Category, config: &ScoringConfig, delta: i32) -> Self {
        let mut score = Self::default();
        let points = match category {
            Category::SpecificCountry => {
                score.specific_country_qsos = delta;
                config.points.specific_country
            }
            Category::SameCountry => {
                score.same_country_qsos = delta;
                config.points.same_country
            }
            Category::SameContinent => {
                score.same_continent_qsos = delta;
                config.points.same_continent
            }
            Category::Other => {
                score.other_qsos = delta;
                config.points.other
            }
        };
        score.points = points * i64::from(delta);
        score
    }

    pub fn qsos(&self) -> i32 {
        self.specific_country_qsos
            + self.same_country_qsos
            + self.same_continent_qsos
            + self.other_qsos
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

impl Add for BandScore {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            specific_country_qsos: self.specific_country_qsos + other.specific_country_qsos,
            same_country_qsos: self.same_country_qsos + other.same_country_qsos,
            same_continent_qsos: self.same_continent_qsos + other.same_continent_qsos,
            other_qsos: self.other_qsos + other.other_qsos,
            points: self.points + other.points,
            cq_zones: self.cq_zones + other.cq_zones,
            itu_zones: self.itu_zones + other.itu_zones,
            prefixes: self.prefixes + other.prefixes,
            multis: self.multis + other.multis,
        }
    }
}

impl AddAssign for BandScore {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Neg for BandScore {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            specific_country_qsos: -self.specific_country_qsos,
            same_country_qsos: -self.same_country_qsos,
            same_continent_qsos: -self.same_continent_qsos,
            other_qsos: -self.other_qsos,
            points: -self.points,
            cq_zones: -self.cq_zones,
            itu_zones: -self.itu_zones,
            prefixes: -self.prefixes,
            multis: -self.multis,
        }
    }
}

impl Sum for BandScore {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

// `total` carries band multiplier credits, `overall` the overall ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub total: BandScore,
    pub overall: BandScore,
    pub bands: BTreeMap<Band, BandScore>,
}

impl Score {
    pub fn band(&self, band: Band) -> BandScore {
        self.bands.get(&band).copied().unwrap_or_default()
    }

    pub(crate) fn band_mut(&mut self, band: Band) -> &mut BandScore {
        self.bands.entry(band).or_default()
    }
}
