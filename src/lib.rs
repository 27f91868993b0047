//! Incremental contest scoring for amateur-radio logs.
//!
//! [`counter::ScoreCounter`] turns a stream of add/update/remove events over
//! logged contacts into running point totals and multiplier credits, overall
//! and per band, without replaying the log.
//!
//! ```
//! use contest_score::{
//!     config::{CategoryPoints, MultiplierKind, ScoringConfig},
//!     counter::ScoreCounter,
//!     types::{Band, Contact, Continent, Entity},
//! };
//!
//! let config = ScoringConfig::new(
//!     CategoryPoints { same_country: 1, same_continent: 2, specific_country: 0, other: 3 },
//!     [MultiplierKind::CqZone, MultiplierKind::Dxcc],
//!     Vec::<String>::new(),
//! );
//! let mut counter = ScoreCounter::new(config);
//! counter.set_own_entity(Entity::new("DL", Continent::EU, 14, 28));
//! counter.add(&Contact::new("K1ZZ", Band::B20, Entity::new("K", Continent::NA, 5, 8)));
//!
//! assert_eq!(counter.total().points, 3);
//! assert_eq!(counter.overall().multis, 2);
//! ```

pub mod config;
pub mod counter;
pub mod cty;
pub mod mults;
pub mod score;
pub mod types;
