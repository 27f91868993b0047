use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Band {
    B160,
    B80,
    B60,
    B40,
    B30,
    B20,
    B17,
    B15,
    B12,
    B10,
    B6,
    B2,
}

impl Band {
    pub const ALL: [Band; 12] = [
        Band::B160,
        Band::B80,
        Band::B60,
        Band::B40,
        Band::B30,
        Band::B20,
        Band::B17,
        Band::B15,
        Band::B12,
        Band::B10,
        Band::B6,
        Band::B2,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::B160 => "160m",
            Self::B80 => "80m",
            Self::B60 => "60m",
            Self::B40 => "40m",
            Self::B30 => "30m",
            Self::B20 => "20m",
            Self::B17 => "17m",
            Self::B15 => "15m",
            Self::B12 => "12m",
            Self::B10 => "10m",
            Self::B6 => "6m",
            Self::B2 => "2m",
        }
    }

    /// Accepts "40m", "40M", "40" and the like.
    pub fn from_label(input: &str) -> Option<Self> {
        let digits: String = input
            .trim()
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect();
        Self::ALL
            .into_iter()
            .find(|band| band.label().trim_end_matches('m') == digits)
    }

    pub fn from_khz(khz: u32) -> Option<Self> {
        match khz {
            1800..=2000 => Some(Self::B160),
            3500..=4000 => Some(Self::B80),
            5330..=5410 => Some(Self::B60),
            7000..=7300 => Some(Self::B40),
            10100..=10150 => Some(Self::B30),
            14000..=14350 => Some(Self::B20),
            18068..=18168 => Some(Self::B17),
            21000..=21450 => Some(Self::B15),
            24890..=24990 => Some(Self::B12),
            28000..=29700 => Some(Self::B10),
            50000..=54000 => Some(Self::B6),
            144000..=148000 => Some(Self::B2),
            _ => None,
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Callsign(String);

impl Callsign {
    pub fn new(value: impl AsRef<str>) -> Self {
        Self(value.as_ref().trim().to_ascii_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Continent {
    NA,
    SA,
    EU,
    AF,
    AS,
    OC,
    AN,
}

impl Continent {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_uppercase().as_str() {
            "NA" => Some(Self::NA),
            "SA" => Some(Self::SA),
            "EU" => Some(Self::EU),
            "AF" => Some(Self::AF),
            "AS" => Some(Self::AS),
            "OC" => Some(Self::OC),
            "AN" => Some(Self::AN),
            _ => None,
        }
    }
}

/// `Entity::default()` is the unresolved entity. It is a valid input and scores as "other".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entity {
    pub prefix: String,
    pub continent: Option<Continent>,
    pub cq_zone: u8,
    pub itu_zone: u8,
}

impl Entity {
    pub fn new(prefix: impl AsRef<str>, continent: Continent, cq_zone: u8, itu_zone: u8) -> Self {
        Self {
            prefix: prefix.as_ref().trim().to_ascii_uppercase(),
            continent: Some(continent),
            cq_zone,
            itu_zone,
        }
    }

    pub fn is_unresolved(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub call: Callsign,
    pub band: Band,
    pub entity: Entity,
}

impl Contact {
    pub fn new(call: impl AsRef<str>, band: Band, entity: Entity) -> Self {
        Self {
            call: Callsign::new(call),
            band,
            entity,
        }
    }
}
