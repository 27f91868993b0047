//! Country-entity lookup from a cty.dat country file.

use crate::types::{Continent, Entity};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::Chars;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CtyError {
    #[error("failed reading cty file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cty file contains no entities")]
    Empty,
}

/// Resolves callsigns to entities by exact match first, then longest prefix.
#[derive(Debug, Clone, Default)]
pub struct CtyResolver {
    exact: HashMap<String, Entity>,
    prefixes: Vec<(String, Entity)>,
}

impl CtyResolver {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CtyError> {
        let path_ref = path.as_ref();
        let raw = fs::read_to_string(path_ref).map_err(|source| CtyError::Read {
            path: path_ref.to_path_buf(),
            source,
        })?;
        let resolver = Self::parse(&raw);
        if resolver.is_empty() {
            return Err(CtyError::Empty);
        }
        tracing::debug!(
            exact = resolver.exact.len(),
            prefixes = resolver.prefixes.len(),
            "loaded cty file"
        );
        Ok(resolver)
    }

    pub fn parse(raw: &str) -> Self {
        let mut resolver = Self::default();
        let mut current: Option<Entity> = None;
        let mut alias_buf = String::new();

        for line in raw.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if is_header(line) {
                if let Some(entity) = current.as_ref() {
                    resolver.add_aliases(&alias_buf, entity);
                }
                alias_buf.clear();
                current = parse_header(line);
            } else {
                alias_buf.push_str(line);
                alias_buf.push(' ');
            }
        }
        if let Some(entity) = current.as_ref() {
            resolver.add_aliases(&alias_buf, entity);
        }

        resolver.prefixes.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
        resolver
    }

    pub fn is_empty(&self) -> bool {
        self.exact.is_empty() && self.prefixes.is_empty()
    }

    pub fn resolve(&self, call: &str) -> Option<Entity> {
        let c = call.trim().to_ascii_uppercase();
        if let Some(entity) = self.exact.get(&c) {
            return Some(entity.clone());
        }
        self.prefixes
            .iter()
            .find(|(prefix, _)| c.starts_with(prefix.as_str()))
            .map(|(_, entity)| entity.clone())
    }

    /// Like `resolve`, but unknown calls map to the unresolved entity.
    pub fn resolve_or_default(&self, call: &str) -> Entity {
        self.resolve(call).unwrap_or_else(|| {
            tracing::warn!(call, "callsign not found in cty data");
            Entity::default()
        })
    }

    fn add_aliases(&mut self, aliases: &str, entity: &Entity) {
        let aliases = aliases.trim().trim_end_matches(';');
        for alias in aliases.split(',') {
            let alias = alias.trim();
            if alias.is_empty() {
                continue;
            }
            let parsed = parse_alias(alias, entity);
            if parsed.base.is_empty() {
                continue;
            }
            if parsed.is_exact {
                self.exact.insert(parsed.base, parsed.entity);
            } else {
                self.prefixes.push((parsed.base, parsed.entity));
            }
        }
    }
}

fn is_header(line: &str) -> bool {
    line.matches(':').count() >= 7 && !line.ends_with(';') && !line.ends_with(',')
}

fn parse_header(line: &str) -> Option<Entity> {
    let parts: Vec<&str> = line.split(':').collect();
    if parts.len() < 8 {
        return None;
    }
    let cq_zone = parts[1].trim().parse().ok()?;
    let itu_zone = parts[2].trim().parse().ok()?;
    let continent = Continent::parse(parts[3])?;
    let prefix = parts[7].trim().trim_start_matches('*');
    if prefix.is_empty() {
        return None;
    }
    Some(Entity::new(prefix, continent, cq_zone, itu_zone))
}

struct Alias {
    base: String,
    is_exact: bool,
    entity: Entity,
}

// Alias syntax: `=` marks a full callsign, `(cq)` `[itu]` `{cont}` override
// the entity's zones or continent, `<lat/lon>` and `~utc~` are ignored.
fn parse_alias(alias: &str, entity: &Entity) -> Alias {
    let (s, is_exact) = match alias.strip_prefix('=') {
        Some(rest) => (rest, true),
        None => (alias, false),
    };
    let mut entity = entity.clone();
    let mut base = String::new();
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        match c {
            '(' => {
                if let Ok(zone) = take_until(&mut chars, ')').trim().parse() {
                    entity.cq_zone = zone;
                }
            }
            '[' => {
                if let Ok(zone) = take_until(&mut chars, ']').trim().parse() {
                    entity.itu_zone = zone;
                }
            }
            '{' => {
                if let Some(continent) = Continent::parse(&take_until(&mut chars, '}')) {
                    entity.continent = Some(continent);
                }
            }
            '<' => {
                take_until(&mut chars, '>');
            }
            '~' => {
                take_until(&mut chars, '~');
            }
            _ => base.push(c),
        }
    }
    Alias {
        base: base.trim().to_ascii_uppercase(),
        is_exact,
        entity,
    }
}

fn take_until(chars: &mut Chars<'_>, end: char) -> String {
    let mut out = String::new();
    for c in chars.by_ref() {
        if c == end {
            break;
        }
        out.push(c);
    }
    out
}
