// src/domain/registry.rs

use crate::domain::ids::IdGenerator;
use std::collections::HashMap;

/// Outcome of looking up a natural key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    /// First sighting in this run; the caller must insert the reference row.
    New(String),
    /// Already inserted earlier in this run.
    Seen(String),
}

impl Resolved {
    pub fn id(&self) -> &str {
        match self {
            Resolved::New(id) | Resolved::Seen(id) => id,
        }
    }

    pub fn is_new(&self) -> bool {
        matches!(self, Resolved::New(_))
    }
}

/// Natural key to surrogate id for each reference entity, for one load run.
///
/// Nothing is evicted: memory grows with the number of distinct manufacturers,
/// (model, year) pairs and (state, region) pairs, which is assumed to be small
/// next to the listing count.
#[derive(Debug, Default)]
pub struct EntityRegistry {
    manufacturers: HashMap<String, String>,
    models: HashMap<(String, i64), String>,
    locations: HashMap<(String, String), String>,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn manufacturer<G: IdGenerator>(&mut self, name: &str, ids: &mut G) -> Resolved {
        if let Some(id) = self.manufacturers.get(name) {
            return Resolved::Seen(id.clone());
        }
        let id = ids.next_id();
        self.manufacturers.insert(name.to_string(), id.clone());
        Resolved::New(id)
    }

    pub fn model<G: IdGenerator>(&mut self, name: &str, year: i64, ids: &mut G) -> Resolved {
        resolve(&mut self.models, (name.to_string(), year), ids)
    }

    pub fn location<G: IdGenerator>(&mut self, state: &str, region: &str, ids: &mut G) -> Resolved {
        resolve(
            &mut self.locations,
            (state.to_string(), region.to_string()),
            ids,
        )
    }

    pub fn manufacturer_count(&self) -> usize {
        self.manufacturers.len()
    }

    pub fn model_count(&self) -> usize {
        self.models.len()
    }

    pub fn location_count(&self) -> usize {
        self.locations.len()
    }
}

fn resolve<K, G>(map: &mut HashMap<K, String>, key: K, ids: &mut G) -> Resolved
where
    K: std::hash::Hash + Eq,
    G: IdGenerator,
{
    match map.entry(key) {
        std::collections::hash_map::Entry::Occupied(e) => Resolved::Seen(e.get().clone()),
        std::collections::hash_map::Entry::Vacant(e) => {
            let id = ids.next_id();
            e.insert(id.clone());
            Resolved::New(id)
        }
    }
}
