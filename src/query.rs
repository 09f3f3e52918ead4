//! One-pass operations over kept persons: predicate filtering, name
//! projection, stable minimum-by-age selection, and the name→age lookup
//! table. Every operation visits its input exactly once, in kept order,
//! without mutating it.

use std::collections::HashMap;
use std::fmt;

use crate::construct::{NameHasher, Person, Roster};

// ------------- Filtering -------------
/// Keeps exactly the items the predicate holds for, preserving their
/// relative order. An empty input or an always-false predicate yields an
/// empty result.
pub fn filter<'a, T, P>(items: &'a [T], predicate: P) -> Vec<&'a T>
where
    P: Fn(&T) -> bool,
{
    let mut result = Vec::new();
    for item in items {
        if predicate(item) {
            result.push(item);
        }
    }
    result
}

// ------------- Projections -------------
/// The kept names, in roster order.
pub fn names(roster: &Roster) -> Vec<String> {
    roster.iter().map(|person| person.name().to_owned()).collect()
}

/// The person with the lowest age, `None` for an empty roster. Selection
/// is stable: on equal ages the first kept person wins.
pub fn youngest(roster: &Roster) -> Option<&Person> {
    let mut youngest: Option<&Person> = None;
    for person in roster.iter() {
        match youngest {
            Some(found) if person.age() < found.age() => youngest = Some(person),
            None => youngest = Some(person),
            _ => (),
        }
    }
    youngest
}

/// Renders a sequence the way the demo prints it: `[a, b, c]`.
pub fn render_list<T: fmt::Display>(items: &[T]) -> String {
    let rendered: Vec<String> = items.iter().map(|item| item.to_string()).collect();
    format!("[{}]", rendered.join(", "))
}

// ------------- AgeLookup -------------
/// A name→age table built once from a roster. Keeping a later person
/// under an already kept name overwrites the earlier age. Entry order is
/// not part of the contract.
#[derive(Debug)]
pub struct AgeLookup {
    kept: HashMap<String, i64, NameHasher>,
}
impl AgeLookup {
    pub fn from_roster(roster: &Roster) -> Self {
        let mut kept: HashMap<String, i64, NameHasher> = HashMap::default();
        for person in roster.iter() {
            kept.insert(person.name().to_owned(), person.age());
        }
        Self { kept }
    }
    pub fn get(&self, name: &str) -> Option<i64> {
        self.kept.get(name).copied()
    }
    pub fn len(&self) -> usize {
        self.kept.len()
    }
    pub fn is_empty(&self) -> bool {
        self.kept.is_empty()
    }
}
impl fmt::Display for AgeLookup {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let entries: Vec<String> = self
            .kept
            .iter()
            .map(|(name, age)| format!("{}={}", name, age))
            .collect();
        write!(f, "{{{}}}", entries.join(", "))
    }
}
