// fast hashing for maps keyed by names
use core::hash::BuildHasherDefault;
use seahash::SeaHasher;

// used to print out readable forms of a construct
use std::fmt;

use crate::error::{Result, RosterError};

pub type NameHasher = BuildHasherDefault<SeaHasher>;

// ------------- Age validation -------------
pub const MAX_AGE: i64 = 120;

// Callable before any record exists.
pub fn is_valid_age(age: i64) -> bool {
    age >= 0 && age <= MAX_AGE
}

// ------------- Person -------------
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Person {
    name: String,
    age: i64,
}

impl Person {
    /// Builds a record, rejecting ages outside `0..=MAX_AGE` with
    /// [`RosterError::InvalidAge`]. A rejected record is never observable
    /// in a partially constructed state.
    pub fn new(name: String, age: i64) -> Result<Self> {
        if !is_valid_age(age) {
            return Err(RosterError::InvalidAge(age));
        }
        Ok(Self { name, age })
    }
    // A kept record never changes after construction, so only getters
    // are exposed.
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn age(&self) -> i64 {
        self.age
    }
}
impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Person{{name='{}', age={}}}", self.name, self.age)
    }
}

// ------------- Roster -------------
/// Owns its persons exclusively and preserves the order in which they
/// were kept. Relative order is what the one-pass operations in the
/// `query` module rely on.
#[derive(Debug, Default)]
pub struct Roster {
    kept: Vec<Person>,
}
impl Roster {
    pub fn new() -> Self {
        Self { kept: Vec::new() }
    }
    pub fn keep(&mut self, person: Person) {
        self.kept.push(person);
    }
    pub fn persons(&self) -> &[Person] {
        &self.kept
    }
    pub fn iter(&self) -> std::slice::Iter<'_, Person> {
        self.kept.iter()
    }
    pub fn len(&self) -> usize {
        self.kept.len()
    }
    pub fn is_empty(&self) -> bool {
        self.kept.is_empty()
    }
}
