//! Roster – a small demonstration crate around a validated person register.
//!
//! Roster centers on the *person* concept: an immutable record of the form
//! `(name, age)` whose age is checked against a fixed range at construction,
//! so no out-of-range record ever comes into existence. Records are owned in
//! insertion order by a keeper structure (see the `construct` module), over
//! which a handful of one-pass operations are provided: order-preserving
//! filtering by a caller-supplied predicate, projection to names, stable
//! minimum-by-age selection, and a name→age lookup table.
//!
//! ## Modules
//! * [`construct`] – The [`construct::Person`] record, its age validation,
//!   and the [`construct::Roster`] keeper.
//! * [`greet`] – The [`greet::Greeter`], turning a greeting phrase and a
//!   name into greeting text.
//! * [`query`] – One-pass operations over kept persons: [`query::filter`],
//!   [`query::names`], [`query::youngest`], and the [`query::AgeLookup`]
//!   table.
//! * [`settings`] – Layered configuration (an optional `roster.toml` file
//!   plus `ROSTER_` environment variables) for the greeting phrase.
//! * [`error`] – The crate-wide error enum and `Result` alias.
//!
//! ## Validation
//! Construction is the only place where a record can go wrong: an age
//! outside `0..=120` yields [`error::RosterError::InvalidAge`] and no
//! [`construct::Person`] is produced. Everything downstream can therefore
//! assume every kept record is valid.
//!
//! ## Quick Start
//! ```
//! use roster::construct::{Person, Roster};
//! use roster::greet::Greeter;
//! use roster::query::{filter, youngest};
//! let greeter = Greeter::new(String::from("Hello"));
//! assert_eq!(greeter.say_hello("World"), "Hello, World!");
//! let mut roster = Roster::new();
//! roster.keep(Person::new(String::from("Alice"), 30).unwrap());
//! roster.keep(Person::new(String::from("Bob"), 25).unwrap());
//! let adults = filter(roster.persons(), |p| p.age() >= 30);
//! assert_eq!(adults.len(), 1);
//! assert_eq!(youngest(&roster).unwrap().name(), "Bob");
//! ```

pub mod construct;
pub mod error;
pub mod greet;
pub mod query;
pub mod settings;
