use tracing::info;

use roster::construct::{Person, Roster};
use roster::error::Result;
use roster::greet::Greeter;
use roster::query::{filter, names, render_list, youngest, AgeLookup};
use roster::settings::Settings;

fn main() {
    // Log lines go to stderr so the demo output on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    if let Err(error) = run() {
        eprintln!("{error}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let settings = Settings::load()?;
    info!(greeting = %settings.greeting, "settings loaded");

    let greeter = Greeter::new(settings.greeting);
    println!("{}", greeter.say_hello("World"));

    let mut roster = Roster::new();
    roster.keep(Person::new(String::from("Alice"), 30)?);
    roster.keep(Person::new(String::from("Bob"), 25)?);
    roster.keep(Person::new(String::from("Charlie"), 35)?);
    info!(persons = roster.len(), "roster populated");

    let adults = filter(roster.persons(), |person| person.age() >= 30);
    println!("Adults: {}", render_list(&adults));

    println!("Names: {}", render_list(&names(&roster)));

    if let Some(person) = youngest(&roster) {
        println!("Youngest person: {}", person);
    }

    let lookup = AgeLookup::from_roster(&roster);
    info!(entries = lookup.len(), "lookup table built");
    println!("Name to age map: {}", lookup);

    Ok(())
}
