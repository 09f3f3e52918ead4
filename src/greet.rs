// used to print out a readable form of the greeter
use std::fmt;

/// Holds the greeting phrase for a run. The phrase is set once at
/// construction and immutable afterwards.
#[derive(Debug)]
pub struct Greeter {
    greeting: String,
}

impl Greeter {
    pub fn new(greeting: String) -> Self {
        Self { greeting }
    }
    pub fn greeting(&self) -> &str {
        &self.greeting
    }
    /// Produces `"<greeting>, <name>!"`. Total over its input, the empty
    /// name included.
    pub fn say_hello(&self, name: &str) -> String {
        format!("{}, {}!", self.greeting, name)
    }
}
impl fmt::Display for Greeter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Greeter({})", self.greeting)
    }
}
