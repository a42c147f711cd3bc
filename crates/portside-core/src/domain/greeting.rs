//! Greeting text derived from a validated name.

use std::fmt;

use crate::domain::PersonName;

/// The rendered greeting for one person. Building it cannot fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greeting(String);

impl Greeting {
    pub fn for_name(name: &PersonName) -> Self {
        Self(format!("Hello, {}!", name.as_str()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Greeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greets_by_name() {
        let name = PersonName::parse("Alice").unwrap();
        assert_eq!(Greeting::for_name(&name).as_str(), "Hello, Alice!");
    }

    #[test]
    fn keeps_name_verbatim() {
        let name = PersonName::parse("  Zoë O'Neil ").unwrap();
        assert_eq!(Greeting::for_name(&name).to_string(), "Hello,   Zoë O'Neil !");
    }
}
