//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases
//! and help text.  No business logic lives here.

use clap::Parser;

pub mod global;
pub use global::GlobalArgs;

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name     = "portside",
    bin_name = "portside",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Greets someone, the hexagonal way",
    long_about = "Portside validates a name, renders a greeting and writes it \
                  through a statically bound output port.",
    after_help = "EXAMPLES:\n\
        \x20 portside Alice\n\
        \x20 portside -vv \"Ada Lovelace\"\n\
        \x20 NO_COLOR=1 portside ''",
)]
pub struct Cli {
    /// Flags available on every invocation.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Name of the person to greet.
    #[arg(value_name = "NAME", help = "Name to greet (1-100 characters)")]
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_name_and_flags() {
        let cli = Cli::try_parse_from(["portside", "-vv", "--no-color", "Alice"]).unwrap();
        assert_eq!(cli.name, "Alice");
        assert_eq!(cli.global.verbose, 2);
        assert!(cli.global.no_color);
    }

    #[test]
    fn empty_name_is_still_an_argument() {
        let cli = Cli::try_parse_from(["portside", ""]).unwrap();
        assert_eq!(cli.name, "");
    }

    #[test]
    fn missing_name_is_rejected() {
        assert!(Cli::try_parse_from(["portside"]).is_err());
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["portside", "-q", "-v", "Alice"]).is_err());
    }
}
