//! Command line interface for the bookstore binary.
//!
//! Every flag has an environment variable fallback so deployments can be
//! configured through `.env` (loaded by `dotenvy` before parsing).

use clap::Parser;

/// Bookstore management system.
///
/// Runs the interactive console menu by default; pass `--web` to serve
/// the web dashboard instead. Both front ends share the same database.
#[derive(Parser, Debug)]
#[command(name = "bookstore", version, about)]
pub struct Cli {
    /// Path to the SQLite database file (created on first run)
    #[arg(long, env = "BOOKSTORE_DB", default_value = "bookstore.db")]
    pub db: String,

    /// Serve the web dashboard instead of the console menu
    #[arg(long)]
    pub web: bool,

    /// Listen address for the web dashboard
    #[arg(long, env = "BOOKSTORE_LISTEN", default_value = "127.0.0.1:8080")]
    pub listen: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["bookstore"]).unwrap();
        assert_eq!(cli.db, "bookstore.db");
        assert!(!cli.web);
        assert_eq!(cli.listen, "127.0.0.1:8080");
    }

    #[test]
    fn test_web_mode_with_custom_listen() {
        let cli =
            Cli::try_parse_from(["bookstore", "--web", "--listen", "0.0.0.0:9000"]).unwrap();
        assert!(cli.web);
        assert_eq!(cli.listen, "0.0.0.0:9000");
    }
}
