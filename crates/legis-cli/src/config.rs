use clap::{Parser, Subcommand};
use legis_core::config::{
    CLIENT_ID_ENV, CLIENT_SECRET_ENV, DEFAULT_BASE_URL, DEFAULT_OAUTH_URL,
};

/// CLI configuration parsed from command line arguments and environment variables
#[derive(Parser, Debug)]
#[command(name = "legis")]
#[command(author, version, about = "Search French legal texts on Legifrance")]
#[command(after_help = "Examples:
  legis                                  # check authentication and search
  legis question \"Un enfant peut-il être commerçant ?\"
  legis article \"Code civil\" 1128
  legis case-law \"licenciement économique\" --json")]
pub struct Config {
    /// OAuth client identifier issued by PISTE
    #[arg(long, env = CLIENT_ID_ENV, hide_env_values = true)]
    pub client_id: String,

    /// OAuth client secret issued by PISTE
    #[arg(long, env = CLIENT_SECRET_ENV, hide_env_values = true)]
    pub client_secret: String,

    /// Base URL of the Legifrance engine
    #[arg(long, env = "LEGIFRANCE_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// OAuth token endpoint
    #[arg(long, env = "LEGIFRANCE_OAUTH_URL", default_value = DEFAULT_OAUTH_URL)]
    pub oauth_url: String,

    /// Print extracted results as JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Command to run; defaults to a connectivity check
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available CLI commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Authenticate and run a one-result search to check connectivity
    Ping,
    /// Search law articles relevant to a legal question
    Question {
        /// Question in natural language
        question: String,
    },
    /// Look up an article of a code by number
    Article {
        /// Code name, e.g. "Code civil"
        code: String,
        /// Article number, e.g. 1128
        number: String,
    },
    /// Search case law on a theme, most recent first
    CaseLaw {
        /// Theme to search for
        theme: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Config {
        let mut full = vec!["legis", "--client-id", "id", "--client-secret", "secret"];
        full.extend_from_slice(args);
        Config::try_parse_from(full).unwrap()
    }

    #[test]
    fn test_no_subcommand_defaults_to_none() {
        let config = parse(&[]);
        assert!(config.command.is_none());
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.oauth_url, DEFAULT_OAUTH_URL);
        assert!(!config.json);
    }

    #[test]
    fn test_article_command() {
        let config = parse(&["article", "Code civil", "1128"]);
        assert_eq!(
            config.command,
            Some(Command::Article {
                code: "Code civil".to_string(),
                number: "1128".to_string(),
            })
        );
    }

    #[test]
    fn test_case_law_with_json_flag() {
        let config = parse(&["case-law", "licenciement", "--json"]);
        assert!(config.json);
        assert_eq!(
            config.command,
            Some(Command::CaseLaw {
                theme: "licenciement".to_string()
            })
        );
    }

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Config::command().debug_assert();
    }
}
