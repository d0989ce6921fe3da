use clap::{Parser, Subcommand, ValueEnum};
use satman::api::StatusFilter;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "satman", bin_name = "satman", version)]
#[command(about = "Manage candidate SAT results stored in a JSON file", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data file to use instead of the configured one
    #[arg(long, global = true, value_name = "FILE", help_heading = "Options")]
    pub data: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    All,
    Pass,
    Fail,
}

impl From<StatusArg> for StatusFilter {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::All => StatusFilter::All,
            StatusArg::Pass => StatusFilter::Passed,
            StatusArg::Fail => StatusFilter::Failed,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new candidate
    #[command(alias = "add", display_order = 1)]
    Insert {
        /// Candidate name (unique)
        #[arg(long)]
        name: String,

        #[arg(long, default_value = "")]
        address: String,

        #[arg(long, default_value = "")]
        city: String,

        #[arg(long, default_value = "")]
        country: String,

        /// Digits only, at least 3
        #[arg(long)]
        pincode: String,

        /// SAT score, 0 up to the max score
        #[arg(long, allow_negative_numbers = true)]
        score: i64,
    },

    /// Show one candidate's record
    #[command(alias = "get", display_order = 2)]
    Show { name: String },

    /// List candidates, optionally by pass/fail status
    #[command(alias = "ls", display_order = 3)]
    List {
        #[arg(long, value_enum, default_value_t = StatusArg::All)]
        status: StatusArg,

        /// Print records as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a candidate's rank and percentile
    #[command(display_order = 4)]
    Rank { name: String },

    /// Change a candidate's score
    #[command(display_order = 5)]
    Update {
        name: String,

        #[arg(allow_negative_numbers = true)]
        score: i64,
    },

    /// Delete a candidate's record
    #[command(alias = "rm", display_order = 6)]
    Delete {
        name: String,

        /// Skip confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Averages and pass rate
    #[command(display_order = 7)]
    Stats,

    /// Show or change the maximum score
    #[command(display_order = 8)]
    MaxScore {
        /// New maximum (if omitted, prints the current one)
        #[arg(allow_negative_numbers = true)]
        value: Option<f64>,
    },

    /// Write the data file now
    #[command(display_order = 9)]
    Save,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_insert() {
        let cli = Cli::try_parse_from([
            "satman", "insert", "--name", "Alice", "--pincode", "02101", "--score", "1350",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Insert {
                name, score, city, ..
            }) => {
                assert_eq!(name, "Alice");
                assert_eq!(score, 1350);
                assert_eq!(city, "");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn parses_negative_score_for_validation() {
        let cli = Cli::try_parse_from(["satman", "update", "Carl", "-5"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Update { score: -5, .. })
        ));
    }

    #[test]
    fn global_data_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["satman", "stats", "--data", "/tmp/x.json"]).unwrap();
        assert_eq!(cli.data, Some(PathBuf::from("/tmp/x.json")));
    }

    #[test]
    fn list_status_values() {
        let cli = Cli::try_parse_from(["satman", "list", "--status", "fail"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::List {
                status: StatusArg::Fail,
                json: false
            })
        ));
        assert!(Cli::try_parse_from(["satman", "list", "--status", "maybe"]).is_err());
    }
}
