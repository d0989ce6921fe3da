use super::render::{
    print_messages, render_candidate, render_rank, render_records_json, render_store_json,
    render_summary, render_table,
};
use super::setup::{Cli, Commands, StatusArg};
use clap::Parser;
use directories::ProjectDirs;
use satman::api::{SatApi, StatusFilter};
use satman::config::SatConfig;
use satman::error::{Result, SatError};
use satman::model::NewCandidate;
use satman::store::fs_backend::FsBackend;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const HOME_ENV: &str = "SATMAN_HOME";

struct AppContext {
    api: SatApi<FsBackend>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Insert {
            name,
            address,
            city,
            country,
            pincode,
            score,
        }) => {
            let candidate = NewCandidate::new(
                name.trim(),
                address.trim(),
                city.trim(),
                country.trim(),
                pincode.trim(),
                score,
            );
            handle_insert(&mut ctx, candidate)
        }
        Some(Commands::Show { name }) => handle_show(&ctx, name.trim()),
        Some(Commands::List { status, json }) => handle_list(&ctx, status, json),
        Some(Commands::Rank { name }) => handle_rank(&ctx, name.trim()),
        Some(Commands::Update { name, score }) => handle_update(&mut ctx, name.trim(), score),
        Some(Commands::Delete { name, yes }) => handle_delete(&mut ctx, name.trim(), yes),
        Some(Commands::Stats) => handle_stats(&ctx),
        Some(Commands::MaxScore { value }) => handle_max_score(&mut ctx, value),
        Some(Commands::Save) => handle_save(&ctx),
        None => handle_list(&ctx, StatusArg::All, false),
    }
}

/// Extra guidance printed under an error, if there is any to give.
pub fn error_hint(err: &SatError) -> Option<String> {
    match err {
        SatError::NotFound { suggestions, .. } if !suggestions.is_empty() => {
            Some(format!("Did you mean: {}", suggestions.join(", ")))
        }
        e if e.is_persistence() => Some("No changes were saved.".to_string()),
        _ => None,
    }
}

/// Logs go to stderr so command output stays pipeable. `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "satman=debug" } else { "satman=error" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "satman", "satman")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| SatError::Store("Could not determine a data directory".to_string()))
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let (data_path, config) = match &cli.data {
        Some(path) => (path.clone(), SatConfig::default()),
        None => {
            let dir = data_dir()?;
            let config = SatConfig::load(&dir)?;
            (config.data_path(&dir), config)
        }
    };
    tracing::debug!(path = %data_path.display(), "using data file");

    let (api, opened) = SatApi::open(FsBackend::new(data_path), config.default_max_score)?;
    print_messages(&opened.messages);

    Ok(AppContext { api })
}

fn handle_insert(ctx: &mut AppContext, candidate: NewCandidate) -> Result<()> {
    let result = ctx.api.insert(candidate)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &AppContext, name: &str) -> Result<()> {
    let result = ctx.api.show(name)?;
    for candidate in &result.listed {
        print!("{}", render_candidate(candidate));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext, status: StatusArg, json: bool) -> Result<()> {
    let filter = StatusFilter::from(status);
    let result = ctx.api.list(filter)?;

    if json {
        let out = match filter {
            StatusFilter::All => render_store_json(ctx.api.roster().max_score(), &result.listed)?,
            _ => render_records_json(&result.listed)?,
        };
        println!("{}", out);
        return Ok(());
    }

    if !result.listed.is_empty() {
        print!("{}", render_table(&result.listed));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_rank(ctx: &AppContext, name: &str) -> Result<()> {
    let result = ctx.api.rank(name)?;
    if let Some(rank) = &result.rank {
        print!("{}", render_rank(rank));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_update(ctx: &mut AppContext, name: &str, score: i64) -> Result<()> {
    let result = ctx.api.update_score(name, score)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, name: &str, yes: bool) -> Result<()> {
    // Resolve first so a typo fails before the prompt
    let shown = ctx.api.show(name)?;
    if !yes {
        for candidate in &shown.listed {
            print!("{}", render_candidate(candidate));
        }
        if !confirm(&format!("DELETE {}", name))? {
            println!("Deletion cancelled. Exact confirmation required.");
            return Ok(());
        }
    }

    let result = ctx.api.delete(name)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_stats(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.stats();
    if let Some(summary) = &result.summary {
        print!("{}", render_summary(summary));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_max_score(ctx: &mut AppContext, value: Option<f64>) -> Result<()> {
    let result = match value {
        Some(new_max) => ctx.api.set_max_score(new_max)?,
        None => ctx.api.max_score(),
    };
    print_messages(&result.messages);
    Ok(())
}

fn handle_save(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.save()?;
    print_messages(&result.messages);
    Ok(())
}

/// Asks for `expected` to be typed back exactly.
fn confirm(expected: &str) -> Result<bool> {
    print!("Type '{}' to confirm deletion: ", expected);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim() == expected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hint_lists_suggestions() {
        let err = SatError::NotFound {
            name: "ali".into(),
            suggestions: vec!["Alice".into(), "Alina".into()],
        };
        assert_eq!(error_hint(&err).as_deref(), Some("Did you mean: Alice, Alina"));
    }

    #[test]
    fn no_hint_without_suggestions() {
        let err = SatError::NotFound {
            name: "zzz".into(),
            suggestions: vec![],
        };
        assert_eq!(error_hint(&err), None);
        assert_eq!(error_hint(&SatError::DuplicateName("Bob".into())), None);
    }

    #[test]
    fn persistence_errors_say_nothing_was_saved() {
        let err = SatError::Store("disk full".into());
        assert_eq!(error_hint(&err).as_deref(), Some("No changes were saved."));
    }
}
