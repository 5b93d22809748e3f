use std::path::Path;

use blogrank::{
    Corpus,
    DataDir,
    Query,
    cli::{Cli, Command, SearchArgs, StatusArgs},
    error,
    search,
};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if let Ok(env) = std::env::var("BLOGRANK_LOG") {
        EnvFilter::new(env)
    } else if quiet {
        EnvFilter::new("warn")
    } else {
        match verbose {
            0 => EnvFilter::new("info"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn main() -> error::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    if let Command::Completions(args) = &cli.command {
        args.generate();
        return Ok(());
    }

    let data_dir = DataDir::resolve(cli.data_dir.as_deref())?;
    let posts_file = cli.posts.clone().unwrap_or_else(|| data_dir.posts_file());

    match &cli.command {
        Command::Search(args) => cmd_search(&posts_file, args)?,
        Command::Status(args) => cmd_status(&data_dir, &posts_file, args)?,
        Command::Completions(_) => {}
    }

    Ok(())
}

fn cmd_search(posts_file: &Path, args: &SearchArgs) -> error::Result<()> {
    let now = args.now.unwrap_or_else(chrono::Utc::now);

    // An empty query never touches the posts file.
    let outcome = if Query::parse(&args.query).is_none() {
        search::search(&args.query, &Corpus::default(), now)
    } else {
        Corpus::load(posts_file)
            .and_then(|corpus| search::search(&args.query, &corpus, now))
    };

    let outcome = match outcome {
        Ok(outcome) => outcome,
        Err(err) => {
            if args.json {
                search::format_json_error(&err)?;
            }
            return Err(err);
        }
    };

    if outcome.results.is_empty() && !outcome.empty_query {
        tracing::warn!(query = %args.query, "no posts matched");
    }

    if args.json {
        search::format_json(&outcome)?;
    } else {
        search::format_human(&outcome, args.details);
    }
    Ok(())
}

fn cmd_status(
    data_dir: &DataDir,
    posts_file: &Path,
    args: &StatusArgs,
) -> error::Result<()> {
    let posts = if posts_file.exists() {
        Some(Corpus::load(posts_file)?.len())
    } else {
        None
    };

    if args.json {
        let body = serde_json::json!({
            "dataDir": data_dir.root().display().to_string(),
            "postsFile": posts_file.display().to_string(),
            "posts": posts,
        });
        println!("{}", serde_json::to_string(&body)?);
    } else {
        println!("Data directory: {}", data_dir.root().display());
        println!("Posts file: {}", posts_file.display());
        match posts {
            Some(count) => println!("Posts: {count}"),
            None => println!("Posts: (file not found)"),
        }
    }
    Ok(())
}
