use clap::{Args, Parser, Subcommand};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use rivalry_monitor::config::DashboardConfig;
use rivalry_monitor::snapshot::Snapshot;
use rivalry_monitor::store::{CommitOutcome, SnapshotStore};
use rivalry_monitor::synthetic::generate_synthetic_snapshot;
use rivalry_monitor::{
    format_compact, format_float, format_percent, format_regional, DashboardView, Entity,
};

#[derive(Parser)]
#[command(
    name = "rivalry-monitor",
    about = "Two-entity social monitoring dashboard summaries"
)]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Summarize a snapshot document read from a file or stdin.
    Summarize(SummarizeArgs),
    /// Summarize a generated snapshot.
    Demo(DemoArgs),
    /// Write the default configuration file.
    InitConfig(InitConfigArgs),
}

#[derive(Args, Debug, Clone)]
struct SummarizeArgs {
    #[arg(long)]
    snapshot: Option<PathBuf>,
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    json: bool,
    #[arg(long)]
    details: bool,
}

#[derive(Args, Debug, Clone)]
struct DemoArgs {
    #[arg(long, default_value_t = 7)]
    seed: u64,
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    json: bool,
    #[arg(long)]
    details: bool,
}

#[derive(Args, Debug, Clone)]
struct InitConfigArgs {
    #[arg(long, default_value = "config/dashboard.toml")]
    path: PathBuf,
}

#[tokio::main]
async fn main() {
    load_dotenv();
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Summarize(args) => {
            let payload = read_snapshot(args.snapshot.as_deref())?;
            let snapshot = Snapshot::from_json(&payload)?;
            summarize(snapshot, args.config, args.json, args.details).await
        }
        Command::Demo(args) => {
            let snapshot = generate_synthetic_snapshot(args.seed);
            summarize(snapshot, args.config, args.json, args.details).await
        }
        Command::InitConfig(args) => {
            DashboardConfig::default().write(&args.path)?;
            println!("Wrote {}", args.path.display());
            Ok(())
        }
    }
}

async fn summarize(
    snapshot: Snapshot,
    config_path: Option<PathBuf>,
    json: bool,
    details: bool,
) -> Result<(), String> {
    let (config, loaded_from) = DashboardConfig::load(config_path)?;
    if let Some(path) = loaded_from.as_ref() {
        tracing::debug!(path = %path.display(), "resolved config path");
    }

    let store = SnapshotStore::new();
    let ticket = store.begin_refresh().await;
    if store.commit(ticket, snapshot, &config).await == CommitOutcome::Superseded {
        return Err("snapshot refresh was superseded".to_string());
    }
    let loaded = store
        .current()
        .await
        .ok_or_else(|| "no snapshot loaded".to_string())?;

    if json {
        let payload = serde_json::to_string_pretty(&loaded.view)
            .map_err(|err| format!("failed to serialize dashboard: {}", err))?;
        println!("{}", payload);
        return Ok(());
    }

    print_report(&loaded.view, &config, details);
    Ok(())
}

fn print_report(view: &DashboardView, config: &DashboardConfig, details: bool) {
    let labels = &config.entities;
    let scores = &view.scores;

    println!("{}", scores.standing.headline(&labels.entity_a, &labels.entity_b));
    for entity in Entity::BOTH {
        let set = scores.for_entity(entity);
        println!(
            "{}: score {} | share of voice {} | engagement rate {}",
            labels.label(entity),
            format_float(set.raw_score, 1),
            format_percent(set.share_of_voice),
            format_percent(set.engagement_rate)
        );
    }

    if !view.stats.is_empty() {
        println!("\nOverall:");
        for stat in &view.stats {
            let difference = stat
                .relative_difference_pct
                .map(|pct| format!(" ({:+.1}%)", pct))
                .unwrap_or_default();
            println!(
                "  {}: {} {} vs {} {}{}",
                stat.kind.label(),
                labels.entity_a,
                stat.entity_a_display,
                labels.entity_b,
                stat.entity_b_display,
                difference
            );
        }
    }

    for entity in Entity::BOTH {
        println!("\nTop content for {}:", labels.label(entity));
        let ranked = view.top_content.for_entity(entity);
        if ranked.is_empty() {
            println!("  (none)");
        }
        for (idx, item) in ranked.posts.iter().enumerate() {
            let metrics = &item.post.metrics;
            println!(
                "  {}. [{}] {} | engagement {} | views {}",
                idx + 1,
                item.post.platform.label(),
                preview(&item.post.text),
                format_compact(item.score as f64),
                format_compact(metrics.views as f64)
            );
            if details {
                println!(
                    "     likes {} | comments {} | shares {} | reach {} | {}",
                    format_regional(metrics.likes as f64),
                    format_regional(metrics.comments as f64),
                    format_regional(metrics.shares as f64),
                    format_regional(metrics.reach as f64),
                    item.post.relative_time
                );
            }
        }
    }

    if !view.vocabulary.is_empty() {
        println!("\nTrending terms:");
        for entry in &view.vocabulary.entries {
            if details {
                println!(
                    "  {} ({:?}, {:?}) weight {} size {} opacity {}",
                    entry.text,
                    entry.party,
                    entry.source_kind,
                    format_float(entry.weight, 0),
                    format_float(entry.font_size, 1),
                    format_float(entry.opacity, 2)
                );
            } else {
                println!("  {} ({})", entry.text, format_float(entry.weight, 0));
            }
        }
    }
}

fn preview(text: &str) -> String {
    let line = text.lines().next().unwrap_or_default().trim();
    if line.chars().count() > 60 {
        let head: String = line.chars().take(57).collect();
        format!("{}...", head)
    } else {
        line.to_string()
    }
}

fn read_snapshot(path: Option<&Path>) -> Result<String, String> {
    if let Some(path) = path {
        return std::fs::read_to_string(path)
            .map_err(|err| format!("failed to read snapshot {}: {}", path.display(), err));
    }

    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|err| format!("failed reading stdin: {}", err))?;
    if buffer.trim().is_empty() {
        return Err("missing snapshot: pass --snapshot or pipe stdin".to_string());
    }
    Ok(buffer)
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "rivalry_monitor=debug"
    } else {
        "rivalry_monitor=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .try_init();
}

fn load_dotenv() {
    let _ = dotenvy::dotenv();
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let manifest_path = Path::new(manifest_dir).join(".env");
    let _ = dotenvy::from_path(manifest_path);
}
