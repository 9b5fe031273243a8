//! hnapi-cli — Hacker News 命令行工具
//!
//! Usage:
//!   hnapi-cli top|new|best|ask|show|job [--limit N]   List stories with titles
//!   hnapi-cli item <id>                                Show one item
//!   hnapi-cli user <name>                              Show a user profile
//!   hnapi-cli batch <id>...                            Fetch several items concurrently
//!   hnapi-cli watch [--interval SECS]                  Stream the change feed until Ctrl-C

use anyhow::{bail, Context, Result};
use hnapi::{CancellationToken, HnClient, HnClientBuilder, Item, StoryList};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("hnapi=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    if let Err(err) = run(&args[1], &args[2..]).await {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

async fn run(command: &str, rest: &[String]) -> Result<()> {
    match command {
        "version" | "--version" | "-V" => {
            println!("hnapi-cli {}", hnapi::VERSION);
            return Ok(());
        }
        "help" | "--help" | "-h" => {
            print_usage();
            return Ok(());
        }
        _ => {}
    }

    let client = HnClientBuilder::from_env()
        .build()
        .context("invalid client configuration")?;

    let cancel = CancellationToken::new();
    let on_signal = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            eprintln!("\nReceived Ctrl-C, shutting down...");
            on_signal.cancel();
        }
    });

    if let Some(list) = StoryList::from_name(command) {
        let limit = flag_value(rest, "--limit")?.unwrap_or(10);
        return cmd_list(&client, list, limit, &cancel).await;
    }

    match command {
        "item" => {
            let id = parse_id(rest.first().context("missing item id")?)?;
            cmd_item(&client, id, &cancel).await
        }
        "user" => {
            let name = rest.first().context("missing username")?;
            cmd_user(&client, name, &cancel).await
        }
        "batch" => {
            let ids = rest.iter().map(|s| parse_id(s)).collect::<Result<Vec<_>>>()?;
            if ids.is_empty() {
                bail!("batch needs at least one item id");
            }
            cmd_batch(&client, &ids, &cancel).await
        }
        "watch" => {
            let interval = flag_value(rest, "--interval")?
                .map(Duration::from_secs)
                .unwrap_or(client.config().poll_interval);
            cmd_watch(&client, interval, cancel).await
        }
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!(
        r#"hnapi-cli — Hacker News API 命令行工具

USAGE:
    hnapi-cli <COMMAND> [OPTIONS]

COMMANDS:
    top|new|best|ask|show|job [--limit N]   List stories (default 10)
    item <id>                                Show one item
    user <name>                              Show a user profile
    batch <id>...                            Fetch several items concurrently
    watch [--interval SECS]                  Stream changed items and profiles
    version                                  Show version information
    help                                     Show this help message

ENVIRONMENT:
    HNAPI_BASE_URL              API root (default https://hacker-news.firebaseio.com/v0/)
    HNAPI_TIMEOUT_SECS          Per-request deadline
    HNAPI_CONCURRENCY           Batch concurrency ceiling
    HNAPI_POLL_INTERVAL_SECS    Default watch interval
    HNAPI_MAX_RETRIES           Reserved retry count (not applied yet)
    HNAPI_BACKOFF_SECS          Reserved retry backoff (not applied yet)
    RUST_LOG                    Log filter (default hnapi=info)"#
    );
}

fn parse_id(raw: &str) -> Result<u64> {
    raw.parse::<u64>()
        .with_context(|| format!("invalid item id: {raw}"))
}

fn flag_value<T: std::str::FromStr>(args: &[String], flag: &str) -> Result<Option<T>> {
    let Some(pos) = args.iter().position(|a| a == flag) else {
        return Ok(None);
    };
    let raw = args
        .get(pos + 1)
        .with_context(|| format!("{flag} needs a value"))?;
    match raw.parse::<T>() {
        Ok(v) => Ok(Some(v)),
        Err(_) => bail!("invalid value for {flag}: {raw}"),
    }
}

fn print_item_line(rank: usize, item: &Item) {
    println!(
        "{:>3}. {} ({} points by {}, {} comments)",
        rank,
        item.title.as_deref().unwrap_or("<untitled>"),
        item.score.unwrap_or(0),
        item.by.as_deref().unwrap_or("?"),
        item.descendants.unwrap_or(0),
    );
}

async fn cmd_list(
    client: &HnClient,
    list: StoryList,
    limit: usize,
    cancel: &CancellationToken,
) -> Result<()> {
    let ids = client.get_story_ids(list, cancel).await?;
    println!("{} {} stories", ids.len(), list.name());

    let wanted = &ids[..limit.min(ids.len())];
    let batch = client.get_items_batch(wanted, cancel).await?;
    if let Some(err) = &batch.first_error {
        eprintln!(
            "warning: {} of {} stories failed: {}",
            batch.failure_count, batch.total_processed, err
        );
    }

    // Batch results arrive in completion order; restore rank order for display.
    let mut items = batch.values;
    items.sort_by_key(|item| wanted.iter().position(|id| *id == item.id));
    for (i, item) in items.iter().enumerate() {
        print_item_line(i + 1, item);
    }
    Ok(())
}

async fn cmd_item(client: &HnClient, id: u64, cancel: &CancellationToken) -> Result<()> {
    let item = client.get_item(id, cancel).await?;
    println!("{}", serde_json::to_string_pretty(&item)?);
    Ok(())
}

async fn cmd_user(client: &HnClient, name: &str, cancel: &CancellationToken) -> Result<()> {
    let user = client.get_user(name, cancel).await?;
    println!("User:      {}", user.id);
    println!("Karma:     {}", user.karma);
    println!("Created:   {} (unix)", user.created);
    println!("Submitted: {}", user.submitted.len());
    if let Some(about) = &user.about {
        println!("About:     {}", about);
    }
    Ok(())
}

async fn cmd_batch(client: &HnClient, ids: &[u64], cancel: &CancellationToken) -> Result<()> {
    let batch = client.get_items_batch(ids, cancel).await?;
    println!(
        "Retrieved {}/{} items in {:?}",
        batch.success_count(),
        ids.len(),
        batch.execution_time
    );
    if let Some(err) = &batch.first_error {
        eprintln!("warning: first failure: {err}");
    }
    for (i, item) in batch.values.iter().enumerate() {
        print_item_line(i + 1, item);
    }
    Ok(())
}

async fn cmd_watch(client: &HnClient, interval: Duration, cancel: CancellationToken) -> Result<()> {
    println!("Watching for updates every {:?} (Ctrl-C to stop)", interval);
    let mut updates = client.start_updates_with_interval(interval, cancel.clone())?;

    let mut count = 0usize;
    while let Some(batch) = updates.recv().await {
        count += 1;
        println!(
            "Update {}: {} items, {} profiles changed",
            count,
            batch.items.len(),
            batch.profiles.len()
        );
        if let Some(&first) = batch.items.first() {
            match client.get_item(first, &cancel).await {
                Ok(item) => println!(
                    "  latest: {} [{:?}] {}",
                    item.id,
                    item.kind,
                    item.title.as_deref().unwrap_or("")
                ),
                Err(err) if err.is_cancelled() => break,
                Err(err) => eprintln!("  failed to get item {}: {}", first, err),
            }
        }
    }

    println!("Stopped after {} updates", count);
    Ok(())
}
