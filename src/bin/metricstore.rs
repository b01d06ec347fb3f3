//! metricstore CLI
//!
//! Loads metrics into an in-memory store and reads them back.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::{Parser, Subcommand};
use metricstore::{MetricStore, StoreConfig, StoreError};
use serde_json::json;
use tracing_subscriber::{fmt, EnvFilter};

type CliResult<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// metricstore CLI
#[derive(Parser, Debug)]
#[command(name = "metricstore")]
#[command(about = "Append-only in-memory store for timestamped metrics")]
#[command(version)]
struct Args {
    /// Store capacity in bytes
    #[arg(short, long, default_value = "4096", global = true)]
    capacity: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write a fixed set of sample metrics and print them
    Demo,

    /// Load `timestamp name value` lines and print the stored records
    Load {
        /// Input file (reads stdin when omitted)
        input: Option<PathBuf>,

        /// Print stats, summary and records as JSON
        #[arg(long)]
        json: bool,

        /// Hex dump the written region after loading
        #[arg(long)]
        dump: bool,
    },
}

fn main() {
    // Logs go to stderr so stdout stays clean for --json
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,metricstore=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    tracing::info!("metricstore v{}", metricstore::VERSION);

    let config = StoreConfig::builder().capacity(args.capacity).build();

    let mut store = match MetricStore::open(&config) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!("Failed to create store: {}", e);
            std::process::exit(1);
        }
    };

    let result = match args.command {
        Commands::Demo => run_demo(&mut store),
        Commands::Load { input, json, dump } => run_load(&mut store, input, json, dump),
    };

    if let Err(e) = result {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

// =============================================================================
// Commands
// =============================================================================

const DEMO_METRICS: [(&str, f64); 6] = [
    ("cpu.usage", 75.5),
    ("memory.free", 2048.0),
    ("disk.io.read", 1024.5),
    ("disk.io.write", 512.25),
    ("network.rx", 8192.0),
    ("network.tx", 4096.0),
];

fn run_demo(store: &mut MetricStore) -> CliResult<()> {
    let now = now_millis();

    let mut writer = store.writer();
    for (i, (name, value)) in DEMO_METRICS.iter().enumerate() {
        writer.append(now + i as i64 * 1000, name, *value)?;
    }

    print_records(store)?;
    print_summary(store)?;
    Ok(())
}

fn run_load(
    store: &mut MetricStore,
    input: Option<PathBuf>,
    json: bool,
    dump: bool,
) -> CliResult<()> {
    let reader: Box<dyn BufRead> = match &input {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let mut writer = store.writer();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (timestamp, name, value) = parse_line(line)
            .ok_or_else(|| format!("line {}: expected `timestamp name value`", index + 1))?;

        match writer.append(timestamp, name, value) {
            Ok(_) => {}
            Err(StoreError::CapacityExceeded { needed, available }) => {
                tracing::warn!(
                    line = index + 1,
                    needed,
                    available,
                    "Store full, remaining input ignored"
                );
                break;
            }
            Err(e) => return Err(format!("line {}: {}", index + 1, e).into()),
        }
    }

    tracing::info!(entries = writer.count(), "Load complete");

    if json {
        let summary = store.summary()?;
        let records = store.iter().collect::<metricstore::Result<Vec<_>>>()?;
        let output = json!({
            "stats": store.stats(),
            "summary": summary,
            "mean": summary.mean(),
            "records": records,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_records(store)?;
        print_summary(store)?;
    }

    if dump {
        print_hex_dump(&store.snapshot());
    }

    Ok(())
}

// =============================================================================
// Output Helpers
// =============================================================================

fn print_records(store: &MetricStore) -> CliResult<()> {
    let mut cursor = store.cursor();
    while cursor.has_next() {
        println!(
            "{:>8}  {}  {:<32} {:>14.3}",
            cursor.position(),
            cursor.timestamp()?,
            cursor.metric_name()?,
            cursor.value()?
        );
        cursor.next()?;
    }
    Ok(())
}

fn print_summary(store: &MetricStore) -> CliResult<()> {
    let stats = store.stats();
    let summary = store.summary()?;

    println!();
    println!("entries:        {}", stats.entry_count);
    println!(
        "bytes used:     {} / {} ({} remaining)",
        stats.bytes_used, stats.capacity, stats.bytes_remaining
    );
    println!("avg entry size: {:.2} bytes", stats.average_entry_size);
    if let Some(mean) = summary.mean() {
        println!("average value:  {:.5}", mean);
    }
    Ok(())
}

fn print_hex_dump(bytes: &[u8]) {
    println!();
    for (row, chunk) in bytes.chunks(16).enumerate() {
        let hex: Vec<String> = chunk.iter().map(|b| format!("{:02x}", b)).collect();
        let ascii: String = chunk
            .iter()
            .map(|&b| if b.is_ascii_graphic() { b as char } else { '.' })
            .collect();
        println!("{:08x}  {:<47}  {}", row * 16, hex.join(" "), ascii);
    }
}

// =============================================================================
// Parsing
// =============================================================================

fn parse_line(line: &str) -> Option<(i64, &str, f64)> {
    let mut parts = line.split_whitespace();
    let timestamp = parts.next()?.parse().ok()?;
    let name = parts.next()?;
    let value = parts.next()?.parse().ok()?;

    if parts.next().is_some() {
        return None;
    }
    Some((timestamp, name, value))
}

fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}
