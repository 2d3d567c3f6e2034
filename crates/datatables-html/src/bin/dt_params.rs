use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use datatables_html::{Builder, BuilderConfig, ConfigNode};
use tracing_subscriber::EnvFilter;

/// Print DataTables initialisation parameters for a JSON option object.
#[derive(Debug, Parser)]
#[command(name = "dt-params")]
struct Args {
    /// JSON file with widget options; stdin when omitted.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Prefix marking a value as a script expression (repeatable).
    /// Replaces the default `$`, `$.` and `function` prefixes.
    #[arg(short, long = "callback")]
    callbacks: Vec<String>,

    /// Use random placeholder tokens while serializing.
    #[arg(long)]
    nonce: bool,

    /// Table id targeted by `--script` output.
    #[arg(long, default_value = "dataTableBuilder")]
    table_id: String,

    /// Print a complete `<script>` element instead of the bare parameters.
    #[arg(long)]
    script: bool,
}

fn main() -> Result<()> {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(log_filter(directives.as_deref()))
        .init();

    let args = Args::parse();

    let text = match &args.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("reading stdin")?;
            text
        }
    };
    println!("{}", render(&args, &text)?);
    Ok(())
}

/// `RUST_LOG`-style directives, or `warn` when absent or invalid.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}

/// Serializes the option object in `text` as `args` describe.
fn render(args: &Args, text: &str) -> Result<String> {
    let options = match serde_json::from_str::<ConfigNode>(text).context("parsing options")? {
        ConfigNode::Object(map) => map,
        other => bail!("options must be a JSON object, got {other}"),
    };

    let mut config = BuilderConfig {
        nonce_placeholders: args.nonce,
        ..BuilderConfig::default()
    };
    if !args.callbacks.is_empty() {
        config.callback = args.callbacks.clone();
    }
    tracing::debug!(callbacks = ?config.callback, "serializing options");

    let mut builder = Builder::new(config);
    builder.set_table_id(args.table_id.as_str());

    let params = builder.parameterize(options)?;
    let output = if args.script {
        let body = builder.render_script(&params)?;
        builder.scripts(Some(&body), None)?
    } else {
        params
    };
    Ok(output.trim_end().to_string())
}
