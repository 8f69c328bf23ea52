use anyhow::{anyhow, Context, Result};
use clap::{Parser, ValueEnum};
use minivdom_core::{parse_description, Value};
use minivdom_render::{Container, IdStrategy, RenderOptions, Renderer};
use std::io::Read;
use std::path::PathBuf;
use std::{fs, io};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "minivdom", about = "Render a JSON description tree to markup")]
struct Args {
    /// Path to a JSON description (`-` reads stdin)
    input: String,

    /// JSON file with render options
    #[arg(long)]
    config: Option<PathBuf>,

    /// Position id numbering
    #[arg(long, value_enum)]
    ids: Option<Ids>,

    /// HTML-escape text and attribute values
    #[arg(long)]
    escape: bool,

    /// Omit closing tags for HTML void elements
    #[arg(long)]
    void_elements: bool,

    #[arg(long)]
    id_attribute: Option<String>,

    #[arg(long, default_value_t = 0)]
    start_id: u32,

    /// JSON value inherited as context by every component
    #[arg(long)]
    context: Option<String>,

    /// Write markup here instead of stdout
    #[arg(long, short)]
    out: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Ids {
    Sequential,
    Legacy,
}

impl From<Ids> for IdStrategy {
    fn from(ids: Ids) -> Self {
        match ids {
            Ids::Sequential => IdStrategy::Sequential,
            Ids::Legacy => IdStrategy::Legacy,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let options = load_options(&args)?;

    let source = read_input(&args.input)?;
    let description = parse_description(&source)
        .with_context(|| format!("json parse failed: {}", args.input))?;
    let context = match &args.context {
        Some(json) => parse_description(json).context("context json parse failed")?,
        None => Value::Null,
    };

    let container = Container::new();
    Renderer::new(options)
        .with_context(context)
        .with_start_id(args.start_id)
        .render(&description, &container)
        .with_context(|| format!("render failed: {}", args.input))?;
    let markup = container.inner_html();
    tracing::info!(bytes = markup.len(), "rendered {}", args.input);

    match &args.out {
        Some(path) => fs::write(path, &markup)
            .with_context(|| format!("write failed: {}", path.display()))?,
        None => println!("{}", markup),
    }
    Ok(())
}

fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("read failed: stdin")?;
        return Ok(buf);
    }
    let path = PathBuf::from(input);
    if !path.exists() {
        return Err(anyhow!("path not found: {}", path.display()));
    }
    fs::read_to_string(&path).with_context(|| format!("read failed: {}", path.display()))
}

/// Options file first, then flags on top.
fn load_options(args: &Args) -> Result<RenderOptions> {
    let mut options = match &args.config {
        Some(path) => {
            let data = fs::read_to_string(path)
                .with_context(|| format!("read failed: {}", path.display()))?;
            RenderOptions::from_json(&data)
                .with_context(|| format!("options parse failed: {}", path.display()))?
        }
        None => RenderOptions::default(),
    };
    if let Some(ids) = args.ids {
        options.ids = ids.into();
    }
    if args.escape {
        options.escape = true;
    }
    if args.void_elements {
        options.void_elements = true;
    }
    if let Some(attr) = &args.id_attribute {
        options.id_attribute = attr.clone();
    }
    Ok(options)
}
