use clap::Parser;
use tracing::{debug, Level};
use wwn_core::QueryParams;

/// Query the bundled news article index.
#[derive(Parser)]
#[command(name = "wwn", version, about)]
struct Cli {
    /// Free-text search term (case-sensitive substring match)
    #[arg(short = 'q', long)]
    search: Option<String>,

    /// Lower date bound, e.g. 2023-07-01 (ignored when unparseable)
    #[arg(long)]
    from: Option<String>,

    /// Upper date bound (ignored when unparseable)
    #[arg(long)]
    to: Option<String>,

    /// Sort field: title, author or publishedAt (anything else is ignored)
    #[arg(long = "sort-by")]
    sort_by: Option<String>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let params = QueryParams {
        q: cli.search,
        from: cli.from,
        to: cli.to,
        sort_by: cli.sort_by,
    };

    let index = wwn_data::articles()?;
    let results = wwn_query::query(index, &params);
    debug!(total = index.len(), matched = results.len(), "query finished");

    let body = if cli.pretty {
        serde_json::to_string_pretty(&results)?
    } else {
        serde_json::to_string(&results)?
    };
    println!("{body}");

    Ok(())
}
