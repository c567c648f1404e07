use std::io::Read;

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Decode a GA4 measurement protocol hit into a JSON parameter tree.
#[derive(Parser)]
#[command(name = "hitparse", version, about)]
struct Cli {
    /// Raw hit: a collector URL, `/g/collect?...` path, query string, or
    /// base64-wrapped payload. Read from stdin when omitted.
    payload: Option<String>,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let payload = match cli.payload {
        Some(arg) => arg,
        None => {
            let mut buffer = String::new();
            if let Err(err) = std::io::stdin().read_to_string(&mut buffer) {
                eprintln!("hitparse: failed to read stdin: {err}");
                std::process::exit(2);
            }
            buffer
        }
    };

    let tree = match hitparse::decode(&payload) {
        Ok(tree) => tree,
        Err(err) => {
            eprintln!("{}", err.user_message());
            std::process::exit(1);
        }
    };

    let rendered = if cli.pretty {
        serde_json::to_string_pretty(&tree)
    } else {
        serde_json::to_string(&tree)
    };
    match rendered {
        Ok(json) => println!("{json}"),
        Err(err) => {
            eprintln!("hitparse: failed to render output: {err}");
            std::process::exit(2);
        }
    }
}
