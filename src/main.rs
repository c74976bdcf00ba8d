use std::io::{self, BufRead, BufWriter, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

use reconurl::logging::init_logging;
use reconurl::{
    clean_subdomain, fix_url, get_domain, get_ext_type, get_hostname, get_raw_cookie,
    load_cookies, unique, Cookie,
};

/// URL, cookie and hostname helpers for recon pipelines.
///
/// Inputs are taken from the positional arguments, or from stdin (one per
/// line) when none are given. Empty results are not printed.
#[derive(Debug, Parser)]
#[command(name = "reconurl", version, about)]
struct Cli {
    /// Log absorbed parse failures to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print each output line only once, first occurrence wins
    #[arg(short, long, global = true)]
    unique: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Resolve scraped links against a site root
    Fix {
        /// Site root with scheme and host, e.g. https://example.com
        #[arg(short, long)]
        site: String,
        links: Vec<String>,
    },
    /// Print the hostname of each URL
    Host { urls: Vec<String> },
    /// Print the registrable domain (eTLD+1) of each URL
    Domain { urls: Vec<String> },
    /// Print the path extension of each URL
    Ext { urls: Vec<String> },
    /// Clean scraped subdomains
    Clean { names: Vec<String> },
    /// Split raw Cookie headers into name<TAB>value lines
    Cookies { headers: Vec<String> },
    /// Join name=value lines into a single raw Cookie header
    Join { pairs: Vec<String> },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let lines = run(cli.command)?;
    let lines = if cli.unique { unique(&lines) } else { lines };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for line in lines.iter().filter(|l| !l.is_empty()) {
        writeln!(out, "{}", line).context("failed to write output")?;
    }
    out.flush().context("failed to flush output")?;

    Ok(())
}

fn run(command: Command) -> Result<Vec<String>> {
    let lines = match command {
        Command::Fix { site, links } => inputs(links)?
            .iter()
            .map(|link| fix_url(link.trim(), &site))
            .collect(),
        Command::Host { urls } => map_inputs(urls, get_hostname)?,
        Command::Domain { urls } => map_inputs(urls, get_domain)?,
        Command::Ext { urls } => map_inputs(urls, get_ext_type)?,
        Command::Clean { names } => map_inputs(names, clean_subdomain)?,
        Command::Cookies { headers } => inputs(headers)?
            .iter()
            .flat_map(|header| load_cookies(header))
            .map(|cookie| format!("{}\t{}", cookie.name, cookie.value))
            .collect(),
        Command::Join { pairs } => {
            let cookies: Vec<Cookie> = inputs(pairs)?
                .iter()
                .filter_map(|pair| pair.parse().ok())
                .collect();
            vec![get_raw_cookie(&cookies)]
        }
    };

    Ok(lines)
}

fn map_inputs(args: Vec<String>, f: fn(&str) -> String) -> Result<Vec<String>> {
    Ok(inputs(args)?.iter().map(|input| f(input.trim())).collect())
}

/// Positional arguments, or stdin lines if there are none.
fn inputs(args: Vec<String>) -> Result<Vec<String>> {
    if !args.is_empty() {
        return Ok(args);
    }

    debug!("reading inputs from stdin");
    io::stdin()
        .lock()
        .lines()
        .collect::<io::Result<Vec<_>>>()
        .context("failed to read stdin")
}
