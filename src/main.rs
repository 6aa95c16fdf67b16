use clap::{ArgMatches, Args, CommandFactory, FromArgMatches, Parser, Subcommand};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};

use anyhow::Context;

mod addr;
mod diagnostics;
mod input;
mod pipeline;
mod pool;
mod render;
mod split;

pub type Result<T> = anyhow::Result<T>;

/// Path value meaning stdin/stdout.
const STDIO: &str = "-";

#[derive(Parser)]
#[command(name = "ip-filter")]
#[command(about = "Sort and deduplicate IPv4 addresses from a TSV list", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every distinct address (first column) from highest to lowest.
    Sort(SortArgs),
}

#[derive(Args)]
struct SortArgs {
    /// Tab-separated input, address in the first column ("-" for stdin).
    #[arg(long, default_value = STDIO)]
    input: String,

    /// Output file ("-" for stdout). Created only after the input parsed cleanly.
    #[arg(short = 'o', long, default_value = STDIO)]
    out: String,

    /// Extra section: addresses starting with these octets, e.g. 46.70.
    /// Sections follow the command-line order of --prefix and --any.
    #[arg(long, value_parser = pool::Filter::parse_prefix)]
    prefix: Vec<pool::Filter>,

    /// Extra section: addresses with this value in any octet.
    #[arg(long, value_parser = pool::Filter::parse_any)]
    any: Vec<pool::Filter>,

    #[arg(long, value_enum, default_value_t)]
    format: render::Format,

    /// Report duplicates and a summary on stderr.
    #[arg(short, long)]
    verbose: bool,
}

/// Positions of `id`'s values on the command line.
fn positions(matches: &ArgMatches, id: &'static str) -> Vec<usize> {
    matches
        .indices_of(id)
        .map(|idx| idx.collect())
        .unwrap_or_default()
}

/// Interleave `--prefix` and `--any` back into the order they were given.
fn ordered_filters(
    matches: &ArgMatches,
    prefix: Vec<pool::Filter>,
    any: Vec<pool::Filter>,
) -> Vec<pool::Filter> {
    let mut tagged: Vec<(usize, pool::Filter)> = positions(matches, "prefix")
        .into_iter()
        .zip(prefix)
        .chain(positions(matches, "any").into_iter().zip(any))
        .collect();
    tagged.sort_by_key(|(idx, _)| *idx);
    tagged.into_iter().map(|(_, filter)| filter).collect()
}

fn sort(args: SortArgs, matches: &ArgMatches) -> Result<()> {
    let SortArgs {
        input,
        out,
        prefix,
        any,
        format,
        verbose,
    } = args;
    let opts = pipeline::Options {
        filters: ordered_filters(matches, prefix, any),
        format,
        verbose,
    };

    let (reader, source): (Box<dyn BufRead>, &str) = if input == STDIO {
        (Box::new(io::stdin().lock()), "<stdin>")
    } else {
        let file = File::open(&input).with_context(|| format!("open input file {}", input))?;
        (Box::new(BufReader::new(file)), input.as_str())
    };

    // Output is opened only after the whole input parsed.
    let open_output = || -> Result<Box<dyn Write>> {
        if out == STDIO {
            Ok(Box::new(io::stdout().lock()))
        } else {
            let file =
                File::create(&out).with_context(|| format!("create output file {}", out))?;
            Ok(Box::new(BufWriter::new(file)))
        }
    };

    pipeline::run(reader, source, open_output, &opts)?;
    if verbose && out != STDIO {
        eprintln!("Wrote {}", out);
    }
    Ok(())
}

fn main() -> Result<()> {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    match cli.cmd {
        Commands::Sort(args) => {
            let sub = matches.subcommand_matches("sort").unwrap_or(&matches);
            match sort(args, sub) {
                // Bad addresses are reported but still exit 0; I/O failures do not.
                Err(err) if err.downcast_ref::<addr::AddrError>().is_some() => {
                    eprintln!("{}", diagnostics::error_message(format!("{:#}", err)));
                }
                res => res?,
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pool::Filter;
    use pretty_assertions::assert_eq;

    fn filters_of(args: &[&str]) -> Vec<Filter> {
        let matches = Cli::command().try_get_matches_from(args).unwrap();
        let cli = Cli::from_arg_matches(&matches).unwrap();
        let Commands::Sort(sort) = cli.cmd;
        ordered_filters(
            matches.subcommand_matches("sort").unwrap(),
            sort.prefix,
            sort.any,
        )
    }

    #[test]
    fn filters_keep_command_line_order() {
        assert_eq!(
            filters_of(&[
                "ip-filter", "sort", "--any", "46", "--prefix", "1", "--any", "8", "--prefix",
                "46.70",
            ]),
            vec![
                Filter::Any(46),
                Filter::Prefix(vec![1]),
                Filter::Any(8),
                Filter::Prefix(vec![46, 70]),
            ]
        );
    }

    #[test]
    fn no_filters() {
        assert_eq!(filters_of(&["ip-filter", "sort", "-v"]), vec![]);
    }
}
