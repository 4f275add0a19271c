use std::io::{stdin, stdout, BufRead, Write};
use std::process;

use anyhow::{Context, Error};
use clap::{App, AppSettings, Arg, ArgMatches};
use log::{debug, info};

use titleize::colors::{ColorChoice, Palette};
use titleize::titleize;

fn main() {
    let matches = App::new("titleize")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Aleksei Voronov <despawn@gmail.com>")
        .about("Reformat text following English title capitalization rules.")
        .setting(AppSettings::AllowLeadingHyphen)
        .setting(AppSettings::TrailingVarArg)
        .after_help(
            "Text is taken from the arguments, or from stdin one line at a time \
             when there are no arguments. Use -- before text that could be \
             mistaken for an option.\n\n\
             EXAMPLE:\n    \
             $ titleize \"tears for fears @ rule the world: the greatest hits\"\n    \
             Tears for Fears @ Rule the World: The Greatest Hits",
        )
        .arg(
            Arg::with_name("text")
                .value_name("TEXT")
                .help("Text to titleize. Multiple arguments are joined with spaces.")
                .multiple(true),
        )
        .arg(
            Arg::with_name("color")
                .long("color")
                .value_name("WHEN")
                .help("Whether to color error messages.")
                .takes_value(true)
                .possible_values(&["auto", "always", "never", "on", "off"])
                .default_value("auto"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .help("Log more details to stderr. Can be repeated.")
                .multiple(true),
        )
        .arg(
            Arg::with_name("quiet")
                .short("q")
                .long("quiet")
                .help("Don't log anything.")
                .conflicts_with("verbose"),
        )
        .get_matches();

    // possible_values has already rejected anything else
    let palette = matches
        .value_of("color")
        .and_then(|choice| choice.parse::<ColorChoice>().ok())
        .unwrap_or_default()
        .palette();

    init_logging(&matches);

    if let Err(error) = run(&matches) {
        report(&error, &palette);
        process::exit(1);
    }
}

fn init_logging(matches: &ArgMatches) {
    if matches.is_present("quiet") {
        return;
    }

    let level = match matches.occurrences_of("verbose") {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn run(matches: &ArgMatches) -> Result<(), Error> {
    let stdout = stdout();
    let mut output = stdout.lock();

    if let Some(words) = matches.values_of("text") {
        let text = words.collect::<Vec<_>>().join(" ");
        debug!("titleizing {} argument bytes", text.len());
        writeln!(output, "{}", titleize(&text))?;
        return Ok(());
    }

    info!("reading lines from stdin");
    let stdin = stdin();
    let mut input = stdin.lock();
    let mut buffer = Vec::new();
    let mut number = 0;

    loop {
        buffer.clear();
        number += 1;
        let read = input
            .read_until(b'\n', &mut buffer)
            .with_context(|| format!("cannot read line {} from stdin", number))?;
        if read == 0 {
            break;
        }

        let line = trim_line_ending(&buffer);
        // invalid UTF-8 is replaced rather than treated as a read failure
        let line = String::from_utf8_lossy(line);
        writeln!(output, "{}", titleize(&line))?;
    }

    Ok(())
}

fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

fn report(error: &Error, palette: &Palette) {
    eprintln!(
        "{}{}error:{} {}",
        palette.attr.bold, palette.fg.red, palette.attr.reset, error
    );
    for cause in error.chain().skip(1) {
        eprintln!("  caused by: {}", cause);
    }
}
