
extern crate clap;
#[macro_use] extern crate log;
extern crate fern;
extern crate chrono;
extern crate term_grid;
extern crate thiserror;

pub mod driver;
pub mod transpiler;

use clap::{Arg, ArgMatches, App};

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::Path;

use driver::Config;

fn main() {
    let config = config_from(&process_arguments());
    initialize_logging(config.verbosity);

    debug!("Arguments:\n\tVerbosity: {}\n\tDump Tokens: {}\n\tOutfile: {}\n\tInfile: {}",
        level_for(config.verbosity),
        config.dump_tokens,
        config.output.as_deref().unwrap_or("None"),
        config.input.as_deref().unwrap_or("None (interactive)")
    );

    let ifile = match &config.input {
        Some(ifile) => ifile,
        None => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            if let Err(err) = driver::repl(&config, stdin.lock(), &mut stdout.lock()) {
                error!("fatal: {}", err);
                std::process::exit(1);
            }
            return;
        },
    };

    let ipath = Path::new(ifile);
    let input = match File::open(&ipath) {
        Err(err) => {
            error!("fatal: unable to open input file `{}`: {}", ipath.display(), err);
            std::process::exit(1);
        },
        Ok(file) => BufReader::new(file),
    };

    let mut code: Box<dyn Write> = match &config.output {
        Some(filename) => {
            let opath = Path::new(filename);
            match File::create(&opath) {
                Err(err) => {
                    error!("fatal: unable to open output file `{}`: {}", opath.display(), err);
                    std::process::exit(1);
                },
                Ok(file) => Box::new(file),
            }
        },
        None => Box::new(io::stdout()),
    };

    let stdout = io::stdout();
    match driver::batch(&config, input, &mut stdout.lock(), &mut code) {
        Ok(0) => {},
        Ok(_) => std::process::exit(1),
        Err(err) => {
            error!("fatal: unable to transpile `{}`: {}", ipath.display(), err);
            std::process::exit(1);
        },
    }
}

fn process_arguments() -> ArgMatches<'static> {
    App::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .arg(Arg::with_name("INPUT")
            .help("Transpiles every line of this file instead of starting the interactive prompt")
            .required(false)
            .multiple(false)
            .index(1))
        .arg(Arg::with_name("verbose")
            .short("v")
            .multiple(true)
            .takes_value(false)
            .help("Sets the level of verbosity"))
        .arg(Arg::with_name("output")
            .short("o")
            .takes_value(true)
            .requires("INPUT")
            .help("write generated code to an outfile"))
        .arg(Arg::with_name("tokens")
            .short("t")
            .takes_value(false)
            .help("logs every token read (needs -vvv to show)"))
        .arg(Arg::with_name("print-debug")
            .short("d")
            .alias("show")
            .alias("s")
            .takes_value(false)
            .help("prints a table of parsed statements alongside the generated code"))
        .get_matches()
}

fn config_from(args: &ArgMatches) -> Config {
    Config {
        verbosity:   args.occurrences_of("verbose"),
        input:       args.value_of("INPUT").map(str::to_owned),
        output:      args.value_of("output").map(str::to_owned),
        print_debug: args.is_present("print-debug"),
        dump_tokens: args.is_present("tokens"),
    }
}

fn level_for(verbosity: u64) -> log::LevelFilter {
    match verbosity {
        0 => log::LevelFilter::Error,
        1 => log::LevelFilter::Warn,
        2 => log::LevelFilter::Info,
        3 | _ => log::LevelFilter::Debug,
    }
}

fn initialize_logging(verbosity: u64) {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}][{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                record.level(),
                message
            ))
        })
        .level(level_for(verbosity))
        // stdout carries the generated code.
        .chain(std::io::stderr())
        .apply().ok();
}
