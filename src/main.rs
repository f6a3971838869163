extern crate avl_collections;
#[macro_use]
extern crate log;
extern crate simplelog;

use avl_collections::avl_tree::AvlSet;
use avl_collections::command;
use log::LevelFilter;
use simplelog::{Config, SimpleLogger};
use std::env;
use std::io;
use std::process;

const LOG_LEVEL_VAR: &str = "AVL_LOG";

enum Source {
    Script,
    Stdin,
}

struct Settings {
    log_level: LevelFilter,
    source: Source,
}

impl Settings {
    fn from_env() -> Result<Self, String> {
        let log_level = env::var(LOG_LEVEL_VAR)
            .ok()
            .and_then(|level| level.parse().ok())
            .unwrap_or(LevelFilter::Info);

        let source = match env::args().nth(1).as_ref().map(String::as_str) {
            None | Some("script") => Source::Script,
            Some("-") | Some("stdin") => Source::Stdin,
            Some(other) => return Err(format!("unknown mode `{}`", other)),
        };

        Ok(Settings { log_level, source })
    }
}

fn run(settings: &Settings) -> command::Result<()> {
    let mut set = AvlSet::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match settings.source {
        Source::Script => command::run_demo(&mut set, &mut out)?,
        Source::Stdin => {
            let stdin = io::stdin();
            command::run(stdin.lock(), &mut set, &mut out)?;
        },
    }

    Ok(())
}

fn main() {
    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("usage: avl-collections [script | stdin | -]");
            process::exit(2);
        },
    };

    if let Err(err) = SimpleLogger::init(settings.log_level, Config::default()) {
        eprintln!("could not install logger: {}", err);
    }

    if let Err(err) = run(&settings) {
        error!("{}", err);
        process::exit(1);
    }
}
