use clap::{crate_version, App as Cli, Arg};
use log::*;
use usermaker::app::App;
use usermaker::config::Config;
use usermaker::error::AppResult;
use usermaker::logger;
use usermaker::store::MemoryStore;

fn main() {
    let code = match run() {
        Ok(()) => 0,
        Err(e) => {
            error!("{}", e.flattened());
            1
        }
    };
    log::logger().flush();
    std::process::exit(code);
}

/// Parse arguments, load configuration and run the form once.
///
fn run() -> AppResult<()> {
    let matches = Cli::new("usermaker")
        .version(crate_version!())
        .about("Create a new user from the terminal")
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Custom configuration directory")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .help("Log debug messages"),
        )
        .arg(
            Arg::with_name("no-seed")
                .long("no-seed")
                .help("Start with an empty user store"),
        )
        .get_matches();

    let logger = logger::init(LevelFilter::Info)?;

    let mut config = Config::new();
    config.load(matches.value_of("config"))?;
    if matches.is_present("verbose") {
        config.log_level = LevelFilter::Debug;
    }
    if matches.is_present("no-seed") {
        config.seed = false;
    }
    log::set_max_level(config.log_level);
    debug!("Loaded configuration {:?}", config);

    let store = if config.seed {
        MemoryStore::seeded()
    } else {
        MemoryStore::new()
    };
    let hasher = config.hasher()?;

    App::new(&store, &hasher).with_logger(logger).start()?;
    Ok(())
}
