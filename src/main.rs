use std::io::{self, Write};
use std::process::exit;

use clap::Parser;
use log::{error, info};

use numeric_bridge::caller;
use numeric_bridge::config::{Config, ProviderKind};
use numeric_bridge::contract;
use numeric_bridge::logging::setup_logger;
use numeric_bridge::provider::{CProvider, DynamicProvider, LinkedProvider, Provider};

fn main() {
    let conf = Config::parse();
    setup_logger(conf.trace, conf.debug);
    exit(run(&conf));
}

fn run(conf: &Config) -> i32 {
    if conf.emit_header {
        print!("{}", contract::render_c_header());
        return 0;
    }

    let provider: Box<dyn Provider> = match conf.library {
        Some(ref path) => match DynamicProvider::load(path) {
            Ok(provider) => Box::new(provider),
            Err(err) => {
                error!("Cannot start: {}", err);
                return 1;
            }
        },
        None => match conf.provider {
            ProviderKind::Rust => Box::new(LinkedProvider),
            ProviderKind::C => Box::new(CProvider),
        },
    };
    info!("Using {} provider, input {}", provider.describe(), conf.input);

    let invocation = caller::invoke(provider.as_ref(), conf.input, conf.mode());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(err) = caller::render(&invocation, &mut out).and_then(|_| out.flush()) {
        error!("Writing results failed: {}", err);
        return 1;
    }
    0
}
