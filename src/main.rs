use std::path::Path;

use meshview::options::Options;
use meshview::Viewer;

/// Options file looked for next to the working directory.
const OPTIONS_FILE: &str = "meshview.toml";

fn main() {
    env_logger::init();

    let options = if Path::new(OPTIONS_FILE).exists() {
        match Options::load(Path::new(OPTIONS_FILE)) {
            Ok(opts) => {
                log::info!("loaded options from {OPTIONS_FILE}");
                opts
            }
            Err(e) => {
                log::error!("ignoring {OPTIONS_FILE}: {e}");
                Options::default()
            }
        }
    } else {
        Options::default()
    };

    let mut builder = Viewer::builder().with_options(options);
    if let Some(path) = std::env::args().nth(1) {
        builder = builder.with_path(path);
    }

    if let Err(e) = builder.build().run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
