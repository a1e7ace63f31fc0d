//! Replay entry point.

fn main() {
    env_logger::init();
    log::info!("Starting CadInput replay");

    let result = cadinput_app::Args::parse(std::env::args().skip(1))
        .and_then(|args| cadinput_app::run(&args));
    match result {
        Ok(Some(report)) => println!("{report}"),
        Ok(None) => {}
        Err(err) => {
            log::error!("{err}");
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
