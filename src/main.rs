use apod_wallpaper::{Apod, ApodConfig};
use clap::Parser;

mod args;
use args::Args;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize logging, showing progress unless RUST_LOG says otherwise
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Parse command-line arguments
    let args = Args::parse();

    let result = Apod::new(ApodConfig::default())
        .with_save_only(args.save_only)
        .run()
        .await;

    match result {
        Ok(report) => {
            ::log::info!("Done: {}", report.saved.path.display());
        }
        Err(e) => {
            ::log::error!("{}", e);
            std::process::exit(e.exit_code());
        }
    }
}
