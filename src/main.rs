use licensing_skill::{
    cli::{get_cli, get_log_level_from_verbose, run},
    error::default_error_handler,
    store::LocalAssetStore,
};

fn main() {
    let cli = get_cli();
    let log_level = get_log_level_from_verbose(cli.verbose);
    env_logger::Builder::new().filter_level(log_level).init();

    let store = cli.assets_dir.map(LocalAssetStore::new).unwrap_or_default();
    let stdout = std::io::stdout();

    if let Err(err) = run(cli.command, store, stdout.lock()) {
        default_error_handler(err);
    }
}
