use layergen::cli::run_cli;

fn main() {
    if let Err(err) = run_cli() {
        eprintln!("❌ {err:#}");
        std::process::exit(1);
    }
}
