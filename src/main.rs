fn main() {
    env_logger::init();

    if let Err(err) = openimages_pen::run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
