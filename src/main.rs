fn main() {
    botstrap::app::cli::run();
}
