fn main() {
    adspecta::app::cli::run();
}
