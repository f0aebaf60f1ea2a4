fn main() {
    cli_tools::app::cli::run();
}
