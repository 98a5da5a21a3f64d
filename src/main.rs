fn main() {
    figgie_engine::cli::run();
}
