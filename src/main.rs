fn main() {
    expect_runner::cli::run();
}
