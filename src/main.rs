fn main() -> std::process::ExitCode {
    oggalaxy::cli::run()
}
