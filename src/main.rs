fn main() {
    ocp_install::app::cli::run();
}
