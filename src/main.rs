use reporef::ui::output;

fn main() {
    if let Err(err) = reporef::cli::run() {
        output::error(format!("{:#}", err));
        std::process::exit(1);
    }
}
