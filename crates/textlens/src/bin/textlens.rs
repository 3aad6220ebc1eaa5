fn main() {
    if let Err(err) = textlens::run() {
        eprintln!("{}", textlens::format_error(&err));
        std::process::exit(1);
    }
}
