fn main() {
    if let Err(err) = samplekit::run() {
        eprintln!("{}", samplekit::format_error(&err));
        std::process::exit(1);
    }
}
