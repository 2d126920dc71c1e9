fn main() {
    if let Err(e) = chatpane::cli::main() {
        eprintln!("❌ Error: {e}");
        std::process::exit(1);
    }
}
