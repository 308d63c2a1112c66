use std::path::PathBuf;

fn main() {
    let mut args = std::env::args().skip(1);
    let mut seed_path: Option<PathBuf> = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" | "-s" => {
                seed_path = args.next().map(PathBuf::from);
                if seed_path.is_none() {
                    eprintln!("Error: --seed requires a JSON file path");
                    std::process::exit(1);
                }
            }
            "--help" | "-h" => {
                println!("bday - birthday reminders & messages");
                println!();
                println!("Usage: bday [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -s, --seed <JSON_PATH>   Seed the session from a JSON contact file");
                println!("  -h, --help               Show this help");
                println!();
                println!("Contacts are kept in memory for the session only;");
                println!("without --seed the session starts with example contacts.");
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Use --help for usage information.");
                std::process::exit(1);
            }
        }
    }

    bday::cli::run(seed_path.as_deref());
}
