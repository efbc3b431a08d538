//! Level table generator.
//!
//! Prints the 30-level campaign table as pretty JSON on stdout:
//!
//!   cargo run --release > assets/config/LevelConfig.json
//!
//! Diagnostics go to stderr so the redirected file only holds JSON.

use needle_levels::build_info;
use needle_levels::generate_levels;
use std::io;

fn print_help() {
    println!("Needle Levels - level table generator\n");
    println!("Usage: needle-levels [option]\n");
    println!("With no option, writes the level table as JSON to stdout.\n");
    println!("Options:");
    println!("  --version  Show version information");
    println!("  --help     Show this help message");
}

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!("{}", build_info::version_string());
                return Ok(());
            }
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'needle-levels --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    let table = generate_levels();
    table.write_to(io::stdout().lock())?;

    eprintln!(
        "Wrote {} levels (bosses at {:?}) with {}",
        table.len(),
        table.boss_levels(),
        build_info::version_string()
    );
    Ok(())
}
