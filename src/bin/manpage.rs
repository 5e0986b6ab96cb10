use clap::CommandFactory;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Render shelly-profiles(1) and one page per subcommand into `man/`,
/// or into the directory given as the first argument.
fn main() -> io::Result<()> {
    let out_dir = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("man"));
    fs::create_dir_all(&out_dir)?;

    clap_mangen::generate_to(shelly_profiles::cli::Cli::command(), &out_dir)?;

    let mut pages: Vec<_> = fs::read_dir(&out_dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .collect();
    pages.sort();
    for page in pages {
        println!("Generated {}", page.display());
    }

    Ok(())
}
