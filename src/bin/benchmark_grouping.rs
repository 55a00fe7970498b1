use simgroup::Options;
use std::fs;
use std::time::Instant;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <log_file>", args[0]);
        std::process::exit(1);
    }

    let content = fs::read_to_string(&args[1])?;
    let lines: Vec<&str> = content.lines().take(10000).collect(); // First 10k lines for benchmark

    println!("Benchmarking grouping on {} lines...", lines.len());

    let configs = [
        ("exact", Options::absolute(0)),
        ("absolute 3", Options::absolute(3)),
        ("10% normalized", Options::percentage(10).with_strip_digits(true).with_strip_identifiers(true)),
    ];

    for (name, opts) in configs {
        let start = Instant::now();
        let groups = simgroup::group(lines.iter().copied(), &opts);
        let duration = start.elapsed();
        let lines_per_sec = lines.len() as f64 / duration.as_secs_f64();

        println!("{}:", name);
        println!("  Total time: {:.3}s", duration.as_secs_f64());
        println!("  Lines per second: {:.0}", lines_per_sec);
        println!("  Groups: {} ({:.1} lines/group)",
                 groups.len(),
                 if groups.is_empty() { 0.0 } else { lines.len() as f64 / groups.len() as f64 });
    }

    Ok(())
}
