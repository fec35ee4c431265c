use huffpack::compress;
use huffpack::decompress;
use huffpack::dump;
use huffpack::file_tree;
use huffpack::HuffError;
use std::io;
use std::process;

const USAGE: &str = "usage: huffpack <compress|decompress|tree|dump> <file>";

fn run(command: &str, path: &str) -> Result<(), HuffError> {
    match command {
        "compress" => {
            let report = compress(path)?;
            print!("{}", report.code_table);
            println!(
                "{} symbols ({} distinct), {} -> {} bytes ({:.1}%) in {}ms",
                report.total_symbols,
                report.distinct_symbols,
                report.source_bytes,
                report.output_bytes,
                report.ratio() * 100.0,
                report.elapsed_millis()
            );
            println!("wrote {}", report.output_path.display());
        }
        "decompress" => {
            let report = decompress(path)?;
            println!(
                "{} symbols, {} -> {} bytes in {}ms",
                report.total_symbols,
                report.source_bytes,
                report.output_bytes,
                report.elapsed_millis()
            );
            println!("wrote {}", report.output_path.display());
        }
        "tree" => {
            print!("{}", file_tree(path)?);
        }
        "dump" => {
            let stdout = io::stdout();
            dump(path, &mut stdout.lock())?;
        }
        _ => {
            eprintln!("{}", USAGE);
            process::exit(2);
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();

    let args = std::env::args().skip(1).collect::<Vec<_>>();
    if args.len() != 2 {
        eprintln!("{}", USAGE);
        process::exit(2);
    }
    if let Err(err) = run(&args[0], &args[1]) {
        eprintln!("huffpack: {}", err);
        process::exit(1);
    }
}
