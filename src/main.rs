use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;
use vocalc::Calculator;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let calculator = Calculator::default();
    let mut buffer = String::new();
    let mut stdout = io::stdout();
    let mut stdin = io::stdin().lock();
    loop {
        stdout.write_all("> ".as_bytes())?;
        stdout.flush()?;
        buffer.clear();
        if stdin.read_line(&mut buffer)? == 0 {
            break;
        }
        let utterance = buffer.trim();
        if utterance.is_empty() {
            continue;
        }
        match calculator.calculate(utterance) {
            Ok(calculation) => println!("{} = {}", calculation.rendered, calculation.formatted),
            Err(e) => eprintln!("Error {e}"),
        }
    }
    Ok(())
}
