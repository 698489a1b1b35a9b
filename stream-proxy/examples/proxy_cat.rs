use std::env;
use std::io::{self, Write};

use anyhow::{Context, Result};

use stream_proxy::ProxySource;
use stream_source::{ByteSource, FileSource};

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        println!("Usage:");
        println!(" cargo run --example proxy_cat <path>");
        return Ok(());
    }

    let path = &args[1];
    let mut source = ProxySource::new(
        FileSource::open(path)
            .with_context(|| format!("Failed to open {}", path))?,
    );

    let mut stdout = io::stdout().lock();
    let mut chunk = [0u8; 8 * 1024];
    let mut total = 0u64;
    while let Some(read) = source
        .read(&mut chunk)
        .context("Failed to read from the source")?
    {
        stdout.write_all(&chunk[..read])?;
        total += read as u64;
    }
    source.close().context("Failed to close the source")?;
    log::info!("Copied {} bytes from {}", total, path);
    Ok(())
}
