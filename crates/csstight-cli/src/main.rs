use anyhow::{Context, Result};
use csstight_config::Config;
use csstight_engine::Stylesheet;
use std::{env, fs, process};

fn usage(program: &str) {
    eprintln!("Usage: {program} <input.css> [-o <output.css>]");
    eprintln!("With no -o, the compressed stylesheet is written to stdout.");
    eprintln!(
        "Options are read from {} when it exists.",
        Config::config_path().display()
    );
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("csstight");

    let mut input = None;
    let mut output = None;
    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                usage(program);
                return Ok(());
            }
            "-o" | "--output" => match iter.next() {
                Some(path) => output = Some(path.clone()),
                None => {
                    eprintln!("Error: {arg} needs a path");
                    usage(program);
                    process::exit(1);
                }
            },
            _ if input.is_none() => input = Some(arg.clone()),
            _ => {
                eprintln!("Error: unexpected argument '{arg}'");
                usage(program);
                process::exit(1);
            }
        }
    }

    let Some(input) = input else {
        usage(program);
        process::exit(1);
    };

    let config = match Config::load() {
        Ok(Some(config)) => {
            log::debug!("using config file at {}", Config::config_path().display());
            config
        }
        Ok(None) => Config::default(),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };
    let options = config.options();

    let css = fs::read_to_string(&input).with_context(|| format!("failed to read {input}"))?;
    let mut sheet =
        Stylesheet::parse(&css).with_context(|| format!("failed to tokenize {input}"))?;
    sheet.compress(&options);
    let compressed = sheet.render();

    log::info!(
        "{input}: {} bytes in, {} bytes out",
        css.len(),
        compressed.len()
    );

    match output {
        Some(path) => fs::write(&path, &compressed)
            .with_context(|| format!("failed to write {path}"))?,
        None => print!("{compressed}"),
    }

    Ok(())
}
