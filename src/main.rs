use std::{env, fs, path::PathBuf, process::exit, time::Instant};

use highlighter::{
    config::config::{keywords_from_file, Config, Styles},
    errors::errors::HighlightError,
    highlight,
};

fn main() {
    let args: Vec<String> = env::args().collect();

    if let Err(error) = run(&args[1..]) {
        eprintln!("Error: {}", error);
        exit(1);
    }
}

fn usage() -> ! {
    eprintln!(
        "Usage: highlighter <file> [-o <output>] [--style key=css]... [--keywords <file>]"
    );
    exit(1);
}

fn run(args: &[String]) -> Result<(), HighlightError> {
    let mut input: Option<String> = None;
    let mut output: Option<String> = None;
    let mut styles = Styles::default();
    let mut keywords = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-o" => {
                i += 1;
                match args.get(i) {
                    Some(path) => output = Some(path.clone()),
                    None => usage(),
                }
            }
            "--style" => {
                i += 1;
                let arg = match args.get(i) {
                    Some(arg) => arg,
                    None => usage(),
                };
                let (key, value) = match arg.split_once('=') {
                    Some(pair) => pair,
                    None => {
                        return Err(HighlightError::InvalidStyleOverride { arg: arg.clone() })
                    }
                };
                styles.set(key.trim(), value)?;
            }
            "--keywords" => {
                i += 1;
                match args.get(i) {
                    Some(path) => keywords = Some(keywords_from_file(&PathBuf::from(path))?),
                    None => usage(),
                }
            }
            _ if input.is_none() => input = Some(args[i].clone()),
            _ => usage(),
        }
        i += 1;
    }

    let input = match input {
        Some(input) => input,
        None => usage(),
    };

    let text = fs::read_to_string(&input).map_err(|source| HighlightError::ReadInput {
        path: input.clone(),
        source,
    })?;

    let config = Config::new(Some(styles), keywords);

    let start = Instant::now();
    let html = highlight(&text, &config);
    println!("Highlighted in {:?}", start.elapsed());

    let output = output.unwrap_or_else(|| format!("{}.html", input));
    fs::write(&output, html).map_err(|source| HighlightError::WriteOutput {
        path: output.clone(),
        source,
    })?;
    println!("Wrote {}", output);

    Ok(())
}
