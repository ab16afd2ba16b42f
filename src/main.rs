use namecast::{Config, Converter, Script, Target};
use std::env;
use std::fs;
use std::io;
use std::io::prelude::*;
use std::io::BufReader;
use std::process;

const USAGE: &str = "
Usage:
    namecast convert [options] <name>
    namecast convert [options] -
    namecast detect <text>

Options:
    --from <script>     Treat the input as this script instead of detecting it
    --to <target>       `latin` or `ascii` (default: ascii)
    --locale <locale>   Language tag or culture name, e.g. `vi` or `indonesian`
    --config <path>     JSON file overriding thresholds and weights

With the `convert` command, namecast transliterates and parses the name and
prints the conversion as JSON. If `-` is the argument, it expects
newline-separated names on stdin and prints one line of JSON per name, or an
empty line for names it could not convert. Otherwise it exits with status 0 if
the conversion succeeds and status 1 if not.

With the `detect` command, it prints the dominant script of the text as JSON.

Set RUST_LOG=debug to trace the pipeline on stderr.
";

struct Options {
    source: Option<Script>,
    target: Target,
    locale: Option<String>,
    config: Config,
    input: Vec<String>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();
    match args.get(1).map(|s| s.as_str()) {
        Some("convert") if args.len() > 2 => match parse_options(&args[2..]) {
            Ok(options) => convert_mode(options),
            Err(message) => usage_error(&message),
        },
        Some("detect") if args.len() > 2 => detect_mode(&args[2..].join(" ")),
        _ => usage_error(""),
    }
}

fn usage_error(message: &str) -> ! {
    if !message.is_empty() {
        eprintln!("{}", message);
    }
    eprintln!("{}", USAGE);
    process::exit(64);
}

fn parse_options(args: &[String]) -> Result<Options, String> {
    let mut options = Options {
        source: None,
        target: Target::Ascii,
        locale: None,
        config: Config::default(),
        input: Vec::new(),
    };

    let mut args = args.iter();
    while let Some(arg) = args.next() {
        let mut value = || {
            args.next()
                .ok_or_else(|| format!("Missing value for {}", arg))
        };
        match arg.as_str() {
            "--from" => options.source = Some(value()?.parse().map_err(|e| format!("{}", e))?),
            "--to" => options.target = value()?.parse().map_err(|e| format!("{}", e))?,
            "--locale" => options.locale = Some(value()?.clone()),
            "--config" => {
                let path = value()?;
                let json = fs::read_to_string(path)
                    .map_err(|e| format!("Could not read {}: {}", path, e))?;
                options.config = Config::from_json(&json)
                    .map_err(|e| format!("Invalid config {}: {}", path, e))?;
            }
            _ => options.input.push(arg.clone()),
        }
    }

    if options.input.is_empty() {
        Err("No name given".to_string())
    } else {
        Ok(options)
    }
}

fn convert_mode(options: Options) {
    let converter = Converter::with_config(options.config);
    let convert = |input: &str| {
        converter
            .process(input, options.source, options.target, options.locale.as_deref())
            .map_err(|e| e.to_string())
            .and_then(|c| c.to_json().map_err(|e| e.to_string()))
    };

    if options.input.len() == 1 && options.input[0] == "-" {
        let reader = BufReader::new(io::stdin());
        for line in reader.lines() {
            let input = match line {
                Ok(input) => input,
                Err(_) => break,
            };
            let output = match convert(&input) {
                Ok(json) => json,
                Err(e) => {
                    log::info!("[{}] {}", input.trim(), e);
                    String::new()
                }
            };
            if writeln!(&mut io::stdout(), "{}", output).is_err() {
                break;
            }
        }
    } else {
        match convert(&options.input.join(" ")) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("{}", e);
                process::exit(1);
            }
        }
    }
}

fn detect_mode(text: &str) {
    match namecast::detect_script(text).to_json() {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    }
}
