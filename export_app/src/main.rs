//! Material export application
//!
//! Command-line host around the `material_gen` library: scans a directory
//! of legacy texture files and writes the engine material file.
//!
//! Usage: material_export --input-dir <dir> --output-file <file>
//!            [--recursive] [--name-prefix <prefix>] [--config <file>]

use std::env;
use std::error::Error;
use std::path::PathBuf;

use material_gen::{write_material_set, ExportConfig, MaterialSetBuilder};

/// Parsed command line of one export run.
#[derive(Debug, PartialEq, Eq)]
struct ExportArgs {
    input_dir: PathBuf,
    output_file: PathBuf,
    recursive: bool,
    name_prefix: String,
    config_file: Option<String>,
}

fn print_usage(program: &str) {
    eprintln!(
        "Usage: {} --input-dir <dir> --output-file <file> [--recursive] [--name-prefix <prefix>] [--config <file>]",
        program
    );
    eprintln!("Converts a directory of legacy textures into an engine material file");
}

fn parse_args(args: &[String]) -> Option<ExportArgs> {
    let mut input_dir = None;
    let mut output_file = None;
    let mut recursive = false;
    let mut name_prefix = String::new();
    let mut config_file = None;

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--input-dir" => input_dir = Some(PathBuf::from(iter.next()?)),
            "--output-file" => output_file = Some(PathBuf::from(iter.next()?)),
            "--recursive" => recursive = true,
            "--name-prefix" => name_prefix = iter.next()?.clone(),
            "--config" => config_file = Some(iter.next()?.clone()),
            _ => {
                eprintln!("Unknown argument: {}", arg);
                return None;
            },
        }
    }

    Some(ExportArgs {
        input_dir: input_dir?,
        output_file: output_file?,
        recursive,
        name_prefix,
        config_file,
    })
}

fn run(args: &ExportArgs) -> Result<usize, Box<dyn Error>> {
    let config = match &args.config_file {
        Some(path) => ExportConfig::load_from_file(path)?,
        None => ExportConfig::default(),
    };

    let builder = MaterialSetBuilder::new(config).with_name_prefix(args.name_prefix.clone());
    let materials = if args.recursive {
        builder.build_recursive(&args.input_dir)?
    } else {
        builder.build(&args.input_dir)?
    };

    write_material_set(&materials, &args.output_file)?;
    Ok(materials.len())
}

fn main() {
    // Initialize logging
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().collect();
    let export_args = match parse_args(&args) {
        Some(parsed) => parsed,
        None => {
            print_usage(&args[0]);
            std::process::exit(1);
        },
    };

    log::info!(
        "Exporting materials from {:?} to {:?}",
        export_args.input_dir,
        export_args.output_file
    );

    match run(&export_args) {
        Ok(count) => {
            log::info!("Done, {} material(s) exported", count);
        },
        Err(e) => {
            eprintln!("Error exporting materials: {}", e);
            std::process::exit(1);
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("material_export")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_parse_args_minimal() {
        let parsed = parse_args(&args(&[
            "--input-dir",
            "textures",
            "--output-file",
            "materials.json",
        ]))
        .unwrap();

        assert_eq!(parsed.input_dir, PathBuf::from("textures"));
        assert_eq!(parsed.output_file, PathBuf::from("materials.json"));
        assert!(!parsed.recursive);
        assert!(parsed.name_prefix.is_empty());
        assert!(parsed.config_file.is_none());
    }

    #[test]
    fn test_parse_args_full() {
        let parsed = parse_args(&args(&[
            "--input-dir",
            "textures",
            "--output-file",
            "materials.json",
            "--recursive",
            "--name-prefix",
            "textures/",
            "--config",
            "export.toml",
        ]))
        .unwrap();

        assert!(parsed.recursive);
        assert_eq!(parsed.name_prefix, "textures/");
        assert_eq!(parsed.config_file.as_deref(), Some("export.toml"));
    }

    #[test]
    fn test_parse_args_rejects_missing_output() {
        assert!(parse_args(&args(&["--input-dir", "textures"])).is_none());
    }

    #[test]
    fn test_parse_args_rejects_unknown_flag() {
        assert!(parse_args(&args(&["--frobnicate"])).is_none());
    }
}
