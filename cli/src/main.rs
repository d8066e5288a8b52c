//! undocx CLI - DOCX content extraction tool

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use env_logger::Env;

use undocx::{
    convert_file, parse_file_with_options, ConvertOptions, DocumentStats, OutputFormat,
    ParseOptions, RenderOptions, Style, StyleMap,
};

/// Conversion finished.
const EXIT_SUCCESS: i32 = 0;
/// Bad flags, unknown or missing subcommand.
const EXIT_USAGE: i32 = 1;
/// Import, render, or write failure.
const EXIT_FAILURE: i32 = 2;
/// No input path given.
const EXIT_MISSING_INPUT: i32 = 3;

#[derive(Parser)]
#[command(name = "undocx")]
#[command(version)]
#[command(about = "Extract Word document content to HTML, text, and JSON", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a DOCX file
    Convert {
        /// Input DOCX file
        #[arg(value_name = "INPUT")]
        input: Option<PathBuf>,

        /// Output path; the extension is replaced to match the format
        #[arg(value_name = "OUTPUT")]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "html")]
        format: Format,

        /// Skip embedded images
        #[arg(long)]
        no_images: bool,

        /// JSON file mapping style names to styles
        #[arg(long, value_name = "FILE")]
        style_map: Option<PathBuf>,

        /// Fixed id for the metadata header
        #[arg(long, value_name = "ID")]
        id: Option<String>,
    },

    /// Show document information
    Info {
        /// Input DOCX file
        #[arg(value_name = "INPUT")]
        input: Option<PathBuf>,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Format {
    /// HTML fragments with a metadata header
    Html,
    /// Plain text
    Text,
    /// JSON dump of the document tree
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Html => OutputFormat::Html,
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
        }
    }
}

type CmdResult = Result<(), Box<dyn std::error::Error>>;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => EXIT_SUCCESS,
                _ => EXIT_USAGE,
            };
            let _ = e.print();
            process::exit(code);
        }
    };

    let result = match cli.command {
        Some(Commands::Convert {
            input,
            output,
            format,
            no_images,
            style_map,
            id,
        }) => {
            let input = require_input(input);
            cmd_convert(
                &input,
                output.as_deref(),
                format,
                no_images,
                style_map.as_deref(),
                id,
            )
        }
        Some(Commands::Info { input }) => cmd_info(&require_input(input)),
        None => {
            println!("{}", "Usage: undocx convert <INPUT> [OUTPUT]".yellow());
            println!("       undocx --help for more information");
            process::exit(EXIT_USAGE);
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e.to_string().red());
        process::exit(EXIT_FAILURE);
    }
}

/// Unwrap the input argument or exit with the missing-input code.
fn require_input(input: Option<PathBuf>) -> PathBuf {
    input.unwrap_or_else(|| {
        eprintln!("{}: missing input file", "Error".red().bold());
        let _ = Cli::command().print_help();
        process::exit(EXIT_MISSING_INPUT);
    })
}

fn load_style_map(path: Option<&Path>) -> Result<StyleMap, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok(StyleMap::from_json(&fs::read_to_string(path)?)?),
        None => Ok(StyleMap::default()),
    }
}

fn cmd_convert(
    input: &Path,
    output: Option<&Path>,
    format: Format,
    no_images: bool,
    style_map: Option<&Path>,
    id: Option<String>,
) -> CmdResult {
    let parse = ParseOptions::new()
        .with_images(!no_images)
        .with_style_map(load_style_map(style_map)?);
    let mut render = RenderOptions::new();
    if let Some(id) = id {
        render = render.with_document_id(id);
    }

    let options = ConvertOptions::new()
        .with_format(format.into())
        .with_parse_options(parse)
        .with_render_options(render);
    let result = convert_file(input, output, &options)?;

    println!("{} {}", "Saved to".green(), result.output_path.display());
    if let Some(dir) = result.images_dir.filter(|_| result.stats.image_count > 0) {
        println!(
            "  {} {} images in {}",
            "└─".dimmed(),
            result.stats.image_count,
            dir.display()
        );
    }

    Ok(())
}

fn cmd_info(input: &Path) -> CmdResult {
    let doc = parse_file_with_options(input, ParseOptions::default())?;
    let stats = DocumentStats::collect(&doc);

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    if let Some(title) = doc.blocks_with_style(Style::Title).next() {
        println!("{}: {}", "Title".bold(), title.plain_text());
    }
    if let Some(subtitle) = doc.blocks_with_style(Style::Subtitle).next() {
        println!("{}: {}", "Subtitle".bold(), subtitle.plain_text());
    }

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Blocks".bold(), stats.block_count);
    println!("{}: {}", "Runs".bold(), stats.run_count);
    println!("{}: {}", "Images".bold(), stats.image_count);
    println!("{}: {}", "Hyperlinks".bold(), stats.hyperlink_count);
    println!("{}: {}", "Words".bold(), stats.word_count);
    println!("{}: {}", "Characters".bold(), stats.char_count);

    if !stats.block_styles.is_empty() {
        println!();
        println!("{}", "Block Styles".cyan().bold());
        println!("{}", "─".repeat(40).dimmed());
        for (style, count) in &stats.block_styles {
            println!("{}: {}", style.to_string().bold(), count);
        }
    }

    Ok(())
}
