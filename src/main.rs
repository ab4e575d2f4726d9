use clap::{Arg, ArgAction, Command};
use owo_colors::OwoColorize;
use std::path::Path;
use tracing::{debug, Level};

use pseudocode::error::Failure;
use pseudocode::output;
use pseudocode::parsing;
use pseudocode::rendering;
use pseudocode::templating::{fill, Fragment, Standalone};

fn main() {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    let matches = Command::new("pseudocode")
        .version(VERSION)
        .about("Render algorithm descriptions as typeset pseudocode.")
        .arg(
            Arg::new("pdf")
                .long("pdf")
                .value_name("FILE")
                .help("Typeset the pseudocode and write the resultant PDF to this file."),
        )
        .arg(
            Arg::new("png")
                .long("png")
                .value_name("FILE")
                .help("Typeset the pseudocode and write an image of it to this file."),
        )
        .arg(
            Arg::new("only-print")
                .long("only-print")
                .action(ArgAction::SetTrue)
                .help("Only print the pseudocode. This is the default if neither --pdf nor --png are given."),
        )
        .arg(
            Arg::new("standalone")
                .long("standalone")
                .action(ArgAction::SetTrue)
                .help("Print a complete document, including the preamble, rather than just the algorithm body."),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .help("Emit diagnostic logging to standard error. Repeat for more detail."),
        )
        .arg(
            Arg::new("filename")
                .required(true)
                .help("The file containing the syntax tree of the code you want to render, or '-' for standard input."),
        )
        .get_matches();

    let level = match matches.get_count("verbose") {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let filename = match matches.get_one::<String>("filename") {
        Some(filename) => Path::new(filename),
        None => unreachable!("clap enforces the required filename"),
    };
    let pdf = matches
        .get_one::<String>("pdf")
        .map(Path::new);
    let png = matches
        .get_one::<String>("png")
        .map(Path::new);

    debug!(?filename, ?pdf, ?png);

    let content = match parsing::load(filename) {
        Ok(content) => content,
        Err(error) => fail(&Failure::from(error)),
    };

    let module = match parsing::parse(filename, &content) {
        Ok(module) => module,
        Err(error) => fail(&Failure::from(error)),
    };

    let document = match rendering::render(&module) {
        Ok(document) => document,
        Err(error) => fail(&Failure::rendering(filename, &error)),
    };

    if pdf.is_none() && png.is_none() {
        let result = if matches.get_flag("standalone") {
            fill(&Standalone, &document)
        } else {
            fill(&Fragment, &document)
        };

        match result {
            Ok(text) => print!("{}", text),
            Err(error) => fail(&Failure::other(
                filename,
                "Template failed",
                error.to_string(),
            )),
        }
        return;
    }

    if filename.to_str() == Some("-") {
        eprintln!(
            "{}: Unable to typeset from standard input.",
            "error".bright_red()
        );
        std::process::exit(1);
    }

    let markup = match fill(&Standalone, &document) {
        Ok(markup) => markup,
        Err(error) => fail(&Failure::other(
            filename,
            "Template failed",
            error.to_string(),
        )),
    };

    let typeset = output::via_pdflatex(filename, &markup).and_then(|built| {
        if let Some(target) = png {
            let image = output::rasterize(&built)?;
            let image = output::deliver(&image, target)?;
            println!("PNG at file://{}", image.display());
        }
        if let Some(target) = pdf {
            let built = output::deliver(&built, target)?;
            println!("PDF at file://{}", built.display());
        }
        Ok(())
    });

    if let Err(error) = typeset {
        fail(&Failure::other(filename, &error.problem(), error.details()));
    }
}

fn fail(failure: &Failure) -> ! {
    eprintln!("{}", failure.full_details());
    std::process::exit(1);
}
