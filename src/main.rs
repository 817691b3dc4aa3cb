use std::fs::File;
use std::io::{stdin, stdout, BufRead, BufReader, Write};

use anyhow::Context;
use clap::{App, Arg, ArgMatches, SubCommand};

use sentimeter::{
    correct_with, AnalysisHistory, Analyzer, Language, Lexicon, Policy, SpellingModel,
    SubjectivityTier,
};

fn main() -> anyhow::Result<()> {
    let matches = App::new("sentimeter")
        .version("0.1")
        .about("Score sentiment in text, fix misspellings, or train a spelling model.")
        .subcommand(
            SubCommand::with_name("analyze")
                .about("Score texts line by line and keep a session history")
                .arg(
                    Arg::with_name("lexicon")
                        .short("l")
                        .long("lexicon")
                        .value_name("FILE")
                        .help("Custom sentiment lexicon file. The built-in lexicon by default.")
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("language")
                        .long("language")
                        .value_name("LANG")
                        .help("Input language, en or es. Without a translation backend the text is scored as-is.")
                        .takes_value(true)
                        .default_value("en"),
                )
                .arg(
                    Arg::with_name("simple")
                        .long("simple")
                        .help("Use the legacy three-band classification instead of five bands."),
                )
                .arg(
                    Arg::with_name("input")
                        .short("i")
                        .long("input")
                        .value_name("FILE")
                        .help("File containing texts to analyze, one per line. stdin by default.")
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("output")
                        .short("o")
                        .long("output")
                        .value_name("FILE")
                        .help("File into which results will be written. stdout by default.")
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("history")
                        .long("history")
                        .value_name("FILE")
                        .help("Write the session history as JSON, for plotting or logging elsewhere.")
                        .takes_value(true),
                ),
        )
        .subcommand(
            SubCommand::with_name("correct")
                .about("Fix misspellings using a trained spelling model")
                .arg(
                    Arg::with_name("model")
                        .short("m")
                        .long("model")
                        .value_name("FILE")
                        .help("File containing the spelling model produced by the `train` command.")
                        .takes_value(true)
                        .required(true),
                )
                .arg(
                    Arg::with_name("input")
                        .short("i")
                        .long("input")
                        .value_name("FILE")
                        .help("File containing texts to correct, one per line. stdin by default.")
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("output")
                        .short("o")
                        .long("output")
                        .value_name("FILE")
                        .help("File into which corrected texts will be written. stdout by default.")
                        .takes_value(true),
                ),
        )
        .subcommand(
            SubCommand::with_name("train")
                .about("Build a spelling model from corpus files")
                .arg(
                    Arg::with_name("output")
                        .short("o")
                        .long("output")
                        .value_name("FILE")
                        .help("File where the newly trained model will be written.")
                        .takes_value(true)
                        .required(true),
                )
                .arg(
                    Arg::with_name("input")
                        .short("i")
                        .long("input")
                        .value_name("FILE")
                        .help("File containing training text, one sentence per line.")
                        .takes_value(true)
                        .required(true)
                        .multiple(true),
                ),
        )
        .get_matches();

    if let Some(matches) = matches.subcommand_matches("analyze") {
        do_analyze(matches)?;
    }

    if let Some(matches) = matches.subcommand_matches("correct") {
        do_correct(matches)?;
    }

    if let Some(matches) = matches.subcommand_matches("train") {
        do_train(matches)?;
    }

    Ok(())
}

fn do_analyze(matches: &ArgMatches) -> anyhow::Result<()> {
    let lexicon = match matches.value_of("lexicon") {
        Some(filename) => Lexicon::load_from_file(filename)
            .with_context(|| format!("cannot load lexicon from {}", filename))?,
        None => Lexicon::builtin(),
    };

    let language: Language = matches.value_of("language").unwrap_or("en").parse()?;

    let policy = if matches.is_present("simple") {
        Policy::ThreeBand
    } else {
        Policy::FiveBand
    };

    let analyzer = Analyzer::new(lexicon).with_policy(policy);
    let mut history = AnalysisHistory::new();

    let input = open_input(matches.value_of("input"))?;
    let mut output = open_output(matches.value_of("output"))?;

    for line in input.lines() {
        let line = line?;
        let analysis = match analyzer.analyze(&line, language, &mut history)? {
            Some(analysis) => analysis,
            None => continue,
        };

        let tier = SubjectivityTier::from_subjectivity(analysis.subjectivity);
        writeln!(
            output,
            "{} {}  polarity={:.2}  subjectivity={:.2} ({})",
            analysis.band.emoji(),
            analysis.band.label(),
            analysis.polarity,
            analysis.subjectivity,
            tier.label(),
        )?;
    }

    if let Some(filename) = matches.value_of("history") {
        let records: Vec<_> = history.all().collect();
        let serialized = serde_json::to_string(&records)?;
        File::create(filename)?.write_all(serialized.as_bytes())?;
    }

    Ok(())
}

fn do_correct(matches: &ArgMatches) -> anyhow::Result<()> {
    // safe because the argument is required
    let model_filename = matches.value_of("model").unwrap();
    let model = SpellingModel::load_from_file(model_filename)
        .with_context(|| format!("cannot load spelling model from {}", model_filename))?;

    let input = open_input(matches.value_of("input"))?;
    let mut output = open_output(matches.value_of("output"))?;

    for line in input.lines() {
        let line = line?;
        match correct_with(&model, &line)? {
            Some(correction) => {
                output.write_all(correction.corrected.as_bytes())?;
                output.write_all(b"\n")?;
            }
            None => output.write_all(b"\n")?,
        }
    }

    Ok(())
}

fn do_train(matches: &ArgMatches) -> anyhow::Result<()> {
    // both .unwraps are safe because the arguments are required
    let output_filename = matches.value_of("output").unwrap();
    let input_filenames: Vec<_> = matches.values_of("input").unwrap().collect();

    let mut model = SpellingModel::new();
    for filename in input_filenames {
        model
            .train_on_file(filename)
            .with_context(|| format!("cannot read corpus file {}", filename))?;
    }
    model.save_to_file(output_filename)?;

    Ok(())
}

fn open_input(filename: Option<&str>) -> anyhow::Result<Box<dyn BufRead>> {
    Ok(match filename {
        Some(filename) => Box::new(BufReader::new(
            File::open(filename).with_context(|| format!("cannot open {}", filename))?,
        )),
        None => Box::new(BufReader::new(stdin())),
    })
}

fn open_output(filename: Option<&str>) -> anyhow::Result<Box<dyn Write>> {
    Ok(match filename {
        Some(filename) => Box::new(
            File::create(filename).with_context(|| format!("cannot create {}", filename))?,
        ),
        None => Box::new(stdout()),
    })
}
