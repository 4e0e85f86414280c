#![allow(clippy::print_stdout, clippy::print_stderr)]
use crate::cli::{Args, CapabilityCommand, Command, ResultsCommand};
use anyhow::{bail, Context};
use clap::Parser;
use rdf_console::capability::{Capability, CapabilityActionSet, CapabilityTopic};
use rdf_console::results::{QueryResults, QuerySolutions, ResultsFormat};
use std::ffi::OsStr;
use std::fs::File;
use std::io::{self, stdin, stdout, BufWriter, Write};
use std::path::Path;

mod cli;

pub fn main() -> anyhow::Result<()> {
    let matches = Args::parse();
    match matches.command {
        Command::Capability(command) => run_capability(command),
        Command::Results(command) => run_results(command),
    }
}

fn run_capability(command: CapabilityCommand) -> anyhow::Result<()> {
    match command {
        CapabilityCommand::Parse {
            expression,
            check_actions,
        } => {
            let capability = expression.parse::<Capability>()?;
            if check_actions {
                capability.validate()?;
            }
            println!("area: {}", capability.topic.area);
            if let Some(subject) = &capability.topic.subject {
                println!("subject: {subject}");
            }
            if let Some(scope) = &capability.topic.scope {
                println!("scope: {scope}");
            }
            println!("actions: {}", capability.actions);
            Ok(())
        }
        CapabilityCommand::Format {
            area,
            subject,
            scope,
            actions,
        } => {
            let actions = actions.parse::<CapabilityActionSet>()?;
            let mut topic = CapabilityTopic::new(area);
            if let Some(subject) = subject {
                topic = topic.with_subject(subject);
            }
            if let Some(scope) = scope {
                topic = topic.with_scope(scope);
            }
            let capability = Capability::new(topic, actions);
            capability.validate()?;
            println!("{capability}");
            Ok(())
        }
    }
}

fn run_results(command: ResultsCommand) -> anyhow::Result<()> {
    match command {
        ResultsCommand::Convert {
            from_file,
            to_file,
            to_format,
            sort_by,
            descending,
            page,
            page_size,
        } => {
            let format = if let Some(format) = to_format {
                results_format_from_name(&format)?
            } else if let Some(file) = &to_file {
                results_format_from_path(file)?
            } else {
                bail!("The --to-format option must be set when writing to stdout")
            };

            let mut results = match &from_file {
                Some(file) => QueryResults::from_json_reader(
                    File::open(file).with_context(|| format!("Not able to open {}", file.display()))?,
                )?,
                None => QueryResults::from_json_reader(stdin().lock())?,
            };

            if let Some(variable) = &sort_by {
                match &mut results {
                    QueryResults::Solutions(solutions) => {
                        if descending {
                            solutions.sort_descending(variable);
                        } else {
                            solutions.sort_ascending(variable);
                        }
                    }
                    QueryResults::Boolean(_) => bail!("A boolean result cannot be sorted"),
                }
            }

            if let Some(index) = page {
                if page_size == 0 {
                    bail!("The page size must be positive")
                }
                results = match results {
                    QueryResults::Solutions(solutions) => {
                        QueryResults::Solutions(QuerySolutions::new(
                            solutions.variables().to_vec(),
                            solutions.page(index, page_size).to_vec(),
                        ))
                    }
                    QueryResults::Boolean(_) => bail!("A boolean result cannot be paged"),
                };
            }

            let output = match format {
                ResultsFormat::Csv => results.to_csv(),
                ResultsFormat::Tsv => results.to_tsv(),
                ResultsFormat::Json => results.to_json()?,
            };
            match to_file {
                Some(file) => {
                    let mut writer = BufWriter::new(
                        File::create(&file)
                            .with_context(|| format!("Not able to create {}", file.display()))?,
                    );
                    writer.write_all(output.as_bytes())?;
                    close_file_writer(writer)?;
                }
                None => stdout().lock().write_all(output.as_bytes())?,
            }
            Ok(())
        }
    }
}

fn results_format_from_path(path: &Path) -> anyhow::Result<ResultsFormat> {
    if let Some(ext) = path.extension().and_then(OsStr::to_str) {
        ResultsFormat::from_extension(ext)
            .with_context(|| format!("The file extension '{ext}' is unknown"))
    } else {
        bail!(
            "The path {} has no extension to guess a file format from",
            path.display()
        )
    }
}

fn results_format_from_name(name: &str) -> anyhow::Result<ResultsFormat> {
    if let Some(t) = ResultsFormat::from_extension(name) {
        return Ok(t);
    }
    if let Some(t) = ResultsFormat::from_media_type(name) {
        return Ok(t);
    }
    bail!("The results format '{name}' is unknown")
}

fn close_file_writer(writer: BufWriter<File>) -> io::Result<()> {
    let mut file = writer
        .into_inner()
        .map_err(io::IntoInnerError::into_error)?;
    file.flush()?;
    file.sync_all()
}
