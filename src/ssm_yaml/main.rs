use clap::Parser;
use colored::Colorize;
use log::debug;
use serde_yaml::Value;
use ssm_yaml::api::SsmYamlApi;
use ssm_yaml::commands::load::LoadOptions;
use ssm_yaml::commands::save::SaveOptions;
use ssm_yaml::commands::tree::TreeOptions;
use ssm_yaml::commands::{yaml_tree, CmdMessage, MessageLevel};
use ssm_yaml::error::{Result, SsmYamlError};
use ssm_yaml::store::ssm::SsmStore;
use std::io::{BufRead, Write};
use std::path::Path;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);
    debug!("ssm-yaml {}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Load {
            file,
            prefix,
            secure,
            auto_secure,
            overwrite,
            values,
        } => {
            let doc = read_document(&file)?;
            let opts = LoadOptions {
                prefix: checked_prefix(prefix)?,
                secure,
                auto_secure,
                overwrite,
                show_values: values,
            };
            let mut api = connect(cli.region)?;
            let result = api.load(&doc, &opts)?;
            print_messages(&result.messages);
            Ok(())
        }

        Commands::Save { prefix, out, raw } => {
            let opts = SaveOptions {
                prefix: checked_prefix(prefix)?,
                raw,
            };
            let api = connect(cli.region)?;
            let result = api.save(&opts)?;
            if let Some(document) = &result.document {
                write_document(document, out.as_deref())?;
            }
            print_messages(&result.messages);
            Ok(())
        }

        Commands::Delete { file, prefix, yes } => {
            let doc = read_document(&file)?;
            let prefix = checked_prefix(prefix)?;
            let mut api = connect(cli.region)?;

            let plan = api.delete_plan(&doc, &prefix);
            if plan.is_empty() {
                println!("No parameters found in the YAML file.");
                return Ok(());
            }

            println!(
                "The following {} parameters will be deleted:",
                plan.keys.len()
            );
            for key in &plan.keys {
                let lock = if key.secret { " 🔒" } else { "" };
                println!("{}{}", key.path.bright_black().bold(), lock);
            }

            if !yes && !confirm("Are you sure? (y/N): ")? {
                println!("Aborted.");
                return Ok(());
            }

            let result = api.delete_execute(&plan)?;
            print_messages(&result.messages);
            Ok(())
        }

        Commands::Tree {
            prefix,
            decrypt,
            values,
        } => {
            let opts = TreeOptions {
                prefix: checked_prefix(prefix)?,
                decrypt,
                show_values: values,
            };
            let api = connect(cli.region)?;
            let result = api.tree(&opts)?;
            for line in &result.tree_lines {
                println!("{}", line);
            }
            Ok(())
        }

        Commands::YamlTree { file, values } => {
            let doc = read_document(&file)?;
            let result = yaml_tree::run(&doc, values);
            println!("{}", "root".bright_cyan().bold());
            for line in &result.tree_lines {
                println!("{}", line);
            }
            Ok(())
        }
    }
}

fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn connect(region: Option<String>) -> Result<SsmYamlApi<SsmStore>> {
    let store = SsmStore::connect(region)?;
    Ok(SsmYamlApi::new(store))
}

fn read_document(path: &Path) -> Result<Value> {
    let raw = std::fs::read_to_string(path)?;
    let doc = serde_yaml::from_str(&raw)?;
    Ok(doc)
}

fn write_document(document: &Value, out: Option<&Path>) -> Result<()> {
    let rendered = serde_yaml::to_string(document)?;
    match out {
        Some(path) if path != Path::new("-") => std::fs::write(path, rendered)?,
        _ => print!("{}", rendered),
    }
    Ok(())
}

fn checked_prefix(prefix: String) -> Result<String> {
    if !prefix.starts_with('/') {
        return Err(SsmYamlError::Config(format!(
            "prefix must start with '/': {prefix}"
        )));
    }
    Ok(prefix)
}

fn confirm(question: &str) -> Result<bool> {
    print!("{}", question);
    std::io::stdout().flush()?;
    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;
    let answer = answer.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}
