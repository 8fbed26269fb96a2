use anyhow::Result;
use calc_portal_server::cli_style::{
    get_prompt, get_styles, print_empty_list, print_error, print_goodbye, print_help,
    print_key_value, print_list_item, print_section_footer, print_section_header, print_success,
    print_warning, print_welcome, CommandHelp, TableBuilder,
};
use calc_portal_server::config::DEFAULT_SEARCH_LIMIT;
use calc_portal_server::content::{load_content, Locale, LocalizedContent, DEFAULT_LOCALE};
use calc_portal_server::content_store::StaticContentStore;
use calc_portal_server::registry::ContentRegistry;
use calc_portal_server::search::{PortalSearchResults, SearchVault, SubstringSearchVault};
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use rustyline::{
    completion::Completer, highlight::Highlighter, history::FileHistory, validate::Validator,
    CompletionType, Config, Editor, Helper,
};

fn parse_path(s: &str) -> Result<PathBuf> {
    let original_path = PathBuf::from(s);
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
#[command(styles=get_styles())]
struct CliArgs {
    /// Path to the content directory (calculators/, articles/, standards/).
    #[clap(value_parser = parse_path)]
    pub content_dir: PathBuf,

    /// Locale to search in until changed with `locale`.
    #[clap(long, default_value_t = DEFAULT_LOCALE.to_string())]
    pub locale: String,

    /// Maximum results per content type.
    #[clap(long, default_value_t = DEFAULT_SEARCH_LIMIT)]
    pub limit: usize,
}

#[derive(Parser)]
#[command(styles=get_styles(), name = "", disable_help_subcommand = true)]
struct InnerCli {
    #[command(subcommand)]
    command: InnerCommand,
}

#[derive(Subcommand, Debug, PartialEq)]
enum InnerCommand {
    /// Searches calculators, articles and standards.
    Search {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },

    /// Shows or changes the session locale.
    Locale { locale: Option<String> },

    /// Shows or changes the per-type result limit. 0 removes the limit.
    Limit { limit: Option<usize> },

    /// Lists calculators, optionally within one category.
    Calculators { category: Option<String> },

    /// Lists calculator categories.
    Categories,

    /// Lists articles.
    Articles,

    /// Lists standards, optionally for one country.
    Standards { country: Option<String> },

    /// Shows the record with the given id.
    Show { id: String },

    /// Shows record counts per type and locale.
    Stats,

    /// Shows the path of the loaded content directory.
    Where,

    /// Shows this help.
    Help,

    /// Close this program.
    Exit,
}

enum CommandExecutionResult {
    Ok,
    Exit,
    Error(String),
}

struct Session {
    registry: Arc<ContentRegistry>,
    search_vault: Box<dyn SearchVault>,
    content_dir: PathBuf,
    locale: String,
    limit: Option<usize>,
}

impl Session {
    fn new(registry: Arc<ContentRegistry>, content_dir: PathBuf, locale: String, limit: usize) -> Self {
        Session {
            search_vault: Box::new(SubstringSearchVault::new(registry.clone())),
            registry,
            content_dir,
            locale,
            limit: limit_from(limit),
        }
    }
}

fn limit_from(limit: usize) -> Option<usize> {
    if limit == 0 {
        None
    } else {
        Some(limit)
    }
}

fn fallback_note(fallback_used: bool, locale: Locale) {
    if fallback_used {
        print_warning(&format!("Not translated, showing {} content", locale));
    }
}

fn print_results(results: &PortalSearchResults) {
    print_section_header(&format!("Results ({})", results.used_locale));
    fallback_note(
        results.fallback_locale_used,
        results.used_locale.parse().unwrap_or(DEFAULT_LOCALE),
    );

    let mut table = TableBuilder::new(&["Type", "Id", "Title"]);
    for item in &results.calculators.items {
        table.add_row(vec!["calculator".into(), item.id.clone(), item.title.clone()]);
    }
    for item in &results.articles.items {
        table.add_row(vec!["article".into(), item.id.clone(), item.title.clone()]);
    }
    for item in &results.standards.items {
        table.add_row(vec!["standard".into(), item.id.clone(), item.title.clone()]);
    }

    if table.is_empty() {
        print_empty_list("No matches");
    } else {
        table.print();
    }
    print_key_value(
        "Totals",
        &format!(
            "{} calculators, {} articles, {} standards",
            results.calculators.total, results.articles.total, results.standards.total
        ),
    );
    print_section_footer();
}

fn print_records<T: LocalizedContent>(title: &str, items: &[T]) {
    print_section_header(title);
    if items.is_empty() {
        print_empty_list("Nothing here");
    }
    for item in items {
        print_list_item(&format!("{}  {}", item.id(), item.title()), 0);
    }
    print_section_footer();
}

fn show_record(session: &Session, id: &str) -> Result<bool> {
    let registry = &session.registry;
    let locale = session.locale.as_str();

    if let Some(calculator) = registry.calculator_by_id(id, locale)? {
        print_section_header(&calculator.title);
        print_key_value("Type", "calculator");
        print_key_value("Category", &calculator.category);
        print_key_value("Locale", calculator.locale.as_str());
        print_key_value("Description", &calculator.description);
        for field in calculator.inputs.iter() {
            print_list_item(&format!("in:  {} ({})", field.label, field.name), 1);
        }
        for field in calculator.outputs.iter() {
            print_list_item(&format!("out: {} ({})", field.label, field.name), 1);
        }
        print_section_footer();
        return Ok(true);
    }

    if let Some(article) = registry.article_by_id(id, locale)? {
        print_section_header(&article.title);
        print_key_value("Type", "article");
        print_key_value("Locale", article.locale.as_str());
        print_key_value("Description", &article.description);
        if let Some(published) = article.published {
            print_key_value("Published", &published.to_string());
        }
        for related in registry.related_calculators(&article.related_calculators, locale)? {
            print_list_item(&format!("calculator {}", related.id), 1);
        }
        for related in registry.related_standards(&article.related_standards, locale)? {
            print_list_item(&format!("standard {}", related.id), 1);
        }
        print_section_footer();
        return Ok(true);
    }

    if let Some(standard) = registry.standard_by_id(id, locale)? {
        print_section_header(&standard.title);
        print_key_value("Type", "standard");
        print_key_value("Country", &standard.country);
        print_key_value("Locale", standard.locale.as_str());
        print_key_value("Description", &standard.description);
        for related in registry.related_calculators(&standard.related_calculators, locale)? {
            print_list_item(&format!("calculator {}", related.id), 1);
        }
        print_section_footer();
        return Ok(true);
    }

    Ok(false)
}

fn command_help() -> Vec<CommandHelp> {
    InnerCli::command()
        .get_subcommands()
        .map(|sc| CommandHelp {
            name: sc.get_name().to_string(),
            description: sc.get_about().map(|a| a.to_string()).unwrap_or_default(),
        })
        .collect()
}

fn run_command(command: InnerCommand, session: &mut Session) -> Result<CommandExecutionResult> {
    match command {
        InnerCommand::Search { query } => {
            let query = query.join(" ");
            let results = session
                .search_vault
                .search(&query, &session.locale, session.limit)?;
            print_results(&results);
        }
        InnerCommand::Locale { locale: None } => print_key_value("Locale", &session.locale),
        InnerCommand::Locale {
            locale: Some(locale),
        } => match locale.parse::<Locale>() {
            Ok(parsed) => {
                session.locale = parsed.to_string();
                print_success(&format!("Locale set to {}", parsed));
            }
            Err(err) => {
                let supported: Vec<&str> = Locale::ALL.iter().map(|l| l.as_str()).collect();
                return Ok(CommandExecutionResult::Error(format!(
                    "{}. Supported: {}",
                    err,
                    supported.join(", ")
                )));
            }
        },
        InnerCommand::Limit { limit: None } => print_key_value(
            "Limit",
            &session
                .limit
                .map(|l| l.to_string())
                .unwrap_or_else(|| "unbounded".to_string()),
        ),
        InnerCommand::Limit { limit: Some(limit) } => {
            session.limit = limit_from(limit);
            print_success("Limit updated");
        }
        InnerCommand::Calculators { category } => {
            let calculators = match category {
                Some(category) => session
                    .registry
                    .calculators_by_category(&category, &session.locale)?,
                None => session.registry.calculators(&session.locale)?,
            };
            fallback_note(calculators.fallback_used, calculators.locale);
            print_records("Calculators", &calculators.items);
        }
        InnerCommand::Categories => {
            let categories = session.registry.categories(&session.locale)?;
            print_section_header("Categories");
            for category in categories.items.iter() {
                print_list_item(category, 0);
            }
            print_section_footer();
        }
        InnerCommand::Articles => {
            let articles = session.registry.articles(&session.locale)?;
            fallback_note(articles.fallback_used, articles.locale);
            print_records("Articles", &articles.items);
        }
        InnerCommand::Standards { country } => {
            let standards = match country {
                Some(country) => session
                    .registry
                    .standards_by_country(&country, &session.locale)?,
                None => session.registry.standards(&session.locale)?,
            };
            fallback_note(standards.fallback_used, standards.locale);
            print_records("Standards", &standards.items);
        }
        InnerCommand::Show { id } => {
            if !show_record(session, &id)? {
                return Ok(CommandExecutionResult::Error(format!("No record with id {}", id)));
            }
        }
        InnerCommand::Stats => {
            let counts = session.registry.get_counts();
            print_section_header("Content");
            for (content_type, locales) in counts.per_locale.iter() {
                let per_locale: Vec<String> = locales
                    .iter()
                    .map(|(locale, count)| format!("{}={}", locale, count))
                    .collect();
                print_key_value(&content_type.to_string(), &per_locale.join(" "));
            }
            print_key_value("Search", &session.search_vault.get_stats().index_type);
            print_section_footer();
        }
        InnerCommand::Where => println!("{}", session.content_dir.display()),
        InnerCommand::Help => print_help(&command_help()),
        InnerCommand::Exit => return Ok(CommandExecutionResult::Exit),
    }
    Ok(CommandExecutionResult::Ok)
}

fn parse_line(line: &str) -> std::result::Result<InnerCommand, clap::Error> {
    let args =
        shlex::split(line).unwrap_or_else(|| line.split_whitespace().map(String::from).collect());
    InnerCli::try_parse_from(std::iter::once(" ").chain(args.iter().map(String::as_str)))
        .map(|cli| cli.command)
}

fn execute_command(line: &str, session: &mut Session) -> CommandExecutionResult {
    if line.trim().is_empty() {
        return CommandExecutionResult::Ok;
    }

    match parse_line(line) {
        Ok(command) => match run_command(command, session) {
            Ok(result) => result,
            Err(err) => CommandExecutionResult::Error(format!("{:#}", err)),
        },
        Err(e) => {
            if e.print().is_err() {
                println!("{}", e);
            }
            CommandExecutionResult::Ok
        }
    }
}

#[derive(rustyline_derive::Hinter)]
struct CommandCompleter {
    commands_names: Vec<String>,
}

impl CommandCompleter {
    pub fn new() -> Self {
        let commands_names: Vec<String> = InnerCli::command()
            .get_subcommands()
            .map(|sc| sc.get_name().to_string())
            .collect();

        CommandCompleter { commands_names }
    }
}

impl Completer for CommandCompleter {
    type Candidate = String;

    fn complete(
        &self,
        line: &str,
        _pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<String>)> {
        if line.contains(' ') {
            return Ok((0, Vec::with_capacity(0)));
        }
        let matches = self
            .commands_names
            .iter()
            .filter(|c| c.starts_with(line))
            .cloned()
            .collect::<Vec<_>>();

        Ok((0, matches))
    }
}

impl Highlighter for CommandCompleter {}
impl Validator for CommandCompleter {}
impl Helper for CommandCompleter {}

fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()?;

    let bundle = load_content(&cli_args.content_dir)?;
    let registry = Arc::new(ContentRegistry::new(
        Arc::new(StaticContentStore::new(bundle)),
        DEFAULT_LOCALE,
    ));
    let mut session = Session::new(
        registry,
        cli_args.content_dir.clone(),
        cli_args.locale,
        cli_args.limit,
    );

    print_welcome(
        &cli_args.content_dir.display().to_string(),
        session.registry.get_counts().total(),
    );

    let config = Config::builder()
        .completion_type(CompletionType::List)
        .build();

    let mut rl = Editor::<CommandCompleter, FileHistory>::with_config(config)?;
    rl.set_helper(Some(CommandCompleter::new()));

    loop {
        let readline = rl.readline(&get_prompt(&session.locale));

        match readline {
            Ok(line) => {
                let _ = rl.add_history_entry(&line);
                match execute_command(&line, &mut session) {
                    CommandExecutionResult::Ok => {}
                    CommandExecutionResult::Exit => break,
                    CommandExecutionResult::Error(err) => {
                        print_error(&err);
                        continue;
                    }
                }
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                println!("CTRL-D: exiting.");
                break;
            }
            Err(e) => {
                print_error(&format!("{:?}", e));
                break;
            }
        }
    }
    print_goodbye();
    Ok(())
}
