use std::process::ExitCode;
use clap::{Args, Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{error, info};
use book_inventory::catalog::controller::{BookTableController, SubmitOutcome};
use book_inventory::catalog::factory::create_controller;
use book_inventory::catalog::shell::{apply, ShellCommand, HELP};
use book_inventory::catalog::view::{render, render_dialog, render_notification};
use book_inventory::core::domain::{Configuration, API_URL};
use book_inventory::core::library::BookStatus;
use book_inventory::form::Field;
use book_inventory::gateway::GatewayVia;
use book_inventory::locale::Locale;
use book_inventory::utils::logs::setup_tracing;

#[derive(Parser)]
#[command(name = "inventory")]
#[command(about = "Browse and manage the library book inventory", long_about = None)]
struct Cli {
    /// Books collection endpoint
    #[arg(long, global = true, default_value = API_URL)]
    base_url: String,

    #[arg(long, global = true, default_value = "en")]
    locale: Locale,

    #[arg(long, global = true, default_value = "warn")]
    log_level: tracing::Level,

    #[arg(long, global = true)]
    log_json: bool,

    /// Work against bundled sample data instead of the remote API
    #[arg(long, global = true)]
    offline: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print one page of the filtered table
    List {
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long)]
        genre: Option<String>,
        #[arg(long)]
        status: Option<String>,
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Add a book
    Add(BookFields),
    /// Edit a book, keeping fields that are not given
    Edit {
        id: String,
        #[command(flatten)]
        fields: BookFields,
    },
    /// Delete a book after confirmation
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Interactive table session
    Shell,
}

#[derive(Args)]
struct BookFields {
    #[arg(long)]
    title: Option<String>,
    #[arg(long)]
    author: Option<String>,
    #[arg(long)]
    genre: Option<String>,
    #[arg(long)]
    year: Option<String>,
    #[arg(long)]
    status: Option<String>,
}

impl BookFields {
    fn values(&self) -> Vec<(Field, &str)> {
        [
            (Field::Title, &self.title),
            (Field::Author, &self.author),
            (Field::Genre, &self.genre),
            (Field::PublishedYear, &self.year),
            (Field::Status, &self.status),
        ].into_iter()
            .filter_map(|(field, value)| value.as_deref().map(|v| (field, v)))
            .collect()
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_tracing(cli.log_level, cli.log_json);

    let config = Configuration::new(cli.base_url.as_str()).with_locale(cli.locale);
    let via = if cli.offline { GatewayVia::InMemory } else { GatewayVia::Remote };
    let mut ctrl = match create_controller(&config, via) {
        Ok(ctrl) => ctrl,
        Err(err) => {
            error!("cannot start inventory: {}", err);
            eprintln!("{}", err);
            return ExitCode::from(2);
        }
    };
    info!("using {} via {:?}", config.base_url, via);

    if !ctrl.load().await {
        print!("{}", render(&ctrl));
        print_toasts(&mut ctrl);
        return ExitCode::FAILURE;
    }

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::List { search, genre, status, page } => list(&mut ctrl, search, genre, status, page),
        Commands::Add(fields) => {
            ctrl.open_add();
            save(&mut ctrl, &fields).await
        }
        Commands::Edit { id, fields } => {
            if !ctrl.open_edit(id.as_str()) {
                eprintln!("no book with id {}", id);
                return ExitCode::FAILURE;
            }
            save(&mut ctrl, &fields).await
        }
        Commands::Delete { id, yes } => delete(&mut ctrl, id.as_str(), yes).await,
        Commands::Shell => shell(&mut ctrl).await,
    }
}

fn list(ctrl: &mut BookTableController, search: String, genre: Option<String>,
        status: Option<String>, page: usize) -> ExitCode {
    ctrl.set_search(search.as_str());
    ctrl.set_genre(genre.as_deref());
    if let Some(status) = status {
        match BookStatus::try_from(status) {
            Ok(status) => ctrl.set_status(Some(status)),
            Err(err) => {
                eprintln!("{}", err);
                return ExitCode::from(2);
            }
        }
    }
    if page != 1 && !ctrl.go_to_page(page) {
        eprintln!("no page {} of {}", page, ctrl.total_pages());
        return ExitCode::FAILURE;
    }
    print!("{}", render(ctrl));
    ExitCode::SUCCESS
}

async fn save(ctrl: &mut BookTableController, fields: &BookFields) -> ExitCode {
    for (field, value) in fields.values() {
        if let Err(err) = ctrl.set_field(field, value) {
            eprintln!("{}", err);
            return ExitCode::from(2);
        }
    }
    let code = match ctrl.submit().await {
        SubmitOutcome::Saved(book) => {
            println!("{}", serde_json::to_string(&book).unwrap_or_else(|_| book.id.to_string()));
            ExitCode::SUCCESS
        }
        SubmitOutcome::Invalid => {
            print!("{}", render_dialog(ctrl.locale(), ctrl.dialog()));
            ExitCode::FAILURE
        }
        SubmitOutcome::Failed(_) | SubmitOutcome::Idle => ExitCode::FAILURE,
    };
    print_toasts(ctrl);
    code
}

async fn delete(ctrl: &mut BookTableController, id: &str, yes: bool) -> ExitCode {
    let Some(question) = ctrl.request_delete(id) else {
        eprintln!("no book with id {}", id);
        return ExitCode::FAILURE;
    };
    if !yes {
        let answer = prompt(format!("{} [y/N] ", question).as_str()).await;
        if !matches!(answer.as_deref().map(str::trim), Some("y" | "Y" | "yes")) {
            ctrl.cancel_delete();
            return ExitCode::SUCCESS;
        }
    }
    let deleted = ctrl.confirm_delete().await;
    print_toasts(ctrl);
    if deleted { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}

async fn shell(ctrl: &mut BookTableController) -> ExitCode {
    print!("{}", render(ctrl));
    println!("{}", HELP);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        write_out("> ").await;
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(err) => {
                error!("cannot read input: {}", err);
                return ExitCode::FAILURE;
            }
        };
        let cmd = match line.parse::<ShellCommand>() {
            Ok(cmd) => cmd,
            Err(err) => {
                println!("{}", err);
                continue;
            }
        };
        let reply = apply(ctrl, cmd).await;
        if !reply.output.is_empty() {
            println!("{}", reply.output.trim_end());
        }
        if reply.quit {
            break;
        }
    }
    ExitCode::SUCCESS
}

async fn prompt(question: &str) -> Option<String> {
    write_out(question).await;
    BufReader::new(tokio::io::stdin()).lines().next_line().await.ok().flatten()
}

async fn write_out(text: &str) {
    let mut out = tokio::io::stdout();
    let _ = out.write_all(text.as_bytes()).await;
    let _ = out.flush().await;
}

fn print_toasts(ctrl: &mut BookTableController) {
    for toast in ctrl.take_notifications() {
        println!("{}", render_notification(&toast));
    }
}
