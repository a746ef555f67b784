use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tourdesk::api::types::{NewBooking, Tour, TourKind};
use tourdesk::api::{ApiClient, ApiError};
use tourdesk::booking_details::BookingDetails;
use tourdesk::calendar;
use tourdesk::config::{ClientConfig, ConfigError};
use tourdesk::guard::{GuardView, RouteGuard};
use tourdesk::navigation::{LOGIN_PATH, NavigationKind, Navigator};
use tourdesk::session::{FileStorage, SessionError, SessionStore};
use tourdesk::tour_draft::TourDraft;
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error("admin login required; run `tourdesk login --email <EMAIL>`")]
    LoginRequired,
    #[error("booking {0} not found")]
    BookingNotFound(i64),
    #[error("tour {0} not found")]
    TourNotFound(i64),
    #[error("failed to render output: {0}")]
    Render(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "tourdesk", about = "Admin console for the tour-booking backend")]
struct Cli {
    /// Backend base URL (overrides TOURDESK_API_URL).
    #[arg(long)]
    api_url: Option<String>,

    /// Session file (overrides TOURDESK_SESSION_FILE).
    #[arg(long)]
    session_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "TOURDESK_PASSWORD", hide_env_values = true)]
        password: String,
    },
    Logout,
    Whoami,
    Bookings(BookingsCommand),
    Tours(ToursCommand),
    Users(UsersCommand),
}

#[derive(Args, Debug)]
struct BookingsCommand {
    #[command(subcommand)]
    command: BookingsSubcommand,
}

#[derive(Subcommand, Debug)]
enum BookingsSubcommand {
    List,
    Create {
        #[arg(long)]
        user_id: i64,
        #[arg(long)]
        tour_id: i64,
        #[arg(long)]
        date: String,
        #[arg(long, default_value_t = 1)]
        people: u32,
    },
    /// Customer, contact and total for one booking.
    Show { id: i64 },
    /// Bookings grouped by day.
    Calendar,
}

#[derive(Args, Debug)]
struct ToursCommand {
    #[command(subcommand)]
    command: ToursSubcommand,
}

#[derive(Subcommand, Debug)]
enum ToursSubcommand {
    List,
    Create(TourCreateArgs),
    Update(TourUpdateArgs),
    Delete { id: i64 },
}

#[derive(Args, Debug)]
struct TourCreateArgs {
    #[arg(long)]
    title: String,
    #[arg(long, default_value = "")]
    description: String,
    #[arg(long, default_value = "")]
    location: String,
    #[arg(long = "type", default_value = "single")]
    kind: TourKind,
    #[arg(long)]
    days: Option<u32>,
    #[arg(long, default_value_t = 0.0)]
    price: f64,
    #[arg(long)]
    category: Option<String>,
    #[arg(long)]
    included: Vec<String>,
    #[arg(long)]
    excluded: Vec<String>,
    #[arg(long = "plan", help = "Day plan title, in day order (multi-day tours)")]
    plans: Vec<String>,
}

#[derive(Args, Debug)]
struct TourUpdateArgs {
    id: i64,
    #[arg(long)]
    title: Option<String>,
    #[arg(long)]
    description: Option<String>,
    #[arg(long)]
    location: Option<String>,
    #[arg(long = "type")]
    kind: Option<TourKind>,
    #[arg(long)]
    days: Option<u32>,
    #[arg(long)]
    price: Option<f64>,
    #[arg(long)]
    category: Option<String>,
    #[arg(long)]
    status: Option<String>,
    #[arg(long)]
    completion: Option<f64>,
}

#[derive(Args, Debug)]
struct UsersCommand {
    #[command(subcommand)]
    command: UsersSubcommand,
}

#[derive(Subcommand, Debug)]
enum UsersSubcommand {
    List,
}

/// Terminal stand-in for page navigation: tells the operator where to go.
struct TerminalNavigator;

impl Navigator for TerminalNavigator {
    fn navigate(&self, path: &str, kind: NavigationKind) {
        match (path, kind) {
            (LOGIN_PATH, NavigationKind::Full) => eprintln!("session ended; run `tourdesk login` to sign in again"),
            (LOGIN_PATH, NavigationKind::Client) => eprintln!("not signed in as an admin"),
            (other, _) => eprintln!("-> {other}"),
        }
    }
}

struct CliContext {
    api: ApiClient,
    session: Arc<SessionStore>,
    navigator: TerminalNavigator,
}

impl CliContext {
    /// Mount an admin-only view: settle a fresh guard and fail on redirect.
    fn mount_admin(&self) -> Result<(), CliError> {
        let mut guard = RouteGuard::new(true);
        guard.check(&self.session, &self.navigator);
        match guard.render(|| ()) {
            GuardView::Content(()) => Ok(()),
            GuardView::Loading | GuardView::Empty => Err(CliError::LoginRequired),
        }
    }

    /// A 401 means the backend no longer honors the stored token.
    fn rejected(&self, error: ApiError) -> CliError {
        if error.is_unauthorized() {
            if let Err(e) = self.session.logout(&self.navigator) {
                tracing::warn!(error = %e, "failed to clear rejected session");
            }
        }
        CliError::Api(error)
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    match try_main().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn try_main() -> Result<(), CliError> {
    let dotenv = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
    if let Err(e) = dotenv {
        if !e.not_found() {
            tracing::warn!(error = %e, "failed to load .env");
        }
    }

    let cli = Cli::parse();
    let mut config = ClientConfig::from_env()?;
    if let Some(url) = &cli.api_url {
        config = config.with_api_url(url)?;
    }
    if let Some(path) = cli.session_file {
        config = config.with_session_file(path);
    }

    let session = Arc::new(SessionStore::open(FileStorage::new(&config.session_file)));
    let ctx = CliContext {
        api: ApiClient::new(&config, Arc::clone(&session))?,
        session,
        navigator: TerminalNavigator,
    };

    let result = run(&ctx, cli.command).await;

    let CliContext { api, session, .. } = ctx;
    drop(api);
    if let Ok(session) = Arc::try_unwrap(session) {
        session.close()?;
    }
    result
}

async fn run(ctx: &CliContext, command: Command) -> Result<(), CliError> {
    match command {
        Command::Login { email, password } => {
            let user = ctx.api.login(&email, &password).await?;
            print_json(&user)
        }
        Command::Logout => {
            ctx.session.logout(&ctx.navigator)?;
            Ok(())
        }
        Command::Whoami => print_json(&serde_json::json!({
            "authenticated": ctx.session.is_authenticated(),
            "admin": ctx.session.is_admin(),
            "user": ctx.session.user(),
            "apiUrl": ctx.api.base_url(),
        })),
        Command::Bookings(bookings) => {
            ctx.mount_admin()?;
            run_bookings(ctx, bookings.command).await
        }
        Command::Tours(tours) => {
            ctx.mount_admin()?;
            run_tours(ctx, tours.command).await
        }
        Command::Users(users) => {
            ctx.mount_admin()?;
            match users.command {
                UsersSubcommand::List => {
                    let users = ctx.api.fetch_users().await.map_err(|e| ctx.rejected(e))?;
                    print_json(&users)
                }
            }
        }
    }
}

async fn run_bookings(ctx: &CliContext, command: BookingsSubcommand) -> Result<(), CliError> {
    match command {
        BookingsSubcommand::List => {
            let bookings = ctx.api.fetch_bookings().await.map_err(|e| ctx.rejected(e))?;
            print_json(&bookings)
        }
        BookingsSubcommand::Create { user_id, tour_id, date, people } => {
            let booking = NewBooking { user_id, tour_id, date, people };
            let created = ctx.api.create_booking(&booking).await.map_err(|e| ctx.rejected(e))?;
            print_json(&created)
        }
        BookingsSubcommand::Show { id } => {
            let bookings = ctx.api.fetch_bookings().await.map_err(|e| ctx.rejected(e))?;
            let booking = bookings
                .iter()
                .find(|booking| booking.id == id)
                .ok_or(CliError::BookingNotFound(id))?;
            println!("{}", BookingDetails::from(booking));
            Ok(())
        }
        BookingsSubcommand::Calendar => {
            let bookings = ctx.api.fetch_bookings().await.map_err(|e| ctx.rejected(e))?;
            for (day, events) in calendar::by_day(&bookings) {
                println!("{day}");
                for event in events {
                    println!("  #{:<6} {}", event.booking_id, event.title);
                }
            }
            Ok(())
        }
    }
}

async fn run_tours(ctx: &CliContext, command: ToursSubcommand) -> Result<(), CliError> {
    match command {
        ToursSubcommand::List => {
            let tours = ctx.api.fetch_tours().await.map_err(|e| ctx.rejected(e))?;
            print_json(&tours)
        }
        ToursSubcommand::Create(args) => {
            let input = draft_from_args(args).into_input();
            let created = ctx.api.create_tour(&input).await.map_err(|e| ctx.rejected(e))?;
            print_json(&created)
        }
        ToursSubcommand::Update(args) => {
            let tours = ctx.api.fetch_tours().await.map_err(|e| ctx.rejected(e))?;
            let existing = tours
                .iter()
                .find(|tour| tour.id == args.id)
                .ok_or(CliError::TourNotFound(args.id))?;
            let id = args.id;
            let input = apply_update(existing, args);
            let updated = ctx.api.update_tour(id, &input).await.map_err(|e| ctx.rejected(e))?;
            print_json(&updated)
        }
        ToursSubcommand::Delete { id } => {
            let deleted = ctx.api.delete_tour(id).await.map_err(|e| ctx.rejected(e))?;
            print_json(&deleted)
        }
    }
}

fn draft_from_args(args: TourCreateArgs) -> TourDraft {
    let mut draft = TourDraft::new();
    draft.title = args.title;
    draft.description = args.description;
    draft.location = args.location;
    draft.price = args.price;
    if let Some(category) = args.category {
        draft.category = category;
    }
    draft.set_kind(args.kind);
    if let Some(days) = args.days {
        draft.set_days(days);
    }
    for item in &args.included {
        draft.add_included(item);
    }
    for item in &args.excluded {
        draft.add_excluded(item);
    }
    for (index, title) in args.plans.iter().enumerate() {
        draft.set_plan_title(index, title);
    }
    draft
}

fn apply_update(existing: &Tour, args: TourUpdateArgs) -> tourdesk::api::types::TourInput {
    let mut draft = TourDraft::from(existing);
    if let Some(title) = args.title {
        draft.title = title;
    }
    if let Some(description) = args.description {
        draft.description = description;
    }
    if let Some(location) = args.location {
        draft.location = location;
    }
    if let Some(price) = args.price {
        draft.price = price;
    }
    if let Some(category) = args.category {
        draft.category = category;
    }
    if let Some(kind) = args.kind {
        draft.set_kind(kind);
    }
    if let Some(days) = args.days {
        draft.set_days(days);
    }

    let mut input = draft.into_input();
    input.categories.clone_from(&existing.categories);
    input.status = args.status.or_else(|| existing.status.clone());
    input.completion_percentage = args.completion.or(existing.completion_percentage);
    input
}

fn print_json(value: &impl Serialize) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
