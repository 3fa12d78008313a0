use std::process::ExitCode;
use std::sync::Arc;

use authflow::config::ConfigError;
use authflow::net::api::{AuthApi, HttpAuthApi};
use authflow::net::types::AuthUser;
use authflow::pages::{Collaborators, SubmitOutcome};
use authflow::services::navigation::{LOGIN, MemoryRouter, SIGNUP};
use authflow::services::notify::TracingNotifier;
use authflow::services::session::AuthUserCache;
use authflow::{AuthConfig, AuthError, LoginPage, SignupPage};
use clap::{Parser, Subcommand};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error("a submission is already in progress")]
    Busy,
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "authflow-cli", about = "Log in or sign up against the auth API")]
struct Cli {
    #[arg(long, env = "AUTH_BASE_URL")]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Login {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
    Signup {
        #[arg(long)]
        email: String,
        #[arg(long)]
        username: String,
        #[arg(long)]
        full_name: String,
        #[arg(long)]
        password: String,
        /// Agree to the Terms of Service and Privacy Policy.
        #[arg(long)]
        accept_terms: bool,
    },
}

struct Session {
    cache: Arc<AuthUserCache>,
    router: Arc<MemoryRouter>,
    deps: Collaborators,
}

impl Session {
    fn connect(config: AuthConfig, start: &str) -> Result<Self, CliError> {
        let api: Arc<dyn AuthApi> = Arc::new(HttpAuthApi::new(config)?);
        let cache = Arc::new(AuthUserCache::new(Arc::clone(&api)));
        let router = Arc::new(MemoryRouter::new(start));
        let deps = Collaborators {
            api,
            cache: cache.clone(),
            router: router.clone(),
            notifier: Arc::new(TracingNotifier),
        };
        Ok(Self { cache, router, deps })
    }

    async fn report(&self, outcome: SubmitOutcome) -> Result<(), CliError> {
        match outcome {
            SubmitOutcome::Succeeded(_) => {
                println!("navigated to {}", self.router.current());
                print_user(self.cache.get().await?.as_ref())
            }
            SubmitOutcome::Failed(e) | SubmitOutcome::Blocked(e) => Err(e.into()),
            SubmitOutcome::Ignored => Err(CliError::Busy),
        }
    }
}

fn print_user(user: Option<&AuthUser>) -> Result<(), CliError> {
    match user {
        Some(user) => println!("{}", serde_json::to_string_pretty(user)?),
        None => println!("not signed in"),
    }
    Ok(())
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let mut config = AuthConfig::from_env()?;
    if let Some(base_url) = cli.base_url.as_deref() {
        config.base_url = AuthConfig::with_base_url(base_url).base_url;
    }
    tracing::debug!(base_url = %config.base_url, "using auth backend");

    match cli.command {
        Command::Login { username, password } => {
            let session = Session::connect(config, LOGIN)?;
            let page = LoginPage::new(session.deps.clone());
            page.set_username(username);
            page.set_password(password);
            session.report(page.submit().await).await
        }
        Command::Signup { email, username, full_name, password, accept_terms } => {
            let session = Session::connect(config, SIGNUP)?;
            let page = SignupPage::new(session.deps.clone());
            page.set_email(email);
            page.set_username(username);
            page.set_full_name(full_name);
            page.set_password(password);
            page.set_terms_accepted(accept_terms);
            if let Some(hint) = page.snapshot().password_hint() {
                eprintln!("hint: {hint}");
            }
            session.report(page.submit().await).await
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
