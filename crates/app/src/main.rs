use std::fmt;
use std::sync::Arc;

use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use dioxus::LaunchBuilder;
use services::{AuditLogService, HttpTransport, InquiryService, ProjectService};
use ui::{build_app_context, App, UiApp};
use url::Url;
use workstage_core::model::{CompanyRole, UserId, UserSession};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidBaseUrl { raw: String },
    InvalidUserId { raw: String },
    InvalidRole { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidBaseUrl { raw } => write!(f, "invalid --base-url value: {raw}"),
            ArgsError::InvalidUserId { raw } => write!(f, "invalid --user-id value: {raw}"),
            ArgsError::InvalidRole { raw } => write!(f, "invalid --role value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    session: UserSession,
    projects: Arc<ProjectService>,
    inquiries: Arc<InquiryService>,
    audit_logs: Arc<AuditLogService>,
}

impl UiApp for DesktopApp {
    fn session(&self) -> UserSession {
        self.session.clone()
    }

    fn projects(&self) -> Arc<ProjectService> {
        Arc::clone(&self.projects)
    }

    fn inquiries(&self) -> Arc<InquiryService> {
        Arc::clone(&self.inquiries)
    }

    fn audit_logs(&self) -> Arc<AuditLogService> {
        Arc::clone(&self.audit_logs)
    }
}

struct Args {
    base_url: Url,
    user_id: UserId,
    user_name: String,
    role: CompanyRole,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--base-url <url>] [--user-id <id>] [--user-name <name>] [--role <ADMIN|USER>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --base-url http://localhost:8080/api/");
    eprintln!("  --user-id 1");
    eprintln!("  --role USER");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  WORKSTAGE_BASE_URL, WORKSTAGE_USER_ID, WORKSTAGE_USER_NAME, WORKSTAGE_ROLE");
}

fn parse_role(raw: &str) -> Result<CompanyRole, ArgsError> {
    match raw.to_ascii_uppercase().as_str() {
        "ADMIN" => Ok(CompanyRole::Admin),
        "USER" => Ok(CompanyRole::User),
        _ => Err(ArgsError::InvalidRole {
            raw: raw.to_string(),
        }),
    }
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut base_url = std::env::var("WORKSTAGE_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:8080/api/".into());
        let mut user_id = std::env::var("WORKSTAGE_USER_ID")
            .ok()
            .and_then(|value| value.parse::<UserId>().ok())
            .unwrap_or_else(|| UserId::new(1));
        let mut user_name =
            std::env::var("WORKSTAGE_USER_NAME").unwrap_or_else(|_| "사용자".into());
        let mut role = std::env::var("WORKSTAGE_ROLE")
            .ok()
            .and_then(|value| parse_role(&value).ok())
            .unwrap_or(CompanyRole::User);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--base-url" => {
                    let value = require_value(args, "--base-url")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidBaseUrl { raw: value });
                    }
                    base_url = value;
                }
                "--user-id" => {
                    let value = require_value(args, "--user-id")?;
                    user_id = value
                        .parse::<UserId>()
                        .map_err(|_| ArgsError::InvalidUserId { raw: value.clone() })?;
                }
                "--user-name" => {
                    user_name = require_value(args, "--user-name")?;
                }
                "--role" => {
                    let value = require_value(args, "--role")?;
                    role = parse_role(&value)?;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        // Trailing slash matters: relative joins drop the last segment otherwise.
        let normalized = if base_url.ends_with('/') {
            base_url
        } else {
            format!("{base_url}/")
        };
        let base_url = Url::parse(&normalized).map_err(|_| ArgsError::InvalidBaseUrl {
            raw: normalized.clone(),
        })?;

        Ok(Self {
            base_url,
            user_id,
            user_name,
            role,
        })
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    tracing::info!(base_url = %parsed.base_url, user_id = %parsed.user_id, "starting workstage");

    let transport = Arc::new(HttpTransport::new(parsed.base_url)?);
    let session = UserSession::new(parsed.user_id, parsed.user_name, parsed.role);

    let app = DesktopApp {
        session,
        projects: Arc::new(ProjectService::new(Arc::clone(&transport) as Arc<dyn services::ApiTransport>)),
        inquiries: Arc::new(InquiryService::new(Arc::clone(&transport) as Arc<dyn services::ApiTransport>)),
        audit_logs: Arc::new(AuditLogService::new(Arc::clone(&transport) as Arc<dyn services::ApiTransport>)),
    };

    let app: Arc<dyn UiApp> = Arc::new(app);
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Workstage")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
