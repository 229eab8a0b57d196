//! crm-access - administration CLI for the CRM access-control core
//!
//! Migrates and seeds the role/permission tables, edits role grants, and shows how the
//! route gate treats a given member of staff.

#![allow(missing_docs)]

use clap::{Parser, Subcommand};
use crm_access::auth::rbac::seed_catalog;
use crm_access::auth::{AccessControl, MemorySessionProvider};
use crm_access::config::Config;
use crm_access::core::models::{Identity, IdentityId};
use crm_access::storage::StorageLayer;
use crm_access::utils::error::{AccessError, Result};
use crm_access::utils::init_tracing;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

#[derive(Parser)]
#[command(
    name = "crm-access",
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"),
    about = "Manage CRM roles, permissions and route access"
)]
struct Cli {
    /// Config file path (environment variables are used when omitted)
    #[arg(long, short, global = true, env = "CRM_ACCESS_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run database migrations.
    Migrate,

    /// Migrate, then insert the default permission catalog and roles.
    Seed,

    /// List permissions grouped by module.
    Permissions,

    /// Show the permissions granted to a role.
    Grants {
        /// Role name
        role: String,
    },

    /// Replace the complete grant set of a role.
    SetGrants {
        /// Role name
        role: String,
        /// Permission keys (none clears the role)
        permissions: Vec<String>,
    },

    /// Check whether a member of staff holds a permission.
    Check {
        /// Personnel id
        personnel: String,
        /// Permission key
        permission: String,
    },

    /// Show where the route gate sends a member of staff.
    Landing {
        /// Personnel id
        personnel: String,
        /// Requested path
        #[arg(long, default_value = "/")]
        path: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Print error using Display (not Debug) to preserve newlines
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::from_file(path).await?,
        None => Config::from_env()?,
    };
    init_tracing(config.logging());

    match cli.command {
        Command::Migrate => {
            let storage = StorageLayer::new(config.storage()).await?;
            storage.migrate().await?;
            println!("Migrations applied");
        }
        Command::Seed => {
            let storage = StorageLayer::new(config.storage()).await?;
            storage.migrate().await?;
            let report = seed_catalog(storage.grant_store().as_ref()).await?;
            println!(
                "Seeded {} permissions and {} roles ({} roles granted defaults)",
                report.permissions, report.roles, report.roles_granted
            );
        }
        Command::Permissions => {
            let control = open(&config, None).await?;
            for group in control.grants().grouped_permissions().await? {
                println!("{}", group.module);
                for permission in group.permissions {
                    match permission.description {
                        Some(description) => println!("  {:<28} {}", permission.name, description),
                        None => println!("  {}", permission.name),
                    }
                }
            }
        }
        Command::Grants { role } => {
            let control = open(&config, None).await?;
            let grants = control.grants().grants(&role).await?;
            print_grants(&grants.role.name, &grants.names());
        }
        Command::SetGrants { role, permissions } => {
            let control = open(&config, None).await?;
            let saved = control.grants().replace_grants(&role, permissions.as_slice()).await?;
            print_grants(&saved.role.name, &saved.names());
        }
        Command::Check {
            personnel,
            permission,
        } => {
            let control = open(&config, Some(parse_identity(&personnel)?)).await?;
            control.settle().await;
            let verdict = if control.can(&permission) {
                "allowed"
            } else {
                "denied"
            };
            println!("{} {} {}", personnel, verdict, permission);
        }
        Command::Landing { personnel, path } => {
            let control = open(&config, Some(parse_identity(&personnel)?)).await?;
            let decision = control.decide_settled(&path).await;
            println!("{}", serde_json::to_string(&decision)?);
        }
    }

    Ok(())
}

async fn open(config: &Config, identity: Option<IdentityId>) -> Result<AccessControl> {
    let provider = match identity {
        Some(id) => MemorySessionProvider::with_session(Identity::new(id)),
        None => MemorySessionProvider::new(),
    };
    AccessControl::new(config, Arc::new(provider)).await
}

fn parse_identity(raw: &str) -> Result<IdentityId> {
    raw.parse()
        .map_err(|e| AccessError::validation(format!("Invalid personnel id '{}': {}", raw, e)))
}

fn print_grants(role: &str, names: &[&str]) {
    println!("{} ({} permissions)", role, names.len());
    for name in names {
        println!("  {}", name);
    }
}
