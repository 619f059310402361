// src/presentation/cli/args.rs
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use crate::domain::catalog::{CatalogKind, EntityStatus, StatusFilter};
use crate::domain::recruitment::PostStatus;
use crate::domain::user::Role;

fn parse_with<T>(value: &str) -> Result<T, String>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.parse::<T>().map_err(|err| err.to_string())
}

/// Admin console for the recruitment back office
#[derive(Parser, Debug)]
#[command(name = "recruit_admin_core")]
#[command(version)]
#[command(about = "Manage catalogs, postings and users of the recruitment back office", long_about = None)]
pub struct Cli {
    /// Print JSON instead of tables
    #[arg(long = "json", global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Locations, job categories, job types and product groups
    Catalog {
        /// locations | job-categories | job-types | product-groups
        #[arg(value_parser = parse_with::<CatalogKind>)]
        kind: CatalogKind,

        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Recruitment postings
    #[command(subcommand)]
    Posts(PostAction),
    /// Back-office accounts
    #[command(subcommand)]
    Users(UserAction),
    /// Score a password without sending it anywhere
    PasswordStrength { password: String },
    /// Overview metrics, with built-in fallback data
    Dashboard,
}

#[derive(Subcommand, Debug)]
pub enum CatalogAction {
    /// List records, optionally filtered
    List {
        /// Case-insensitive substring of the name
        #[arg(short, long, default_value = "")]
        search: String,
        /// all | Active | Disabled
        #[arg(long, default_value = "all", value_parser = parse_with::<StatusFilter>)]
        status: StatusFilter,
        /// Bypass the cached copy
        #[arg(long)]
        refresh: bool,
    },
    /// Active records only
    Active,
    Show { slug: String },
    Create {
        name: String,
        #[arg(long, default_value = "Active", value_parser = parse_with::<EntityStatus>)]
        status: EntityStatus,
    },
    Rename { slug: String, name: String },
    /// Flip Active/Disabled
    Toggle { slug: String },
    Delete {
        #[arg(required = true)]
        slugs: Vec<String>,
    },
}

#[derive(Args, Debug)]
pub struct PostFormArgs {
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub description: String,
    #[arg(long)]
    pub introduce: Option<String>,
    #[arg(long = "location")]
    pub location_id: Option<String>,
    #[arg(long = "job-category")]
    pub job_category_id: Option<String>,
    #[arg(long = "job-type")]
    pub job_type_id: Option<String>,
    #[arg(long)]
    pub salary_min: Option<u64>,
    #[arg(long)]
    pub salary_max: Option<u64>,
    #[arg(long = "currency")]
    pub salary_currency: Option<String>,
    #[arg(long)]
    pub requirements: Option<String>,
    #[arg(long)]
    pub benefits: Option<String>,
    /// YYYY-MM-DD
    #[arg(long, value_parser = parse_with::<NaiveDate>)]
    pub deadline: Option<NaiveDate>,
    /// draft | published | closed
    #[arg(long, default_value = "draft", value_parser = parse_with::<PostStatus>)]
    pub status: PostStatus,
}

#[derive(Subcommand, Debug)]
pub enum PostAction {
    List {
        #[arg(long, value_parser = parse_with::<PostStatus>)]
        status: Option<PostStatus>,
    },
    Show { slug: String },
    Create(PostFormArgs),
    Update {
        slug: String,
        #[command(flatten)]
        form: PostFormArgs,
    },
    Delete { slug: String },
}

#[derive(Subcommand, Debug)]
pub enum UserAction {
    List {
        #[arg(short, long)]
        search: Option<String>,
        #[arg(long, value_parser = parse_with::<Role>)]
        role: Option<Role>,
    },
    /// Create an account with the default initial password
    Create {
        email: String,
        #[arg(long, value_parser = parse_with::<Role>)]
        role: Option<Role>,
    },
    /// Change the password of the signed-in account
    ChangePassword {
        #[arg(long = "old")]
        old_password: String,
        #[arg(long = "new")]
        new_password: String,
    },
}
