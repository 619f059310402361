// src/presentation/cli/handlers.rs
use super::args::{CatalogAction, Command, PostAction, PostFormArgs, UserAction};
use super::error::{CliError, CliResult, IntoCliResult};
use super::output::Output;
use crate::application::{
    commands::{
        catalog::{
            CreateCatalogEntityCommand, DeleteCatalogEntitiesCommand, RenameCatalogEntityCommand,
        },
        recruitment::{
            CreateRecruitmentPostCommand, DeleteRecruitmentPostCommand, RecruitmentPostForm,
            UpdateRecruitmentPostCommand,
        },
        users::{ChangePasswordCommand, CreateUserCommand},
    },
    queries::{catalog::SearchCatalogQuery, users::ListUsersQuery},
    services::ApplicationServices,
};
use crate::domain::catalog::{CatalogFilter, CatalogKind};
use crate::domain::user::evaluate_password;

impl From<PostFormArgs> for RecruitmentPostForm {
    fn from(args: PostFormArgs) -> Self {
        Self {
            title: args.title,
            description: args.description,
            introduce: args.introduce,
            location_id: args.location_id,
            job_category_id: args.job_category_id,
            job_type_id: args.job_type_id,
            salary_min: args.salary_min,
            salary_max: args.salary_max,
            salary_currency: args.salary_currency,
            requirements: args.requirements,
            benefits: args.benefits,
            deadline: args.deadline,
            status: args.status,
        }
    }
}

pub async fn run(
    command: Command,
    output: Output,
    services: &ApplicationServices,
) -> CliResult<String> {
    match command {
        Command::Catalog { kind, action } => run_catalog(kind, action, output, services).await,
        Command::Posts(action) => run_posts(action, output, services).await,
        Command::Users(action) => run_users(action, output, services).await,
        Command::PasswordStrength { password } => {
            output.password_strength(&evaluate_password(&password))
        }
        Command::Dashboard => output.dashboard(&services.dashboard_queries.load().await),
    }
}

async fn run_catalog(
    kind: CatalogKind,
    action: CatalogAction,
    output: Output,
    services: &ApplicationServices,
) -> CliResult<String> {
    let commands = &services.catalog_commands;
    let queries = &services.catalog_queries;

    match action {
        CatalogAction::List {
            search,
            status,
            refresh,
        } => {
            if refresh {
                // Surface fetch errors from the forced reload directly.
                queries.refresh(kind).await.into_result().into_cli()?;
            }
            let items = queries
                .search(SearchCatalogQuery {
                    kind,
                    filter: CatalogFilter::new(search, status),
                })
                .await
                .into_cli()?;
            output.catalog_entities(&items)
        }
        CatalogAction::Active => {
            output.catalog_entities(&queries.active(kind).await.into_cli()?)
        }
        CatalogAction::Show { slug } => {
            output.catalog_entity(&queries.find_by_slug(kind, &slug).await.into_cli()?)
        }
        CatalogAction::Create { name, status } => {
            let command = CreateCatalogEntityCommand::builder(kind)
                .name(name)
                .status(status)
                .build()
                .map_err(CliError::internal)?;
            output.catalog_entity(&commands.create(command).await.into_cli()?)
        }
        CatalogAction::Rename { slug, name } => {
            let renamed = commands
                .rename(RenameCatalogEntityCommand { kind, slug, name })
                .await
                .into_cli()?;
            output.catalog_entity(&renamed)
        }
        CatalogAction::Toggle { slug } => {
            let toggled = commands
                .toggle_status_by_slug(kind, &slug)
                .await
                .into_cli()?;
            output.catalog_entity(&toggled)
        }
        CatalogAction::Delete { slugs } => {
            let deleted = commands
                .delete(DeleteCatalogEntitiesCommand { kind, slugs })
                .await
                .into_cli()?;
            Ok(format!("deleted {deleted} {}(s)", kind.label()))
        }
    }
}

async fn run_posts(
    action: PostAction,
    output: Output,
    services: &ApplicationServices,
) -> CliResult<String> {
    let commands = &services.recruitment_commands;
    let queries = &services.recruitment_queries;

    match action {
        PostAction::List { status } => {
            output.posts(&queries.list_by_status(status).await.into_cli()?)
        }
        PostAction::Show { slug } => output.post(&queries.find_by_slug(&slug).await.into_cli()?),
        PostAction::Create(form) => {
            let created = commands
                .create(CreateRecruitmentPostCommand { form: form.into() })
                .await
                .into_cli()?;
            output.post(&created)
        }
        PostAction::Update { slug, form } => {
            let updated = commands
                .update(UpdateRecruitmentPostCommand {
                    slug,
                    form: form.into(),
                })
                .await
                .into_cli()?;
            output.post(&updated)
        }
        PostAction::Delete { slug } => {
            commands
                .delete(DeleteRecruitmentPostCommand { slug: slug.clone() })
                .await
                .into_cli()?;
            Ok(format!("deleted post {slug}"))
        }
    }
}

async fn run_users(
    action: UserAction,
    output: Output,
    services: &ApplicationServices,
) -> CliResult<String> {
    match action {
        UserAction::List { search, role } => {
            let users = services
                .user_queries
                .search(ListUsersQuery { search, role })
                .await
                .into_cli()?;
            output.users(&users)
        }
        UserAction::Create { email, role } => {
            let user = services
                .user_commands
                .create_user(CreateUserCommand { email, role })
                .await
                .into_cli()?;
            output.user(&user)
        }
        UserAction::ChangePassword {
            old_password,
            new_password,
        } => {
            let changed = services
                .user_commands
                .change_password(ChangePasswordCommand {
                    old_password,
                    new_password,
                })
                .await
                .into_cli()?;
            output.password_changed(&changed)
        }
    }
}
