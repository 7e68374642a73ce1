use clap::{Parser, Subcommand};
use uuid::Uuid;
use vitrine::Config;
use vitrine::auth::issue_session_token;
use vitrine::model::entity::{
    Course, CourseCreate, Lesson, LessonCreate, Membership, Module, ModuleCreate, Section,
    SectionCreate, Tenant, TenantCreate, UserEntity, UserEntityCreate, Vitrine, VitrineCreate,
};
use vitrine::model::{CatalogRepository, DbConnection, ModelManager};
use vitrine::web::TenantRole;

#[derive(Parser, Debug)]
#[command(about = "CLI tool for filling the vitrine DB", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage tenants
    Tenant {
        #[command(subcommand)]
        action: TenantCommands,
    },

    /// Manage users and their memberships
    User {
        #[command(subcommand)]
        action: UserCommands,
    },

    /// Manage vitrines
    Vitrine {
        #[command(subcommand)]
        action: VitrineCommands,
    },

    /// Manage courses
    Course {
        #[command(subcommand)]
        action: CourseCommands,
    },

    /// Manage sections
    Section {
        #[command(subcommand)]
        action: SectionCommands,
    },

    /// Manage modules
    Module {
        #[command(subcommand)]
        action: ModuleCommands,
    },

    /// Manage lessons
    Lesson {
        #[command(subcommand)]
        action: LessonCommands,
    },

    /// Session tokens
    Token {
        #[command(subcommand)]
        action: TokenCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum TenantCommands {
    Add {
        #[arg(long)]
        name: String,
        #[arg(long, default_value_t = false)]
        ai_enabled: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum UserCommands {
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        /// Tenant to join right away
        #[arg(long)]
        tenant: Option<Uuid>,
        /// `admin` or `member`
        #[arg(long, default_value = "member")]
        role: String,
    },
    /// Add an existing user to a tenant, or change their role there
    Join {
        #[arg(long)]
        user: Uuid,
        #[arg(long)]
        tenant: Uuid,
        #[arg(long, default_value = "member")]
        role: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum VitrineCommands {
    Add {
        #[arg(long)]
        tenant: Uuid,
        #[arg(long)]
        name: String,
        #[arg(long)]
        order_index: Option<i32>,
    },
}

#[derive(Subcommand, Debug)]
pub enum CourseCommands {
    Add {
        #[arg(long)]
        vitrine: Uuid,
        #[arg(long)]
        name: String,
        #[arg(long)]
        order_index: Option<i32>,
    },
}

#[derive(Subcommand, Debug)]
pub enum SectionCommands {
    Add {
        #[arg(long)]
        course: Uuid,
        #[arg(long)]
        name: String,
        #[arg(long)]
        order_index: Option<i32>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ModuleCommands {
    Add {
        #[arg(long)]
        section: Uuid,
        #[arg(long)]
        name: String,
        #[arg(long)]
        order_index: Option<i32>,
    },
}

#[derive(Subcommand, Debug)]
pub enum LessonCommands {
    Add {
        #[arg(long)]
        module: Uuid,
        #[arg(long)]
        name: String,
        #[arg(long)]
        slug: Option<String>,
        /// e.g. `video`, `text`
        #[arg(long = "type")]
        lesson_type: Option<String>,
        #[arg(long)]
        media_url: Option<String>,
        #[arg(long)]
        thumbnail: Option<String>,
        #[arg(long)]
        order_index: Option<i32>,
        /// Unpublished lessons are hidden from the catalog
        #[arg(long, default_value_t = false)]
        published: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum TokenCommands {
    /// Print a `SID` cookie value for a user acting within a tenant
    Issue {
        #[arg(long)]
        user: Uuid,
        #[arg(long)]
        tenant: Uuid,
    },
}

#[tokio::main]
async fn main() -> vitrine::error::AppResult<()> {
    let _ = dotenvy::dotenv();
    let args = Cli::parse();

    let config = Config::get_or_init(true).await;
    let database_uri = std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| config.app().database_uri().to_string());

    let db_con = DbConnection::connect(&database_uri)?;
    db_con.migrate().await?;
    let mm = ModelManager::new(db_con);

    match args.command {
        Commands::Tenant { action } => match action {
            TenantCommands::Add { name, ai_enabled } => {
                let tenant = Tenant::create(&mm, TenantCreate { name, ai_enabled }).await?;
                println!("Tenant created: {:?}", tenant);
            }
        },

        Commands::User { action } => match action {
            UserCommands::Add {
                name,
                email,
                tenant,
                role,
            } => {
                let user = match UserEntity::find_by_email(&mm, &email).await? {
                    Some(existing) => {
                        println!("User already exists: {:?}", existing);
                        existing
                    }
                    None => {
                        let user = UserEntity::create(&mm, UserEntityCreate { name, email }).await?;
                        println!("User created: {:?}", user);
                        user
                    }
                };

                if let Some(tenant) = tenant {
                    let role = TenantRole::from(role.as_str());
                    Membership::create(&mm, user.id, tenant, role).await?;
                    println!("User {} joined tenant {} as {}", user.id, tenant, role);
                }
            }
            UserCommands::Join { user, tenant, role } => {
                let role = TenantRole::from(role.as_str());
                Membership::create(&mm, user, tenant, role).await?;
                println!("User {} joined tenant {} as {}", user, tenant, role);
            }
        },

        Commands::Vitrine { action } => match action {
            VitrineCommands::Add {
                tenant,
                name,
                order_index,
            } => {
                let vitrine = Vitrine::create(
                    &mm,
                    VitrineCreate {
                        tenant_id: tenant,
                        name,
                        order_index,
                    },
                )
                .await?;
                println!("Vitrine created: {:?}", vitrine);
            }
        },

        Commands::Course { action } => match action {
            CourseCommands::Add {
                vitrine,
                name,
                order_index,
            } => {
                let course = Course::create(
                    &mm,
                    CourseCreate {
                        vitrine_id: vitrine,
                        name,
                        order_index,
                    },
                )
                .await?;
                println!("Course created: {:?}", course);
            }
        },

        Commands::Section { action } => match action {
            SectionCommands::Add {
                course,
                name,
                order_index,
            } => {
                let section = Section::create(
                    &mm,
                    SectionCreate {
                        course_id: course,
                        name,
                        order_index,
                    },
                )
                .await?;
                println!("Section created: {:?}", section);
            }
        },

        Commands::Module { action } => match action {
            ModuleCommands::Add {
                section,
                name,
                order_index,
            } => {
                let module = Module::create(
                    &mm,
                    ModuleCreate {
                        section_id: section,
                        name,
                        order_index,
                    },
                )
                .await?;
                println!("Module created: {:?}", module);
            }
        },

        Commands::Lesson { action } => match action {
            LessonCommands::Add {
                module,
                name,
                slug,
                lesson_type,
                media_url,
                thumbnail,
                order_index,
                published,
            } => {
                let lesson = Lesson::create(
                    &mm,
                    LessonCreate {
                        module_id: module,
                        name,
                        slug,
                        lesson_type,
                        media_url,
                        thumbnail,
                        order_index,
                        published,
                    },
                )
                .await?;
                println!("Lesson created: {:?}", lesson);
            }
        },

        Commands::Token { action } => match action {
            TokenCommands::Issue { user, tenant } => {
                if Membership::find_role(&mm, user, tenant).await?.is_none() {
                    eprintln!("warning: user {user} is not a member of tenant {tenant}");
                }

                let token = issue_session_token(user, tenant, config.app().jwt())?;
                println!("{token}");
            }
        },
    }

    Ok(())
}
