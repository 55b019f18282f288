use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config,
    data::role::RoleRepository,
    error::AppError,
    model::user::Role,
    service::user::UserService,
};

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then
/// automatically runs all pending SeaORM migrations to ensure the database schema is
/// up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Makes sure every application role has a row in the `role` table.
pub async fn ensure_roles(db: &DatabaseConnection) -> Result<(), AppError> {
    let role_repo = RoleRepository::new(db);

    for role in Role::ALL {
        role_repo.find_or_create(role.as_str()).await?;
    }

    Ok(())
}

/// Creates the configured bootstrap administrator if it doesn't exist yet.
///
/// The account gets both `ROLE_ADMIN` and `ROLE_USER`. Does nothing when no bootstrap
/// account is configured or the username is already taken.
pub async fn bootstrap_admin(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    let Some(admin) = &config.bootstrap_admin else {
        return Ok(());
    };

    let user_service = UserService::new(db);
    let created = user_service
        .ensure_user(&admin.username, &admin.password, &Role::ALL, config.bcrypt_cost)
        .await?;

    match created {
        Some(user) => tracing::info!("Created bootstrap admin '{}'", user.username),
        None => tracing::info!(
            "Bootstrap admin '{}' already exists, leaving it unchanged",
            admin.username
        ),
    }

    Ok(())
}

/// Resolves when the process receives Ctrl-C, letting in-flight requests finish.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }

    tracing::info!("Shutdown signal received, stopping server");
}
