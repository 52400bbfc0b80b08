use crate::catalog::TableName;
use anyhow::{anyhow, Context};
use diesel::{
	prelude::*,
	r2d2::{self, ConnectionManager},
	sql_types::Text,
};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

pub type DbPool = r2d2::Pool<ConnectionManager<PgConnection>>;

pub fn get_db_pool(database_url: &str) -> anyhow::Result<DbPool> {
	let manager = ConnectionManager::<PgConnection>::new(database_url);
	r2d2::Pool::builder().build(manager).context("Failed to create pool")
}

/// Applies pending migrations and returns the versions that ran.
pub fn init(pool: &DbPool) -> anyhow::Result<Vec<String>> {
	let mut conn = pool.get().context("can not get a connection from the pool")?;
	let applied = conn
		.run_pending_migrations(MIGRATIONS)
		.map_err(|e| anyhow!("Unable to migrate the db: {}", e))?
		.into_iter()
		.map(|version| version.to_string())
		.collect::<Vec<_>>();
	for version in &applied {
		log::info!("Applied migration {}", version);
	}
	Ok(applied)
}

/// Reverts the most recently applied migration and returns its version.
pub fn revert(pool: &DbPool) -> anyhow::Result<String> {
	let mut conn = pool.get().context("can not get a connection from the pool")?;
	let version = conn
		.revert_last_migration(MIGRATIONS)
		.map_err(|e| anyhow!("Unable to revert the last migration: {}", e))?;
	log::info!("Reverted migration {}", version);
	Ok(version.to_string())
}

#[derive(QueryableByName)]
struct PublicTable {
	#[diesel(sql_type = Text)]
	table_name: String,
}

/// Names of the tables present in the `public` schema.
pub fn existing_tables(conn: &mut PgConnection) -> QueryResult<Vec<String>> {
	let rows = diesel::sql_query(
		"SELECT table_name::text AS table_name
		FROM information_schema.tables
		WHERE table_schema = 'public' AND table_type = 'BASE TABLE'
		ORDER BY table_name",
	)
	.load::<PublicTable>(conn)?;
	Ok(rows.into_iter().map(|row| row.table_name).collect())
}

/// Catalog tables that the connected database does not have.
pub fn missing_tables(pool: &DbPool) -> anyhow::Result<Vec<TableName>> {
	let mut conn = pool.get().context("can not get a connection from the pool")?;
	let existing = existing_tables(&mut conn).context("failed to list database tables")?;
	let missing = TableName::ALL
		.into_iter()
		.filter(|table| !existing.iter().any(|name| name == table.as_str()))
		.collect::<Vec<_>>();
	for table in &missing {
		log::warn!("Table {} is missing", table);
	}
	Ok(missing)
}
