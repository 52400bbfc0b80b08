use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use env_logger::Env;
use puja_schema::{
	catalog::{EnumName, TableName},
	db::{self, DbPool},
};

/// Maintains the puja booking database schema.
#[derive(Parser)]
#[command(name = "puja-schema", version)]
struct Cli {
	/// Postgres connection string.
	#[arg(long, env = "DATABASE_URL", global = true, hide_env_values = true)]
	database_url: Option<String>,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand)]
enum Command {
	/// Apply pending migrations.
	Migrate,
	/// Revert the last applied migration.
	Revert,
	/// Report tables the database is missing.
	Check,
	/// List the tables of the schema.
	Tables,
	/// List the enumerations and their values.
	Enums,
	/// Show the columns and foreign keys of one table.
	Describe {
		table: TableName,
		#[arg(long)]
		json: bool,
	},
}

fn connect(database_url: Option<String>) -> anyhow::Result<DbPool> {
	let url = database_url.context("DATABASE_URL must be set or passed with --database-url")?;
	db::get_db_pool(&url)
}

fn describe(table: TableName, json: bool) -> anyhow::Result<()> {
	let description = table.describe();
	if json {
		println!("{}", serde_json::to_string_pretty(&description)?);
		return Ok(());
	}
	println!("{}", description.name);
	for column in &description.columns {
		let mut notes = Vec::new();
		if column.required_on_insert {
			notes.push("required".to_string());
		}
		if !column.updatable {
			notes.push("key".to_string());
		}
		if let Some(e) = column.enumeration {
			notes.push(format!("enum {}", e));
		}
		println!("  {:<22}{}", column.name, notes.join(", "));
	}
	for fk in &description.foreign_keys {
		println!(
			"  {} -> {}.{} ({:?})",
			fk.column, fk.references, fk.referenced_column, fk.on_delete
		);
	}
	for fk in table.referenced_by() {
		println!("  <- {}.{}", fk.table, fk.column);
	}
	Ok(())
}

fn main() -> anyhow::Result<()> {
	dotenvy::dotenv().ok();
	env_logger::init_from_env(Env::default().default_filter_or("info"));
	let cli = Cli::parse();

	match cli.command {
		Command::Migrate => {
			let pool = connect(cli.database_url)?;
			if db::init(&pool)?.is_empty() {
				log::info!("Schema is up to date");
			}
		},
		Command::Revert => {
			let pool = connect(cli.database_url)?;
			db::revert(&pool)?;
		},
		Command::Check => {
			let pool = connect(cli.database_url)?;
			let missing = db::missing_tables(&pool)?;
			if !missing.is_empty() {
				let names = missing.iter().map(|t| t.as_str()).collect::<Vec<_>>();
				bail!("database is missing {} table(s): {}", names.len(), names.join(", "));
			}
			log::info!("All {} tables present", TableName::ALL.len());
		},
		Command::Tables => {
			for table in TableName::ALL {
				println!("{}", table);
			}
		},
		Command::Enums => {
			for e in EnumName::ALL {
				println!("{}: {}", e, e.values().join(", "));
			}
		},
		Command::Describe { table, json } => describe(table, json)?,
	}
	Ok(())
}
