//! Runtime view of the schema: table and enum names, columns and foreign
//! keys. Every lookup here is an exhaustive match over the declared names.

use crate::{
	enums::{BookingStatus, PaymentStatus, UserRole},
	error::ParseNameError,
	schema::*,
	shapes::Shapes,
};
use serde::Serialize;
use std::{fmt, str::FromStr};

macro_rules! with_shapes {
	($name:expr, $item:ident) => {
		match $name {
			TableName::Users => <users::table as Shapes>::$item,
			TableName::OtpLogins => <otp_logins::table as Shapes>::$item,
			TableName::Pujas => <pujas::table as Shapes>::$item,
			TableName::PujaImages => <puja_images::table as Shapes>::$item,
			TableName::Plans => <plans::table as Shapes>::$item,
			TableName::PujaPlans => <puja_plans::table as Shapes>::$item,
			TableName::Chadawas => <chadawas::table as Shapes>::$item,
			TableName::PujaChadawas => <puja_chadawas::table as Shapes>::$item,
			TableName::Bookings => <bookings::table as Shapes>::$item,
			TableName::BookingChadawas => <booking_chadawas::table as Shapes>::$item,
			TableName::Payments => <payments::table as Shapes>::$item,
		}
	};
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TableName {
	Users,
	OtpLogins,
	Pujas,
	PujaImages,
	Plans,
	PujaPlans,
	Chadawas,
	PujaChadawas,
	Bookings,
	BookingChadawas,
	Payments,
}

impl TableName {
	/// Parents before children, the order the tables are created in.
	pub const ALL: [TableName; 11] = [
		TableName::Users,
		TableName::OtpLogins,
		TableName::Pujas,
		TableName::PujaImages,
		TableName::Plans,
		TableName::PujaPlans,
		TableName::Chadawas,
		TableName::PujaChadawas,
		TableName::Bookings,
		TableName::BookingChadawas,
		TableName::Payments,
	];

	pub fn as_str(self) -> &'static str {
		with_shapes!(self, NAME)
	}

	pub fn columns(self) -> &'static [&'static str] {
		with_shapes!(self, COLUMNS)
	}

	pub fn insert_columns(self) -> &'static [&'static str] {
		with_shapes!(self, INSERT_COLUMNS)
	}

	pub fn required_insert_columns(self) -> &'static [&'static str] {
		with_shapes!(self, REQUIRED_INSERT_COLUMNS)
	}

	pub fn update_columns(self) -> &'static [&'static str] {
		with_shapes!(self, UPDATE_COLUMNS)
	}

	pub fn has_column(self, column: &str) -> bool {
		self.columns().contains(&column)
	}

	/// Foreign keys declared on this table.
	pub fn foreign_keys(self) -> impl Iterator<Item = &'static ForeignKey> {
		FOREIGN_KEYS.iter().filter(move |fk| fk.table == self)
	}

	/// Foreign keys in other tables pointing at this one.
	pub fn referenced_by(self) -> impl Iterator<Item = &'static ForeignKey> {
		FOREIGN_KEYS.iter().filter(move |fk| fk.references == self)
	}

	pub fn describe(self) -> TableDescription {
		let required = self.required_insert_columns();
		let updatable = self.update_columns();
		TableDescription {
			name: self,
			columns: self
				.columns()
				.iter()
				.map(|&name| ColumnDescription {
					name,
					required_on_insert: required.contains(&name),
					updatable: updatable.contains(&name),
					enumeration: EnumName::for_column(self, name),
				})
				.collect(),
			foreign_keys: self.foreign_keys().collect(),
		}
	}
}

impl fmt::Display for TableName {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for TableName {
	type Err = ParseNameError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		TableName::ALL
			.into_iter()
			.find(|table| table.as_str() == s)
			.ok_or_else(|| ParseNameError::new("table", s))
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EnumName {
	UserRole,
	BookingStatus,
	PaymentStatus,
}

impl EnumName {
	pub const ALL: [EnumName; 3] = [EnumName::UserRole, EnumName::BookingStatus, EnumName::PaymentStatus];

	pub fn as_str(self) -> &'static str {
		match self {
			EnumName::UserRole => UserRole::NAME,
			EnumName::BookingStatus => BookingStatus::NAME,
			EnumName::PaymentStatus => PaymentStatus::NAME,
		}
	}

	pub fn values(self) -> &'static [&'static str] {
		match self {
			EnumName::UserRole => UserRole::values(),
			EnumName::BookingStatus => BookingStatus::values(),
			EnumName::PaymentStatus => PaymentStatus::values(),
		}
	}

	/// Table columns holding values of this enumeration.
	pub fn columns(self) -> &'static [(TableName, &'static str)] {
		match self {
			EnumName::UserRole => &[(TableName::Users, "role")],
			EnumName::BookingStatus => &[(TableName::Bookings, "status")],
			EnumName::PaymentStatus => &[(TableName::Payments, "status")],
		}
	}

	pub fn for_column(table: TableName, column: &str) -> Option<EnumName> {
		EnumName::ALL
			.into_iter()
			.find(|e| e.columns().iter().any(|&(t, c)| t == table && c == column))
	}
}

impl fmt::Display for EnumName {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for EnumName {
	type Err = ParseNameError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		EnumName::ALL
			.into_iter()
			.find(|e| e.as_str() == s)
			.ok_or_else(|| ParseNameError::new("enum", s))
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OnDelete {
	Cascade,
	NoAction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ForeignKey {
	/// Constraint name as Postgres generates it: `<table>_<column>_fkey`.
	pub name: &'static str,
	pub table: TableName,
	pub column: &'static str,
	pub references: TableName,
	pub referenced_column: &'static str,
	pub on_delete: OnDelete,
}

const fn fk(
	name: &'static str,
	table: TableName,
	column: &'static str,
	references: TableName,
	on_delete: OnDelete,
) -> ForeignKey {
	ForeignKey { name, table, column, references, referenced_column: "id", on_delete }
}

pub const FOREIGN_KEYS: &[ForeignKey] = &[
	fk("otp_logins_user_id_fkey", TableName::OtpLogins, "user_id", TableName::Users, OnDelete::Cascade),
	fk("puja_images_puja_id_fkey", TableName::PujaImages, "puja_id", TableName::Pujas, OnDelete::Cascade),
	fk("puja_plans_puja_id_fkey", TableName::PujaPlans, "puja_id", TableName::Pujas, OnDelete::NoAction),
	fk("puja_plans_plan_id_fkey", TableName::PujaPlans, "plan_id", TableName::Plans, OnDelete::NoAction),
	fk(
		"puja_chadawas_puja_id_fkey",
		TableName::PujaChadawas,
		"puja_id",
		TableName::Pujas,
		OnDelete::NoAction,
	),
	fk(
		"puja_chadawas_chadawa_id_fkey",
		TableName::PujaChadawas,
		"chadawa_id",
		TableName::Chadawas,
		OnDelete::NoAction,
	),
	fk("bookings_user_id_fkey", TableName::Bookings, "user_id", TableName::Users, OnDelete::Cascade),
	fk("bookings_puja_id_fkey", TableName::Bookings, "puja_id", TableName::Pujas, OnDelete::NoAction),
	fk("bookings_plan_id_fkey", TableName::Bookings, "plan_id", TableName::Plans, OnDelete::NoAction),
	fk(
		"booking_chadawas_booking_id_fkey",
		TableName::BookingChadawas,
		"booking_id",
		TableName::Bookings,
		OnDelete::Cascade,
	),
	fk(
		"booking_chadawas_chadawa_id_fkey",
		TableName::BookingChadawas,
		"chadawa_id",
		TableName::Chadawas,
		OnDelete::NoAction,
	),
	fk("payments_booking_id_fkey", TableName::Payments, "booking_id", TableName::Bookings, OnDelete::Cascade),
];

#[derive(Debug, Clone, Serialize)]
pub struct ColumnDescription {
	pub name: &'static str,
	pub required_on_insert: bool,
	pub updatable: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub enumeration: Option<EnumName>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TableDescription {
	pub name: TableName,
	pub columns: Vec<ColumnDescription>,
	pub foreign_keys: Vec<&'static ForeignKey>,
}
