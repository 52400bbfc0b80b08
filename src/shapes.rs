//! Row / Insert / Update shapes.
//!
//! Every table is declared once through [`entity!`], listing its columns in
//! table order with a kind marker. The macro expands that single list into
//! three structs:
//!
//! | kind         | Row          | Insert       | Update              |
//! |--------------|--------------|--------------|---------------------|
//! | `#[key]`     | `T`          | `Option<T>`  | absent              |
//! | `#[req]`     | `T`          | `T`          | `Option<T>`         |
//! | `#[null]`    | `Option<T>`  | `Option<T>`  | `Option<Option<T>>` |
//! | `#[now]`     | `T`          | `Option<T>`  | `Option<T>`         |
//! | `#[def(e)]`  | `T`          | `Option<T>`  | `Option<T>`         |
//!
//! A `None` in an Insert makes diesel emit `DEFAULT` for that column. A `None`
//! in an Update leaves the column untouched; `Some(None)` on a nullable column
//! sets it to NULL.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Values the database assigns when an insert leaves a column out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ServerDefaults {
	pub id: i32,
	pub now: DateTime<Utc>,
}

impl ServerDefaults {
	pub fn new(id: i32) -> Self {
		Self { id, now: Utc::now() }
	}

	pub fn at(id: i32, now: DateTime<Utc>) -> Self {
		Self { id, now }
	}
}

/// Links a diesel table type to the three shapes declared for it.
pub trait Shapes {
	const NAME: &'static str;
	/// Every column, in table order.
	const COLUMNS: &'static [&'static str];
	const INSERT_COLUMNS: &'static [&'static str];
	/// Insert columns without a server default.
	const REQUIRED_INSERT_COLUMNS: &'static [&'static str];
	/// Every column except the primary key.
	const UPDATE_COLUMNS: &'static [&'static str];

	type Row;
	type Insert;
	type Update;
}

pub type RowOf<T> = <T as Shapes>::Row;
pub type InsertOf<T> = <T as Shapes>::Insert;
pub type UpdateOf<T> = <T as Shapes>::Update;

/// Update fields: a present value, including an explicit `null`, becomes
/// `Some`. Missing fields fall back to `None` through `#[serde(default)]`.
pub fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
	D: Deserializer<'de>,
	T: Deserialize<'de>,
{
	T::deserialize(deserializer).map(Some)
}

macro_rules! entity {
	(@munch $head:tt
		fields [#[key] $f:ident : $t:ty, $($rest:tt)*]
		row [$($r:tt)*] insert [$($i:tt)*] update [$($u:tt)*] widen [$($w:tt)*]
		cols [$($c:tt)*] update_cols [$($uc:tt)*] required [$($rq:tt)*]
		ctx [$new:ident $defaults:ident]
	) => {
		entity! { @munch $head
			fields [$($rest)*]
			row [$($r)* pub $f: $t,]
			insert [$($i)* pub $f: Option<$t>,]
			update [$($u)*]
			widen [$($w)* $f: $new.$f.unwrap_or($defaults.id),]
			cols [$($c)* $f] update_cols [$($uc)*] required [$($rq)*]
			ctx [$new $defaults]
		}
	};
	(@munch $head:tt
		fields [#[req] $f:ident : $t:ty, $($rest:tt)*]
		row [$($r:tt)*] insert [$($i:tt)*] update [$($u:tt)*] widen [$($w:tt)*]
		cols [$($c:tt)*] update_cols [$($uc:tt)*] required [$($rq:tt)*]
		ctx [$new:ident $defaults:ident]
	) => {
		entity! { @munch $head
			fields [$($rest)*]
			row [$($r)* pub $f: $t,]
			insert [$($i)* pub $f: $t,]
			update [$($u)*
				#[serde(
					default,
					deserialize_with = "crate::shapes::present",
					skip_serializing_if = "Option::is_none"
				)]
				pub $f: Option<$t>,
			]
			widen [$($w)* $f: $new.$f,]
			cols [$($c)* $f] update_cols [$($uc)* $f] required [$($rq)* $f]
			ctx [$new $defaults]
		}
	};
	(@munch $head:tt
		fields [#[null] $f:ident : $t:ty, $($rest:tt)*]
		row [$($r:tt)*] insert [$($i:tt)*] update [$($u:tt)*] widen [$($w:tt)*]
		cols [$($c:tt)*] update_cols [$($uc:tt)*] required [$($rq:tt)*]
		ctx [$new:ident $defaults:ident]
	) => {
		entity! { @munch $head
			fields [$($rest)*]
			row [$($r)* pub $f: Option<$t>,]
			insert [$($i)* pub $f: Option<$t>,]
			update [$($u)*
				#[serde(
					default,
					deserialize_with = "crate::shapes::present",
					skip_serializing_if = "Option::is_none"
				)]
				pub $f: Option<Option<$t>>,
			]
			widen [$($w)* $f: $new.$f,]
			cols [$($c)* $f] update_cols [$($uc)* $f] required [$($rq)*]
			ctx [$new $defaults]
		}
	};
	(@munch $head:tt
		fields [#[now] $f:ident : $t:ty, $($rest:tt)*]
		row [$($r:tt)*] insert [$($i:tt)*] update [$($u:tt)*] widen [$($w:tt)*]
		cols [$($c:tt)*] update_cols [$($uc:tt)*] required [$($rq:tt)*]
		ctx [$new:ident $defaults:ident]
	) => {
		entity! { @munch $head
			fields [$($rest)*]
			row [$($r)* pub $f: $t,]
			insert [$($i)* pub $f: Option<$t>,]
			update [$($u)*
				#[serde(
					default,
					deserialize_with = "crate::shapes::present",
					skip_serializing_if = "Option::is_none"
				)]
				pub $f: Option<$t>,
			]
			widen [$($w)* $f: $new.$f.unwrap_or($defaults.now),]
			cols [$($c)* $f] update_cols [$($uc)* $f] required [$($rq)*]
			ctx [$new $defaults]
		}
	};
	(@munch $head:tt
		fields [#[def($d:expr)] $f:ident : $t:ty, $($rest:tt)*]
		row [$($r:tt)*] insert [$($i:tt)*] update [$($u:tt)*] widen [$($w:tt)*]
		cols [$($c:tt)*] update_cols [$($uc:tt)*] required [$($rq:tt)*]
		ctx [$new:ident $defaults:ident]
	) => {
		entity! { @munch $head
			fields [$($rest)*]
			row [$($r)* pub $f: $t,]
			insert [$($i)* pub $f: Option<$t>,]
			update [$($u)*
				#[serde(
					default,
					deserialize_with = "crate::shapes::present",
					skip_serializing_if = "Option::is_none"
				)]
				pub $f: Option<$t>,
			]
			widen [$($w)* $f: $new.$f.unwrap_or_else(|| $d),]
			cols [$($c)* $f] update_cols [$($uc)* $f] required [$($rq)*]
			ctx [$new $defaults]
		}
	};
	(@munch [$table:ident $row:ident $insert:ident $update:ident [$($meta:tt)*]]
		fields []
		row [$($r:tt)*] insert [$($i:tt)*] update [$($u:tt)*] widen [$($w:tt)*]
		cols [$($c:ident)*] update_cols [$($uc:ident)*] required [$($rq:ident)*]
		ctx [$new:ident $defaults:ident]
	) => {
		$($meta)*
		#[derive(
			::diesel::Queryable,
			::diesel::Selectable,
			::diesel::Identifiable,
			::serde::Serialize,
			::serde::Deserialize,
			Debug,
			Clone,
			PartialEq,
		)]
		#[diesel(table_name = $table)]
		#[diesel(check_for_backend(diesel::pg::Pg))]
		pub struct $row {
			$($r)*
		}

		#[doc = concat!("Insert shape of `", stringify!($table), "`; `None` leaves the column to its server default.")]
		#[derive(::diesel::Insertable, ::serde::Serialize, ::serde::Deserialize, Debug, Clone, PartialEq)]
		#[diesel(table_name = $table)]
		pub struct $insert {
			$($i)*
		}

		#[doc = concat!("Partial update of `", stringify!($table), "`; `None` leaves the column unchanged.")]
		#[derive(
			::diesel::AsChangeset,
			::serde::Serialize,
			::serde::Deserialize,
			Debug,
			Clone,
			Default,
			PartialEq,
		)]
		#[diesel(table_name = $table)]
		pub struct $update {
			$($u)*
		}

		impl $insert {
			/// Widens the insert into the row the database would return for it.
			pub fn into_row(self, $defaults: $crate::shapes::ServerDefaults) -> $row {
				let $new = self;
				$row { $($w)* }
			}
		}

		impl $update {
			/// True when no column would be touched. diesel refuses to run an
			/// empty changeset.
			pub fn is_empty(&self) -> bool {
				*self == Self::default()
			}
		}

		impl $crate::shapes::Shapes for $table::table {
			const NAME: &'static str = stringify!($table);
			const COLUMNS: &'static [&'static str] = &[$(stringify!($c)),*];
			const INSERT_COLUMNS: &'static [&'static str] = &[$(stringify!($c)),*];
			const REQUIRED_INSERT_COLUMNS: &'static [&'static str] = &[$(stringify!($rq)),*];
			const UPDATE_COLUMNS: &'static [&'static str] = &[$(stringify!($uc)),*];

			type Row = $row;
			type Insert = $insert;
			type Update = $update;
		}
	};
	(
		$(#[$meta:meta])*
		$table:ident => $row:ident, $insert:ident, $update:ident {
			$($fields:tt)*
		}
	) => {
		entity! { @munch [$table $row $insert $update [$(#[$meta])*]]
			fields [$($fields)*]
			row [] insert [] update [] widen []
			cols [] update_cols [] required []
			ctx [new defaults]
		}
	};
}

pub(crate) use entity;
