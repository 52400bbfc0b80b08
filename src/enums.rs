//! Enumerated column values.
//!
//! The database stores these as short varchar columns guarded by `CHECK`
//! constraints; on the Rust side they are closed enums that read and write
//! their snake_case literal.

use crate::error::ParseNameError;
use diesel::{
	deserialize::{self, FromSql, FromSqlRow},
	expression::AsExpression,
	pg::{Pg, PgValue},
	serialize::{self, IsNull, Output, ToSql},
	sql_types::Text,
};
use serde::{Deserialize, Serialize};
use std::{fmt, io::Write, str::FromStr};

macro_rules! db_enum {
	(
		$(#[$meta:meta])*
		$name:ident as $db_name:literal, default = $default:ident {
			$($variant:ident => $literal:literal,)+
		}
	) => {
		$(#[$meta])*
		#[derive(
			Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsExpression, FromSqlRow,
		)]
		#[serde(rename_all = "snake_case")]
		#[diesel(sql_type = Text)]
		pub enum $name {
			$($variant,)+
		}

		impl $name {
			/// Name of the enumeration in the database definition.
			pub const NAME: &'static str = $db_name;
			pub const ALL: &'static [$name] = &[$($name::$variant,)+];

			pub fn as_str(&self) -> &'static str {
				match self {
					$($name::$variant => $literal,)+
				}
			}

			pub fn values() -> &'static [&'static str] {
				&[$($literal,)+]
			}
		}

		impl Default for $name {
			fn default() -> Self {
				$name::$default
			}
		}

		impl fmt::Display for $name {
			fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
				f.write_str(self.as_str())
			}
		}

		impl FromStr for $name {
			type Err = ParseNameError;

			fn from_str(s: &str) -> Result<Self, Self::Err> {
				match s {
					$($literal => Ok($name::$variant),)+
					other => Err(ParseNameError::new($db_name, other)),
				}
			}
		}

		impl ToSql<Text, Pg> for $name {
			fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
				out.write_all(self.as_str().as_bytes())?;
				Ok(IsNull::No)
			}
		}

		impl FromSql<Text, Pg> for $name {
			fn from_sql(bytes: PgValue<'_>) -> deserialize::Result<Self> {
				let raw = std::str::from_utf8(bytes.as_bytes())?;
				Ok(raw.parse::<$name>()?)
			}
		}
	};
}

db_enum! {
	/// Account role stored in `users.role`.
	UserRole as "user_role", default = User {
		SuperAdmin => "super_admin",
		Admin => "admin",
		User => "user",
	}
}

db_enum! {
	/// Lifecycle of a row in `bookings`.
	BookingStatus as "booking_status", default = Pending {
		Pending => "pending",
		Confirmed => "confirmed",
		Completed => "completed",
		Cancelled => "cancelled",
	}
}

db_enum! {
	/// Razorpay payment attempt state stored in `payments.status`.
	PaymentStatus as "payment_status", default = Created {
		Created => "created",
		Pending => "pending",
		Success => "success",
		Failed => "failed",
		Refunded => "refunded",
	}
}
