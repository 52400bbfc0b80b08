use bigdecimal::BigDecimal;
use diesel::{debug_query, pg::Pg, prelude::*};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::json;
use std::fmt::Debug;

use crate::{
	enums::{BookingStatus, PaymentStatus, UserRole},
	models::*,
	schema::*,
	shapes::{InsertOf, RowOf, ServerDefaults, Shapes, UpdateOf},
	tests::fixtures::TestFixtures,
};

macro_rules! for_each_table {
	($check:ident) => {
		$check::<users::table>();
		$check::<otp_logins::table>();
		$check::<pujas::table>();
		$check::<puja_images::table>();
		$check::<plans::table>();
		$check::<puja_plans::table>();
		$check::<chadawas::table>();
		$check::<puja_chadawas::table>();
		$check::<bookings::table>();
		$check::<booking_chadawas::table>();
		$check::<payments::table>();
	};
}

fn assert_insert_within_row<T: Shapes>() {
	for column in T::INSERT_COLUMNS {
		assert!(T::COLUMNS.contains(column), "{}.{} is not a row column", T::NAME, column);
	}
	for column in T::REQUIRED_INSERT_COLUMNS {
		assert!(T::INSERT_COLUMNS.contains(column), "{}.{} is not insertable", T::NAME, column);
	}
	for column in T::UPDATE_COLUMNS {
		assert!(T::COLUMNS.contains(column), "{}.{} is not a row column", T::NAME, column);
	}
	assert!(!T::REQUIRED_INSERT_COLUMNS.contains(&"id"));
	assert!(!T::UPDATE_COLUMNS.contains(&"id"));
	assert_eq!(T::UPDATE_COLUMNS.len(), T::COLUMNS.len() - 1);
}

fn assert_update_all_optional<T>()
where
	T: Shapes,
	T::Update: Default + Serialize + DeserializeOwned + PartialEq + Debug,
{
	let empty: T::Update = serde_json::from_str("{}").expect("every update field is optional");
	assert_eq!(empty, T::Update::default(), "{}", T::NAME);
	assert_eq!(serde_json::to_value(&empty).unwrap(), json!({}), "{}", T::NAME);
}

#[test]
fn insert_and_update_columns_are_subsets_of_row_columns() {
	for_each_table!(assert_insert_within_row);
}

#[test]
fn every_update_field_is_optional() {
	for_each_table!(assert_update_all_optional);
}

#[test]
fn required_insert_columns_match_database_defaults() {
	assert_eq!(<users::table as Shapes>::REQUIRED_INSERT_COLUMNS, &["name", "mobile"]);
	assert_eq!(
		<otp_logins::table as Shapes>::REQUIRED_INSERT_COLUMNS,
		&["user_id", "otp_code", "expires_at"]
	);
	assert_eq!(<bookings::table as Shapes>::REQUIRED_INSERT_COLUMNS, &["user_id"]);
	assert_eq!(
		<payments::table as Shapes>::REQUIRED_INSERT_COLUMNS,
		&["booking_id", "razorpay_order_id", "amount"]
	);
	assert_eq!(<chadawas::table as Shapes>::REQUIRED_INSERT_COLUMNS, &["name", "price"]);
}

#[test]
fn table_types_resolve_to_their_shapes() {
	let row: RowOf<users::table> =
		TestFixtures::new_user().into_row(ServerDefaults::at(3, TestFixtures::fixed_now()));
	let insert: InsertOf<payments::table> = TestFixtures::new_payment(row.id);
	let update: UpdateOf<bookings::table> = BookingUpdate::default();
	assert_eq!(insert.booking_id, 3);
	assert!(update.is_empty());
}

#[test]
fn new_user_widens_with_server_defaults() {
	let now = TestFixtures::fixed_now();
	let user = TestFixtures::new_user().into_row(ServerDefaults::at(1, now));

	assert_eq!(user.id, 1);
	assert_eq!(user.name, "Test User");
	assert_eq!(user.email.as_deref(), Some("test.user@gmail.com"));
	assert_eq!(user.role, UserRole::User);
	assert_eq!(user.created_at, now);
	assert_eq!(user.updated_at, now);
}

#[test]
fn explicit_insert_values_win_over_defaults() {
	let created = TestFixtures::fixed_now() - chrono::Duration::days(2);
	let new_user = NewUser {
		id: Some(42),
		role: Some(UserRole::Admin),
		created_at: Some(created),
		..TestFixtures::new_user()
	};
	let user = new_user.into_row(ServerDefaults::at(1, TestFixtures::fixed_now()));

	assert_eq!(user.id, 42);
	assert_eq!(user.role, UserRole::Admin);
	assert_eq!(user.created_at, created);
	assert_eq!(user.updated_at, TestFixtures::fixed_now());
}

#[test]
fn booking_and_payment_pick_up_status_defaults() {
	let now = TestFixtures::fixed_now();
	let booking = TestFixtures::new_booking(5).into_row(ServerDefaults::at(10, now));
	assert_eq!(booking.status, BookingStatus::Pending);
	assert_eq!(booking.booking_date, now);
	assert_eq!(booking.puja_id, None);
	assert_eq!(booking.puja_link, None);

	let payment = TestFixtures::new_payment(booking.id).into_row(ServerDefaults::at(20, now));
	assert_eq!(payment.booking_id, 10);
	assert_eq!(payment.currency, DEFAULT_CURRENCY);
	assert_eq!(payment.status, PaymentStatus::Created);
	assert_eq!(payment.razorpay_payment_id, None);
}

#[test]
fn flags_default_to_false() {
	let otp = NewOtpLogin {
		id: None,
		user_id: 1,
		otp_code: "482913".to_string(),
		is_verified: None,
		expires_at: TestFixtures::fixed_now() + chrono::Duration::minutes(5),
		created_at: None,
	}
	.into_row(ServerDefaults::new(1));
	assert!(!otp.is_verified);

	let chadawa = NewChadawa { requires_note: None, ..TestFixtures::new_chadawa(true) }
		.into_row(ServerDefaults::new(1));
	assert!(!chadawa.requires_note);
}

#[test]
fn serialized_row_is_accepted_as_insert() {
	let new_payment = TestFixtures::new_payment(4);
	let row = new_payment.clone().into_row(ServerDefaults::at(8, TestFixtures::fixed_now()));

	let back: NewPayment = serde_json::from_value(serde_json::to_value(&row).unwrap()).unwrap();
	assert_eq!(back.id, Some(8));
	assert_eq!(back.amount, new_payment.amount);
	assert_eq!(back.currency.as_deref(), Some("INR"));
	assert_eq!(back.status, Some(PaymentStatus::Created));
	assert_eq!(back.into_row(ServerDefaults::new(99)), row);
}

#[test]
fn insert_payload_omits_defaulted_fields() {
	let new_user: NewUser =
		serde_json::from_str(r#"{"name": "Asha", "mobile": "9000000001"}"#).unwrap();
	assert_eq!(new_user.id, None);
	assert_eq!(new_user.email, None);
	assert_eq!(new_user.role, None);

	assert!(serde_json::from_str::<NewUser>(r#"{"name": "Asha"}"#).is_err());
}

#[test]
fn update_distinguishes_missing_from_null() {
	let update: UserUpdate = serde_json::from_str(r#"{"email": null}"#).unwrap();
	assert_eq!(update.email, Some(None));
	assert_eq!(update.name, None);

	let update: UserUpdate =
		serde_json::from_str(r#"{"email": "asha@example.com", "role": "admin"}"#).unwrap();
	assert_eq!(update.email, Some(Some("asha@example.com".to_string())));
	assert_eq!(update.role, Some(UserRole::Admin));
}

#[test]
fn update_rejects_null_for_non_nullable_column() {
	assert!(serde_json::from_str::<UserUpdate>(r#"{"name": null}"#).is_err());
	assert!(serde_json::from_str::<BookingUpdate>(r#"{"status": "on_hold"}"#).is_err());
}

#[test]
fn update_serializes_only_touched_columns() {
	let update = BookingUpdate {
		status: Some(BookingStatus::Confirmed),
		puja_link: Some(None),
		..Default::default()
	};
	assert_eq!(
		serde_json::to_value(&update).unwrap(),
		json!({"status": "confirmed", "puja_link": null})
	);
	assert!(!update.is_empty());
	assert!(BookingUpdate::default().is_empty());
}

macro_rules! assert_selects_catalog_columns {
	($table:ident, $row:ty) => {{
		let query = $table::table.select(<$row>::as_select());
		let sql = debug_query::<Pg, _>(&query).to_string();
		let expected = <$table::table as Shapes>::COLUMNS
			.iter()
			.map(|column| format!("\"{}\".\"{}\"", stringify!($table), column))
			.collect::<Vec<_>>()
			.join(", ");
		assert!(sql.contains(&expected), "{}", sql);
	}};
}

#[test]
fn row_selection_follows_catalog_column_order() {
	assert_selects_catalog_columns!(users, User);
	assert_selects_catalog_columns!(otp_logins, OtpLogin);
	assert_selects_catalog_columns!(pujas, Puja);
	assert_selects_catalog_columns!(puja_images, PujaImage);
	assert_selects_catalog_columns!(plans, Plan);
	assert_selects_catalog_columns!(puja_plans, PujaPlan);
	assert_selects_catalog_columns!(chadawas, Chadawa);
	assert_selects_catalog_columns!(puja_chadawas, PujaChadawa);
	assert_selects_catalog_columns!(bookings, Booking);
	assert_selects_catalog_columns!(booking_chadawas, BookingChadawa);
	assert_selects_catalog_columns!(payments, Payment);
}

#[test]
fn insert_leaves_missing_values_to_the_database() {
	let new_user = TestFixtures::new_user();
	let query = diesel::insert_into(users::table).values(&new_user);
	let sql = debug_query::<Pg, _>(&query).to_string();

	assert!(sql.starts_with("INSERT INTO \"users\""), "{}", sql);
	assert!(sql.contains("\"mobile\""), "{}", sql);
	assert!(sql.contains("DEFAULT"), "{}", sql);
}

#[test]
fn update_sets_only_present_columns() {
	let changes = UserUpdate { name: Some("Asha Devi".to_string()), ..Default::default() };
	let query = diesel::update(users::table.find(1)).set(&changes);
	let sql = debug_query::<Pg, _>(&query).to_string();

	assert!(sql.starts_with("UPDATE \"users\" SET \"name\" = $1"), "{}", sql);
	assert!(!sql.contains("\"mobile\""), "{}", sql);
}

#[test]
fn effective_price_prefers_the_discount() {
	let plan = TestFixtures::new_plan().into_row(ServerDefaults::new(1));
	assert_eq!(plan.effective_price(), &BigDecimal::from(951));

	let undiscounted = NewPlan { discounted_price: None, ..TestFixtures::new_plan() }
		.into_row(ServerDefaults::new(2));
	assert_eq!(undiscounted.effective_price(), &BigDecimal::from(1100));
}

#[test]
fn notes_are_only_demanded_when_required() {
	let plain = TestFixtures::new_chadawa(false).into_row(ServerDefaults::new(1));
	assert!(plain.accepts_note(None));

	let named = TestFixtures::new_chadawa(true).into_row(ServerDefaults::new(2));
	assert!(!named.accepts_note(None));
	assert!(!named.accepts_note(Some("   ")));
	assert!(named.accepts_note(Some("For the family of Ramesh Sharma")));
}
