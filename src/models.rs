use crate::{
	enums::{BookingStatus, PaymentStatus, UserRole},
	schema::*,
	shapes::entity,
};
use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Currency written to `payments.currency` when an insert leaves it out.
pub const DEFAULT_CURRENCY: &str = "INR";

entity! {
	/// A registered account. `mobile` and `email` are unique across users.
	users => User, NewUser, UserUpdate {
		#[key] id: i32,
		#[req] name: String,
		#[null] email: String,
		#[req] mobile: String,
		#[def(UserRole::User)] role: UserRole,
		#[now] created_at: DateTime<Utc>,
		#[now] updated_at: DateTime<Utc>,
	}
}

entity! {
	/// One-time login code. A user may hold several; expiry and verification
	/// are checked by whoever consumes the code.
	#[derive(Associations)]
	#[diesel(belongs_to(User))]
	otp_logins => OtpLogin, NewOtpLogin, OtpLoginUpdate {
		#[key] id: i32,
		#[req] user_id: i32,
		#[req] otp_code: String,
		#[def(false)] is_verified: bool,
		#[req] expires_at: DateTime<Utc>,
		#[now] created_at: DateTime<Utc>,
	}
}

entity! {
	/// A bookable ritual service.
	pujas => Puja, NewPuja, PujaUpdate {
		#[key] id: i32,
		#[req] name: String,
		#[null] description: String,
		#[now] created_at: DateTime<Utc>,
		#[now] updated_at: DateTime<Utc>,
	}
}

entity! {
	#[derive(Associations)]
	#[diesel(belongs_to(Puja))]
	puja_images => PujaImage, NewPujaImage, PujaImageUpdate {
		#[key] id: i32,
		#[req] puja_id: i32,
		#[req] image_url: String,
	}
}

entity! {
	/// Pricing tier. `discounted_price`, when set, is what the customer pays.
	plans => Plan, NewPlan, PlanUpdate {
		#[key] id: i32,
		#[req] name: String,
		#[null] description: String,
		#[null] image_url: String,
		#[req] actual_price: BigDecimal,
		#[null] discounted_price: BigDecimal,
		#[now] created_at: DateTime<Utc>,
	}
}

entity! {
	/// Links a puja to a plan it is offered under.
	#[derive(Associations)]
	#[diesel(belongs_to(Puja))]
	#[diesel(belongs_to(Plan))]
	puja_plans => PujaPlan, NewPujaPlan, PujaPlanUpdate {
		#[key] id: i32,
		#[req] puja_id: i32,
		#[req] plan_id: i32,
	}
}

entity! {
	/// An offering that can be added to a booking.
	chadawas => Chadawa, NewChadawa, ChadawaUpdate {
		#[key] id: i32,
		#[req] name: String,
		#[null] description: String,
		#[null] image_url: String,
		#[req] price: BigDecimal,
		#[def(false)] requires_note: bool,
	}
}

entity! {
	/// Links a puja to an offering available for it.
	#[derive(Associations)]
	#[diesel(belongs_to(Puja))]
	#[diesel(belongs_to(Chadawa))]
	puja_chadawas => PujaChadawa, NewPujaChadawa, PujaChadawaUpdate {
		#[key] id: i32,
		#[req] puja_id: i32,
		#[req] chadawa_id: i32,
	}
}

entity! {
	#[derive(Associations)]
	#[diesel(belongs_to(User))]
	#[diesel(belongs_to(Puja))]
	#[diesel(belongs_to(Plan))]
	bookings => Booking, NewBooking, BookingUpdate {
		#[key] id: i32,
		#[req] user_id: i32,
		#[null] puja_id: i32,
		#[null] plan_id: i32,
		#[now] booking_date: DateTime<Utc>,
		#[def(BookingStatus::Pending)] status: BookingStatus,
		#[null] puja_link: String,
		#[now] created_at: DateTime<Utc>,
	}
}

entity! {
	/// An offering attached to a booking. `note` carries the text asked for
	/// by `Chadawa::requires_note`.
	#[derive(Associations)]
	#[diesel(belongs_to(Booking))]
	#[diesel(belongs_to(Chadawa))]
	booking_chadawas => BookingChadawa, NewBookingChadawa, BookingChadawaUpdate {
		#[key] id: i32,
		#[req] booking_id: i32,
		#[null] chadawa_id: i32,
		#[null] note: String,
	}
}

entity! {
	/// A Razorpay payment attempt. A booking can accumulate several.
	#[derive(Associations)]
	#[diesel(belongs_to(Booking))]
	payments => Payment, NewPayment, PaymentUpdate {
		#[key] id: i32,
		#[req] booking_id: i32,
		#[req] razorpay_order_id: String,
		#[null] razorpay_payment_id: String,
		#[null] razorpay_signature: String,
		#[req] amount: BigDecimal,
		#[def(DEFAULT_CURRENCY.to_string())] currency: String,
		#[def(PaymentStatus::Created)] status: PaymentStatus,
		#[now] created_at: DateTime<Utc>,
		#[now] updated_at: DateTime<Utc>,
	}
}

impl Chadawa {
	/// Whether `note` satisfies this offering's note requirement.
	pub fn accepts_note(&self, note: Option<&str>) -> bool {
		!self.requires_note || note.is_some_and(|n| !n.trim().is_empty())
	}
}

impl Plan {
	/// The price charged: the discount when present, otherwise the list price.
	pub fn effective_price(&self) -> &BigDecimal {
		self.discounted_price.as_ref().unwrap_or(&self.actual_price)
	}
}
