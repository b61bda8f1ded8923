//! Flash codes for the redirect-after-post flow
//!
//! Mutating routes never render anything themselves. They answer with a
//! redirect back to the originating view carrying `?flash=<code>`, and
//! the view resolves the code to a human message on the next GET. Codes
//! the resolver does not recognize are ignored, so a stale or hand-typed
//! link never errors.

use axum::response::Redirect;
use serde::Deserialize;

/// Query parameter carrying the flash code after a redirect
#[derive(Debug, Deserialize)]
pub struct FlashParams {
    pub flash: Option<String>,
}

/// Outcome codes carried through redirects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashCode {
    GuestRegistered,
    GuestFailed,
    RoomCreated,
    RoomFailed,
    BillGenerated,
    BillFailed,
    PaymentRecorded,
    PaymentFailed,
    ExpenseRecorded,
    ExpenseFailed,
}

impl FlashCode {
    /// All codes, in display order
    pub fn all() -> [FlashCode; 10] {
        [
            FlashCode::GuestRegistered,
            FlashCode::GuestFailed,
            FlashCode::RoomCreated,
            FlashCode::RoomFailed,
            FlashCode::BillGenerated,
            FlashCode::BillFailed,
            FlashCode::PaymentRecorded,
            FlashCode::PaymentFailed,
            FlashCode::ExpenseRecorded,
            FlashCode::ExpenseFailed,
        ]
    }

    /// Short code embedded in the redirect query string
    pub fn code(&self) -> &'static str {
        match self {
            FlashCode::GuestRegistered => "guest_registered",
            FlashCode::GuestFailed => "guest_failed",
            FlashCode::RoomCreated => "room_created",
            FlashCode::RoomFailed => "room_failed",
            FlashCode::BillGenerated => "bill_generated",
            FlashCode::BillFailed => "bill_failed",
            FlashCode::PaymentRecorded => "payment_recorded",
            FlashCode::PaymentFailed => "payment_failed",
            FlashCode::ExpenseRecorded => "expense_recorded",
            FlashCode::ExpenseFailed => "expense_failed",
        }
    }

    /// Message the view shows for this code
    pub fn message(&self) -> &'static str {
        match self {
            FlashCode::GuestRegistered => "Guest registered successfully",
            FlashCode::GuestFailed => "Failed to register guest",
            FlashCode::RoomCreated => "Room added successfully",
            FlashCode::RoomFailed => "Failed to add room",
            FlashCode::BillGenerated => "Bill generated successfully",
            FlashCode::BillFailed => "Failed to generate bill",
            FlashCode::PaymentRecorded => "Payment recorded successfully",
            FlashCode::PaymentFailed => "Failed to record payment",
            FlashCode::ExpenseRecorded => "Expense recorded successfully",
            FlashCode::ExpenseFailed => "Failed to record expense",
        }
    }

    /// Looks a code string back up, if it is one of ours
    pub fn from_code(code: &str) -> Option<FlashCode> {
        FlashCode::all().into_iter().find(|c| c.code() == code)
    }

    /// Resolves an optional query code to its message
    pub fn resolve(code: Option<&str>) -> Option<String> {
        code.and_then(FlashCode::from_code)
            .map(|c| c.message().to_string())
    }

    /// See-other redirect to `path` carrying this code
    pub fn redirect_to(self, path: &str) -> Redirect {
        Redirect::to(&format!("{path}?flash={}", self.code()))
    }
}
