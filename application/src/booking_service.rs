use domain::gateway::BookingGateway;
use domain::models::{Booking, BookingRequest, BookingSlot};
use shared::types::Result;

const SLOTS_FALLBACK: &str = "Failed to fetch slots";
const BOOKINGS_FALLBACK: &str = "Failed to fetch bookings";
const BOOK_FALLBACK: &str = "Failed to book appointment";

/// Appointment slots and bookings.
///
/// Booking outcome flags are tracked separately from fetch errors so a
/// failed slot refresh does not wipe the result of a submitted booking.
pub struct BookingService<G> {
    gateway: G,
    slots: Vec<BookingSlot>,
    bookings: Vec<Booking>,
    is_loading: bool,
    last_error: Option<String>,
    booking_success: bool,
    booking_error: Option<String>,
}

impl<G: BookingGateway> BookingService<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            slots: Vec::new(),
            bookings: Vec::new(),
            is_loading: false,
            last_error: None,
            booking_success: false,
            booking_error: None,
        }
    }

    pub async fn fetch_slots(&mut self) -> Result<&[BookingSlot]> {
        self.is_loading = true;
        self.last_error = None;
        let result = self.gateway.list_slots().await;
        self.is_loading = false;
        match result {
            Ok(slots) => {
                self.slots = slots;
                Ok(&self.slots)
            }
            Err(err) => {
                self.last_error = Some(err.human_message(SLOTS_FALLBACK));
                Err(err.into())
            }
        }
    }

    pub async fn fetch_bookings(&mut self) -> Result<&[Booking]> {
        self.is_loading = true;
        self.last_error = None;
        let result = self.gateway.list_bookings().await;
        self.is_loading = false;
        match result {
            Ok(bookings) => {
                self.bookings = bookings;
                Ok(&self.bookings)
            }
            Err(err) => {
                self.last_error = Some(err.human_message(BOOKINGS_FALLBACK));
                Err(err.into())
            }
        }
    }

    pub async fn book(&mut self, request: &BookingRequest) -> Result<Booking> {
        self.is_loading = true;
        self.booking_error = None;
        self.booking_success = false;
        let result = self.gateway.book(request).await;
        self.is_loading = false;
        match result {
            Ok(booking) => {
                self.booking_success = true;
                Ok(booking)
            }
            Err(err) => {
                self.booking_error = Some(err.human_message(BOOK_FALLBACK));
                Err(err.into())
            }
        }
    }

    pub fn clear_booking_status(&mut self) {
        self.booking_success = false;
        self.booking_error = None;
    }

    pub fn slots(&self) -> &[BookingSlot] {
        &self.slots
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn booking_success(&self) -> bool {
        self.booking_success
    }

    pub fn booking_error(&self) -> Option<&str> {
        self.booking_error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}
