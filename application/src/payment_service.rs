use domain::gateway::PaymentGateway;
use domain::models::{PaymentLink, PaymentOrder, PaymentStatus};
use shared::types::Result;

const LINK_FALLBACK: &str = "Failed to create payment link";
const CALLBACK_FALLBACK: &str = "Failed to process payment";

/// Payment-link creation and provider callback handling.
pub struct PaymentService<G> {
    gateway: G,
    payment_link: Option<PaymentLink>,
    payment_status: Option<PaymentStatus>,
    is_loading: bool,
    last_error: Option<String>,
}

impl<G: PaymentGateway> PaymentService<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            payment_link: None,
            payment_status: None,
            is_loading: false,
            last_error: None,
        }
    }

    pub async fn create_link(&mut self, order: &PaymentOrder) -> Result<PaymentLink> {
        self.is_loading = true;
        self.last_error = None;
        self.payment_status = None;
        let result = self.gateway.create_link(order).await;
        self.is_loading = false;
        match result {
            Ok(link) => {
                self.payment_link = Some(link.clone());
                Ok(link)
            }
            Err(err) => {
                self.last_error = Some(err.human_message(LINK_FALLBACK));
                Err(err.into())
            }
        }
    }

    pub async fn process_callback(&mut self, params: &[(String, String)]) -> Result<PaymentStatus> {
        self.is_loading = true;
        self.last_error = None;
        let result = self.gateway.callback(params).await;
        self.is_loading = false;
        match result {
            Ok(status) => {
                self.payment_status = Some(status.clone());
                Ok(status)
            }
            Err(err) => {
                self.last_error = Some(err.human_message(CALLBACK_FALLBACK));
                Err(err.into())
            }
        }
    }

    pub fn clear_payment(&mut self) {
        self.payment_link = None;
        self.payment_status = None;
        self.last_error = None;
    }

    pub fn clear_error(&mut self) {
        self.last_error = None;
    }

    pub fn payment_link(&self) -> Option<&PaymentLink> {
        self.payment_link.as_ref()
    }

    pub fn payment_status(&self) -> Option<&PaymentStatus> {
        self.payment_status.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}
