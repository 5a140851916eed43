use crate::conversation::{ChatReply, ConversationTicket, OutboundChat};
use crate::models::{
    BlogDraft, BlogPost, Booking, BookingRequest, BookingSlot, Credentials, LoginPayload,
    PaymentLink, PaymentOrder, PaymentStatus, Product, ProductDraft, Registration,
    RegistrationReceipt, TeamMember, TeamMemberDraft,
};
use shared::api_error::ApiResult;
use std::future::Future;

pub trait AuthGateway {
    fn login(&self, credentials: &Credentials)
        -> impl Future<Output = ApiResult<LoginPayload>> + Send;

    fn register(
        &self,
        registration: &Registration,
    ) -> impl Future<Output = ApiResult<RegistrationReceipt>> + Send;

    fn logout(&self) -> impl Future<Output = ApiResult<()>> + Send;
}

pub trait ChatbotGateway {
    fn start_conversation(
        &self,
        user_id: &str,
    ) -> impl Future<Output = ApiResult<ConversationTicket>> + Send;

    fn send_chat(&self, outbound: &OutboundChat)
        -> impl Future<Output = ApiResult<ChatReply>> + Send;
}

pub trait BlogGateway {
    fn list_posts(&self) -> impl Future<Output = ApiResult<Vec<BlogPost>>> + Send;

    fn fetch_post(&self, id: &str) -> impl Future<Output = ApiResult<BlogPost>> + Send;

    fn create_post(&self, draft: &BlogDraft) -> impl Future<Output = ApiResult<BlogPost>> + Send;

    fn update_post(
        &self,
        id: &str,
        draft: &BlogDraft,
    ) -> impl Future<Output = ApiResult<BlogPost>> + Send;

    fn delete_post(&self, id: &str) -> impl Future<Output = ApiResult<()>> + Send;
}

pub trait CatalogGateway {
    fn list_medications(&self) -> impl Future<Output = ApiResult<Vec<Product>>> + Send;

    fn fetch_medication(&self, id: &str) -> impl Future<Output = ApiResult<Product>> + Send;

    fn create_medication(
        &self,
        draft: &ProductDraft,
    ) -> impl Future<Output = ApiResult<Product>> + Send;

    fn update_medication(
        &self,
        id: &str,
        draft: &ProductDraft,
    ) -> impl Future<Output = ApiResult<Product>> + Send;

    fn delete_medication(&self, id: &str) -> impl Future<Output = ApiResult<()>> + Send;
}

pub trait BookingGateway {
    fn list_slots(&self) -> impl Future<Output = ApiResult<Vec<BookingSlot>>> + Send;

    fn book(&self, request: &BookingRequest) -> impl Future<Output = ApiResult<Booking>> + Send;

    fn list_bookings(&self) -> impl Future<Output = ApiResult<Vec<Booking>>> + Send;
}

pub trait TeamGateway {
    fn list_members(&self) -> impl Future<Output = ApiResult<Vec<TeamMember>>> + Send;

    fn create_member(
        &self,
        draft: &TeamMemberDraft,
    ) -> impl Future<Output = ApiResult<TeamMember>> + Send;

    fn update_member(
        &self,
        id: &str,
        draft: &TeamMemberDraft,
    ) -> impl Future<Output = ApiResult<TeamMember>> + Send;

    fn delete_member(&self, id: &str) -> impl Future<Output = ApiResult<()>> + Send;
}

pub trait PaymentGateway {
    fn create_link(&self, order: &PaymentOrder)
        -> impl Future<Output = ApiResult<PaymentLink>> + Send;

    fn callback(
        &self,
        params: &[(String, String)],
    ) -> impl Future<Output = ApiResult<PaymentStatus>> + Send;
}
