use crate::api_client::ApiClient;
use domain::conversation::{ChatReply, ConversationTicket, OutboundChat};
use domain::gateway::{
    AuthGateway, BlogGateway, BookingGateway, CatalogGateway, ChatbotGateway, PaymentGateway,
    TeamGateway,
};
use domain::models::{
    BlogDraft, BlogPost, Booking, BookingRequest, BookingSlot, Credentials, LoginPayload,
    PaymentLink, PaymentOrder, PaymentStatus, Product, ProductDraft, Registration,
    RegistrationReceipt, TeamMember, TeamMemberDraft,
};
use reqwest::multipart::{Form, Part};
use serde::Serialize;
use shared::api_error::{ApiError, ApiResult};
use std::path::Path;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StartConversationBody<'a> {
    user_id: &'a str,
}

/// Build the multipart form for a file-bearing blog write. Text fields
/// mirror the JSON payload; the banner travels as a file part.
async fn blog_form(draft: &BlogDraft, banner: &Path) -> ApiResult<Form> {
    let bytes = tokio::fs::read(banner)
        .await
        .map_err(|err| ApiError::Payload(format!("read {}: {err}", banner.display())))?;
    let file_name = banner
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "banner".to_string());

    let mut form = Form::new()
        .text("title", draft.title.clone())
        .part("banner", Part::bytes(bytes).file_name(file_name));
    if let Some(category) = &draft.category {
        form = form.text("category", category.clone());
    }
    if let Some(excerpt) = &draft.excerpt {
        form = form.text("excerpt", excerpt.clone());
    }
    if let Some(content) = &draft.content {
        form = form.text("content", content.clone());
    }
    Ok(form)
}

impl AuthGateway for ApiClient {
    async fn login(&self, credentials: &Credentials) -> ApiResult<LoginPayload> {
        self.post_json("/api/auth/login", credentials).await
    }

    async fn register(&self, registration: &Registration) -> ApiResult<RegistrationReceipt> {
        self.post_json("/api/auth/register", registration).await
    }

    async fn logout(&self) -> ApiResult<()> {
        self.get_unit("/api/auth/logout").await
    }
}

impl ChatbotGateway for ApiClient {
    async fn start_conversation(&self, user_id: &str) -> ApiResult<ConversationTicket> {
        self.post_json(
            "/api/chatbot/start-conversation",
            &StartConversationBody { user_id },
        )
        .await
    }

    async fn send_chat(&self, outbound: &OutboundChat) -> ApiResult<ChatReply> {
        self.post_json("/api/chatbot/chat", outbound).await
    }
}

impl BlogGateway for ApiClient {
    async fn list_posts(&self) -> ApiResult<Vec<BlogPost>> {
        self.get_json("/api/blog").await
    }

    async fn fetch_post(&self, id: &str) -> ApiResult<BlogPost> {
        self.get_json(&format!("/api/blog/{id}")).await
    }

    async fn create_post(&self, draft: &BlogDraft) -> ApiResult<BlogPost> {
        match &draft.banner {
            Some(banner) => {
                let form = blog_form(draft, banner).await?;
                self.post_multipart("/api/blog", form).await
            }
            None => self.post_json("/api/blog", draft).await,
        }
    }

    async fn update_post(&self, id: &str, draft: &BlogDraft) -> ApiResult<BlogPost> {
        let path = format!("/api/blog/{id}");
        match &draft.banner {
            Some(banner) => {
                let form = blog_form(draft, banner).await?;
                self.put_multipart(&path, form).await
            }
            None => self.put_json(&path, draft).await,
        }
    }

    async fn delete_post(&self, id: &str) -> ApiResult<()> {
        self.delete(&format!("/api/blog/{id}")).await
    }
}

impl CatalogGateway for ApiClient {
    async fn list_medications(&self) -> ApiResult<Vec<Product>> {
        self.get_json("/api/medications").await
    }

    async fn fetch_medication(&self, id: &str) -> ApiResult<Product> {
        self.get_json(&format!("/api/medications/{id}")).await
    }

    async fn create_medication(&self, draft: &ProductDraft) -> ApiResult<Product> {
        self.post_json("/api/medications", draft).await
    }

    async fn update_medication(&self, id: &str, draft: &ProductDraft) -> ApiResult<Product> {
        self.put_json(&format!("/api/medications/{id}"), draft).await
    }

    async fn delete_medication(&self, id: &str) -> ApiResult<()> {
        self.delete(&format!("/api/medications/{id}")).await
    }
}

impl BookingGateway for ApiClient {
    async fn list_slots(&self) -> ApiResult<Vec<BookingSlot>> {
        self.get_json("/api/bookings/slots").await
    }

    async fn book(&self, request: &BookingRequest) -> ApiResult<Booking> {
        self.post_json("/api/bookings/book", request).await
    }

    async fn list_bookings(&self) -> ApiResult<Vec<Booking>> {
        self.get_json("/api/bookings").await
    }
}

impl TeamGateway for ApiClient {
    async fn list_members(&self) -> ApiResult<Vec<TeamMember>> {
        self.get_json("/api/team-members").await
    }

    async fn create_member(&self, draft: &TeamMemberDraft) -> ApiResult<TeamMember> {
        self.post_json("/api/team-members", draft).await
    }

    async fn update_member(&self, id: &str, draft: &TeamMemberDraft) -> ApiResult<TeamMember> {
        self.put_json(&format!("/api/team-members/{id}"), draft).await
    }

    async fn delete_member(&self, id: &str) -> ApiResult<()> {
        self.delete(&format!("/api/team-members/{id}")).await
    }
}

impl PaymentGateway for ApiClient {
    async fn create_link(&self, order: &PaymentOrder) -> ApiResult<PaymentLink> {
        self.post_json("/api/payments/create-link", order).await
    }

    async fn callback(&self, params: &[(String, String)]) -> ApiResult<PaymentStatus> {
        self.get_query("/api/payments/callback", params).await
    }
}
