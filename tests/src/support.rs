//! Scripted gateway fakes. Each fake pops pre-loaded results in order and
//! counts calls, so tests can assert both behaviour and traffic.

use domain::conversation::{ChatReply, ConversationTicket, OutboundChat};
use domain::gateway::{
    AuthGateway, BlogGateway, BookingGateway, CatalogGateway, ChatbotGateway, PaymentGateway,
    TeamGateway,
};
use domain::models::{
    BlogDraft, BlogPost, Booking, BookingRequest, BookingSlot, Credentials, LoginPayload,
    PaymentLink, PaymentOrder, PaymentStatus, Product, ProductDraft, Registration,
    RegistrationReceipt, TeamMember, TeamMemberDraft, User,
};
use shared::api_error::{ApiError, ApiResult};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

pub fn status(status: u16, message: Option<&str>) -> ApiError {
    ApiError::Status {
        status,
        message: message.map(str::to_string),
    }
}

pub fn user(id: &str, email: &str, role: Option<&str>) -> User {
    User {
        id: id.to_string(),
        name: String::new(),
        email: email.to_string(),
        role: role.map(str::to_string),
        phone: None,
    }
}

pub fn login_payload(token: &str, role: Option<&str>) -> LoginPayload {
    LoginPayload {
        token: token.to_string(),
        user: user("u1", "user@medvax.test", role),
    }
}

pub fn product(id: &str, name: &str, price: f64, category: Option<&str>) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        price,
        category: category.map(str::to_string),
        image: None,
        description: None,
    }
}

pub fn post(id: &str, title: &str, category: Option<&str>) -> BlogPost {
    BlogPost {
        id: id.to_string(),
        title: title.to_string(),
        category: category.map(str::to_string),
        excerpt: None,
        content: None,
        banner: None,
        date: None,
    }
}

pub fn member(id: &str, name: &str, department: &str) -> TeamMember {
    TeamMember {
        id: id.to_string(),
        name: name.to_string(),
        title: String::new(),
        department: department.to_string(),
        image: None,
    }
}

pub struct Queue<T>(Mutex<VecDeque<T>>);

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self(Mutex::new(VecDeque::new()))
    }
}

impl<T> Queue<T> {
    pub fn push(&self, item: T) {
        self.0.lock().unwrap().push_back(item);
    }

    fn pop(&self) -> Option<T> {
        self.0.lock().unwrap().pop_front()
    }
}

fn unscripted<T>() -> ApiResult<T> {
    Err(ApiError::Network("unscripted call".to_string()))
}

#[derive(Default)]
pub struct ScriptedChatGateway {
    pub starts: Queue<ApiResult<ConversationTicket>>,
    pub chats: Queue<ApiResult<ChatReply>>,
    pub start_calls: AtomicUsize,
    pub chat_calls: AtomicUsize,
    pub sent: Mutex<Vec<OutboundChat>>,
}

impl ScriptedChatGateway {
    pub fn push_start_ok(&self, session_id: &str) {
        self.starts.push(Ok(ConversationTicket {
            session_id: session_id.to_string(),
        }));
    }

    pub fn push_start_err(&self, err: ApiError) {
        self.starts.push(Err(err));
    }

    pub fn push_chat_ok(&self, text: Option<&str>) {
        self.chats.push(Ok(ChatReply {
            text: text.map(str::to_string),
        }));
    }

    pub fn push_chat_err(&self, err: ApiError) {
        self.chats.push(Err(err));
    }

    pub fn start_calls(&self) -> usize {
        self.start_calls.load(Ordering::SeqCst)
    }

    pub fn chat_calls(&self) -> usize {
        self.chat_calls.load(Ordering::SeqCst)
    }
}

impl ChatbotGateway for &ScriptedChatGateway {
    async fn start_conversation(&self, _user_id: &str) -> ApiResult<ConversationTicket> {
        self.start_calls.fetch_add(1, Ordering::SeqCst);
        self.starts.pop().unwrap_or_else(unscripted)
    }

    async fn send_chat(&self, outbound: &OutboundChat) -> ApiResult<ChatReply> {
        self.chat_calls.fetch_add(1, Ordering::SeqCst);
        self.sent.lock().unwrap().push(outbound.clone());
        self.chats.pop().unwrap_or_else(unscripted)
    }
}

#[derive(Default)]
pub struct ScriptedAuthGateway {
    pub logins: Queue<ApiResult<LoginPayload>>,
    pub registers: Queue<ApiResult<RegistrationReceipt>>,
    pub logout_fails: bool,
    pub logout_calls: AtomicUsize,
}

impl ScriptedAuthGateway {
    pub fn logout_calls(&self) -> usize {
        self.logout_calls.load(Ordering::SeqCst)
    }
}

impl AuthGateway for &ScriptedAuthGateway {
    async fn login(&self, _credentials: &Credentials) -> ApiResult<LoginPayload> {
        self.logins.pop().unwrap_or_else(unscripted)
    }

    async fn register(&self, _registration: &Registration) -> ApiResult<RegistrationReceipt> {
        self.registers.pop().unwrap_or_else(unscripted)
    }

    async fn logout(&self) -> ApiResult<()> {
        self.logout_calls.fetch_add(1, Ordering::SeqCst);
        if self.logout_fails {
            Err(ApiError::Network("backend unreachable".to_string()))
        } else {
            Ok(())
        }
    }
}

#[derive(Default)]
pub struct ScriptedCatalogGateway {
    pub lists: Queue<ApiResult<Vec<Product>>>,
    pub singles: Queue<ApiResult<Product>>,
    pub creates: Queue<ApiResult<Product>>,
    pub updates: Queue<ApiResult<Product>>,
    pub deletes: Queue<ApiResult<()>>,
}

impl CatalogGateway for &ScriptedCatalogGateway {
    async fn list_medications(&self) -> ApiResult<Vec<Product>> {
        self.lists.pop().unwrap_or_else(unscripted)
    }

    async fn fetch_medication(&self, _id: &str) -> ApiResult<Product> {
        self.singles.pop().unwrap_or_else(unscripted)
    }

    async fn create_medication(&self, _draft: &ProductDraft) -> ApiResult<Product> {
        self.creates.pop().unwrap_or_else(unscripted)
    }

    async fn update_medication(&self, _id: &str, _draft: &ProductDraft) -> ApiResult<Product> {
        self.updates.pop().unwrap_or_else(unscripted)
    }

    async fn delete_medication(&self, _id: &str) -> ApiResult<()> {
        self.deletes.pop().unwrap_or_else(unscripted)
    }
}

#[derive(Default)]
pub struct ScriptedBlogGateway {
    pub lists: Queue<ApiResult<Vec<BlogPost>>>,
    pub singles: Queue<ApiResult<BlogPost>>,
    pub creates: Queue<ApiResult<BlogPost>>,
    pub updates: Queue<ApiResult<BlogPost>>,
    pub deletes: Queue<ApiResult<()>>,
}

impl BlogGateway for &ScriptedBlogGateway {
    async fn list_posts(&self) -> ApiResult<Vec<BlogPost>> {
        self.lists.pop().unwrap_or_else(unscripted)
    }

    async fn fetch_post(&self, _id: &str) -> ApiResult<BlogPost> {
        self.singles.pop().unwrap_or_else(unscripted)
    }

    async fn create_post(&self, _draft: &BlogDraft) -> ApiResult<BlogPost> {
        self.creates.pop().unwrap_or_else(unscripted)
    }

    async fn update_post(&self, _id: &str, _draft: &BlogDraft) -> ApiResult<BlogPost> {
        self.updates.pop().unwrap_or_else(unscripted)
    }

    async fn delete_post(&self, _id: &str) -> ApiResult<()> {
        self.deletes.pop().unwrap_or_else(unscripted)
    }
}

#[derive(Default)]
pub struct ScriptedTeamGateway {
    pub lists: Queue<ApiResult<Vec<TeamMember>>>,
    pub creates: Queue<ApiResult<TeamMember>>,
    pub updates: Queue<ApiResult<TeamMember>>,
    pub deletes: Queue<ApiResult<()>>,
}

impl TeamGateway for &ScriptedTeamGateway {
    async fn list_members(&self) -> ApiResult<Vec<TeamMember>> {
        self.lists.pop().unwrap_or_else(unscripted)
    }

    async fn create_member(&self, _draft: &TeamMemberDraft) -> ApiResult<TeamMember> {
        self.creates.pop().unwrap_or_else(unscripted)
    }

    async fn update_member(&self, _id: &str, _draft: &TeamMemberDraft) -> ApiResult<TeamMember> {
        self.updates.pop().unwrap_or_else(unscripted)
    }

    async fn delete_member(&self, _id: &str) -> ApiResult<()> {
        self.deletes.pop().unwrap_or_else(unscripted)
    }
}

#[derive(Default)]
pub struct ScriptedBookingGateway {
    pub slot_lists: Queue<ApiResult<Vec<BookingSlot>>>,
    pub bookings: Queue<ApiResult<Booking>>,
    pub booking_lists: Queue<ApiResult<Vec<Booking>>>,
}

impl BookingGateway for &ScriptedBookingGateway {
    async fn list_slots(&self) -> ApiResult<Vec<BookingSlot>> {
        self.slot_lists.pop().unwrap_or_else(unscripted)
    }

    async fn book(&self, _request: &BookingRequest) -> ApiResult<Booking> {
        self.bookings.pop().unwrap_or_else(unscripted)
    }

    async fn list_bookings(&self) -> ApiResult<Vec<Booking>> {
        self.booking_lists.pop().unwrap_or_else(unscripted)
    }
}

#[derive(Default)]
pub struct ScriptedPaymentGateway {
    pub links: Queue<ApiResult<PaymentLink>>,
    pub callbacks: Queue<ApiResult<PaymentStatus>>,
}

impl PaymentGateway for &ScriptedPaymentGateway {
    async fn create_link(&self, _order: &PaymentOrder) -> ApiResult<PaymentLink> {
        self.links.pop().unwrap_or_else(unscripted)
    }

    async fn callback(&self, _params: &[(String, String)]) -> ApiResult<PaymentStatus> {
        self.callbacks.pop().unwrap_or_else(unscripted)
    }
}
