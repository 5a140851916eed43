use application::auth_service::{AuthService, RegisterOutcome};
use application::blog_service::BlogService;
use application::booking_service::BookingService;
use application::cart_service::CartService;
use application::catalog_service::CatalogService;
use application::chatbot_service::ChatbotService;
use application::payment_service::PaymentService;
use application::team_service::TeamService;
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::{Input, Password, Select};
use domain::conversation::Speaker;
use domain::models::{
    BlogDraft, BookingRequest, Credentials, PaymentOrder, ProductDraft, Registration,
    TeamMemberDraft,
};
use domain::routes::{self, GuardDecision};
use domain::session::SessionContext;
use infrastructure::api_client::ApiClient;
use infrastructure::config::Config;
use infrastructure::local_store::FileStore;
use shared::api_error::ApiError;
use shared::types::Result;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "medvax", about = "Command-line client for the MedVax healthcare platform")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Browse the site screens interactively
    Portal,
    /// Log in with email and password
    Login,
    /// Create an account and log in
    Register,
    /// End the current session
    Logout,
    /// Show the current session
    Whoami,
    /// Talk to AdaAI, the support assistant
    Chat,
    /// Medications catalog
    Products {
        #[command(subcommand)]
        action: ProductsAction,
    },
    /// Blog posts
    Blog {
        #[command(subcommand)]
        action: BlogAction,
    },
    /// Team directory
    Team {
        #[command(subcommand)]
        action: TeamAction,
    },
    /// Appointment slots and bookings
    Bookings {
        #[command(subcommand)]
        action: BookingsAction,
    },
    /// Payment links and provider callbacks
    Pay {
        #[command(subcommand)]
        action: PayAction,
    },
}

#[derive(Subcommand)]
pub enum ProductsAction {
    List,
    Show {
        id: String,
    },
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        price: f64,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        image: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    Update {
        id: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        price: f64,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        image: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    Remove {
        id: String,
    },
}

#[derive(Subcommand)]
pub enum BlogAction {
    List,
    Show {
        id: String,
    },
    Publish {
        #[arg(long)]
        title: String,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        excerpt: Option<String>,
        #[arg(long)]
        content: Option<String>,
        /// Local image to upload as the post banner
        #[arg(long)]
        banner: Option<PathBuf>,
    },
    Update {
        id: String,
        #[arg(long)]
        title: String,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        excerpt: Option<String>,
        #[arg(long)]
        content: Option<String>,
        #[arg(long)]
        banner: Option<PathBuf>,
    },
    Remove {
        id: String,
    },
}

#[derive(Subcommand)]
pub enum TeamAction {
    List,
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        title: String,
        #[arg(long)]
        department: String,
        #[arg(long)]
        image: Option<String>,
    },
    Update {
        id: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        title: String,
        #[arg(long)]
        department: String,
        #[arg(long)]
        image: Option<String>,
    },
    Remove {
        id: String,
    },
}

#[derive(Subcommand)]
pub enum BookingsAction {
    /// Available appointment slots
    Slots,
    Book {
        #[arg(long)]
        slot_id: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: String,
    },
    /// Existing bookings (requires a session)
    List,
}

#[derive(Subcommand)]
pub enum PayAction {
    CreateLink {
        #[arg(long)]
        amount: f64,
        #[arg(long)]
        currency: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Forward provider callback parameters, given as key=value pairs
    Callback {
        params: Vec<String>,
    },
}

pub struct CliApp {
    auth: AuthService<ApiClient, FileStore>,
    chatbot: ChatbotService<ApiClient, FileStore>,
    catalog: CatalogService<ApiClient>,
    blog: BlogService<ApiClient>,
    team: TeamService<ApiClient>,
    bookings: BookingService<ApiClient>,
    payments: PaymentService<ApiClient>,
    cart: CartService,
}

impl CliApp {
    pub fn new() -> Result<Self> {
        let config = Config::load();
        let session = SessionContext::new();
        let client = ApiClient::new(&config, session.clone())?;
        let vault = FileStore::new(&config.data_dir)?;

        let mut auth = AuthService::new(client.clone(), vault.clone(), session);
        auth.initialize();

        Ok(Self {
            auth,
            chatbot: ChatbotService::new(client.clone(), vault),
            catalog: CatalogService::new(client.clone()),
            blog: BlogService::new(client.clone()),
            team: TeamService::new(client.clone()),
            bookings: BookingService::new(client.clone()),
            payments: PaymentService::new(client),
            cart: CartService::new(),
        })
    }

    pub async fn run(&mut self, cli: Cli) -> Result<()> {
        match cli.command {
            Command::Portal => self.handle_portal().await,
            Command::Login => self.prompt_login().await,
            Command::Register => self.prompt_register().await.map(|_| ()),
            Command::Logout => {
                self.auth.logout().await;
                println!("{}", "Logged out.".green());
                Ok(())
            }
            Command::Whoami => {
                self.handle_whoami();
                Ok(())
            }
            Command::Chat => self.handle_chat().await,
            Command::Products { action } => self.handle_products(action).await,
            Command::Blog { action } => self.handle_blog(action).await,
            Command::Team { action } => self.handle_team(action).await,
            Command::Bookings { action } => self.handle_bookings(action).await,
            Command::Pay { action } => self.handle_pay(action).await,
        }
    }

    /// Run the session-expiry cleanup when a call came back 401, then hand
    /// the error back for normal reporting.
    fn surface<T>(&mut self, result: Result<T>) -> Result<T> {
        if let Err(err) = &result {
            if matches!(err.downcast_ref::<ApiError>(), Some(ApiError::Unauthorized)) {
                self.auth.handle_unauthorized();
                println!(
                    "{}",
                    "Your session has expired. Please log in again.".yellow()
                );
            }
        }
        result
    }

    fn handle_whoami(&self) {
        match self.auth.user() {
            Some(user) => {
                let role = user.role.as_deref().unwrap_or("user");
                println!("{} {} ({role})", "Signed in as".green(), user.email.bold());
            }
            None => println!("{}", "Not signed in.".yellow()),
        }
    }

    async fn prompt_login(&mut self) -> Result<()> {
        let email: String = Input::new().with_prompt("Email").interact_text()?;
        let password = Password::new().with_prompt("Password").interact()?;
        let credentials = Credentials { email, password };

        let result = self.auth.login(&credentials).await;
        match self.surface(result) {
            Ok(payload) => {
                println!(
                    "{} {}",
                    "Welcome back,".green(),
                    display_name(&payload.user.name, &payload.user.email).bold()
                );
                Ok(())
            }
            Err(err) => {
                let message = self.auth.last_error().unwrap_or("Login failed").to_string();
                println!("{} {message}", "Login failed:".red());
                Err(err)
            }
        }
    }

    /// Returns whether the user ended up with a live session.
    async fn prompt_register(&mut self) -> Result<bool> {
        let name: String = Input::new().with_prompt("Full name").interact_text()?;
        let email: String = Input::new().with_prompt("Email").interact_text()?;
        let phone: String = Input::new()
            .with_prompt("Phone (optional)")
            .allow_empty(true)
            .interact_text()?;
        let password = Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords do not match")
            .interact()?;

        let registration = Registration {
            name,
            email,
            password,
            phone: if phone.trim().is_empty() {
                None
            } else {
                Some(phone)
            },
        };

        let result = self.auth.register(&registration).await;
        match self.surface(result) {
            Ok(RegisterOutcome::Complete { login, .. }) => {
                println!(
                    "{} {}",
                    "Account created. Welcome,".green(),
                    display_name(&login.user.name, &login.user.email).bold()
                );
                Ok(true)
            }
            Ok(RegisterOutcome::AccountCreated { login_error, .. }) => {
                println!(
                    "{}",
                    "Account created, but signing you in failed - please log in manually."
                        .yellow()
                );
                tracing::debug!("auto-login failure: {login_error}");
                Ok(false)
            }
            Err(err) => {
                let message = self
                    .auth
                    .last_error()
                    .unwrap_or("Registration failed")
                    .to_string();
                println!("{} {message}", "Registration failed:".red());
                Err(err)
            }
        }
    }

    // ----- portal ---------------------------------------------------------

    async fn handle_portal(&mut self) -> Result<()> {
        println!(
            "{}",
            "MedVax Health - accessible, tech-enabled healthcare.".cyan().bold()
        );
        let mut current = routes::HOME.to_string();
        loop {
            current = self.navigate(&current);
            match self.render_screen(&current).await? {
                Some(next) => current = next,
                None => break,
            }
        }
        Ok(())
    }

    /// Apply the route guard, following redirects until a screen is allowed.
    fn navigate(&self, target: &str) -> String {
        let mut path = target.to_string();
        loop {
            let meta = routes::find_route(&path)
                .map(|route| route.meta)
                .unwrap_or_default();
            match routes::resolve_navigation(&path, meta, &self.auth.claims()) {
                GuardDecision::Allow => return path,
                GuardDecision::Redirect(next) => {
                    tracing::debug!("navigation to {path} redirected to {next}");
                    path = next.to_string();
                }
            }
        }
    }

    /// Render one screen; returns the next path, or None to leave the portal.
    async fn render_screen(&mut self, path: &str) -> Result<Option<String>> {
        match path {
            routes::HOME => self.screen_home().await,
            routes::LOGIN => {
                if self.prompt_login().await.is_err() {
                    self.auth.clear_error();
                    return Ok(Some(routes::HOME.to_string()));
                }
                // A successful login is bounced to the role dashboard by the
                // guard on the way back in.
                Ok(Some(routes::LOGIN.to_string()))
            }
            routes::REGISTER => {
                match self.prompt_register().await {
                    // Signed in; the guard bounces this to the dashboard.
                    Ok(true) => Ok(Some(routes::REGISTER.to_string())),
                    Ok(false) => Ok(Some(routes::LOGIN.to_string())),
                    Err(_) => {
                        self.auth.clear_error();
                        Ok(Some(routes::HOME.to_string()))
                    }
                }
            }
            "/about" => {
                self.screen_about().await;
                Ok(Some(routes::HOME.to_string()))
            }
            "/innovation" => {
                println!(
                    "\n{}\nAI-assisted medication access, delivery logistics and\ntelehealth tooling for underserved communities.\n",
                    "Innovation".bold()
                );
                Ok(Some(routes::HOME.to_string()))
            }
            "/e-pharmacy" => self.screen_pharmacy().await,
            "/blog" => {
                self.screen_blog().await;
                Ok(Some(routes::HOME.to_string()))
            }
            "/bookings" => {
                self.screen_bookings().await;
                Ok(Some(routes::HOME.to_string()))
            }
            "/contact-us" => {
                println!(
                    "\n{}\nhello@medvaxhealth.com - or ask AdaAI from the home screen.\n",
                    "Contact us".bold()
                );
                Ok(Some(routes::HOME.to_string()))
            }
            "/privacy" => {
                println!(
                    "\n{}\nYour health data stays between you and your providers.\n",
                    "Privacy".bold()
                );
                Ok(Some(routes::HOME.to_string()))
            }
            routes::ADMIN_DASHBOARD => self.screen_admin().await,
            routes::MANAGER_DASHBOARD => self.screen_manager().await,
            _ => {
                println!("{} {path}", "No such page:".red());
                Ok(Some(routes::HOME.to_string()))
            }
        }
    }

    async fn screen_home(&mut self) -> Result<Option<String>> {
        let session_label = match self.auth.user() {
            Some(user) => format!("signed in as {}", user.email),
            None => "browsing anonymously".to_string(),
        };
        println!("\n{} ({session_label})", "Home".bold());

        let mut items: Vec<(&str, Option<&str>)> = vec![
            ("About", Some("/about")),
            ("Innovation", Some("/innovation")),
            ("E-Pharmacy", Some("/e-pharmacy")),
            ("Blog", Some("/blog")),
            ("Bookings", Some("/bookings")),
            ("Contact Us", Some("/contact-us")),
            ("Privacy", Some("/privacy")),
            ("Chat with AdaAI", None),
            ("Admin Dashboard", Some(routes::ADMIN_DASHBOARD)),
            ("Manager Dashboard", Some(routes::MANAGER_DASHBOARD)),
        ];
        if self.auth.is_authenticated() {
            items.push(("Log out", None));
        } else {
            items.push(("Log in", Some(routes::LOGIN)));
            items.push(("Register", Some(routes::REGISTER)));
        }
        items.push(("Exit", None));

        let labels: Vec<&str> = items.iter().map(|(label, _)| *label).collect();
        let choice = Select::new()
            .with_prompt("Where to?")
            .items(&labels)
            .default(0)
            .interact()?;

        match items[choice] {
            ("Chat with AdaAI", _) => {
                self.handle_chat().await?;
                Ok(Some(routes::HOME.to_string()))
            }
            ("Log out", _) => {
                self.auth.logout().await;
                println!("{}", "Logged out.".green());
                Ok(Some(routes::HOME.to_string()))
            }
            ("Exit", _) => Ok(None),
            (_, Some(path)) => Ok(Some(path.to_string())),
            (_, None) => Ok(Some(routes::HOME.to_string())),
        }
    }

    async fn screen_about(&mut self) {
        println!("\n{}", "About MedVax Health".bold());
        let fetched = self.team.fetch_all().await.map(|_| ());
        if let Err(err) = self.surface(fetched) {
            println!("{} {err}", "Could not load the team:".red());
            return;
        }
        for department in self.team.departments() {
            println!("\n  {}", department.bold());
            for member in self.team.by_department(&department) {
                println!("    {} - {}", member.name, member.title);
            }
        }
        println!();
    }

    async fn screen_pharmacy(&mut self) -> Result<Option<String>> {
        let fetched = self.catalog.fetch_all().await.map(|_| ());
        if let Err(err) = self.surface(fetched) {
            println!("{} {err}", "Could not load the catalog:".red());
            return Ok(Some(routes::HOME.to_string()));
        }

        loop {
            println!(
                "\n{} ({} items, cart total {:.2})",
                "E-Pharmacy".bold(),
                self.catalog.count(),
                self.cart.total_price()
            );
            let actions = ["Browse medications", "View cart", "Checkout", "Back"];
            let choice = Select::new().items(&actions).default(0).interact()?;
            match choice {
                0 => {
                    if self.catalog.products().is_empty() {
                        println!("{}", "The catalog is empty.".yellow());
                        continue;
                    }
                    let labels: Vec<String> = self
                        .catalog
                        .products()
                        .iter()
                        .map(|product| {
                            format!(
                                "{} - {:.2} ({})",
                                product.name,
                                product.price,
                                product.category.as_deref().unwrap_or("General")
                            )
                        })
                        .collect();
                    let picked = Select::new()
                        .with_prompt("Add to cart")
                        .items(&labels)
                        .default(0)
                        .interact()?;
                    let quantity: u32 = Input::new()
                        .with_prompt("Quantity")
                        .default(1)
                        .interact_text()?;
                    let product = self.catalog.products()[picked].clone();
                    self.cart.add(product, quantity);
                }
                1 => {
                    if self.cart.is_empty() {
                        println!("{}", "Your cart is empty.".yellow());
                    }
                    for item in self.cart.items() {
                        println!(
                            "  {} x{} - {:.2}",
                            item.product.name,
                            item.quantity,
                            item.product.price * f64::from(item.quantity)
                        );
                    }
                }
                2 => {
                    if self.cart.is_empty() {
                        println!("{}", "Nothing to pay for yet.".yellow());
                        continue;
                    }
                    let email: String = Input::new()
                        .with_prompt("Email for the payment link")
                        .interact_text()?;
                    let order = PaymentOrder {
                        amount: self.cart.total_price(),
                        currency: None,
                        email: Some(email),
                        name: None,
                        description: Some("MedVax e-pharmacy order".to_string()),
                    };
                    let result = self.payments.create_link(&order).await;
                    match self.surface(result) {
                        Ok(link) => {
                            match link.url {
                                Some(url) => println!("{} {url}", "Pay here:".green()),
                                None => println!(
                                    "{}",
                                    "Payment link created; check your email.".green()
                                ),
                            }
                            self.cart.clear();
                        }
                        Err(_) => {
                            let message = self
                                .payments
                                .last_error()
                                .unwrap_or("Failed to create payment link");
                            println!("{} {message}", "Checkout failed:".red());
                        }
                    }
                }
                _ => return Ok(Some(routes::HOME.to_string())),
            }
        }
    }

    async fn screen_blog(&mut self) {
        let fetched = self.blog.fetch_all().await.map(|_| ());
        if let Err(err) = self.surface(fetched) {
            println!("{} {err}", "Could not load the blog:".red());
            return;
        }
        println!("\n{}", "Blog".bold());
        for post in self.blog.posts() {
            println!(
                "  [{}] {} - {}",
                post.id,
                post.title.bold(),
                post.category.as_deref().unwrap_or("Uncategorised")
            );
            if let Some(excerpt) = &post.excerpt {
                println!("      {}", excerpt.dimmed());
            }
        }
        println!();
    }

    async fn screen_bookings(&mut self) {
        let fetched = self.bookings.fetch_slots().await.map(|_| ());
        if let Err(err) = self.surface(fetched) {
            println!("{} {err}", "Could not load slots:".red());
            return;
        }
        let open: Vec<_> = self
            .bookings
            .slots()
            .iter()
            .filter(|slot| slot.available.unwrap_or(true))
            .cloned()
            .collect();
        if open.is_empty() {
            println!("{}", "No open appointment slots right now.".yellow());
            return;
        }
        let labels: Vec<String> = open
            .iter()
            .map(|slot| {
                format!(
                    "{} {}",
                    slot.date.as_deref().unwrap_or("(date tba)"),
                    slot.time.as_deref().unwrap_or("")
                )
            })
            .collect();
        let Ok(picked) = Select::new()
            .with_prompt("Pick a slot")
            .items(&labels)
            .default(0)
            .interact()
        else {
            return;
        };

        let Ok(name) = Input::<String>::new().with_prompt("Your name").interact_text() else {
            return;
        };
        let Ok(email) = Input::<String>::new().with_prompt("Email").interact_text() else {
            return;
        };
        let Ok(phone) = Input::<String>::new().with_prompt("Phone").interact_text() else {
            return;
        };

        let request = BookingRequest {
            slot_id: open[picked].id.clone(),
            name,
            email,
            phone,
        };
        let result = self.bookings.book(&request).await;
        match self.surface(result) {
            Ok(_) => println!("{}", "Appointment booked. See you soon!".green()),
            Err(_) => {
                let message = self
                    .bookings
                    .booking_error()
                    .unwrap_or("Failed to book appointment");
                println!("{} {message}", "Booking failed:".red());
            }
        }
    }

    async fn screen_admin(&mut self) -> Result<Option<String>> {
        println!("\n{}", "Admin Dashboard".bold());
        let actions = [
            "Catalog: list",
            "Catalog: add medication",
            "Catalog: remove medication",
            "Blog: publish post",
            "Blog: remove post",
            "Team: add member",
            "Team: remove member",
            "Bookings: view",
            "Back",
        ];
        let choice = Select::new().items(&actions).default(0).interact()?;
        match choice {
            0 => self.handle_products(ProductsAction::List).await?,
            1 => {
                let name: String = Input::new().with_prompt("Name").interact_text()?;
                let price: f64 = Input::new().with_prompt("Price").interact_text()?;
                let category: String = Input::new()
                    .with_prompt("Category (optional)")
                    .allow_empty(true)
                    .interact_text()?;
                self.handle_products(ProductsAction::Add {
                    name,
                    price,
                    category: Some(category).filter(|c| !c.trim().is_empty()),
                    image: None,
                    description: None,
                })
                .await?;
            }
            2 => {
                let id: String = Input::new().with_prompt("Medication id").interact_text()?;
                self.handle_products(ProductsAction::Remove { id }).await?;
            }
            3 => {
                let title: String = Input::new().with_prompt("Title").interact_text()?;
                let content: String = Input::new().with_prompt("Content").interact_text()?;
                self.handle_blog(BlogAction::Publish {
                    title,
                    category: None,
                    excerpt: None,
                    content: Some(content),
                    banner: None,
                })
                .await?;
            }
            4 => {
                let id: String = Input::new().with_prompt("Post id").interact_text()?;
                self.handle_blog(BlogAction::Remove { id }).await?;
            }
            5 => {
                let name: String = Input::new().with_prompt("Name").interact_text()?;
                let title: String = Input::new().with_prompt("Title").interact_text()?;
                let department: String = Input::new().with_prompt("Department").interact_text()?;
                self.handle_team(TeamAction::Add {
                    name,
                    title,
                    department,
                    image: None,
                })
                .await?;
            }
            6 => {
                let id: String = Input::new().with_prompt("Member id").interact_text()?;
                self.handle_team(TeamAction::Remove { id }).await?;
            }
            7 => self.handle_bookings(BookingsAction::List).await?,
            _ => return Ok(Some(routes::HOME.to_string())),
        }
        Ok(Some(routes::ADMIN_DASHBOARD.to_string()))
    }

    async fn screen_manager(&mut self) -> Result<Option<String>> {
        println!("\n{}", "Manager Dashboard".bold());
        let actions = ["Bookings: view", "Team: list", "Back"];
        let choice = Select::new().items(&actions).default(0).interact()?;
        match choice {
            0 => self.handle_bookings(BookingsAction::List).await?,
            1 => self.handle_team(TeamAction::List).await?,
            _ => return Ok(Some(routes::HOME.to_string())),
        }
        Ok(Some(routes::MANAGER_DASHBOARD.to_string()))
    }

    // ----- chat -----------------------------------------------------------

    async fn handle_chat(&mut self) -> Result<()> {
        println!(
            "{}",
            "AdaAI support chat - /quit to leave, /retry to reconnect, /reset to start over."
                .dimmed()
        );
        let mut seen = self.chatbot.messages().len();
        self.chatbot.open_chat().await;
        seen = self.print_new_bot_messages(seen);

        loop {
            let line: String = Input::new()
                .with_prompt("you")
                .allow_empty(true)
                .interact_text()?;
            match line.trim() {
                "/quit" => break,
                "/reset" => {
                    self.chatbot.reset_session();
                    seen = 0;
                    println!("{}", "Conversation reset.".dimmed());
                }
                "/retry" => {
                    self.chatbot.retry_connection().await;
                    seen = self.print_new_bot_messages(0);
                }
                _ => {
                    self.chatbot.send_message(&line).await;
                    seen = self.print_new_bot_messages(seen);
                }
            }
        }
        self.chatbot.close_chat();
        Ok(())
    }

    fn print_new_bot_messages(&self, seen: usize) -> usize {
        for message in &self.chatbot.messages()[seen..] {
            if message.speaker == Speaker::Bot {
                println!("{} {}", "AdaAI:".cyan().bold(), message.text);
            }
        }
        self.chatbot.messages().len()
    }

    // ----- resource subcommands -------------------------------------------

    async fn handle_products(&mut self, action: ProductsAction) -> Result<()> {
        match action {
            ProductsAction::List => {
                let fetched = self.catalog.fetch_all().await.map(|_| ());
                self.surface(fetched)?;
                for product in self.catalog.products() {
                    println!(
                        "[{}] {} - {:.2} ({})",
                        product.id,
                        product.name.bold(),
                        product.price,
                        product.category.as_deref().unwrap_or("General")
                    );
                }
            }
            ProductsAction::Show { id } => {
                let result = self.catalog.fetch_by_id(&id).await;
                let product = self.surface(result)?;
                println!("{} - {:.2}", product.name.bold(), product.price);
                if let Some(description) = &product.description {
                    println!("{description}");
                }
            }
            ProductsAction::Add {
                name,
                price,
                category,
                image,
                description,
            } => {
                let draft = ProductDraft {
                    name,
                    price,
                    category,
                    image,
                    description,
                };
                let result = self.catalog.create(&draft).await;
                let product = self.surface(result)?;
                println!("{} {}", "Added".green(), product.name.bold());
            }
            ProductsAction::Update {
                id,
                name,
                price,
                category,
                image,
                description,
            } => {
                let draft = ProductDraft {
                    name,
                    price,
                    category,
                    image,
                    description,
                };
                let result = self.catalog.update(&id, &draft).await;
                let product = self.surface(result)?;
                println!("{} {}", "Updated".green(), product.name.bold());
            }
            ProductsAction::Remove { id } => {
                let result = self.catalog.remove(&id).await;
                self.surface(result)?;
                println!("{} {id}", "Removed".green());
            }
        }
        Ok(())
    }

    async fn handle_blog(&mut self, action: BlogAction) -> Result<()> {
        match action {
            BlogAction::List => {
                let fetched = self.blog.fetch_all().await.map(|_| ());
                self.surface(fetched)?;
                for post in self.blog.posts() {
                    println!(
                        "[{}] {} - {}",
                        post.id,
                        post.title.bold(),
                        post.date.as_deref().unwrap_or("")
                    );
                }
            }
            BlogAction::Show { id } => {
                let result = self.blog.fetch_by_id(&id).await;
                let post = self.surface(result)?;
                println!("{}", post.title.bold());
                if let Some(content) = &post.content {
                    println!("\n{content}");
                }
            }
            BlogAction::Publish {
                title,
                category,
                excerpt,
                content,
                banner,
            } => {
                let draft = BlogDraft {
                    title,
                    category,
                    excerpt,
                    content,
                    banner,
                };
                let result = self.blog.publish(&draft).await;
                let post = self.surface(result)?;
                println!("{} {}", "Published".green(), post.title.bold());
            }
            BlogAction::Update {
                id,
                title,
                category,
                excerpt,
                content,
                banner,
            } => {
                let draft = BlogDraft {
                    title,
                    category,
                    excerpt,
                    content,
                    banner,
                };
                let result = self.blog.update(&id, &draft).await;
                let post = self.surface(result)?;
                println!("{} {}", "Updated".green(), post.title.bold());
            }
            BlogAction::Remove { id } => {
                let result = self.blog.remove(&id).await;
                self.surface(result)?;
                println!("{} {id}", "Removed".green());
            }
        }
        Ok(())
    }

    async fn handle_team(&mut self, action: TeamAction) -> Result<()> {
        match action {
            TeamAction::List => {
                let fetched = self.team.fetch_all().await.map(|_| ());
                self.surface(fetched)?;
                for member in self.team.members() {
                    println!(
                        "[{}] {} - {} ({})",
                        member.id,
                        member.name.bold(),
                        member.title,
                        member.department
                    );
                }
            }
            TeamAction::Add {
                name,
                title,
                department,
                image,
            } => {
                let draft = TeamMemberDraft {
                    name,
                    title,
                    department,
                    image,
                };
                let result = self.team.add(&draft).await;
                let member = self.surface(result)?;
                println!("{} {}", "Added".green(), member.name.bold());
            }
            TeamAction::Update {
                id,
                name,
                title,
                department,
                image,
            } => {
                let draft = TeamMemberDraft {
                    name,
                    title,
                    department,
                    image,
                };
                let result = self.team.update(&id, &draft).await;
                let member = self.surface(result)?;
                println!("{} {}", "Updated".green(), member.name.bold());
            }
            TeamAction::Remove { id } => {
                let result = self.team.remove(&id).await;
                self.surface(result)?;
                println!("{} {id}", "Removed".green());
            }
        }
        Ok(())
    }

    async fn handle_bookings(&mut self, action: BookingsAction) -> Result<()> {
        match action {
            BookingsAction::Slots => {
                let fetched = self.bookings.fetch_slots().await.map(|_| ());
                self.surface(fetched)?;
                for slot in self.bookings.slots() {
                    println!(
                        "[{}] {} {} {}",
                        slot.id,
                        slot.date.as_deref().unwrap_or("(date tba)"),
                        slot.time.as_deref().unwrap_or(""),
                        if slot.available.unwrap_or(true) {
                            "open".green()
                        } else {
                            "taken".red()
                        }
                    );
                }
            }
            BookingsAction::Book {
                slot_id,
                name,
                email,
                phone,
            } => {
                let request = BookingRequest {
                    slot_id,
                    name,
                    email,
                    phone,
                };
                let result = self.bookings.book(&request).await;
                self.surface(result)?;
                println!("{}", "Appointment booked.".green());
            }
            BookingsAction::List => {
                let fetched = self.bookings.fetch_bookings().await.map(|_| ());
                self.surface(fetched)?;
                for booking in self.bookings.bookings() {
                    println!(
                        "[{}] {} - {}",
                        booking.id,
                        booking.name.as_deref().unwrap_or("(unnamed)"),
                        booking.status.as_deref().unwrap_or("pending")
                    );
                }
            }
        }
        Ok(())
    }

    async fn handle_pay(&mut self, action: PayAction) -> Result<()> {
        match action {
            PayAction::CreateLink {
                amount,
                currency,
                email,
                name,
                description,
            } => {
                let order = PaymentOrder {
                    amount,
                    currency,
                    email,
                    name,
                    description,
                };
                let result = self.payments.create_link(&order).await;
                let link = self.surface(result)?;
                match link.url {
                    Some(url) => println!("{} {url}", "Payment link:".green()),
                    None => println!("{}", "Payment link created.".green()),
                }
            }
            PayAction::Callback { params } => {
                let mut query = Vec::new();
                for param in &params {
                    let Some((key, value)) = param.split_once('=') else {
                        anyhow::bail!("invalid callback parameter (expected key=value): {param}");
                    };
                    query.push((key.to_string(), value.to_string()));
                }
                let result = self.payments.process_callback(&query).await;
                let status = self.surface(result)?;
                println!(
                    "{} {}",
                    "Payment status:".green(),
                    status.status.as_deref().unwrap_or("unknown")
                );
                if let Some(message) = &status.message {
                    println!("{message}");
                }
            }
        }
        Ok(())
    }
}

fn display_name<'a>(name: &'a str, email: &'a str) -> &'a str {
    if name.is_empty() {
        email
    } else {
        name
    }
}
