use crate::support::{
    member, post, product, status, ScriptedBlogGateway, ScriptedBookingGateway,
    ScriptedCatalogGateway, ScriptedPaymentGateway, ScriptedTeamGateway,
};
use application::blog_service::BlogService;
use application::booking_service::BookingService;
use application::catalog_service::CatalogService;
use application::payment_service::PaymentService;
use application::team_service::TeamService;
use domain::models::{
    Booking, BookingRequest, BookingSlot, PaymentLink, PaymentOrder, PaymentStatus, ProductDraft,
    TeamMemberDraft,
};

fn draft(name: &str, price: f64) -> ProductDraft {
    ProductDraft {
        name: name.to_string(),
        price,
        category: None,
        image: None,
        description: None,
    }
}

#[tokio::test]
async fn fetch_replaces_the_collection_wholesale() {
    let gateway = ScriptedCatalogGateway::default();
    gateway.lists.push(Ok(vec![
        product("p1", "Pads", 100.0, Some("Hygiene")),
        product("p2", "Ibuprofen", 200.0, Some("Pain Relief")),
    ]));
    gateway.lists.push(Ok(vec![product("p3", "Clear Blue", 250.0, None)]));
    let mut catalog = CatalogService::new(&gateway);

    catalog.fetch_all().await.unwrap();
    assert_eq!(catalog.count(), 2);
    assert!(!catalog.is_loading());

    catalog.fetch_all().await.unwrap();
    let ids: Vec<&str> = catalog.products().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["p3"]);
}

#[tokio::test]
async fn fetch_failure_records_message_and_keeps_the_old_collection() {
    let gateway = ScriptedCatalogGateway::default();
    gateway
        .lists
        .push(Ok(vec![product("p1", "Pads", 100.0, None)]));
    gateway.lists.push(Err(status(500, Some("database down"))));
    let mut catalog = CatalogService::new(&gateway);

    catalog.fetch_all().await.unwrap();
    assert!(catalog.fetch_all().await.is_err());

    assert_eq!(catalog.last_error(), Some("database down"));
    assert_eq!(catalog.count(), 1);
    assert!(!catalog.is_loading());
}

#[tokio::test]
async fn create_prepends_and_keeps_ids_unique() {
    let gateway = ScriptedCatalogGateway::default();
    gateway
        .lists
        .push(Ok(vec![product("p1", "Pads", 100.0, None)]));
    gateway
        .creates
        .push(Ok(product("p2", "Ibuprofen", 200.0, None)));
    let mut catalog = CatalogService::new(&gateway);
    catalog.fetch_all().await.unwrap();

    catalog.create(&draft("Ibuprofen", 200.0)).await.unwrap();

    let ids: Vec<&str> = catalog.products().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["p2", "p1"]);
}

#[tokio::test]
async fn update_replaces_in_place_preserving_order() {
    let gateway = ScriptedCatalogGateway::default();
    gateway.lists.push(Ok(vec![
        product("p1", "Pads", 100.0, None),
        product("p2", "Ibuprofen", 200.0, None),
        product("p3", "Clear Blue", 250.0, None),
    ]));
    gateway
        .updates
        .push(Ok(product("p2", "Ibuprofen 400mg", 220.0, None)));
    let mut catalog = CatalogService::new(&gateway);
    catalog.fetch_all().await.unwrap();

    catalog
        .update("p2", &draft("Ibuprofen 400mg", 220.0))
        .await
        .unwrap();

    let names: Vec<&str> = catalog.products().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Pads", "Ibuprofen 400mg", "Clear Blue"]);
}

#[tokio::test]
async fn delete_removes_exactly_the_matching_id() {
    let gateway = ScriptedCatalogGateway::default();
    gateway.lists.push(Ok(vec![
        product("p1", "Pads", 100.0, None),
        product("p2", "Ibuprofen", 200.0, None),
    ]));
    gateway.deletes.push(Ok(()));
    let mut catalog = CatalogService::new(&gateway);
    catalog.fetch_all().await.unwrap();

    catalog.remove("p1").await.unwrap();

    let ids: Vec<&str> = catalog.products().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["p2"]);
}

#[tokio::test]
async fn catalog_queries_are_plain_methods_over_the_fetched_state() {
    let gateway = ScriptedCatalogGateway::default();
    gateway.lists.push(Ok(vec![
        product("p1", "Pads", 100.0, Some("Hygiene")),
        product("p2", "Ibuprofen", 200.0, Some("Pain Relief")),
        product("p3", "Clear Blue", 250.0, Some("Reproductive Health")),
    ]));
    let mut catalog = CatalogService::new(&gateway);
    catalog.fetch_all().await.unwrap();

    assert_eq!(catalog.find_by_id("p2").unwrap().name, "Ibuprofen");
    assert!(catalog.find_by_id("p9").is_none());
    assert_eq!(catalog.find_by_name("ibuprofen").unwrap().id, "p2");
    assert_eq!(catalog.by_category("hygiene").len(), 1);
    let mid_range: Vec<&str> = catalog
        .by_price_range(150.0, 220.0)
        .iter()
        .map(|p| p.id.as_str())
        .collect();
    assert_eq!(mid_range, vec!["p2"]);
}

#[tokio::test]
async fn blog_categories_come_back_in_first_seen_order() {
    let gateway = ScriptedBlogGateway::default();
    gateway.lists.push(Ok(vec![
        post("b1", "AI in medication access", Some("Healthcare Innovation")),
        post("b2", "Rural reproductive health", Some("Reproductive Health & Rights")),
        post("b3", "Another innovation piece", Some("Healthcare Innovation")),
        post("b4", "Untagged", None),
    ]));
    let mut blog = BlogService::new(&gateway);
    blog.fetch_all().await.unwrap();

    assert_eq!(
        blog.categories(),
        vec!["Healthcare Innovation", "Reproductive Health & Rights"]
    );
    assert_eq!(blog.by_category("healthcare innovation").len(), 2);
    assert_eq!(
        blog.find_by_title("untagged").map(|p| p.id.as_str()),
        Some("b4")
    );
}

#[tokio::test]
async fn team_departments_and_counts_follow_the_directory() {
    let gateway = ScriptedTeamGateway::default();
    gateway.lists.push(Ok(vec![
        member("m1", "Alice", "Management Team"),
        member("m2", "Bob", "Management Team"),
        member("m3", "Hannah", "Social Media"),
    ]));
    let mut team = TeamService::new(&gateway);
    team.fetch_all().await.unwrap();

    assert_eq!(team.departments(), vec!["Management Team", "Social Media"]);
    assert_eq!(team.by_department("Management Team").len(), 2);
    let counts = team.department_counts();
    assert_eq!(counts.get("Management Team"), Some(&2));
    assert_eq!(counts.get("Social Media"), Some(&1));
}

#[tokio::test]
async fn team_update_failure_keeps_the_member_untouched() {
    let gateway = ScriptedTeamGateway::default();
    gateway.lists.push(Ok(vec![member("m1", "Alice", "Management Team")]));
    gateway.updates.push(Err(status(403, Some("admins only"))));
    let mut team = TeamService::new(&gateway);
    team.fetch_all().await.unwrap();

    let draft = TeamMemberDraft {
        name: "Alice B".to_string(),
        title: "CEO".to_string(),
        department: "Management Team".to_string(),
        image: None,
    };
    assert!(team.update("m1", &draft).await.is_err());
    assert_eq!(team.last_error(), Some("admins only"));
    assert_eq!(team.members()[0].name, "Alice");
}

#[tokio::test]
async fn booking_success_and_error_flags_are_independent_of_fetches() {
    let gateway = ScriptedBookingGateway::default();
    gateway.slot_lists.push(Ok(vec![BookingSlot {
        id: "s1".to_string(),
        date: Some("2026-08-10".to_string()),
        time: Some("09:00".to_string()),
        available: Some(true),
    }]));
    gateway.bookings.push(Ok(Booking {
        id: "bk1".to_string(),
        slot_id: Some("s1".to_string()),
        name: Some("Ada".to_string()),
        email: None,
        phone: None,
        status: Some("confirmed".to_string()),
    }));
    let mut bookings = BookingService::new(&gateway);

    bookings.fetch_slots().await.unwrap();
    assert_eq!(bookings.slots().len(), 1);

    let request = BookingRequest {
        slot_id: "s1".to_string(),
        name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
        phone: "0800".to_string(),
    };
    bookings.book(&request).await.unwrap();
    assert!(bookings.booking_success());
    assert!(bookings.booking_error().is_none());

    bookings.clear_booking_status();
    assert!(!bookings.booking_success());
}

#[tokio::test]
async fn booking_failure_sets_only_the_booking_error() {
    let gateway = ScriptedBookingGateway::default();
    gateway
        .bookings
        .push(Err(status(409, Some("slot already taken"))));
    let mut bookings = BookingService::new(&gateway);

    let request = BookingRequest {
        slot_id: "s1".to_string(),
        name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
        phone: "0800".to_string(),
    };
    assert!(bookings.book(&request).await.is_err());
    assert_eq!(bookings.booking_error(), Some("slot already taken"));
    assert!(!bookings.booking_success());
    assert!(bookings.last_error().is_none());
    assert!(!bookings.is_loading());
}

#[tokio::test]
async fn payment_link_and_callback_results_are_stored() {
    let gateway = ScriptedPaymentGateway::default();
    gateway.links.push(Ok(PaymentLink {
        url: Some("https://pay.example/abc".to_string()),
        reference: Some("ref-1".to_string()),
        message: None,
    }));
    gateway.callbacks.push(Ok(PaymentStatus {
        status: Some("successful".to_string()),
        reference: Some("ref-1".to_string()),
        message: None,
    }));
    let mut payments = PaymentService::new(&gateway);

    let order = PaymentOrder {
        amount: 450.0,
        currency: Some("NGN".to_string()),
        email: Some("ada@example.com".to_string()),
        name: None,
        description: None,
    };
    payments.create_link(&order).await.unwrap();
    assert_eq!(
        payments.payment_link().and_then(|l| l.url.as_deref()),
        Some("https://pay.example/abc")
    );

    let params = vec![("reference".to_string(), "ref-1".to_string())];
    payments.process_callback(&params).await.unwrap();
    assert_eq!(
        payments.payment_status().and_then(|s| s.status.as_deref()),
        Some("successful")
    );

    payments.clear_payment();
    assert!(payments.payment_link().is_none());
    assert!(payments.payment_status().is_none());
}

#[tokio::test]
async fn payment_failure_records_the_backend_message() {
    let gateway = ScriptedPaymentGateway::default();
    gateway
        .links
        .push(Err(status(422, Some("amount below minimum"))));
    let mut payments = PaymentService::new(&gateway);

    let order = PaymentOrder {
        amount: 1.0,
        currency: None,
        email: None,
        name: None,
        description: None,
    };
    assert!(payments.create_link(&order).await.is_err());
    assert_eq!(payments.last_error(), Some("amount below minimum"));
    assert!(!payments.is_loading());
}
