//! Fixed sample data the store starts from on every launch. There is no
//! persistence layer, so this is the entire universe until the user edits it.

use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::models::{
    Appointment, Category, Contract, Expense, Message, Payment, PaymentStatus, Sender, Vendor,
};

/// Overall wedding budget the category allocations were drawn against.
pub(super) fn total_budget() -> Decimal {
    Decimal::from(25_000)
}

/// Category choices offered when adding a vendor.
pub(crate) const VENDOR_CATEGORIES: &[&str] = &[
    "Florist",
    "Photographer",
    "Venue",
    "Catering",
    "Music",
    "Cake",
    "Attire",
    "Invitations",
    "Decorations",
    "Transportation",
    "Videographer",
    "Hair & Makeup",
    "Officiant",
];

fn category(id: i64, name: &str, budget: i64, spent: i64, percentage: i64) -> Category {
    Category {
        id: Some(id),
        name: name.into(),
        budget: Decimal::from(budget),
        spent: Decimal::from(spent),
        percentage,
    }
}

pub(super) fn categories() -> Vec<Category> {
    vec![
        category(1, "Venue", 10_000, 5_000, 40),
        category(2, "Catering", 5_000, 2_500, 20),
        category(3, "Photography", 3_000, 1_500, 12),
        category(4, "Flowers", 2_000, 1_000, 8),
        category(5, "Music", 1_500, 750, 6),
        category(6, "Attire", 2_000, 1_000, 8),
        category(7, "Cake", 500, 250, 2),
        category(8, "Invitations", 500, 250, 2),
        category(9, "Decorations", 500, 200, 2),
    ]
}

fn expense(id: i64, cat: &str, vendor: &str, description: &str, amount: i64, date: &str) -> Expense {
    Expense {
        id: Some(id),
        category: cat.into(),
        vendor: vendor.into(),
        description: description.into(),
        amount: Decimal::from(amount),
        date: date.into(),
    }
}

pub(super) fn expenses() -> Vec<Expense> {
    vec![
        expense(1, "Venue", "Grand Venue", "Venue deposit", 5_000, "2023-05-15"),
        expense(2, "Catering", "Sunset Catering", "Catering deposit", 2_500, "2023-05-20"),
        expense(3, "Photography", "Dreamy Photography", "Photography package", 1_500, "2023-06-01"),
        expense(4, "Flowers", "Elegant Flowers", "Floral arrangements", 1_000, "2023-06-10"),
        expense(5, "Music", "Melody Makers", "DJ services", 750, "2023-06-15"),
        expense(6, "Attire", "Bridal Boutique", "Wedding dress", 1_000, "2023-07-01"),
        expense(7, "Cake", "Sweet Delights Bakery", "Wedding cake", 250, "2023-07-10"),
        expense(8, "Invitations", "Paper Co.", "Wedding invitations", 250, "2023-07-15"),
        expense(9, "Decorations", "Decor Plus", "Table centerpieces", 200, "2023-07-20"),
    ]
}

#[allow(clippy::too_many_arguments)]
fn payment(
    id: i64,
    vendor: &str,
    description: &str,
    amount: i64,
    due_date: &str,
    status: PaymentStatus,
    payment_date: Option<&str>,
    payment_method: Option<&str>,
) -> Payment {
    Payment {
        id: Some(id),
        vendor: vendor.into(),
        description: description.into(),
        amount: Decimal::from(amount),
        due_date: due_date.into(),
        status,
        payment_date: payment_date.map(Into::into),
        payment_method: payment_method.map(Into::into),
    }
}

pub(super) fn payments() -> Vec<Payment> {
    use PaymentStatus::{Paid, Pending};
    vec![
        payment(1, "Grand Venue", "Venue deposit", 5_000, "2023-05-15", Paid, Some("2023-05-10"), Some("Credit Card")),
        payment(2, "Grand Venue", "Venue final payment", 5_000, "2023-12-15", Pending, None, None),
        payment(3, "Sunset Catering", "Catering deposit", 2_500, "2023-05-20", Paid, Some("2023-05-18"), Some("Bank Transfer")),
        payment(4, "Sunset Catering", "Catering final payment", 2_500, "2023-12-01", Pending, None, None),
        payment(5, "Dreamy Photography", "Photography package", 3_000, "2023-06-01", Paid, Some("2023-05-30"), Some("Credit Card")),
        payment(6, "Elegant Flowers", "Floral arrangements deposit", 1_000, "2023-06-10", Paid, Some("2023-06-08"), Some("Credit Card")),
        payment(7, "Elegant Flowers", "Floral arrangements final payment", 1_000, "2023-11-10", Pending, None, None),
        payment(8, "Melody Makers", "DJ services", 1_500, "2023-07-15", Pending, None, None),
    ]
}

fn contract(id: i64, vendor: &str, kind: &str, signed: &str, expires: &str, file: &str) -> Contract {
    Contract {
        id: Some(id),
        vendor: vendor.into(),
        kind: kind.into(),
        signed_date: signed.into(),
        expiration_date: expires.into(),
        file_name: file.into(),
    }
}

pub(super) fn contracts() -> Vec<Contract> {
    vec![
        contract(1, "Grand Venue", "Venue", "2023-05-15", "2024-06-30", "grand_venue_contract.pdf"),
        contract(2, "Sunset Catering", "Catering", "2023-05-20", "2024-06-15", "sunset_catering_contract.pdf"),
        contract(3, "Dreamy Photography", "Photography", "2023-06-01", "2024-06-20", "dreamy_photography_contract.pdf"),
        contract(4, "Elegant Flowers", "Florist", "2023-06-10", "2024-06-10", "elegant_flowers_contract.pdf"),
        contract(5, "Melody Makers", "Music", "2023-06-15", "2024-06-25", "melody_makers_contract.pdf"),
    ]
}

fn appointment(id: i64, vendor: &str, kind: &str, date: &str, time: &str, notes: &str) -> Appointment {
    Appointment {
        id: Some(id),
        vendor: vendor.into(),
        kind: kind.into(),
        date: date.into(),
        time: time.into(),
        notes: notes.into(),
    }
}

pub(super) fn appointments() -> Vec<Appointment> {
    vec![
        appointment(1, "Grand Venue", "Venue Visit", "2023-06-15", "10:00 AM", "Final walkthrough of the venue"),
        appointment(2, "Sunset Catering", "Food Tasting", "2023-07-10", "2:00 PM", "Tasting for main course options"),
        appointment(3, "Sweet Delights Bakery", "Cake Tasting", "2023-07-15", "11:00 AM", "Tasting for wedding cake flavors"),
        appointment(4, "Elegant Flowers", "Floral Consultation", "2023-07-20", "3:00 PM", "Discuss centerpiece and bouquet options"),
    ]
}

#[allow(clippy::too_many_arguments)]
fn vendor(
    id: i64,
    name: &str,
    cat: &str,
    rating: u8,
    description: &str,
    is_favorite: bool,
    notes: &str,
) -> Vendor {
    Vendor {
        id: Some(id),
        name: name.into(),
        category: cat.into(),
        rating,
        description: description.into(),
        is_favorite,
        notes: notes.into(),
    }
}

pub(super) fn vendors() -> Vec<Vendor> {
    vec![
        vendor(
            1,
            "Elegant Flowers",
            "Florist",
            5,
            "Specializing in elegant floral arrangements for weddings.",
            true,
            "Met with them on March 15. They have great options for centerpieces.",
        ),
        vendor(
            2,
            "Dreamy Photography",
            "Photographer",
            4,
            "Capturing your special moments with artistic flair.",
            false,
            "Portfolio looks amazing. Need to discuss package options.",
        ),
        vendor(
            3,
            "Grand Venue",
            "Venue",
            4,
            "Luxurious wedding venue with stunning views.",
            true,
            "Visited on April 2. Beautiful location but check availability for June.",
        ),
        vendor(
            4,
            "Sunset Catering",
            "Catering",
            3,
            "Delicious food options for your wedding reception.",
            false,
            "Food tasting scheduled for next month. Ask about dietary restrictions.",
        ),
        vendor(
            5,
            "Melody Makers",
            "Music",
            5,
            "Live band and DJ services for wedding entertainment.",
            false,
            "Heard them play at Sarah's wedding. Great playlist options.",
        ),
        vendor(
            6,
            "Sweet Delights Bakery",
            "Cake",
            4,
            "Custom wedding cakes and dessert tables.",
            true,
            "Cake tasting was amazing. Considering the 3-tier option with fondant.",
        ),
    ]
}

fn message(id: i64, sender: Sender, text: &str, timestamp: &str) -> Message {
    Message {
        id,
        sender,
        text: text.into(),
        timestamp: timestamp.into(),
    }
}

pub(super) fn threads() -> BTreeMap<i64, Vec<Message>> {
    use Sender::{User, Vendor};
    let mut threads = BTreeMap::new();
    threads.insert(
        1,
        vec![
            message(1, Vendor, "Hello! Thank you for your interest in our floral services. How can we help with your wedding?", "2023-05-15T10:30:00"),
            message(2, User, "Hi! I'm interested in discussing centerpiece options for my wedding in June.", "2023-05-15T10:35:00"),
            message(3, Vendor, "Great! We have several beautiful options for June weddings. Would you prefer seasonal flowers or a specific color scheme?", "2023-05-15T10:40:00"),
            message(4, User, "I'm thinking of a blush and ivory color scheme. Do you have any examples you could share?", "2023-05-15T10:45:00"),
            message(5, Vendor, "Blush and ivory is a beautiful combination. I'll send over some examples of centerpieces we've done in those colors. Would you also like to see some bouquet options?", "2023-05-15T10:50:00"),
        ],
    );
    threads.insert(
        3,
        vec![
            message(1, Vendor, "Thank you for your interest in Grand Venue! We'd be honored to host your special day.", "2023-05-10T14:00:00"),
            message(2, User, "Thanks for getting back to me. I'm wondering if you have availability on June 15th next year?", "2023-05-10T14:10:00"),
            message(3, Vendor, "Let me check our calendar. Yes, we do have that date available! Would you like to schedule a tour of the venue?", "2023-05-10T14:15:00"),
            message(4, User, "That would be great. What times do you have available for tours next week?", "2023-05-10T14:20:00"),
        ],
    );
    threads.insert(
        4,
        vec![
            message(1, User, "Hello, I'm interested in your catering services for my wedding next June.", "2023-05-20T09:00:00"),
            message(2, Vendor, "Hi there! We'd love to cater your wedding. Our team specializes in creating memorable dining experiences. Do you have a specific cuisine in mind?", "2023-05-20T09:15:00"),
            message(3, User, "We're thinking of a Mediterranean-inspired menu. Do you offer that?", "2023-05-20T09:20:00"),
        ],
    );
    threads
}
