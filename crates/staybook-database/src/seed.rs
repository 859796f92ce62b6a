//! Deterministic seed data.
//!
//! The seed is rebuilt whenever the stored snapshot is missing, unreadable,
//! or carries another schema version. Passwords are hashed at seed time by
//! the caller-supplied function so this crate stays independent of the
//! credential hashing scheme.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use staybook_core::error::AppError;
use staybook_core::result::AppResult;
use staybook_core::types::{BookingId, ListingId, LocationId, ReviewId, UserId};
use staybook_entity::booking::{Booking, BookingStatus};
use staybook_entity::listing::{DateRange, Listing};
use staybook_entity::location::Location;
use staybook_entity::review::Review;
use staybook_entity::user::{CreateUser, User};

use crate::schema::Database;

/// Password shared by every seeded account.
pub const SEED_PASSWORD: &str = "password123";

/// Availability window given to every seeded listing.
pub fn seed_availability() -> AppResult<DateRange> {
    Ok(DateRange::new(date(2024, 1, 1)?, date(2030, 12, 31)?))
}

struct SeedListing {
    name: &'static str,
    description: &'static str,
    location: u64,
    owner: u64,
    max_guests: u32,
    price: u64,
    rating: f32,
    guest_favorite: bool,
}

const USERS: &[(&str, &str, &str)] = &[
    ("jane.doe@example.com", "Jane", "Doe"),
    ("john.smith@example.com", "John", "Smith"),
    ("maria.garcia@example.com", "Maria", "Garcia"),
];

const LOCATIONS: &[(&str, &str)] = &[
    ("Lisbon", "Portugal"),
    ("Kyoto", "Japan"),
    ("Cape Town", "South Africa"),
    ("Reykjavik", "Iceland"),
];

const LISTINGS: &[SeedListing] = &[
    SeedListing {
        name: "Alfama Rooftop Loft",
        description: "Sunny loft with a terrace over the old town rooftops.",
        location: 1,
        owner: 1,
        max_guests: 2,
        price: 120,
        rating: 4.8,
        guest_favorite: true,
    },
    SeedListing {
        name: "Belem Riverside Apartment",
        description: "Two bedrooms a short walk from the river and the monastery.",
        location: 1,
        owner: 2,
        max_guests: 4,
        price: 95,
        rating: 4.5,
        guest_favorite: false,
    },
    SeedListing {
        name: "Gion Machiya House",
        description: "Restored wooden townhouse with a small inner garden.",
        location: 2,
        owner: 2,
        max_guests: 5,
        price: 210,
        rating: 4.9,
        guest_favorite: true,
    },
    SeedListing {
        name: "Arashiyama Bamboo Retreat",
        description: "Quiet tatami rooms near the bamboo grove.",
        location: 2,
        owner: 3,
        max_guests: 3,
        price: 150,
        rating: 4.6,
        guest_favorite: false,
    },
    SeedListing {
        name: "Camps Bay Ocean Villa",
        description: "Villa with pool and a view of the Twelve Apostles.",
        location: 3,
        owner: 3,
        max_guests: 8,
        price: 340,
        rating: 4.7,
        guest_favorite: true,
    },
    SeedListing {
        name: "Bo-Kaap Colourful Cottage",
        description: "Bright cottage on a cobbled street close to the city centre.",
        location: 3,
        owner: 1,
        max_guests: 2,
        price: 80,
        rating: 4.3,
        guest_favorite: false,
    },
    SeedListing {
        name: "Harbour View Studio",
        description: "Compact studio overlooking the old harbour.",
        location: 4,
        owner: 2,
        max_guests: 2,
        price: 110,
        rating: 4.4,
        guest_favorite: false,
    },
    SeedListing {
        name: "Northern Lights Cabin",
        description: "Timber cabin outside the city with a hot tub and dark skies.",
        location: 4,
        owner: 3,
        max_guests: 6,
        price: 260,
        rating: 4.9,
        guest_favorite: true,
    },
];

/// Builds the seed database. `hash_password` turns [`SEED_PASSWORD`] into
/// the stored credential hash.
pub fn seed_database<H>(hash_password: H) -> AppResult<Database>
where
    H: Fn(&str) -> AppResult<String>,
{
    let created = seeded_at()?;
    let availability = seed_availability()?;
    let mut db = Database::empty();

    for (index, (email, first_name, last_name)) in USERS.iter().enumerate() {
        db.users.push(User::from_create(
            UserId(index as u64 + 1),
            CreateUser {
                email: (*email).to_string(),
                first_name: (*first_name).to_string(),
                last_name: (*last_name).to_string(),
                password_hash: hash_password(SEED_PASSWORD)?,
            },
            created,
        ));
    }

    for (index, (name, country)) in LOCATIONS.iter().enumerate() {
        db.locations.push(Location {
            id: LocationId(index as u64 + 1),
            name: (*name).to_string(),
            country: (*country).to_string(),
            created_at: created,
            modified_at: created,
        });
    }

    for (index, seed) in LISTINGS.iter().enumerate() {
        let id = index as u64 + 1;
        db.listings.push(Listing {
            id: ListingId(id),
            name: seed.name.to_string(),
            description: seed.description.to_string(),
            location_id: LocationId(seed.location),
            images: (1..=3)
                .map(|n| format!("https://picsum.photos/seed/staybook-{id}-{n}/800/600"))
                .collect(),
            availability,
            max_guests: seed.max_guests,
            price: seed.price,
            rating: seed.rating,
            guest_favorite: seed.guest_favorite,
            user_id: UserId(seed.owner),
            created_at: created,
            modified_at: created,
        });
    }

    db.bookings = vec![
        booking(1, 1, 3, (2025, 3, 10), (2025, 3, 14), 2, 210 * 4, BookingStatus::Completed, created)?,
        booking(2, 1, 8, (2026, 2, 1), (2026, 2, 5), 4, 260 * 4, BookingStatus::Completed, created)?,
        booking(3, 2, 1, (2025, 9, 5), (2025, 9, 8), 2, 120 * 3, BookingStatus::Cancelled, created)?,
    ];

    db.reviews = vec![
        review(1, 1, 3, 5, "Beautiful house and a very calm neighbourhood.", created),
        review(2, 2, 3, 4, "Lovely stay, the garden was the highlight.", created),
        review(3, 3, 1, 5, "Best terrace in Lisbon.", created),
        review(4, 1, 8, 5, "We saw the aurora twice. Unforgettable.", created),
    ];

    Ok(db)
}

#[allow(clippy::too_many_arguments)]
fn booking(
    id: u64,
    user: u64,
    listing: u64,
    check_in: (i32, u32, u32),
    check_out: (i32, u32, u32),
    guests: u32,
    total_price: u64,
    status: BookingStatus,
    created: DateTime<Utc>,
) -> AppResult<Booking> {
    Ok(Booking {
        id: BookingId(id),
        user_id: UserId(user),
        listing_id: ListingId(listing),
        check_in: date(check_in.0, check_in.1, check_in.2)?,
        check_out: date(check_out.0, check_out.1, check_out.2)?,
        guests,
        total_price,
        status,
        created_at: created,
        modified_at: created,
    })
}

fn review(
    id: u64,
    user: u64,
    listing: u64,
    rating: u8,
    comment: &str,
    created: DateTime<Utc>,
) -> Review {
    Review {
        id: ReviewId(id),
        user_id: UserId(user),
        listing_id: ListingId(listing),
        rating,
        comment: comment.to_string(),
        created_at: created,
        modified_at: created,
    }
}

fn seeded_at() -> AppResult<DateTime<Utc>> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .single()
        .ok_or_else(|| AppError::internal("Invalid seed timestamp"))
}

fn date(year: i32, month: u32, day: u32) -> AppResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| AppError::internal(format!("Invalid seed date {year}-{month}-{day}")))
}
