// src/idx/fallback.rs
//
// Listings shown when the MLS feed is unreachable. Already in canonical
// shape; returned verbatim.

use crate::domain::listing::{GeoLocation, Listing, ListingDetails, PLACEHOLDER_IMAGE};
use crate::domain::Price;

struct Seed {
    id: &'static str,
    address: &'static str,
    city: &'static str,
    zip: &'static str,
    price: u64,
    beds: u32,
    baths: u32,
    sqft: u32,
    year_built: i32,
    lot_size: f64,
    property_type: &'static str,
    garage_spaces: f64,
    status: &'static str,
    description: &'static str,
}

const SEEDS: &[Seed] = &[
    Seed {
        id: "fallback-1",
        address: "1421 8th St S, Fargo, ND 58103",
        city: "Fargo",
        zip: "58103",
        price: 289_900,
        beds: 3,
        baths: 2,
        sqft: 1_820,
        year_built: 1958,
        lot_size: 0.17,
        property_type: "Single Family",
        garage_spaces: 2.0,
        status: "For Sale",
        description: "Updated rambler a few blocks from downtown Fargo.",
    },
    Seed {
        id: "fallback-2",
        address: "3250 Bluestem Dr, West Fargo, ND 58078",
        city: "West Fargo",
        zip: "58078",
        price: 459_000,
        beds: 4,
        baths: 3,
        sqft: 2_960,
        year_built: 2016,
        lot_size: 0.24,
        property_type: "Single Family",
        garage_spaces: 3.0,
        status: "For Sale",
        description: "Two-story in the Eagle Run neighborhood with a finished basement.",
    },
    Seed {
        id: "fallback-3",
        address: "1120 Main Ave #304, Moorhead, MN 56560",
        city: "Moorhead",
        zip: "56560",
        price: 184_500,
        beds: 2,
        baths: 1,
        sqft: 1_050,
        year_built: 2004,
        lot_size: 0.0,
        property_type: "Condo",
        garage_spaces: 1.0,
        status: "Pending",
        description: "Third-floor condo with river views and heated parking.",
    },
    Seed {
        id: "fallback-4",
        address: "4702 36th Ave S, Fargo, ND 58104",
        city: "Fargo",
        zip: "58104",
        price: 1_650,
        beds: 2,
        baths: 2,
        sqft: 1_200,
        year_built: 2019,
        lot_size: 0.0,
        property_type: "Rental",
        garage_spaces: 1.0,
        status: "For Rent",
        description: "Townhome rental near Osgood with in-unit laundry.",
    },
    Seed {
        id: "fallback-5",
        address: "2905 Rose Creek Pkwy, Fargo, ND 58104",
        city: "Fargo",
        zip: "58104",
        price: 725_000,
        beds: 5,
        baths: 4,
        sqft: 4_310,
        year_built: 2008,
        lot_size: 0.42,
        property_type: "Single Family",
        garage_spaces: 3.0,
        status: "Sold",
        description: "Golf-course lot on Rose Creek with a walkout lower level.",
    },
];

pub fn fallback_listings() -> Vec<Listing> {
    SEEDS.iter().map(to_listing).collect()
}

fn to_listing(seed: &Seed) -> Listing {
    let state = if seed.city == "Moorhead" { "MN" } else { "ND" };

    Listing {
        id: seed.id.to_string(),
        address: seed.address.to_string(),
        price: Price::from_dollars(seed.price),
        beds: seed.beds,
        baths: seed.baths,
        sqft: seed.sqft,
        year_built: seed.year_built,
        lot_size: seed.lot_size,
        property_type: seed.property_type.to_string(),
        garage_spaces: seed.garage_spaces,
        images: vec![PLACEHOLDER_IMAGE.to_string()],
        status: seed.status.to_string(),
        details: ListingDetails {
            description: Some(seed.description.to_string()),
            location: Some(GeoLocation {
                city: Some(seed.city.to_string()),
                state: Some(state.to_string()),
                zip: Some(seed.zip.to_string()),
                ..Default::default()
            }),
            ..Default::default()
        },
    }
}
