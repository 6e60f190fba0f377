// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Display-ready values for the profile header and seller tab.

use crate::display_utils::{format_idr, format_rating, initials};
use crate::models::{SellerStats, User};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileView {
    pub full_name: String,
    /// Avatar fallback when there is no picture
    pub initials: String,
    pub rating: String,
    pub total_reviews: u32,
    pub phone_verified: bool,
    pub bio: Option<String>,
    /// Present for sellers only
    pub seller: Option<SellerView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SellerView {
    pub total_services: u32,
    pub active_orders: u32,
    pub completed_orders: u32,
    pub total_revenue: String,
}

impl ProfileView {
    /// Build the view. Sellers whose stats failed to load show zeroes.
    pub fn new(user: &User, stats: Option<&SellerStats>) -> Self {
        let seller = user.is_seller.then(|| {
            let counters = stats.map(|s| s.stats.clone()).unwrap_or_default();
            SellerView {
                total_services: counters.total_services,
                active_orders: counters.active_orders,
                completed_orders: counters.completed_orders,
                total_revenue: format_idr(counters.total_revenue),
            }
        });

        Self {
            full_name: user.full_name.clone(),
            initials: initials(&user.full_name),
            rating: format_rating(&user.rating, 1),
            total_reviews: user.total_reviews,
            phone_verified: user.phone_verified(),
            bio: user.bio.clone().filter(|bio| !bio.is_empty()),
            seller,
        }
    }
}
