//! Seller dashboard statistics.

use serde::{Deserialize, Serialize};

use super::lenient::{null_as_default, number_or_string};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Payload of `GET /api/users/seller/stats` (inside the `data` envelope).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct SellerStats {
    #[serde(default, deserialize_with = "null_as_default")]
    pub stats: SellerCounters,
}

/// Aggregate counters for one seller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct SellerCounters {
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_services: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub active_orders: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub completed_orders: u32,
    /// Revenue in rupiah. Decimal columns come through as strings.
    #[serde(default, deserialize_with = "number_or_string")]
    pub total_revenue: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_revenue_as_decimal_string() {
        let stats: SellerStats = serde_json::from_value(json!({
            "stats": {
                "totalServices": 2,
                "activeOrders": null,
                "completedOrders": 9,
                "totalRevenue": "150000.00"
            }
        }))
        .unwrap();

        assert_eq!(stats.stats.total_services, 2);
        assert_eq!(stats.stats.active_orders, 0);
        assert_eq!(stats.stats.total_revenue, 150_000.0);
    }

    #[test]
    fn test_null_stats_are_zero() {
        let stats: SellerStats = serde_json::from_value(json!({"stats": null})).unwrap();
        assert_eq!(stats, SellerStats::default());
    }
}
