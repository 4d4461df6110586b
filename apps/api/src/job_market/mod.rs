//! Simulated job market data per role. Static tables, no external feeds.

pub mod data;
pub mod handlers;

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct JobPosting {
    pub id: &'static str,
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    #[serde(rename = "type")]
    pub employment_type: &'static str,
    pub salary: &'static str,
    pub posted: &'static str,
    pub skills: &'static [&'static str],
    pub description: &'static str,
    pub url: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleMarket {
    pub total_jobs: u32,
    pub growth_rate: &'static str,
    pub avg_salary: &'static str,
    pub top_locations: &'static [&'static str],
    pub trending: bool,
    pub jobs: Vec<JobPosting>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendingRole {
    pub role: &'static str,
    pub total_jobs: u32,
    pub growth_rate: &'static str,
    pub avg_salary: &'static str,
}

/// Market data for `role`, or the generic entry for roles without their own table.
/// Role lookup is exact, matching how role names are passed around.
pub fn market_for_role(role: &str) -> RoleMarket {
    data::ROLE_MARKETS
        .iter()
        .find(|(name, _)| *name == role)
        .map(|(_, market)| market.clone())
        .unwrap_or_else(|| data::DEFAULT_MARKET.clone())
}

/// Keeps postings whose location contains `location`, ignoring case.
/// `"all"` keeps everything.
pub fn filter_by_location(mut market: RoleMarket, location: &str) -> RoleMarket {
    if location.eq_ignore_ascii_case("all") {
        return market;
    }
    let needle = location.to_lowercase();
    market
        .jobs
        .retain(|job| job.location.to_lowercase().contains(&needle));
    market
}

/// Roles flagged as trending, in table order.
pub fn trending_roles() -> Vec<TrendingRole> {
    data::ROLE_MARKETS
        .iter()
        .filter(|(_, market)| market.trending)
        .map(|(role, market)| TrendingRole {
            role: *role,
            total_jobs: market.total_jobs,
            growth_rate: market.growth_rate,
            avg_salary: market.avg_salary,
        })
        .collect()
}
