use axum::{extract::Query, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};

use crate::job_market::{filter_by_location, market_for_role, trending_roles, RoleMarket, TrendingRole};

#[derive(Debug, Deserialize)]
pub struct JobMarketQuery {
    pub role: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleMarketResponse {
    #[serde(flatten)]
    pub market: RoleMarket,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filtered_by_location: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendingRolesResponse {
    pub trending_roles: Vec<TrendingRole>,
}

/// GET /api/v1/job-market?role=&location=
///
/// With `role`: that role's simulated market, optionally filtered by location.
/// Without: the trending roles summary.
pub async fn handle_job_market(Query(query): Query<JobMarketQuery>) -> impl IntoResponse {
    let role = query.role.as_deref().map(str::trim).filter(|r| !r.is_empty());

    let Some(role) = role else {
        return Json(TrendingRolesResponse {
            trending_roles: trending_roles(),
        })
        .into_response();
    };

    let market = market_for_role(role);
    let response = match query.location.as_deref().map(str::trim) {
        Some(location) if !location.is_empty() && !location.eq_ignore_ascii_case("all") => {
            RoleMarketResponse {
                market: filter_by_location(market, location),
                filtered_by_location: Some(location.to_string()),
            }
        }
        _ => RoleMarketResponse {
            market,
            filtered_by_location: None,
        },
    };

    Json(response).into_response()
}
