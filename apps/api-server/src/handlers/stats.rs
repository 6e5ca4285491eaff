//! Weekly statistics endpoint.

use actix_web::{HttpResponse, web};
use chrono::{Local, Utc};

use corkboard_core::domain::{WeeklyStats, week_start};
use corkboard_shared::dto::WeeklyStatsResponse;

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/stats
///
/// Covers posts created since the most recent Monday 00:00 local time,
/// inclusive, with no upper bound. Recomputed from the store on every call;
/// a store failure fails the whole request instead of reporting zeros.
pub async fn weekly_stats(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let start = week_start(Local::now());
    let digests = state.posts.digests_since(start.with_timezone(&Utc)).await?;
    let stats = WeeklyStats::aggregate(start, &digests);

    Ok(HttpResponse::Ok().json(to_response(stats)))
}

fn to_response(stats: WeeklyStats) -> WeeklyStatsResponse {
    WeeklyStatsResponse {
        week_start: stats.week_start.to_rfc3339(),
        total_posts: stats.total_posts,
        total_characters: stats.total_characters,
        average_characters_per_post: stats.average_characters_per_post,
        posts_by_day: stats
            .posts_by_day
            .into_iter()
            .map(|(day, count)| (day.to_string(), count))
            .collect(),
    }
}
