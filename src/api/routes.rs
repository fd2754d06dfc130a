use axum::Json;
use serde::{Deserialize, Serialize};

/// Standard success envelope: `success: true` with the response body
/// flattened alongside it.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(flatten)]
    pub body: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a success response with the given body
    pub fn success(body: T) -> Json<Self> {
        Json(Self {
            success: true,
            body,
        })
    }
}

/// Pagination parameters
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Standard pagination implementation
impl PaginationParams {
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(50).clamp(1, 100)
    }

    pub fn offset(&self) -> i64 {
        self.offset.unwrap_or(0).max(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Body {
        id: i32,
    }

    #[test]
    fn envelope_flattens_the_body() {
        let Json(response) = ApiResponse::success(Body { id: 7 });
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["id"], 7);
    }

    #[test]
    fn pagination_clamps_to_sane_bounds() {
        let params = PaginationParams {
            limit: Some(100_000),
            offset: Some(-5),
        };
        assert_eq!(params.limit(), 100);
        assert_eq!(params.offset(), 0);

        let defaults = PaginationParams::default();
        assert_eq!(defaults.limit(), 50);
        assert_eq!(defaults.offset(), 0);

        let zero = PaginationParams {
            limit: Some(0),
            offset: None,
        };
        assert_eq!(zero.limit(), 1);
    }
}
