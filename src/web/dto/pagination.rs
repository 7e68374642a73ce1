use serde::Deserialize;

use crate::{
    model::{PageRequest, ResourceType},
    web::{WebError, WebResult},
};

#[derive(Debug, Clone, Copy, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// 1-based page number, defaults to 1
    pub page: Option<i64>,
    /// Page size in `1..=100`, defaults to 20
    pub limit: Option<i64>,
}

impl PageQuery {
    pub fn validate(&self, resource_type: ResourceType) -> WebResult<PageRequest> {
        let page = self.page.unwrap_or(1);
        let limit = self.limit.unwrap_or(PageRequest::DEFAULT_LIMIT);

        PageRequest::new(page, limit).ok_or_else(|| {
            WebError::resource_bad_request(
                resource_type,
                format!(
                    "page must be in 1..={} and limit in 1..={}",
                    PageRequest::MAX_PAGE,
                    PageRequest::MAX_LIMIT
                ),
            )
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn defaults_apply() {
        let req = PageQuery::default().validate(ResourceType::User).unwrap();
        assert_eq!(req, PageRequest::default());
    }

    #[test]
    fn out_of_range_is_bad_request() {
        for (page, limit) in [
            (Some(0), None),
            (None, Some(0)),
            (None, Some(101)),
            (Some(-3), Some(5)),
            (Some(i64::MAX), Some(1)),
            (Some(PageRequest::MAX_PAGE + 1), Some(100)),
        ] {
            let err = PageQuery { page, limit }
                .validate(ResourceType::User)
                .unwrap_err();
            assert_eq!(err.status_code(), axum::http::StatusCode::BAD_REQUEST);
        }
    }
}
