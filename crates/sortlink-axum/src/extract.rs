//! Extractors bridging an axum request to the framework-free rendering
//! core: `SortContext` captures the request snapshot links render against,
//! `CurrentSort` hands the validated sort key and direction to the
//! handler's own query layer.

use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use std::convert::Infallible;

use crate::error::AppError;
use sortlink_core::config::SortConfig;
use sortlink_core::request::RequestContext;
use sortlink_core::types::{Direction, SortKey};

// ---------------------------------------------------------------------------
// SortContext
// ---------------------------------------------------------------------------

/// Per-request snapshot for link rendering: the path plus decoded query
/// pairs. Infallible; always extractable.
#[derive(Debug, Clone)]
pub struct SortContext(pub RequestContext);

impl<S> FromRequestParts<S> for SortContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let ctx =
            RequestContext::from_query_str(parts.uri.path(), parts.uri.query().unwrap_or(""));
        tracing::debug!(
            path = ctx.path(),
            sort = ?ctx.sort(),
            direction = ?ctx.direction(),
            "captured sort context"
        );
        Ok(Self(ctx))
    }
}

impl std::ops::Deref for SortContext {
    type Target = RequestContext;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

// ---------------------------------------------------------------------------
// CurrentSort
// ---------------------------------------------------------------------------

/// The request's sort order, parsed and validated for the handler's data
/// layer. A malformed sort key rejects with 400; a missing or invalid
/// direction is simply absent.
#[derive(Debug, Clone, Default)]
pub struct CurrentSort {
    pub sort: Option<SortKey>,
    pub direction: Option<Direction>,
}

impl<S> FromRequestParts<S> for CurrentSort
where
    S: Send + Sync,
    SortConfig: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let config = SortConfig::from_ref(state);
        let ctx =
            RequestContext::from_query_str(parts.uri.path(), parts.uri.query().unwrap_or(""));

        let sort = match ctx.sort() {
            Some(raw) => Some(SortKey::parse(raw, &config.relation_separator)?),
            None => None,
        };

        Ok(Self {
            sort,
            direction: ctx.direction(),
        })
    }
}
