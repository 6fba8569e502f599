//! Front page: the pathway search form.

use axum::{
    extract::{ConnectInfo, State},
    http::Uri,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use minijinja::context;
use serde::Deserialize;
use std::net::SocketAddr;

use crate::error::WebError;
use crate::handlers::{href, log_request};
use crate::state::SharedState;

#[derive(Debug, Deserialize)]
pub struct PathwayForm {
    #[serde(default)]
    pub pathway_name: String,
}

pub async fn index_page(
    State(state): State<SharedState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    uri: Uri,
) -> Result<Html<String>, WebError> {
    log_request(addr, &uri);
    let page = state.templates.get_template("index.html")?.render(context! {})?;
    Ok(Html(page))
}

/// POST /: redirect to the search page, or re-show the form for blank input.
pub async fn index_submit(
    State(state): State<SharedState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    uri: Uri,
    Form(form): Form<PathwayForm>,
) -> Result<Response, WebError> {
    log_request(addr, &uri);
    if form.pathway_name.trim().is_empty() {
        let page = state.templates.get_template("index.html")?.render(context! {
            message => "Please enter a pathway name or part of it.",
        })?;
        return Ok(Html(page).into_response());
    }
    Ok(Redirect::to(&href("/search", &form.pathway_name)).into_response())
}
