use axum::{extract::State, response::Html};

use crate::{web::WebResult, AppState};

#[derive(Debug, thiserror::Error)]
pub enum HomeError {
    #[error("tera template render error: {0}")]
    Tera(#[from] tera::Error),
}

#[tracing::instrument(name = "home", skip_all)]
pub async fn home(State(app_state): State<AppState>) -> WebResult<Html<String>> {
    let ctx = tera::Context::from_serialize(&app_state.landing).map_err(HomeError::Tera)?;

    let body = app_state
        .templ_mgr
        .render_html_to_string(&ctx, "home.html")
        .map_err(HomeError::Tera)?;

    Ok(Html(body))
}
