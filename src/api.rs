use crate::{
    api_model::AppState,
    config::Config,
    error::RenderError,
    model::{StoryGraph, StoryNode, BLANK_ARC},
};
use anyhow::{Context, Result};
use askama::Template;
use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;

#[derive(Template)]
#[template(path = "story.html")]
struct StoryPage<'a> {
    node: &'a StoryNode,
}

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(show_intro))
        .route("/*arc", get(show_arc))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[auto_context::auto_context]
pub async fn serve(config: &Config, story: Arc<StoryGraph>) -> Result<()> {
    let app = routes(AppState::new(story, config.intro.clone()));
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, intro = %config.intro, "story server started");
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

pub async fn show_intro(State(state): State<AppState>) -> Response {
    process_page(show_arc_inner(&state, "/"))
}

pub async fn show_arc(
    State(state): State<AppState>,
    arc: Result<Path<String>, PathRejection>,
) -> Response {
    match arc {
        Ok(Path(arc)) => process_page(show_arc_inner(&state, &arc)),
        Err(rejection) => {
            tracing::warn!(%rejection, "undecodable arc, rendering a blank page");
            process_page(render_arc(&BLANK_ARC))
        }
    }
}

fn show_arc_inner(state: &AppState, path: &str) -> Result<String, RenderError> {
    let id = resolve(path, &state.intro);
    let node = match state.story.get(id) {
        Some(node) => node,
        None => {
            tracing::warn!(arc = id, "unknown arc, rendering a blank page");
            state.story.arc(id)
        }
    };
    render_arc(node)
}

/// Maps a request path to an arc identifier. The root path is the
/// introduction.
pub fn resolve<'a>(path: &'a str, intro: &'a str) -> &'a str {
    let id = path.strip_prefix('/').unwrap_or(path);
    if id.is_empty() {
        intro
    } else {
        id
    }
}

pub fn render_arc(node: &StoryNode) -> Result<String, RenderError> {
    Ok(StoryPage { node }.render()?)
}

pub fn process_page(page: Result<String, RenderError>) -> Response {
    match page {
        Ok(body) => Html(body).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "story page not rendered");
            (StatusCode::INTERNAL_SERVER_ERROR, "failed to render story page").into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StoryOption;
    use axum::body::to_bytes;

    #[test]
    fn resolve_strips_one_leading_slash() {
        assert_eq!(resolve("/door", "intro"), "door");
        assert_eq!(resolve("door", "intro"), "door");
        assert_eq!(resolve("//door", "intro"), "/door");
    }

    #[test]
    fn resolve_falls_back_to_intro() {
        assert_eq!(resolve("/", "intro"), "intro");
        assert_eq!(resolve("", "prologue"), "prologue");
    }

    #[test]
    fn renders_paragraphs_and_option_links() {
        let node = StoryNode {
            title: "Crossroads".to_owned(),
            story: vec!["Two paths.".to_owned(), "Pick one.".to_owned()],
            options: vec![
                StoryOption {
                    text: "Go left".to_owned(),
                    arc: "left".to_owned(),
                },
                StoryOption {
                    text: "Go right".to_owned(),
                    arc: "right".to_owned(),
                },
            ],
        };
        let page = render_arc(&node).unwrap();
        assert!(page.contains("<h1>Crossroads</h1>"));
        assert!(page.contains("<p>Two paths.</p>"));
        assert!(page.contains("<p>Pick one.</p>"));
        assert!(page.contains(r#"<a href="/left">Go left</a>"#));
        assert!(page.contains(r#"<a href="/right">Go right</a>"#));
    }

    #[test]
    fn escapes_story_text() {
        let node = StoryNode {
            title: "<script>".to_owned(),
            ..Default::default()
        };
        let page = render_arc(&node).unwrap();
        assert!(!page.contains("<script>"));
        assert!(page.contains("&lt;script&gt;"));
    }

    #[test]
    fn blank_node_has_no_links() {
        let page = render_arc(&StoryNode::default()).unwrap();
        assert!(page.contains("<h1></h1>"));
        assert!(!page.contains("<a "));
        assert!(!page.contains("<p>"));
    }

    #[tokio::test]
    async fn render_failure_is_a_bare_500() {
        let resp = process_page(Err(RenderError(askama::Error::Custom("boom".into()))));
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"failed to render story page");
    }

    #[test]
    fn option_links_are_percent_encoded() {
        let node = StoryNode {
            title: "Hall".to_owned(),
            story: vec![],
            options: vec![StoryOption {
                text: "Enter".to_owned(),
                arc: "dark room?#1".to_owned(),
            }],
        };
        let page = render_arc(&node).unwrap();
        assert!(page.contains(r#"<a href="/dark%20room%3F%231">Enter</a>"#));
    }
}
